pub mod fixture_writer;
pub mod generator;

pub use fixture_writer::{OutputTarget, to_pretty_json, write_fixture};
pub use generator::CourseGenerator;
