pub mod course;

pub use course::{Category, Course, CourseType, GradeRange};
