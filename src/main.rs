use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_fixtures::config::FixtureConfig;
use course_fixtures::services::{CourseGenerator, OutputTarget, write_fixture};

#[derive(Debug, Parser)]
#[command(version, about = "Generate sample course fixtures as a JSON array", long_about = None)]
struct Cli {
    /// Number of courses to generate
    #[arg(short = 'n', long)]
    count: Option<u32>,

    /// Output file path. Use '-' for stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn resolve(self, base: FixtureConfig) -> FixtureConfig {
        base.with_overrides(self.count, self.output, self.seed)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "course_fixtures=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.resolve(FixtureConfig::new_from_env()?);
    info!("Using config: {:?}", config);

    let mut generator = match config.seed {
        Some(seed) => CourseGenerator::from_seed(seed),
        None => CourseGenerator::from_entropy(),
    };
    let courses = generator.generate_now(config.count);

    let target = OutputTarget::from_path(&config.output);
    write_fixture(&courses, &target)?;

    match &target {
        OutputTarget::Stdout => eprintln!("Successfully generated {} courses in {}", courses.len(), target),
        OutputTarget::File(path) => println!(
            "Successfully generated {} courses in {}",
            courses.len(),
            path.display()
        ),
    }

    Ok(())
}
