use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::AppError;

pub const DEFAULT_COUNT: u32 = 50;
pub const DEFAULT_OUTPUT_PATH: &str = "src/main/resources/sample-courses.json";

pub const COUNT_VAR: &str = "COURSE_FIXTURE_COUNT";
pub const PATH_VAR: &str = "COURSE_FIXTURE_PATH";
pub const SEED_VAR: &str = "COURSE_FIXTURE_SEED";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureConfig {
    pub count: u32,
    pub output: PathBuf,
    pub seed: Option<u64>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: None,
        }
    }
}

impl FixtureConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Applies variables from `lookup` on top of the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        // Blank values count as unset.
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(count) = lookup(COUNT_VAR) {
            config.count = parse_var(COUNT_VAR, &count)?;
        }
        if let Some(path) = lookup(PATH_VAR) {
            config.output = PathBuf::from(path);
        }
        if let Some(seed) = lookup(SEED_VAR) {
            config.seed = Some(parse_var(SEED_VAR, &seed)?);
        }

        Ok(config)
    }

    /// Command-line values win over whatever the environment set.
    pub fn with_overrides(
        mut self,
        count: Option<u32>,
        output: Option<PathBuf>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(count) = count {
            self.count = count;
        }
        if let Some(output) = output {
            self.output = output;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| AppError::Config(format!("{} has invalid value {:?}: {}", key, value, e)))
}
