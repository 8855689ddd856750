use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::AppError;
use crate::models::Course;

/// Where the fixture array is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// `-` selects stdout, anything else is a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.as_os_str() == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(path.to_path_buf())
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::File(path) => write!(f, "{}", path.display()),
            OutputTarget::Stdout => f.write_str("stdout"),
        }
    }
}

pub fn to_pretty_json(courses: &[Course]) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(courses)?)
}

/// Writes `courses` as a 2-space-indented JSON array, truncating any
/// existing file. Parent directories are not created.
pub fn write_fixture(courses: &[Course], target: &OutputTarget) -> Result<(), AppError> {
    match target {
        OutputTarget::File(path) => {
            let file = File::create(path).map_err(|e| AppError::io(path, e))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, courses)?;
            writer.flush().map_err(|e| AppError::io(path, e))?;
        }
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, courses)?;
            stdout
                .write_all(b"\n")
                .and_then(|_| stdout.flush())
                .map_err(|e| AppError::io("-", e))?;
        }
    }

    info!("Wrote {} courses to {}", courses.len(), target);
    Ok(())
}
