use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced to the top-level hook in `main`
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("There is no projects.json file in this directory. Please use timesheet add-project first")]
    RegistryNotFound,

    #[error("A directory with the name {0} already exists. Use timesheet edit instead")]
    DayExists(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    #[error("Input closed before an answer was given")]
    InputClosed,

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}
