use std::process::ExitCode;

use meeting_roster_config::{ConfigError, ValidationErrors};

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Validation(_) => ExitCode::from(2),
            Self::Config(_) | Self::Io(_) | Self::Json(_) => ExitCode::FAILURE,
        }
    }
}
