use crate::prelude::*;

use std::process::ExitCode;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FaceError {
    /// The host failed to supply a time reading; the frame is skipped.
    NoTimeAvailable,
    ConfigError(String),
}

impl std::fmt::Display for FaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaceError::NoTimeAvailable => write!(f, "No valid time available"),
            FaceError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl From<time::error::IndeterminateOffset> for FaceError {
    fn from(err: time::error::IndeterminateOffset) -> Self {
        error!("Failed to determine local UTC offset: {}", err);
        FaceError::NoTimeAvailable
    }
}

impl From<FaceError> for ExitCode {
    fn from(value: FaceError) -> Self {
        match value {
            FaceError::NoTimeAvailable => ExitCode::from(1),
            FaceError::ConfigError(_) => ExitCode::from(2),
        }
    }
}
