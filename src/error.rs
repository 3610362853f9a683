// ABOUTME: Application-wide error types for ros2-fdu.
// ABOUTME: Wraps record, transition, and I/O failures with thiserror.

use std::path::PathBuf;
use thiserror::Error;

use crate::fdu::{FduError, ParseTransitionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("configuration file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Fdu(#[from] FduError),

    #[error(transparent)]
    Transition(#[from] ParseTransitionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
