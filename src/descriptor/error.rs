// ABOUTME: Validation errors for deployment descriptor fields.
// ABOUTME: Raised while deserializing, surfaced through serde's custom errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("command binary cannot be empty")]
    EmptyBinary,

    #[error("image uri cannot be empty")]
    EmptyUri,

    #[error("descriptor name cannot be empty")]
    EmptyName,

    #[error("unknown migration kind: {0}")]
    UnknownMigrationKind(String),
}
