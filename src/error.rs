use thiserror::Error;

use crate::models::Violation;

/// Biostats error types
#[derive(Error, Debug)]
pub enum BioError {
    #[error("You have the wrong number of arguments to run this command")]
    ArgumentCount,

    #[error("Command does not exist")]
    UnknownCommand,

    #[error("{}", join_violations(.0))]
    Validation(Vec<Violation>),

    #[error("Name already exists")]
    DuplicateKey,

    #[error("Name does not exist")]
    NotFound,

    #[error("Cannot load records: {0}")]
    StoreLoad(String),

    #[error("Cannot save records: {0}")]
    StoreFlush(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for biostats operations
pub type Result<T> = std::result::Result<T, BioError>;
