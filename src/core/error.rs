use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaceError {
    #[error("Unknown faction: {0}")]
    UnknownFaction(String),

    #[error("Invalid effect: {0}")]
    InvalidEffect(String),

    #[error("Invalid content table: {0}")]
    InvalidContent(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Content parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RaceError>;
