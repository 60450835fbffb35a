//! Error types for GrihaSim

use marjani::NavError;
use thiserror::Error;

/// GrihaSim error type
#[derive(Error, Debug)]
pub enum SimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("House error: {0}")]
    House(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavError),
}

impl From<toml::de::Error> for SimError {
    fn from(e: toml::de::Error) -> Self {
        SimError::Config(e.to_string())
    }
}

impl From<serde_yaml::Error> for SimError {
    fn from(e: serde_yaml::Error) -> Self {
        SimError::House(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
