use crate::handler::{Handler, Postgres};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("Unknown backend: {0}")]
    Unknown(String),
}

/// Which handler a data-access layer renders with, as named in its settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    #[serde(alias = "pg", alias = "postgresql")]
    Postgres,
}

impl Backend {
    /// A fresh handler with its counter at zero.
    pub fn handler(&self) -> Box<dyn Handler + Send> {
        match self {
            Backend::Postgres => Box::new(Postgres::new()),
        }
    }
}

impl FromStr for Backend {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pg" | "postgres" | "postgresql" => Ok(Backend::Postgres),
            other => Err(BackendError::Unknown(other.to_string())),
        }
    }
}
