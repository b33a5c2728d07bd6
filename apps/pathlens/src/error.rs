//! # Application Errors
//!
//! The binary's error type, wrapping core validation errors, client
//! transport errors, and the file handling the CLI adds on top.

use crate::client::ClientError;
use pathlens_core::PathlensError;

/// Errors from the application layer.
#[derive(Debug)]
pub enum AppError {
    /// A core validation or state error.
    Core(PathlensError),
    /// A Search Service transport error.
    Client(ClientError),
    /// File read/write failure.
    Io(String),
    /// Graph file parsing or encoding failure.
    Config(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Core(e) => write!(f, "{e}"),
            Self::Client(e) => write!(f, "{e}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Config(msg) => write!(f, "Graph file error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<PathlensError> for AppError {
    fn from(e: PathlensError) -> Self {
        Self::Core(e)
    }
}

impl From<ClientError> for AppError {
    fn from(e: ClientError) -> Self {
        Self::Client(e)
    }
}
