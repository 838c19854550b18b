//! Custom error types for the trade oracle
//!
//! Provides structured, typed errors instead of generic Box<dyn Error>

use async_openai::error::OpenAIError;
use thiserror::Error;

/// Top-level application errors
#[derive(Error, Debug)]
pub enum OracleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Failures at the summarization boundary.
///
/// None of these reach the presentation layer; the counsel fetcher turns every
/// one of them into the static fallback.
#[derive(Error, Debug)]
pub enum CounselError {
    #[error("LLM API error: {0}")]
    Llm(#[from] OpenAIError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Response does not match counsel schema: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid request: {0}")]
    Request(String),
}

impl From<String> for OracleError {
    fn from(err: String) -> Self {
        OracleError::Config(err)
    }
}

impl From<&str> for OracleError {
    fn from(err: &str) -> Self {
        OracleError::Config(err.to_string())
    }
}
