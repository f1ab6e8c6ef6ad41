use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Model load error: {0}")]
    ModelLoad(String),

    #[error("Preprocessing error: {0}")]
    Preprocessing(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("HTTP error: {0}")]
    Http(#[from] axum::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<libsql::Error> for Error {
    fn from(e: libsql::Error) -> Self {
        Self::Persistence(e.to_string())
    }
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn model_load(msg: impl Into<String>) -> Self {
        Self::ModelLoad(msg.into())
    }

    pub fn preprocessing(msg: impl Into<String>) -> Self {
        Self::Preprocessing(msg.into())
    }

    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Redacted message safe to return to HTTP clients. The full error text
    /// is logged at the handler boundary, never sent over the wire.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Config(_) => "configuration error",
            Self::ModelLoad(_) => "model load failed",
            Self::Preprocessing(_) => "preprocessing failed",
            Self::Inference(_) => "inference failed",
            Self::Persistence(_) => "persistence failed",
            _ => "internal error",
        }
    }
}
