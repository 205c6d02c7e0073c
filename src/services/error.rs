use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    #[error("parse failure: {0}")]
    Parse(String),
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("no {0} available from an earlier step")]
    MissingInput(&'static str),
}
