use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptLabError {
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, PromptLabError>;
