use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type ScoreResult<T> = Result<T, ScoreError>;
