use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("history store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
