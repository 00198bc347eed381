use thiserror::Error;

#[derive(Debug, Error)]
pub enum BibleError {
    #[error("Book '{0}' not found")]
    BookNotFound(String),
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("{0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, BibleError>;
