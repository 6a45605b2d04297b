#[derive(Debug, thiserror::Error)]
pub enum BookError {
    #[error("no book with id {0}")]
    NotFound(String),
    #[error("invalid book id: {0}")]
    InvalidId(String),
}

pub type BookResult<T> = std::result::Result<T, BookError>;
