use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum BlogClientError {
    #[error("invalid blog id: {0}")]
    InvalidBlogId(String),
    #[error("category fetch failed: {0}")]
    CategoryFetch(String),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

impl From<BlogClientError> for AppError {
    fn from(err: BlogClientError) -> Self {
        match err {
            BlogClientError::InvalidBlogId(msg) => AppError::BadRequest(msg),
            BlogClientError::CategoryFetch(msg) => AppError::ExternalService(msg),
            BlogClientError::UnknownCategory(name) => {
                AppError::NotFound(format!("Category '{}'", name))
            }
        }
    }
}
