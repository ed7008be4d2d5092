use async_trait::async_trait;

/// Transport failure talking to the blog platform
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
}

/// Query for one page of the post-title listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostListQuery {
    pub blog_id: String,
    pub category_no: i64,
    pub parent_category_no: Option<i64>,
    pub current_page: u32,
    pub count_per_page: u32,
}

/// Repository for the blog platform's internal endpoints.
/// Abstracts the HTTP transport from the parsing done by the client.
///
/// Every method returns the raw response body; decoding is left to the caller
/// because the payloads need endpoint-specific massaging before parsing.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Category listing for a blog (multi-line text, JSON on line two)
    async fn fetch_category_list(&self, blog_id: &str) -> Result<String, RepositoryError>;

    /// One page of post titles for a category (JSON with raw backslashes)
    async fn fetch_post_list(&self, query: &PostListQuery) -> Result<String, RepositoryError>;

    /// Rendered post page (HTML)
    async fn fetch_post_view(&self, blog_id: &str, post_id: &str)
        -> Result<String, RepositoryError>;
}
