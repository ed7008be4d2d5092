use super::blog_repository::{BlogRepository, PostListQuery, RepositoryError};
use async_trait::async_trait;
use std::time::Duration;

const CATEGORY_LIST_URL: &str = "https://m.blog.naver.com/rego/CategoryList.nhn";
const POST_TITLE_LIST_URL: &str = "http://blog.naver.com/PostTitleListAsync.nhn";
const POST_VIEW_URL: &str = "http://blog.naver.com/PostView.nhn";

/// The category endpoint rejects requests that do not come from the mobile site
const MOBILE_REFERER: &str = "https://m.blog.naver.com";

/// Endpoint URLs of the Naver blog backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaverEndpoints {
    pub category_list: String,
    pub post_title_list: String,
    pub post_view: String,
}

impl Default for NaverEndpoints {
    fn default() -> Self {
        Self {
            category_list: CATEGORY_LIST_URL.to_string(),
            post_title_list: POST_TITLE_LIST_URL.to_string(),
            post_view: POST_VIEW_URL.to_string(),
        }
    }
}

/// reqwest implementation of the blog repository
pub struct NaverBlogRepository {
    endpoints: NaverEndpoints,
    http_client: reqwest::Client,
}

impl NaverBlogRepository {
    pub fn new(endpoints: NaverEndpoints, timeout: Duration) -> Result<Self, RepositoryError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RepositoryError::Request {
                url: String::new(),
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            endpoints,
            http_client,
        })
    }

    /// Send a prepared GET and return the body of a successful response
    async fn get_text(
        &self,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<String, RepositoryError> {
        let response = request.send().await.map_err(|e| RepositoryError::Request {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| RepositoryError::Request {
            url: url.to_string(),
            message: format!("failed to read body: {}", e),
        })
    }
}

#[async_trait]
impl BlogRepository for NaverBlogRepository {
    async fn fetch_category_list(&self, blog_id: &str) -> Result<String, RepositoryError> {
        let url = &self.endpoints.category_list;
        tracing::debug!(url = %url, blog_id = %blog_id, "Fetching category list");

        let request = self
            .http_client
            .get(url)
            .query(&[("blogId", blog_id)])
            .header("Referer", MOBILE_REFERER);

        self.get_text(url, request).await
    }

    async fn fetch_post_list(&self, query: &PostListQuery) -> Result<String, RepositoryError> {
        let url = &self.endpoints.post_title_list;
        tracing::debug!(url = %url, query = ?query, "Fetching post title list");

        let mut params: Vec<(&str, String)> = vec![
            ("blogId", query.blog_id.clone()),
            ("currentPage", query.current_page.to_string()),
            ("categoryNo", query.category_no.to_string()),
        ];
        if let Some(parent) = query.parent_category_no {
            params.push(("parentCategoryNo", parent.to_string()));
        }
        params.push(("countPerPage", query.count_per_page.to_string()));
        params.push(("viewdate", String::new()));

        let request = self.http_client.get(url).query(&params);

        self.get_text(url, request).await
    }

    async fn fetch_post_view(
        &self,
        blog_id: &str,
        post_id: &str,
    ) -> Result<String, RepositoryError> {
        let url = &self.endpoints.post_view;
        tracing::debug!(url = %url, blog_id = %blog_id, post_id = %post_id, "Fetching post view");

        let request = self
            .http_client
            .get(url)
            .query(&[("blogId", blog_id), ("logNo", post_id)]);

        self.get_text(url, request).await
    }
}
