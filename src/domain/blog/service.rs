use super::error::BlogClientError;
use super::extractor::{ContentExtractor, SmartEditorExtractor};
use super::model::{
    Category, CategoryListEnvelope, CategoryTable, PostContent, PostId, PostListPage,
    ALL_POSTS_CATEGORY, DEFAULT_PAGE_SIZE,
};
use super::text::{escape_backslashes, normalize_category_name};
use crate::infrastructure::repositories::{BlogRepository, PostListQuery};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Client for a single blog.
///
/// The category table is loaded once in [`BlogClient::new`] and never
/// refreshed; build a new client to pick up category changes.
pub struct BlogClient {
    blog_id: String,
    categories: CategoryTable,
    repository: Arc<dyn BlogRepository>,
    extractor: Arc<dyn ContentExtractor>,
}

impl BlogClient {
    /// Build a client using the SmartEditor extractor
    pub async fn new(
        blog_id: impl Into<String>,
        repository: Arc<dyn BlogRepository>,
    ) -> Result<Self, BlogClientError> {
        Self::with_extractor(blog_id, repository, Arc::new(SmartEditorExtractor::new())).await
    }

    /// Build a client with a custom content extractor.
    ///
    /// # Errors
    /// `InvalidBlogId` for an empty id, `CategoryFetch` when the category list
    /// cannot be fetched or parsed.
    pub async fn with_extractor(
        blog_id: impl Into<String>,
        repository: Arc<dyn BlogRepository>,
        extractor: Arc<dyn ContentExtractor>,
    ) -> Result<Self, BlogClientError> {
        let blog_id = blog_id.into();
        if blog_id.trim().is_empty() {
            return Err(BlogClientError::InvalidBlogId(
                "blog id must not be empty".to_string(),
            ));
        }

        let body = repository
            .fetch_category_list(&blog_id)
            .await
            .map_err(|e| BlogClientError::CategoryFetch(e.to_string()))?;
        let categories = parse_category_table(&body)?;

        tracing::info!(
            blog_id = %blog_id,
            category_count = categories.len(),
            "Category table loaded"
        );

        Ok(Self {
            blog_id,
            categories,
            repository,
            extractor,
        })
    }

    pub fn blog_id(&self) -> &str {
        &self.blog_id
    }
}

#[async_trait::async_trait]
pub trait BlogClientApi: Send + Sync {
    /// Normalized category names in discovery order, "all posts" last
    fn category_names(&self) -> Vec<String>;

    /// Look up a category by normalized name
    fn category(&self, name: &str) -> Option<&Category>;

    /// List post ids of a category, sorted ascending and deduplicated.
    ///
    /// Only the first page is fetched. Transport and parse failures are
    /// logged and yield an empty list.
    ///
    /// # Errors
    /// `UnknownCategory` when `category_name` is not in the category table.
    async fn list_post_ids(
        &self,
        category_name: &str,
        page_size: u32,
    ) -> Result<Vec<PostId>, BlogClientError>;

    /// Fetch the text and images of a post.
    ///
    /// Returns `None` when the page cannot be fetched or holds no content
    /// container for `post_id`.
    async fn get_contents(&self, post_id: &str) -> Option<PostContent>;

    /// [`BlogClientApi::list_post_ids`] with the default page size
    async fn list_post_ids_default(
        &self,
        category_name: &str,
    ) -> Result<Vec<PostId>, BlogClientError> {
        self.list_post_ids(category_name, DEFAULT_PAGE_SIZE).await
    }
}

#[async_trait::async_trait]
impl BlogClientApi for BlogClient {
    fn category_names(&self) -> Vec<String> {
        self.categories.names()
    }

    fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    async fn list_post_ids(
        &self,
        category_name: &str,
        page_size: u32,
    ) -> Result<Vec<PostId>, BlogClientError> {
        let category = *self
            .categories
            .get(category_name)
            .ok_or_else(|| BlogClientError::UnknownCategory(category_name.to_string()))?;

        let mut query = PostListQuery {
            blog_id: self.blog_id.clone(),
            category_no: category.id,
            parent_category_no: category.parent_id,
            current_page: 1,
            count_per_page: page_size,
        };
        let mut post_ids: BTreeSet<PostId> = BTreeSet::new();

        let ids = match self.fetch_post_page(&query).await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::error!(
                    blog_id = %self.blog_id,
                    category = %category_name,
                    error = %e,
                    "Post listing failed"
                );
                return Ok(Vec::new());
            }
        };

        let Some(first) = ids.first() else {
            tracing::info!(category = %category_name, "Category has no posts");
            return Ok(Vec::new());
        };

        // The seen-check runs before the page is merged, so it never stops
        // paging and the advanced page is never requested.
        if !post_ids.contains(first) {
            post_ids.extend(ids);
            query.current_page += 1;
            tracing::debug!(next_page = query.current_page, "Page collected");
        } else {
            tracing::info!(count = post_ids.len(), "Get post ids: posts found");
        }

        Ok(post_ids.into_iter().collect())
    }

    async fn get_contents(&self, post_id: &str) -> Option<PostContent> {
        let html = match self.repository.fetch_post_view(&self.blog_id, post_id).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(
                    blog_id = %self.blog_id,
                    post_id = %post_id,
                    error = %e,
                    "Post view fetch failed"
                );
                return None;
            }
        };

        let post = self.extractor.extract(&html, post_id);
        match &post {
            Some(post) => tracing::info!(
                post_id = %post_id,
                content_length = post.content.len(),
                image_count = post.images.len(),
                "Post content extracted"
            ),
            None => tracing::error!(post_id = %post_id, "Cannot select content in post"),
        }
        post
    }
}

impl BlogClient {
    async fn fetch_post_page(&self, query: &PostListQuery) -> Result<Vec<PostId>, String> {
        let body = self
            .repository
            .fetch_post_list(query)
            .await
            .map_err(|e| e.to_string())?;
        parse_post_ids(&body)
    }
}

/// Build the category table from a category listing response body.
///
/// The first line of the body is a non-JSON preamble; the payload is on the
/// second line.
pub fn parse_category_table(body: &str) -> Result<CategoryTable, BlogClientError> {
    let payload = body.split('\n').nth(1).ok_or_else(|| {
        BlogClientError::CategoryFetch("category response has no payload line".to_string())
    })?;

    let envelope: CategoryListEnvelope = serde_json::from_str(payload)
        .map_err(|e| BlogClientError::CategoryFetch(format!("malformed category payload: {}", e)))?;

    let mut table = CategoryTable::new();
    for record in envelope
        .result
        .mylog_category_list
        .into_iter()
        .filter(|record| !record.division_line)
    {
        table.insert(
            normalize_category_name(&record.category_name),
            Category {
                id: record.category_no,
                parent_id: record.parent_category_no,
            },
        );
    }
    table.insert(ALL_POSTS_CATEGORY.to_string(), Category::all_posts());

    Ok(table)
}

/// Extract post ids from a post-title listing body, in listing order
pub fn parse_post_ids(body: &str) -> Result<Vec<PostId>, String> {
    let page: PostListPage = serde_json::from_str(&escape_backslashes(body))
        .map_err(|e| format!("malformed post list payload: {}", e))?;
    Ok(page.post_list.into_iter().map(|record| record.log_no).collect())
}
