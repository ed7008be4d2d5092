pub mod registry;

pub use registry::{BlogRegistry, BlogTarget};

use crate::infrastructure::repositories::NaverEndpoints;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub blog_name: String,
    pub log_format: LogFormat,
    pub http_timeout: Duration,
    pub endpoints: NaverEndpoints,
    pub blogs: BlogRegistry,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let defaults = NaverEndpoints::default();

        let config = Config {
            blog_name: env::var("BLOG_NAME").unwrap_or_else(|_| "조양마트".to_string()),
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            http_timeout: Duration::from_secs(
                env::var("HTTP_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()?,
            ),
            endpoints: NaverEndpoints {
                category_list: env::var("NAVER_CATEGORY_LIST_URL")
                    .unwrap_or(defaults.category_list),
                post_title_list: env::var("NAVER_POST_TITLE_LIST_URL")
                    .unwrap_or(defaults.post_title_list),
                post_view: env::var("NAVER_POST_VIEW_URL").unwrap_or(defaults.post_view),
            },
            blogs: BlogRegistry::default(),
        };

        Ok(config)
    }

    /// The registry entry for the configured blog name
    pub fn target(&self) -> Option<&BlogTarget> {
        self.blogs.resolve(&self.blog_name)
    }
}
