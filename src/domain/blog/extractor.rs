use super::images::resize_image_url;
use super::model::PostContent;
use super::text::normalize_content;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

/// Pulls a post body out of a rendered post page.
///
/// Implementations own all knowledge of the platform markup, so a layout
/// change only touches the extractor.
pub trait ContentExtractor: Send + Sync {
    /// Returns `None` when the page holds no content container for `post_id`.
    fn extract(&self, html: &str, post_id: &str) -> Option<PostContent>;
}

/// Extractor for posts written with the SmartEditor ONE layout
#[derive(Debug, Default, Clone, Copy)]
pub struct SmartEditorExtractor;

impl SmartEditorExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Post ids are numeric; anything else could smuggle selector syntax.
    fn container_selector(post_id: &str) -> Option<Selector> {
        if post_id.is_empty() || !post_id.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Selector::parse(&format!(
            "#post-view{} > div > div.se-main-container",
            post_id
        ))
        .ok()
    }
}

impl ContentExtractor for SmartEditorExtractor {
    fn extract(&self, html: &str, post_id: &str) -> Option<PostContent> {
        let selector = match Self::container_selector(post_id) {
            Some(selector) => selector,
            None => {
                tracing::warn!(post_id = %post_id, "Post id is not numeric");
                return None;
            }
        };

        let document = Html::parse_document(html);
        let container = document.select(&selector).next()?;

        let text = container.text().collect::<Vec<_>>().join("\n");
        let content = normalize_content(&text);

        let images = container
            .select(&IMAGE_SELECTOR)
            .filter_map(|img| img.value().attr("src"))
            .filter(|src| !src.is_empty())
            .map(resize_image_url)
            .collect();

        Some(PostContent { content, images })
    }
}
