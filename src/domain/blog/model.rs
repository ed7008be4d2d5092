use serde::{Deserialize, Deserializer};

/// Key of the synthetic category that lists every post of a blog
pub const ALL_POSTS_CATEGORY: &str = "전체글";

/// Number of posts requested per listing page when the caller does not say
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Platform-assigned post identifier ("logNo")
pub type PostId = String;

/// Category id pair as the listing endpoint expects it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub parent_id: Option<i64>,
}

impl Category {
    pub fn all_posts() -> Self {
        Self {
            id: 0,
            parent_id: None,
        }
    }
}

/// Category lookup keyed by normalized display name, kept in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTable {
    entries: Vec<(String, Category)>,
}

impl CategoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. An existing key keeps its position.
    pub fn insert(&mut self, name: String, category: Category) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = category,
            None => self.entries.push((name, category)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, category)| category)
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Text and images extracted from a single post body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    pub content: String,
    pub images: Vec<String>,
}

/// Envelope of the category listing payload (second line of the response)
#[derive(Debug, Deserialize)]
pub(crate) struct CategoryListEnvelope {
    pub result: CategoryListResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryListResult {
    pub mylog_category_list: Vec<CategoryRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryRecord {
    pub category_name: String,
    pub category_no: i64,
    #[serde(default)]
    pub parent_category_no: Option<i64>,
    pub division_line: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostListPage {
    pub post_list: Vec<PostListRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostListRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub log_no: PostId,
}

// logNo shows up both quoted and bare depending on the endpoint version
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}
