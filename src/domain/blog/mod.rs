pub mod error;
pub mod extractor;
pub mod images;
pub mod model;
pub mod service;
pub mod text;

pub use error::BlogClientError;
pub use extractor::{ContentExtractor, SmartEditorExtractor};
pub use images::filter_posted_images;
pub use model::{
    Category, CategoryTable, PostContent, PostId, ALL_POSTS_CATEGORY, DEFAULT_PAGE_SIZE,
};
pub use service::{BlogClient, BlogClientApi};
