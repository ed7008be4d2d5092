pub mod blog_repository;
pub mod naver_blog_repository;

pub use blog_repository::{BlogRepository, PostListQuery, RepositoryError};
pub use naver_blog_repository::{NaverBlogRepository, NaverEndpoints};
