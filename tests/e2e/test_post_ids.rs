use crate::e2e::helpers;

use axum::http::StatusCode;
use helpers::fixtures::EMPTY_POST_LIST_BODY;
use helpers::{StubResponse, TestContext, BLOG_ID};
use naver_blog_client::domain::blog::{BlogClientApi, BlogClientError, ALL_POSTS_CATEGORY};
use pretty_assertions::assert_eq;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_sorted_unique_post_ids(ctx: &TestContext) {
    let client = ctx.client().await;

    let ids = client.list_post_ids("와인입고소식", 5).await.unwrap();

    assert_eq!(ids, vec!["223100", "223300", "223456"]);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_request_only_the_first_page(ctx: &TestContext) {
    let client = ctx.client().await;

    client.list_post_ids("행사안내", 3).await.unwrap();

    let requests = ctx.post_list_requests();
    assert_eq!(requests.len(), 1);

    let query = &requests[0].query;
    assert_eq!(query.get("blogId").map(String::as_str), Some(BLOG_ID));
    assert_eq!(query.get("currentPage").map(String::as_str), Some("1"));
    assert_eq!(query.get("categoryNo").map(String::as_str), Some("15"));
    assert_eq!(query.get("parentCategoryNo").map(String::as_str), Some("12"));
    assert_eq!(query.get("countPerPage").map(String::as_str), Some("3"));
    assert_eq!(query.get("viewdate").map(String::as_str), Some(""));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_default_page_size_and_omit_missing_parent(ctx: &TestContext) {
    let client = ctx.client().await;

    client.list_post_ids_default(ALL_POSTS_CATEGORY).await.unwrap();

    let requests = ctx.post_list_requests();
    assert_eq!(requests.len(), 1);

    let query = &requests[0].query;
    assert_eq!(query.get("categoryNo").map(String::as_str), Some("0"));
    assert_eq!(query.get("countPerPage").map(String::as_str), Some("5"));
    assert!(!query.contains_key("parentCategoryNo"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_empty_for_category_without_posts(ctx: &TestContext) {
    ctx.set_post_title_list(StubResponse::ok(EMPTY_POST_LIST_BODY));
    let client = ctx.client().await;

    let ids = client.list_post_ids("공지", 5).await.unwrap();

    assert!(ids.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_category_without_a_request(ctx: &TestContext) {
    let client = ctx.client().await;

    let result = client.list_post_ids("없는카테고리", 5).await;

    assert!(matches!(
        result,
        Err(BlogClientError::UnknownCategory(name)) if name == "없는카테고리"
    ));
    assert!(ctx.post_list_requests().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_recover_from_error_status(ctx: &TestContext) {
    ctx.set_post_title_list(StubResponse::status(StatusCode::BAD_GATEWAY));
    let client = ctx.client().await;

    let ids = client.list_post_ids("와인입고소식", 5).await.unwrap();

    assert!(ids.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_recover_from_malformed_listing(ctx: &TestContext) {
    ctx.set_post_title_list(StubResponse::ok("<html>maintenance</html>"));
    let client = ctx.client().await;

    let ids = client.list_post_ids("와인입고소식", 5).await.unwrap();

    assert!(ids.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_numeric_post_ids(ctx: &TestContext) {
    ctx.set_post_title_list(StubResponse::ok(
        r#"{"postList":[{"logNo":30},{"logNo":1000},{"logNo":200}]}"#,
    ));
    let client = ctx.client().await;

    let ids = client.list_post_ids("와인입고소식", 5).await.unwrap();

    // String order, not numeric order
    assert_eq!(ids, vec!["1000", "200", "30"]);
}
