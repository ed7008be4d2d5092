use naver_blog_client::domain::blog::{filter_posted_images, BlogClient, BlogClientApi};
use naver_blog_client::error::{AppError, AppResult};
use naver_blog_client::infrastructure::config::{Config, LogFormat};
use naver_blog_client::infrastructure::repositories::NaverBlogRepository;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(2);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Scrape failed");
        std::process::exit(e.exit_code());
    }
}

/// Print the newest post of the configured blog's followed category
async fn run(config: Config) -> AppResult<()> {
    let target = config.target().cloned().ok_or_else(|| {
        AppError::Config(format!(
            "unknown blog '{}', expected one of {:?}",
            config.blog_name,
            config.blogs.names()
        ))
    })?;

    tracing::info!(
        blog = %target.name,
        blog_id = %target.blog_id,
        category = %target.category,
        "Scraping blog"
    );

    let repository = NaverBlogRepository::new(config.endpoints.clone(), config.http_timeout)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let client = BlogClient::new(target.blog_id.clone(), Arc::new(repository)).await?;

    println!("{:?}", client.category_names());

    let post_ids = client.list_post_ids_default(&target.category).await?;

    // Ids sort ascending, so the newest post is last
    let Some(latest) = post_ids.last() else {
        println!("No posts found in '{}'", target.category);
        return Ok(());
    };
    println!("{}", latest);

    let post = client.get_contents(latest).await.ok_or_else(|| {
        AppError::ExternalService(format!("no content extracted from post {}", latest))
    })?;
    let images = filter_posted_images(&post.images);

    println!("Content: {}", post.content);
    println!("Images: {:?}", images);

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "naver_blog_client=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "naver_blog_client=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
