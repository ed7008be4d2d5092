use url::Url;

/// Host serving images that users uploaded into their posts
pub const POSTED_IMAGE_HOST: &str = "postfiles.pstatic.net";

/// Resize parameter every published image URL carries
pub const RESIZE_QUERY: &str = "type=w966";

/// Swap an existing query string for the resize parameter.
///
/// URLs without a query are returned untouched.
pub fn resize_image_url(src: &str) -> String {
    match src.split_once('?') {
        Some((base, _)) => format!("{}?{}", base, RESIZE_QUERY),
        None => src.to_string(),
    }
}

/// Keep only user-posted images and force the resize parameter on each.
///
/// Platform chrome (icons, stickers, map tiles) lives on other hosts and is
/// dropped.
pub fn filter_posted_images(images: &[String]) -> Vec<String> {
    images
        .iter()
        .filter(|image| is_posted_image(image))
        .map(|image| {
            if image.contains('?') {
                resize_image_url(image)
            } else {
                format!("{}?{}", image, RESIZE_QUERY)
            }
        })
        .collect()
}

fn is_posted_image(image: &str) -> bool {
    match Url::parse(image) {
        Ok(url) => url.scheme() == "https" && url.host_str() == Some(POSTED_IMAGE_HOST),
        Err(_) => false,
    }
}
