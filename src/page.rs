use scraper::{Html, Selector};
use url::Url;

use crate::error::Error;

/// Fetch the provider homepage and pull the wallpaper link out of the
/// `#preloadBg` placeholder element.
///
/// A non-success status is not treated specially here; an error page simply
/// lacks the placeholder and surfaces as [`Error::NotFound`].
pub async fn fetch_wallpaper_link(client: &reqwest::Client, base_url: &Url) -> Result<Url, Error> {
    let response = client
        .get(base_url.clone())
        .send()
        .await
        .map_err(|source| Error::Network {
            url: base_url.clone(),
            source,
        })?;

    let html = response.text().await.map_err(|source| Error::Network {
        url: base_url.clone(),
        source,
    })?;

    extract_wallpaper_link(&html, base_url)
}

/// The `href` on `#preloadBg` is provider-relative; resolve it against the
/// provider origin so the downloader gets an absolute URL.
pub fn extract_wallpaper_link(html: &str, base_url: &Url) -> Result<Url, Error> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("#preloadBg").unwrap();

    let href = document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("href"))
        .ok_or_else(|| Error::NotFound {
            url: base_url.clone(),
        })?;

    base_url.join(href).map_err(|_| Error::NotFound {
        url: base_url.clone(),
    })
}
