//! Thumbnail Logic
//!
//! URL helpers for previews. Transform parameters only change how the image is
//! served; they never touch asset identity.

use serde::Deserialize;

use crate::api::Asset;

/// Image transform applied to preview URLs (`h`, `q`, `fm` query parameters)
///
/// Fields left out of a config block keep their defaults; an explicit `null`
/// drops that parameter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThumbnailTransform {
    #[serde(default = "default_height")]
    pub height: Option<u32>,
    #[serde(default = "default_quality")]
    pub quality: Option<u8>,
    #[serde(default = "default_format")]
    pub format: Option<String>,
}

fn default_height() -> Option<u32> {
    Some(300)
}

fn default_quality() -> Option<u8> {
    Some(80)
}

fn default_format() -> Option<String> {
    Some("webp".to_string())
}

impl Default for ThumbnailTransform {
    fn default() -> Self {
        Self {
            height: default_height(),
            quality: default_quality(),
            format: default_format(),
        }
    }
}

impl ThumbnailTransform {
    /// No transform at all
    pub fn none() -> Self {
        Self {
            height: None,
            quality: None,
            format: None,
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(height) = self.height {
            pairs.push(("h", height.to_string()));
        }
        if let Some(quality) = self.quality {
            pairs.push(("q", quality.min(100).to_string()));
        }
        if let Some(format) = self.format.as_deref().filter(|f| !f.is_empty()) {
            pairs.push(("fm", format.to_string()));
        }
        pairs
    }
}

/// Make a delivered URL absolute (`//host/path` becomes `https://host/path`)
pub fn resolve_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("//") {
        format!("https:{}", url)
    } else {
        url.to_string()
    }
}

/// Absolute preview URL with transform parameters appended
pub fn thumbnail_url(url: &str, transform: &ThumbnailTransform) -> String {
    let mut resolved = resolve_url(url);
    let pairs = transform.query_pairs();
    if pairs.is_empty() {
        return resolved;
    }

    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    resolved.push(if resolved.contains('?') { '&' } else { '?' });
    resolved.push_str(&query);
    resolved
}

/// `(url, title)` pair the host shows in its own asset field
///
/// The url is empty when the asset has no file.
pub fn make_thumbnail(asset: &Asset) -> (String, String) {
    let url = asset.file_url().map(resolve_url).unwrap_or_default();
    (url, asset.title().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_protocol_relative() {
        assert_eq!(
            resolve_url("//images.ctfassets.net/s/a/b/logo.png"),
            "https://images.ctfassets.net/s/a/b/logo.png"
        );
        assert_eq!(resolve_url("http://example.com/x.png"), "http://example.com/x.png");
    }

    #[test]
    fn test_thumbnail_url_default_transform() {
        let url = thumbnail_url("//img/logo.png", &ThumbnailTransform::default());
        assert_eq!(url, "https://img/logo.png?h=300&q=80&fm=webp");
    }

    #[test]
    fn test_thumbnail_url_existing_query() {
        let transform = ThumbnailTransform {
            height: Some(100),
            quality: None,
            format: None,
        };
        assert_eq!(thumbnail_url("https://img/a.png?x=1", &transform), "https://img/a.png?x=1&h=100");
    }

    #[test]
    fn test_thumbnail_url_without_transform() {
        assert_eq!(thumbnail_url("//img/a.png", &ThumbnailTransform::none()), "https://img/a.png");
    }

    #[test]
    fn test_quality_is_capped() {
        let transform = ThumbnailTransform {
            height: None,
            quality: Some(250),
            format: None,
        };
        assert_eq!(thumbnail_url("https://img/a.png", &transform), "https://img/a.png?q=100");
    }

    #[test]
    fn test_make_thumbnail() {
        let asset = Asset::new("1", "Logo", Some("//img/logo.png"));
        assert_eq!(
            make_thumbnail(&asset),
            ("https://img/logo.png".to_string(), "Logo".to_string())
        );

        let missing = Asset::new("2", "Draft", None);
        assert_eq!(make_thumbnail(&missing), (String::new(), "Draft".to_string()));
    }
}
