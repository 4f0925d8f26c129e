//! Task image reference normalization and classification.
//!
//! # Responsibility
//! - Normalize raw image input from forms into stored references.
//! - Classify stored references for diagnostics.
//!
//! # Invariants
//! - Normalization never rejects a reference shape; blank input becomes
//!   `None`.
//! - Classification is metadata-only and must not influence store mutations.

use once_cell::sync::Lazy;
use regex::Regex;

static DATA_URI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:[\w.+-]+/[\w.+-]+(;[\w-]+=[^;,]+)*(;base64)?,").expect("valid data uri regex")
});
static HTTP_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+$").expect("valid http url regex"));

/// Shape of a stored image reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRefKind {
    /// Inline `data:` URI, typically produced by a file-upload reader.
    DataUri,
    /// Absolute http(s) URL.
    Url,
    /// Anything else, treated as an application asset path.
    AssetPath,
}

impl ImageRefKind {
    /// Stable lowercase label used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DataUri => "data_uri",
            Self::Url => "url",
            Self::AssetPath => "asset_path",
        }
    }
}

/// Classifies one non-empty image reference.
pub fn classify_image_ref(value: &str) -> ImageRefKind {
    if DATA_URI_RE.is_match(value) {
        ImageRefKind::DataUri
    } else if HTTP_URL_RE.is_match(value) {
        ImageRefKind::Url
    } else {
        ImageRefKind::AssetPath
    }
}

/// Trims an optional image reference; blank-after-trim becomes `None`.
pub fn normalize_image_ref(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{classify_image_ref, normalize_image_ref, ImageRefKind};

    #[test]
    fn classify_recognizes_data_uris() {
        let value = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(classify_image_ref(value), ImageRefKind::DataUri);
    }

    #[test]
    fn classify_recognizes_http_urls() {
        assert_eq!(
            classify_image_ref("https://example.com/a.jpg"),
            ImageRefKind::Url
        );
        assert_eq!(
            classify_image_ref("http://example.com/a.jpg"),
            ImageRefKind::Url
        );
    }

    #[test]
    fn classify_falls_back_to_asset_path() {
        assert_eq!(classify_image_ref("/kanban1.jpg"), ImageRefKind::AssetPath);
        assert_eq!(classify_image_ref("kanban1.jpg"), ImageRefKind::AssetPath);
    }

    #[test]
    fn normalize_trims_and_drops_blank_input() {
        assert_eq!(
            normalize_image_ref(Some("  /kanban1.jpg  ".to_string())),
            Some("/kanban1.jpg".to_string())
        );
        assert_eq!(normalize_image_ref(Some("   ".to_string())), None);
        assert_eq!(normalize_image_ref(None), None);
    }
}
