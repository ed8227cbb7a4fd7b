//! Photo feed parsing and the fallback policy.
//!
//! The feed endpoint answers `{ "items": [{ "image", "name", "meta", ... }] }`.
//! Any failure on the client side is absorbed here: the caller always gets a
//! usable photo list plus a status it can show to the user.

use crate::constants::{DEFAULT_DESCRIPTION_PREFIX, DEFAULT_TITLE_PREFIX};
use crate::photo::{fallback_photos, Photo};
use serde::{Deserialize, Deserializer};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("malformed feed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry of the feed response. Both the plain and the EXIF shaped
/// function responses deserialize into this. Every field is read leniently:
/// a value of the wrong type counts as absent instead of rejecting the item.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RemoteItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub meta: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub desc: Option<String>,
    #[serde(default, rename = "photoDate", deserialize_with = "lenient_string")]
    pub photo_date: Option<String>,
    #[serde(default, rename = "uploadDate", deserialize_with = "lenient_string")]
    pub upload_date: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|v| !v.is_empty())
}

impl RemoteItem {
    /// Convert to a photo at `index` (0-based) in the feed, or `None` when the
    /// item carries no image.
    pub fn into_photo(self, index: usize) -> Option<Photo> {
        let url = non_empty(&self.image)?.to_string();
        let n = index + 1;
        let title = non_empty(&self.name)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{DEFAULT_TITLE_PREFIX} #{n}"));
        let date = non_empty(&self.meta)
            .or_else(|| non_empty(&self.photo_date))
            .or_else(|| non_empty(&self.upload_date))
            .unwrap_or_default()
            .to_string();
        let description = non_empty(&self.desc)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{DEFAULT_DESCRIPTION_PREFIX} #{n}."));
        Some(Photo {
            url,
            title,
            date,
            description,
        })
    }
}

/// Parse a feed body into photos. A missing or non-array `items` yields an
/// empty list, which the caller treats like an empty folder.
pub fn photos_from_body(body: &str) -> Result<Vec<Photo>, FeedError> {
    let mut root: serde_json::Value = serde_json::from_str(body)?;
    let items = match root.get_mut("items").map(serde_json::Value::take) {
        Some(serde_json::Value::Array(items)) => items,
        _ => Vec::new(),
    };
    // numbering follows the feed position, skipped entries included
    Ok(items
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| {
            serde_json::from_value::<RemoteItem>(v)
                .ok()
                .and_then(|item| item.into_photo(i))
        })
        .collect())
}

/// User-facing state of the feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedStatus {
    Loading,
    Loaded(usize),
    Empty,
    Failed(String),
}

impl FeedStatus {
    /// True when the fallback set is on screen because the feed could not
    /// supply photos.
    pub fn is_degraded(&self) -> bool {
        matches!(self, FeedStatus::Empty | FeedStatus::Failed(_))
    }
}

impl fmt::Display for FeedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedStatus::Loading => write!(f, "Loading today's photos from Cloudinary…"),
            FeedStatus::Loaded(n) => write!(f, "Loaded {n} photos from Cloudinary"),
            FeedStatus::Empty => write!(f, "Cloudinary folder is empty, showing sample images"),
            FeedStatus::Failed(_) => write!(f, "Cloudinary error, showing sample images"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FeedOutcome {
    pub photos: Vec<Photo>,
    pub status: FeedStatus,
}

/// Apply the fallback policy to a fetch result.
pub fn resolve(result: Result<Vec<Photo>, FeedError>) -> FeedOutcome {
    match result {
        Ok(photos) if !photos.is_empty() => {
            log::info!("[feed] loaded {} photos", photos.len());
            FeedOutcome {
                status: FeedStatus::Loaded(photos.len()),
                photos,
            }
        }
        Ok(_) => {
            log::warn!("[feed] empty result, using fallback set");
            FeedOutcome {
                photos: fallback_photos(),
                status: FeedStatus::Empty,
            }
        }
        Err(e) => {
            log::error!("[feed] load error: {e}");
            FeedOutcome {
                photos: fallback_photos(),
                status: FeedStatus::Failed(e.to_string()),
            }
        }
    }
}

/// Resolve an HTTP answer (status code and body text) into photos.
pub fn outcome_from_http(status: u16, body: &str) -> FeedOutcome {
    if !(200..300).contains(&status) {
        return resolve(Err(FeedError::Status(status)));
    }
    resolve(photos_from_body(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_without_image_is_skipped() {
        let item = RemoteItem {
            name: Some("x".into()),
            ..Default::default()
        };
        assert!(item.into_photo(0).is_none());
    }

    #[test]
    fn exif_dates_fill_in_for_meta() {
        let item = RemoteItem {
            image: Some("a.jpg".into()),
            upload_date: Some("2024.01.15".into()),
            ..Default::default()
        };
        assert_eq!(item.into_photo(0).map(|p| p.date).as_deref(), Some("2024.01.15"));

        let item = RemoteItem {
            image: Some("a.jpg".into()),
            photo_date: Some("2024.01.15 14:30".into()),
            upload_date: Some("2024.02.01".into()),
            ..Default::default()
        };
        assert_eq!(
            item.into_photo(0).map(|p| p.date).as_deref(),
            Some("2024.01.15 14:30")
        );
    }

    #[test]
    fn status_messages_mark_degraded_modes() {
        assert!(!FeedStatus::Loading.is_degraded());
        assert!(!FeedStatus::Loaded(3).is_degraded());
        assert!(FeedStatus::Empty.is_degraded());
        assert!(FeedStatus::Failed("HTTP 500".into()).is_degraded());
        assert_eq!(FeedStatus::Loaded(3).to_string(), "Loaded 3 photos from Cloudinary");
    }
}
