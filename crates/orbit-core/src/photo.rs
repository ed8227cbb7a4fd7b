//! Photo records shown on the orbit.
//!
//! A photo list is always replaced as a whole: either by the bundled
//! fallback set or by the result of a completed feed fetch.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
    pub title: String,
    pub date: String,
    pub description: String,
}

impl Photo {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            date: date.into(),
            description: description.into(),
        }
    }
}

const FALLBACK_URLS: [&str; 7] = [
    "https://images.unsplash.com/photo-1513151233558-d860c5398176?auto=format&fit=crop&w=900&q=80",
    "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?auto=format&fit=crop&w=900&q=80",
    "https://images.unsplash.com/photo-1470770903676-69b98201ea1c?auto=format&fit=crop&w=900&q=80",
    "https://images.unsplash.com/photo-1482192596544-9eb780fc7f66?auto=format&fit=crop&w=900&q=80",
    "https://images.unsplash.com/photo-1418065460487-3e41a6c84dc5?auto=format&fit=crop&w=900&q=80",
    "https://images.unsplash.com/photo-1469474968028-56623f02e42e?auto=format&fit=crop&w=900&q=80",
    "https://images.unsplash.com/photo-1549887534-3db1bd59dcca?auto=format&fit=crop&w=900&q=80",
];

/// Bundled sample set used until the feed answers, and whenever it fails.
pub fn fallback_photos() -> Vec<Photo> {
    FALLBACK_URLS
        .iter()
        .enumerate()
        .map(|(i, url)| {
            let n = i + 1;
            Photo::new(
                *url,
                format!("sample {n} · fallback"),
                "",
                format!("Sample image {n}."),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_set_is_complete() {
        let photos = fallback_photos();
        assert_eq!(photos.len(), 7);
        for (i, p) in photos.iter().enumerate() {
            assert!(p.url.starts_with("https://"));
            assert_eq!(p.title, format!("sample {} · fallback", i + 1));
            assert!(p.date.is_empty());
            assert!(!p.description.is_empty());
        }
    }
}
