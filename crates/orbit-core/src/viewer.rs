//! Full-screen viewer state. There is a single global viewer; opening it on
//! another photo simply replaces what it shows.

use crate::cards::card_label;
use crate::constants::VIEWER_PLACEHOLDER_DESCRIPTION;
use crate::photo::Photo;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerContent {
    pub index: usize,
    pub image_url: String,
    pub title: String,
    pub date: String,
    pub description: String,
}

impl ViewerContent {
    pub fn for_photo(index: usize, photo: &Photo) -> Self {
        let description = if photo.description.is_empty() {
            VIEWER_PLACEHOLDER_DESCRIPTION.to_string()
        } else {
            photo.description.clone()
        };
        Self {
            index,
            image_url: photo.url.clone(),
            title: card_label(index, photo),
            date: photo.date.clone(),
            description,
        }
    }
}

/// Where a click inside the open viewer landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The viewer root outside the enlarged card.
    Root,
    /// The blurred backdrop image.
    Backdrop,
    /// The enlarged card or its caption.
    Content,
}

/// Background clicks dismiss the viewer; clicks on the content do not.
#[inline]
pub fn closes_on_click(target: ClickTarget) -> bool {
    matches!(target, ClickTarget::Root | ClickTarget::Backdrop)
}

#[inline]
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

#[derive(Default, Clone, Debug)]
pub struct Viewer {
    open: Option<usize>,
}

impl Viewer {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<usize> {
        self.open
    }

    /// Open on `index`. Out-of-range indices leave the viewer untouched.
    pub fn open(&mut self, index: usize, photos: &[Photo]) -> Option<ViewerContent> {
        let photo = photos.get(index)?;
        self.open = Some(index);
        log::info!("[viewer] open photo {}", index);
        Some(ViewerContent::for_photo(index, photo))
    }

    /// Returns true when the viewer was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }
}
