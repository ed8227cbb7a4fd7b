//! Card registry: one visual card per photo, rebuilt from scratch whenever
//! the photo list changes.

use crate::orbit::VisualCard;
use crate::photo::Photo;

/// Backend that knows how to create and tear down visual cards.
pub trait CardFactory {
    type Card: VisualCard;

    /// Remove every card element this factory previously created.
    fn clear(&mut self);

    /// Create the card for `photo` at `index`. The card must route an
    /// activation back to `index`.
    fn create(&mut self, index: usize, photo: &Photo) -> Self::Card;
}

/// Caption shown on a card.
pub fn card_label(index: usize, photo: &Photo) -> String {
    if photo.title.is_empty() {
        format!("photo #{}", index + 1)
    } else {
        photo.title.clone()
    }
}

/// Clear the backend and build exactly `photos.len()` fresh cards.
pub fn build_cards<F: CardFactory>(factory: &mut F, photos: &[Photo]) -> Vec<F::Card> {
    factory.clear();
    photos
        .iter()
        .enumerate()
        .map(|(i, photo)| {
            let mut card = factory.create(i, photo);
            card.set_label(&card_label(i, photo));
            card
        })
        .collect()
}
