//! Orbit session: the photo list, its cards, the global rotation and the
//! gesture/viewer state, owned in one place and driven by the front-end.

use crate::cards::{build_cards, CardFactory};
use crate::drag::{DragController, DragPhase, InputSource};
use crate::orbit::{layout, VisualCard};
use crate::photo::{fallback_photos, Photo};
use crate::viewer::{Viewer, ViewerContent};

pub struct OrbitSession<C: VisualCard> {
    photos: Vec<Photo>,
    cards: Vec<C>,
    base_rotation: f64,
    front_index: Option<usize>,
    drag: DragController,
    viewer: Viewer,
}

impl<C: VisualCard> Default for OrbitSession<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: VisualCard> OrbitSession<C> {
    /// Empty session: no photos, no cards, rotation at zero.
    pub fn new() -> Self {
        Self {
            photos: Vec::new(),
            cards: Vec::new(),
            base_rotation: 0.0,
            front_index: None,
            drag: DragController::new(),
            viewer: Viewer::default(),
        }
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn cards(&self) -> &[C] {
        &self.cards
    }

    pub fn base_rotation(&self) -> f64 {
        self.base_rotation
    }

    pub fn front_index(&self) -> Option<usize> {
        self.front_index
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Replace the photo list wholesale and rebuild the cards. An open viewer
    /// is closed, since its index refers to the old list.
    pub fn replace_photos<F>(&mut self, photos: Vec<Photo>, factory: &mut F)
    where
        F: CardFactory<Card = C>,
    {
        self.viewer.close();
        self.photos = photos;
        self.rebuild(factory);
    }

    /// Show the bundled sample set.
    pub fn show_fallback<F>(&mut self, factory: &mut F)
    where
        F: CardFactory<Card = C>,
    {
        self.replace_photos(fallback_photos(), factory);
    }

    /// Tear down every card and build a fresh set for the current photos.
    pub fn rebuild<F>(&mut self, factory: &mut F)
    where
        F: CardFactory<Card = C>,
    {
        self.cards.clear();
        self.cards = build_cards(factory, &self.photos);
        self.relayout();
    }

    pub fn relayout(&mut self) {
        self.front_index = layout(&mut self.cards, self.base_rotation);
    }

    pub fn rotate_by(&mut self, degrees: f64) {
        self.base_rotation += degrees;
        self.relayout();
    }

    /// Begin a drag. Any residual inertia stops immediately.
    pub fn drag_start(&mut self, source: InputSource, x: f64) -> bool {
        self.drag.start(source, x)
    }

    pub fn drag_move(&mut self, source: InputSource, x: f64) {
        if let Some(delta) = self.drag.move_to(source, x) {
            self.rotate_by(delta);
        }
    }

    /// End (or cancel) a drag. The first inertia frame runs right away;
    /// returns true when more frames are needed.
    pub fn drag_end(&mut self, source: InputSource) -> bool {
        if !self.drag.end(source) {
            return false;
        }
        self.inertia_step()
    }

    /// Advance inertia by one frame. Returns true while still coasting.
    pub fn inertia_step(&mut self) -> bool {
        match self.drag.step_inertia() {
            Some(delta) => {
                self.rotate_by(delta);
                true
            }
            None => false,
        }
    }

    pub fn cancel_inertia(&mut self) -> bool {
        self.drag.cancel_inertia()
    }

    pub fn open_viewer(&mut self, index: usize) -> Option<ViewerContent> {
        self.viewer.open(index, &self.photos)
    }

    pub fn close_viewer(&mut self) -> bool {
        self.viewer.close()
    }
}
