// Shared orbit/interaction tuning constants used by every front-end.

// Orbit layout
pub const ORBIT_RADIUS: f64 = 520.0; // px from the orbit axis to each card
pub const ARCH_HEIGHT: f64 = 40.0; // how far a back card sinks below the front one

// Depth mapping
pub const SCALE_MIN: f64 = 0.65; // card directly behind the axis
pub const SCALE_SPAN: f64 = 0.4; // added at full depth
pub const OPACITY_MIN: f64 = 0.25;
pub const OPACITY_SPAN: f64 = 0.75;
pub const Z_INDEX_BASE: i32 = 100;
pub const Z_INDEX_SPAN: f64 = 100.0;

// Interaction
pub const DRAG_DEGREES_PER_PX: f64 = 0.25; // applied inverted: dragging right turns the orbit left
pub const INERTIA_DECAY: f64 = 0.94; // per-frame velocity multiplier after release
pub const INERTIA_STOP_SPEED: f64 = 0.1; // px/frame below which the orbit comes to rest

// Feed defaults
pub const DEFAULT_TITLE_PREFIX: &str = "my_love";
pub const DEFAULT_DESCRIPTION_PREFIX: &str = "Wedding memory";
pub const VIEWER_PLACEHOLDER_DESCRIPTION: &str = "Today's photo.";

#[inline]
pub fn scale_max() -> f64 {
    SCALE_MIN + SCALE_SPAN
}

#[inline]
pub fn opacity_max() -> f64 {
    OPACITY_MIN + OPACITY_SPAN
}
