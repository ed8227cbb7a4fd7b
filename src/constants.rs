// Page wiring constants shared by the web front-end.

// Feed
pub const FEED_ENDPOINT: &str = "/.netlify/functions/cloudinary-random";

// Stage and status line
pub const STAGE_ID: &str = "stage";
pub const STATUS_ID: &str = "status";

// Viewer overlay
pub const VIEWER_ID: &str = "viewer";
pub const VIEWER_BG_ID: &str = "viewerBg";
pub const VIEWER_CARD_ID: &str = "viewerCard";
pub const VIEWER_TITLE_ID: &str = "viewerTitle";
pub const VIEWER_META_ID: &str = "viewerMeta";
pub const VIEWER_DESC_ID: &str = "viewerDesc";
pub const VIEWER_CLOSE_ID: &str = "viewerClose";

// CSS classes
pub const CARD_CLASS: &str = "card";
pub const CARD_LABEL_CLASS: &str = "label";
pub const FRONT_CLASS: &str = "front"; // toggled on the card facing the viewer
pub const ACTIVE_CLASS: &str = "active"; // viewer is visible
