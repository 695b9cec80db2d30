// Page wiring and presentation constants for the web frontend.
// Element ids match the controls in `index.html`.

// Canvas and overlays
pub const CANVAS_ID: &str = "app-canvas";
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const LOADING_SCREEN_DELAY_MS: i32 = 1500;
pub const HIDDEN_CLASS: &str = "hidden";

// Controls
pub const BTN_TREE_ID: &str = "btn-tree";
pub const BTN_HEART_ID: &str = "btn-heart";
pub const BTN_AUTO_ID: &str = "btn-auto";
pub const CONTROL_BTN_SELECTOR: &str = ".control-btn";
pub const ACTIVE_CLASS: &str = "active";
pub const PARTICLE_COUNT_INPUT_ID: &str = "particle-count";
pub const PARTICLE_COUNT_LABEL_ID: &str = "particle-count-value";
pub const TWINKLE_SPEED_INPUT_ID: &str = "twinkle-speed";

// Backing store resolution is capped at 2x device pixels
pub const MAX_PIXEL_RATIO: f64 = 2.0;
