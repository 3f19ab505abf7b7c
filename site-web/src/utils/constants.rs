//! Application constants

// Viewport reveal timing
pub const REVEAL_DURATION_MS: u32 = 600;
pub const REVEAL_OFFSET_PX: u32 = 20;
pub const DELAY_CHILDREN_MS: u32 = 100;
pub const STAGGER_CHILDREN_MS: u32 = 100;

/// Fraction of the footer that must be visible before it reveals
pub const VIEWPORT_AMOUNT: f64 = 0.3;

// CSS hooks shared with style/main.css
pub const REVEAL_CLASS: &str = "reveal";
pub const IN_VIEW_CLASS: &str = "in-view";

// UI constants
pub const ICON_SIZE: u32 = 16;
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";
