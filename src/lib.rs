//! Valentine Card - an interactive greeting card in the browser
//!
//! Core modules:
//! - `geometry`: Viewport-space rectangles and positions
//! - `card`: Evasive "No" button, card stages, floating hearts
//! - `config`: Assets, texts, confetti and music player settings
//! - `platform`: Browser bindings (DOM, listeners, timers, JS widgets)

pub mod card;
pub mod config;
pub mod geometry;
#[cfg(target_arch = "wasm32")]
pub mod platform;

pub use card::{CardController, CardEvent, CardStage, CardView, EvasivePositioner};
pub use config::{CardConfig, ConfettiBurst, PlayerConfig, PreloadStrategy, Track};
pub use geometry::{ControlPosition, Rect, Size, Viewport};

/// Layout and timing constants
pub mod consts {
    /// Viewport breakpoints for the Yes/No gap table (px)
    pub const BREAKPOINT_SM: f32 = 576.0;
    pub const BREAKPOINT_MD: f32 = 768.0;
    pub const BREAKPOINT_LG: f32 = 992.0;

    /// Gap between the Yes button's right edge and the No button (px)
    pub const GAP_XS: f32 = 80.0; // Phones
    pub const GAP_SM: f32 = 120.0; // Small tablets
    pub const GAP_MD: f32 = 180.0; // Tablets / small laptops
    pub const GAP_LG: f32 = 250.0; // Desktop

    /// Space kept between the No button and the right viewport edge
    pub const OVERFLOW_MARGIN: f32 = 20.0;
    /// Minimum distance of the No button from the left viewport edge
    pub const MIN_LEFT: f32 = 10.0;
    /// Vertical offset when the No button drops below the Yes button
    pub const BELOW_OFFSET: f32 = 20.0;
    /// Width assumed for the No button before it has been laid out
    pub const DEFAULT_DECLINE_WIDTH: f32 = 100.0;

    /// Margin from every viewport edge for random relocation
    pub const RELOCATE_MARGIN: f32 = 20.0;

    /// Pointer distance (px) from the No button's center that counts as "close"
    pub const PROXIMITY_THRESHOLD: f32 = 100.0;

    /// Delay between the confetti burst and the celebration card (ms)
    pub const REVEAL_DELAY_MS: u32 = 500;

    /// Floating hearts
    pub const HEART_COUNT: usize = 15;
    pub const HEART_MIN_SIZE: f32 = 15.0;
    pub const HEART_MAX_SIZE: f32 = 45.0;
    pub const HEART_MIN_DURATION: f32 = 2.0;
    pub const HEART_MAX_DURATION: f32 = 6.0;
    pub const HEART_MAX_DELAY: f32 = 2.0;
    /// Hearts start this far below the bottom edge (px)
    pub const HEART_START_OFFSET: f32 = 50.0;
}
