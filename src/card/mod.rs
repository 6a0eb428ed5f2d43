//! Card logic
//!
//! Pure and target-independent: no DOM access, randomness only through an
//! injected RNG. The platform layer measures elements, calls in, and renders
//! whatever `CardController::view` says.

pub mod controller;
pub mod hearts;
pub mod positioner;

pub use controller::{CardController, CardEvent, CardStage, CardView};
pub use hearts::{HEART_SVG, Heart, generate_hearts};
pub use positioner::{
    EvasivePositioner, gap_for_width, initialize_layout, is_near, relocate_randomly,
};
