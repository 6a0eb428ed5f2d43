//! Browser platform layer (wasm32 only)
//!
//! Handles everything the pure card logic must not touch:
//! - Element lookup, measurement and rendering (`dom`)
//! - Event listener and timer lifetimes (`mount`)
//! - The confetti and music player JS widgets (`bindings`, `audio`)

pub mod audio;
pub mod bindings;
pub mod dom;
pub mod mount;

pub use mount::{CardMount, mount_card, unmount_card};
