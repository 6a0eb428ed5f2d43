//! Background music via the APlayer widget

use wasm_bindgen::JsValue;
use web_sys::Element;

use super::bindings::{APlayer, to_js};
use crate::config::PlayerConfig;

/// Music player wrapper. Silently inert if the widget never loaded.
pub struct MusicPlayer {
    player: Option<APlayer>,
}

impl MusicPlayer {
    pub fn new(container: Option<&Element>, config: &PlayerConfig) -> Self {
        let player = match Self::create(container, config) {
            Ok(player) => {
                log::info!(
                    "Music player ready ({} track(s), preload={})",
                    config.audio.len(),
                    config.preload.as_str()
                );
                Some(player)
            }
            Err(e) => {
                log::warn!("Failed to create music player - music disabled: {:?}", e);
                None
            }
        };
        Self { player }
    }

    fn create(container: Option<&Element>, config: &PlayerConfig) -> Result<APlayer, JsValue> {
        let options = to_js(config)?;
        if let Some(container) = container {
            js_sys::Reflect::set(&options, &JsValue::from_str("container"), container)?;
        }
        APlayer::new(&options)
    }

    /// Start playback (must follow a user gesture)
    pub fn play(&self) {
        let Some(player) = &self.player else { return };
        match player.play() {
            Ok(_) => log::info!("Music started"),
            Err(e) => log::warn!("Music playback failed: {:?}", e),
        }
    }
}
