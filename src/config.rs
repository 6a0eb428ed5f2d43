//! Card configuration
//!
//! Assets, texts, the confetti burst and the music player are all data.
//! The page may override any of it with an inline JSON block; nothing is
//! ever written back.

use serde::{Deserialize, Serialize};

/// APlayer preload strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PreloadStrategy {
    None,
    Metadata,
    #[default]
    Auto,
}

impl PreloadStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreloadStrategy::None => "none",
            PreloadStrategy::Metadata => "metadata",
            PreloadStrategy::Auto => "auto",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(PreloadStrategy::None),
            "metadata" | "meta" => Some(PreloadStrategy::Metadata),
            "auto" => Some(PreloadStrategy::Auto),
            _ => None,
        }
    }
}

impl TryFrom<String> for PreloadStrategy {
    type Error = String;

    /// Case-insensitive, accepts the same aliases as `from_str`
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str(&s).ok_or_else(|| format!("unknown preload strategy: {s}"))
    }
}

/// One playlist entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
    pub artist: String,
    pub url: String,
    pub cover: String,
    pub theme: String,
}

/// Music player widget options (everything except the container element)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Compact display
    pub mini: bool,
    pub theme: String,
    pub preload: PreloadStrategy,
    /// Always false in practice: playback waits for the overlay button
    pub autoplay: bool,
    /// Pinned to the page corner
    pub fixed: bool,
    pub audio: Vec<Track>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            mini: true,
            theme: "#FADFA3".to_string(),
            preload: PreloadStrategy::Auto,
            autoplay: false,
            fixed: true,
            audio: vec![Track {
                name: "Only Girl".to_string(),
                artist: "Stephen Sanchez".to_string(),
                url: "/url1.mp3".to_string(),
                cover: "/album.jpg".to_string(),
                theme: "#FADFA3".to_string(),
            }],
        }
    }
}

/// Vertical origin of the burst, fraction of the viewport height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurstOrigin {
    pub y: f32,
}

/// Parameters for the confetti burst on "Yes"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfettiBurst {
    pub particle_count: u32,
    /// Spread angle (degrees)
    pub spread: f32,
    pub origin: BurstOrigin,
}

impl Default for ConfettiBurst {
    fn default() -> Self {
        Self {
            particle_count: 260,
            spread: 120.0,
            origin: BurstOrigin { y: 0.65 },
        }
    }
}

/// Image paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assets {
    /// Shown while the pointer is away from the No button
    pub cute_gif: String,
    /// Shown while the pointer is near the No button
    pub sad_gif: String,
    /// Celebration card image
    pub main_image: String,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            cute_gif: "/cute-gif-1.gif".to_string(),
            sad_gif: "/sad-gif-1.gif".to_string(),
            main_image: "/main-image.png".to_string(),
        }
    }
}

/// Every visible string on the card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Texts {
    pub question: String,
    pub accept_label: String,
    pub decline_label: String,
    pub celebration_title: String,
    pub celebration_subtitle: String,
    pub overlay_title: String,
    pub overlay_question: String,
    pub overlay_button: String,
}

impl Default for Texts {
    fn default() -> Self {
        Self {
            question: "💖 Will you be my Valentine? 💖".to_string(),
            accept_label: "Yes 💖".to_string(),
            decline_label: "No 🙈".to_string(),
            celebration_title: "💝 You make me the happiest! 💝".to_string(),
            celebration_subtitle: "Let's make this Valentine's Day unforgettable together! 💕"
                .to_string(),
            overlay_title: "🎵 Your Valentine Awaits".to_string(),
            overlay_question: "Would you like to play some music?".to_string(),
            overlay_button: "Play 🎵".to_string(),
        }
    }
}

/// Complete card configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub assets: Assets,
    pub text: Texts,
    pub burst: ConfettiBurst,
    pub player: PlayerConfig,
}

impl CardConfig {
    /// Id of the optional `<script type="application/json">` override block
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    const ELEMENT_ID: &'static str = "card-config";

    /// Parse an override block; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the page's override block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded card config from #{}", Self::ELEMENT_ID);
                    return config;
                }
                Err(e) => log::warn!("Ignoring malformed card config: {}", e),
            }
        }

        log::info!("Using default card config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
