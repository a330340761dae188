//! Game settings and preferences
//!
//! Read-only configuration: LocalStorage on the web, a JSON file named by
//! `NEON_BRICKS_SETTINGS` on native. Missing or malformed settings fall back
//! to defaults.

use serde::{Deserialize, Serialize};

use crate::renderer::RenderOptions;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visuals ===
    /// Cycle entity colours over time (off = frozen palette)
    pub color_cycle: bool,
    /// Glow around the playfield
    pub glow: bool,
    /// Score and lives readout
    pub show_hud: bool,

    // === Play ===
    /// Let the demo player steer the paddle
    pub autopilot: bool,
    /// Upper bound on ticks for a headless (native) session
    pub max_headless_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color_cycle: true,
            glow: true,
            show_hud: true,

            autopilot: false,
            max_headless_ticks: 200_000,
        }
    }
}

impl Settings {
    /// LocalStorage key (web)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "neon_bricks_settings";

    /// Environment variable holding a settings file path (native)
    pub const ENV_VAR: &'static str = "NEON_BRICKS_SETTINGS";

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            glow: self.glow,
            show_hud: self.show_hud,
        }
    }

    /// Parse settings from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring malformed settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the file named by `NEON_BRICKS_SETTINGS` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read settings file {}: {}", path, e);
                Self::default()
            }
        }
    }
}
