use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// How far a fast-forward/rewind press skips, in milliseconds.
    pub skip_increment_ms: i64,
    /// How long the controls stay visible after the last interaction.
    pub auto_hide_timeout_ms: u64,
    /// Brightness is never adjusted below this, the screen must stay readable.
    pub brightness_floor: f32,
    /// Width of each edge gesture zone as a fraction of the surface width.
    pub zone_fraction: f32,
    /// Volume steps exposed by the demo volume service.
    pub max_volume_steps: i32,
    /// Duration of the demo media, in milliseconds.
    pub demo_duration_ms: i64,
    /// Play an audible test tone so volume drags can be heard.
    pub demo_tone_enabled: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            skip_increment_ms: 10_000,
            auto_hide_timeout_ms: 3_000,
            brightness_floor: 0.01,
            zone_fraction: 0.2,
            max_volume_steps: 15,
            demo_duration_ms: 180_000,
            demo_tone_enabled: false,
        }
    }
}

impl OverlayConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path).map_err(|e| {
                anyhow::anyhow!("Failed to read config file at {}: {}", config_path.display(), e)
            })?;

            // A config that no longer parses gets replaced with defaults
            // rather than blocking startup.
            match serde_json::from_str::<Self>(&content) {
                Ok(config) => {
                    log::info!("Loaded existing config from {}", config_path.display());
                    Ok(config)
                }
                Err(e) => {
                    log::warn!("Config file exists but has issues ({}), creating new one with defaults", e);
                    let new_config = Self::default();
                    new_config.save()?;
                    log::info!("Created new config file at {}", config_path.display());
                    Ok(new_config)
                }
            }
        } else {
            log::info!("No config file found, creating default config");
            let config = Self::default();
            config.save()?;
            log::info!("Created new config file at {}", config_path.display());
            Ok(config)
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("swipe-controls")
            .join("config.json")
    }
}
