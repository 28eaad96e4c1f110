use crate::types::CameraFacing;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub capture: CaptureConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Sizes the calibration window: frames_per_second * 2 samples (~2 s).
    pub frames_per_second: u32,
    pub facing: CameraFacing,
    pub data_dir: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Evaluate a direction every Nth frame (the should-act cadence).
    pub act_interval: u32,
    pub smoothing_alpha: f32,
    pub frames: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            frames_per_second: 15,
            facing: CameraFacing::Front,
            data_dir: "profile_data".to_string(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            act_interval: 5,
            smoothing_alpha: 0.4,
            frames: 240,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            capture: CaptureConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

impl AppConfig {
    const PATH: &'static str = "config.json";

    pub fn load() -> Result<Self> {
        let config = if Path::new(Self::PATH).exists() {
            let content = fs::read_to_string(Self::PATH)?;
            // Missing fields fall back to Default thanks to #[serde(default)]
            match serde_json::from_str::<AppConfig>(&content) {
                Ok(c) => {
                    println!("Loaded configuration from {}", Self::PATH);
                    c
                }
                Err(e) => {
                    println!("Error parsing config: {}. Loading defaults.", e);
                    Self::default()
                }
            }
        } else {
            println!("Configuration file not found. Creating default at {}", Self::PATH);
            Self::default()
        };

        // Always save back to ensure new fields are populated in the file
        config.save()?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::PATH, content)?;
        Ok(())
    }
}
