use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Persisted per-user calibration state. The center must survive restarts;
/// the average angle is a derived runtime baseline and is not saved.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub calibrated: bool,
    pub center_x: f32,
    pub center_y: f32,
}

/// JSON-backed profile storage in a data directory.
pub struct ProfileStore {
    path: PathBuf,
    pub profile: UserProfile,
}

impl ProfileStore {
    pub fn new(data_dir: &str) -> Result<Self> {
        if !Path::new(data_dir).exists() {
            fs::create_dir_all(data_dir)
                .with_context(|| format!("Failed to create data dir {}", data_dir))?;
        }

        let path = Path::new(data_dir).join("profile.json");
        let profile = if path.exists() {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            match serde_json::from_reader(file) {
                Ok(p) => {
                    println!("Loaded user profile from {}", path.display());
                    p
                }
                Err(e) => {
                    println!("Error parsing profile: {}. Starting uncalibrated.", e);
                    UserProfile::default()
                }
            }
        } else {
            UserProfile::default()
        };

        Ok(Self { path, profile })
    }

    pub fn save(&self) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        serde_json::to_writer_pretty(file, &self.profile).context("Failed to serialize profile")?;
        Ok(())
    }
}
