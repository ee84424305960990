//! Render settings: JSON file values with command line overrides.

use crate::cli::Args;
use anyhow::{Context, Result};
use log::warn;
use lumen_renderer::{CameraConfig, RenderConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Contents of a `--config` file. Missing sections fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Replaces the scene's own camera when present
    pub camera: Option<CameraConfig>,
    pub render: RenderConfig,
}

impl Settings {
    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Render configuration with command line overrides applied.
    pub fn render_config(&self, args: &Args) -> RenderConfig {
        let mut config = self.render.clone();
        if let Some(samples) = args.samples {
            config.samples_per_pixel = samples;
        }
        if let Some(max_depth) = args.max_depth {
            config.max_depth = max_depth;
        }
        if let Some(seed) = args.seed {
            config.seed = seed;
        }
        if config.samples_per_pixel == 0 {
            warn!("samples_per_pixel of 0 raised to 1");
            config.samples_per_pixel = 1;
        }
        config
    }

    /// Camera configuration: file camera or `scene_camera`, then overrides.
    pub fn camera_config(&self, args: &Args, scene_camera: CameraConfig) -> CameraConfig {
        let mut config = self.camera.clone().unwrap_or(scene_camera);
        if let Some(width) = args.width {
            config.image_width = width;
        }
        config
    }
}
