//! Host settings for lakeside.
//!
//! Settings live in `config.toml` under the platform config directory. Every
//! field has a default, so a missing file or a partial file both work. The
//! backdrop itself is not configurable; these settings cover frame pacing,
//! cell geometry and the page content drawn over the backdrop.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use lakeside_core::{CellMetrics, Paint};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.toml";
const MAX_FRAME_RATE: u32 = 240;

/// Application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target frames per second.
    pub frame_rate: u32,
    /// Logical pixels per terminal cell, horizontally.
    pub cell_width_px: f64,
    /// Logical pixels per terminal cell, vertically.
    pub cell_height_px: f64,
    /// Page colour the translucent backdrop is blended over.
    pub page_background: [u8; 3],
    pub page: PageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            cell_width_px: 8.0,
            cell_height_px: 16.0,
            page_background: [12, 20, 31],
            page: PageConfig::default(),
        }
    }
}

/// Content of the page drawn over the backdrop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    /// Id of the contact form; empty leaves the page without a form.
    pub form_id: String,
    pub cards: Vec<CardConfig>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Lakeside".to_string(),
            form_id: "contact-form".to_string(),
            cards: vec![
                CardConfig::tilting("Fish", "Fifteen of them, swimming both ways."),
                CardConfig::tilting("Birds", "Five, always heading east."),
                CardConfig::tilting("Leaves", "Falling one at a time."),
            ],
        }
    }
}

impl PageConfig {
    /// Id of the page's form, if it has one.
    pub fn form(&self) -> Option<&str> {
        Some(self.form_id.as_str()).filter(|id| !id.is_empty())
    }
}

/// One card on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    pub title: String,
    pub body: String,
    /// Class markers of the card element.
    #[serde(default)]
    pub classes: Vec<String>,
    /// Class markers of the card's inner wrapper.
    #[serde(default)]
    pub inner_classes: Vec<String>,
}

impl CardConfig {
    fn tilting(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            classes: vec!["card".to_string(), "tilt-card".to_string()],
            inner_classes: vec!["tilt-inner".to_string()],
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn inner_has_class(&self, class: &str) -> bool {
        self.inner_classes.iter().any(|c| c == class)
    }
}

impl Config {
    /// Default location of the settings file, if the platform has one.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "lakeside").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location. A missing file yields defaults.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("no config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`. A missing file yields defaults; a malformed one is an
    /// error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("{} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        let config: Config =
            toml::from_str(&text).wrap_err_with(|| format!("invalid config in {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config.sanitized())
    }

    /// Write to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .wrap_err_with(|| format!("failed to create {}", dir.display()))?;
        }
        let text = toml::to_string_pretty(self).wrap_err("failed to serialize config")?;
        fs::write(path, text).wrap_err_with(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Clamp values into workable ranges.
    pub fn sanitized(mut self) -> Self {
        self.frame_rate = self.frame_rate.clamp(1, MAX_FRAME_RATE);
        if !(self.cell_width_px >= 1.0) {
            self.cell_width_px = 1.0;
        }
        if !(self.cell_height_px >= 1.0) {
            self.cell_height_px = 1.0;
        }
        self
    }

    /// Time budget of one frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    pub fn cell_metrics(&self) -> CellMetrics {
        CellMetrics::new(self.cell_width_px, self.cell_height_px)
    }

    pub fn background(&self) -> Paint {
        let [r, g, b] = self.page_background;
        Paint::rgb(r, g, b)
    }
}
