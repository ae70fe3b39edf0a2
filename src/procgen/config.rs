use std::path::Path;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::procgen::observer::SettingsReader;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub automagic: bool,
    pub progress_interval_rows: u32,
    pub resample_filter: ResampleFilter,
    pub classifier: ClassifierConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            automagic: true,
            progress_interval_rows: 64,
            resample_filter: ResampleFilter::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::info!("no {} found, using defaults", path.display());
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("loaded {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("failed to parse {}: {e}, using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

impl SettingsReader for GeneratorConfig {
    fn border_reconciliation(&self) -> bool {
        self.automagic
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub water_blue_min: u8,
    pub dark_brightness: u8,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            water_blue_min: 100,
            dark_brightness: 35,
        }
    }
}
