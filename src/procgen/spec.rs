use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::editor::map::MAX_LAYER;
use crate::procgen::error::GenerationError;

pub const MAX_DIMENSION: i32 = 65000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSize {
    pub width: i32,
    pub height: i32,
    pub layer: i32,
}

impl GenerationSize {
    pub fn new(width: i32, height: i32, layer: i32) -> Self {
        Self {
            width,
            height,
            layer,
        }
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        let dimension_ok = |d: i32| d > 0 && d <= MAX_DIMENSION;
        if dimension_ok(self.width)
            && dimension_ok(self.height)
            && (0..=MAX_LAYER).contains(&self.layer)
        {
            Ok(())
        } else {
            Err(GenerationError::InvalidSize {
                width: self.width,
                height: self.height,
                layer: self.layer,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GenerationSource {
    ImageMask {
        image_path: PathBuf,
        #[serde(default)]
        legend_path: Option<PathBuf>,
    },
    TextPrompt {
        prompt: String,
    },
}

impl GenerationSource {
    pub fn kind(&self) -> SourceKind {
        match self {
            GenerationSource::ImageMask { .. } => SourceKind::ImageMask,
            GenerationSource::TextPrompt { .. } => SourceKind::TextPrompt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    ImageMask,
    TextPrompt,
}

impl FromStr for SourceKind {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" | "image_mask" | "image-mask" => Ok(SourceKind::ImageMask),
            "prompt" | "text_prompt" | "text-prompt" => Ok(SourceKind::TextPrompt),
            other => Err(GenerationError::UnknownSource(other.to_string())),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::ImageMask => f.write_str("image_mask"),
            SourceKind::TextPrompt => f.write_str("text_prompt"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSpec {
    pub size: GenerationSize,
    pub seed: u32,
    pub source: GenerationSource,
}

impl GenerationSpec {
    pub fn image_mask(size: GenerationSize, seed: u32, image_path: impl Into<PathBuf>) -> Self {
        Self {
            size,
            seed,
            source: GenerationSource::ImageMask {
                image_path: image_path.into(),
                legend_path: None,
            },
        }
    }

    pub fn text_prompt(size: GenerationSize, seed: u32, prompt: impl Into<String>) -> Self {
        Self {
            size,
            seed,
            source: GenerationSource::TextPrompt {
                prompt: prompt.into(),
            },
        }
    }
}
