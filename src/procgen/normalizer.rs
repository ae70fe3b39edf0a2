use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};

use crate::procgen::config::ResampleFilter;
use crate::procgen::error::GenerationError;

#[derive(Debug, Clone)]
pub struct PixelBuffer {
    image: RgbImage,
}

impl PixelBuffer {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }
}

pub struct ImageNormalizer {
    filter: FilterType,
}

impl ImageNormalizer {
    pub fn new(filter: ResampleFilter) -> Self {
        Self {
            filter: filter.into(),
        }
    }

    pub fn decode(&self, path: &Path) -> Result<DynamicImage, GenerationError> {
        let image = image::open(path).map_err(|source| GenerationError::LoadFailure {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "decoded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(image)
    }

    pub fn fit(&self, image: DynamicImage, width: u32, height: u32) -> PixelBuffer {
        let rgb = image.into_rgb8();
        if rgb.width() == width && rgb.height() == height {
            return PixelBuffer { image: rgb };
        }
        PixelBuffer {
            image: image::imageops::resize(&rgb, width, height, self.filter),
        }
    }
}
