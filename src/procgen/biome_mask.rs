use crate::procgen::biome::{classify, Biome};
use crate::procgen::config::ClassifierConfig;
use crate::procgen::layer::Layer;
use crate::procgen::normalizer::PixelBuffer;

#[derive(Debug, Clone)]
pub struct BiomeMask {
    pub width: u32,
    pub height: u32,
    pub values: Vec<Biome>,
}

impl BiomeMask {
    pub fn rows(&self) -> impl Iterator<Item = &[Biome]> {
        self.values.chunks(self.width.max(1) as usize)
    }
}

pub struct BiomeLayer {
    config: ClassifierConfig,
}

impl BiomeLayer {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }
}

impl Layer<&PixelBuffer, BiomeMask> for BiomeLayer {
    fn generate(&self, pixels: &PixelBuffer) -> BiomeMask {
        let (width, height) = (pixels.width(), pixels.height());
        let values = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| classify(pixels.pixel(x, y), &self.config))
            .collect();

        BiomeMask {
            width,
            height,
            values,
        }
    }
}
