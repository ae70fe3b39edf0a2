use crate::procgen::config::ClassifierConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Biome {
    Land,
    Water,
}

pub fn classify(rgb: [u8; 3], config: &ClassifierConfig) -> Biome {
    let [r, g, b] = rgb;
    let brightness = (r as u32 + g as u32 + b as u32) / 3;

    let blue_dominant = b > r && b > g && b > config.water_blue_min;
    let dark = brightness < config.dark_brightness as u32;
    if blue_dominant || dark {
        Biome::Water
    } else {
        Biome::Land
    }
}
