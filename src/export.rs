use std::path::Path;

use anyhow::{Context, Result};
use glam::IVec3;
use image::{Rgb, RgbImage};

use crate::editor::brush::BrushCatalog;
use crate::editor::map::Map;
use crate::procgen::GenerationSize;

const EMPTY_COLOR: [u8; 3] = [0, 0, 0];
const UNKNOWN_GROUND_COLOR: [u8; 3] = [128, 128, 128];

pub fn render_layer(map: &Map, brushes: &BrushCatalog, layer: i32, width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let Some(tile) = map.tile_at(IVec3::new(x as i32, y as i32, layer)) else {
            return Rgb(EMPTY_COLOR);
        };
        let base = tile
            .ground_brush()
            .and_then(|id| brushes.get(id))
            .and_then(|brush| brush.color)
            .unwrap_or(UNKNOWN_GROUND_COLOR);
        if tile.borders.is_empty() {
            Rgb(base)
        } else {
            Rgb(base.map(|c| (c as u16 * 3 / 4) as u8))
        }
    })
}

pub fn export_layer_png(
    map: &Map,
    brushes: &BrushCatalog,
    size: GenerationSize,
    path: &Path,
) -> Result<()> {
    size.validate().context("cannot export layer")?;
    let GenerationSize {
        width,
        height,
        layer,
    } = size;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    render_layer(map, brushes, layer, width as u32, height as u32)
        .save(path)
        .with_context(|| format!("failed to encode {}", path.display()))?;
    log::info!("layer {layer} preview saved: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::brush::BrushId;
    use crate::editor::tile::{BorderItem, Direction, Tile};

    #[test]
    fn colours_follow_ground_brushes() {
        let brushes = BrushCatalog::default();
        let mut map = Map::default();
        let mut grass = Tile::new(IVec3::new(0, 0, 7));
        brushes.ground(BrushId(0)).unwrap().draw(&map, &mut grass);
        map.swap_tile(grass.position, Some(grass));
        let mut water = Tile::new(IVec3::new(1, 0, 7));
        brushes.ground(BrushId(2)).unwrap().draw(&map, &mut water);
        water.borders.push(BorderItem {
            direction: Direction::West,
            brush: BrushId(0),
        });
        map.swap_tile(water.position, Some(water));

        let image = render_layer(&map, &brushes, 7, 3, 1);

        assert_eq!(image.get_pixel(0, 0).0, [76, 132, 56]);
        assert_eq!(image.get_pixel(1, 0).0, [31, 64, 127]);
        assert_eq!(image.get_pixel(2, 0).0, EMPTY_COLOR);
    }

    #[test]
    fn export_writes_a_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("layer.png");
        let size = GenerationSize::new(4, 2, 7);
        export_layer_png(&Map::default(), &BrushCatalog::default(), size, &path).unwrap();
        let image = image::open(&path).unwrap();
        assert_eq!((image.width(), image.height()), (4, 2));
    }

    #[test]
    fn export_rejects_invalid_size_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layer.png");
        let size = GenerationSize::new(-1, 2, 7);

        let err = export_layer_png(&Map::default(), &BrushCatalog::default(), size, &path)
            .unwrap_err();

        assert!(err.to_string().contains("cannot export layer"));
        assert!(!path.exists());
    }
}
