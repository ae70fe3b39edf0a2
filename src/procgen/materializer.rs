use glam::IVec3;

use crate::editor::action::{Action, Change};
use crate::editor::brush::{BrushCatalog, GroundBrush};
use crate::editor::map::Map;
use crate::editor::tile::Tile;
use crate::procgen::biome::Biome;
use crate::procgen::biome_mask::BiomeMask;
use crate::procgen::observer::{ProgressSink, SettingsReader};
use crate::procgen::selector::BiomePair;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub tiles_changed: usize,
    pub land_cells: usize,
    pub water_cells: usize,
}

pub struct TileMaterializer<'a> {
    land: GroundBrush<'a>,
    water: GroundBrush<'a>,
    layer: i32,
    progress_interval_rows: u32,
}

impl<'a> TileMaterializer<'a> {
    pub fn new(
        catalog: &'a BrushCatalog,
        pair: BiomePair,
        layer: i32,
        progress_interval_rows: u32,
    ) -> Option<Self> {
        let land = catalog.ground(pair.land)?;
        let water = catalog.ground(pair.water).unwrap_or(land);
        Some(Self {
            land,
            water,
            layer,
            progress_interval_rows: progress_interval_rows.max(1),
        })
    }

    /// Paints every mask cell, top row first and left to right, recording one
    /// change per cell into `action`. The map itself is only read here; the
    /// new tiles land in the map when the action is committed.
    pub fn paint(
        &self,
        map: &mut Map,
        mask: &BiomeMask,
        action: &mut Action,
        settings: &dyn SettingsReader,
        progress: &mut dyn ProgressSink,
    ) -> GenerationStats {
        let mut stats = GenerationStats::default();

        for (y, row) in mask.rows().enumerate() {
            let y = y as u32;
            if y % self.progress_interval_rows == 0 {
                let percent = (100.0 * y as f64 / mask.height as f64) as i32;
                if let Err(e) = progress.report_progress(percent) {
                    log::debug!("progress observer failed at row {y}: {e}");
                }
            }

            for (x, biome) in row.iter().enumerate() {
                let position = IVec3::new(x as i32, y as i32, self.layer);
                let tile = self.paint_cell(map, position, *biome, settings);
                action.add_change(Change::new(tile));

                stats.tiles_changed += 1;
                match biome {
                    Biome::Land => stats.land_cells += 1,
                    Biome::Water => stats.water_cells += 1,
                }
            }
        }

        stats
    }

    fn paint_cell(
        &self,
        map: &mut Map,
        position: IVec3,
        biome: Biome,
        settings: &dyn SettingsReader,
    ) -> Tile {
        let brush = match biome {
            Biome::Land => &self.land,
            Biome::Water => &self.water,
        };

        let automagic = settings.border_reconciliation();
        let mut tile = map.create_tile_location(position).tile_for_write();
        if automagic {
            tile.clean_borders();
        }

        tile.ground = None;
        brush.draw(map, &mut tile);

        if automagic {
            tile.borderize(map);
        }
        tile
    }
}
