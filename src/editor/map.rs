use std::collections::HashMap;

use glam::IVec3;

use crate::editor::tile::Tile;

pub const MAX_LAYER: i32 = 15;

#[derive(Debug, Clone)]
pub struct TileLocation {
    pub position: IVec3,
    tile: Option<Tile>,
}

impl TileLocation {
    pub fn get(&self) -> Option<&Tile> {
        self.tile.as_ref()
    }

    /// A tile that can be edited without touching the stored one: a deep copy
    /// of the existing tile, or a fresh empty tile for this position.
    pub fn tile_for_write(&self) -> Tile {
        match &self.tile {
            Some(existing) => existing.clone(),
            None => Tile::new(self.position),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Map {
    locations: HashMap<IVec3, TileLocation>,
}

impl Map {
    pub fn create_tile_location(&mut self, position: IVec3) -> &TileLocation {
        self.locations
            .entry(position)
            .or_insert_with(|| TileLocation {
                position,
                tile: None,
            })
    }

    pub fn tile_at(&self, position: IVec3) -> Option<&Tile> {
        self.locations.get(&position).and_then(TileLocation::get)
    }

    pub fn swap_tile(&mut self, position: IVec3, tile: Option<Tile>) -> Option<Tile> {
        let location = self
            .locations
            .entry(position)
            .or_insert_with(|| TileLocation {
                position,
                tile: None,
            });
        std::mem::replace(&mut location.tile, tile)
    }

    pub fn tile_count(&self) -> usize {
        self.locations.values().filter(|l| l.tile.is_some()).count()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.locations.values().filter_map(TileLocation::get)
    }
}
