use glam::{IVec2, IVec3};

use crate::editor::brush::BrushId;
use crate::editor::map::Map;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub id: u16,
    pub brush: Option<BrushId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub fn offset(self) -> IVec2 {
        match self {
            Direction::North => IVec2::new(0, -1),
            Direction::NorthEast => IVec2::new(1, -1),
            Direction::East => IVec2::new(1, 0),
            Direction::SouthEast => IVec2::new(1, 1),
            Direction::South => IVec2::new(0, 1),
            Direction::SouthWest => IVec2::new(-1, 1),
            Direction::West => IVec2::new(-1, 0),
            Direction::NorthWest => IVec2::new(-1, -1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderItem {
    pub direction: Direction,
    pub brush: BrushId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub position: IVec3,
    pub ground: Option<Item>,
    pub borders: Vec<BorderItem>,
    pub items: Vec<Item>,
}

impl Tile {
    pub fn new(position: IVec3) -> Self {
        Self {
            position,
            ground: None,
            borders: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn ground_brush(&self) -> Option<BrushId> {
        self.ground.and_then(|item| item.brush)
    }

    pub fn clean_borders(&mut self) {
        self.borders.clear();
    }

    /// Rebuilds border items against the neighbours currently stored in `map`.
    /// Tiles pending in an uncommitted action are not visible here.
    pub fn borderize(&mut self, map: &Map) {
        self.borders.clear();
        let Some(own) = self.ground_brush() else {
            return;
        };

        for direction in Direction::ALL {
            let offset = direction.offset();
            let neighbour = self.position + offset.extend(0);
            let Some(other) = map.tile_at(neighbour).and_then(Tile::ground_brush) else {
                continue;
            };
            if other != own {
                self.borders.push(BorderItem {
                    direction,
                    brush: other,
                });
            }
        }
    }
}
