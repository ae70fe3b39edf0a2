use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::editor::map::Map;
use crate::editor::tile::{Item, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrushId(pub usize);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BrushKind {
    Ground { items: Vec<u16> },
    Doodad { items: Vec<u16> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brush {
    pub name: String,
    #[serde(flatten)]
    pub kind: BrushKind,
    #[serde(default)]
    pub color: Option<[u8; 3]>,
}

impl Brush {
    pub fn ground(name: &str, items: &[u16], color: [u8; 3]) -> Self {
        Self {
            name: name.to_string(),
            kind: BrushKind::Ground {
                items: items.to_vec(),
            },
            color: Some(color),
        }
    }

    pub fn doodad(name: &str, items: &[u16]) -> Self {
        Self {
            name: name.to_string(),
            kind: BrushKind::Doodad {
                items: items.to_vec(),
            },
            color: None,
        }
    }

    pub fn is_ground(&self) -> bool {
        matches!(&self.kind, BrushKind::Ground { items } if !items.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrushCatalog {
    brushes: Vec<Brush>,
}

impl BrushCatalog {
    pub fn new(brushes: Vec<Brush>) -> Self {
        Self { brushes }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read brush catalog {}", path.display()))?;
        let catalog: Self = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse brush catalog {}", path.display()))?;
        log::info!(
            "loaded {} brushes from {}",
            catalog.brushes.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.brushes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brushes.is_empty()
    }

    pub fn get(&self, id: BrushId) -> Option<&Brush> {
        self.brushes.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BrushId, &Brush)> {
        self.brushes
            .iter()
            .enumerate()
            .map(|(index, brush)| (BrushId(index), brush))
    }

    pub fn ground(&self, id: BrushId) -> Option<GroundBrush<'_>> {
        let brush = self.get(id)?;
        match &brush.kind {
            BrushKind::Ground { items } if !items.is_empty() => Some(GroundBrush {
                id,
                items,
            }),
            _ => None,
        }
    }
}

impl Default for BrushCatalog {
    fn default() -> Self {
        Self::new(vec![
            Brush::ground("grass", &[4526, 4527, 4528, 4529, 4530], [76, 132, 56]),
            Brush::ground("sand", &[231], [214, 190, 122]),
            Brush::ground("sea water", &[4608, 4609, 4610, 4611], [42, 86, 170]),
            Brush::ground("cave", &[351, 352, 353], [88, 80, 72]),
            Brush::doodad("tree", &[2700, 2701, 2702]),
        ])
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GroundBrush<'a> {
    pub id: BrushId,
    items: &'a [u16],
}

impl GroundBrush<'_> {
    pub fn draw(&self, _map: &Map, tile: &mut Tile) {
        let p = tile.position;
        let variant = hash4(p.x as u32, p.y as u32, p.z as u32, self.id.0 as u32) as usize
            % self.items.len();
        tile.ground = Some(Item {
            id: self.items[variant],
            brush: Some(self.id),
        });
    }
}

fn hash4(a: u32, b: u32, c: u32, d: u32) -> u32 {
    let mut x = a.wrapping_mul(0x9E37_79B9) ^ b.rotate_left(13) ^ c.rotate_left(7) ^ d;
    x ^= x >> 16;
    x = x.wrapping_mul(0x85EB_CA6B);
    x ^= x >> 13;
    x = x.wrapping_mul(0xC2B2_AE35);
    x ^ (x >> 16)
}
