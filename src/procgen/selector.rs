use crate::editor::brush::{BrushCatalog, BrushId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiomePair {
    pub land: BrushId,
    pub water: BrushId,
}

impl BiomePair {
    pub fn select(catalog: &BrushCatalog) -> Option<Self> {
        let (land, water) = select_defaults(catalog);
        let land = land?;
        Some(Self {
            land,
            water: water.unwrap_or(land),
        })
    }

    pub fn water_aliases_land(&self) -> bool {
        self.water == self.land
    }
}

/// Picks land (`grass`, then `sand`, then any ground) and water (`water`, then
/// `ocean`, then land) by case-insensitive substring match on brush names.
pub fn select_defaults(catalog: &BrushCatalog) -> (Option<BrushId>, Option<BrushId>) {
    let land = find_ground_by_name(catalog, "grass")
        .or_else(|| find_ground_by_name(catalog, "sand"))
        .or_else(|| first_ground(catalog));
    let water = find_ground_by_name(catalog, "water")
        .or_else(|| find_ground_by_name(catalog, "ocean"))
        .or(land);
    (land, water)
}

fn find_ground_by_name(catalog: &BrushCatalog, needle: &str) -> Option<BrushId> {
    catalog
        .iter()
        .find(|(_, brush)| brush.is_ground() && brush.name.to_lowercase().contains(needle))
        .map(|(id, _)| id)
}

fn first_ground(catalog: &BrushCatalog) -> Option<BrushId> {
    catalog
        .iter()
        .find(|(_, brush)| brush.is_ground())
        .map(|(id, _)| id)
}
