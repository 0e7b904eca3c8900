//! Per-cell biome classification from height, moisture, and river state.

use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::grid::TerrainGrid;
use crate::params::Thresholds;
use crate::rivers::RiverGrid;

/// Discrete terrain category assigned to every cell for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Sea,
    Shallows,
    Alpine,
    River,
    Mountain,
    Desert,
    Wasteland,
    Jungle,
    Forest,
    Hill,
    Plain,
}

/// Classify a single cell. Pure, per-cell, no ordering dependency.
///
/// The rule order is a contract, not an accident: alpine terrain is never
/// shown as river even when flagged, rivers override mountains below the
/// alpine line, and the moisture rules precede the hill rule.
pub fn classify(height: f32, moisture: f32, is_river: bool, t: &Thresholds) -> Biome {
    if height < t.height_sea {
        Biome::Sea
    } else if height < t.height_coast {
        Biome::Shallows
    } else if height > t.height_alp {
        Biome::Alpine
    } else if is_river {
        Biome::River
    } else if height > t.height_mountain {
        Biome::Mountain
    } else if moisture < t.wet_desert {
        Biome::Desert
    } else if moisture < t.wet_waste {
        Biome::Wasteland
    } else if moisture > t.wet_jungle {
        Biome::Jungle
    } else if moisture > t.wet_forest {
        Biome::Forest
    } else if height > t.height_hill {
        Biome::Hill
    } else {
        Biome::Plain
    }
}

/// Classify every cell of a populated terrain grid, row-major.
pub fn classify_map(
    terrain: &TerrainGrid,
    rivers: &RiverGrid,
    thresholds: &Thresholds,
) -> Result<Vec<Biome>, MapError> {
    if rivers.width != terrain.width || rivers.height != terrain.height {
        return Err(MapError::InvalidConfig(format!(
            "river grid {}x{} does not match terrain {}x{}",
            rivers.width, rivers.height, terrain.width, terrain.height
        )));
    }
    let height = terrain.height_map()?;
    let moisture = terrain.moisture_map()?;

    let mut biomes = Vec::with_capacity(terrain.width * terrain.height);
    for row in 0..terrain.height {
        for col in 0..terrain.width {
            biomes.push(classify(
                height.get(row, col),
                moisture.get(row, col),
                rivers.is_water(row, col),
                thresholds,
            ));
        }
    }
    Ok(biomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ScalarField;

    fn t() -> Thresholds {
        Thresholds::default()
    }

    #[test]
    fn water_rules_come_first() {
        assert_eq!(classify(-0.5, 0.0, false, &t()), Biome::Sea);
        assert_eq!(classify(-0.05, 0.9, true, &t()), Biome::Shallows);
    }

    #[test]
    fn alpine_overrides_river() {
        assert_eq!(classify(0.8, 0.0, true, &t()), Biome::Alpine);
    }

    #[test]
    fn river_overrides_mountain_below_alpine() {
        assert_eq!(classify(0.6, 0.0, true, &t()), Biome::River);
        assert_eq!(classify(0.6, 0.0, false, &t()), Biome::Mountain);
    }

    #[test]
    fn moisture_rules_precede_hill() {
        // Dry hill-height terrain reads as desert, not hill.
        assert_eq!(classify(0.2, -0.7, false, &t()), Biome::Desert);
        assert_eq!(classify(0.35, -0.5, false, &t()), Biome::Wasteland);
        assert_eq!(classify(0.35, 0.7, false, &t()), Biome::Jungle);
        assert_eq!(classify(0.35, 0.4, false, &t()), Biome::Forest);
        assert_eq!(classify(0.35, 0.1, false, &t()), Biome::Hill);
        assert_eq!(classify(0.2, 0.1, false, &t()), Biome::Plain);
    }

    #[test]
    fn every_input_yields_exactly_one_category() {
        // Sweep the value planes; classify must be total.
        let steps: Vec<f32> = (-10..=10).map(|v| v as f32 / 10.0).collect();
        for &height in &steps {
            for &moisture in &steps {
                for is_river in [false, true] {
                    let _ = classify(height, moisture, is_river, &t());
                }
            }
        }
    }

    #[test]
    fn classify_map_covers_the_whole_grid() {
        let mut grid = TerrainGrid::new(6, 4);
        grid.populate(
            ScalarField::filled(6, 4, 0.2),
            ScalarField::filled(6, 4, 0.0),
        )
        .unwrap();
        let rivers = RiverGrid::empty(6, 4);
        let biomes = classify_map(&grid, &rivers, &t()).unwrap();
        assert_eq!(biomes.len(), 24);
        assert!(biomes.iter().all(|&b| b == Biome::Plain));
    }

    #[test]
    fn classify_map_requires_populated_grid() {
        let grid = TerrainGrid::new(6, 4);
        let rivers = RiverGrid::empty(6, 4);
        assert!(matches!(
            classify_map(&grid, &rivers, &t()),
            Err(MapError::NotInitialized(_))
        ));
    }

    #[test]
    fn classify_map_rejects_mismatched_river_grid() {
        let mut grid = TerrainGrid::new(6, 4);
        grid.populate(
            ScalarField::filled(6, 4, 0.2),
            ScalarField::filled(6, 4, 0.0),
        )
        .unwrap();
        let rivers = RiverGrid::empty(4, 6);
        assert!(matches!(
            classify_map(&grid, &rivers, &t()),
            Err(MapError::InvalidConfig(_))
        ));
    }
}
