//! Pipeline orchestrator: runs all generation stages in order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::biome::{classify_map, Biome};
use crate::error::MapError;
use crate::grid::TerrainGrid;
use crate::noise::{octaves::composite, NoiseField};
use crate::params::MapParams;
use crate::rivers::{trace_rivers, RiverGrid};

/// Full output of one map generation.
pub struct MapResult {
    pub terrain: TerrainGrid,
    pub rivers: RiverGrid,
    /// Row-major, `width * height` categories.
    pub biomes: Vec<Biome>,
}

/// The pipeline orchestrator.
pub struct MapGenerator;

impl MapGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Run the full generation pipeline.
    ///
    /// Stage order, which is also the random-stream consumption order:
    ///   1. height-noise seed draw, height compositing
    ///   2. moisture-noise seed draw, moisture compositing
    ///   3. river tracing (one draw per accepted peak, acceptance order)
    ///   4. biome classification
    ///
    /// A regeneration builds a fresh result; nothing is mutated in place
    /// after the terrain grid is populated.
    pub fn generate(&self, params: &MapParams) -> Result<MapResult, MapError> {
        params.validate()?;
        let mut rng = StdRng::seed_from_u64(params.seed);

        let height_noise = NoiseField::new(rng.gen());
        let height_map =
            composite(&height_noise, &params.height_spec(), params.width, params.height)?;

        let moisture_noise = NoiseField::new(rng.gen());
        let moisture_map = composite(
            &moisture_noise,
            &params.moisture_spec(),
            params.width,
            params.height,
        )?;

        let mut terrain = TerrainGrid::new(params.width, params.height);
        terrain.populate(height_map, moisture_map)?;

        let rivers = trace_rivers(terrain.height_map()?, &params.river_params(), &mut rng)?;
        let biomes = classify_map(&terrain, &rivers, &params.thresholds)?;

        Ok(MapResult { terrain, rivers, biomes })
    }
}

impl Default for MapGenerator {
    fn default() -> Self {
        Self::new()
    }
}
