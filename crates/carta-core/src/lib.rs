//! Procedural 2D terrain map generation.
//!
//! Pipeline: layered coherent noise synthesises normalized height and
//! moisture fields, a river network is traced by steepest-descent flow from
//! elevation peaks (with lake fallback), and every cell is classified into a
//! biome for rendering.
//!
//! The whole run is deterministic in (seed, dimensions, configuration): one
//! seeded random stream is consumed in a fixed order — height-noise seed,
//! moisture-noise seed, then one draw per accepted peak during river
//! tracing.

pub mod biome;
pub mod error;
pub mod generator;
pub mod grid;
pub mod noise;
pub mod params;
pub mod rivers;

pub use biome::{classify, classify_map, Biome};
pub use error::MapError;
pub use generator::{MapGenerator, MapResult};
pub use grid::{ScalarField, TerrainGrid};
pub use noise::octaves::OctaveSpec;
pub use noise::NoiseField;
pub use params::{MapParams, Thresholds};
pub use rivers::{trace_rivers, RiverGrid, RiverParams};
