use thiserror::Error;

/// Errors produced by the generation pipeline.
///
/// Every variant is terminal for the generation call that raised it; the
/// core has no transient failures (no I/O, no network).
#[derive(Debug, Error)]
pub enum MapError {
    /// Rejected parameter set: zero octaves, zero dimension, a peak window
    /// not smaller than the grid, or mismatched field dimensions.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A field was read before `TerrainGrid::populate` installed it.
    #[error("{0} read before population")]
    NotInitialized(&'static str),

    /// The per-source step bound tripped during river descent. Strictly
    /// decreasing moves cannot revisit a cell, so this indicates a bug
    /// rather than an input problem.
    #[error("river descent exceeded {limit} steps without terminating")]
    DescentOverrun { limit: usize },
}
