//! River network tracing: peak detection → probabilistic source selection
//! → steepest-descent tracing with lake fallback.

pub mod descent;
pub mod peaks;

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::grid::ScalarField;
use descent::trace_descent;
use peaks::find_peaks;

/// Binary water-occupancy grid: `true` where a river or lake cell sits.
/// Produced once per generation and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiverGrid {
    cells: Vec<bool>,
    pub width: usize,
    pub height: usize,
}

impl RiverGrid {
    /// An all-dry grid. Also the explicit stand-in when river tracing is
    /// skipped; consumers never get one substituted silently.
    pub fn empty(width: usize, height: usize) -> Self {
        Self { cells: vec![false; width * height], width, height }
    }

    #[inline]
    pub fn is_water(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize) {
        self.cells[row * self.width + col] = true;
    }

    /// Number of water cells.
    pub fn water_cells(&self) -> usize {
        self.cells.iter().filter(|&&w| w).count()
    }
}

/// River-tracing inputs extracted from the full parameter set.
#[derive(Debug, Clone, Copy)]
pub struct RiverParams {
    /// Percentage of accepted peaks that spawn rivers (0-100).
    pub river_rate: u32,
    /// Side length of the local-maximum search window.
    pub peak_window: usize,
    /// Cells below this height are sea; rivers stop there.
    pub height_coast: f32,
}

/// Trace the river network over a height field.
///
/// Accepted peaks are processed in acceptance order, consuming one
/// `rng` draw each; that order is part of the deterministic contract for a
/// given seed. A peak becomes a source iff its draw in [0, 100) is strictly
/// below `river_rate`, so rate 0 spawns nothing and rate 100 spawns every
/// accepted peak.
pub fn trace_rivers(
    height: &ScalarField,
    params: &RiverParams,
    rng: &mut StdRng,
) -> Result<RiverGrid, MapError> {
    if params.peak_window == 0
        || height.width <= params.peak_window
        || height.height <= params.peak_window
    {
        return Err(MapError::InvalidConfig(format!(
            "peak window {} must be positive and smaller than the {}x{} grid",
            params.peak_window, height.width, height.height
        )));
    }

    let sources = find_peaks(height, params.peak_window);
    let mut rivers = RiverGrid::empty(height.width, height.height);
    for &source in &sources {
        let draw: u32 = rng.gen_range(0..100);
        if draw >= params.river_rate {
            continue;
        }
        trace_descent(height, &mut rivers, source, params.height_coast)?;
    }
    Ok(rivers)
}
