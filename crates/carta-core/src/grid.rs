use serde::{Deserialize, Serialize};

use crate::error::MapError;

/// A 2D scalar field storing one f32 per cell, row-major.
/// Composited noise fields hold values in [-1, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarField {
    /// Row-major cell values.
    pub data: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

impl ScalarField {
    /// Create a new field filled with the given value.
    pub fn filled(width: usize, height: usize, fill: f32) -> Self {
        Self { data: vec![fill; width * height], width, height }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f32) {
        self.data[row * self.width + col] = val;
    }

    pub fn min_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::INFINITY, f32::min)
    }

    pub fn max_value(&self) -> f32 {
        self.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max)
    }
}

/// Height and moisture fields for one generated map.
///
/// Created empty, populated exactly once with both fields together, then
/// read-only. Reading either field before population is an error rather
/// than a silent substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainGrid {
    pub width: usize,
    pub height: usize,
    height_map: Option<ScalarField>,
    moisture_map: Option<ScalarField>,
}

impl TerrainGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, height_map: None, moisture_map: None }
    }

    /// Install both fields. They are only ever set as a pair so a consumer
    /// can never observe one without the other.
    pub fn populate(
        &mut self,
        height_map: ScalarField,
        moisture_map: ScalarField,
    ) -> Result<(), MapError> {
        for field in [&height_map, &moisture_map] {
            if field.width != self.width || field.height != self.height {
                return Err(MapError::InvalidConfig(format!(
                    "field dimensions {}x{} do not match grid {}x{}",
                    field.width, field.height, self.width, self.height
                )));
            }
        }
        self.height_map = Some(height_map);
        self.moisture_map = Some(moisture_map);
        Ok(())
    }

    pub fn height_map(&self) -> Result<&ScalarField, MapError> {
        self.height_map
            .as_ref()
            .ok_or(MapError::NotInitialized("height map"))
    }

    pub fn moisture_map(&self) -> Result<&ScalarField, MapError> {
        self.moisture_map
            .as_ref()
            .ok_or(MapError::NotInitialized("moisture map"))
    }
}
