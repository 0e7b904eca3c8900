use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::noise::octaves::OctaveSpec;
use crate::rivers::RiverParams;

/// Height and moisture cut-offs used by biome classification.
///
/// `height_plain` and `wet_plain` document boundaries of the value range
/// but are not consulted by the classifier itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    pub height_sea: f32,
    /// Cells below this are water; rivers stop tracing here.
    pub height_coast: f32,
    pub height_plain: f32,
    pub height_hill: f32,
    pub height_mountain: f32,
    pub height_alp: f32,
    pub wet_desert: f32,
    pub wet_waste: f32,
    pub wet_plain: f32,
    pub wet_forest: f32,
    pub wet_jungle: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            height_sea: -0.1,
            height_coast: 0.0,
            height_plain: 0.1,
            height_hill: 0.3,
            height_mountain: 0.5,
            height_alp: 0.7,
            wet_desert: -0.6,
            wet_waste: -0.4,
            wet_plain: 0.0,
            wet_forest: 0.3,
            wet_jungle: 0.65,
        }
    }
}

/// Full parameter set for one map generation.
///
/// Immutable once handed to the generator; regeneration takes a fresh (or
/// identical) value rather than mutating shared defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapParams {
    pub width: usize,
    pub height: usize,
    /// Seeds the single random stream behind both noise sources and the
    /// per-peak river draws.
    pub seed: u64,
    /// Octave count for the height field.
    pub octaves: u32,
    /// Octave count for the moisture field.
    pub octaves_moisture: u32,
    pub base_frequency: f64,
    pub frequency_multiplier: f64,
    pub persistence: f64,
    /// Percentage of accepted peaks that spawn rivers (0-100).
    pub river_rate: u32,
    /// Side length of the local-maximum search window.
    pub peak_window: usize,
    pub thresholds: Thresholds,
}

impl Default for MapParams {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            seed: 0,
            octaves: 4,
            octaves_moisture: 3,
            base_frequency: 4.0,
            frequency_multiplier: 2.0,
            persistence: 0.5,
            river_rate: 50,
            peak_window: 10,
            thresholds: Thresholds::default(),
        }
    }
}

impl MapParams {
    /// Reject parameter sets the pipeline cannot run on.
    pub fn validate(&self) -> Result<(), MapError> {
        if self.width == 0 || self.height == 0 {
            return Err(MapError::InvalidConfig(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.octaves == 0 || self.octaves_moisture == 0 {
            return Err(MapError::InvalidConfig(
                "octave count must be at least 1".into(),
            ));
        }
        if self.river_rate > 100 {
            return Err(MapError::InvalidConfig(format!(
                "river_rate must be 0-100, got {}",
                self.river_rate
            )));
        }
        if self.peak_window == 0 {
            return Err(MapError::InvalidConfig(
                "peak_window must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Octave layering for the height field.
    pub fn height_spec(&self) -> OctaveSpec {
        OctaveSpec {
            octaves: self.octaves,
            base_frequency: self.base_frequency,
            frequency_multiplier: self.frequency_multiplier,
            persistence: self.persistence,
        }
    }

    /// Octave layering for the moisture field. Shares every value with the
    /// height spec except the octave count.
    pub fn moisture_spec(&self) -> OctaveSpec {
        OctaveSpec {
            octaves: self.octaves_moisture,
            ..self.height_spec()
        }
    }

    pub fn river_params(&self) -> RiverParams {
        RiverParams {
            river_rate: self.river_rate,
            peak_window: self.peak_window,
            height_coast: self.thresholds.height_coast,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_pass_validation() {
        assert!(MapParams::default().validate().is_ok());
    }

    #[test]
    fn zero_dimension_rejected() {
        let params = MapParams { width: 0, ..MapParams::default() };
        assert!(matches!(params.validate(), Err(MapError::InvalidConfig(_))));
    }

    #[test]
    fn zero_octaves_rejected() {
        let params = MapParams { octaves: 0, ..MapParams::default() };
        assert!(matches!(params.validate(), Err(MapError::InvalidConfig(_))));

        let params = MapParams { octaves_moisture: 0, ..MapParams::default() };
        assert!(matches!(params.validate(), Err(MapError::InvalidConfig(_))));
    }

    #[test]
    fn river_rate_above_100_rejected() {
        let params = MapParams { river_rate: 101, ..MapParams::default() };
        assert!(matches!(params.validate(), Err(MapError::InvalidConfig(_))));
    }

    #[test]
    fn moisture_spec_shares_frequency_values() {
        let params = MapParams::default();
        let h = params.height_spec();
        let m = params.moisture_spec();
        assert_eq!(h.octaves, 4);
        assert_eq!(m.octaves, 3);
        assert_eq!(h.base_frequency, m.base_frequency);
        assert_eq!(h.frequency_multiplier, m.frequency_multiplier);
        assert_eq!(h.persistence, m.persistence);
    }
}
