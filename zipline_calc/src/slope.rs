use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::{DesignInput, ZiplineGeometry};

/// Errors returned by ground profile queries.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SlopeError {
    /// The ground shape is undefined beyond the anchors.
    #[error("x = {x_ft} ft is outside the run [0, {run_ft}]")]
    OutOfRange { x_ft: f64, run_ft: f64 },
}

/// Two-segment piecewise-linear ground profile along the run.
///
/// The profile passes through `(0, start_ground_elev_ft)`,
/// `(transition_x, start_ground_elev_ft - early_rise)` and `(run_ft, 0)`;
/// the end-side ground is the elevation baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundProfile {
    pub run_ft: f64,
    pub slope_delta_ft: f64,
    pub transition_point_ratio: f64,
    pub early_slope_ratio: f64,
    pub start_ground_elev_ft: f64,
}

impl GroundProfile {
    /// Builds the profile described by a design's slope inputs.
    pub fn from_design(input: &DesignInput) -> Self {
        Self {
            run_ft: input.run_ft,
            slope_delta_ft: input.slope_delta_ft,
            transition_point_ratio: input.transition_point_ratio,
            early_slope_ratio: input.early_slope_ratio,
            start_ground_elev_ft: input.slope_delta_ft,
        }
    }

    /// Builds the profile embedded in resolved geometry.
    pub fn from_geometry(geo: &ZiplineGeometry) -> Self {
        Self {
            run_ft: geo.run_ft,
            slope_delta_ft: geo.slope_delta_ft,
            transition_point_ratio: geo.transition_point_ratio,
            early_slope_ratio: geo.early_slope_ratio,
            start_ground_elev_ft: geo.start_ground_elev_ft,
        }
    }

    /// Horizontal position where the slope shape changes.
    pub fn transition_x_ft(&self) -> f64 {
        self.run_ft * self.transition_point_ratio
    }

    /// Ground elevation at a horizontal position along the run.
    pub fn elevation_at(&self, x_ft: f64) -> Result<f64, SlopeError> {
        if !(0.0..=self.run_ft).contains(&x_ft) {
            return Err(SlopeError::OutOfRange {
                x_ft,
                run_ft: self.run_ft,
            });
        }

        let transition_x = self.transition_x_ft();
        let early_rise = self.slope_delta_ft * self.early_slope_ratio;

        if x_ft <= transition_x {
            let early_slope = if transition_x.abs() < f64::EPSILON {
                0.0
            } else {
                early_rise / transition_x
            };
            Ok(self.start_ground_elev_ft - x_ft * early_slope)
        } else {
            let late_rise = self.slope_delta_ft - early_rise;
            let late_run = self.run_ft - transition_x;
            let late_slope = if late_run.abs() < f64::EPSILON {
                0.0
            } else {
                late_rise / late_run
            };
            Ok(self.start_ground_elev_ft - early_rise - (x_ft - transition_x) * late_slope)
        }
    }
}
