use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sag::{self, SagTable};
use crate::safety;

/// Errors produced while validating a zipline design.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DesignError {
    #[error("run must be positive, got {0} ft")]
    NonPositiveRun(f64),
    #[error("{name} must be within [0, 1], got {value}")]
    RatioOutOfRange { name: &'static str, value: f64 },
    #[error("{name} must be non-negative, got {value} ft")]
    NegativeLength { name: &'static str, value: f64 },
    #[error("rider weight must be positive, got {0} lbs")]
    NonPositiveWeight(f64),
    #[error("sag table must contain at least one entry")]
    EmptySagTable,
    #[error("sag table has duplicate rider weight {0} lbs")]
    DuplicateTableWeight(f64),
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}

/// Full set of user-controlled inputs describing one zipline design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignInput {
    pub run_ft: f64,
    pub slope_delta_ft: f64,
    pub transition_point_ratio: f64,
    pub early_slope_ratio: f64,
    pub cable_drop_ft: f64,
    pub seat_drop_ft: f64,
    pub clearance_ft: f64,
    pub end_anchor_height_ft: f64,
    pub rider_weight_lbs: f64,
    pub sag_table: SagTable,
}

impl Default for DesignInput {
    fn default() -> Self {
        Self {
            run_ft: 100.0,
            slope_delta_ft: 2.0,
            transition_point_ratio: 0.5,
            early_slope_ratio: 0.2,
            cable_drop_ft: 6.0,
            seat_drop_ft: 3.5,
            clearance_ft: 2.5,
            end_anchor_height_ft: 7.0,
            rider_weight_lbs: 250.0,
            sag_table: vec![
                sag::SagPoint {
                    rider_weight_lbs: 60.0,
                    sag_point_percent_from_end: 41.0,
                    sag_below_start_anchor_ft: 0.5,
                },
                sag::SagPoint {
                    rider_weight_lbs: 150.0,
                    sag_point_percent_from_end: 46.0,
                    sag_below_start_anchor_ft: 2.0,
                },
                sag::SagPoint {
                    rider_weight_lbs: 250.0,
                    sag_point_percent_from_end: 50.0,
                    sag_below_start_anchor_ft: 4.0,
                },
            ],
        }
    }
}

impl DesignInput {
    /// Checks that every field is finite and within its physical range.
    pub fn validate(&self) -> Result<(), DesignError> {
        let scalars = [
            ("run_ft", self.run_ft),
            ("slope_delta_ft", self.slope_delta_ft),
            ("transition_point_ratio", self.transition_point_ratio),
            ("early_slope_ratio", self.early_slope_ratio),
            ("cable_drop_ft", self.cable_drop_ft),
            ("seat_drop_ft", self.seat_drop_ft),
            ("clearance_ft", self.clearance_ft),
            ("end_anchor_height_ft", self.end_anchor_height_ft),
            ("rider_weight_lbs", self.rider_weight_lbs),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(DesignError::NonFinite(name));
            }
        }
        for point in &self.sag_table {
            if !point.rider_weight_lbs.is_finite()
                || !point.sag_point_percent_from_end.is_finite()
                || !point.sag_below_start_anchor_ft.is_finite()
            {
                return Err(DesignError::NonFinite("sag_table entry"));
            }
        }

        if self.run_ft <= 0.0 {
            return Err(DesignError::NonPositiveRun(self.run_ft));
        }
        let ratios = [
            ("transition_point_ratio", self.transition_point_ratio),
            ("early_slope_ratio", self.early_slope_ratio),
        ];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(DesignError::RatioOutOfRange { name, value });
            }
        }
        let lengths = [
            ("cable_drop_ft", self.cable_drop_ft),
            ("seat_drop_ft", self.seat_drop_ft),
            ("clearance_ft", self.clearance_ft),
            ("end_anchor_height_ft", self.end_anchor_height_ft),
        ];
        for (name, value) in lengths {
            if value < 0.0 {
                return Err(DesignError::NegativeLength { name, value });
            }
        }
        if self.rider_weight_lbs <= 0.0 {
            return Err(DesignError::NonPositiveWeight(self.rider_weight_lbs));
        }
        if self.sag_table.is_empty() {
            return Err(DesignError::EmptySagTable);
        }

        let mut weights: Vec<f64> = self
            .sag_table
            .iter()
            .map(|p| p.rider_weight_lbs)
            .collect();
        weights.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        for pair in weights.windows(2) {
            if (pair[1] - pair[0]).abs() < f64::EPSILON {
                return Err(DesignError::DuplicateTableWeight(pair[0]));
            }
        }
        Ok(())
    }
}

/// Where the level-cable blend of the sag-point position is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelingPolicy {
    /// Use the raw table percent everywhere.
    Off,
    /// Blend only the vertical sag correction; positions use the raw percent.
    #[default]
    CorrectionOnly,
    /// Blend both the reported position and the sag correction.
    Everywhere,
}

/// Resolved elevations and derived measurements for one design.
///
/// All elevations are in feet above the end-side ground, which is the
/// baseline at 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZiplineGeometry {
    pub run_ft: f64,
    pub slope_delta_ft: f64,
    pub transition_point_ratio: f64,
    pub early_slope_ratio: f64,
    pub cable_drop_ft: f64,
    pub seat_drop_ft: f64,
    pub clearance_ft: f64,
    pub rider_weight_lbs: f64,

    pub start_ground_elev_ft: f64,
    pub end_ground_elev_ft: f64,
    pub start_anchor_elev_ft: f64,
    pub end_anchor_elev_ft: f64,

    pub sag_point_percent_from_end: f64,
    pub sag_ft: f64,
    pub line_elev_at_sag_ft: f64,
    pub cable_elev_at_sag_ft: f64,
    pub seat_elev_ft: f64,
    pub clearance_elev_ft: f64,

    pub max_drop_ft: f64,
    pub sag_x_ft: f64,

    pub start_anchor_above_start_ground_ft: f64,
    pub start_anchor_above_end_ground_ft: f64,
    pub end_anchor_above_end_ground_ft: f64,

    pub is_safe: bool,
}

/// Resolves a design with the default leveling policy.
pub fn resolve(input: &DesignInput) -> ZiplineGeometry {
    resolve_with_policy(input, LevelingPolicy::default())
}

/// Resolves a design into a full geometry under the given leveling policy.
pub fn resolve_with_policy(input: &DesignInput, policy: LevelingPolicy) -> ZiplineGeometry {
    let end_ground_elev_ft = 0.0;
    let start_ground_elev_ft = input.slope_delta_ft;
    let end_anchor_elev_ft = input.end_anchor_height_ft;
    let start_anchor_elev_ft = end_anchor_elev_ft + input.cable_drop_ft;

    let table_percent = sag::sag_percent_at(&input.sag_table, input.rider_weight_lbs);
    let blended_percent =
        sag::level_adjusted_sag_percent(table_percent, start_anchor_elev_ft, end_anchor_elev_ft);
    let reported_percent = match policy {
        LevelingPolicy::Everywhere => blended_percent,
        _ => table_percent,
    };
    let correction_percent = match policy {
        LevelingPolicy::Off => table_percent,
        _ => blended_percent,
    };

    let line_elev_at_sag_ft =
        start_anchor_elev_ft - input.cable_drop_ft * ((100.0 - reported_percent) / 100.0);
    let sag_ft = sag::sag_below_start_anchor_at(&input.sag_table, input.rider_weight_lbs)
        - input.cable_drop_ft * (correction_percent / 100.0);
    let cable_elev_at_sag_ft = line_elev_at_sag_ft - sag_ft;
    let seat_elev_ft = cable_elev_at_sag_ft - input.seat_drop_ft;
    let clearance_elev_ft = seat_elev_ft - input.clearance_ft;

    let max_drop_ft = start_anchor_elev_ft - seat_elev_ft;
    let sag_x_ft = input.run_ft * (100.0 - reported_percent) / 100.0;

    let mut geo = ZiplineGeometry {
        run_ft: input.run_ft,
        slope_delta_ft: input.slope_delta_ft,
        transition_point_ratio: input.transition_point_ratio,
        early_slope_ratio: input.early_slope_ratio,
        cable_drop_ft: input.cable_drop_ft,
        seat_drop_ft: input.seat_drop_ft,
        clearance_ft: input.clearance_ft,
        rider_weight_lbs: input.rider_weight_lbs,
        start_ground_elev_ft,
        end_ground_elev_ft,
        start_anchor_elev_ft,
        end_anchor_elev_ft,
        sag_point_percent_from_end: reported_percent,
        sag_ft,
        line_elev_at_sag_ft,
        cable_elev_at_sag_ft,
        seat_elev_ft,
        clearance_elev_ft,
        max_drop_ft,
        sag_x_ft,
        start_anchor_above_start_ground_ft: start_anchor_elev_ft - start_ground_elev_ft,
        start_anchor_above_end_ground_ft: start_anchor_elev_ft - end_ground_elev_ft,
        end_anchor_above_end_ground_ft: end_anchor_elev_ft - end_ground_elev_ft,
        is_safe: true,
    };
    geo.is_safe = !safety::is_crash_at_sag_point(&geo);
    log::debug!(
        "resolved geometry: sag point {:.1}% from end, clearance bottom {:.2} ft, safe = {}",
        geo.sag_point_percent_from_end,
        geo.clearance_elev_ft,
        geo.is_safe
    );
    geo
}
