use serde::{Deserialize, Serialize};

/// One row of a rider sag table: how far, and where, the loaded cable hangs
/// below the start anchor for a given rider weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SagPoint {
    pub rider_weight_lbs: f64,
    pub sag_point_percent_from_end: f64,
    pub sag_below_start_anchor_ft: f64,
}

pub type SagTable = Vec<SagPoint>;

/// Anchor elevation difference below which a cable counts as level.
pub const LEVEL_CABLE_THRESHOLD_FT: f64 = 1.0;

/// Linearly interpolate a sag table field for an arbitrary rider weight.
///
/// Weights outside the table clamp to the nearest entry and an empty table
/// yields 0.0, so a single-entry table returns that entry for every weight.
/// Duplicate weights resolve to the first occurrence in table order.
pub fn interpolate(table: &SagTable, weight: f64, field: impl Fn(&SagPoint) -> f64) -> f64 {
    if table.is_empty() {
        return 0.0;
    }

    let mut sorted = table.clone();
    sorted.sort_by(|a, b| {
        a.rider_weight_lbs
            .partial_cmp(&b.rider_weight_lbs)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if weight <= sorted[0].rider_weight_lbs {
        return field(&sorted[0]);
    }

    for pair in sorted.windows(2) {
        let a = &pair[0];
        let b = &pair[1];
        if weight >= a.rider_weight_lbs && weight <= b.rider_weight_lbs {
            let t = if (b.rider_weight_lbs - a.rider_weight_lbs).abs() < f64::EPSILON {
                0.0
            } else {
                (weight - a.rider_weight_lbs) / (b.rider_weight_lbs - a.rider_weight_lbs)
            };
            return field(a) + t * (field(b) - field(a));
        }
    }

    field(sorted.last().unwrap())
}

/// Sag point horizontal position for a rider weight, percent from the end anchor.
pub fn sag_percent_at(table: &SagTable, weight: f64) -> f64 {
    interpolate(table, weight, |p| p.sag_point_percent_from_end)
}

/// Vertical sag below the start anchor for a rider weight, in feet.
pub fn sag_below_start_anchor_at(table: &SagTable, weight: f64) -> f64 {
    interpolate(table, weight, |p| p.sag_below_start_anchor_ft)
}

/// Blends a table sag-point percent toward 50 as the anchors approach level.
/// A cable with equal anchor elevations sags at its midpoint.
pub fn level_adjusted_sag_percent(
    table_percent: f64,
    start_anchor_elev_ft: f64,
    end_anchor_elev_ft: f64,
) -> f64 {
    let elevation_diff = (start_anchor_elev_ft - end_anchor_elev_ft).abs();
    if elevation_diff >= LEVEL_CABLE_THRESHOLD_FT {
        return table_percent;
    }
    let t = elevation_diff / LEVEL_CABLE_THRESHOLD_FT;
    (1.0 - t) * 50.0 + t * table_percent
}
