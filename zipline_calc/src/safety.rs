use crate::geo::ZiplineGeometry;
use crate::slope::GroundProfile;

/// Whether the rider's lowest point strikes the ground at the sag point.
///
/// Malformed geometry is treated as not crashing, with the problem logged.
/// Touching the ground exactly counts as a crash.
pub fn is_crash_at_sag_point(geo: &ZiplineGeometry) -> bool {
    let required = [
        ("run_ft", geo.run_ft),
        ("slope_delta_ft", geo.slope_delta_ft),
        ("transition_point_ratio", geo.transition_point_ratio),
        ("early_slope_ratio", geo.early_slope_ratio),
        ("seat_drop_ft", geo.seat_drop_ft),
        ("clearance_ft", geo.clearance_ft),
        ("start_ground_elev_ft", geo.start_ground_elev_ft),
        ("start_anchor_elev_ft", geo.start_anchor_elev_ft),
        ("end_anchor_elev_ft", geo.end_anchor_elev_ft),
        ("sag_point_percent_from_end", geo.sag_point_percent_from_end),
        ("sag_ft", geo.sag_ft),
        ("line_elev_at_sag_ft", geo.line_elev_at_sag_ft),
    ];
    for (name, value) in required {
        if !value.is_finite() {
            log::error!("crash check skipped: {name} is not finite ({value})");
            return false;
        }
    }

    if geo.run_ft <= 0.0 {
        log::warn!("crash check skipped: run is {} ft", geo.run_ft);
        return false;
    }
    if geo.sag_ft < 0.0 {
        log::warn!("crash check skipped: sag is {} ft", geo.sag_ft);
        return false;
    }

    let sag_x_ft = geo.run_ft * (100.0 - geo.sag_point_percent_from_end) / 100.0;
    let clearance_elev_ft =
        geo.line_elev_at_sag_ft - geo.sag_ft - geo.seat_drop_ft - geo.clearance_ft;

    let profile = GroundProfile::from_geometry(geo);
    let ground_elev_ft = match profile.elevation_at(sag_x_ft) {
        Ok(elev) => elev,
        Err(e) => {
            log::warn!("crash check skipped: {e}");
            return false;
        }
    };

    log::debug!(
        "crash check at x = {sag_x_ft:.1} ft: clearance bottom {clearance_elev_ft:.2} ft vs ground {ground_elev_ft:.2} ft"
    );
    clearance_elev_ft <= ground_elev_ft
}
