/// Standard gravity in feet per second squared.
pub const G_FT_PER_S2: f64 = 32.174;

const FT_PER_S_TO_MPH: f64 = 0.681818;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Peak rider speed for a vertical drop, from energy conservation.
pub fn max_velocity_ft_per_s(drop_ft: f64) -> f64 {
    if drop_ft <= 0.0 {
        return 0.0;
    }
    round1((2.0 * G_FT_PER_S2 * drop_ft).sqrt())
}

/// Average rider speed, taken as half of peak.
pub fn avg_velocity_ft_per_s(drop_ft: f64) -> f64 {
    round1(max_velocity_ft_per_s(drop_ft) / 2.0)
}

/// Ride duration for a run at the given average speed.
pub fn ride_time_s(run_ft: f64, avg_ft_per_s: f64) -> f64 {
    if avg_ft_per_s <= 0.0 {
        return 0.0;
    }
    round1(run_ft / avg_ft_per_s)
}

/// Converts feet per second to miles per hour.
pub fn to_mph(ft_per_s: f64) -> f64 {
    round1(ft_per_s * FT_PER_S_TO_MPH)
}

/// Peak rider speed in miles per hour.
pub fn max_velocity_mph(drop_ft: f64) -> f64 {
    to_mph(max_velocity_ft_per_s(drop_ft))
}

/// Average rider speed in miles per hour.
pub fn avg_velocity_mph(drop_ft: f64) -> f64 {
    to_mph(avg_velocity_ft_per_s(drop_ft))
}

/// Vertical distance from the start anchor down to the rider's lowest seat.
pub fn max_drop_ft(start_anchor_elev_ft: f64, lowest_seat_elev_ft: f64) -> f64 {
    if start_anchor_elev_ft <= 0.0 || lowest_seat_elev_ft < 0.0 {
        return 0.0;
    }
    round1(start_anchor_elev_ft - lowest_seat_elev_ft).max(0.0)
}
