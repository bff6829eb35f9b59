use zipline_calc::sag::SagPoint;
use zipline_calc::{resolve, resolve_with_policy, DesignInput, LevelingPolicy};

fn flat_level_design() -> DesignInput {
    DesignInput {
        run_ft: 60.0,
        slope_delta_ft: 0.0,
        transition_point_ratio: 0.5,
        early_slope_ratio: 0.2,
        cable_drop_ft: 0.0,
        seat_drop_ft: 2.0,
        clearance_ft: 1.0,
        end_anchor_height_ft: 5.0,
        rider_weight_lbs: 250.0,
        sag_table: vec![SagPoint {
            rider_weight_lbs: 250.0,
            sag_point_percent_from_end: 50.0,
            sag_below_start_anchor_ft: 0.0,
        }],
    }
}

fn dropped_cable_design() -> DesignInput {
    DesignInput {
        run_ft: 80.0,
        slope_delta_ft: 0.5,
        transition_point_ratio: 0.5,
        early_slope_ratio: 0.2,
        cable_drop_ft: 4.0,
        seat_drop_ft: 3.0,
        clearance_ft: 2.0,
        end_anchor_height_ft: 5.0,
        rider_weight_lbs: 250.0,
        sag_table: vec![SagPoint {
            rider_weight_lbs: 250.0,
            sag_point_percent_from_end: 50.0,
            sag_below_start_anchor_ft: 3.0,
        }],
    }
}

#[test]
fn level_cable_sags_at_midpoint() {
    let geo = resolve(&flat_level_design());
    assert!((geo.start_anchor_elev_ft - 5.0).abs() < 1e-9);
    assert!((geo.end_anchor_elev_ft - 5.0).abs() < 1e-9);
    assert!((geo.sag_point_percent_from_end - 50.0).abs() < 1e-9);
    assert!((geo.line_elev_at_sag_ft - 5.0).abs() < 1e-9);
    assert!(geo.sag_ft.abs() < 1e-9);
    assert!((geo.cable_elev_at_sag_ft - 5.0).abs() < 1e-9);
    assert!((geo.seat_elev_ft - 3.0).abs() < 1e-9);
    assert!((geo.clearance_elev_ft - 2.0).abs() < 1e-9);
    assert!((geo.sag_x_ft - 30.0).abs() < 1e-9);
    assert!(geo.is_safe);
}

#[test]
fn dropped_cable_geometry() {
    let geo = resolve(&dropped_cable_design());
    assert!((geo.start_anchor_elev_ft - 9.0).abs() < 1e-9);
    assert!((geo.end_anchor_elev_ft - 5.0).abs() < 1e-9);
    assert!((geo.line_elev_at_sag_ft - 7.0).abs() < 1e-9);
    assert!((geo.sag_ft - 1.0).abs() < 1e-9);
    assert!((geo.cable_elev_at_sag_ft - 6.0).abs() < 1e-9);
    assert!((geo.seat_elev_ft - 3.0).abs() < 1e-9);
    assert!((geo.clearance_elev_ft - 1.0).abs() < 1e-9);
    assert!((geo.max_drop_ft - 6.0).abs() < 1e-9);
    assert!((geo.sag_x_ft - 40.0).abs() < 1e-9);
    assert!((geo.start_anchor_above_start_ground_ft - 8.5).abs() < 1e-9);
    assert!((geo.end_anchor_above_end_ground_ft - 5.0).abs() < 1e-9);
    assert!(geo.is_safe);
}

fn near_level_design() -> DesignInput {
    DesignInput {
        run_ft: 100.0,
        slope_delta_ft: 0.0,
        transition_point_ratio: 0.5,
        early_slope_ratio: 0.2,
        cable_drop_ft: 0.5,
        seat_drop_ft: 1.0,
        clearance_ft: 1.0,
        end_anchor_height_ft: 5.0,
        rider_weight_lbs: 100.0,
        sag_table: vec![SagPoint {
            rider_weight_lbs: 100.0,
            sag_point_percent_from_end: 40.0,
            sag_below_start_anchor_ft: 2.0,
        }],
    }
}

#[test]
fn policy_off_uses_raw_table_percent() {
    let geo = resolve_with_policy(&near_level_design(), LevelingPolicy::Off);
    assert!((geo.sag_point_percent_from_end - 40.0).abs() < 1e-9);
    assert!((geo.line_elev_at_sag_ft - 5.2).abs() < 1e-9);
    assert!((geo.sag_ft - 1.8).abs() < 1e-9);
}

#[test]
fn policy_correction_only_blends_the_sag_correction() {
    let geo = resolve_with_policy(&near_level_design(), LevelingPolicy::CorrectionOnly);
    assert!((geo.sag_point_percent_from_end - 40.0).abs() < 1e-9);
    assert!((geo.line_elev_at_sag_ft - 5.2).abs() < 1e-9);
    assert!((geo.sag_ft - 1.775).abs() < 1e-9);
}

#[test]
fn policy_everywhere_blends_position_and_correction() {
    let geo = resolve_with_policy(&near_level_design(), LevelingPolicy::Everywhere);
    assert!((geo.sag_point_percent_from_end - 45.0).abs() < 1e-9);
    assert!((geo.line_elev_at_sag_ft - 5.225).abs() < 1e-9);
    assert!((geo.sag_ft - 1.775).abs() < 1e-9);
    assert!((geo.sag_x_ft - 55.0).abs() < 1e-9);
}

#[test]
fn resolving_twice_gives_identical_geometry() {
    let input = dropped_cable_design();
    assert_eq!(resolve(&input), resolve(&input));
}

#[test]
fn touching_the_ground_is_unsafe() {
    let input = DesignInput {
        run_ft: 60.0,
        slope_delta_ft: 0.0,
        transition_point_ratio: 0.5,
        early_slope_ratio: 0.2,
        cable_drop_ft: 0.0,
        seat_drop_ft: 2.0,
        clearance_ft: 0.0,
        end_anchor_height_ft: 2.0,
        rider_weight_lbs: 100.0,
        sag_table: vec![SagPoint {
            rider_weight_lbs: 100.0,
            sag_point_percent_from_end: 50.0,
            sag_below_start_anchor_ft: 0.0,
        }],
    };
    let geo = resolve(&input);
    assert!(geo.clearance_elev_ft.abs() < 1e-9);
    assert!(!geo.is_safe);
}

#[test]
fn default_design_is_valid_and_safe() {
    let input = DesignInput::default();
    assert!(input.validate().is_ok());
    let geo = resolve(&input);
    assert!((geo.start_anchor_elev_ft - 13.0).abs() < 1e-9);
    assert!((geo.clearance_elev_ft - 3.0).abs() < 1e-9);
    assert!(geo.is_safe);
}

#[test]
fn validation_rejects_bad_designs() {
    let mut input = DesignInput::default();
    input.run_ft = 0.0;
    assert!(input.validate().is_err());

    let mut input = DesignInput::default();
    input.transition_point_ratio = 1.5;
    assert!(input.validate().is_err());

    let mut input = DesignInput::default();
    input.rider_weight_lbs = f64::NAN;
    assert!(input.validate().is_err());

    let mut input = DesignInput::default();
    input.sag_table.clear();
    assert!(input.validate().is_err());

    let mut input = DesignInput::default();
    let first = input.sag_table[0];
    input.sag_table.push(first);
    assert!(input.validate().is_err());
}
