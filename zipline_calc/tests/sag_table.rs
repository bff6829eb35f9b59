use zipline_calc::sag::{
    self, level_adjusted_sag_percent, sag_below_start_anchor_at, sag_percent_at, SagPoint,
    SagTable,
};

fn two_entry_table() -> SagTable {
    vec![
        SagPoint {
            rider_weight_lbs: 100.0,
            sag_point_percent_from_end: 40.0,
            sag_below_start_anchor_ft: 1.0,
        },
        SagPoint {
            rider_weight_lbs: 200.0,
            sag_point_percent_from_end: 50.0,
            sag_below_start_anchor_ft: 3.0,
        },
    ]
}

#[test]
fn empty_table_yields_zero() {
    let table: SagTable = Vec::new();
    assert_eq!(sag_percent_at(&table, 150.0), 0.0);
    assert_eq!(sag_below_start_anchor_at(&table, 150.0), 0.0);
}

#[test]
fn weight_below_table_clamps_to_first_entry() {
    let table = two_entry_table();
    assert!((sag_percent_at(&table, 10.0) - 40.0).abs() < 1e-9);
    assert!((sag_below_start_anchor_at(&table, 10.0) - 1.0).abs() < 1e-9);
}

#[test]
fn weight_above_table_clamps_to_last_entry() {
    let table = two_entry_table();
    assert!((sag_percent_at(&table, 999.0) - 50.0).abs() < 1e-9);
    assert!((sag_below_start_anchor_at(&table, 999.0) - 3.0).abs() < 1e-9);
}

#[test]
fn interpolates_between_entries() {
    let table = two_entry_table();
    assert!((sag_percent_at(&table, 150.0) - 45.0).abs() < 1e-9);
    assert!((sag_below_start_anchor_at(&table, 150.0) - 2.0).abs() < 1e-9);
}

#[test]
fn exact_entry_weight_returns_entry_value() {
    let table = two_entry_table();
    assert!((sag_percent_at(&table, 200.0) - 50.0).abs() < 1e-9);
    assert!((sag_below_start_anchor_at(&table, 200.0) - 3.0).abs() < 1e-9);
}

#[test]
fn single_entry_table_returns_entry_for_every_weight() {
    let table = vec![SagPoint {
        rider_weight_lbs: 150.0,
        sag_point_percent_from_end: 46.0,
        sag_below_start_anchor_ft: 2.0,
    }];
    for weight in [1.0, 150.0, 400.0] {
        assert!((sag_percent_at(&table, weight) - 46.0).abs() < 1e-9);
        assert!((sag_below_start_anchor_at(&table, weight) - 2.0).abs() < 1e-9);
    }
}

#[test]
fn duplicate_weights_resolve_to_first_occurrence() {
    let table = vec![
        SagPoint {
            rider_weight_lbs: 150.0,
            sag_point_percent_from_end: 44.0,
            sag_below_start_anchor_ft: 1.5,
        },
        SagPoint {
            rider_weight_lbs: 150.0,
            sag_point_percent_from_end: 48.0,
            sag_below_start_anchor_ft: 2.5,
        },
    ];
    assert!((sag::interpolate(&table, 150.0, |p| p.sag_point_percent_from_end) - 44.0).abs() < 1e-9);
}

#[test]
fn level_anchors_pull_sag_point_to_midpoint() {
    assert!((level_adjusted_sag_percent(40.0, 5.0, 5.0) - 50.0).abs() < 1e-9);
}

#[test]
fn near_level_anchors_blend_toward_midpoint() {
    assert!((level_adjusted_sag_percent(40.0, 5.5, 5.0) - 45.0).abs() < 1e-9);
}

#[test]
fn distinct_anchor_heights_keep_table_percent() {
    assert!((level_adjusted_sag_percent(40.0, 9.0, 5.0) - 40.0).abs() < 1e-9);
    assert!((level_adjusted_sag_percent(40.0, 6.0, 5.0) - 40.0).abs() < 1e-9);
}
