use std::io::ErrorKind;

use zipline_calc::io::{read_design_json, write_design_json, write_string};
use zipline_calc::DesignInput;

#[test]
fn design_round_trips_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("design.json");
    let input = DesignInput::default();
    write_design_json(&path, &input).unwrap();
    let loaded = read_design_json(&path).unwrap();
    assert_eq!(loaded, input);
}

#[test]
fn malformed_json_is_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("design.json");
    write_string(&path, "not json").unwrap();
    let err = read_design_json(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn out_of_range_design_is_invalid_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("design.json");
    let mut input = DesignInput::default();
    input.run_ft = -1.0;
    let json = serde_json::to_string(&input).unwrap();
    write_string(&path, &json).unwrap();
    let err = read_design_json(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
}

#[test]
fn missing_file_keeps_its_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = read_design_json(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
