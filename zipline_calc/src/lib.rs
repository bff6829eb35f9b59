//! Core library for the zipline layout calculator.
//!
//! Resolves a set of design inputs (run, slope, anchor heights, rider
//! weight, sag table) into elevations for every feature of the line, checks
//! rider clearance against the ground, derives ride metrics, and draws a
//! side-view schematic.

pub mod alert;
pub mod geo;
pub mod io;
pub mod ride;
pub mod safety;
pub mod sag;
pub mod schematic;
pub mod slope;

pub use geo::{
    resolve, resolve_with_policy, DesignError, DesignInput, LevelingPolicy, ZiplineGeometry,
};
pub use sag::{SagPoint, SagTable};
pub use slope::{GroundProfile, SlopeError};
