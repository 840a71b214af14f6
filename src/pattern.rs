//! Parsing of the external `"x,y"` cell form, plus the classic starting
//! patterns used by the demo driver and tests. The presets are sample
//! inputs, not engine configuration.

use thiserror::Error;

use crate::coord::CellSet;

/// Rejected coordinate input. The engine itself never sees an invalid
/// coordinate: everything past construction is integer arithmetic on
/// validated values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not exactly two comma-separated components.
    #[error("expected \"x,y\", got {input:?}")]
    BadArity { input: String },
    /// A component is not an integer.
    #[error("non-integer component {component:?} in {input:?}")]
    BadInteger { input: String, component: String },
}

/// Parses a collection of `"x,y"` strings into a live set.
pub fn parse_cells<'a>(cells: impl IntoIterator<Item = &'a str>) -> Result<CellSet, ParseError> {
    cells.into_iter().map(str::parse).collect()
}

fn preset(cells: &[&str]) -> CellSet {
    parse_cells(cells.iter().copied()).expect("preset patterns are well-formed")
}

/// Period-2 oscillator: a vertical bar flipping to a horizontal one.
pub fn blinker() -> CellSet {
    preset(&["2,2", "2,3", "2,4"])
}

/// Period-2 oscillator of six cells in two offset rows.
pub fn toad() -> CellSet {
    preset(&["2,2", "3,2", "4,2", "3,3", "4,3", "5,3"])
}

/// The five-cell spaceship that translates diagonally every 4 generations.
pub fn glider() -> CellSet {
    preset(&["2,4", "3,2", "3,3", "4,3", "4,4"])
}
