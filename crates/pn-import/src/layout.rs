//! Fixed cell layout of the pipe hydraulics data sheet.
//!
//! All indices are 0-based `(row, column)`.

/// Title cell that identifies a sheet as importable.
pub const MARKER_CELL: (usize, usize) = (1, 1);
pub const MARKER_TEXT: &str = "PIPE HYDRAULICS DATA SHEET";

/// Left-most column of each pipe group, in processing order.
pub const PIPE_COLUMNS: [usize; 8] = [4, 7, 10, 13, 17, 20, 23, 26];

/// Two pipe groups this many columns apart share a node.
pub const LINKED_COLUMN_GAP: usize = 3;

/// Horizontal distance between consecutive nodes.
pub const NODE_SPACING: f64 = 200.0;
/// Vertical distance between the node rows of consecutive sheets.
pub const SHEET_SPACING: f64 = 300.0;

pub mod rows {
    pub const NAME: usize = 5;
    pub const DESCRIPTION: usize = 6;
    pub const LENGTH: usize = 8;
    pub const DIAMETER: usize = 9;
    pub const INLET_DIAMETER: usize = 10;
    pub const OUTLET_DIAMETER: usize = 11;
    pub const ROUGHNESS: usize = 12;
    pub const MASS_FLOW: usize = 14;
    pub const PHASE: usize = 15;
    pub const DENSITY: usize = 16;
    pub const VISCOSITY: usize = 17;
    pub const MOLECULAR_WEIGHT: usize = 18;
    pub const Z_FACTOR: usize = 19;
    pub const SPECIFIC_HEAT_RATIO: usize = 20;
    pub const TEMPERATURE: usize = 21;
    pub const PRESSURE: usize = 22;
    pub const DIRECTION: usize = 23;
    pub const GAS_FLOW_MODEL: usize = 24;
    pub const ELEVATION: usize = 25;
    pub const EROSIONAL_CONSTANT: usize = 26;
    pub const FITTING_TYPE: usize = 28;
    pub const USER_K: usize = 29;
    pub const SAFETY_FACTOR: usize = 30;
    pub const CONTROL_VALVE_DROP: usize = 31;
    pub const USER_PRESSURE_LOSS: usize = 32;
    pub const FITTINGS_START: usize = 34;
}

/// Fallback values substituted for empty numeric cells, in sheet units.
pub mod defaults {
    pub const DIAMETER_MM: f64 = 102.26;
    pub const ROUGHNESS_MM: f64 = 0.0457;
    pub const MASS_FLOW_KG_H: f64 = 1000.0;
    pub const TEMPERATURE_C: f64 = 20.0;
    pub const PRESSURE_KPA: f64 = 101.325;
    pub const ELEVATION_M: f64 = 0.0;
}

/// Fitting type as stored on the pipe, and whether a sheet row exists for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FittingKind {
    pub name: &'static str,
    /// Derived from inlet/outlet diameters rather than counted on the sheet.
    pub derived: bool,
}

const fn counted(name: &'static str) -> FittingKind {
    FittingKind {
        name,
        derived: false,
    }
}

const fn derived(name: &'static str) -> FittingKind {
    FittingKind {
        name,
        derived: true,
    }
}

pub static FITTING_CATALOGUE: &[FittingKind] = &[
    counted("elbow_45"),
    counted("elbow_90"),
    counted("u_bend"),
    counted("stub_in_elbow"),
    counted("tee_elbow"),
    counted("tee_through"),
    counted("block_valve_full_line_size"),
    counted("block_valve_reduced_trim_0.9d"),
    counted("block_valve_reduced_trim_0.8d"),
    counted("globe_valve"),
    counted("diaphragm_valve"),
    counted("butterfly_valve"),
    counted("check_valve_swing"),
    counted("lift_check_valve"),
    counted("tilting_check_valve"),
    counted("pipe_entrance_normal"),
    counted("pipe_entrance_raised"),
    counted("pipe_exit"),
    derived("inlet_swage"),
    derived("outlet_swage"),
];

/// Fitting types that have a count row, in row order.
pub fn importable_fittings() -> impl Iterator<Item = &'static str> {
    FITTING_CATALOGUE
        .iter()
        .filter(|kind| !kind.derived)
        .map(|kind| kind.name)
}

/// Fitting type for the count row `row`, if the row is inside the block.
pub fn fitting_for_row(row: usize) -> Option<&'static str> {
    row.checked_sub(rows::FITTINGS_START)
        .and_then(|index| importable_fittings().nth(index))
}

/// Rows of the fitting-count block.
pub fn fitting_rows() -> std::ops::Range<usize> {
    rows::FITTINGS_START..rows::FITTINGS_START + importable_fittings().count()
}
