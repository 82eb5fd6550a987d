//! Builds a pipe network from data-sheet workbooks.
//!
//! Each importable sheet holds up to eight pipe groups laid out left to right.
//! Groups exactly [`LINKED_COLUMN_GAP`] columns apart are joined through a
//! shared node; any other gap starts a fresh pair of nodes.
//!
//! Missing numeric cells never abort an import. They are replaced by the
//! sheet defaults and every substitution is listed in the [`ImportReport`].

use pn_core::NodeId;
use pn_core::numeric::positive;
use pn_core::units::{celsius, centipoise, kg_per_m3, kgph, kpa, m, mm};
use pn_fluids::{DEFAULT_EROSIONAL_CONSTANT, Fluid, Phase};
use pn_graph::{
    Boundary, ControlValve, Direction, Fitting, GasFlowModel, Network, NetworkBuilder, PipeDef,
    Position, SectionType,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ImportResult;
use crate::layout::{
    self, LINKED_COLUMN_GAP, MARKER_CELL, MARKER_TEXT, NODE_SPACING, PIPE_COLUMNS, SHEET_SPACING,
    defaults, rows,
};
use crate::workbook::{Sheet, Workbook};

/// A sheet value that was missing or unusable and replaced by a default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedDefault {
    pub sheet: String,
    pub column: usize,
    pub field: &'static str,
    /// Substituted value, in sheet units.
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    pub sheets_processed: usize,
    pub sheets_skipped: Vec<String>,
    pub columns_skipped: usize,
    pub defaults_applied: Vec<AppliedDefault>,
}

impl ImportReport {
    /// Defaults substituted for one pipe group.
    pub fn defaults_for(&self, sheet: &str, column: usize) -> Vec<&AppliedDefault> {
        self.defaults_applied
            .iter()
            .filter(|d| d.sheet == sheet && d.column == column)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportedNetwork {
    pub network: Network,
    pub report: ImportReport,
}

/// Import every data sheet in `workbook`.
///
/// Returns `Ok(None)` when no sheet contributes a pipe.
pub fn import_network(workbook: &Workbook) -> ImportResult<Option<ImportedNetwork>> {
    let mut builder = NetworkBuilder::new();
    let mut report = ImportReport::default();

    for (sheet_index, sheet) in workbook.sheets.iter().enumerate() {
        if !is_data_sheet(sheet) {
            warn!(sheet = %sheet.name, "not a pipe hydraulics data sheet, skipped");
            report.sheets_skipped.push(sheet.name.clone());
            continue;
        }
        let before = builder.pipe_count();
        import_sheet(&mut builder, &mut report, sheet, sheet_index)?;
        report.sheets_processed += 1;
        info!(
            sheet = %sheet.name,
            pipes = builder.pipe_count() - before,
            "sheet imported"
        );
    }

    if builder.pipe_count() == 0 {
        info!("no pipes found");
        return Ok(None);
    }

    let network = builder.build()?;
    info!(
        nodes = network.nodes().len(),
        pipes = network.pipes().len(),
        defaults = report.defaults_applied.len(),
        "network imported"
    );
    Ok(Some(ImportedNetwork { network, report }))
}

fn is_data_sheet(sheet: &Sheet) -> bool {
    sheet
        .text(MARKER_CELL.0, MARKER_CELL.1)
        .is_some_and(|t| t == MARKER_TEXT)
}

/// End of the most recently imported pipe on the current sheet.
#[derive(Debug, Clone, Copy)]
struct LastPipe {
    column: usize,
    end_node: NodeId,
    end_position: Position,
}

fn import_sheet(
    builder: &mut NetworkBuilder,
    report: &mut ImportReport,
    sheet: &Sheet,
    sheet_index: usize,
) -> ImportResult<()> {
    let origin = Position::new(0.0, SHEET_SPACING * sheet_index as f64);
    let mut last: Option<LastPipe> = None;

    for column in PIPE_COLUMNS {
        let Some(name) = sheet.text(rows::NAME, column) else {
            debug!(sheet = %sheet.name, column, "empty pipe group");
            report.columns_skipped += 1;
            continue;
        };

        let mut reader = ColumnReader {
            sheet,
            column,
            report: &mut *report,
        };
        let group = reader.read(name);

        let (start_node, start_position) = match last {
            Some(prev) if column - prev.column == LINKED_COLUMN_GAP => {
                (prev.end_node, prev.end_position)
            }
            Some(prev) => {
                let position = prev.end_position.offset(NODE_SPACING, 0.0);
                (add_node(builder, position), position)
            }
            None => (add_node(builder, origin), origin),
        };
        let end_position = start_position.offset(NODE_SPACING, 0.0);
        let end_node = add_node(builder, end_position);

        let boundary_node = group.def.direction.pick(start_node, end_node);
        builder.apply_boundary(boundary_node, &group.boundary)?;

        debug!(
            sheet = %sheet.name,
            column,
            pipe = %group.def.name,
            linked = last.is_some_and(|p| p.end_node == start_node),
            "pipe imported"
        );
        builder.add_pipe(start_node, end_node, group.def);

        last = Some(LastPipe {
            column,
            end_node,
            end_position,
        });
    }
    Ok(())
}

fn add_node(builder: &mut NetworkBuilder, position: Position) -> NodeId {
    let label = format!("N{}", builder.node_count() + 1);
    builder.add_node(label, position)
}

/// Pipe definition and boundary condition read from one pipe group.
struct PipeGroup {
    def: PipeDef,
    boundary: Boundary,
}

struct ColumnReader<'a> {
    sheet: &'a Sheet,
    column: usize,
    report: &'a mut ImportReport,
}

impl ColumnReader<'_> {
    fn text(&self, row: usize) -> Option<String> {
        self.sheet.text(row, self.column)
    }

    fn number(&self, row: usize) -> Option<f64> {
        self.sheet.number(row, self.column)
    }

    fn contains(&self, row: usize, needle: &str) -> bool {
        self.text(row)
            .is_some_and(|t| t.to_ascii_lowercase().contains(needle))
    }

    fn substitute(&mut self, field: &'static str, value: f64) -> f64 {
        debug!(sheet = %self.sheet.name, column = self.column, field, value, "default applied");
        self.report.defaults_applied.push(AppliedDefault {
            sheet: self.sheet.name.clone(),
            column: self.column,
            field,
            value,
        });
        value
    }

    /// Cell value, or `default` when the cell is empty or not numeric.
    fn number_or(&mut self, row: usize, field: &'static str, default: f64) -> f64 {
        match self.number(row) {
            Some(v) => v,
            None => self.substitute(field, default),
        }
    }

    /// Like `number_or`, but a non-positive value is also replaced.
    fn positive_or(&mut self, row: usize, field: &'static str, default: f64) -> f64 {
        match self.number(row).and_then(positive) {
            Some(v) => v,
            None => self.substitute(field, default),
        }
    }

    fn read(&mut self, name: String) -> PipeGroup {
        let phase = if self.contains(rows::PHASE, "vapor") {
            Phase::Gas
        } else {
            Phase::Liquid
        };
        let direction = if self.contains(rows::DIRECTION, "back") {
            Direction::Backward
        } else {
            Direction::Forward
        };
        let gas_flow_model = if self.contains(rows::GAS_FLOW_MODEL, "iso") {
            GasFlowModel::Isothermal
        } else {
            GasFlowModel::Adiabatic
        };

        let length = self.number(rows::LENGTH).and_then(positive).map(m);
        let diameter = self.positive_or(rows::DIAMETER, "diameter", defaults::DIAMETER_MM);
        let inlet_diameter = self.positive_or(rows::INLET_DIAMETER, "inlet_diameter", diameter);
        let outlet_diameter = self.positive_or(rows::OUTLET_DIAMETER, "outlet_diameter", diameter);
        let roughness = self.number_or(rows::ROUGHNESS, "roughness", defaults::ROUGHNESS_MM);
        let mass_flow = self.number_or(rows::MASS_FLOW, "mass_flow_rate", defaults::MASS_FLOW_KG_H);

        let (default_density, default_viscosity) = Fluid::default_properties(phase);
        let density = self.positive_or(rows::DENSITY, "density", default_density);
        let viscosity = self.positive_or(rows::VISCOSITY, "viscosity", default_viscosity);
        let fluid = Fluid::new(phase, kg_per_m3(density), centipoise(viscosity))
            .unwrap_or_else(|_| Fluid::default_for(phase))
            .with_gas_properties(
                self.number(rows::MOLECULAR_WEIGHT),
                self.number(rows::Z_FACTOR),
                self.number(rows::SPECIFIC_HEAT_RATIO),
            );

        let temperature =
            self.number_or(rows::TEMPERATURE, "temperature", defaults::TEMPERATURE_C);
        let pressure = self.number_or(rows::PRESSURE, "pressure", defaults::PRESSURE_KPA);
        let elevation = self.number_or(rows::ELEVATION, "elevation_change", defaults::ELEVATION_M);
        let erosional_constant = self.positive_or(
            rows::EROSIONAL_CONSTANT,
            "erosional_constant",
            DEFAULT_EROSIONAL_CONSTANT,
        );

        let control_valve = self
            .number(rows::CONTROL_VALVE_DROP)
            .and_then(positive)
            .map(|drop| ControlValve {
                pressure_drop: kpa(drop),
            });
        let section_type = if control_valve.is_some() {
            SectionType::ControlValve
        } else {
            SectionType::Pipeline
        };

        let fittings = layout::fitting_rows()
            .filter_map(|row| {
                let count = self.number(row).and_then(positive)?;
                let kind = layout::fitting_for_row(row)?;
                Some(Fitting::new(kind, count.round() as u32))
            })
            .filter(|f| f.count > 0)
            .collect();

        let boundary = Boundary {
            fluid: fluid.clone(),
            pressure: kpa(pressure),
            temperature: celsius(temperature),
        };

        let def = PipeDef {
            name,
            description: self.text(rows::DESCRIPTION),
            length,
            diameter: mm(diameter),
            inlet_diameter: mm(inlet_diameter),
            outlet_diameter: mm(outlet_diameter),
            roughness: mm(roughness),
            mass_flow_rate: kgph(mass_flow),
            direction,
            fluid,
            erosional_constant,
            fittings,
            section_type,
            control_valve,
            gas_flow_model,
            elevation_change: m(elevation),
            fitting_type: self.text(rows::FITTING_TYPE),
            user_k: self.number(rows::USER_K),
            fitting_safety_factor: self.number(rows::SAFETY_FACTOR),
            user_pressure_loss: self.number(rows::USER_PRESSURE_LOSS).map(kpa),
            service_type: None,
            service_sub_type: None,
        };

        PipeGroup { def, boundary }
    }
}
