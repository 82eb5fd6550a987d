//! Import of hand-built workbooks using the data-sheet layout.

use pn_core::units::{celsius, get, kpa, mm};
use pn_fluids::Phase;
use pn_graph::{Direction, Position, SectionType};
use pn_import::layout::{MARKER_CELL, MARKER_TEXT, NODE_SPACING, SHEET_SPACING, rows};
use pn_import::{Sheet, Workbook, import_network};

fn data_sheet(name: &str) -> Sheet {
    let mut sheet = Sheet::new(name);
    sheet.set_text(MARKER_CELL.0, MARKER_CELL.1, MARKER_TEXT);
    sheet
}

/// A fully specified liquid pipe group at `col`.
fn pipe(sheet: &mut Sheet, col: usize, name: &str, pressure_kpa: f64) {
    sheet.set_text(rows::NAME, col, name);
    sheet.set_number(rows::LENGTH, col, 50.0);
    sheet.set_number(rows::DIAMETER, col, 52.5);
    sheet.set_number(rows::INLET_DIAMETER, col, 52.5);
    sheet.set_number(rows::OUTLET_DIAMETER, col, 52.5);
    sheet.set_number(rows::ROUGHNESS, col, 0.05);
    sheet.set_number(rows::MASS_FLOW, col, 3600.0);
    sheet.set_text(rows::PHASE, col, "Liquid");
    sheet.set_number(rows::DENSITY, col, 850.0);
    sheet.set_number(rows::VISCOSITY, col, 2.0);
    sheet.set_number(rows::TEMPERATURE, col, 40.0);
    sheet.set_number(rows::PRESSURE, col, pressure_kpa);
    sheet.set_number(rows::ELEVATION, col, 0.0);
    sheet.set_number(rows::EROSIONAL_CONSTANT, col, 100.0);
}

#[test]
fn adjacent_groups_share_a_node() {
    let mut sheet = data_sheet("Line 1");
    pipe(&mut sheet, 4, "P1", 500.0);
    pipe(&mut sheet, 7, "P2", 450.0);

    let imported = import_network(&Workbook::new(vec![sheet])).unwrap().unwrap();
    let network = &imported.network;
    let p1 = &network.pipes()[0];
    let p2 = &network.pipes()[1];

    assert_eq!(network.nodes().len(), 3);
    assert_eq!(p1.end_node, p2.start_node);

    // Both forward: P1 writes its start node, P2 writes the shared node.
    let shared = network.node(p2.start_node).unwrap();
    assert_eq!(shared.pressure, Some(kpa(450.0)));
    assert_eq!(
        network.node(p1.end_node).unwrap(),
        network.node(p2.start_node).unwrap()
    );
    assert_eq!(network.node(p1.start_node).unwrap().pressure, Some(kpa(500.0)));
}

#[test]
fn last_writer_wins_on_shared_node() {
    // P1 backward writes its end node; P2 forward then overwrites the same node.
    let mut sheet = data_sheet("Line 1");
    pipe(&mut sheet, 4, "P1", 500.0);
    sheet.set_text(rows::DIRECTION, 4, "Backward");
    pipe(&mut sheet, 7, "P2", 300.0);

    let imported = import_network(&Workbook::new(vec![sheet])).unwrap().unwrap();
    let network = &imported.network;
    let p1 = &network.pipes()[0];
    assert_eq!(p1.def.direction, Direction::Backward);
    assert_eq!(network.node(p1.end_node).unwrap().pressure, Some(kpa(300.0)));
    assert_eq!(network.node(p1.start_node).unwrap().pressure, None);
}

#[test]
fn boundary_lands_on_the_pipes_boundary_node() {
    let mut sheet = data_sheet("Line 1");
    pipe(&mut sheet, 4, "P1", 650.0);
    sheet.set_text(rows::DIRECTION, 4, "Backward");

    let imported = import_network(&Workbook::new(vec![sheet])).unwrap().unwrap();
    let network = &imported.network;
    let p1 = &network.pipes()[0];
    assert_eq!(p1.boundary_node(), p1.end_node);
    let node = network.node(p1.boundary_node()).unwrap();
    assert_eq!(node.pressure, Some(kpa(650.0)));
    assert_eq!(network.node(p1.start_node).unwrap().pressure, None);
}

#[test]
fn distant_groups_get_independent_nodes() {
    // 13 -> 17 is a four-column gap.
    let mut sheet = data_sheet("Line 1");
    pipe(&mut sheet, 13, "P1", 500.0);
    pipe(&mut sheet, 17, "P2", 450.0);

    let imported = import_network(&Workbook::new(vec![sheet])).unwrap().unwrap();
    let network = &imported.network;
    let p1 = &network.pipes()[0];
    let p2 = &network.pipes()[1];

    assert_eq!(network.nodes().len(), 4);
    assert_ne!(p1.end_node, p2.start_node);

    let pos = |id| network.node(id).unwrap().position;
    assert_eq!(pos(p1.start_node), Position::ORIGIN);
    assert_eq!(pos(p1.end_node), Position::new(NODE_SPACING, 0.0));
    assert_eq!(pos(p2.start_node), Position::new(2.0 * NODE_SPACING, 0.0));
    assert_eq!(pos(p2.end_node), Position::new(3.0 * NODE_SPACING, 0.0));
}

#[test]
fn skipped_column_breaks_the_chain() {
    let mut sheet = data_sheet("Line 1");
    pipe(&mut sheet, 4, "P1", 500.0);
    pipe(&mut sheet, 10, "P2", 450.0);

    let imported = import_network(&Workbook::new(vec![sheet])).unwrap().unwrap();
    assert_eq!(imported.network.nodes().len(), 4);
    assert_eq!(imported.report.columns_skipped, 6);
}

#[test]
fn sheets_are_offset_and_not_linked() {
    let mut first = data_sheet("Line 1");
    pipe(&mut first, 4, "P1", 500.0);
    let mut second = data_sheet("Line 2");
    pipe(&mut second, 7, "P2", 450.0);

    let imported = import_network(&Workbook::new(vec![first, second]))
        .unwrap()
        .unwrap();
    let network = &imported.network;
    let p2 = &network.pipes()[1];

    assert_eq!(network.nodes().len(), 4);
    assert_eq!(
        network.node(p2.start_node).unwrap().position,
        Position::new(0.0, SHEET_SPACING)
    );
    assert_eq!(imported.report.sheets_processed, 2);
}

#[test]
fn foreign_sheets_are_reported_not_imported() {
    let mut notes = Sheet::new("Notes");
    notes.set_text(rows::NAME, 4, "looks like a pipe");
    let mut sheet = data_sheet("Line 1");
    pipe(&mut sheet, 4, "P1", 500.0);

    let imported = import_network(&Workbook::new(vec![notes, sheet]))
        .unwrap()
        .unwrap();
    assert_eq!(imported.network.pipes().len(), 1);
    assert_eq!(imported.report.sheets_skipped, vec!["Notes".to_string()]);
    assert_eq!(imported.report.sheets_processed, 1);
}

#[test]
fn no_pipes_is_none() {
    assert!(import_network(&Workbook::default()).unwrap().is_none());
    let only_marker = Workbook::new(vec![data_sheet("Empty")]);
    assert!(import_network(&only_marker).unwrap().is_none());
}

#[test]
fn empty_cells_take_reported_defaults() {
    let mut sheet = data_sheet("Line 1");
    sheet.set_text(rows::NAME, 4, "P1");
    sheet.set_text(rows::PHASE, 4, "vapor");

    let imported = import_network(&Workbook::new(vec![sheet])).unwrap().unwrap();
    let pipe = &imported.network.pipes()[0];

    assert_eq!(pipe.def.length, None);
    assert_eq!(pipe.def.diameter, mm(102.26));
    assert_eq!(pipe.def.inlet_diameter, mm(102.26));
    assert_eq!(pipe.def.roughness, mm(0.0457));
    assert!((get::kgph(pipe.def.mass_flow_rate) - 1000.0).abs() < 1e-9);
    assert_eq!(pipe.def.fluid.phase, Phase::Gas);
    assert!((get::kg_per_m3(pipe.def.fluid.density) - 1.0).abs() < 1e-12);
    assert_eq!(pipe.def.erosional_constant, 100.0);
    assert_eq!(pipe.def.user_k, None);
    assert_eq!(pipe.def.control_valve, None);

    let node = imported.network.node(pipe.start_node).unwrap();
    assert_eq!(node.pressure, Some(kpa(101.325)));
    assert_eq!(node.temperature, Some(celsius(20.0)));

    let fields: Vec<_> = imported
        .report
        .defaults_for("Line 1", 4)
        .iter()
        .map(|d| d.field)
        .collect();
    for expected in [
        "diameter",
        "inlet_diameter",
        "outlet_diameter",
        "roughness",
        "mass_flow_rate",
        "density",
        "viscosity",
        "temperature",
        "pressure",
        "elevation_change",
        "erosional_constant",
    ] {
        assert!(fields.contains(&expected), "missing default for {expected}");
    }
    assert!(!fields.contains(&"length"));
}

#[test]
fn fully_specified_group_has_no_defaults() {
    let mut sheet = data_sheet("Line 1");
    pipe(&mut sheet, 4, "P1", 500.0);
    let imported = import_network(&Workbook::new(vec![sheet])).unwrap().unwrap();
    assert!(imported.report.defaults_applied.is_empty());
}

#[test]
fn numeric_text_cells_are_read() {
    let mut sheet = data_sheet("Line 1");
    pipe(&mut sheet, 4, "P1", 500.0);
    sheet.set_text(rows::LENGTH, 4, "12.5");
    let imported = import_network(&Workbook::new(vec![sheet])).unwrap().unwrap();
    assert_eq!(imported.network.pipes()[0].length_m(), Some(12.5));
}

#[test]
fn fittings_and_control_valve() {
    let mut sheet = data_sheet("Line 1");
    pipe(&mut sheet, 4, "P1", 500.0);
    sheet.set_number(rows::FITTINGS_START + 1, 4, 4.0);
    sheet.set_number(rows::FITTINGS_START + 6, 4, 2.0);
    sheet.set_number(rows::FITTINGS_START + 9, 4, 0.0);
    sheet.set_number(rows::CONTROL_VALVE_DROP, 4, 75.0);
    sheet.set_number(rows::USER_K, 4, 1.5);

    let imported = import_network(&Workbook::new(vec![sheet])).unwrap().unwrap();
    let def = &imported.network.pipes()[0].def;

    let fittings: Vec<_> = def
        .fittings
        .iter()
        .map(|f| (f.fitting_type.as_str(), f.count, f.k_total))
        .collect();
    assert_eq!(
        fittings,
        vec![("elbow_90", 4, 0.0), ("block_valve_full_line_size", 2, 0.0)]
    );
    assert_eq!(def.section_type, SectionType::ControlValve);
    assert_eq!(def.control_valve.as_ref().unwrap().pressure_drop, kpa(75.0));
    assert_eq!(def.user_k, Some(1.5));
}

#[test]
fn garbage_workbook_bytes_fail() {
    assert!(Workbook::from_bytes(&[0u8; 16]).is_err());
}
