//! Line screening over built and imported networks.

use pn_core::units::{LengthUnit, get, kgph, m, mm};
use pn_criteria::{CheckStatus, CriteriaEvaluator};
use pn_fluids::{DEFAULT_EROSIONAL_CONSTANT, Fluid, Phase};
use pn_graph::{
    Direction, GasFlowModel, Network, NetworkBuilder, PipeDef, Position, SectionType, ServiceType,
};
use pn_hydraulics::{
    BoundaryKind, FlowScenario, ValidationStatus, estimate_network, friction_factor, summarize,
};
use pn_import::layout::{MARKER_CELL, MARKER_TEXT, rows};
use pn_import::{Sheet, Workbook, import_network};

fn def(name: &str, length: pn_core::units::Length, diameter_mm: f64) -> PipeDef {
    PipeDef {
        name: name.into(),
        description: None,
        length: Some(length),
        diameter: mm(diameter_mm),
        inlet_diameter: mm(diameter_mm),
        outlet_diameter: mm(diameter_mm),
        roughness: mm(0.0457),
        mass_flow_rate: kgph(1000.0),
        direction: Direction::Forward,
        fluid: Fluid::default_for(Phase::Liquid),
        erosional_constant: DEFAULT_EROSIONAL_CONSTANT,
        fittings: Vec::new(),
        section_type: SectionType::Pipeline,
        control_valve: None,
        gas_flow_model: GasFlowModel::Adiabatic,
        elevation_change: m(0.0),
        fitting_type: None,
        user_k: None,
        fitting_safety_factor: None,
        user_pressure_loss: None,
        service_type: None,
        service_sub_type: None,
    }
}

fn line(defs: Vec<PipeDef>) -> Network {
    let mut builder = NetworkBuilder::new();
    let mut prev = builder.add_node("N1", Position::ORIGIN);
    for (i, d) in defs.into_iter().enumerate() {
        let next = builder.add_node(
            format!("N{}", i + 2),
            Position::new(200.0 * (i + 1) as f64, 0.0),
        );
        builder.add_pipe(prev, next, d);
        prev = next;
    }
    builder.build().unwrap()
}

const LIQUID: FlowScenario = FlowScenario {
    relieving_rate_kg_h: 28_800.0,
    phase: Phase::Liquid,
};

#[test]
fn nothing_to_summarize() {
    let empty = NetworkBuilder::new().build().unwrap();
    assert!(summarize(&empty, Some(&LIQUID), 10.0, BoundaryKind::Inlet).is_none());

    let network = line(vec![def("P1", m(10.0), 100.0)]);
    assert!(summarize(&network, None, 10.0, BoundaryKind::Inlet).is_none());
    assert!(summarize(&network, Some(&LIQUID), 0.0, BoundaryKind::Inlet).is_none());
}

#[test]
fn liquid_line_summary() {
    // 28 800 kg/h at 800 kg/m3 is 0.01 m3/s.
    let network = line(vec![def("P1", m(60.0), 100.0), def("P2", m(40.0), 100.0)]);
    let s = summarize(&network, Some(&LIQUID), 10.0, BoundaryKind::Outlet).unwrap();

    let area = std::f64::consts::PI * 0.1 * 0.1 / 4.0;
    let v = 0.01 / area;
    assert!((get::meters(s.total_length) - 100.0).abs() < 1e-9);
    assert!((get::millimeters(s.nominal_diameter) - 100.0).abs() < 1e-9);
    assert!((get::mps(s.velocity) - v).abs() < 1e-9);
    assert!((s.reynolds_number - 800.0 * v * 0.1 / 0.001).abs() < 1e-6);
    assert!((s.friction_factor - friction_factor(s.reynolds_number, 0.1)).abs() < 1e-12);

    let dp_kpa = s.friction_factor * 1000.0 * (800.0 * v * v / 2.0) / 1000.0;
    assert!((get::kilopascals(s.pressure_drop) - dp_kpa).abs() < 1e-9);
    assert!((s.pressure_drop_percent - dp_kpa / 10.0).abs() < 1e-9);
    assert_eq!(s.validation_status, ValidationStatus::Pass);
}

#[test]
fn mean_diameter_and_missing_lengths() {
    let mut short = def("P2", m(5.0), 150.0);
    short.length = None;
    let network = line(vec![def("P1", m(20.0), 50.0), short]);
    let s = summarize(&network, Some(&LIQUID), 5.0, BoundaryKind::Inlet).unwrap();
    assert!((get::millimeters(s.nominal_diameter) - 100.0).abs() < 1e-9);
    assert!((get::meters(s.total_length) - 20.0).abs() < 1e-9);
}

#[test]
fn feet_lengths_are_normalized() {
    let network = line(vec![def("P1", LengthUnit::Foot.quantity(100.0), 100.0)]);
    let s = summarize(&network, Some(&LIQUID), 10.0, BoundaryKind::Inlet).unwrap();
    assert!((get::meters(s.total_length) - 30.48).abs() < 1e-9);
}

#[test]
fn undersized_inlet_fails() {
    let network = line(vec![def("P1", m(50.0), 25.0)]);
    let s = summarize(&network, Some(&LIQUID), 2.0, BoundaryKind::Inlet).unwrap();
    assert!(s.pressure_drop_percent > 5.0);
    assert_eq!(s.validation_status, ValidationStatus::Fail);
}

#[test]
fn imported_line_is_estimated_then_checked() {
    let mut sheet = Sheet::new("Discharge");
    sheet.set_text(MARKER_CELL.0, MARKER_CELL.1, MARKER_TEXT);
    for col in [4, 7] {
        sheet.set_text(rows::NAME, col, format!("P{col}"));
        sheet.set_number(rows::LENGTH, col, 100.0);
        sheet.set_number(rows::DIAMETER, col, 50.8);
        // about 2.5 m/s of water in a 2" line
        sheet.set_number(rows::MASS_FLOW, col, 18_200.0);
    }
    let imported = import_network(&Workbook::new(vec![sheet])).unwrap().unwrap();
    assert!(imported.network.pipes().iter().all(|p| p.velocity.is_none()));

    let estimated = estimate_network(&imported.network);
    assert!(imported.network.pipes()[0].velocity.is_none());
    let tagged = estimated.map_pipes(|p| p.clone().with_service(ServiceType::PumpDischarge, None));

    let statuses = CriteriaEvaluator::new().evaluate_network(&tagged);
    assert_eq!(statuses.len(), 2);
    for (id, status) in statuses {
        let pipe = tagged.pipe(id).unwrap();
        let v = get::mps(pipe.velocity.unwrap());
        assert!(v > 2.4 && v < 2.6, "v = {v}");
        assert_eq!(status.velocity_status.status, CheckStatus::Ok);
        // Friction alone at 2.5 m/s in 2" is above 0.9 bar/100 m.
        assert_eq!(status.pressure_drop_status.status, CheckStatus::Warning);
    }
}
