//! Command implementations shared by the binary and its tests.

use std::fmt::Write as _;
use std::path::Path;

use pn_core::units::get;
use pn_criteria::{CheckStatus, CriteriaCheckResult, CriteriaEvaluator, PipeStatus};
use pn_graph::{Network, ServiceType};
use pn_hydraulics::{PipelineHydraulicSummary, estimate_network, summarize};
use pn_import::{ImportedNetwork, Workbook, import_network};
use serde::Serialize;
use tracing::info;

use crate::config::ScreeningConfig;
use crate::error::{CliError, CliResult};

/// Import a workbook, failing if it holds no pipes.
pub fn load_network(path: &Path) -> CliResult<ImportedNetwork> {
    info!(path = %path.display(), "reading workbook");
    let workbook = Workbook::open(path)?;
    import_network(&workbook)?.ok_or_else(|| CliError::NoPipes {
        path: path.to_path_buf(),
    })
}

pub fn render_import(imported: &ImportedNetwork) -> String {
    let network = &imported.network;
    let report = &imported.report;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} nodes, {} pipes from {} sheet(s)",
        network.nodes().len(),
        network.pipes().len(),
        report.sheets_processed
    );
    for name in &report.sheets_skipped {
        let _ = writeln!(out, "  skipped sheet: {name}");
    }
    for pipe in network.pipes() {
        let length = pipe
            .length_m()
            .map_or_else(|| "-".to_string(), |l| format!("{l:.1} m"));
        let _ = writeln!(
            out,
            "  {:<12} {} -> {}  {:>8}  {:.1} mm  {}  {}",
            pipe.def.name,
            pipe.start_node,
            pipe.end_node,
            length,
            pipe.diameter_mm(),
            pipe.def.fluid.phase,
            pipe.def.section_type.as_str(),
        );
    }
    if !report.defaults_applied.is_empty() {
        let _ = writeln!(out, "defaults applied:");
        for d in &report.defaults_applied {
            let _ = writeln!(
                out,
                "  {} col {}: {} = {}",
                d.sheet, d.column, d.field, d.value
            );
        }
    }
    out
}

/// Criteria verdicts for one pipe after estimation.
#[derive(Debug, Clone, Serialize)]
pub struct PipeCheck {
    pub name: String,
    pub velocity_mps: Option<f64>,
    pub pressure_drop_kpa: Option<f64>,
    pub status: PipeStatus,
}

/// Service type and sub-type for `check`.
///
/// `--service` wins and brings only its own `--sub-type`. Without it the
/// config's `service_type` applies, with `--sub-type` overriding the config's
/// sub-type.
pub fn resolve_service(
    service: Option<ServiceType>,
    sub_type: Option<&str>,
    config: Option<&ScreeningConfig>,
) -> CliResult<(ServiceType, Option<String>)> {
    if let Some(service) = service {
        return Ok((service, sub_type.map(str::to_string)));
    }
    let config = config.ok_or_else(|| CliError::Config {
        what: "no service type: pass --service or a config with service_type".to_string(),
    })?;
    let service = config.service_type.ok_or_else(|| CliError::Config {
        what: "no service type: pass --service or set service_type in the config".to_string(),
    })?;
    let sub_type = sub_type
        .map(str::to_string)
        .or_else(|| config.service_sub_type.clone());
    Ok((service, sub_type))
}

/// Estimate every segment, tag it with `service`, and evaluate the criteria.
pub fn check_network(
    network: &Network,
    service: ServiceType,
    sub_type: Option<&str>,
) -> Vec<PipeCheck> {
    let estimated = estimate_network(network)
        .map_pipes(|p| p.clone().with_service(service, sub_type.map(str::to_string)));
    let evaluator = CriteriaEvaluator::new();

    estimated
        .pipes()
        .iter()
        .map(|pipe| PipeCheck {
            name: pipe.def.name.clone(),
            velocity_mps: pipe.velocity.map(get::mps),
            pressure_drop_kpa: pipe.pressure_drop.map(get::kilopascals),
            status: evaluator.evaluate(pipe),
        })
        .collect()
}

fn status_label(result: &CriteriaCheckResult) -> String {
    match (&result.status, &result.message) {
        (CheckStatus::Ok, _) | (_, None) => "ok".to_string(),
        (CheckStatus::Warning, Some(m)) => format!("warning: {m}"),
        (CheckStatus::Error, Some(m)) => format!("error: {m}"),
    }
}

pub fn render_checks(checks: &[PipeCheck]) -> String {
    let mut out = String::new();
    for check in checks {
        let v = check
            .velocity_mps
            .map_or_else(|| "-".to_string(), |v| format!("{v:.2} m/s"));
        let dp = check
            .pressure_drop_kpa
            .map_or_else(|| "-".to_string(), |dp| format!("{dp:.2} kPa"));
        let _ = writeln!(out, "{:<12} {:>10} {:>12}", check.name, v, dp);
        let _ = writeln!(out, "  velocity:      {}", status_label(&check.status.velocity_status));
        let _ = writeln!(
            out,
            "  pressure drop: {}",
            status_label(&check.status.pressure_drop_status)
        );
    }
    out
}

pub fn summarize_network(
    network: &Network,
    config: &ScreeningConfig,
) -> Option<PipelineHydraulicSummary> {
    summarize(
        network,
        config.scenario.as_ref(),
        config.set_pressure_barg,
        config.boundary,
    )
}

pub fn render_summary(summary: Option<&PipelineHydraulicSummary>) -> String {
    let Some(s) = summary else {
        return "line not evaluable (no pipes, no scenario or no set pressure)\n".to_string();
    };
    let mut out = String::new();
    let _ = writeln!(out, "total length:     {:.2} m", get::meters(s.total_length));
    let _ = writeln!(out, "nominal diameter: {:.2} mm", get::millimeters(s.nominal_diameter));
    let _ = writeln!(out, "velocity:         {:.2} m/s", get::mps(s.velocity));
    let _ = writeln!(out, "reynolds number:  {:.0}", s.reynolds_number);
    let _ = writeln!(out, "friction factor:  {:.4}", s.friction_factor);
    let _ = writeln!(
        out,
        "pressure drop:    {:.2} kPa ({:.1}%)",
        get::kilopascals(s.pressure_drop),
        s.pressure_drop_percent
    );
    let _ = writeln!(out, "{:?}: {}", s.validation_status, s.validation_message);
    out
}

pub fn to_json<T: Serialize>(value: &T) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
