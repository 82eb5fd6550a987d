use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use pn_cli::commands::{
    check_network, load_network, render_checks, render_import, render_summary, resolve_service,
    summarize_network, to_json,
};
use pn_cli::{CliResult, load_config};
use pn_graph::ServiceType;

#[derive(Parser)]
#[command(name = "pn-cli")]
#[command(about = "Pipe network import and hydraulic screening", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a data-sheet workbook and list its nodes and pipes
    Import {
        /// Path to the workbook (.xlsx, .xls or .ods)
        workbook: PathBuf,
        /// Print the network and import report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Estimate every segment and check it against the design criteria
    Check {
        /// Path to the workbook (.xlsx, .xls or .ods)
        workbook: PathBuf,
        /// Service type applied to every pipe (e.g. pump_discharge)
        #[arg(long)]
        service: Option<ServiceType>,
        /// Service sub-type (e.g. rich, saturated)
        #[arg(long)]
        sub_type: Option<String>,
        /// Screening YAML supplying service_type / service_sub_type when --service is absent
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Screen the whole line against a relief scenario
    Summarize {
        /// Path to the workbook (.xlsx, .xls or .ods)
        workbook: PathBuf,
        /// Path to the screening YAML file
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Import { workbook, json } => cmd_import(&workbook, json),
        Commands::Check {
            workbook,
            service,
            sub_type,
            config,
            json,
        } => cmd_check(&workbook, service, sub_type.as_deref(), config.as_deref(), json),
        Commands::Summarize {
            workbook,
            config,
            json,
        } => cmd_summarize(&workbook, &config, json),
    }
}

fn cmd_import(workbook: &Path, json: bool) -> CliResult<()> {
    let imported = load_network(workbook)?;
    if json {
        println!("{}", to_json(&imported)?);
    } else {
        print!("{}", render_import(&imported));
    }
    Ok(())
}

fn cmd_check(
    workbook: &Path,
    service: Option<ServiceType>,
    sub_type: Option<&str>,
    config_path: Option<&Path>,
    json: bool,
) -> CliResult<()> {
    let config = config_path.map(load_config).transpose()?;
    let (service, sub_type) = resolve_service(service, sub_type, config.as_ref())?;
    let imported = load_network(workbook)?;
    let checks = check_network(&imported.network, service, sub_type.as_deref());
    if json {
        println!("{}", to_json(&checks)?);
    } else {
        print!("{}", render_checks(&checks));
    }
    Ok(())
}

fn cmd_summarize(workbook: &Path, config_path: &Path, json: bool) -> CliResult<()> {
    let config = load_config(config_path)?;
    let imported = load_network(workbook)?;
    let summary = summarize_network(&imported.network, &config);
    if json {
        println!("{}", to_json(&summary)?);
    } else {
        print!("{}", render_summary(summary.as_ref()));
    }
    Ok(())
}
