//! Command-line front end for `rotation_core`.
//!
//! # Responsibility
//! - Load the rotation table once and run projection queries against it.
//! - Keep output plain and deterministic; `--json` emits the result model.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use rotation_core::{
    core_version, default_log_level, init_logging, parse_age, ProjectionPolicy,
    ProjectionService, RoleProjectionResult, RotationTable, TableSource, UnitId, YearEntry,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rotation", about = "Chairperson and treasurer rotation projector")]
struct CommandLine {
    /// JSON rotation table; the association table is used when omitted.
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// Absolute directory for rolling log files. Logging is off without it.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Years and age until a unit holds each role.
    Project {
        #[arg(long)]
        unit: UnitId,
        /// Current age in whole years (1-150).
        #[arg(long, allow_hyphen_values = true)]
        age: String,
        #[arg(long, default_value = "deferral")]
        policy: ProjectionPolicy,
        #[arg(long)]
        json: bool,
    },
    /// Rotation order and current role holders.
    Units,
    /// Role holders for the coming years.
    Schedule {
        #[arg(long, default_value_t = 10)]
        years: u32,
        #[arg(long, default_value = "deferral")]
        policy: ProjectionPolicy,
    },
    Version,
}

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse();

    if let Some(log_dir) = commands.log_dir.as_deref() {
        let level = commands
            .log_level
            .as_deref()
            .unwrap_or_else(|| default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    if let Commands::Version = commands.command {
        println!("rotation_core version={}", core_version());
        return Ok(());
    }

    let source = commands
        .table
        .map(TableSource::File)
        .unwrap_or_default();
    let table = source.load().context("failed to load rotation table")?;

    match commands.command {
        Commands::Project {
            unit,
            age,
            policy,
            json,
        } => {
            let current_age = match parse_age(&age).into_result() {
                Ok(current_age) => current_age,
                Err(err) => bail!("invalid age `{}`: {err}", age.trim()),
            };
            let service = ProjectionService::new(&table, policy);
            let result = service.project(unit, current_age)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_projection(&result);
            }
        }
        Commands::Units => print_units(&table),
        Commands::Schedule { years, policy } => {
            let service = ProjectionService::new(&table, policy);
            print_schedule(&service.upcoming_schedule(years));
        }
        Commands::Version => {}
    }

    Ok(())
}

fn print_projection(result: &RoleProjectionResult) {
    println!("unit={} age={} policy={}", result.unit, result.current_age, result.policy);
    println!(
        "chairperson in {} year(s) at age {} (current: {})",
        result.years_until_chair, result.age_as_chair, result.current_chair_unit
    );
    println!(
        "treasurer in {} year(s) at age {} (current: {})",
        result.years_until_treasurer, result.age_as_treasurer, result.current_treasurer_unit
    );
    if let Some(schedule) = result.schedule.as_deref() {
        print_schedule(schedule);
    }
}

fn print_schedule(entries: &[YearEntry]) {
    println!("{:>5}  {:>11}  {:>9}", "year", "chairperson", "treasurer");
    for entry in entries {
        println!(
            "{:>5}  {:>11}  {:>9}",
            entry.year, entry.chair_unit, entry.treasurer_unit
        );
    }
}

fn print_units(table: &RotationTable) {
    for unit in table.units() {
        let mut roles = Vec::new();
        if *unit == table.current_chair_unit() {
            roles.push("chairperson");
        }
        if *unit == table.current_treasurer_unit() {
            roles.push("treasurer");
        }
        if roles.is_empty() {
            println!("{unit}");
        } else {
            println!("{unit} ({})", roles.join(", "));
        }
    }
}
