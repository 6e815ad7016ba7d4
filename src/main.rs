mod cli;
mod comparison;
mod prelude;
mod prices;
mod projection;
mod quantity;
mod report;
mod tables;
mod vehicle;

use clap::{Parser, crate_version};
use itertools::Itertools;

use crate::{
    cli::{Args, Command, CompareArgs, ProjectArgs},
    prelude::*,
    projection::VehicleProjection,
    report::build_report,
    tables::{build_running_cost_table, build_yearly_summary_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Compare(args) => compare(*args),
        Command::Project(args) => project_one(*args),
    }
}

fn compare(args: CompareArgs) -> Result {
    ensure!(
        (2..=3).contains(&args.vehicles.len()),
        "pass `--vehicle` 2 or 3 times (got {})",
        args.vehicles.len(),
    );
    let usage = args.usage.try_into_assumptions()?;
    info!(
        n_vehicles = args.vehicles.len(),
        horizon_years = usage.horizon_years,
        annual_distance = %usage.annual_distance,
        "comparing…",
    );

    let projections: Vec<VehicleProjection> = args
        .vehicles
        .into_iter()
        .enumerate()
        .map(|(index, spec)| {
            VehicleProjection::try_new(
                spec.into_profile(&format!("Vehicle {}", index + 1)),
                &usage,
            )
        })
        .try_collect()?;
    let report = build_report(&usage, projections)?;

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", build_yearly_summary_table(&usage, &report.vehicles));
        println!("{}", build_running_cost_table(&report.running_costs));
        println!("{}", report.recommendation.rationale);
    }
    Ok(())
}

fn project_one(args: ProjectArgs) -> Result {
    let usage = args.usage.try_into_assumptions()?;
    let projection = VehicleProjection::try_new(args.vehicle.into_profile("Vehicle 1"), &usage)?;

    if args.output.json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        println!("{}", build_yearly_summary_table(&usage, std::slice::from_ref(&projection)));
    }
    Ok(())
}
