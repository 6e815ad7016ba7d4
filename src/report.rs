use serde::Serialize;

use crate::{
    comparison::{Recommendation, RunningCostRow, recommend, running_cost_rows},
    prelude::*,
    projection::{UsageAssumptions, VehicleProjection},
    quantity::distance::Kilometers,
};

/// Everything the presentation layer needs to chart, tabulate and verbalize
/// one comparison run.
#[derive(Clone, Debug, Serialize)]
pub struct ComparisonReport {
    pub horizon_years: u32,
    pub annual_distance: Kilometers,
    pub vehicles: Vec<VehicleProjection>,
    pub running_costs: Vec<RunningCostRow>,

    /// Always a vehicle-1-vs-vehicle-2 verdict; a third vehicle appears in
    /// the series and running costs only.
    pub recommendation: Recommendation,
}

pub fn build_report(
    usage: &UsageAssumptions,
    vehicles: Vec<VehicleProjection>,
) -> Result<ComparisonReport> {
    ensure!(
        (2..=3).contains(&vehicles.len()),
        "a comparison needs 2 or 3 vehicles, got {}",
        vehicles.len(),
    );
    let running_costs = running_cost_rows(&vehicles, &usage.prices)?;
    let recommendation = recommend(&vehicles[0], &vehicles[1])?;
    Ok(ComparisonReport {
        horizon_years: usage.horizon_years,
        annual_distance: usage.annual_distance,
        vehicles,
        running_costs,
        recommendation,
    })
}
