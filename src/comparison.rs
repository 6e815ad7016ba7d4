use serde::Serialize;

use crate::{
    prices::FuelPrices,
    projection::{InputError, VehicleProjection},
    quantity::{cost::Cost, mileage::Mileage, rate::{FuelPrice, RunningCost}},
    vehicle::{FuelType, VehicleProfile},
};

/// Fixed window for judging whether a price premium is offset by fuel
/// savings.
pub const BREAK_EVEN_YEARS: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ComparisonError {
    #[error(
        "the break-even rule needs at least 3 projected years, \
         but the projection only covers {horizon_years}"
    )]
    InsufficientHorizon { horizon_years: u32 },
}

/// One display row of the per-km running cost table.
#[derive(Clone, Debug, Serialize)]
pub struct RunningCostRow {
    pub label: String,
    pub fuel_type: FuelType,
    pub mileage: Mileage,
    pub unit_price: FuelPrice,
    pub running_cost: RunningCost,
}

/// Fuel cost per kilometre: `unit_price / mileage`.
pub fn running_cost(
    profile: &VehicleProfile,
    unit_price: FuelPrice,
) -> Result<RunningCost, InputError> {
    if profile.mileage.0 <= 0.0 {
        return Err(InputError::NotPositive { field: "mileage", value: profile.mileage.0 });
    }
    Ok(unit_price / profile.mileage)
}

pub fn running_cost_rows(
    projections: &[VehicleProjection],
    prices: &FuelPrices,
) -> Result<Vec<RunningCostRow>, InputError> {
    projections
        .iter()
        .map(|projection| {
            let profile = &projection.profile;
            let unit_price = prices.resolve(profile.fuel_type);
            Ok(RunningCostRow {
                label: profile.label.clone(),
                fuel_type: profile.fuel_type,
                mileage: profile.mileage,
                unit_price,
                running_cost: running_cost(profile, unit_price)?,
            })
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Recommendation {
    /// Label of the financially preferable vehicle.
    pub recommended: String,

    /// Candidate purchase price minus reference purchase price.
    pub price_difference: Cost,

    /// Fuel spend avoided by the candidate over the first three years.
    pub fuel_saving_3yr: Cost,

    pub rationale: String,
}

/// Apply the 3-year break-even rule to exactly two vehicles.
///
/// The candidate wins when its fuel savings over the first three years cover
/// its price premium, ties included. A third vehicle, when present, is
/// projected and tabulated but takes no part in this rule.
pub fn recommend(
    reference: &VehicleProjection,
    candidate: &VehicleProjection,
) -> Result<Recommendation, ComparisonError> {
    let horizon_years = reference.series.horizon_years().min(candidate.series.horizon_years());
    if horizon_years < BREAK_EVEN_YEARS {
        return Err(ComparisonError::InsufficientHorizon { horizon_years });
    }

    let price_difference =
        candidate.profile.purchase_price - reference.profile.purchase_price;
    let fuel_saving_3yr: Cost = (1..=BREAK_EVEN_YEARS as usize)
        .map(|year| reference.series[year].fuel_cost - candidate.series[year].fuel_cost)
        .sum();

    let (recommended, rationale) = if fuel_saving_3yr >= price_difference {
        (
            candidate.profile.label.clone(),
            format!(
                "The price difference between {} and {} ({price_difference}) is recovered \
                 through fuel savings ({fuel_saving_3yr}) within {BREAK_EVEN_YEARS} years, \
                 so go for {}.",
                candidate.profile.label, reference.profile.label, candidate.profile.label,
            ),
        )
    } else {
        (
            reference.profile.label.clone(),
            format!(
                "The fuel saving in {BREAK_EVEN_YEARS} years ({fuel_saving_3yr}) is less than \
                 the price difference ({price_difference}), so it's better to go with {}.",
                reference.profile.label,
            ),
        )
    };

    Ok(Recommendation { recommended, price_difference, fuel_saving_3yr, rationale })
}
