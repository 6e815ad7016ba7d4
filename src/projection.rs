use serde::Serialize;

use crate::{
    prices::FuelPrices,
    quantity::{cost::Cost, distance::Kilometers, fuel::FuelAmount},
    vehicle::VehicleProfile,
};

/// Usage inputs shared by every vehicle in a comparison run.
#[derive(Clone, Debug, Serialize, bon::Builder)]
pub struct UsageAssumptions {
    pub annual_distance: Kilometers,

    /// The CLI restricts this to 10 or 15 years; the engine itself accepts
    /// any positive horizon.
    pub horizon_years: u32,

    pub prices: FuelPrices,
}

/// Cumulative totals up to and including the given year.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct YearPoint {
    pub year: u32,
    pub total_cost: Cost,
    pub fuel_used: FuelAmount,
    pub fuel_cost: Cost,
}

/// One entry per year index `0..=horizon_years`; entry 0 is the baseline
/// (purchase price only, nothing consumed yet).
#[derive(Clone, Debug, PartialEq, Serialize, derive_more::Index)]
pub struct YearlySeries(Vec<YearPoint>);

impl YearlySeries {
    #[must_use]
    pub fn points(&self) -> &[YearPoint] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of projected years, excluding the baseline entry.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn horizon_years(&self) -> u32 {
        self.0.len().saturating_sub(1) as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("the projection horizon must cover at least one year")]
    ZeroHorizon,
}

/// Project the cumulative cost of ownership year by year.
///
/// Usage and unit prices are fixed for the whole horizon, so the series grows
/// by a constant increment: each year adds `annual_distance / mileage` fuel
/// and that fuel's cost onto the previous year's running totals.
pub fn project(
    profile: &VehicleProfile,
    usage: &UsageAssumptions,
) -> Result<YearlySeries, InputError> {
    if profile.mileage.0 <= 0.0 {
        return Err(InputError::NotPositive { field: "mileage", value: profile.mileage.0 });
    }
    if profile.purchase_price.is_negative() {
        return Err(InputError::Negative {
            field: "purchase-price",
            value: profile.purchase_price.0,
        });
    }
    if usage.annual_distance.is_negative() {
        return Err(InputError::Negative {
            field: "annual-distance",
            value: usage.annual_distance.0,
        });
    }
    if usage.horizon_years == 0 {
        return Err(InputError::ZeroHorizon);
    }

    let unit_price = usage.prices.resolve(profile.fuel_type);
    if unit_price.0 <= 0.0 {
        return Err(InputError::NotPositive { field: "unit-price", value: unit_price.0 });
    }

    let yearly_fuel = usage.annual_distance / profile.mileage;
    let yearly_fuel_cost = yearly_fuel * unit_price;

    let mut points = Vec::with_capacity(usage.horizon_years as usize + 1);
    points.push(YearPoint {
        year: 0,
        total_cost: profile.purchase_price,
        fuel_used: FuelAmount::ZERO,
        fuel_cost: Cost::ZERO,
    });
    for year in 1..=usage.horizon_years {
        let previous = points[year as usize - 1];
        points.push(YearPoint {
            year,
            total_cost: previous.total_cost + yearly_fuel_cost,
            fuel_used: previous.fuel_used + yearly_fuel,
            fuel_cost: previous.fuel_cost + yearly_fuel_cost,
        });
    }
    Ok(YearlySeries(points))
}

/// A profile together with its projected series, as consumed by the
/// comparison operations and the report.
#[derive(Clone, Debug, Serialize)]
pub struct VehicleProjection {
    pub profile: VehicleProfile,
    pub series: YearlySeries,
}

impl VehicleProjection {
    pub fn try_new(
        profile: VehicleProfile,
        usage: &UsageAssumptions,
    ) -> Result<Self, InputError> {
        let series = project(&profile, usage)?;
        Ok(Self { profile, series })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{quantity::mileage::Mileage, vehicle::FuelType};

    fn petrol_profile() -> VehicleProfile {
        VehicleProfile::builder()
            .label("Vehicle 1")
            .purchase_price(Cost::from(1_000_000.0))
            .mileage(Mileage::from(15.0))
            .fuel_type(FuelType::Petrol)
            .build()
    }

    fn usage(horizon_years: u32) -> UsageAssumptions {
        UsageAssumptions::builder()
            .annual_distance(Kilometers::from(10_000.0))
            .horizon_years(horizon_years)
            .prices(crate::prices::FuelPrices::DEFAULTS)
            .build()
    }

    #[test]
    fn test_length_and_baseline() -> Result<(), InputError> {
        let series = project(&petrol_profile(), &usage(10))?;
        assert_eq!(series.len(), 11);
        assert_eq!(series.horizon_years(), 10);
        assert_eq!(series[0].total_cost, Cost::from(1_000_000.0));
        assert_eq!(series[0].fuel_used, FuelAmount::ZERO);
        assert_eq!(series[0].fuel_cost, Cost::ZERO);
        Ok(())
    }

    #[test]
    fn test_first_year_worked_example() -> Result<(), InputError> {
        let series = project(&petrol_profile(), &usage(10))?;
        assert_abs_diff_eq!(series[1].fuel_used.0, 666.67, epsilon = 0.01);
        assert_abs_diff_eq!(series[1].fuel_cost.0, 73_333.33, epsilon = 0.01);
        assert_abs_diff_eq!(series[1].total_cost.0, 1_073_333.33, epsilon = 0.01);
        Ok(())
    }

    #[test]
    fn test_monotonic_and_linear() -> Result<(), InputError> {
        let series = project(&petrol_profile(), &usage(15))?;
        let first_increment = series[1].fuel_cost - series[0].fuel_cost;
        for pair in series.points().windows(2) {
            assert!(pair[1].total_cost >= pair[0].total_cost);
            assert!(pair[1].fuel_used > pair[0].fuel_used);
            assert!(pair[1].fuel_cost > pair[0].fuel_cost);
            assert_abs_diff_eq!(
                (pair[1].fuel_cost - pair[0].fuel_cost).0,
                first_increment.0,
                epsilon = 1e-9,
            );
        }
        Ok(())
    }

    #[test]
    fn test_zero_distance_stays_flat() -> Result<(), InputError> {
        let mut usage = usage(10);
        usage.annual_distance = Kilometers::ZERO;
        let series = project(&petrol_profile(), &usage)?;
        assert_eq!(series[10].total_cost, Cost::from(1_000_000.0));
        assert_eq!(series[10].fuel_used, FuelAmount::ZERO);
        Ok(())
    }

    #[test]
    fn test_rejects_non_positive_mileage() {
        let mut profile = petrol_profile();
        profile.mileage = Mileage::ZERO;
        assert_eq!(
            project(&profile, &usage(10)),
            Err(InputError::NotPositive { field: "mileage", value: 0.0 }),
        );
    }

    #[test]
    fn test_rejects_negative_purchase_price() {
        let mut profile = petrol_profile();
        profile.purchase_price = Cost::from(-1.0);
        assert_eq!(
            project(&profile, &usage(10)),
            Err(InputError::Negative { field: "purchase-price", value: -1.0 }),
        );
    }

    #[test]
    fn test_rejects_negative_distance() {
        let mut usage = usage(10);
        usage.annual_distance = Kilometers::from(-1.0);
        assert_eq!(
            project(&petrol_profile(), &usage),
            Err(InputError::Negative { field: "annual-distance", value: -1.0 }),
        );
    }

    #[test]
    fn test_rejects_zero_horizon() {
        assert_eq!(project(&petrol_profile(), &usage(0)), Err(InputError::ZeroHorizon));
    }

    #[test]
    fn test_missing_price_falls_back() -> Result<(), InputError> {
        let mut usage = usage(10);
        usage.prices = crate::prices::FuelPrices::default();
        let series = project(&petrol_profile(), &usage)?;
        // 10 000 km / 15 km/L × ₹100/L:
        assert_abs_diff_eq!(series[1].fuel_cost.0, 66_666.67, epsilon = 0.01);
        Ok(())
    }
}
