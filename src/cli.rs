use std::{path::PathBuf, str::FromStr};

use clap::{Parser, Subcommand};

use crate::{
    prelude::*,
    prices::FuelPrices,
    projection::UsageAssumptions,
    quantity::{cost::Cost, distance::Kilometers, mileage::Mileage, rate::FuelPrice},
    vehicle::{FuelType, VehicleProfile},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Project and compare the cost of ownership of two or three vehicles.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Project the cost of ownership of a single vehicle.
    #[clap(name = "project")]
    Project(Box<ProjectArgs>),
}

#[derive(Parser)]
pub struct CompareArgs {
    /// Vehicle spec `FUEL:PRICE:MILEAGE`, for example `petrol:1000000:15`.
    ///
    /// Pass the flag two or three times. The first vehicle is the reference
    /// and the second the candidate of the break-even recommendation.
    #[clap(long = "vehicle", required = true)]
    pub vehicles: Vec<VehicleSpec>,

    #[clap(flatten)]
    pub usage: UsageArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct ProjectArgs {
    #[clap(flatten)]
    pub vehicle: VehicleArgs,

    #[clap(flatten)]
    pub usage: UsageArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct VehicleArgs {
    #[clap(long = "fuel-type", value_enum)]
    pub fuel_type: FuelType,

    /// Purchase price in rupees.
    #[clap(long = "purchase-price")]
    pub purchase_price: Cost,

    /// Km per litre/kg for combustion fuels, km per kWh for electric.
    #[clap(long)]
    pub mileage: Mileage,
}

impl VehicleArgs {
    #[must_use]
    pub fn into_profile(self, label: &str) -> VehicleProfile {
        VehicleProfile::builder()
            .label(label)
            .purchase_price(self.purchase_price)
            .mileage(self.mileage)
            .fuel_type(self.fuel_type)
            .build()
    }
}

#[derive(Parser)]
pub struct UsageArgs {
    /// Driving distance per year in kilometres.
    #[clap(long = "annual-distance-km", default_value = "10000", env = "ANNUAL_DISTANCE_KM")]
    pub annual_distance: Kilometers,

    /// Projection horizon in years.
    #[clap(long = "horizon-years", value_enum, default_value = "10", env = "HORIZON_YEARS")]
    pub horizon: Horizon,

    #[clap(flatten)]
    pub prices: PriceArgs,
}

impl UsageArgs {
    pub fn try_into_assumptions(&self) -> Result<UsageAssumptions> {
        Ok(UsageAssumptions::builder()
            .annual_distance(self.annual_distance)
            .horizon_years(self.horizon.years())
            .prices(self.prices.try_into_prices()?)
            .build())
    }
}

/// The two supported projection durations.
#[derive(Clone, Copy, clap::ValueEnum)]
pub enum Horizon {
    #[value(name = "10")]
    TenYears,

    #[value(name = "15")]
    FifteenYears,
}

impl Horizon {
    #[must_use]
    pub const fn years(self) -> u32 {
        match self {
            Self::TenYears => 10,
            Self::FifteenYears => 15,
        }
    }
}

#[derive(Parser)]
pub struct PriceArgs {
    /// Petrol price in ₹/L (default: 110).
    #[clap(long = "petrol-price", env = "FUEL_PRICE_PETROL")]
    pub petrol: Option<FuelPrice>,

    /// CNG price in ₹/kg (default: 85).
    #[clap(long = "cng-price", env = "FUEL_PRICE_CNG")]
    pub cng: Option<FuelPrice>,

    /// Diesel price in ₹/L (default: 100).
    #[clap(long = "diesel-price", env = "FUEL_PRICE_DIESEL")]
    pub diesel: Option<FuelPrice>,

    /// Electricity price in ₹/kWh (default: 8).
    #[clap(long = "electricity-price", env = "FUEL_PRICE_ELECTRIC")]
    pub electric: Option<FuelPrice>,

    /// Optional TOML file with per-fuel unit prices (`petrol = 110.0`, …).
    #[clap(long = "prices-file", env = "FUEL_PRICES_FILE")]
    pub prices_file: Option<PathBuf>,
}

impl PriceArgs {
    /// Merge flags over the price file over the built-in defaults.
    pub fn try_into_prices(&self) -> Result<FuelPrices> {
        let from_file = match &self.prices_file {
            Some(path) => FuelPrices::read_from(path)?,
            None => FuelPrices::default(),
        };
        let from_flags = FuelPrices {
            petrol: self.petrol,
            cng: self.cng,
            diesel: self.diesel,
            electric: self.electric,
        };
        Ok(from_flags.or(from_file).or(FuelPrices::DEFAULTS))
    }
}

#[derive(Parser)]
pub struct OutputArgs {
    /// Print the machine-readable report as JSON instead of tables.
    #[clap(long)]
    pub json: bool,
}

/// Colon-separated vehicle spec: fuel type, purchase price, mileage.
#[derive(Clone)]
pub struct VehicleSpec {
    pub fuel_type: FuelType,
    pub purchase_price: Cost,
    pub mileage: Mileage,
}

impl VehicleSpec {
    #[must_use]
    pub fn into_profile(self, label: &str) -> VehicleProfile {
        VehicleProfile::builder()
            .label(label)
            .purchase_price(self.purchase_price)
            .mileage(self.mileage)
            .fuel_type(self.fuel_type)
            .build()
    }
}

impl FromStr for VehicleSpec {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Self> {
        let (fuel_type, rest) = spec
            .split_once(':')
            .with_context(|| format!("expected `FUEL:PRICE:MILEAGE`, got `{spec}`"))?;
        let (purchase_price, mileage) = rest
            .split_once(':')
            .with_context(|| format!("expected `FUEL:PRICE:MILEAGE`, got `{spec}`"))?;
        Ok(Self {
            fuel_type: clap::ValueEnum::from_str(fuel_type, true).map_err(Error::msg)?,
            purchase_price: purchase_price
                .parse()
                .with_context(|| format!("invalid purchase price `{purchase_price}`"))?,
            mileage: mileage.parse().with_context(|| format!("invalid mileage `{mileage}`"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vehicle_spec() -> Result {
        let spec: VehicleSpec = "petrol:1000000:15".parse()?;
        assert_eq!(spec.fuel_type, FuelType::Petrol);
        assert_eq!(spec.purchase_price, Cost::from(1_000_000.0));
        assert_eq!(spec.mileage, Mileage::from(15.0));
        Ok(())
    }

    #[test]
    fn test_parse_vehicle_spec_ignores_case() -> Result {
        let spec: VehicleSpec = "CNG:900000:25.5".parse()?;
        assert_eq!(spec.fuel_type, FuelType::Cng);
        assert_eq!(spec.mileage, Mileage::from(25.5));
        Ok(())
    }

    #[test]
    fn test_parse_vehicle_spec_rejects_garbage() {
        assert!("petrol:1000000".parse::<VehicleSpec>().is_err());
        assert!("plutonium:1:1".parse::<VehicleSpec>().is_err());
        assert!("petrol:a-lot:15".parse::<VehicleSpec>().is_err());
    }

    #[test]
    fn test_horizon_years() {
        assert_eq!(Horizon::TenYears.years(), 10);
        assert_eq!(Horizon::FifteenYears.years(), 15);
    }

    #[test]
    fn test_verify_args() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
