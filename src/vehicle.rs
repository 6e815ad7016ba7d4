use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::quantity::{cost::Cost, mileage::Mileage};

#[derive(Debug, Deserialize, Serialize, clap::ValueEnum, enumset::EnumSetType)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Cng,
    Diesel,
    Electric,
}

impl FuelType {
    /// Unit the fuel is priced and measured in.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Petrol | Self::Diesel => "L",
            Self::Cng => "kg",
            Self::Electric => "kWh",
        }
    }
}

impl Display for FuelType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Petrol => "Petrol",
            Self::Cng => "CNG",
            Self::Diesel => "Diesel",
            Self::Electric => "Electric",
        })
    }
}

/// Per-vehicle inputs, immutable for the whole comparison run.
#[derive(Clone, Debug, Serialize, bon::Builder)]
pub struct VehicleProfile {
    #[builder(into)]
    pub label: String,

    pub purchase_price: Cost,

    /// Distance per fuel unit: km/L for combustion fuels, km/kWh for electric.
    pub mileage: Mileage,

    pub fuel_type: FuelType,
}
