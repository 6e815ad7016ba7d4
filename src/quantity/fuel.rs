use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, cost::Cost, rate::FuelPrice};

/// Fuel amount in the unit native to the fuel type: litres, kilograms or
/// kilowatt-hours.
pub type FuelAmount = Quantity<f64, 0, 1, 0>;

impl Display for FuelAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl Debug for FuelAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl Mul<FuelPrice> for FuelAmount {
    type Output = Cost;

    fn mul(self, rhs: FuelPrice) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
