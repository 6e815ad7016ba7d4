use std::{
    fmt::{Debug, Display, Formatter},
    ops::Div,
};

use crate::quantity::{Quantity, mileage::Mileage};

/// Rupees per fuel unit.
pub type FuelPrice = Quantity<f64, 0, -1, 1>;

impl Display for FuelPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

impl Debug for FuelPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

/// Rupees per kilometre, independent of the horizon.
pub type RunningCost = Quantity<f64, -1, 0, 1>;

impl Display for RunningCost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}/km", self.0)
    }
}

impl Debug for RunningCost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}/km", self.0)
    }
}

impl Div<Mileage> for FuelPrice {
    type Output = RunningCost;

    fn div(self, rhs: Mileage) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}
