use std::{
    fmt::{Debug, Display, Formatter},
    ops::Div,
};

use crate::quantity::{Quantity, fuel::FuelAmount, mileage::Mileage};

pub type Kilometers = Quantity<f64, 1, 0, 0>;

impl Display for Kilometers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} km", self.0)
    }
}

impl Debug for Kilometers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}km", self.0)
    }
}

impl Div<Mileage> for Kilometers {
    type Output = FuelAmount;

    fn div(self, rhs: Mileage) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}
