use std::fmt::{Debug, Display, Formatter};

use crate::quantity::Quantity;

/// Distance covered per fuel unit: km/L, km/kg or km/kWh.
pub type Mileage = Quantity<f64, 1, -1, 0>;

impl Display for Mileage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl Debug for Mileage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
