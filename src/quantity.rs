pub mod cost;
pub mod distance;
pub mod fuel;
pub mod mileage;
pub mod rate;

use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// Dimensional quantity: `DISTANCE`, `FUEL` and `COST` are the unit exponents.
///
/// For example, a fuel price is cost per fuel unit, so its exponents are
/// `(0, -1, 1)`.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
pub struct Quantity<T, const DISTANCE: isize, const FUEL: isize, const COST: isize>(pub T);

impl<const DISTANCE: isize, const FUEL: isize, const COST: isize>
    Quantity<f64, DISTANCE, FUEL, COST>
{
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }
}

impl<T, const DISTANCE: isize, const FUEL: isize, const COST: isize> Mul<T>
    for Quantity<T, DISTANCE, FUEL, COST>
where
    T: Mul<T>,
{
    type Output = Quantity<T::Output, DISTANCE, FUEL, COST>;

    fn mul(self, rhs: T) -> Self::Output {
        Quantity(self.0 * rhs)
    }
}

impl<T, const DISTANCE: isize, const FUEL: isize, const COST: isize> Div<T>
    for Quantity<T, DISTANCE, FUEL, COST>
where
    T: Div<T>,
{
    type Output = Quantity<T::Output, DISTANCE, FUEL, COST>;

    fn div(self, rhs: T) -> Self::Output {
        Quantity(self.0 / rhs)
    }
}
