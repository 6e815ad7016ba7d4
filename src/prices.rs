use std::path::Path;

use enumset::EnumSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{Quantity, rate::FuelPrice},
    vehicle::FuelType,
};

/// Shared fuel unit prices, one optional entry per fuel type.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FuelPrices {
    pub petrol: Option<FuelPrice>,
    pub cng: Option<FuelPrice>,
    pub diesel: Option<FuelPrice>,
    pub electric: Option<FuelPrice>,
}

impl FuelPrices {
    /// Applied when no price is supplied for a fuel type. Always logged,
    /// never substituted silently.
    pub const FALLBACK: FuelPrice = Quantity(100.0);

    /// Street prices used when the caller supplies nothing: petrol and
    /// diesel per litre, CNG per kilogram, electricity per kilowatt-hour.
    pub const DEFAULTS: Self = Self {
        petrol: Some(Quantity(110.0)),
        cng: Some(Quantity(85.0)),
        diesel: Some(Quantity(100.0)),
        electric: Some(Quantity(8.0)),
    };

    #[must_use]
    pub const fn get(&self, fuel_type: FuelType) -> Option<FuelPrice> {
        match fuel_type {
            FuelType::Petrol => self.petrol,
            FuelType::Cng => self.cng,
            FuelType::Diesel => self.diesel,
            FuelType::Electric => self.electric,
        }
    }

    /// Entry-wise preference for `self`, falling back to `other`.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self {
            petrol: if self.petrol.is_some() { self.petrol } else { other.petrol },
            cng: if self.cng.is_some() { self.cng } else { other.cng },
            diesel: if self.diesel.is_some() { self.diesel } else { other.diesel },
            electric: if self.electric.is_some() { self.electric } else { other.electric },
        }
    }

    #[must_use]
    pub fn missing(&self) -> EnumSet<FuelType> {
        EnumSet::all().iter().filter(|fuel_type| self.get(*fuel_type).is_none()).collect()
    }

    /// Look up the unit price, degrading to [`Self::FALLBACK`] with a warning
    /// when the entry is absent.
    pub fn resolve(&self, fuel_type: FuelType) -> FuelPrice {
        self.get(fuel_type).unwrap_or_else(|| {
            warn!(%fuel_type, fallback = %Self::FALLBACK, "no unit price supplied, falling back");
            Self::FALLBACK
        })
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let prices: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        let missing = prices.missing();
        if !missing.is_empty() {
            debug!(
                path = %path.display(),
                missing = missing.iter().join(", "),
                "price file does not cover all fuel types",
            );
        }
        Ok(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_complete() {
        assert!(FuelPrices::DEFAULTS.missing().is_empty());
    }

    #[test]
    fn test_missing() {
        let prices = FuelPrices { petrol: Some(FuelPrice::from(110.0)), ..Default::default() };
        assert_eq!(prices.missing(), FuelType::Cng | FuelType::Diesel | FuelType::Electric);
    }

    #[test]
    fn test_or_prefers_self() {
        let overridden = FuelPrices { petrol: Some(FuelPrice::from(123.0)), ..Default::default() };
        let merged = overridden.or(FuelPrices::DEFAULTS);
        assert_eq!(merged.petrol, Some(FuelPrice::from(123.0)));
        assert_eq!(merged.diesel, FuelPrices::DEFAULTS.diesel);
    }

    #[test]
    fn test_resolve_falls_back() {
        assert_eq!(FuelPrices::default().resolve(FuelType::Cng), FuelPrices::FALLBACK);
    }

    #[test]
    fn test_parse_partial_toml() -> Result {
        let prices: FuelPrices = toml::from_str("petrol = 102.5\nelectric = 7.0\n")?;
        assert_eq!(prices.petrol, Some(FuelPrice::from(102.5)));
        assert_eq!(prices.electric, Some(FuelPrice::from(7.0)));
        assert_eq!(prices.missing(), FuelType::Cng | FuelType::Diesel);
        Ok(())
    }
}
