//! Jet fuel catalog.
//!
//! The catalog is closed: each [`Fuel`] variant carries a fixed lower heating
//! value, and names that do not match a variant are rejected rather than
//! mapped to a default.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, de};
use thiserror::Error;
use uom::si::{available_energy::joule_per_kilogram, f64::AvailableEnergy};

/// A jet fuel with a known lower heating value.
///
/// Deserializes from any string accepted by its [`FromStr`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fuel {
    /// JP-8, the military standard kerosene.
    Jp8,
    /// Jet A, the civilian standard kerosene.
    JetA,
}

impl Fuel {
    /// Every fuel in the catalog.
    pub const ALL: [Fuel; 2] = [Fuel::Jp8, Fuel::JetA];

    /// Returns the lower heating value in MJ/kg.
    #[must_use]
    pub const fn lower_heating_value_mj_per_kg(self) -> f64 {
        match self {
            Fuel::Jp8 => 42.8,
            Fuel::JetA => 43.2,
        }
    }

    /// Returns the lower heating value as an energy per unit mass.
    ///
    /// ```
    /// use turbojet_thermo::Fuel;
    /// use uom::si::available_energy::joule_per_kilogram;
    ///
    /// let lhv = Fuel::JetA.lower_heating_value();
    /// assert_eq!(lhv.get::<joule_per_kilogram>(), 43.2e6);
    /// ```
    #[must_use]
    pub fn lower_heating_value(self) -> AvailableEnergy {
        AvailableEnergy::new::<joule_per_kilogram>(self.lower_heating_value_mj_per_kg() * 1.0e6)
    }

    /// Returns the short catalog name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Fuel::Jp8 => "JP-8",
            Fuel::JetA => "Jet-A",
        }
    }

    /// Returns the descriptive label used by input forms.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Fuel::Jp8 => "JP-8 (military standard)",
            Fuel::JetA => "Jet-A (civilian standard)",
        }
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a catalog fuel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fuel `{0}` (expected one of: JP-8, Jet-A)")]
pub struct ParseFuelError(pub String);

impl FromStr for Fuel {
    type Err = ParseFuelError;

    /// Parses a catalog name or form label, ignoring case, dashes, and any
    /// parenthesized description.
    ///
    /// ```
    /// use turbojet_thermo::Fuel;
    ///
    /// assert_eq!("jet-a".parse(), Ok(Fuel::JetA));
    /// assert_eq!("JP-8 (military standard)".parse(), Ok(Fuel::Jp8));
    /// assert!("diesel".parse::<Fuel>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.split('(').next().unwrap_or_default();
        let key: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "jp8" => Ok(Fuel::Jp8),
            "jeta" => Ok(Fuel::JetA),
            _ => Err(ParseFuelError(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Fuel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}
