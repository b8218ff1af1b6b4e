//! Unit tables
//!
//! Length and weight convert through a scalar factor to their base unit
//! (meter and kilogram). Temperature needs an offset as well, so it is
//! modelled as a closed enum normalizing through Celsius instead of a table.

use crate::error::ConverterError;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Scalar conversion table for one linear category
#[derive(Debug)]
pub struct UnitTable {
    /// Category name, used in error messages
    category: &'static str,
    /// Unit whose factor is exactly 1
    base_unit: &'static str,
    factors: HashMap<&'static str, f64>,
}

impl UnitTable {
    fn new(
        category: &'static str,
        base_unit: &'static str,
        entries: &[(&'static str, f64)],
    ) -> Self {
        let factors: HashMap<&'static str, f64> = entries.iter().copied().collect();
        debug_assert!(factors.values().all(|f| *f > 0.0));
        debug_assert_eq!(factors.get(base_unit), Some(&1.0));
        Self {
            category,
            base_unit,
            factors,
        }
    }

    /// Factor converting one `unit` into the base unit, if the unit is known
    #[must_use]
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.factors.get(unit).copied()
    }

    #[must_use]
    pub fn contains(&self, unit: &str) -> bool {
        self.factors.contains_key(unit)
    }

    #[must_use]
    pub fn category(&self) -> &'static str {
        self.category
    }

    #[must_use]
    pub fn base_unit(&self) -> &'static str {
        self.base_unit
    }

    /// Unit names ordered from smallest to largest
    #[must_use]
    pub fn units(&self) -> Vec<&'static str> {
        let mut units: Vec<(&'static str, f64)> =
            self.factors.iter().map(|(name, factor)| (*name, *factor)).collect();
        units.sort_by(|a, b| a.1.total_cmp(&b.1));
        units.into_iter().map(|(name, _)| name).collect()
    }
}

/// Length units, base meter
pub static LENGTH_UNITS: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "length",
        "meter",
        &[
            ("millimeter", 0.001),
            ("centimeter", 0.01),
            ("meter", 1.0),
            ("kilometer", 1000.0),
            ("inch", 0.0254),
            ("foot", 0.3048),
            ("yard", 0.9144),
            ("mile", 1609.34),
        ],
    )
});

/// Weight units, base kilogram
pub static WEIGHT_UNITS: LazyLock<UnitTable> = LazyLock::new(|| {
    UnitTable::new(
        "weight",
        "kilogram",
        &[
            ("milligram", 0.000_001),
            ("gram", 0.001),
            ("kilogram", 1.0),
            ("ounce", 0.028_349_5),
            ("pound", 0.453_592),
        ],
    )
});

/// Temperature scales, normalized through Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }

    /// Convert a value on this scale to Celsius
    #[must_use]
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - 273.15,
        }
    }

    /// Convert a Celsius value to this scale
    #[must_use]
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => celsius + 273.15,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemperatureUnit::ALL
            .into_iter()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| ConverterError::unknown_unit(s, "temperature"))
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
