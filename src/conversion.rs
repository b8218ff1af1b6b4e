//! Pure conversion functions over the unit tables

use crate::Result;
use crate::error::ConverterError;
use crate::units::{LENGTH_UNITS, TemperatureUnit, UnitTable, WEIGHT_UNITS};

/// Convert between two units of the same linear table
///
/// Both units must be present in `table`; a miss is reported as
/// [`ConverterError::UnknownUnit`] rather than multiplying by zero.
pub fn convert_linear(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    table: &UnitTable,
) -> Result<f64> {
    let from = table
        .factor(from_unit)
        .ok_or_else(|| ConverterError::unknown_unit(from_unit, table.category()))?;
    let to = table
        .factor(to_unit)
        .ok_or_else(|| ConverterError::unknown_unit(to_unit, table.category()))?;

    let base_value = value * from;
    Ok(base_value / to)
}

pub fn convert_length(value: f64, from_unit: &str, to_unit: &str) -> Result<f64> {
    convert_linear(value, from_unit, to_unit, &LENGTH_UNITS)
}

pub fn convert_weight(value: f64, from_unit: &str, to_unit: &str) -> Result<f64> {
    convert_linear(value, from_unit, to_unit, &WEIGHT_UNITS)
}

/// Convert a temperature by normalizing through Celsius
pub fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> Result<f64> {
    let from: TemperatureUnit = from_unit.parse()?;
    let to: TemperatureUnit = to_unit.parse()?;
    Ok(to.from_celsius(from.to_celsius(value)))
}
