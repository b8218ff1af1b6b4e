//! Request handling: parse the submitted form, validate it and dispatch to
//! the conversion for the requested category.

use crate::Result;
use crate::conversion::{convert_length, convert_temperature, convert_weight};
use crate::error::ConverterError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Raw form submission. Missing fields are empty strings.
#[derive(Debug, Clone, Default)]
pub struct ConversionRequest {
    pub value: String,
    pub from_unit: String,
    pub to_unit: String,
    pub conversion_type: String,
}

/// Build a request from decoded form pairs. When a field repeats, its first
/// value wins and unrelated fields are ignored.
impl FromIterator<(String, String)> for ConversionRequest {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut request = ConversionRequest::default();
        let mut seen = [false; 4];
        for (key, value) in pairs {
            let (slot, field) = match key.as_str() {
                "value" => (0, &mut request.value),
                "from_unit" => (1, &mut request.from_unit),
                "to_unit" => (2, &mut request.to_unit),
                "conversion_type" => (3, &mut request.conversion_type),
                _ => continue,
            };
            if !seen[slot] {
                seen[slot] = true;
                *field = value;
            }
        }
        request
    }
}

/// Outcome of a successful conversion, echoed back to the result page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub input_value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub converted_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionType {
    Length,
    Weight,
    Temperature,
}

impl ConversionType {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ConversionType::Length => "length",
            ConversionType::Weight => "weight",
            ConversionType::Temperature => "temperature",
        }
    }
}

impl FromStr for ConversionType {
    type Err = ConverterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "length" => Ok(ConversionType::Length),
            "weight" => Ok(ConversionType::Weight),
            "temperature" => Ok(ConversionType::Temperature),
            other => Err(ConverterError::invalid_conversion_type(other)),
        }
    }
}

impl fmt::Display for ConversionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse the submitted value; it must be a finite, non-negative number
pub fn parse_value(raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| ConverterError::InvalidInput)?;
    if !value.is_finite() || value < 0.0 {
        return Err(ConverterError::InvalidInput);
    }
    Ok(value)
}

/// Validate a submission and run the matching conversion
pub fn handle_conversion(request: &ConversionRequest) -> Result<ConversionResult> {
    let input_value = parse_value(&request.value)?;
    let conversion_type: ConversionType = request.conversion_type.parse()?;

    let from_unit = request.from_unit.as_str();
    let to_unit = request.to_unit.as_str();
    let converted_value = match conversion_type {
        ConversionType::Length => convert_length(input_value, from_unit, to_unit)?,
        ConversionType::Weight => convert_weight(input_value, from_unit, to_unit)?,
        ConversionType::Temperature => convert_temperature(input_value, from_unit, to_unit)?,
    };
    // Huge inputs can overflow once scaled
    if !converted_value.is_finite() {
        return Err(ConverterError::InvalidInput);
    }

    debug!(
        %conversion_type,
        input_value, from_unit, to_unit, converted_value, "Converted value"
    );

    Ok(ConversionResult {
        input_value,
        from_unit: request.from_unit.clone(),
        to_unit: request.to_unit.clone(),
        converted_value,
    })
}
