//! Error types for the unit converter

use thiserror::Error;

/// Client-input errors raised while handling a conversion
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConverterError {
    /// Value missing, not a number, not finite, or negative
    #[error("Invalid input value")]
    InvalidInput,

    /// Conversion category not recognized
    #[error("Invalid conversion type: {conversion_type}")]
    InvalidConversionType { conversion_type: String },

    /// Unit not present in the table for its category
    #[error("Unknown {category} unit: {unit}")]
    UnknownUnit { unit: String, category: String },
}

/// Configuration errors raised during startup
#[derive(Error, Debug)]
#[error("Configuration error: {message}")]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ConverterError {
    /// Create a new invalid conversion type error
    pub fn invalid_conversion_type<S: Into<String>>(conversion_type: S) -> Self {
        Self::InvalidConversionType {
            conversion_type: conversion_type.into(),
        }
    }

    /// Create a new unknown unit error
    pub fn unknown_unit<U: Into<String>, C: Into<String>>(unit: U, category: C) -> Self {
        Self::UnknownUnit {
            unit: unit.into(),
            category: category.into(),
        }
    }

    /// Message shown to the person who submitted the form
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ConverterError::InvalidInput => "Invalid input value".to_string(),
            ConverterError::InvalidConversionType { .. } => "Invalid conversion type".to_string(),
            ConverterError::UnknownUnit { unit, .. } => format!("Unknown unit: {unit}"),
        }
    }
}
