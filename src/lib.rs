//! Unit converter - a small web form that converts values between units of
//! length, weight and temperature.
//!
//! The conversion core (`units`, `conversion`, `handler`) is pure and holds
//! no mutable state; `web` and `templates` wrap it in an HTTP surface.

pub mod config;
pub mod conversion;
pub mod error;
pub mod handler;
pub mod logging;
pub mod templates;
pub mod units;
pub mod web;

// Re-export core types for public API
pub use config::ConverterConfig;
pub use conversion::{convert_length, convert_linear, convert_temperature, convert_weight};
pub use error::{ConfigError, ConverterError};
pub use handler::{ConversionRequest, ConversionResult, ConversionType, handle_conversion};
pub use units::{LENGTH_UNITS, TemperatureUnit, UnitTable, WEIGHT_UNITS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ConverterError>;
