//! HTML pages for the converter
//!
//! Templates are embedded at compile time with `include_str!` and filled by
//! placeholder substitution, so nothing is read from disk per request.

use crate::handler::{ConversionResult, ConversionType};
use crate::units::{LENGTH_UNITS, TemperatureUnit, WEIGHT_UNITS};
use std::fmt::Write;
use std::sync::LazyLock;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
const RESULT_TEMPLATE: &str = include_str!("../templates/result.html");

const CONVERSION_TYPES: [ConversionType; 3] = [
    ConversionType::Length,
    ConversionType::Weight,
    ConversionType::Temperature,
];

/// The form page never changes, so it is rendered once
static INDEX_PAGE: LazyLock<String> = LazyLock::new(|| {
    INDEX_TEMPLATE
        .replace("{{CONVERSION_TYPE_OPTIONS}}", &conversion_type_options())
        .replace("{{UNIT_OPTIONS}}", &unit_options())
});

fn conversion_type_options() -> String {
    let mut html = String::new();
    for conversion_type in CONVERSION_TYPES {
        let name = conversion_type.name();
        let label = capitalize(name);
        let _ = writeln!(html, r#"            <option value="{name}">{label}</option>"#);
    }
    html
}

fn unit_options() -> String {
    let mut html = String::new();
    for table in [&*LENGTH_UNITS, &*WEIGHT_UNITS] {
        push_optgroup(&mut html, table.category(), table.units());
    }
    push_optgroup(
        &mut html,
        ConversionType::Temperature.name(),
        TemperatureUnit::ALL.iter().map(|unit| unit.name()).collect(),
    );
    html
}

fn push_optgroup(html: &mut String, label: &str, units: Vec<&'static str>) {
    let _ = writeln!(html, r#"            <optgroup label="{}">"#, capitalize(label));
    for unit in units {
        let _ = writeln!(html, r#"                <option value="{unit}">{unit}</option>"#);
    }
    let _ = writeln!(html, "            </optgroup>");
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render the conversion form
#[must_use]
pub fn render_index() -> &'static str {
    INDEX_PAGE.as_str()
}

/// Render the page showing a finished conversion
#[must_use]
pub fn render_result(result: &ConversionResult) -> String {
    RESULT_TEMPLATE
        .replace("{{INPUT_VALUE}}", &result.input_value.to_string())
        .replace("{{FROM_UNIT}}", &html_escape::encode_text(&result.from_unit))
        .replace("{{CONVERTED_VALUE}}", &result.converted_value.to_string())
        .replace("{{TO_UNIT}}", &html_escape::encode_text(&result.to_unit))
}
