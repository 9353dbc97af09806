//! Common formats and payloads for registry tests.

#![allow(dead_code)]

use std::convert::Infallible;

use formats::Value;
use serde_json::json;
use thiserror::Error;

pub const SIMPLE_OBJECT: &str = r#"{"name": "Vehicle", "wheels": 4}"#;

pub const NESTED_DOCUMENT: &str = r#"
{
    "package": "Vehicles",
    "parts": [
        {"name": "engine", "cylinders": 6},
        {"name": "door", "count": 4, "tinted": false}
    ],
    "owner": null
}
"#;

pub const INVALID_JSON: &str = r#"{"name": "Vehicle""#;

/// Error raised by [`join_lines`] for values that are not arrays of strings.
#[derive(Debug, Error)]
#[error("expected an array of strings")]
pub struct NotLines;

/// Line-per-element parser.
pub fn split_lines(raw: &str) -> Result<Value, Infallible> {
    Ok(Value::Array(raw.split('\n').map(|line| json!(line)).collect()))
}

/// Inverse of [`split_lines`].
pub fn join_lines(value: &Value) -> Result<String, NotLines> {
    let lines = value.as_array().ok_or(NotLines)?;
    let parts = lines
        .iter()
        .map(|line| line.as_str().ok_or(NotLines))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join("\n"))
}
