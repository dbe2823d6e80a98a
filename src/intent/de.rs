// Copyright 2024-2026 deploy-intent Contributors
// SPDX-License-Identifier: Apache-2.0

//! Lenient deserializers for pipeline-declared properties.
//!
//! Pipeline properties arrive as loosely typed YAML converted to JSON: numbers
//! may be quoted, booleans may be strings and any field may be null.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    Str(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrString {
    Bool(bool),
    Str(String),
}

fn parse_int(raw: &str) -> Result<Option<i32>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i32>()
        .map(Some)
        .map_err(|_| format!("invalid number: {:?}", raw))
}

fn narrow(value: i64) -> Result<i32, String> {
    i32::try_from(value).map_err(|_| format!("number out of range: {}", value))
}

/// Number or numeric string; null and "" read as zero.
pub fn int_or_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    opt_int_or_string(deserializer).map(Option::unwrap_or_default)
}

/// Tri-state number: null and "" read as unset, explicit zero is kept.
pub fn opt_int_or_string<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Int(value)) => narrow(value).map(Some).map_err(D::Error::custom),
        Some(NumberOrString::Str(raw)) => parse_int(&raw).map_err(D::Error::custom),
    }
}

/// Tri-state boolean accepting `true`, `false`, `"true"`, `"false"` and null.
pub fn opt_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(value)) => Ok(Some(value)),
        Some(BoolOrString::Str(raw)) => match raw.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(D::Error::custom(format!("invalid boolean: {:?}", raw))),
        },
    }
}

/// Plain boolean with the same leniency; unset reads as false.
pub fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    opt_bool_or_string(deserializer).map(Option::unwrap_or_default)
}

/// Null reads as the type's default (empty list, empty map, empty block).
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
