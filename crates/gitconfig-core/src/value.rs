//! A single configuration property and its typed interpretations

use std::fmt;

use serde::Serialize;

use crate::{Error, Result};

/// One configuration property: a dotted name and its raw string value.
///
/// The raw string is the only stored state. Boolean, integer and list
/// readings are derived from it on every call, so they can never disagree
/// with [`Value::raw`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Value {
    name: String,
    #[serde(rename = "value")]
    raw: String,
}

impl Value {
    /// Create a property with the given name and raw value.
    pub fn new(name: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
        }
    }

    /// The property name, e.g. `core.autocrlf`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw value exactly as it was collected (possibly empty).
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Interpret the value as a boolean.
    ///
    /// Recognised forms are case-sensitive: `1`, `on`, `yes`, `true` read as
    /// `true`; `0`, `off`, `no`, `false` read as `false`. Anything else is
    /// `None`.
    pub fn as_bool(&self) -> Option<bool> {
        match self.raw.as_str() {
            "1" | "on" | "yes" | "true" => Some(true),
            "0" | "off" | "no" | "false" => Some(false),
            _ => None,
        }
    }

    /// Interpret the value as a base-10 signed integer.
    ///
    /// Surrounding whitespace is not tolerated.
    pub fn as_int(&self) -> Option<i64> {
        self.raw.parse().ok()
    }

    /// Split the value on `:`.
    ///
    /// Empty segments are kept and nothing is trimmed, so `":b:"` yields
    /// `["", "b", ""]` and a value without a colon yields itself.
    pub fn as_list(&self) -> Vec<&str> {
        self.raw.split(':').collect()
    }

    /// Like [`Value::as_bool`], but reports which property was invalid.
    pub fn parse_bool(&self) -> Result<bool> {
        self.as_bool().ok_or_else(|| Error::InvalidBoolean {
            name: self.name.clone(),
            value: self.raw.clone(),
        })
    }

    /// Like [`Value::as_int`], but reports which property was invalid.
    pub fn parse_int(&self) -> Result<i64> {
        self.as_int().ok_or_else(|| Error::InvalidInteger {
            name: self.name.clone(),
            value: self.raw.clone(),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<N: Into<String>, R: Into<String>> From<(N, R)> for Value {
    fn from((name, raw): (N, R)) -> Self {
        Self::new(name, raw)
    }
}
