//! Dynamically-typed parameter values handed to the processing pipeline.
//!
//! A closed set of scalar types replaces open-ended dynamic typing: dispatch
//! over a [`ParamValue`] is exhaustive and checked at compile time.

use std::collections::HashMap;

/// Map from parameter name to value, built by the caller per invocation.
pub type ParamMap = HashMap<String, ParamValue>;

/// A single dynamically-typed parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i64),
    Float(f32),
    Double(f64),
    Bool(bool),
    Str(String),
}

impl ParamValue {
    /// Widen any non-string variant to `f64`.
    ///
    /// Booleans map to 0.0/1.0. Strings have no numeric reading.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            ParamValue::Int(v) => Some(*v as f64),
            ParamValue::Float(v) => Some(f64::from(*v)),
            ParamValue::Double(v) => Some(*v),
            ParamValue::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
            ParamValue::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f32> for ParamValue {
    fn from(v: f32) -> Self {
        ParamValue::Float(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Double(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}
