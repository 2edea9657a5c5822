//! Query-string encoding shared by every search operation.
//!
//! The Freelancer API takes list filters as repeated keys with a `[]`
//! suffix (`countries[]=au&countries[]=us`). Every pair, including the
//! last, is followed by `&`. Values are percent-encoded; keys are fixed
//! ASCII identifiers and go out verbatim so the brackets stay literal.

use std::fmt::Write as _;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Emitted once as `key=value&`, even when the value is a default.
    Scalar(String),
    /// Emitted as `key[]=value&` per element, nothing when empty.
    List(Vec<String>),
    /// Emitted as `key=value&` only when present.
    Optional(Option<String>),
}

impl QueryValue {
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        QueryValue::List(items.into_iter().map(|item| item.to_string()).collect())
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Scalar(value.to_string())
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Scalar(value.clone())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Scalar(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Scalar(format_decimal(value))
    }
}

impl From<Option<f64>> for QueryValue {
    fn from(value: Option<f64>) -> Self {
        QueryValue::Optional(value.map(format_decimal))
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Scalar(value.to_string())
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        QueryValue::Scalar(value.to_string())
    }
}

impl From<&[String]> for QueryValue {
    fn from(values: &[String]) -> Self {
        QueryValue::List(values.to_vec())
    }
}

impl From<&[u64]> for QueryValue {
    fn from(values: &[u64]) -> Self {
        QueryValue::list(values)
    }
}

/// Encode `pairs` in the given order.
pub fn encode(pairs: &[(&str, QueryValue)]) -> String {
    let mut out = String::new();
    for (key, value) in pairs {
        match value {
            QueryValue::Scalar(v) | QueryValue::Optional(Some(v)) => {
                push_pair(&mut out, key, v)
            }
            QueryValue::Optional(None) => {}
            QueryValue::List(items) => {
                for item in items {
                    push_pair(&mut out, &format!("{key}[]"), item);
                }
            }
        }
    }
    out
}

fn push_pair(out: &mut String, key: &str, value: &str) {
    // Writing into a String cannot fail.
    let _ = write!(out, "{key}={}&", urlencoding::encode(value));
}

/// Render a decimal filter value the way the API has always been sent it.
///
/// Whole numbers keep one fractional digit (`0.0`, `25.0`). Magnitudes of
/// `1e16` and above, or below `1e-4`, switch to exponent form with a signed,
/// at least two-digit exponent (`1e+300`, `2.5e-07`).
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string().to_lowercase();
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_exponent(value);
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn format_exponent(value: f64) -> String {
    let rendered = format!("{value:e}");
    let Some((mantissa, exponent)) = rendered.split_once('e') else {
        return rendered;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
