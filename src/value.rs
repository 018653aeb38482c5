//! Default value ordering.
//!
//! A total order over `Option<&Value>`, where `None` stands for a value that could not be
//! resolved. Missing and null values sort after everything else, with null before missing.

use std::borrow::Cow;
use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use serde_json::{Map, Number, Value};

/// Compares two possibly missing values.
pub fn compare(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(Value::Null), Some(Value::Null)) => Ordering::Equal,
        (Some(Value::Null), None) => Ordering::Less,
        (None, Some(Value::Null)) => Ordering::Greater,
        (None, Some(_)) | (Some(Value::Null), Some(_)) => Ordering::Greater,
        (Some(_), None) | (Some(_), Some(Value::Null)) => Ordering::Less,
        (Some(a), Some(b)) => compare_present(a, b),
    }
}

/// Compares two values that are known to exist. Handed to custom comparison functions as
/// their fallback.
#[inline]
pub fn compare_defined(a: &Value, b: &Value) -> Ordering {
    compare(Some(a), Some(b))
}

/// Compares two optional positions, e.g. ranks, with missing positions last.
pub fn compare_ranks(a: Option<usize>, b: Option<usize>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_present(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => compare_numbers(a, b),
        (Value::String(a), Value::String(b)) => a.as_str().cmp(b.as_str()),
        (Value::Array(a), Value::Array(b)) => a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| compare_defined(x, y))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len())),
        (Value::Object(a), Value::Object(b)) => compare_objects(a, b),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a.cmp(&b);
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a.cmp(&b);
    }

    // Mixed sign beyond i64 or at least one float.
    let a = OrderedFloat(a.as_f64().unwrap_or(f64::NAN));
    let b = OrderedFloat(b.as_f64().unwrap_or(f64::NAN));
    a.cmp(&b)
}

fn compare_objects(a: &Map<String, Value>, b: &Map<String, Value>) -> Ordering {
    a.iter()
        .zip(b.iter())
        .map(|((ka, va), (kb, vb))| ka.cmp(kb).then_with(|| compare_defined(va, vb)))
        .find(|ord| ord.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Number(_) => 1,
        Value::String(_) => 2,
        Value::Array(_) => 3,
        Value::Object(_) => 4,
        Value::Null => 5,
    }
}

/// Name of the JSON kind, used in errors and logs.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The string form used by native ordering, when no criteria are given at all.
pub fn coerce_to_string(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(true) => Cow::Borrowed("true"),
        Value::Bool(false) => Cow::Borrowed("false"),
        Value::Number(n) => Cow::Owned(number_to_string(n)),
        Value::Array(items) => {
            let parts: Vec<Cow<'_, str>> = items
                .iter()
                .map(|item| match item {
                    Value::Null => Cow::Borrowed(""),
                    other => coerce_to_string(other),
                })
                .collect();
            Cow::Owned(parts.join(","))
        }
        Value::Object(_) => Cow::Borrowed("[object Object]"),
    }
}

fn number_to_string(n: &Number) -> String {
    match (n.as_i64(), n.as_u64()) {
        (Some(i), _) => i.to_string(),
        (None, Some(u)) => u.to_string(),
        (None, None) => float_to_string(n.as_f64().unwrap_or(0.0)),
    }
}

/// Shortest round-trip digits, laid out like JS `Number.prototype.toString`: plain decimal for
/// `1e-7 <= |x| < 1e21`, exponent form outside it.
fn float_to_string(x: f64) -> String {
    if x == 0.0 {
        return "0".to_owned();
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. `1.2345e-6`.
    let sci = format!("{:e}", x.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let n = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat(n.unsigned_abs() as usize))
    } else {
        let (first, rest) = digits.split_at(1);
        let point = if rest.is_empty() { "" } else { "." };
        let sign = if n > 0 { '+' } else { '-' };
        format!("{first}{point}{rest}e{sign}{}", (n - 1).abs())
    };

    if x.is_sign_negative() {
        format!("-{body}")
    } else {
        body
    }
}

/// Native ordering: compare the string coercions of both values by UTF-16 code units.
pub fn compare_native(a: &Value, b: &Value) -> Ordering {
    let (a, b) = (coerce_to_string(a), coerce_to_string(b));
    a.encode_utf16().cmp(b.encode_utf16())
}
