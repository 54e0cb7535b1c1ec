use serde::Serialize;
use serde_json::{Number, Value};

/// Materials, price and description resolved for one area of the kitchen view.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AreaData {
    pub materials: Vec<Value>,
    pub price: Option<Value>,
    pub description: Option<String>,
}

impl AreaData {
    pub fn empty() -> AreaData {
        AreaData::default()
    }
}

/// Text of one rendered list item: a bold label plus an optional meta line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MaterialView {
    pub label: String,
    pub meta: Option<String>,
}

/// Trimmed string value, or `None` for non-strings and blank strings.
pub fn normalise_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

pub fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    n.as_f64().map(float_text).unwrap_or_default()
}

// Number-to-string as a browser prints it: plain decimals in [1e-6, 1e21),
// shortest exponent form (`1e+21`, `1.5e-7`) outside that range.
fn float_text(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let abs = f.abs();
    if (1e-6..1e21).contains(&abs) {
        // f64 Display drops a zero fraction ("5" rather than "5.0")
        return f.to_string();
    }
    let sci = format!("{:e}", f);
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => sci,
    }
}

/// Lowercased text of an `area`/`key` field, when the field is truthy enough to match on.
pub(crate) fn match_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.to_lowercase()),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(number_text(n).to_lowercase()),
        Some(Value::Bool(true)) => Some("true".to_string()),
        _ => None,
    }
}

/// Falsy in the loose sense used by the dataset format: null, false, 0 and "".
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Present in the sense of a price field: neither null nor the empty string.
pub(crate) fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
