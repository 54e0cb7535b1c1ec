use crate::model::{normalise_string, number_text, MaterialView};
use serde_json::Value;

pub const PRICE_PLACEHOLDER: &str = "--";
pub const DEFAULT_LABEL: &str = "Material";

const ATTRIBUTE_KEYS: [&str; 6] = ["category", "finish", "color", "tone", "variant", "code"];
const ATTRIBUTE_SEPARATOR: &str = " · ";
const META_SEPARATOR: &str = " — ";

/// Display text for a price value: German Euro currency for numbers, trimmed
/// text for strings, and a placeholder for anything else.
pub fn format_price(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if f.is_finite() => format_euro(f),
            _ => PRICE_PLACEHOLDER.to_string(),
        },
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => PRICE_PLACEHOLDER.to_string(),
    }
}

pub fn price_text(label: &str, value: Option<&Value>) -> String {
    format!("{label}{}", format_price(value))
}

/// de-DE EUR currency format, e.g. `1.234,50 €` (U+00A0 before the sign).
pub fn format_euro(value: f64) -> String {
    let (whole, cents) = round_to_cents(value.abs());
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{sign}{},{cents:02}\u{a0}€", group_thousands(&whole))
}

// Rounds half away from zero on the shortest decimal representation, the same
// digits a browser's Intl formatter starts from.
fn round_to_cents(abs: f64) -> (String, u8) {
    let repr = abs.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let frac: Vec<u8> = frac_part
        .bytes()
        .map(|b| b - b'0')
        .chain(std::iter::repeat(0))
        .take(3)
        .collect();
    let mut cents = frac[0] * 10 + frac[1];
    let mut digits: Vec<u8> = int_part.bytes().map(|b| b - b'0').collect();
    if frac[2] >= 5 {
        if cents == 99 {
            cents = 0;
            increment(&mut digits);
        } else {
            cents += 1;
        }
    }
    let whole: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    (whole, cents)
}

fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

fn group_thousands(whole: &str) -> String {
    let mut out = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Rendered text for one material entry; `None` for null entries, which are skipped.
pub fn material_view(material: &Value) -> Option<MaterialView> {
    let label = match material {
        Value::Null => return None,
        Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
        Value::Number(n) => number_text(n),
        Value::Object(obj) => ["name", "title", "label"]
            .iter()
            .find_map(|k| normalise_string(obj.get(*k)))
            .unwrap_or_else(|| DEFAULT_LABEL.to_string()),
        _ => DEFAULT_LABEL.to_string(),
    };
    let meta = match material {
        Value::Object(obj) => {
            let attributes: Vec<String> = ATTRIBUTE_KEYS
                .iter()
                .filter_map(|k| normalise_string(obj.get(*k)))
                .collect();
            let mut parts = Vec::new();
            if !attributes.is_empty() {
                parts.push(attributes.join(ATTRIBUTE_SEPARATOR));
            }
            if let Some(description) = normalise_string(obj.get("description")) {
                parts.push(description);
            }
            (!parts.is_empty()).then(|| parts.join(META_SEPARATOR))
        }
        _ => None,
    };
    Some(MaterialView { label, meta })
}
