use crate::model::{is_falsy, is_present, match_text, normalise_string, AreaData};
use serde_json::{Map, Value};

const LIST_FIELDS: [&str; 3] = ["materials", "items", "options"];

/// Looks up the entry for `area` in a loosely shaped dataset and normalises it.
///
/// The dataset is either a list of entries carrying `area`/`key`, or an object
/// keyed by area name. Matching ignores case. Shape mismatches never fail; they
/// degrade to [`AreaData::empty`].
pub fn resolve_area_data(dataset: Option<&Value>, area: Option<&str>) -> AreaData {
    let (Some(dataset), Some(area)) = (dataset, area) else {
        return AreaData::empty();
    };
    if is_falsy(dataset) || area.is_empty() {
        return AreaData::empty();
    }
    let lower = area.to_lowercase();
    let entry = match dataset {
        Value::Array(items) => items.iter().find(|item| entry_matches(item, &lower)),
        Value::Object(map) => find_in_map(map, area, &lower),
        _ => None,
    };
    match entry {
        Some(entry) if !is_falsy(entry) => area_data_from_entry(entry),
        _ => AreaData::empty(),
    }
}

fn find_in_map<'a>(map: &'a Map<String, Value>, area: &str, lower: &str) -> Option<&'a Value> {
    let upper = lower.to_uppercase();
    let direct = [area, lower, upper.as_str()]
        .into_iter()
        .filter_map(|k| map.get(k))
        .find(|v| !v.is_null());
    direct
        .or_else(|| {
            map.iter()
                .find(|(k, v)| k.to_lowercase() == lower && !v.is_null())
                .map(|(_, v)| v)
        })
        .or_else(|| map.values().find(|v| entry_matches(v, lower)))
}

fn entry_matches(item: &Value, lower: &str) -> bool {
    let Value::Object(obj) = item else {
        return false;
    };
    ["area", "key"]
        .iter()
        .any(|field| match_text(obj.get(*field)).as_deref() == Some(lower))
}

fn area_data_from_entry(entry: &Value) -> AreaData {
    let materials = extract_materials(entry);
    let price = pick_price(entry, &materials);
    let description = match entry {
        Value::Object(obj) => normalise_string(obj.get("description")),
        _ => None,
    };
    AreaData { materials, price, description }
}

fn extract_materials(entry: &Value) -> Vec<Value> {
    match entry {
        Value::Array(items) => items.clone(),
        Value::Object(obj) => LIST_FIELDS
            .iter()
            .find_map(|field| obj.get(*field).and_then(Value::as_array))
            .cloned()
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

fn pick_price(entry: &Value, materials: &[Value]) -> Option<Value> {
    if let Value::Object(obj) = entry {
        for field in ["price", "cost"] {
            if is_present(obj.get(field)) {
                return obj.get(field).cloned();
            }
        }
    }
    materials
        .iter()
        .filter_map(Value::as_object)
        .find(|item| is_present(item.get("price")))
        .and_then(|item| item.get("price").cloned())
}
