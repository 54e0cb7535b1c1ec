use kitchen::{resolve_area_data, AreaData};
use proptest::prelude::*;
use serde_json::{json, Value};

fn sample_list() -> Value {
    json!([
        {"area": "Window", "materials": ["Glas", {"name": "Rahmen", "price": 80}], "description": "  Fensterfront  "},
        {"key": "lower", "items": [{"name": "Eiche", "finish": "geölt"}], "price": 1299.5},
        {"area": "upper", "options": [], "cost": "Preis auf Anfrage"}
    ])
}

#[test]
fn list_dataset_matches_area_or_key() {
    let data = sample_list();
    let window = resolve_area_data(Some(&data), Some("window"));
    assert_eq!(window.materials.len(), 2);
    assert_eq!(window.price, Some(json!(80)));
    assert_eq!(window.description.as_deref(), Some("Fensterfront"));

    let lower = resolve_area_data(Some(&data), Some("LOWER"));
    assert_eq!(lower.price, Some(json!(1299.5)));
    assert_eq!(lower.materials, vec![json!({"name": "Eiche", "finish": "geölt"})]);

    let upper = resolve_area_data(Some(&data), Some("upper"));
    assert!(upper.materials.is_empty());
    assert_eq!(upper.price, Some(json!("Preis auf Anfrage")));
}

#[test]
fn mapping_keys_resolve_case_insensitively() {
    for key in ["Window", "window", "WINDOW"] {
        let data = json!({ key: {"materials": ["Glas"], "price": 49.9} });
        let got = resolve_area_data(Some(&data), Some("window"));
        assert_eq!(got.materials, vec![json!("Glas")], "key {key}");
        assert_eq!(got.price, Some(json!(49.9)));
    }
}

#[test]
fn mapping_falls_back_to_scanning_values() {
    let data = json!({
        "fenster": {"area": "Window", "materials": ["Glas"]},
        "unter": {"key": "lower", "materials": ["Eiche"]}
    });
    let got = resolve_area_data(Some(&data), Some("lower"));
    assert_eq!(got.materials, vec![json!("Eiche")]);
}

#[test]
fn absent_area_is_empty() {
    let data = sample_list();
    assert_eq!(resolve_area_data(Some(&data), Some("island")), AreaData::empty());
    assert_eq!(resolve_area_data(Some(&json!("garbage")), Some("window")), AreaData::empty());
    assert_eq!(resolve_area_data(Some(&json!({"window": false})), Some("window")), AreaData::empty());
}

#[test]
fn non_object_entries_are_skipped_in_lists() {
    let data = json!([null, 7, "window", {"area": 0}, {"area": "window", "materials": ["Glas"]}]);
    let got = resolve_area_data(Some(&data), Some("window"));
    assert_eq!(got.materials, vec![json!("Glas")]);
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-zA-Z ]{0,8}".prop_map(Value::String),
        prop::sample::select(vec!["window", "lower", "upper", "Window"]).prop_map(|s| json!(s)),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::hash_map(
                prop::sample::select(vec![
                    "area", "key", "materials", "items", "options", "price", "cost",
                    "description", "window", "lower", "WINDOW",
                ]),
                inner,
                0..6,
            )
            .prop_map(|m| Value::Object(m.into_iter().map(|(k, v)| (k.to_string(), v)).collect())),
        ]
    })
}

proptest! {
    #[test]
    fn never_panics_on_arbitrary_json(data in arb_json(), key in "[a-zA-Z]{0,6}") {
        let got = resolve_area_data(Some(&data), Some(key.as_str()));
        if let Some(desc) = got.description {
            prop_assert_eq!(desc.trim(), desc.as_str());
            prop_assert!(!desc.is_empty());
        }
    }

    #[test]
    fn list_lookup_ignores_case(mask in prop::collection::vec(any::<bool>(), 6)) {
        let variant: String = "window"
            .chars()
            .zip(mask)
            .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
            .collect();
        let data = json!([{"area": variant, "materials": ["Glas"]}]);
        let got = resolve_area_data(Some(&data), Some("window"));
        prop_assert_eq!(got.materials, vec![json!("Glas")]);
    }
}
