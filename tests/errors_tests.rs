#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use kitchen_wasm::{mount_res, mount_with_config_res};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn is_err(v: &JsValue, code: &str) -> bool {
    if let Ok(ok) =
        Reflect::get(v, &JsValue::from_str("ok")).and_then(|x| x.as_bool().ok_or(JsValue::NULL))
    {
        if ok {
            return false;
        }
        if let Ok(err) = Reflect::get(v, &JsValue::from_str("error")) {
            if let Ok(c) = Reflect::get(&err, &JsValue::from_str("code")) {
                return c.as_string().map_or(false, |s| s == code);
            }
        }
    }
    false
}

fn body(html: &str) {
    web_sys::window().unwrap().document().unwrap().body().unwrap().set_inner_html(html);
}

#[wasm_bindgen_test]
fn missing_markup_reports_typed_errors() {
    body("<main></main>");
    assert!(is_err(&mount_res(), "missing_container"));

    body("<div data-kitchen-view><aside data-kitchen-panel></aside></div>");
    assert!(is_err(&mount_res(), "no_hotspots"));
}

#[wasm_bindgen_test]
fn config_errors() {
    body("<main></main>");
    assert!(is_err(&mount_with_config_res(JsValue::from_f64(5.0)), "invalid_config"));

    let cfg = Object::new();
    let selectors = Object::new();
    Reflect::set(&selectors, &"kitchenView".into(), &"[[broken".into()).unwrap();
    Reflect::set(&cfg, &"selectors".into(), &selectors).unwrap();
    let res = mount_with_config_res(cfg.into());
    assert!(is_err(&res, "invalid_selector"));
    let data = Reflect::get(&Reflect::get(&res, &"error".into()).unwrap(), &"data".into()).unwrap();
    let selector = Reflect::get(&data, &"selector".into()).unwrap();
    assert_eq!(selector.as_string().as_deref(), Some("[[broken"));
}

#[wasm_bindgen_test]
fn mount_res_wraps_panel_on_success() {
    body(
        "<div data-kitchen-view><button class=\"hotspot--lower\"></button>\
         <aside data-kitchen-panel></aside></div>",
    );
    let res = mount_res();
    let ok = Reflect::get(&res, &JsValue::from_str("ok")).unwrap();
    assert_eq!(ok.as_bool(), Some(true));
}
