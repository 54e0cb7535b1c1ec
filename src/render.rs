use kitchen::{material_view, price_text, MaterialView};
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement};

/// Replaces the list contents with one `<li>` per non-null material and toggles the empty message.
pub fn render_materials(list: Option<&Element>, empty: Option<&HtmlElement>, materials: &[Value]) {
    let Some(list) = list else { return };
    list.set_inner_html("");
    let views: Vec<MaterialView> = materials.iter().filter_map(material_view).collect();
    if let Some(empty) = empty {
        empty.set_hidden(!views.is_empty());
    }
    for view in &views {
        match build_item(list, view) {
            Ok(item) => { let _ = list.append_child(&item); }
            Err(e) => {
                web_sys::console::warn_2(&JsValue::from_str("kitchen panel: list item failed"), &e)
            }
        }
    }
}

fn build_item(list: &Element, view: &MaterialView) -> Result<Element, JsValue> {
    let document = list.owner_document().ok_or_else(|| JsValue::from_str("detached list"))?;
    let item = document.create_element("li")?;
    let heading = document.create_element("strong")?;
    heading.set_text_content(Some(&view.label));
    item.append_child(&heading)?;
    if let Some(meta) = &view.meta {
        let span = document.create_element("span")?;
        span.set_text_content(Some(meta));
        item.append_child(&span)?;
    }
    Ok(item)
}

pub fn set_price(node: Option<&Element>, label: &str, value: Option<&Value>) {
    if let Some(node) = node {
        node.set_text_content(Some(&price_text(label, value)));
    }
}

/// Back to the closed look: empty list, visible empty message, placeholder price.
pub fn reset(
    list: Option<&Element>,
    empty: Option<&HtmlElement>,
    price: Option<&Element>,
    label: &str,
) {
    if let Some(empty) = empty {
        empty.set_hidden(false);
    }
    if let Some(list) = list {
        list.set_inner_html("");
    }
    set_price(price, label, None);
}
