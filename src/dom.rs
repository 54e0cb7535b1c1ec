use crate::error::MountError;
use kitchen::{HotspotSource, Selectors};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

pub const ACTIVE_CLASS: &str = "is-active";
pub const OPEN_CLASS: &str = "is-open";

/// A hotspot button inside the kitchen view.
pub struct Hotspot(pub HtmlElement);

impl HotspotSource for Hotspot {
    fn data_area(&self) -> Option<String> { self.0.get_attribute("data-area") }
    fn headline(&self) -> Option<String> { self.0.get_attribute("data-headline") }
    fn aria_label(&self) -> Option<String> { self.0.get_attribute("aria-label") }
    fn text_content(&self) -> Option<String> { self.0.text_content() }
    fn has_class(&self, class: &str) -> bool { self.0.class_list().contains(class) }
}

impl Hotspot {
    pub fn set_active(&self, active: bool) {
        toggle_class(&self.0, ACTIVE_CLASS, active);
        let _ = self.0.set_attribute("aria-expanded", if active { "true" } else { "false" });
    }

    pub fn focus(&self) { let _ = self.0.focus(); }
}

/// Nodes the controller reads and writes, located once at mount time.
pub struct Elements {
    pub panel: Element,
    pub overlay: Option<Element>,
    pub list: Option<Element>,
    pub price: Option<Element>,
    pub title: Option<Element>,
    pub empty: Option<HtmlElement>,
    pub close: Option<Element>,
    pub hotspots: Vec<Hotspot>,
}

impl Elements {
    pub fn bind(
        document: &Document,
        sel: &Selectors,
        hotspot_sel: &str,
    ) -> Result<Elements, MountError> {
        let view = query(document, &sel.kitchen_view)?.ok_or(MountError::MissingContainer)?;
        let panel = query(&view, &sel.panel)?.ok_or(MountError::MissingPanel)?;
        let nodes = view
            .query_selector_all(hotspot_sel)
            .map_err(|_| MountError::InvalidSelector(hotspot_sel.to_string()))?;
        let hotspots: Vec<Hotspot> = (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
            .map(Hotspot)
            .collect();
        if hotspots.is_empty() {
            return Err(MountError::NoHotspots);
        }
        Ok(Elements {
            overlay: query(&view, &sel.overlay)?,
            list: query(&panel, &sel.list)?,
            price: query(&panel, &sel.price)?,
            title: query(&panel, &sel.title)?,
            empty: query(&panel, &sel.empty)?.and_then(|e| e.dyn_into::<HtmlElement>().ok()),
            close: query(&panel, &sel.close)?,
            panel,
            hotspots,
        })
    }

    pub fn hotspot(&self, index: usize) -> Option<&Hotspot> { self.hotspots.get(index) }

    pub fn set_open(&self, open: bool) {
        toggle_class(&self.panel, OPEN_CLASS, open);
        set_hidden_attr(&self.panel, !open);
        if let Some(overlay) = &self.overlay {
            toggle_class(overlay, ACTIVE_CLASS, open);
            set_hidden_attr(overlay, !open);
        }
    }
}

trait Scope {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue>;
}

impl Scope for Document {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
}

impl Scope for Element {
    fn select(&self, selector: &str) -> Result<Option<Element>, JsValue> {
        self.query_selector(selector)
    }
}

fn query<S: Scope>(scope: &S, selector: &str) -> Result<Option<Element>, MountError> {
    scope.select(selector).map_err(|_| MountError::InvalidSelector(selector.to_string()))
}

fn toggle_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

fn set_hidden_attr(el: &Element, hidden: bool) {
    let _ = el.set_attribute("aria-hidden", if hidden { "true" } else { "false" });
}
