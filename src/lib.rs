use wasm_bindgen::prelude::*;
mod controller;
mod dom;
mod error;
mod fetch;
mod interop;
mod render;

pub use error::MountError;
pub use kitchen::PanelConfig;

use controller::{Controller, Listener};
use kitchen::{format_price, material_view, MaterialView};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;

// Listeners of the one controller currently driving the page.
struct Attachment {
    ctrl: Rc<Controller>,
    _listeners: Vec<Listener>,
}

thread_local! {
    static MOUNTED: RefCell<Option<KitchenPanel>> = const { RefCell::new(None) };
    static ATTACHED: RefCell<Option<Attachment>> = const { RefCell::new(None) };
}

/// Handle to a mounted kitchen panel.
///
/// Only the latest mount is attached to the page: mounting again detaches the
/// previous panel's listeners, and freeing the attached handle detaches its own.
#[wasm_bindgen]
pub struct KitchenPanel {
    inner: Rc<Controller>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AreaView {
    area: Option<String>,
    title: String,
    materials: Vec<MaterialView>,
    price: String,
    price_value: Option<serde_json::Value>,
    description: Option<String>,
}

impl KitchenPanel {
    pub fn mount_with(config: PanelConfig) -> Result<KitchenPanel, MountError> {
        let document = web_sys::window().and_then(|w| w.document()).ok_or(MountError::NoDocument)?;
        let inner = Controller::new(&document, config)?;
        let listeners = inner.attach(&document)?;
        let attachment = Attachment { ctrl: Rc::clone(&inner), _listeners: listeners };
        let previous = ATTACHED.with(|a| a.replace(Some(attachment)));
        drop(previous);
        Ok(KitchenPanel { inner })
    }

    pub fn is_attached(&self) -> bool {
        ATTACHED.with(|a| {
            a.borrow().as_ref().is_some_and(|att| Rc::ptr_eq(&att.ctrl, &self.inner))
        })
    }
}

impl Drop for KitchenPanel {
    fn drop(&mut self) {
        let detached = ATTACHED.with(|a| {
            let mut a = a.borrow_mut();
            let mine = a.as_ref().is_some_and(|att| Rc::ptr_eq(&att.ctrl, &self.inner));
            if mine { a.take() } else { None }
        });
        drop(detached);
    }
}

#[wasm_bindgen]
impl KitchenPanel {
    /// Opens the panel for the hotspot at `index`; resolves once the panel is rendered.
    pub fn open(&self, index: u32) -> js_sys::Promise {
        let ctrl = Rc::clone(&self.inner);
        wasm_bindgen_futures::future_to_promise(async move {
            ctrl.open(index as usize).await;
            Ok(JsValue::UNDEFINED)
        })
    }
    pub fn close(&self, restore_focus: bool) { self.inner.close(restore_focus) }
    pub fn is_open(&self) -> bool { self.inner.is_open() }
    pub fn active_index(&self) -> Option<u32> { self.inner.active().map(|i| i as u32) }
    pub fn hotspot_count(&self) -> u32 { self.inner.hotspot_count() as u32 }
    pub fn load_count(&self) -> u32 { self.inner.load_count() }

    /// Resolved area data for a hotspot, or `undefined` for an unknown index.
    pub fn area_data(&self, index: u32) -> Result<JsValue, JsValue> {
        let Some((area, title, data)) = self.inner.area_data(index as usize) else {
            return Ok(JsValue::UNDEFINED);
        };
        let view = AreaView {
            area,
            title,
            materials: data.materials.iter().filter_map(material_view).collect(),
            price: format_price(data.price.as_ref()),
            price_value: data.price,
            description: data.description,
        };
        interop::to_js(&view)
    }
}

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Mounts with the default selectors; `undefined` when the page has no kitchen view.
#[wasm_bindgen]
pub fn mount() -> Option<KitchenPanel> {
    KitchenPanel::mount_with(PanelConfig::default()).ok()
}

#[wasm_bindgen]
pub fn mount_res() -> JsValue {
    match KitchenPanel::mount_with(PanelConfig::default()) {
        Ok(panel) => error::ok(panel.into()),
        Err(e) => e.to_js(),
    }
}

#[wasm_bindgen]
pub fn mount_with_config(config: JsValue) -> Result<KitchenPanel, JsValue> {
    let config = parse_config(config)?;
    Ok(KitchenPanel::mount_with(config)?)
}

#[wasm_bindgen]
pub fn mount_with_config_res(config: JsValue) -> JsValue {
    let config = match parse_config(config) {
        Ok(c) => c,
        Err(_) => return error::invalid_config("config must be an object of panel options"),
    };
    match KitchenPanel::mount_with(config) {
        Ok(panel) => error::ok(panel.into()),
        Err(e) => e.to_js(),
    }
}

fn parse_config(config: JsValue) -> Result<PanelConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(PanelConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(JsValue::from)
}

#[wasm_bindgen(start)]
pub fn start() {
    set_panic_hook();
    let Some(document) = web_sys::window().and_then(|w| w.document()) else { return };
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move |_event: web_sys::Event| auto_mount());
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    } else {
        auto_mount();
    }
}

// Pages without the kitchen view simply keep the feature off.
fn auto_mount() {
    match KitchenPanel::mount_with(PanelConfig::default()) {
        Ok(panel) => MOUNTED.with(|m| *m.borrow_mut() = Some(panel)),
        Err(e) => {
            let msg = format!("kitchen panel inactive: {}", e);
            web_sys::console::debug_1(&JsValue::from_str(&msg));
        }
    }
}
