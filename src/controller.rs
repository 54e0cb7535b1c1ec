use crate::dom::{Elements, Hotspot};
use crate::error::MountError;
use crate::{fetch, render};
use kitchen::{
    resolve_area, resolve_area_data, resolve_title, AreaData, MaterialsCache, PanelConfig,
    PanelState,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Event, EventTarget, KeyboardEvent};

thread_local! {
    // one dataset per URL for the life of the page, whichever controller asks first
    static CACHES: RefCell<HashMap<String, Rc<MaterialsCache>>> = RefCell::new(HashMap::new());
}

fn page_cache(url: &str) -> Rc<MaterialsCache> {
    CACHES.with(|caches| Rc::clone(caches.borrow_mut().entry(url.to_string()).or_default()))
}

pub struct Controller {
    config: PanelConfig,
    els: Elements,
    state: RefCell<PanelState>,
    materials: Rc<MaterialsCache>,
}

impl Controller {
    pub fn new(document: &Document, config: PanelConfig) -> Result<Rc<Controller>, MountError> {
        let els = Elements::bind(document, &config.selectors, &config.hotspot_selector)?;
        let materials = page_cache(&config.data_url);
        Ok(Rc::new(Controller {
            config,
            els,
            state: RefCell::new(PanelState::new()),
            materials,
        }))
    }

    pub fn hotspot_count(&self) -> usize { self.els.hotspots.len() }
    pub fn is_open(&self) -> bool { self.state.borrow().is_open() }
    pub fn active(&self) -> Option<usize> { self.state.borrow().active() }
    pub fn load_count(&self) -> u32 { self.materials.load_count() }

    pub async fn open(self: Rc<Self>, index: usize) {
        let Some(hotspot) = self.els.hotspot(index) else { return };
        let area = resolve_area(hotspot);
        let title = resolve_title(hotspot);
        for h in &self.els.hotspots {
            h.set_active(false);
        }
        hotspot.set_active(true);
        let ticket = self.state.borrow_mut().activate(index);
        if let Some(node) = &self.els.title {
            node.set_text_content(Some(&title));
        }

        let url = self.config.data_url.clone();
        let dataset = self.materials.ensure(move || fetch::load_materials(url)).await;

        // a later click or a close superseded this open while the data was loading
        if !self.state.borrow_mut().complete(&ticket) {
            return;
        }
        let data = resolve_area_data(dataset.as_deref(), area.as_deref());
        render::render_materials(self.els.list.as_ref(), self.els.empty.as_ref(), &data.materials);
        render::set_price(self.els.price.as_ref(), &self.config.price_label, data.price.as_ref());
        self.els.set_open(true);
    }

    pub fn close(&self, restore_focus: bool) {
        let Some(previous) = self.state.borrow_mut().close() else { return };
        self.els.set_open(false);
        if let Some(hotspot) = previous.and_then(|i| self.els.hotspot(i)) {
            hotspot.set_active(false);
            if restore_focus {
                hotspot.focus();
            }
        }
        render::reset(
            self.els.list.as_ref(),
            self.els.empty.as_ref(),
            self.els.price.as_ref(),
            &self.config.price_label,
        );
    }

    /// Area data for a hotspot from whatever the cache holds right now.
    pub fn area_data(&self, index: usize) -> Option<(Option<String>, String, AreaData)> {
        let hotspot: &Hotspot = self.els.hotspot(index)?;
        let area = resolve_area(hotspot);
        let dataset = self.materials.dataset();
        let data = resolve_area_data(dataset.as_deref(), area.as_deref());
        Some((area, resolve_title(hotspot), data))
    }

    /// Wires hotspot, close button, overlay and Escape key handlers.
    pub fn attach(self: &Rc<Self>, document: &Document) -> Result<Vec<Listener>, MountError> {
        let mut listeners = Vec::with_capacity(self.els.hotspots.len() + 3);
        for (index, hotspot) in self.els.hotspots.iter().enumerate() {
            let ctrl = Rc::clone(self);
            listeners.push(Listener::new(&hotspot.0, "click", move |_| {
                wasm_bindgen_futures::spawn_local(Rc::clone(&ctrl).open(index));
            })?);
        }
        if let Some(button) = &self.els.close {
            let ctrl = Rc::clone(self);
            listeners.push(Listener::new(button, "click", move |_| ctrl.close(true))?);
        }
        if let Some(overlay) = &self.els.overlay {
            let ctrl = Rc::clone(self);
            listeners.push(Listener::new(overlay, "click", move |_| ctrl.close(false))?);
        }
        let ctrl = Rc::clone(self);
        listeners.push(Listener::new(document, "keydown", move |event| {
            if event.dyn_ref::<KeyboardEvent>().is_some_and(|k| k.key() == "Escape") {
                ctrl.close(true);
            }
        })?);
        Ok(listeners)
    }
}

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Listener, MountError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|_: JsValue| MountError::Listener(event))?;
        Ok(Listener { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let callback = self.callback.as_ref().unchecked_ref();
        let _ = self.target.remove_event_listener_with_callback(self.event, callback);
    }
}
