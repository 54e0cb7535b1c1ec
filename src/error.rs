use crate::interop::{new_obj, set_kv};
use std::fmt;
use wasm_bindgen::JsValue;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

#[inline]
pub fn invalid_config(message: impl Into<String>) -> JsValue {
    err("invalid_config", message, None)
}

/// Why the panel controller could not attach to the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountError {
    NoDocument,
    MissingContainer,
    MissingPanel,
    NoHotspots,
    InvalidSelector(String),
    Listener(&'static str),
}

impl MountError {
    pub fn code(&self) -> &'static str {
        match self {
            MountError::NoDocument => "no_document",
            MountError::MissingContainer => "missing_container",
            MountError::MissingPanel => "missing_panel",
            MountError::NoHotspots => "no_hotspots",
            MountError::InvalidSelector(_) => "invalid_selector",
            MountError::Listener(_) => "listener_failed",
        }
    }

    pub fn to_js(&self) -> JsValue {
        let data = match self {
            MountError::InvalidSelector(sel) => {
                let d = new_obj();
                set_kv(&d, "selector", &JsValue::from_str(sel));
                Some(d.into())
            }
            MountError::Listener(event) => {
                let d = new_obj();
                set_kv(&d, "event", &JsValue::from_str(event));
                Some(d.into())
            }
            _ => None,
        };
        err(self.code(), self.to_string(), data)
    }
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountError::NoDocument => write!(f, "no window or document available"),
            MountError::MissingContainer => write!(f, "kitchen view container not found"),
            MountError::MissingPanel => write!(f, "panel not found inside the kitchen view"),
            MountError::NoHotspots => write!(f, "no hotspots found inside the kitchen view"),
            MountError::InvalidSelector(sel) => write!(f, "invalid selector '{}'", sel),
            MountError::Listener(event) => write!(f, "could not register '{}' listener", event),
        }
    }
}

impl std::error::Error for MountError {}

impl From<MountError> for JsValue {
    fn from(e: MountError) -> JsValue {
        js_sys::Error::new(&e.to_string()).into()
    }
}
