use serde::{Deserialize, Serialize};

/// CSS selectors for the nodes the panel controller binds to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub kitchen_view: String,
    pub panel: String,
    pub overlay: String,
    pub list: String,
    pub price: String,
    pub title: String,
    pub empty: String,
    pub close: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Selectors {
            kitchen_view: "[data-kitchen-view]".into(),
            panel: "[data-kitchen-panel]".into(),
            overlay: "[data-panel-overlay]".into(),
            list: "[data-panel-list]".into(),
            price: "[data-panel-price]".into(),
            title: "[data-panel-title]".into(),
            empty: "[data-panel-empty]".into(),
            close: "[data-panel-close]".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelConfig {
    pub data_url: String,
    pub selectors: Selectors,
    pub hotspot_selector: String,
    pub price_label: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            data_url: "data/materials.json".into(),
            selectors: Selectors::default(),
            hotspot_selector: ".hotspot--window, .hotspot--lower, .hotspot--upper".into(),
            price_label: "Preis: ".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: PanelConfig = serde_json::from_str(
            r##"{"dataUrl": "/api/kitchen.json", "selectors": {"panel": "#side"}}"##,
        )
        .unwrap();
        assert_eq!(cfg.data_url, "/api/kitchen.json");
        assert_eq!(cfg.selectors.panel, "#side");
        assert_eq!(cfg.selectors.list, "[data-panel-list]");
        assert_eq!(cfg.price_label, "Preis: ");
    }
}
