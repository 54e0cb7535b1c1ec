pub mod config;
pub mod dataset;
pub mod format;
pub mod hotspot;
pub mod loader;
pub mod model;
pub mod panel;

pub use config::{PanelConfig, Selectors};
pub use dataset::resolve_area_data;
pub use format::{format_price, material_view, price_text};
pub use hotspot::{resolve_area, resolve_title, HotspotSource};
pub use loader::{LoadPhase, MaterialsCache};
pub use model::{AreaData, MaterialView};
pub use panel::{OpenTicket, PanelState};
