pub const DEFAULT_TITLE: &str = "Material";

/// Class-based area markers, checked in order when no explicit area is set.
pub const AREA_CLASSES: [(&str, &str); 3] = [
    ("hotspot--window", "window"),
    ("hotspot--lower", "lower"),
    ("hotspot--upper", "upper"),
];

/// Read access to the attributes of a clickable hotspot.
pub trait HotspotSource {
    /// Explicit area override (`data-area`).
    fn data_area(&self) -> Option<String>;
    /// Headline override (`data-headline`).
    fn headline(&self) -> Option<String>;
    fn aria_label(&self) -> Option<String>;
    fn text_content(&self) -> Option<String>;
    fn has_class(&self, class: &str) -> bool;
}

pub fn resolve_area<H: HotspotSource + ?Sized>(hotspot: &H) -> Option<String> {
    if let Some(area) = hotspot.data_area().filter(|a| !a.is_empty()) {
        return Some(area);
    }
    AREA_CLASSES
        .iter()
        .find(|(class, _)| hotspot.has_class(class))
        .map(|(_, area)| area.to_string())
}

pub fn resolve_title<H: HotspotSource + ?Sized>(hotspot: &H) -> String {
    [hotspot.headline(), hotspot.aria_label(), hotspot.text_content()]
        .into_iter()
        .flatten()
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}
