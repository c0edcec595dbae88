use dioxus::prelude::*;

/// Color family for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeTone {
    #[default]
    Gray,
    Green,
    Yellow,
}

impl BadgeTone {
    fn class(&self) -> &'static str {
        match self {
            BadgeTone::Gray => "badge badge-gray",
            BadgeTone::Green => "badge badge-green",
            BadgeTone::Yellow => "badge badge-yellow",
        }
    }
}

/// A pill-shaped badge for inline labels and statuses.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", tone.class(), None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}
