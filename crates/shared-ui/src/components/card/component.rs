use dioxus::prelude::*;

/// A white, shadowed card container.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

/// Header section of a Card.
#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

/// Title element within a CardHeader.
#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

/// Description text within a CardHeader.
#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

/// Main content section of a Card.
#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Footer section of a Card.
#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}

/// Colored icon chip followed by a term/definition pair.
///
/// Used for the dashboard stat cards and action tiles.
#[component]
pub fn IconStat(
    /// Chip color family (e.g. "indigo", "green").
    accent: String,
    /// Short label rendered as the `dt`.
    label: String,
    /// Main figure or subtitle rendered as the `dd`.
    value: String,
    /// Icon rendered inside the chip.
    icon: Element,
) -> Element {
    rsx! {
        div { class: "icon-stat",
            div { class: "icon-stat-chip icon-stat-{accent}", {icon} }
            dl { class: "icon-stat-body",
                dt { class: "icon-stat-label", "{label}" }
                dd { class: "icon-stat-value", "{value}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_stat_renders_label_value_and_accent() {
        let html = dioxus_ssr::render_element(rsx! {
            IconStat {
                accent: "purple",
                label: "Avg. Completion Time",
                value: "2 days",
                icon: rsx! { span { "*" } },
            }
        });
        assert!(html.contains("icon-stat-purple"), "{html}");
        assert!(html.contains("Avg. Completion Time"), "{html}");
        assert!(html.contains("2 days"), "{html}");
    }
}
