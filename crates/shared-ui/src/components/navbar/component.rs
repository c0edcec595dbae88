use dioxus::prelude::*;

/// Top navigation bar: brand on the left, free-form content on the right.
#[component]
pub fn Navbar(
    /// Brand text shown next to the icon.
    brand: String,
    /// Icon rendered before the brand text.
    icon: Element,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "navbar",
            div { class: "navbar-inner",
                div { class: "navbar-brand",
                    {icon}
                    span { class: "navbar-brand-name", "{brand}" }
                }
                div { class: "navbar-end", {children} }
            }
        }
    }
}

/// Muted inline text inside the navbar (e.g. a greeting).
#[component]
pub fn NavbarText(children: Element) -> Element {
    rsx! {
        span { class: "navbar-text", {children} }
    }
}
