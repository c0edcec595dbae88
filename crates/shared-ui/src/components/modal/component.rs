use dioxus::prelude::*;

/// A centered dialog over a dimmed backdrop.
///
/// Clicking the backdrop calls `on_close`. The panel is a sibling of the
/// backdrop, not a child, so clicks inside it never bubble to the dismiss
/// handler.
#[component]
pub fn Modal(
    open: bool,
    on_close: EventHandler<()>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    let base = vec![Attribute::new("class", "modal-panel", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "modal-overlay", "data-open": "true",
            div {
                class: "modal-backdrop",
                onclick: move |_| on_close.call(()),
            }
            div {
                role: "dialog",
                "aria-modal": "true",
                ..merged,
                {children}
            }
        }
    }
}

/// Header section of a Modal.
#[component]
pub fn ModalHeader(children: Element) -> Element {
    rsx! {
        div { class: "modal-header", {children} }
    }
}

/// Title element within a ModalHeader.
#[component]
pub fn ModalTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "modal-title", {children} }
    }
}

/// Scrollable content area inside a Modal.
#[component]
pub fn ModalContent(children: Element) -> Element {
    rsx! {
        div { class: "modal-content", {children} }
    }
}

/// Footer section of a Modal, typically holding the dismiss control.
#[component]
pub fn ModalFooter(children: Element) -> Element {
    rsx! {
        div { class: "modal-footer", {children} }
    }
}
