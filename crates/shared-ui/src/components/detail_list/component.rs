use dioxus::prelude::*;

/// Label/value pairs for a record, rendered as a definition list.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// One `label: value` row. Rich values (badges, links) go in children and
/// take precedence over `value`.
#[component]
pub fn DetailItem(
    label: &'static str,
    #[props(default)] value: String,
    children: Element,
) -> Element {
    let rich = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}:" }
            dd { class: "detail-item-value",
                if rich {
                    {children}
                } else {
                    "{value}"
                }
            }
        }
    }
}
