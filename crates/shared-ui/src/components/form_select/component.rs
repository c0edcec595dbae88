use dioxus::prelude::*;

/// Native `select` with an optional caption. The caption wraps the control,
/// so clicking it focuses the select without an `id`.
///
/// Children are `option { value: "...", "Caption" }` elements.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: EventHandler<FormEvent>,
    #[props(default)] label: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "form-select-field",
            if !label.is_empty() {
                span { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                value,
                onchange: move |evt| onchange.call(evt),
                {children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_wraps_select_and_options() {
        let html = dioxus_ssr::render_element(rsx! {
            FormSelect { label: "Role", value: "Staff",
                option { value: "SuperAdmin", "Super Admin" }
                option { value: "Staff", "Staff" }
            }
        });
        let caption = html.find("Role").unwrap();
        let select = html.find("<select").unwrap();
        assert!(caption < select, "{html}");
        assert!(html.contains("Super Admin"), "{html}");
    }

    #[test]
    fn caption_is_optional() {
        let html = dioxus_ssr::render_element(rsx! {
            FormSelect { option { value: "a", "A" } }
        });
        assert!(!html.contains("form-select-label"), "{html}");
    }
}
