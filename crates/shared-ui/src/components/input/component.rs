use dioxus::prelude::*;

/// A labelled text input with an optional inline error.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    /// Validation message shown under the field.
    #[props(default)]
    error: Option<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                "aria-invalid": error.is_some(),
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
            if let Some(msg) = &error {
                p { class: "input-error", "{msg}" }
            }
        }
    }
}
