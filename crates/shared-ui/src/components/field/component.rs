use dioxus::prelude::*;

/// A labelled input whose `name` is the key it is submitted under.
#[component]
pub fn FormField(
    name: String,
    label: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "field-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let input_id = format!("field-{name}");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field",
            label { class: "field-label", r#for: "{input_id}", "{label}" }
            input {
                id: "{input_id}",
                name: "{name}",
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}
