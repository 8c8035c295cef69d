use dioxus::prelude::*;

/// A styled form that hands its raw submit event to `onsubmit`.
///
/// Default navigation is left to the handler: whoever receives the event
/// decides whether to call `prevent_default`.
#[component]
pub fn Form(
    /// POST target rendered as the form's `action` attribute.
    action: String,
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            action: "{action}",
            method: "post",
            onsubmit: move |evt| onsubmit.call(evt),
            ..merged,
            {children}
        }
    }
}
