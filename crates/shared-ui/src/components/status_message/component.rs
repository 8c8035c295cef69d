use dioxus::prelude::*;
use shared_types::TrustedMarkup;

/// Container for the outcome of a submission.
///
/// `markup` is rendered as HTML without escaping. It can only be built from a
/// server response or the fixed failure text, so every injection into the
/// page goes through [`TrustedMarkup`].
#[component]
pub fn StatusMessage(
    #[props(!optional)] markup: Option<TrustedMarkup>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "status-message", None, false),
        Attribute::new("role", "status", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let html = markup.as_ref().map(TrustedMarkup::as_str).unwrap_or_default();

    rsx! {
        div {
            dangerous_inner_html: "{html}",
            ..merged,
        }
    }
}
