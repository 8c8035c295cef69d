use crate::surfaces::{DomSubmit, JoinFields, SignalPage, StatusSignal};
use client::{HttpTransport, JoinFormHandler};
use dioxus::prelude::*;
use shared_types::{
    AppConfig, TrustedMarkup, GROUP_SIZE_FIELD, JOIN_FORM_ID, NAME_FIELD, STATUS_MESSAGE_ID,
};
use shared_ui::{Form, FormField, StatusMessage};

/// Walk-up join page: name and group size, posted to the configured endpoint.
///
/// The handler is installed once, after the form's signals exist. Each
/// submission runs as its own task; nothing stops a second submit while one
/// is in flight, and whichever response lands last stays on screen.
#[component]
pub fn JoinPage() -> Element {
    let config = use_context::<AppConfig>();
    let action = config.join.action;

    let mut name = use_signal(String::new);
    let mut group_size = use_signal(String::new);
    let status = use_signal(|| None::<TrustedMarkup>);

    let handler = use_hook({
        let action = action.clone();
        move || {
            let page = SignalPage {
                fields: JoinFields {
                    name,
                    group_size,
                    action,
                },
                status: StatusSignal(status),
            };
            JoinFormHandler::install(&page, HttpTransport::new())
        }
    });

    let onsubmit = move |evt: FormEvent| {
        let Some(handler) = handler.as_ref() else {
            return;
        };
        let submission = handler.submit(&DomSubmit(&evt));
        spawn(async move {
            if let Err(e) = submission.await {
                tracing::error!(error = %e, "join submission could not update the page");
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./join.css") }

        main { class: "join-page",
            h1 { class: "join-title", "Join the queue" }
            p { class: "join-subtitle",
                "Tell us who you are and how many are in your group."
            }

            Form { id: JOIN_FORM_ID, action: action.clone(), onsubmit,
                FormField {
                    name: NAME_FIELD.to_string(),
                    label: "Name",
                    placeholder: "Your name",
                    value: name(),
                    on_input: move |e: FormEvent| name.set(e.value()),
                }
                FormField {
                    name: GROUP_SIZE_FIELD.to_string(),
                    label: "Group size",
                    input_type: "number",
                    value: group_size(),
                    on_input: move |e: FormEvent| group_size.set(e.value()),
                }
                button { r#type: "submit", "Join" }
            }

            StatusMessage { id: STATUS_MESSAGE_ID, markup: status() }
        }
    }
}
