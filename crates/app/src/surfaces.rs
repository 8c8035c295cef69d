//! Signal-backed implementations of the join handler's page seams.

use client::{FormSurface, PageSurface, StatusSurface, SubmitEvent};
use dioxus::prelude::*;
use shared_types::{TrustedMarkup, GROUP_SIZE_FIELD, JOIN_FORM_ID, NAME_FIELD, STATUS_MESSAGE_ID};

/// A dioxus submit event as the handler sees it.
pub struct DomSubmit<'a>(pub &'a FormEvent);

impl SubmitEvent for DomSubmit<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

/// The join form's controlled inputs plus its `action`.
#[derive(Clone, PartialEq)]
pub struct JoinFields {
    pub name: Signal<String>,
    pub group_size: Signal<String>,
    pub action: String,
}

impl FormSurface for JoinFields {
    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            NAME_FIELD => Some(self.name.read().clone()),
            GROUP_SIZE_FIELD => Some(self.group_size.read().clone()),
            _ => None,
        }
    }

    fn action(&self) -> String {
        self.action.clone()
    }

    fn reset(&self) {
        let mut name = self.name;
        let mut group_size = self.group_size;
        name.set(String::new());
        group_size.set(String::new());
    }
}

/// Content of the status container.
#[derive(Clone, Copy, PartialEq)]
pub struct StatusSignal(pub Signal<Option<TrustedMarkup>>);

impl StatusSurface for StatusSignal {
    fn render_trusted_markup(&self, markup: TrustedMarkup) {
        let mut status = self.0;
        status.set(Some(markup));
    }
}

/// The join page's elements, looked up by the same ids they render with.
pub struct SignalPage {
    pub fields: JoinFields,
    pub status: StatusSignal,
}

impl PageSurface for SignalPage {
    type Form = JoinFields;
    type Status = StatusSignal;

    fn form(&self, id: &str) -> Option<JoinFields> {
        (id == JOIN_FORM_ID).then(|| self.fields.clone())
    }

    fn status(&self, id: &str) -> Option<StatusSignal> {
        (id == STATUS_MESSAGE_ID).then_some(self.status)
    }
}
