//! Seams between the join handler and whatever hosts it.
//!
//! The dioxus app implements these over signals; the test crate implements
//! them over plain `RefCell`s.

use shared_types::{JoinError, SubmissionPayload, TrustedMarkup};
use std::future::Future;

/// The native submit event delivered by the bound form.
pub trait SubmitEvent {
    /// Stop the browser from navigating to the form's action.
    fn prevent_default(&self);
}

/// A form element as the handler sees it.
pub trait FormSurface {
    /// Current value of the named field, `None` if the form has no such field.
    fn field_value(&self, name: &str) -> Option<String>;

    /// POST target taken from the form's `action` attribute.
    fn action(&self) -> String;

    /// Restore every field to its default value.
    fn reset(&self);
}

/// An element that accepts HTML content.
pub trait StatusSurface {
    /// Replace the element's content with `markup`, interpreted as HTML.
    fn render_trusted_markup(&self, markup: TrustedMarkup);
}

/// Element lookup by id.
pub trait PageSurface {
    type Form: FormSurface;
    type Status: StatusSurface;

    fn form(&self, id: &str) -> Option<Self::Form>;
    fn status(&self, id: &str) -> Option<Self::Status>;
}

/// Carries a submission to the endpoint.
///
/// `post_form` dispatches synchronously and hands back the one future the
/// handler awaits. The future resolves to the response body for any HTTP
/// status; only a failure to obtain a response is an `Err`.
pub trait Transport {
    fn post_form(
        &self,
        url: &str,
        payload: SubmissionPayload,
    ) -> impl Future<Output = Result<String, JoinError>> + use<Self> + 'static;
}
