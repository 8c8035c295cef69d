use crate::surface::{FormSurface, PageSurface, StatusSurface, SubmitEvent, Transport};
use shared_types::{
    JoinError, SubmissionPayload, SubmitOutcome, TrustedMarkup, JOIN_FORM_ID, STATUS_MESSAGE_ID,
};
use std::future::Future;

/// Bridges submissions of the join form to the endpoint and shows the result.
///
/// Cloning is cheap as long as the surfaces and transport are; hosts clone a
/// handler into each event closure. Overlapping submissions are not guarded:
/// each one writes the status container when it resolves, so the last to
/// resolve wins.
#[derive(Debug, Clone)]
pub struct JoinFormHandler<F, S, T> {
    form: F,
    status: Option<S>,
    transport: T,
}

impl<F, S, T> JoinFormHandler<F, S, T>
where
    F: FormSurface + Clone + 'static,
    S: StatusSurface + Clone + 'static,
    T: Transport,
{
    /// Bind to the page's join form and status container.
    ///
    /// Returns `None` without error when the page has no join form. A missing
    /// status container is only noticed when a submission tries to write it.
    pub fn install<P>(page: &P, transport: T) -> Option<Self>
    where
        P: PageSurface<Form = F, Status = S>,
    {
        let Some(form) = page.form(JOIN_FORM_ID) else {
            tracing::info!(form_id = JOIN_FORM_ID, "join form not on page, handler not installed");
            return None;
        };
        let status = page.status(STATUS_MESSAGE_ID);
        tracing::info!(
            form_id = JOIN_FORM_ID,
            has_status = status.is_some(),
            "join form handler installed"
        );

        Some(Self {
            form,
            status,
            transport,
        })
    }

    /// Handle one submit event.
    ///
    /// Everything up to dispatch happens before this returns: the default
    /// navigation is suppressed, the two fields are captured and the request
    /// is handed to the transport. The returned future awaits the response
    /// and updates the page.
    pub fn submit(
        &self,
        event: &dyn SubmitEvent,
    ) -> impl Future<Output = Result<SubmitOutcome, JoinError>> + 'static {
        event.prevent_default();

        let payload = SubmissionPayload::from_fields(|field| self.form.field_value(field));
        let action = self.form.action();
        tracing::debug!(action = %action, "dispatching join request");
        let response = self.transport.post_form(&action, payload);

        let form = self.form.clone();
        let status = self.status.clone();

        async move {
            match response.await {
                Ok(body) => {
                    render(status.as_ref(), TrustedMarkup::from_server(body))?;
                    form.reset();
                    Ok(SubmitOutcome::DisplayedSuccess)
                }
                Err(e) => {
                    tracing::error!(error = %e, action = %action, "join request failed");
                    render(status.as_ref(), TrustedMarkup::failure_message())?;
                    Ok(SubmitOutcome::DisplayedFailure)
                }
            }
        }
    }
}

fn render<S: StatusSurface>(status: Option<&S>, markup: TrustedMarkup) -> Result<(), JoinError> {
    let status = status.ok_or_else(|| JoinError::status_container_missing(STATUS_MESSAGE_ID))?;
    status.render_trusted_markup(markup);
    Ok(())
}
