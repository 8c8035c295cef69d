use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Page contract
// ---------------------------------------------------------------------------

/// Element id of the join form. Its `action` attribute is the POST target.
pub const JOIN_FORM_ID: &str = "join-form";

/// Element id of the container that shows the submission outcome.
pub const STATUS_MESSAGE_ID: &str = "status-message";

pub const NAME_FIELD: &str = "name";
pub const GROUP_SIZE_FIELD: &str = "group_size";

/// Shown in the status container when the request never produced a response.
pub const FAILURE_MESSAGE: &str = "There was an error processing your request.";

// ---------------------------------------------------------------------------
// Submission Payload
// ---------------------------------------------------------------------------

/// The two form fields captured at submit time.
///
/// Values are passed through exactly as the form held them: no trimming,
/// no numeric parsing of `group_size`. Field order matches the wire body
/// (`name=...&group_size=...`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub group_size: String,
}

impl SubmissionPayload {
    pub fn new(name: impl Into<String>, group_size: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group_size: group_size.into(),
        }
    }

    /// Build a payload by looking each field up by name.
    /// A field the form does not have is submitted as the empty string.
    pub fn from_fields<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        Self {
            name: lookup(NAME_FIELD).unwrap_or_default(),
            group_size: lookup(GROUP_SIZE_FIELD).unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Trusted Markup
// ---------------------------------------------------------------------------

/// Text the page renders as HTML without escaping.
///
/// The only ways to build one are [`TrustedMarkup::from_server`], which
/// accepts an endpoint response body as-is, and
/// [`TrustedMarkup::failure_message`]. Anything rendered through
/// `dangerous_inner_html` should come from here.
///
/// Markup cannot be wrapped directly or decoded from serialized data:
///
/// ```compile_fail
/// let markup = shared_types::TrustedMarkup(String::from("<img src=x onerror=alert(1)>"));
/// ```
///
/// ```compile_fail
/// let markup: shared_types::TrustedMarkup =
///     serde_json::from_str(r#""<img src=x onerror=alert(1)>""#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedMarkup(String);

impl TrustedMarkup {
    /// Trust a response body from the join endpoint. Not sanitized.
    pub fn from_server(body: impl Into<String>) -> Self {
        Self(body.into())
    }

    pub fn failure_message() -> Self {
        Self(FAILURE_MESSAGE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Submission Outcome
// ---------------------------------------------------------------------------

/// Terminal display state of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The response body was rendered and the form was reset.
    DisplayedSuccess,
    /// The request failed; the fixed failure message was rendered.
    DisplayedFailure,
}
