use crate::surface::Transport;
use shared_types::{JoinError, SubmissionPayload};
use std::future::Future;

/// Posts submissions with `reqwest`.
///
/// On `wasm32` reqwest goes through the browser's fetch, so CORS and
/// connectivity failures surface here as transport errors. No timeout and
/// no retries are configured.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn post_form(
        &self,
        url: &str,
        payload: SubmissionPayload,
    ) -> impl Future<Output = Result<String, JoinError>> + use<> + 'static {
        // `form` encodes as application/x-www-form-urlencoded and sets the
        // matching content type.
        let request = self.client.post(url).form(&payload);

        async move {
            let response = request
                .send()
                .await
                .map_err(|e| JoinError::transport(format!("join request failed: {e}")))?;

            // Any status is a response; 4xx/5xx bodies are displayed like 2xx.
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| JoinError::transport(format!("reading join response failed: {e}")))?;

            tracing::debug!(status = status.as_u16(), bytes = body.len(), "join response received");
            Ok(body)
        }
    }
}
