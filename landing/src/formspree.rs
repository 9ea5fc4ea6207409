//! Contact form transport.

use chaos::contact::{interpret_response, FormEndpoint, Submission, SubmissionState};
use reqwest::header::ACCEPT;

/// POST a submission and map the outcome onto the form state.
///
/// Transport errors (offline, CORS, DNS) become a single message; no retry.
pub async fn submit(endpoint: &FormEndpoint, submission: &Submission) -> SubmissionState {
    tracing::debug!(url = endpoint.url(), "sending contact form");

    let response = reqwest::Client::new()
        .post(endpoint.url())
        .header(ACCEPT, "application/json")
        .json(submission)
        .send()
        .await;

    match response {
        Ok(response) => {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            interpret_response(status, &body)
        }
        Err(e) => {
            tracing::error!(error = %e, "contact form request failed");
            SubmissionState::Failed(vec![e.to_string()])
        }
    }
}
