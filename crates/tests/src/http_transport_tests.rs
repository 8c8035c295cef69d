use crate::common::*;
use axum::http::StatusCode;
use client::{HttpTransport, Transport};
use pretty_assertions::assert_eq;
use shared_types::{JoinErrorKind, SubmissionPayload};

#[tokio::test]
async fn posts_url_encoded_pair() {
    let endpoint = spawn_endpoint(StatusCode::OK, "ok").await;
    let transport = HttpTransport::new();

    let body = transport
        .post_form(&endpoint.join_url(), SubmissionPayload::new("Alice", "4"))
        .await
        .unwrap();

    assert_eq!(body, "ok");
    let captured = endpoint.captured();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].body, "name=Alice&group_size=4");
    assert_eq!(
        captured[0].content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
}

#[tokio::test]
async fn empty_values_are_still_sent() {
    let endpoint = spawn_endpoint(StatusCode::OK, "ok").await;

    HttpTransport::new()
        .post_form(&endpoint.join_url(), SubmissionPayload::new("", ""))
        .await
        .unwrap();

    assert_eq!(endpoint.captured()[0].body, "name=&group_size=");
}

#[tokio::test]
async fn reserved_characters_are_escaped() {
    let endpoint = spawn_endpoint(StatusCode::OK, "ok").await;

    HttpTransport::new()
        .post_form(
            &endpoint.join_url(),
            SubmissionPayload::new("Bob & Ann=2", "3"),
        )
        .await
        .unwrap();

    assert_eq!(
        endpoint.captured()[0].body,
        "name=Bob+%26+Ann%3D2&group_size=3"
    );
}

#[tokio::test]
async fn server_error_body_is_returned_not_raised() {
    let endpoint = spawn_endpoint(StatusCode::INTERNAL_SERVER_ERROR, "Server error").await;

    let body = HttpTransport::new()
        .post_form(&endpoint.join_url(), SubmissionPayload::new("Alice", "4"))
        .await
        .unwrap();

    assert_eq!(body, "Server error");
}

#[tokio::test]
async fn not_found_body_is_returned_not_raised() {
    let endpoint = spawn_endpoint(StatusCode::OK, "unused").await;
    let url = format!("{}/nowhere", endpoint.base_url);

    let body = HttpTransport::new()
        .post_form(&url, SubmissionPayload::new("Alice", "4"))
        .await
        .unwrap();

    assert_eq!(body, NOT_FOUND_BODY);
    assert!(endpoint.captured().is_empty());
}

#[tokio::test]
async fn redirect_is_followed_to_the_ticket_page() {
    let endpoint = spawn_redirecting_endpoint(StatusCode::OK, "You're number 3").await;

    let body = HttpTransport::new()
        .post_form(&endpoint.join_url(), SubmissionPayload::new("Alice", "4"))
        .await
        .unwrap();

    assert_eq!(body, "You're number 3 (abc123)");
    let captured = endpoint.captured();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].body, "name=Alice&group_size=4");
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let err = HttpTransport::new()
        .post_form(&unreachable_url(), SubmissionPayload::new("Alice", "4"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, JoinErrorKind::Transport);
}

#[tokio::test]
async fn malformed_url_is_a_transport_error() {
    let err = HttpTransport::with_client(reqwest::Client::new())
        .post_form("not a url", SubmissionPayload::new("Alice", "4"))
        .await
        .unwrap_err();

    assert!(err.is_transport());
}
