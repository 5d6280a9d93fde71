//! Native form-relay client
//!
//! `reqwest` implementation of [`SubmissionTransport`], used outside the
//! browser. The browser build uses `ui::transport::AsyncRequestTransport`.

use reqwest::multipart::Form;

use super::submission::{ContactPayload, SubmissionTransport, TransportError, detail_from_body};

/// Relay client backed by `reqwest`
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() || e.is_request() {
            TransportError::Network(e.to_string())
        } else {
            TransportError::Unexpected(e.to_string())
        }
    }
}

impl SubmissionTransport for ReqwestTransport {
    async fn send(&self, endpoint: &str, payload: &ContactPayload) -> Result<(), TransportError> {
        let form = payload
            .fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name, value.to_string())
            });

        let response = self
            .client
            .post(endpoint)
            .header("Accept", "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        tracing::info!("Form relay response status: {}", status);
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!("Form relay error body: {}", body);
        Err(TransportError::Rejected {
            status: status.as_u16(),
            detail: detail_from_body(&body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode, routing::post};
    use std::sync::{Arc, Mutex};

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: "Analytical Engines".to_string(),
            message: "Please get in touch".to_string(),
        }
    }

    async fn spawn_relay(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/f/test", addr)
    }

    #[tokio::test]
    async fn test_success_sends_multipart_fields() {
        let seen = Arc::new(Mutex::new(String::new()));
        let seen_in_handler = seen.clone();
        let router = Router::new().route(
            "/f/test",
            post(move |body: String| {
                let seen = seen_in_handler.clone();
                async move {
                    *seen.lock().unwrap() = body;
                    (StatusCode::OK, r#"{"ok":true}"#)
                }
            }),
        );
        let endpoint = spawn_relay(router).await;

        let result = ReqwestTransport::new().send(&endpoint, &payload()).await;

        assert_eq!(result, Ok(()));
        let body = seen.lock().unwrap().clone();
        for field in ["name", "email", "company", "message"] {
            assert!(body.contains(&format!("name=\"{}\"", field)));
        }
        assert!(body.contains("Analytical Engines"));
    }

    #[tokio::test]
    async fn test_server_error_is_rejection_with_detail() {
        let router = Router::new().route(
            "/f/test",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    r#"{"error":"Relay is down"}"#,
                )
            }),
        );
        let endpoint = spawn_relay(router).await;

        let result = ReqwestTransport::new().send(&endpoint, &payload()).await;

        assert_eq!(
            result,
            Err(TransportError::Rejected {
                status: 500,
                detail: Some("Relay is down".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = ReqwestTransport::new()
            .send(&format!("http://{}/f/test", addr), &payload())
            .await;

        assert!(result.unwrap_err().is_transport_failure());
    }
}
