use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn};
use validator::{Validate, ValidationErrors};

use crate::handlers::contact_dtos::{ContactRequest, ContactResponse, WelcomeResponse};
use crate::utils::contact_emails::{acknowledgment, operator_notification};
use crate::utils::mailer::{MailError, OutgoingEmail};
use crate::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("input fields are not valid")]
    Validation(Option<ValidationErrors>),
    #[error("shared secret mismatch")]
    Unauthorized,
    #[error("mail delivery failed: {0}")]
    Delivery(#[from] MailError),
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        match self {
            ContactError::Validation(details) => {
                let mut body = json!({
                    "success": false,
                    "message": "input fields are not valid",
                });
                if let Some(details) = details {
                    body["details"] =
                        serde_json::to_value(details.field_errors()).unwrap_or_default();
                }
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ContactError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({"success": false, "error": "Unauthorized"})),
            )
                .into_response(),
            ContactError::Delivery(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": "Failed to send message"})),
            )
                .into_response(),
        }
    }
}

pub async fn welcome(State(state): State<Arc<AppState>>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the backend server!",
        say: format!("Server is running successfully, {}", state.config.owner_name),
    })
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn send_message(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, ContactError> {
    let request = accept(payload, &state.config.shared_secret)?;

    deliver(&state, &request).await.map_err(|e| {
        error!("Email error: {}", e);
        ContactError::Delivery(e)
    })?;

    info!("Email sent from {} ({})", request.name, request.email);
    Ok(Json(ContactResponse {
        success: true,
        message: "Message sent successfully!".to_string(),
    }))
}

/// Parses, validates and authorizes a submission in one pass.
fn accept(
    payload: Result<Json<ContactRequest>, JsonRejection>,
    shared_secret: &str,
) -> Result<ContactRequest, ContactError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected contact payload: {}", rejection.body_text());
        ContactError::Validation(None)
    })?;

    request
        .validate()
        .map_err(|e| ContactError::Validation(Some(e)))?;

    if request.shared_secret != shared_secret {
        warn!("Contact request with invalid shared secret");
        return Err(ContactError::Unauthorized);
    }

    Ok(request)
}

/// Notification first, acknowledgment second; the second is only attempted
/// once the first has been accepted by the transport.
async fn deliver(state: &AppState, request: &ContactRequest) -> Result<(), MailError> {
    let to_owner = operator_notification(&state.config.recipient_email, request, Local::now());
    let to_sender = acknowledgment(request, &state.config.owner_name);

    send_with_timeout(state, to_owner).await?;
    send_with_timeout(state, to_sender).await
}

async fn send_with_timeout(state: &AppState, email: OutgoingEmail) -> Result<(), MailError> {
    let limit = state.config.send_timeout;
    match tokio::time::timeout(limit, state.mailer.send(email)).await {
        Ok(result) => result,
        Err(_) => Err(MailError::Timeout(limit)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::app_config::Config;
    use crate::utils::mailer::{Mailer, MockMailer};
    use crate::utils::rate_limiter::RateLimiter;
    use axum::{
        body::{to_bytes, Body},
        extract::ConnectInfo,
        http::{header, Method, Request},
    };
    use futures::FutureExt;
    use mockall::Sequence;
    use serde_json::Value;
    use std::net::{IpAddr, SocketAddr};
    use std::time::Duration;
    use tower::ServiceExt;

    const SECRET: &str = "portfolio-secret";

    fn test_config() -> Config {
        Config {
            port: 0,
            smtp_host: "localhost".to_string(),
            email_user: "relay@example.com".to_string(),
            email_pass: "unused".to_string(),
            recipient_email: "owner@example.com".to_string(),
            shared_secret: SECRET.to_string(),
            owner_name: "Sujeet Kumar".to_string(),
            send_timeout: Duration::from_millis(200),
            trust_forwarded_for: false,
            sentry_dsn: None,
        }
    }

    fn app_with(mailer: MockMailer) -> axum::Router {
        app_with_config(mailer, test_config())
    }

    fn app_with_config(mailer: MockMailer, config: Config) -> axum::Router {
        let state = Arc::new(AppState {
            config: Arc::new(config),
            mailer: Arc::new(mailer) as Arc<dyn Mailer>,
            rate_limiter: Arc::new(RateLimiter::for_contact_form()),
        });
        crate::router(state)
    }

    /// A POST as it arrives from the socket `peer`, the way
    /// `into_make_service_with_connect_info` hands it to the router.
    fn contact_request(body: Value, peer: &str) -> Request<Body> {
        let ip: IpAddr = peer.parse().unwrap();
        Request::builder()
            .method(Method::POST)
            .uri("/api/sendMessage")
            .header(header::CONTENT_TYPE, "application/json")
            .extension(ConnectInfo(SocketAddr::new(ip, 40000)))
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn ok_sends(times: usize) -> MockMailer {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .times(times)
            .returning(|_| async { Ok::<(), MailError>(()) }.boxed());
        mailer
    }

    fn valid_body() -> Value {
        json!({
            "name": "Ada",
            "email": "ada@example.com",
            "phone": "555-0100",
            "message": "Loved the site",
            "sharedSecret": SECRET,
        })
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn no_sends() -> MockMailer {
        let mut mailer = MockMailer::new();
        mailer.expect_send().never();
        mailer
    }

    #[tokio::test]
    async fn root_returns_static_greeting() {
        let response = app_with(no_sends())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Welcome to the backend server!");
        assert_eq!(json["say"], "Server is running successfully, Sujeet Kumar");
    }

    #[tokio::test]
    async fn empty_name_is_a_client_error() {
        let mut body = valid_body();
        body["name"] = json!("");

        let response = app_with(no_sends())
            .oneshot(contact_request(body, "10.0.0.1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "input fields are not valid");
        assert!(json["details"]["name"].is_array());
    }

    #[tokio::test]
    async fn malformed_json_is_a_client_error() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/sendMessage")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name": 42, "email": "#))
            .unwrap();

        let response = app_with(no_sends()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["success"], false);
    }

    #[tokio::test]
    async fn wrong_secret_is_unauthorized() {
        let mut body = valid_body();
        body["sharedSecret"] = json!("guess");

        let response = app_with(no_sends())
            .oneshot(contact_request(body, "10.0.0.2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn valid_submission_sends_notification_then_acknowledgment() {
        let mut seq = Sequence::new();
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|email| email.to == "owner@example.com" && email.subject == "New Contact: Ada")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| async { Ok::<(), MailError>(()) }.boxed());
        mailer
            .expect_send()
            .withf(|email| email.to == "ada@example.com")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| async { Ok::<(), MailError>(()) }.boxed());

        let response = app_with(mailer)
            .oneshot(contact_request(valid_body(), "10.0.0.3"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Message sent successfully!");
    }

    #[tokio::test]
    async fn failed_first_send_skips_acknowledgment() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|email| email.to == "owner@example.com")
            .times(1)
            .returning(|_| async { Err(MailError::Timeout(Duration::ZERO)) }.boxed());
        mailer
            .expect_send()
            .withf(|email| email.to == "ada@example.com")
            .never();

        let response = app_with(mailer)
            .oneshot(contact_request(valid_body(), "10.0.0.4"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Failed to send message");
    }

    #[tokio::test]
    async fn stalled_transport_times_out_as_server_error() {
        let mut mailer = MockMailer::new();
        mailer.expect_send().times(1).returning(|_| {
            async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok::<(), MailError>(())
            }
            .boxed()
        });

        let response = app_with(mailer)
            .oneshot(contact_request(valid_body(), "10.0.0.5"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn third_submission_from_same_client_is_rate_limited() {
        let app = app_with(no_sends());

        for _ in 0..2 {
            let mut body = valid_body();
            body["sharedSecret"] = json!("wrong");
            let response = app
                .clone()
                .oneshot(contact_request(body, "198.51.100.9"))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }

        let response = app
            .clone()
            .oneshot(contact_request(valid_body(), "198.51.100.9"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(response.headers().contains_key(header::RETRY_AFTER));
        assert_eq!(body_json(response).await["success"], false);

        // other clients are unaffected
        let response = app
            .oneshot(contact_request(json!({}), "198.51.100.10"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rotating_forwarded_header_does_not_reset_the_limit() {
        let app = app_with(ok_sends(4));

        let mut statuses = Vec::new();
        for i in 0..5 {
            let mut request = contact_request(valid_body(), "203.0.113.50");
            request
                .headers_mut()
                .insert("x-forwarded-for", format!("10.9.9.{i}").parse().unwrap());
            statuses.push(app.clone().oneshot(request).await.unwrap().status());
        }

        assert_eq!(
            statuses,
            vec![
                StatusCode::OK,
                StatusCode::OK,
                StatusCode::TOO_MANY_REQUESTS,
                StatusCode::TOO_MANY_REQUESTS,
                StatusCode::TOO_MANY_REQUESTS,
            ]
        );
    }

    #[tokio::test]
    async fn trusted_proxy_limits_by_forwarded_client() {
        let config = Config {
            trust_forwarded_for: true,
            ..test_config()
        };
        let app = app_with_config(no_sends(), config);

        let from_proxy = |client: &str| {
            let mut body = valid_body();
            body["sharedSecret"] = json!("wrong");
            let mut request = contact_request(body, "10.0.0.254");
            request
                .headers_mut()
                .insert("x-forwarded-for", client.parse().unwrap());
            request
        };

        for _ in 0..2 {
            let response = app.clone().oneshot(from_proxy("198.51.100.7")).await.unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
        let response = app.clone().oneshot(from_proxy("198.51.100.7")).await.unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

        // same proxy socket, different forwarded client
        let response = app.oneshot(from_proxy("198.51.100.8")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn greeting_is_not_rate_limited() {
        let app = app_with(no_sends());
        for _ in 0..5 {
            let response = app
                .clone()
                .oneshot(Request::get("/").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }
}
