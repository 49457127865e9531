// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Hosted backend client implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, error, instrument, trace};
use vitrine_common_config::SecretString;
use vitrine_server_db::{ContactStore, ContactSubmission, DbError, NewContactSubmission};

use crate::error::{HostedError, INSUFFICIENT_PRIVILEGE};

pub const CONTACT_TABLE: &str = "contact_submissions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error body returned by PostgREST.
#[derive(Debug, Default, Deserialize)]
struct RestErrorBody {
	code: Option<String>,
	message: Option<String>,
	hint: Option<String>,
}

/// Client for the hosted REST backend.
#[derive(Debug, Clone)]
pub struct HostedClient {
	http_client: Client,
	base_url: String,
	api_key: SecretString,
}

impl HostedClient {
	/// Build a client for the backend at `base_url` using its public API key.
	pub fn new(base_url: impl Into<String>, api_key: SecretString) -> Result<Self, HostedError> {
		let base_url = base_url.into().trim_end_matches('/').to_string();
		if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
			return Err(HostedError::Config(format!(
				"backend URL must be http(s), got '{base_url}'"
			)));
		}

		let http_client = vitrine_common_http::builder()
			.timeout(REQUEST_TIMEOUT)
			.build()?;

		Ok(Self {
			http_client,
			base_url,
			api_key,
		})
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	fn table_url(&self, table: &str) -> String {
		format!("{}/rest/v1/{}", self.base_url, table)
	}

	fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
		let key = self.api_key.expose();
		request
			.header("apikey", key.as_str())
			.header(reqwest::header::AUTHORIZATION, format!("Bearer {key}"))
	}

	/// Insert one submission and return the row the backend stored.
	///
	/// Exactly one request is made; failures are returned to the caller.
	#[instrument(skip(self, submission), fields(table = CONTACT_TABLE))]
	pub async fn insert_contact(
		&self,
		submission: &NewContactSubmission,
	) -> Result<ContactSubmission, HostedError> {
		let url = self.table_url(CONTACT_TABLE);
		debug!(url = %url, "Inserting contact submission");

		let response = self
			.authorized(self.http_client.post(&url))
			.header("Prefer", "return=representation")
			.json(&[submission])
			.send()
			.await
			.map_err(map_send_error)?;

		let status = response.status();
		debug!(status = %status, "Received response from backend");

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(classify_failure(status, &body));
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			HostedError::Network(e)
		})?;
		trace!(bytes = body.len(), "Response body received");

		let mut rows: Vec<ContactSubmission> = serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse backend response");
			HostedError::InvalidResponse(format!("JSON parse error: {e}"))
		})?;

		if rows.is_empty() {
			return Err(HostedError::InvalidResponse(
				"insert returned no rows".to_string(),
			));
		}
		let row = rows.swap_remove(0);
		debug!(submission_id = %row.id, "Contact submission stored");
		Ok(row)
	}

	/// Check that the backend answers and accepts the key.
	#[instrument(skip(self))]
	pub async fn ping(&self) -> Result<(), HostedError> {
		let url = format!("{}/rest/v1/", self.base_url);
		let response = self
			.authorized(self.http_client.get(&url))
			.send()
			.await
			.map_err(map_send_error)?;

		let status = response.status();
		if status.is_success() {
			return Ok(());
		}
		let body = response.text().await.unwrap_or_default();
		Err(classify_failure(status, &body))
	}
}

fn map_send_error(e: reqwest::Error) -> HostedError {
	if e.is_timeout() {
		error!("Request to backend timed out");
		return HostedError::Timeout;
	}
	error!(error = %e, "Network error during backend request");
	HostedError::Network(e)
}

fn classify_failure(status: StatusCode, body: &str) -> HostedError {
	let parsed: RestErrorBody = serde_json::from_str(body).unwrap_or_default();
	let message = parsed
		.message
		.clone()
		.filter(|m| !m.is_empty())
		.unwrap_or_else(|| body.to_string());

	let policy_violation = parsed.code.as_deref() == Some(INSUFFICIENT_PRIVILEGE);
	if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN || policy_violation {
		error!(
			status = status.as_u16(),
			code = parsed.code.as_deref().unwrap_or(""),
			hint = parsed.hint.as_deref().unwrap_or(""),
			"Backend denied permission"
		);
		return HostedError::PermissionDenied {
			status: status.as_u16(),
			message,
		};
	}

	error!(status = status.as_u16(), code = ?parsed.code, message = %message, "Backend API error");
	HostedError::ApiError {
		status: status.as_u16(),
		code: parsed.code,
		message,
	}
}

#[async_trait]
impl ContactStore for HostedClient {
	fn backend_name(&self) -> &'static str {
		"hosted"
	}

	async fn insert(&self, submission: NewContactSubmission) -> Result<ContactSubmission, DbError> {
		Ok(self.insert_contact(&submission).await?)
	}

	async fn health_check(&self) -> Result<(), DbError> {
		Ok(self.ping().await?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::extract::State;
	use axum::http::{HeaderMap, StatusCode as AxumStatus};
	use axum::routing::{get, post};
	use axum::{Json, Router};
	use std::sync::{Arc, Mutex};
	use vitrine_common_config::Secret;
	use vitrine_server_api::ProjectType;
	use vitrine_server_db::SubmissionStatus;

	#[derive(Clone, Default)]
	struct Recorded {
		bodies: Arc<Mutex<Vec<serde_json::Value>>>,
		headers: Arc<Mutex<Vec<HeaderMap>>>,
	}

	async fn spawn(router: Router) -> String {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		tokio::spawn(async move {
			axum::serve(listener, router).await.unwrap();
		});
		format!("http://{addr}")
	}

	fn submission() -> NewContactSubmission {
		NewContactSubmission {
			name: "Dana Levi".to_string(),
			email: "dana@example.com".to_string(),
			phone: None,
			company: Some("Levi Ceramics".to_string()),
			project_type: Some(ProjectType::Ecommerce),
			message: "Online shop please".to_string(),
			ip_address: Some("203.0.113.7".to_string()),
			user_agent: Some("Mozilla/5.0".to_string()),
			status: SubmissionStatus::New,
		}
	}

	fn client(base: &str) -> HostedClient {
		HostedClient::new(base, Secret::new("anon-key".to_string())).unwrap()
	}

	async fn echo_insert(
		State(recorded): State<Recorded>,
		headers: HeaderMap,
		Json(body): Json<serde_json::Value>,
	) -> (AxumStatus, Json<serde_json::Value>) {
		recorded.bodies.lock().unwrap().push(body.clone());
		recorded.headers.lock().unwrap().push(headers);

		let mut row = body[0].clone();
		row["id"] = serde_json::json!(17);
		row["created_at"] = serde_json::json!("2025-03-01T10:00:00.123456+00:00");
		(AxumStatus::CREATED, Json(serde_json::json!([row])))
	}

	#[tokio::test]
	async fn insert_posts_one_row_with_auth_headers() {
		let recorded = Recorded::default();
		let router = Router::new()
			.route("/rest/v1/contact_submissions", post(echo_insert))
			.with_state(recorded.clone());
		let base = spawn(router).await;

		let stored = client(&base).insert(submission()).await.unwrap();
		assert_eq!(stored.id, "17");
		assert_eq!(stored.email, "dana@example.com");
		assert_eq!(stored.status, SubmissionStatus::New);

		let bodies = recorded.bodies.lock().unwrap();
		assert_eq!(bodies.len(), 1);
		assert_eq!(bodies[0][0]["project_type"], "ecommerce");
		assert_eq!(bodies[0][0]["status"], "new");

		let headers = recorded.headers.lock().unwrap();
		assert_eq!(headers[0]["apikey"], "anon-key");
		assert_eq!(headers[0]["authorization"], "Bearer anon-key");
		assert_eq!(headers[0]["prefer"], "return=representation");
		assert!(headers[0]["user-agent"].to_str().unwrap().starts_with("vitrine/"));
	}

	#[tokio::test]
	async fn row_level_security_violation_is_permission_denied() {
		let router = Router::new().route(
			"/rest/v1/contact_submissions",
			post(|| async {
				(
					AxumStatus::UNAUTHORIZED,
					Json(serde_json::json!({
						"code": "42501",
						"details": null,
						"hint": null,
						"message": "new row violates row-level security policy for table \"contact_submissions\""
					})),
				)
			}),
		);
		let base = spawn(router).await;

		let err = client(&base).insert(submission()).await.unwrap_err();
		assert!(err.is_permission_denied());
	}

	#[tokio::test]
	async fn policy_code_with_bad_request_status_is_permission_denied() {
		let router = Router::new().route(
			"/rest/v1/contact_submissions",
			post(|| async {
				(
					AxumStatus::BAD_REQUEST,
					Json(serde_json::json!({"code": "42501", "message": "permission denied for table"})),
				)
			}),
		);
		let base = spawn(router).await;

		let err = client(&base).insert_contact(&submission()).await.unwrap_err();
		assert!(matches!(err, HostedError::PermissionDenied { status: 400, .. }));
	}

	#[tokio::test]
	async fn server_error_is_generic_failure() {
		let router = Router::new().route(
			"/rest/v1/contact_submissions",
			post(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "upstream exploded") }),
		);
		let base = spawn(router).await;

		let err = client(&base).insert_contact(&submission()).await.unwrap_err();
		match err {
			HostedError::ApiError { status, message, .. } => {
				assert_eq!(status, 500);
				assert_eq!(message, "upstream exploded");
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[tokio::test]
	async fn empty_representation_is_invalid() {
		let router = Router::new().route(
			"/rest/v1/contact_submissions",
			post(|| async { (AxumStatus::CREATED, Json(serde_json::json!([]))) }),
		);
		let base = spawn(router).await;

		let err = client(&base).insert_contact(&submission()).await.unwrap_err();
		assert!(matches!(err, HostedError::InvalidResponse(_)));
	}

	#[tokio::test]
	async fn unreachable_backend_is_unavailable() {
		let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
		let addr = listener.local_addr().unwrap();
		drop(listener);

		let err = client(&format!("http://{addr}"))
			.insert(submission())
			.await
			.unwrap_err();
		assert!(matches!(err, DbError::Unavailable(_)));
	}

	#[tokio::test]
	async fn ping_reports_rejected_key() {
		let router = Router::new()
			.route("/rest/v1/", get(|| async { AxumStatus::UNAUTHORIZED }));
		let base = spawn(router).await;

		let err = client(&base).health_check().await.unwrap_err();
		assert!(err.is_permission_denied());
	}

	#[tokio::test]
	async fn ping_succeeds_on_ok() {
		let router = Router::new().route("/rest/v1/", get(|| async { "{}" }));
		let base = spawn(router).await;
		assert!(client(&base).health_check().await.is_ok());
	}

	#[test]
	fn rejects_non_http_urls_and_trims_slash() {
		assert!(matches!(
			HostedClient::new("ftp://x", Secret::new("k".to_string())),
			Err(HostedError::Config(_))
		));
		let client = HostedClient::new("https://abc.backend.example/", Secret::new("k".to_string())).unwrap();
		assert_eq!(client.base_url(), "https://abc.backend.example");
		assert_eq!(
			client.table_url(CONTACT_TABLE),
			"https://abc.backend.example/rest/v1/contact_submissions"
		);
	}

	#[test]
	fn debug_does_not_leak_key() {
		let client = HostedClient::new("https://x.example", Secret::new("super-secret".to_string())).unwrap();
		assert!(!format!("{client:?}").contains("super-secret"));
	}
}
