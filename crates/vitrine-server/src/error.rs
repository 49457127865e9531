// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use vitrine_server_db::DbError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// Contact store failure.
	#[error("Store error: {0}")]
	Store(#[from] DbError),

	/// Configuration was rejected at startup.
	#[error("Configuration error: {0}")]
	Config(#[from] vitrine_server_config::ConfigError),

	/// A geolocation provider could not be initialised.
	#[error("GeoIP error: {0}")]
	GeoIp(#[from] vitrine_server_geoip::GeoIpError),

	/// The hosted backend client could not be built.
	#[error("Backend client error: {0}")]
	Hosted(#[from] vitrine_server_hosted::HostedError),

	/// Resource not found. Carries the user-facing message.
	#[error("Not found: {0}")]
	NotFound(String),

	/// Invalid request payload. Carries the user-facing message.
	#[error("Invalid request: {0}")]
	BadRequest(String),

	/// Internal server error.
	#[error("Internal error: {0}")]
	Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl ErrorResponse {
	fn new(error: &str, message: impl Into<String>) -> Self {
		Self {
			error: error.to_string(),
			message: message.into(),
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, body) = match &self {
			ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new("not_found", msg.clone())),
			ServerError::BadRequest(msg) => (
				StatusCode::BAD_REQUEST,
				ErrorResponse::new("bad_request", msg.clone()),
			),
			ServerError::Store(e) if e.is_permission_denied() => {
				tracing::error!(error = %e, "store permission denied");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					ErrorResponse::new("permission_denied", "The request could not be completed"),
				)
			}
			ServerError::Store(e) => {
				tracing::error!(error = %e, "store error");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					ErrorResponse::new("store_error", "A storage error occurred"),
				)
			}
			ServerError::Config(_) | ServerError::GeoIp(_) | ServerError::Hosted(_) | ServerError::Internal(_) => {
				tracing::error!(error = %self, "internal error");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					ErrorResponse::new("internal_error", "An internal error occurred"),
				)
			}
		};

		(status, Json(body)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn not_found_maps_to_404() {
		let response = ServerError::NotFound("nope".to_string()).into_response();
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
	}

	#[test]
	fn bad_request_maps_to_400() {
		let response = ServerError::BadRequest("bad".to_string()).into_response();
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	}

	#[test]
	fn store_errors_hide_details() {
		let response =
			ServerError::Store(DbError::PermissionDenied("rls".to_string())).into_response();
		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

		let response = ServerError::Internal("boom".to_string()).into_response();
		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}
}
