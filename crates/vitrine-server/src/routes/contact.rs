// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Contact form submission handlers.

use axum::{
	extract::{rejection::JsonRejection, State},
	http::{header, HeaderMap, HeaderValue, StatusCode},
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;
use vitrine_server_api::{ContactErrorResponse, ContactRequest, ContactSuccessResponse};
use vitrine_server_db::NewContactSubmission;

use crate::{
	api::AppState,
	client_info::ClientInfo,
	i18n::{request_language, t},
};

fn with_cors<T: Serialize>(status: StatusCode, body: T) -> Response {
	let mut response = (status, Json(body)).into_response();
	response.headers_mut().insert(
		header::ACCESS_CONTROL_ALLOW_ORIGIN,
		HeaderValue::from_static("*"),
	);
	response
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Submission stored", body = ContactSuccessResponse),
        (status = 400, description = "Missing or invalid fields", body = ContactErrorResponse),
        (status = 500, description = "The contact store rejected the insert", body = ContactErrorResponse)
    ),
    tag = "contact"
)]
/// POST /api/contact - Validate and store a contact form submission.
///
/// Performs exactly one insert. Messages are localized using the saved
/// language cookie, then `Accept-Language`.
#[tracing::instrument(skip(state, headers, payload))]
pub async fn submit_contact(
	State(state): State<AppState>,
	headers: HeaderMap,
	payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Response {
	let lang = request_language(&headers, state.default_language());

	let Json(request) = match payload {
		Ok(payload) => payload,
		Err(rejection) => {
			tracing::debug!(error = %rejection, "contact payload rejected");
			return with_cors(
				StatusCode::BAD_REQUEST,
				ContactErrorResponse::new("invalid_payload", t(lang, "contact.error.invalid_payload")),
			);
		}
	};

	let form = match request.validate() {
		Ok(form) => form,
		Err(e) => {
			tracing::debug!(code = e.code(), "contact form failed validation");
			return with_cors(
				StatusCode::BAD_REQUEST,
				ContactErrorResponse::new(e.code(), e.localized_message(lang)),
			);
		}
	};

	let client = ClientInfo::from_headers(&headers);
	let submission = NewContactSubmission::from_form(form, client.ip_address, client.user_agent);
	let backend = state.contact_store.backend_name();

	match state.contact_store.insert(submission).await {
		Ok(stored) => {
			tracing::info!(submission_id = %stored.id, backend, "contact submission stored");
			with_cors(
				StatusCode::OK,
				ContactSuccessResponse::new(t(lang, "contact.success")),
			)
		}
		Err(e) if e.is_permission_denied() => {
			tracing::error!(
				error = %e,
				backend,
				hint = "grant insert on contact_submissions to the anon role",
				"contact submission denied by backend policy"
			);
			submission_failed(lang)
		}
		Err(e) => {
			tracing::error!(error = %e, backend, "contact submission failed");
			submission_failed(lang)
		}
	}
}

fn submission_failed(lang: vitrine_common_i18n::Language) -> Response {
	with_cors(
		StatusCode::INTERNAL_SERVER_ERROR,
		ContactErrorResponse::new("submission_failed", t(lang, "contact.error.submission_failed")),
	)
}

#[utoipa::path(
    options,
    path = "/api/contact",
    responses(
        (status = 204, description = "CORS preflight")
    ),
    tag = "contact"
)]
/// OPTIONS /api/contact - CORS preflight.
pub async fn contact_preflight() -> impl IntoResponse {
	(
		StatusCode::NO_CONTENT,
		[
			(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
			(header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
			(header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
		],
	)
}
