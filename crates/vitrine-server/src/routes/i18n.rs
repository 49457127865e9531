// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Language resolution and selection handlers.

use axum::{
	extract::{rejection::JsonRejection, Query, State},
	http::{header::ACCEPT_LANGUAGE, HeaderMap},
	response::{IntoResponse, Response},
	Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use vitrine_common_i18n::{Language, LanguageSource, ResolutionInputs};
use vitrine_server_api::{LanguageResponse, SetLanguageRequest};

use crate::{
	api::AppState,
	client_info::ClientInfo,
	cookies::{
		append_set_cookie, language_cookie, read_cookie, read_session, session_cookie, LANG_COOKIE,
	},
	error::ServerError,
	i18n::t,
};

/// Header carrying the browser's IANA time zone.
pub const CLIENT_TIMEZONE_HEADER: &str = "x-client-timezone";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LanguageQuery {
	/// Language override from the page URL.
	pub lang: Option<String>,
	/// IANA time zone reported by the browser.
	pub tz: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/i18n",
    params(LanguageQuery),
    responses(
        (status = 200, description = "Resolved language with its dictionary", body = LanguageResponse)
    ),
    tag = "i18n"
)]
/// GET /api/i18n - Resolve the visitor's language.
///
/// Order: URL parameter, saved choice, time zone or browser language,
/// one-time geolocation, default.
pub async fn get_language(
	State(state): State<AppState>,
	Query(query): Query<LanguageQuery>,
	headers: HeaderMap,
) -> Response {
	let stored = read_cookie(&headers, LANG_COOKIE);
	let header_timezone = headers
		.get(CLIENT_TIMEZONE_HEADER)
		.and_then(|v| v.to_str().ok());
	let client = ClientInfo::from_headers(&headers);

	let inputs = ResolutionInputs {
		url_param: query.lang.as_deref(),
		stored: stored.as_deref(),
		timezone: query.tz.as_deref().or(header_timezone),
		accept_language: headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()),
		client_ip: client.ip(),
	};

	let before = read_session(&headers);
	let mut session = before;
	let resolution = state.language_resolver.resolve(&inputs, &mut session).await;

	let mut response =
		Json(LanguageResponse::new(resolution.language, resolution.source)).into_response();
	if session != before {
		append_set_cookie(response.headers_mut(), &session_cookie(&session));
	}
	response
}

#[utoipa::path(
    put,
    path = "/api/i18n/language",
    request_body = SetLanguageRequest,
    responses(
        (status = 200, description = "Language saved", body = LanguageResponse),
        (status = 400, description = "Unsupported language or unreadable body", body = crate::error::ErrorResponse)
    ),
    tag = "i18n"
)]
/// PUT /api/i18n/language - Persist an explicit language choice.
///
/// Stores the choice for a year and blocks geolocation for the session.
pub async fn set_language(
	State(state): State<AppState>,
	headers: HeaderMap,
	payload: Result<Json<SetLanguageRequest>, JsonRejection>,
) -> Result<Response, ServerError> {
	let lang = crate::i18n::request_language(&headers, state.default_language());

	let Json(request) = payload.map_err(|rejection| {
		tracing::debug!(error = %rejection, "language payload rejected");
		ServerError::BadRequest(t(lang, "error.invalid_request"))
	})?;

	let language = Language::from_tag(&request.language)
		.ok_or_else(|| ServerError::BadRequest(t(lang, "error.unsupported_language")))?;

	let mut session = read_session(&headers);
	session.record_explicit_choice();

	tracing::debug!(%language, "explicit language choice saved");

	let mut response = Json(LanguageResponse::new(language, LanguageSource::Explicit)).into_response();
	let response_headers = response.headers_mut();
	append_set_cookie(response_headers, &language_cookie(language));
	append_set_cookie(response_headers, &session_cookie(&session));
	Ok(response)
}
