// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Language cookies.
//!
//! `vitrine_lang` holds the saved choice for a year. `vitrine_lang_session`
//! is a session cookie carrying the per-session flags: whether an explicit
//! choice was made and whether geolocation was already attempted.

use axum::http::{
	header::{COOKIE, SET_COOKIE},
	HeaderMap, HeaderValue,
};
use vitrine_common_i18n::{Language, SessionState};

pub const LANG_COOKIE: &str = "vitrine_lang";
pub const SESSION_COOKIE: &str = "vitrine_lang_session";

const LANG_COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

const FLAG_EXPLICIT: &str = "explicit";
const FLAG_GEO: &str = "geo";
const NO_FLAGS: &str = "none";

/// Read a cookie value from the `Cookie` header.
pub fn read_cookie(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
	headers
		.get_all(COOKIE)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.flat_map(|value| value.split(';'))
		.find_map(|cookie| {
			let (name, value) = cookie.trim().split_once('=')?;
			if name == cookie_name {
				Some(value.to_string())
			} else {
				None
			}
		})
}

/// Session flags from the session cookie; a missing cookie is a fresh session.
pub fn read_session(headers: &HeaderMap) -> SessionState {
	match read_cookie(headers, SESSION_COOKIE) {
		Some(value) => decode_session(&value),
		None => SessionState::default(),
	}
}

pub fn decode_session(value: &str) -> SessionState {
	let mut state = SessionState::default();
	for flag in value.split('.') {
		match flag {
			FLAG_EXPLICIT => state.explicit_choice = true,
			FLAG_GEO => state.geo_attempted = true,
			_ => {}
		}
	}
	state
}

pub fn encode_session(state: &SessionState) -> String {
	let mut flags = Vec::with_capacity(2);
	if state.explicit_choice {
		flags.push(FLAG_EXPLICIT);
	}
	if state.geo_attempted {
		flags.push(FLAG_GEO);
	}
	if flags.is_empty() {
		NO_FLAGS.to_string()
	} else {
		flags.join(".")
	}
}

/// `Set-Cookie` value persisting the saved language.
pub fn language_cookie(language: Language) -> String {
	format!(
		"{LANG_COOKIE}={}; Path=/; Max-Age={LANG_COOKIE_MAX_AGE_SECS}; SameSite=Lax",
		language.code()
	)
}

/// `Set-Cookie` value for the session flags. No `Max-Age`, so it ends with the browser session.
pub fn session_cookie(state: &SessionState) -> String {
	format!(
		"{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
		encode_session(state)
	)
}

/// Append a `Set-Cookie` header.
pub fn append_set_cookie(headers: &mut HeaderMap, cookie: &str) {
	if let Ok(value) = HeaderValue::from_str(cookie) {
		headers.append(SET_COOKIE, value);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn headers_with_cookie(value: &'static str) -> HeaderMap {
		let mut headers = HeaderMap::new();
		headers.insert(COOKIE, HeaderValue::from_static(value));
		headers
	}

	#[test]
	fn reads_named_cookie() {
		let headers = headers_with_cookie("theme=dark; vitrine_lang=he; other=1");
		assert_eq!(read_cookie(&headers, LANG_COOKIE).as_deref(), Some("he"));
		assert_eq!(read_cookie(&headers, "missing"), None);
	}

	#[test]
	fn prefix_names_do_not_match() {
		let headers = headers_with_cookie("vitrine_lang_session=geo");
		assert_eq!(read_cookie(&headers, LANG_COOKIE), None);
		assert!(read_session(&headers).geo_attempted);
	}

	#[test]
	fn missing_session_cookie_is_fresh() {
		let state = read_session(&HeaderMap::new());
		assert_eq!(state, SessionState::default());
	}

	#[test]
	fn session_flags_encode() {
		let mut state = SessionState::default();
		assert_eq!(encode_session(&state), "none");
		state.geo_attempted = true;
		assert_eq!(encode_session(&state), "geo");
		state.explicit_choice = true;
		assert_eq!(encode_session(&state), "explicit.geo");
	}

	#[test]
	fn language_cookie_lasts_a_year() {
		let cookie = language_cookie(Language::Fr);
		assert!(cookie.starts_with("vitrine_lang=fr;"));
		assert!(cookie.contains("Max-Age=31536000"));
		assert!(cookie.contains("SameSite=Lax"));
	}

	#[test]
	fn session_cookie_has_no_max_age() {
		let cookie = session_cookie(&SessionState::default());
		assert!(!cookie.contains("Max-Age"));
	}

	proptest! {
		#[test]
		fn session_flags_survive_cookie(explicit in any::<bool>(), geo in any::<bool>()) {
			let state = SessionState { explicit_choice: explicit, geo_attempted: geo };
			prop_assert_eq!(decode_session(&encode_session(&state)), state);
		}

		#[test]
		fn decode_session_never_panics(value in ".{0,64}") {
			let _ = decode_session(&value);
		}
	}
}
