// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Internationalization helpers for API responses.

use axum::http::{header::ACCEPT_LANGUAGE, HeaderMap};
use vitrine_common_i18n::{language_from_accept_language, Language};

use crate::cookies::{read_cookie, LANG_COOKIE};

/// Resolve the language for API response messages.
///
/// Priority:
/// 1. Saved choice cookie (if supported)
/// 2. `Accept-Language`
/// 3. Server's default language
///
/// Never performs a network lookup.
pub fn request_language(headers: &HeaderMap, default: Language) -> Language {
	read_cookie(headers, LANG_COOKIE)
		.and_then(|code| Language::from_tag(&code))
		.or_else(|| {
			headers
				.get(ACCEPT_LANGUAGE)
				.and_then(|v| v.to_str().ok())
				.and_then(language_from_accept_language)
		})
		.unwrap_or(default)
}

// Re-export commonly used i18n functions for convenience
pub use vitrine_common_i18n::t;
