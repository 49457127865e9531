// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Inferring a language from client signals: timezone, browser language and
//! geolocated country.

use crate::locale::Language;
use crate::resolve::LanguageSource;

const HEBREW_TIMEZONES: &[&str] = &["Asia/Jerusalem", "Asia/Tel_Aviv", "Israel"];

const FRENCH_TIMEZONES: &[&str] = &[
	"Europe/Paris",
	"Europe/Brussels",
	"Europe/Luxembourg",
	"Europe/Monaco",
	"Indian/Reunion",
	"Indian/Mayotte",
	"America/Martinique",
	"America/Guadeloupe",
	"America/Cayenne",
	"America/Miquelon",
	"Pacific/Tahiti",
	"Pacific/Noumea",
	"Pacific/Wallis",
];

const HEBREW_COUNTRIES: &[&str] = &["IL"];

const FRENCH_COUNTRIES: &[&str] = &[
	"FR", "BE", "LU", "MC", "CH", "RE", "GP", "MQ", "GF", "YT", "NC", "PF", "PM", "WF", "BL",
	"MF",
];

/// Map an IANA timezone to a language. Unlisted zones give no signal.
pub fn language_from_timezone(timezone: &str) -> Option<Language> {
	let tz = timezone.trim();
	if HEBREW_TIMEZONES.contains(&tz) {
		Some(Language::He)
	} else if FRENCH_TIMEZONES.contains(&tz) {
		Some(Language::Fr)
	} else {
		None
	}
}

/// Map an ISO 3166-1 alpha-2 country code to a language.
pub fn language_from_country(country_code: &str) -> Option<Language> {
	let code = country_code.trim().to_ascii_uppercase();
	if HEBREW_COUNTRIES.contains(&code.as_str()) {
		Some(Language::He)
	} else if FRENCH_COUNTRIES.contains(&code.as_str()) {
		Some(Language::Fr)
	} else {
		None
	}
}

/// Pick the highest-weighted supported language from an `Accept-Language`
/// header value.
///
/// Entries without a `q` parameter weigh 1.0; entries with `q=0` or an
/// unparsable weight are skipped. Ties keep header order.
pub fn language_from_accept_language(header: &str) -> Option<Language> {
	let mut best: Option<(Language, f32)> = None;

	for entry in header.split(',') {
		let mut parts = entry.split(';');
		let tag = parts.next().unwrap_or("").trim();
		if tag.is_empty() || tag == "*" {
			continue;
		}

		let mut weight = 1.0f32;
		for param in parts {
			if let Some(q) = param.trim().strip_prefix("q=") {
				weight = q.trim().parse().unwrap_or(0.0);
			}
		}
		if weight <= 0.0 {
			continue;
		}

		if let Some(lang) = Language::from_tag(tag) {
			if best.map_or(true, |(_, w)| weight > w) {
				best = Some((lang, weight));
			}
		}
	}

	best.map(|(lang, _)| lang)
}

/// Client-side detection step: timezone first, then browser language.
pub fn detect_client_signal(
	timezone: Option<&str>,
	accept_language: Option<&str>,
) -> Option<(Language, LanguageSource)> {
	if let Some(lang) = timezone.and_then(language_from_timezone) {
		return Some((lang, LanguageSource::Timezone));
	}

	accept_language
		.and_then(language_from_accept_language)
		.map(|lang| (lang, LanguageSource::Browser))
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn accept_language_never_panics(header in "\\PC{0,100}") {
			let _ = language_from_accept_language(&header);
		}

		#[test]
		fn single_supported_entry_is_chosen(q in 1u32..=1000) {
			let header = format!("de;q=0.001,he;q={:.3}", q as f32 / 1000.0);
			prop_assert_eq!(language_from_accept_language(&header), Some(Language::He));
		}
	}
}
