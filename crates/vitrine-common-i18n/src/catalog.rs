// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Compiled-in JSON dictionaries and translation functions.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;

use crate::locale::{Language, DEFAULT_LANGUAGE, LANGUAGES};

type Dictionary = BTreeMap<String, String>;

const EN_JSON: &str = include_str!("../locales/en.json");
const FR_JSON: &str = include_str!("../locales/fr.json");
const HE_JSON: &str = include_str!("../locales/he.json");

fn source(lang: Language) -> &'static str {
	match lang {
		Language::En => EN_JSON,
		Language::Fr => FR_JSON,
		Language::He => HE_JSON,
	}
}

static CATALOGS: Lazy<HashMap<Language, Dictionary>> = Lazy::new(|| {
	let mut map = HashMap::new();

	for &lang in LANGUAGES {
		match serde_json::from_str::<Dictionary>(source(lang)) {
			Ok(dict) => {
				map.insert(lang, dict);
			}
			Err(e) if lang == DEFAULT_LANGUAGE => {
				tracing::error!(language = %lang, error = %e, "Failed to parse default dictionary");
			}
			Err(e) => {
				tracing::warn!(language = %lang, error = %e, "Failed to parse dictionary");
			}
		}
	}

	map
});

fn lookup(lang: Language, key: &str) -> Option<&'static str> {
	CATALOGS
		.get(&lang)
		.and_then(|dict| dict.get(key))
		.map(String::as_str)
}

/// Translate a key for the given language.
///
/// Falls back to English, then to the key itself.
///
/// ```
/// use vitrine_common_i18n::{t, Language};
///
/// assert_eq!(t(Language::Fr, "nav.projects"), "Projets");
/// assert_eq!(t(Language::Fr, "no.such.key"), "no.such.key");
/// ```
pub fn t(lang: Language, key: &str) -> String {
	lookup(lang, key)
		.or_else(|| lookup(DEFAULT_LANGUAGE, key))
		.unwrap_or(key)
		.to_string()
}

/// Translate a key and substitute `{name}` placeholders.
///
/// ```
/// use vitrine_common_i18n::{t_fmt, Language};
///
/// let text = t_fmt(Language::En, "footer.copyright", &[("year", "2025")]);
/// assert!(text.contains("2025"));
/// ```
pub fn t_fmt(lang: Language, key: &str, args: &[(&str, &str)]) -> String {
	args.iter().fold(t(lang, key), |text, (name, value)| {
		text.replace(&format!("{{{name}}}"), value)
	})
}

/// The full dictionary for `lang`, with keys it lacks filled in from English.
pub fn dictionary(lang: Language) -> BTreeMap<String, String> {
	let mut merged = CATALOGS.get(&DEFAULT_LANGUAGE).cloned().unwrap_or_default();
	if lang != DEFAULT_LANGUAGE {
		if let Some(dict) = CATALOGS.get(&lang) {
			merged.extend(dict.iter().map(|(k, v)| (k.clone(), v.clone())));
		}
	}
	merged
}
