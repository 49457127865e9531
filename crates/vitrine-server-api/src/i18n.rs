// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vitrine_common_i18n::{dictionary, Direction, Language, LanguageSource, LANGUAGES};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LanguageInfoResponse {
	pub code: String,
	pub name: String,
	pub native_name: String,
	pub dir: String,
}

impl From<Language> for LanguageInfoResponse {
	fn from(lang: Language) -> Self {
		let info = lang.info();
		Self {
			code: info.code.to_string(),
			name: info.name.to_string(),
			native_name: info.native_name.to_string(),
			dir: info.direction.as_html_dir().to_string(),
		}
	}
}

/// Active language, where it came from, and the dictionary to render with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct LanguageResponse {
	#[cfg_attr(feature = "openapi", schema(value_type = String, example = "fr"))]
	pub language: Language,
	#[cfg_attr(feature = "openapi", schema(value_type = String, example = "ltr"))]
	pub dir: Direction,
	#[cfg_attr(feature = "openapi", schema(value_type = String, example = "timezone"))]
	pub source: LanguageSource,
	pub available: Vec<LanguageInfoResponse>,
	pub dictionary: BTreeMap<String, String>,
}

impl LanguageResponse {
	pub fn new(language: Language, source: LanguageSource) -> Self {
		Self {
			language,
			dir: language.direction(),
			source,
			available: LANGUAGES.iter().copied().map(LanguageInfoResponse::from).collect(),
			dictionary: dictionary(language),
		}
	}
}

/// Body of `PUT /api/i18n/language`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SetLanguageRequest {
	pub language: String,
}
