// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported languages and their metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Text direction for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	Ltr,
	Rtl,
}

impl Direction {
	/// Returns the HTML `dir` attribute value.
	pub fn as_html_dir(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}
}

/// A language the site is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
	Fr,
	En,
	He,
}

/// Metadata about a supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleInfo {
	pub code: &'static str,
	/// English name of the language
	pub name: &'static str,
	pub native_name: &'static str,
	pub direction: Direction,
}

pub const DEFAULT_LANGUAGE: Language = Language::En;

pub const LANGUAGES: &[Language] = &[Language::Fr, Language::En, Language::He];

const FR_INFO: LocaleInfo = LocaleInfo {
	code: "fr",
	name: "French",
	native_name: "Français",
	direction: Direction::Ltr,
};

const EN_INFO: LocaleInfo = LocaleInfo {
	code: "en",
	name: "English",
	native_name: "English",
	direction: Direction::Ltr,
};

const HE_INFO: LocaleInfo = LocaleInfo {
	code: "he",
	name: "Hebrew",
	native_name: "עברית",
	direction: Direction::Rtl,
};

impl Language {
	pub fn code(&self) -> &'static str {
		self.info().code
	}

	pub fn info(&self) -> &'static LocaleInfo {
		match self {
			Language::Fr => &FR_INFO,
			Language::En => &EN_INFO,
			Language::He => &HE_INFO,
		}
	}

	pub fn direction(&self) -> Direction {
		self.info().direction
	}

	pub fn is_rtl(&self) -> bool {
		self.direction() == Direction::Rtl
	}

	/// Parse a language tag leniently.
	///
	/// Matching is case-insensitive and ignores any region or script subtag,
	/// so `fr-CA`, `FR` and `he_IL` are all accepted. `iw` is the legacy code
	/// for Hebrew.
	pub fn from_tag(tag: &str) -> Option<Language> {
		let primary = tag.trim().split(['-', '_']).next()?.to_ascii_lowercase();
		match primary.as_str() {
			"fr" => Some(Language::Fr),
			"en" => Some(Language::En),
			"he" | "iw" => Some(Language::He),
			_ => None,
		}
	}
}

impl fmt::Display for Language {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
	type Err = ParseLanguageError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Language::from_tag(s).ok_or_else(|| ParseLanguageError(s.to_string()))
	}
}
