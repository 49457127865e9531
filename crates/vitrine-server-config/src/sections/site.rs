// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Site content configuration.

use std::path::PathBuf;

use serde::Deserialize;
use vitrine_common_i18n::{Language, DEFAULT_LANGUAGE};

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct SiteConfig {
	/// Pre-built front end served for non-API paths.
	pub web_dir: Option<PathBuf>,
	pub default_locale: Language,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			web_dir: None,
			default_locale: DEFAULT_LANGUAGE,
		}
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfigLayer {
	#[serde(default)]
	pub web_dir: Option<String>,
	#[serde(default)]
	pub default_locale: Option<String>,
}

impl SiteConfigLayer {
	pub fn merge(&mut self, other: SiteConfigLayer) {
		if other.web_dir.is_some() {
			self.web_dir = other.web_dir;
		}
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
	}

	pub fn finalize(self) -> Result<SiteConfig, ConfigError> {
		let default_locale = match self.default_locale {
			Some(code) => code.parse::<Language>().map_err(|e| ConfigError::InvalidValue {
				key: "VITRINE_SERVER_DEFAULT_LOCALE".to_string(),
				message: e.to_string(),
			})?,
			None => DEFAULT_LANGUAGE,
		};

		Ok(SiteConfig {
			web_dir: self.web_dir.filter(|d| !d.is_empty()).map(PathBuf::from),
			default_locale,
		})
	}
}
