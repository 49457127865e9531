// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact submission backend configuration.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use vitrine_common_config::SecretString;

use crate::error::ConfigError;

pub const BACKEND_URL_ENV: &str = "VITRINE_SERVER_BACKEND_URL";
pub const BACKEND_API_KEY_ENV: &str = "VITRINE_SERVER_BACKEND_API_KEY";

fn default_sqlite_url() -> String {
	"sqlite:./vitrine.db".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
	/// Hosted PostgREST backend. Production default.
	#[default]
	Hosted,
	/// Local SQLite file, for development and tests.
	Sqlite,
}

impl fmt::Display for BackendKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BackendKind::Hosted => f.write_str("hosted"),
			BackendKind::Sqlite => f.write_str("sqlite"),
		}
	}
}

impl FromStr for BackendKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"hosted" => Ok(BackendKind::Hosted),
			"sqlite" => Ok(BackendKind::Sqlite),
			other => Err(format!("unknown backend '{other}' (expected hosted or sqlite)")),
		}
	}
}

/// Credentials for the hosted backend.
#[derive(Debug, Clone)]
pub struct HostedBackendConfig {
	pub url: String,
	pub api_key: SecretString,
}

/// Backend configuration (runtime, fully resolved).
#[derive(Debug, Clone)]
pub enum BackendConfig {
	Hosted(HostedBackendConfig),
	Sqlite { url: String },
}

impl BackendConfig {
	pub fn kind(&self) -> BackendKind {
		match self {
			BackendConfig::Hosted(_) => BackendKind::Hosted,
			BackendConfig::Sqlite { .. } => BackendKind::Sqlite,
		}
	}
}

/// Backend configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BackendConfigLayer {
	#[serde(default)]
	pub kind: Option<BackendKind>,
	#[serde(default)]
	pub url: Option<SecretString>,
	#[serde(default)]
	pub api_key: Option<SecretString>,
	#[serde(default)]
	pub sqlite_url: Option<String>,
}

impl BackendConfigLayer {
	pub fn merge(&mut self, other: BackendConfigLayer) {
		if other.kind.is_some() {
			self.kind = other.kind;
		}
		if other.url.is_some() {
			self.url = other.url;
		}
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.sqlite_url.is_some() {
			self.sqlite_url = other.sqlite_url;
		}
	}

	/// Resolve the backend. The hosted backend cannot start without both secrets.
	pub fn finalize(self) -> Result<BackendConfig, ConfigError> {
		match self.kind.unwrap_or_default() {
			BackendKind::Sqlite => Ok(BackendConfig::Sqlite {
				url: self.sqlite_url.unwrap_or_else(default_sqlite_url),
			}),
			BackendKind::Hosted => {
				let url = self
					.url
					.map(|u| u.expose().trim().trim_end_matches('/').to_string())
					.filter(|u| !u.is_empty())
					.ok_or_else(|| missing(BACKEND_URL_ENV))?;
				let api_key = self
					.api_key
					.filter(|k| !k.expose().trim().is_empty())
					.ok_or_else(|| missing(BACKEND_API_KEY_ENV))?;

				if !(url.starts_with("https://") || url.starts_with("http://")) {
					return Err(ConfigError::InvalidValue {
						key: BACKEND_URL_ENV.to_string(),
						message: "must be an http(s) URL".to_string(),
					});
				}

				Ok(BackendConfig::Hosted(HostedBackendConfig { url, api_key }))
			}
		}
	}
}

fn missing(var: &str) -> ConfigError {
	ConfigError::MissingEnvVar(format!("{var} (or {var}_FILE)"))
}
