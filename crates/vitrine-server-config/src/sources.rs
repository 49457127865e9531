// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use tracing::{debug, trace};
use vitrine_common_config::load_secret_env;

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::backend::{BACKEND_API_KEY_ENV, BACKEND_URL_ENV};
use crate::sections::{
	BackendConfigLayer, BackendKind, GeoIpConfigLayer, HttpConfigLayer, LogFormat,
	LoggingConfigLayer, SiteConfigLayer,
};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/vitrine/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: VITRINE_SERVER_<SECTION>_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		Ok(ServerConfigLayer {
			http: Some(load_http_from_env()?),
			backend: Some(load_backend_from_env()?),
			geoip: Some(load_geoip_from_env()?),
			site: Some(load_site_from_env()),
			logging: Some(load_logging_from_env()?),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_bool(name: &str) -> Option<bool> {
	env_var(name).map(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

fn env_u16(name: &str) -> Result<Option<u16>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u16 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn env_u64(name: &str) -> Result<Option<u64>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u64 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn env_parsed<T>(name: &str) -> Result<Option<T>, ConfigError>
where
	T: std::str::FromStr<Err = String>,
{
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|message| ConfigError::InvalidValue {
			key: name.to_string(),
			message,
		}),
		None => Ok(None),
	}
}

fn load_http_from_env() -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: env_var("VITRINE_SERVER_HOST"),
		port: env_u16("VITRINE_SERVER_PORT")?,
		base_url: env_var("VITRINE_SERVER_BASE_URL"),
	})
}

fn load_backend_from_env() -> Result<BackendConfigLayer, ConfigError> {
	Ok(BackendConfigLayer {
		kind: env_parsed::<BackendKind>("VITRINE_SERVER_BACKEND")?,
		url: load_secret_env(BACKEND_URL_ENV).map_err(|e| ConfigError::Secret(e.to_string()))?,
		api_key: load_secret_env(BACKEND_API_KEY_ENV)
			.map_err(|e| ConfigError::Secret(e.to_string()))?,
		sqlite_url: env_var("VITRINE_SERVER_DATABASE_URL"),
	})
}

fn load_geoip_from_env() -> Result<GeoIpConfigLayer, ConfigError> {
	Ok(GeoIpConfigLayer {
		enabled: env_bool("VITRINE_SERVER_GEOIP_ENABLED"),
		database_path: env_var("VITRINE_SERVER_GEOIP_DATABASE_PATH"),
		lookup_url: env_var("VITRINE_SERVER_GEOIP_LOOKUP_URL"),
		timeout_ms: env_u64("VITRINE_SERVER_GEOIP_TIMEOUT_MS")?,
	})
}

fn load_site_from_env() -> SiteConfigLayer {
	SiteConfigLayer {
		web_dir: env_var("VITRINE_SERVER_WEB_DIR"),
		default_locale: env_var("VITRINE_SERVER_DEFAULT_LOCALE"),
	}
}

fn load_logging_from_env() -> Result<LoggingConfigLayer, ConfigError> {
	Ok(LoggingConfigLayer {
		level: env_var("VITRINE_SERVER_LOG_LEVEL"),
		format: env_parsed::<LogFormat>("VITRINE_SERVER_LOG_FORMAT")?,
	})
}
