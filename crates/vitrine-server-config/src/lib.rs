// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for the Vitrine server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`VITRINE_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use vitrine_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}:{}", config.http.host, config.http.port);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub backend: BackendConfig,
	pub geoip: GeoIpConfig,
	pub site: SiteConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`VITRINE_SERVER_*`)
/// 2. Config file (`/etc/vitrine/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![Box::new(EnvSource)];
	load_from_sources(sources)
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	let sources: Vec<Box<dyn ConfigSource>> = vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	];
	load_from_sources(sources)
}

#[tracing::instrument(level = "debug", skip_all)]
fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
pub fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let backend = layer.backend.unwrap_or_default().finalize()?;
	let geoip = layer.geoip.unwrap_or_default().finalize();
	let site = layer.site.unwrap_or_default().finalize()?;
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&http, &geoip)?;

	info!(
		host = %http.host,
		port = http.port,
		base_url = %http.base_url,
		backend = %backend.kind(),
		geoip_enabled = geoip.enabled,
		geoip_database = geoip.database_path.is_some(),
		default_locale = %site.default_locale,
		log_format = %logging.format,
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		backend,
		geoip,
		site,
		logging,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(http: &HttpConfig, geoip: &GeoIpConfig) -> Result<(), ConfigError> {
	if !(http.base_url.starts_with("http://") || http.base_url.starts_with("https://")) {
		return Err(ConfigError::Validation(format!(
			"VITRINE_SERVER_BASE_URL must be an absolute http(s) URL, got '{}'",
			http.base_url
		)));
	}

	if geoip.enabled && geoip.database_path.is_none() && !geoip.lookup_url.contains("{ip}") {
		return Err(ConfigError::Validation(
			"VITRINE_SERVER_GEOIP_LOOKUP_URL must contain an {ip} placeholder".to_string(),
		));
	}

	if geoip.timeout_ms == 0 {
		return Err(ConfigError::Validation(
			"VITRINE_SERVER_GEOIP_TIMEOUT_MS must be greater than zero".to_string(),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use vitrine_common_config::Secret;
	use vitrine_common_i18n::Language;

	fn sqlite_layer() -> ServerConfigLayer {
		ServerConfigLayer {
			backend: Some(BackendConfigLayer {
				kind: Some(BackendKind::Sqlite),
				..Default::default()
			}),
			..Default::default()
		}
	}

	#[test]
	fn test_defaults_require_hosted_secrets() {
		let err = finalize(ServerConfigLayer::default()).unwrap_err();
		assert!(matches!(err, ConfigError::MissingEnvVar(_)));
	}

	#[test]
	fn test_sqlite_defaults_resolve() {
		let config = finalize(sqlite_layer()).unwrap();
		assert_eq!(config.backend.kind(), BackendKind::Sqlite);
		assert_eq!(config.site.default_locale, Language::En);
		assert_eq!(config.logging.format, LogFormat::Pretty);
		assert_eq!(config.geoip.timeout_ms, 1200);
		assert_eq!(config.socket_addr(), "0.0.0.0:8080");
	}

	#[test]
	fn test_hosted_with_secrets_resolves() {
		let layer = ServerConfigLayer {
			backend: Some(BackendConfigLayer {
				url: Some(Secret::new("https://abc.backend.example".to_string())),
				api_key: Some(Secret::new("anon".to_string())),
				..Default::default()
			}),
			..Default::default()
		};
		let config = finalize(layer).unwrap();
		assert_eq!(config.backend.kind(), BackendKind::Hosted);
	}

	#[test]
	fn test_relative_base_url_rejected() {
		let mut layer = sqlite_layer();
		layer.http = Some(HttpConfigLayer {
			base_url: Some("studio.example".to_string()),
			..Default::default()
		});
		assert!(matches!(finalize(layer), Err(ConfigError::Validation(_))));
	}

	#[test]
	fn test_lookup_url_without_placeholder_rejected() {
		let mut layer = sqlite_layer();
		layer.geoip = Some(GeoIpConfigLayer {
			lookup_url: Some("https://ipapi.co/json/".to_string()),
			..Default::default()
		});
		assert!(matches!(finalize(layer), Err(ConfigError::Validation(_))));
	}

	#[test]
	fn test_lookup_url_ignored_when_geoip_disabled() {
		let mut layer = sqlite_layer();
		layer.geoip = Some(GeoIpConfigLayer {
			enabled: Some(false),
			lookup_url: Some("https://ipapi.co/json/".to_string()),
			..Default::default()
		});
		assert!(finalize(layer).is_ok());
	}

	#[test]
	fn test_zero_timeout_rejected() {
		let mut layer = sqlite_layer();
		layer.geoip = Some(GeoIpConfigLayer {
			timeout_ms: Some(0),
			..Default::default()
		});
		assert!(matches!(finalize(layer), Err(ConfigError::Validation(_))));
	}

	#[test]
	fn test_file_layer_overrides_defaults() {
		let toml_str = r#"
[http]
base_url = "https://studio.example/"

[backend]
kind = "sqlite"
sqlite_url = "sqlite:/var/lib/vitrine/contact.db"

[site]
default_locale = "fr"
"#;
		let mut merged = DefaultsSource.load().unwrap();
		merged.merge(toml::from_str(toml_str).unwrap());
		let config = finalize(merged).unwrap();

		assert_eq!(config.http.base_url, "https://studio.example");
		assert_eq!(config.site.default_locale, Language::Fr);
		match config.backend {
			BackendConfig::Sqlite { url } => assert_eq!(url, "sqlite:/var/lib/vitrine/contact.db"),
			other => panic!("expected sqlite backend, got {other:?}"),
		}
	}
}
