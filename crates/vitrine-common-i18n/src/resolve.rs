// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language resolution pass.
//!
//! Sources are evaluated in strict priority order and the first one that
//! yields a supported language wins:
//!
//! 1. URL query parameter
//! 2. Persisted user choice
//! 3. Timezone, then browser language
//! 4. IP geolocation (at most once per session, never after an explicit choice)
//! 5. Configured default

use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::detect::{detect_client_signal, language_from_country};
use crate::locale::Language;

/// Upper bound on a geolocation lookup.
pub const DEFAULT_GEO_TIMEOUT: Duration = Duration::from_millis(1200);

/// Where the resolved language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageSource {
	#[serde(rename = "url")]
	UrlParam,
	Stored,
	Timezone,
	Browser,
	Geolocation,
	Default,
	/// Set by the user through the language switcher.
	Explicit,
}

impl fmt::Display for LanguageSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			LanguageSource::UrlParam => "url",
			LanguageSource::Stored => "stored",
			LanguageSource::Timezone => "timezone",
			LanguageSource::Browser => "browser",
			LanguageSource::Geolocation => "geolocation",
			LanguageSource::Default => "default",
			LanguageSource::Explicit => "explicit",
		};
		f.write_str(s)
	}
}

/// Per-session flags that gate the geolocation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
	pub explicit_choice: bool,
	pub geo_attempted: bool,
}

impl SessionState {
	pub fn record_explicit_choice(&mut self) {
		self.explicit_choice = true;
	}

	/// Whether an automatic geolocation override is still allowed.
	pub fn allows_geolocation(&self) -> bool {
		!self.explicit_choice && !self.geo_attempted
	}
}

/// Raw signals gathered from a request. Values are unvalidated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolutionInputs<'a> {
	pub url_param: Option<&'a str>,
	pub stored: Option<&'a str>,
	pub timezone: Option<&'a str>,
	pub accept_language: Option<&'a str>,
	pub client_ip: Option<IpAddr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
	pub language: Language,
	pub source: LanguageSource,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
	#[error("geolocation lookup timed out")]
	Timeout,

	#[error("geolocation lookup failed: {0}")]
	Failed(String),
}

/// Resolves an IP address to an ISO country code.
#[async_trait]
pub trait CountryLookup: Send + Sync {
	fn name(&self) -> &'static str;

	async fn country_code(&self, ip: IpAddr) -> Result<Option<String>, LookupError>;
}

fn local_signal(inputs: &ResolutionInputs<'_>) -> Option<Resolution> {
	if let Some(language) = inputs.url_param.and_then(Language::from_tag) {
		return Some(Resolution {
			language,
			source: LanguageSource::UrlParam,
		});
	}

	if let Some(language) = inputs.stored.and_then(Language::from_tag) {
		return Some(Resolution {
			language,
			source: LanguageSource::Stored,
		});
	}

	detect_client_signal(inputs.timezone, inputs.accept_language)
		.map(|(language, source)| Resolution { language, source })
}

/// Runs resolution passes with an optional injected geolocation service.
#[derive(Clone)]
pub struct LanguageResolver {
	default: Language,
	geo_timeout: Duration,
	geolocator: Option<Arc<dyn CountryLookup>>,
}

impl fmt::Debug for LanguageResolver {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LanguageResolver")
			.field("default", &self.default)
			.field("geo_timeout", &self.geo_timeout)
			.field("geolocator", &self.geolocator.as_ref().map(|g| g.name()))
			.finish()
	}
}

impl LanguageResolver {
	pub fn new(default: Language) -> Self {
		Self {
			default,
			geo_timeout: DEFAULT_GEO_TIMEOUT,
			geolocator: None,
		}
	}

	pub fn with_geolocator(mut self, geolocator: Arc<dyn CountryLookup>) -> Self {
		self.geolocator = Some(geolocator);
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.geo_timeout = timeout;
		self
	}

	pub fn default_language(&self) -> Language {
		self.default
	}

	pub fn has_geolocator(&self) -> bool {
		self.geolocator.is_some()
	}

	pub fn geolocator_name(&self) -> Option<&'static str> {
		self.geolocator.as_ref().map(|g| g.name())
	}

	pub fn geo_timeout(&self) -> Duration {
		self.geo_timeout
	}

	/// Run one resolution pass, updating `session` when geolocation is tried.
	#[tracing::instrument(level = "debug", skip(self, inputs, session), fields(source, language))]
	pub async fn resolve(
		&self,
		inputs: &ResolutionInputs<'_>,
		session: &mut SessionState,
	) -> Resolution {
		let resolution = match local_signal(inputs) {
			Some(resolution) => resolution,
			None => match self.geolocate(inputs.client_ip, session).await {
				Some(language) => Resolution {
					language,
					source: LanguageSource::Geolocation,
				},
				None => Resolution {
					language: self.default,
					source: LanguageSource::Default,
				},
			},
		};

		let span = tracing::Span::current();
		span.record("source", tracing::field::display(resolution.source));
		span.record("language", tracing::field::display(resolution.language));
		resolution
	}

	async fn geolocate(&self, ip: Option<IpAddr>, session: &mut SessionState) -> Option<Language> {
		if !session.allows_geolocation() {
			return None;
		}
		let geolocator = self.geolocator.as_ref()?;
		let ip = ip?;

		session.geo_attempted = true;

		let outcome = tokio::time::timeout(self.geo_timeout, geolocator.country_code(ip))
			.await
			.unwrap_or(Err(LookupError::Timeout));

		match outcome {
			Ok(Some(country)) => {
				let language = language_from_country(&country);
				tracing::debug!(%ip, country = %country, ?language, "geolocation lookup succeeded");
				language
			}
			Ok(None) => {
				tracing::debug!(%ip, "geolocation returned no country");
				None
			}
			Err(e) => {
				tracing::debug!(%ip, error = %e, lookup = geolocator.name(), "geolocation lookup ignored");
				None
			}
		}
	}
}
