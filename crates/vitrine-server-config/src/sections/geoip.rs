// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! GeoIP configuration section.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_GEOIP_TIMEOUT_MS: u64 = 1200;
pub const DEFAULT_LOOKUP_URL: &str = "https://ipapi.co/{ip}/json/";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeoIpConfigLayer {
	pub enabled: Option<bool>,
	pub database_path: Option<String>,
	pub lookup_url: Option<String>,
	pub timeout_ms: Option<u64>,
}

impl GeoIpConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.enabled.is_some() {
			self.enabled = other.enabled;
		}
		if other.database_path.is_some() {
			self.database_path = other.database_path;
		}
		if other.lookup_url.is_some() {
			self.lookup_url = other.lookup_url;
		}
		if other.timeout_ms.is_some() {
			self.timeout_ms = other.timeout_ms;
		}
	}

	pub fn finalize(self) -> GeoIpConfig {
		GeoIpConfig {
			enabled: self.enabled.unwrap_or(true),
			database_path: self.database_path.filter(|p| !p.is_empty()),
			lookup_url: self
				.lookup_url
				.unwrap_or_else(|| DEFAULT_LOOKUP_URL.to_string()),
			timeout_ms: self.timeout_ms.unwrap_or(DEFAULT_GEOIP_TIMEOUT_MS),
		}
	}
}

/// A local database, when configured, is preferred over the lookup URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoIpConfig {
	pub enabled: bool,
	pub database_path: Option<String>,
	pub lookup_url: String,
	pub timeout_ms: u64,
}

impl Default for GeoIpConfig {
	fn default() -> Self {
		GeoIpConfigLayer::default().finalize()
	}
}

impl GeoIpConfig {
	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}
}
