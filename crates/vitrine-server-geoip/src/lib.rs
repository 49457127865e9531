// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Country lookup used as the last automatic language signal.
//!
//! Two implementations of [`CountryLookup`] are provided:
//!
//! - [`GeoIpService`]: a local MaxMind GeoLite2 database, configured via
//!   `VITRINE_SERVER_GEOIP_DATABASE_PATH`
//! - [`HttpGeoLocator`]: a JSON lookup service such as `ipapi.co`
//!
//! # Usage
//!
//! ```ignore
//! use vitrine_server_geoip::GeoIpService;
//!
//! let service = GeoIpService::new("/var/lib/vitrine/GeoLite2-Country.mmdb")?;
//! let country = service.lookup_country_code("8.8.8.8".parse()?)?;
//! ```

mod http;

use std::net::IpAddr;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use maxminddb::{geoip2, MaxMindDBError, Reader};
use serde::Serialize;
use vitrine_common_i18n::{CountryLookup, LookupError};

pub use http::{HttpGeoLocator, DEFAULT_LOOKUP_URL};

#[derive(Debug, thiserror::Error)]
pub enum GeoIpError {
	#[error("GeoIP database not found at path: {0}")]
	DatabaseNotFound(String),

	#[error("Failed to open GeoIP database: {0}")]
	DatabaseOpen(#[source] MaxMindDBError),

	#[error("Failed to lookup IP address: {0}")]
	Lookup(#[source] MaxMindDBError),

	#[error("Invalid lookup URL: {0}")]
	InvalidUrl(String),

	#[error("Lookup request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("Lookup service returned {status}")]
	Status { status: u16 },

	#[error("Lookup service error: {0}")]
	Service(String),
}

pub type Result<T> = std::result::Result<T, GeoIpError>;

impl From<GeoIpError> for LookupError {
	fn from(e: GeoIpError) -> Self {
		match e {
			GeoIpError::Http(ref inner) if inner.is_timeout() => LookupError::Timeout,
			other => LookupError::Failed(other.to_string()),
		}
	}
}

/// Addresses no lookup service can place: loopback, private ranges and the like.
pub fn is_routable(ip: IpAddr) -> bool {
	match ip {
		IpAddr::V4(v4) => {
			!(v4.is_loopback()
				|| v4.is_private()
				|| v4.is_link_local()
				|| v4.is_unspecified()
				|| v4.is_broadcast()
				|| v4.is_documentation())
		}
		IpAddr::V6(v6) => {
			let unique_local = (v6.segments()[0] & 0xfe00) == 0xfc00;
			let link_local = (v6.segments()[0] & 0xffc0) == 0xfe80;
			!(v6.is_loopback() || v6.is_unspecified() || unique_local || link_local)
		}
	}
}

/// Country portion of a database lookup.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CountryInfo {
	pub country: Option<String>,
	pub country_code: Option<String>,
	pub continent: Option<String>,
}

pub struct GeoIpService {
	reader: Arc<Reader<Vec<u8>>>,
	database_path: String,
}

impl std::fmt::Debug for GeoIpService {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("GeoIpService")
			.field("database_path", &self.database_path)
			.finish()
	}
}

impl GeoIpService {
	#[tracing::instrument(level = "info", skip(database_path), fields(path))]
	pub fn new<P: AsRef<Path>>(database_path: P) -> Result<Self> {
		let path = database_path.as_ref();
		let path_str = path.display().to_string();
		tracing::Span::current().record("path", &path_str);

		if !path.exists() {
			return Err(GeoIpError::DatabaseNotFound(path_str));
		}

		let reader = Reader::open_readfile(path).map_err(GeoIpError::DatabaseOpen)?;

		tracing::info!(database_type = %reader.metadata.database_type, "GeoIP database loaded");

		Ok(Self {
			reader: Arc::new(reader),
			database_path: path_str,
		})
	}

	pub fn database_path(&self) -> &str {
		&self.database_path
	}

	/// Look up the country of `ip`. An address absent from the database is `Ok(None)`.
	#[tracing::instrument(level = "trace", skip(self), fields(ip = %ip))]
	pub fn lookup(&self, ip: IpAddr) -> Result<Option<CountryInfo>> {
		let record: geoip2::Country = match self.reader.lookup(ip) {
			Ok(record) => record,
			Err(MaxMindDBError::AddressNotFoundError(_)) => return Ok(None),
			Err(e) => return Err(GeoIpError::Lookup(e)),
		};

		Ok(Some(CountryInfo {
			country: record
				.country
				.as_ref()
				.and_then(|c| c.names.as_ref())
				.and_then(|n| n.get("en").copied())
				.map(String::from),
			country_code: record
				.country
				.as_ref()
				.and_then(|c| c.iso_code)
				.map(String::from),
			continent: record
				.continent
				.and_then(|c| c.names)
				.and_then(|n| n.get("en").copied())
				.map(String::from),
		}))
	}

	pub fn lookup_country_code(&self, ip: IpAddr) -> Result<Option<String>> {
		Ok(self.lookup(ip)?.and_then(|info| info.country_code))
	}

	pub fn database_metadata(&self) -> DatabaseMetadata {
		let metadata = &self.reader.metadata;
		DatabaseMetadata {
			database_type: metadata.database_type.clone(),
			build_epoch: metadata.build_epoch,
			node_count: metadata.node_count,
			ip_version: metadata.ip_version,
		}
	}
}

#[async_trait]
impl CountryLookup for GeoIpService {
	fn name(&self) -> &'static str {
		"maxmind"
	}

	async fn country_code(&self, ip: IpAddr) -> std::result::Result<Option<String>, LookupError> {
		if !is_routable(ip) {
			return Ok(None);
		}
		Ok(self.lookup_country_code(ip)?)
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct DatabaseMetadata {
	pub database_type: String,
	pub build_epoch: u64,
	pub node_count: u32,
	pub ip_version: u16,
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;
	use std::net::Ipv4Addr;

	proptest! {
		#[test]
		fn test_ten_slash_eight_never_routable(b in any::<u8>(), c in any::<u8>(), d in any::<u8>()) {
			prop_assert!(!is_routable(IpAddr::V4(Ipv4Addr::new(10, b, c, d))));
		}

		#[test]
		fn test_is_routable_does_not_panic(raw in any::<u128>()) {
			let _ = is_routable(IpAddr::V6(raw.into()));
		}
	}
}
