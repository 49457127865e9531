// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health check types and component checking logic.

use serde::Serialize;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout, Instant};
use utoipa::ToSchema;

use vitrine_common_i18n::LanguageResolver;
use vitrine_server_db::ContactStore;
use vitrine_server_geoip::GeoIpService;

use crate::version::HealthVersionInfo;

/// Health status for components and overall system.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
	Healthy,
	Degraded,
	Unhealthy,
}

/// Contact store component health.
#[derive(Debug, Serialize, ToSchema)]
pub struct ContactStoreHealth {
	pub status: HealthStatus,
	pub latency_ms: u64,
	pub backend: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

/// Geolocation component health.
#[derive(Debug, Serialize, ToSchema)]
pub struct GeoLocationHealth {
	pub status: HealthStatus,
	pub latency_ms: u64,
	pub configured: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub provider: Option<String>,
	pub timeout_ms: u64,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub database_path: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub database_type: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
}

/// All component health statuses.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthComponents {
	pub contact_store: ContactStoreHealth,
	pub geolocation: GeoLocationHealth,
}

/// Complete health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
	pub status: HealthStatus,
	pub timestamp: String,
	pub duration_ms: u64,
	pub version: HealthVersionInfo,
	pub components: HealthComponents,
}

pub const STORE_CHECK_TIMEOUT: Duration = Duration::from_millis(500);

const PROBE_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8));

/// Check contact store health.
pub async fn check_contact_store(store: &dyn ContactStore) -> ContactStoreHealth {
	check_contact_store_with_timeout(store, STORE_CHECK_TIMEOUT).await
}

pub async fn check_contact_store_with_timeout(
	store: &dyn ContactStore,
	limit: Duration,
) -> ContactStoreHealth {
	let start = Instant::now();

	let result = timeout(limit, store.health_check()).await;
	let latency_ms = start.elapsed().as_millis() as u64;
	let backend = store.backend_name().to_string();

	match result {
		Ok(Ok(())) => ContactStoreHealth {
			status: HealthStatus::Healthy,
			latency_ms,
			backend,
			error: None,
		},
		Ok(Err(e)) => ContactStoreHealth {
			status: HealthStatus::Unhealthy,
			latency_ms,
			backend,
			error: Some(e.to_string()),
		},
		Err(_) => ContactStoreHealth {
			status: HealthStatus::Unhealthy,
			latency_ms,
			backend,
			error: Some("contact store health check timed out".to_string()),
		},
	}
}

/// Check geolocation health.
///
/// A MaxMind database is probed with a local lookup. HTTP providers are not
/// called from health checks.
pub fn check_geolocation(
	resolver: &LanguageResolver,
	geoip_service: Option<&Arc<GeoIpService>>,
) -> GeoLocationHealth {
	let start = Instant::now();
	let timeout_ms = resolver.geo_timeout().as_millis() as u64;

	let Some(provider) = resolver.geolocator_name() else {
		return GeoLocationHealth {
			status: HealthStatus::Degraded,
			latency_ms: start.elapsed().as_millis() as u64,
			configured: false,
			provider: None,
			timeout_ms,
			database_path: None,
			database_type: None,
			error: Some("geolocation not configured".to_string()),
		};
	};

	let (status, database_path, database_type, error) = match geoip_service {
		Some(svc) => {
			let path = Some(svc.database_path().to_string());
			match svc.lookup(PROBE_IP) {
				Ok(_) => (
					HealthStatus::Healthy,
					path,
					Some(svc.database_metadata().database_type),
					None,
				),
				Err(e) => (
					HealthStatus::Unhealthy,
					path,
					None,
					Some(format!("GeoIP database lookup failed: {e}")),
				),
			}
		}
		None => (HealthStatus::Healthy, None, None, None),
	};

	GeoLocationHealth {
		status,
		latency_ms: start.elapsed().as_millis() as u64,
		configured: true,
		provider: Some(provider.to_string()),
		timeout_ms,
		database_path,
		database_type,
		error,
	}
}

/// Aggregate component statuses into overall status.
pub fn aggregate_status(components: &HealthComponents) -> HealthStatus {
	let statuses = [components.contact_store.status, components.geolocation.status];

	if statuses
		.iter()
		.any(|s| matches!(s, HealthStatus::Unhealthy))
	{
		HealthStatus::Unhealthy
	} else if statuses.iter().any(|s| matches!(s, HealthStatus::Degraded)) {
		HealthStatus::Degraded
	} else {
		HealthStatus::Healthy
	}
}
