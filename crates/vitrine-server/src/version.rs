// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Build information and version utilities for vitrine-server.

use serde::Serialize;
use utoipa::ToSchema;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version block embedded in health responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthVersionInfo {
	pub version: String,
	pub platform: String,
}

impl HealthVersionInfo {
	pub fn current() -> Self {
		Self {
			version: VERSION.to_string(),
			platform: platform(),
		}
	}
}

fn platform() -> String {
	format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}

/// Format version info for display.
pub fn format_version_info() -> String {
	let profile = if cfg!(debug_assertions) {
		"debug"
	} else {
		"release"
	};

	format!(
		"vitrine-server version: {VERSION}\n\
         Platform:               {}\n\
         Profile:                {profile}",
		platform(),
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn version_info_mentions_package_version() {
		let info = format_version_info();
		assert!(info.contains(VERSION));
		assert!(info.contains(std::env::consts::OS));
	}

	#[test]
	fn health_version_matches_package() {
		let info = HealthVersionInfo::current();
		assert_eq!(info.version, VERSION);
		assert!(info.platform.contains('-'));
	}
}
