// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client construction with a consistent User-Agent header.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Creates a client builder with the standard Vitrine User-Agent header.
///
/// # Example
/// ```ignore
/// let client = vitrine_common_http::builder()
///     .timeout(Duration::from_millis(1200))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a client whose every request is bounded by `timeout`.
#[tracing::instrument(level = "debug")]
pub fn new_client_with_timeout(timeout: Duration) -> reqwest::Result<Client> {
	builder().timeout(timeout).build()
}

/// Returns the standard Vitrine User-Agent string.
///
/// Format: `vitrine/{version} ({os}-{arch})`
pub fn user_agent() -> String {
	format!(
		"vitrine/{} ({}-{})",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_agent_has_correct_format() {
		let ua = user_agent();
		assert!(ua.starts_with("vitrine/"));
		assert!(ua.contains(env!("CARGO_PKG_VERSION")));
		assert!(ua.ends_with(')'));
	}

	#[test]
	fn client_with_timeout_builds() {
		assert!(new_client_with_timeout(Duration::from_millis(1200)).is_ok());
	}
}
