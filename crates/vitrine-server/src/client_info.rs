// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Client information extraction.
//!
//! The site runs behind a reverse proxy, so the peer address is never the
//! visitor. The visitor's address comes from the proxy headers instead.

use axum::http::{header::USER_AGENT, HeaderMap};
use std::net::IpAddr;

/// Extracted client information stored alongside a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
	pub ip_address: Option<String>,
	pub user_agent: Option<String>,
}

impl ClientInfo {
	#[tracing::instrument(level = "debug", skip(headers))]
	pub fn from_headers(headers: &HeaderMap) -> Self {
		let ip_address = extract_client_ip(headers);
		let user_agent = headers
			.get(USER_AGENT)
			.and_then(|v| v.to_str().ok())
			.map(|s| s.trim().to_string())
			.filter(|s| !s.is_empty());

		tracing::debug!(ip = ?ip_address, "Client info extracted");

		Self {
			ip_address,
			user_agent,
		}
	}

	/// The client address, when it parses as an IP.
	pub fn ip(&self) -> Option<IpAddr> {
		self.ip_address.as_deref().and_then(|ip| ip.parse().ok())
	}
}

/// Extract client IP from request headers.
///
/// Checks headers in order of preference:
/// 1. `X-Forwarded-For` (first IP in chain, for reverse proxies)
/// 2. `X-Real-IP` (nginx style)
/// 3. `CF-Connecting-IP` (Cloudflare)
pub fn extract_client_ip(headers: &HeaderMap) -> Option<String> {
	if let Some(xff) = headers.get("x-forwarded-for") {
		if let Ok(xff_str) = xff.to_str() {
			if let Some(first_ip) = xff_str.split(',').next() {
				let ip = first_ip.trim();
				if !ip.is_empty() {
					return Some(ip.to_string());
				}
			}
		}
	}

	for name in ["x-real-ip", "cf-connecting-ip"] {
		if let Some(ip) = headers.get(name).and_then(|v| v.to_str().ok()) {
			let ip = ip.trim();
			if !ip.is_empty() {
				return Some(ip.to_string());
			}
		}
	}

	None
}
