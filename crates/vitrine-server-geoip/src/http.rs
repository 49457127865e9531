// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Country lookup through a JSON web service.

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use vitrine_common_i18n::{CountryLookup, LookupError, DEFAULT_GEO_TIMEOUT};

use crate::{is_routable, GeoIpError, Result};

/// `{ip}` is replaced with the address being looked up.
pub const DEFAULT_LOOKUP_URL: &str = "https://ipapi.co/{ip}/json/";

#[derive(Debug, Deserialize)]
struct LookupResponse {
	#[serde(default, alias = "countryCode")]
	country_code: Option<String>,
	#[serde(default)]
	error: bool,
	#[serde(default)]
	reason: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpGeoLocator {
	http_client: Client,
	url_template: String,
}

impl HttpGeoLocator {
	pub fn new(url_template: impl Into<String>, timeout: Duration) -> Result<Self> {
		let url_template = url_template.into();
		let is_http = url_template.starts_with("https://") || url_template.starts_with("http://");
		if !is_http || !url_template.contains("{ip}") {
			return Err(GeoIpError::InvalidUrl(url_template));
		}

		let http_client = vitrine_common_http::builder().timeout(timeout).build()?;

		Ok(Self {
			http_client,
			url_template,
		})
	}

	pub fn with_default_url() -> Result<Self> {
		Self::new(DEFAULT_LOOKUP_URL, DEFAULT_GEO_TIMEOUT)
	}

	pub fn url_template(&self) -> &str {
		&self.url_template
	}

	fn url_for(&self, ip: IpAddr) -> String {
		self.url_template.replace("{ip}", &ip.to_string())
	}

	/// Ask the service for the ISO country code of `ip`.
	#[instrument(skip(self), fields(ip = %ip))]
	pub async fn lookup(&self, ip: IpAddr) -> Result<Option<String>> {
		let url = self.url_for(ip);
		debug!(url = %url, "Requesting country lookup");

		let response = self.http_client.get(&url).send().await?;
		let status = response.status();
		if !status.is_success() {
			warn!(status = status.as_u16(), "Country lookup service returned an error status");
			return Err(GeoIpError::Status {
				status: status.as_u16(),
			});
		}

		let body: LookupResponse = response.json().await?;
		if body.error {
			let reason = body.reason.unwrap_or_else(|| "unknown".to_string());
			return Err(GeoIpError::Service(reason));
		}

		let code = body
			.country_code
			.map(|c| c.trim().to_ascii_uppercase())
			.filter(|c| !c.is_empty());
		debug!(country_code = ?code, "Country lookup complete");
		Ok(code)
	}
}

#[async_trait]
impl CountryLookup for HttpGeoLocator {
	fn name(&self) -> &'static str {
		"http"
	}

	async fn country_code(&self, ip: IpAddr) -> std::result::Result<Option<String>, LookupError> {
		if !is_routable(ip) {
			return Ok(None);
		}
		Ok(self.lookup(ip).await?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::extract::Path;
	use axum::http::StatusCode;
	use axum::routing::get;
	use axum::{Json, Router};

	async fn spawn(router: Router) -> String {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		tokio::spawn(async move {
			axum::serve(listener, router).await.unwrap();
		});
		format!("http://{addr}")
	}

	fn public_ip() -> IpAddr {
		"89.2.0.1".parse().unwrap()
	}

	#[test]
	fn rejects_templates_without_placeholder() {
		assert!(matches!(
			HttpGeoLocator::new("https://ipapi.co/json/", DEFAULT_GEO_TIMEOUT),
			Err(GeoIpError::InvalidUrl(_))
		));
		assert!(matches!(
			HttpGeoLocator::new("ipapi.co/{ip}/json/", DEFAULT_GEO_TIMEOUT),
			Err(GeoIpError::InvalidUrl(_))
		));
	}

	#[test]
	fn substitutes_ip_into_template() {
		let locator = HttpGeoLocator::with_default_url().unwrap();
		assert_eq!(locator.url_for(public_ip()), "https://ipapi.co/89.2.0.1/json/");
	}

	#[tokio::test]
	async fn reads_country_code() {
		let router = Router::new().route(
			"/{ip}/json/",
			get(|Path(ip): Path<String>| async move {
				Json(serde_json::json!({ "ip": ip, "country_code": "fr" }))
			}),
		);
		let base = spawn(router).await;
		let locator = HttpGeoLocator::new(format!("{base}/{{ip}}/json/"), DEFAULT_GEO_TIMEOUT).unwrap();

		let code = CountryLookup::country_code(&locator, public_ip()).await.unwrap();
		assert_eq!(code.as_deref(), Some("FR"));
	}

	#[tokio::test]
	async fn accepts_camel_case_field() {
		let router = Router::new().route(
			"/json/{ip}",
			get(|| async { Json(serde_json::json!({ "status": "success", "countryCode": "IL" })) }),
		);
		let base = spawn(router).await;
		let locator = HttpGeoLocator::new(format!("{base}/json/{{ip}}"), DEFAULT_GEO_TIMEOUT).unwrap();

		assert_eq!(locator.lookup(public_ip()).await.unwrap().as_deref(), Some("IL"));
	}

	#[tokio::test]
	async fn service_error_body_is_failure() {
		let router = Router::new().route(
			"/{ip}/json/",
			get(|| async { Json(serde_json::json!({ "error": true, "reason": "RateLimited" })) }),
		);
		let base = spawn(router).await;
		let locator = HttpGeoLocator::new(format!("{base}/{{ip}}/json/"), DEFAULT_GEO_TIMEOUT).unwrap();

		let err = CountryLookup::country_code(&locator, public_ip()).await.unwrap_err();
		assert!(matches!(err, LookupError::Failed(msg) if msg.contains("RateLimited")));
	}

	#[tokio::test]
	async fn error_status_is_failure() {
		let router = Router::new().route(
			"/{ip}/json/",
			get(|| async { StatusCode::TOO_MANY_REQUESTS }),
		);
		let base = spawn(router).await;
		let locator = HttpGeoLocator::new(format!("{base}/{{ip}}/json/"), DEFAULT_GEO_TIMEOUT).unwrap();

		let err = locator.lookup(public_ip()).await.unwrap_err();
		assert!(matches!(err, GeoIpError::Status { status: 429 }));
	}

	#[tokio::test]
	async fn slow_service_times_out() {
		let router = Router::new().route(
			"/{ip}/json/",
			get(|| async {
				tokio::time::sleep(Duration::from_secs(5)).await;
				Json(serde_json::json!({ "country_code": "FR" }))
			}),
		);
		let base = spawn(router).await;
		let locator =
			HttpGeoLocator::new(format!("{base}/{{ip}}/json/"), Duration::from_millis(50)).unwrap();

		let err = CountryLookup::country_code(&locator, public_ip()).await.unwrap_err();
		assert!(matches!(err, LookupError::Timeout));
	}

	#[tokio::test]
	async fn private_address_skips_request() {
		let locator = HttpGeoLocator::new("http://127.0.0.1:9/{ip}", DEFAULT_GEO_TIMEOUT).unwrap();
		let code = CountryLookup::country_code(&locator, "192.168.1.20".parse().unwrap())
			.await
			.unwrap();
		assert_eq!(code, None);
	}
}
