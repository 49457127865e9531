// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::time::Duration;

use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use vitrine_common_i18n::Language;
use vitrine_server_api::{ContactErrorResponse, ContactRequest, ContactSuccessResponse};

use crate::error::{ClientError, Result};

pub const CONTACT_PATH: &str = "/api/contact";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Builder for constructing a ContactClient.
#[derive(Debug, Default)]
pub struct ContactClientBuilder {
	base_url: Option<String>,
	language: Option<Language>,
	request_timeout: Option<Duration>,
}

impl ContactClientBuilder {
	/// Sets the site origin, e.g. `https://studio.example`.
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = Some(url.into());
		self
	}

	/// Language the server should use for response messages.
	pub fn language(mut self, language: Language) -> Self {
		self.language = Some(language);
		self
	}

	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = Some(timeout);
		self
	}

	pub fn build(self) -> Result<ContactClient> {
		let base_url = self
			.base_url
			.ok_or_else(|| ClientError::InvalidBaseUrl("not set".to_string()))?;
		let base_url = base_url.trim_end_matches('/').to_string();
		if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
			return Err(ClientError::InvalidBaseUrl(base_url));
		}

		let http_client = vitrine_common_http::builder()
			.timeout(self.request_timeout.unwrap_or(DEFAULT_TIMEOUT))
			.build()?;

		Ok(ContactClient {
			http_client,
			base_url,
			language: self.language,
		})
	}
}

#[derive(Debug, Clone)]
pub struct ContactClient {
	http_client: Client,
	base_url: String,
	language: Option<Language>,
}

impl ContactClient {
	pub fn builder() -> ContactClientBuilder {
		ContactClientBuilder::default()
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Validate `request` and, when valid, post the normalized form once.
	#[instrument(skip(self, request), fields(base_url = %self.base_url))]
	pub async fn submit(&self, request: &ContactRequest) -> Result<ContactSuccessResponse> {
		let form = request.validate()?;
		let body = ContactRequest::from(&form);

		let url = format!("{}{}", self.base_url, CONTACT_PATH);
		let mut builder = self.http_client.post(&url).json(&body);
		if let Some(lang) = self.language {
			builder = builder.header(ACCEPT_LANGUAGE, lang.code());
		}

		let response = builder.send().await?;
		let status = response.status();
		let text = response.text().await?;
		debug!(status = status.as_u16(), "Contact submission response");

		if status.is_success() {
			return serde_json::from_str::<ContactSuccessResponse>(&text).map_err(|e| {
				ClientError::InvalidResponse {
					status: status.as_u16(),
					message: e.to_string(),
				}
			});
		}

		let error = serde_json::from_str::<ContactErrorResponse>(&text).map_err(|e| {
			ClientError::InvalidResponse {
				status: status.as_u16(),
				message: e.to_string(),
			}
		})?;

		if status.is_client_error() {
			warn!(code = %error.error, "Contact submission rejected by server");
			Err(ClientError::Rejected {
				code: error.error,
				message: error.message,
			})
		} else {
			warn!(status = status.as_u16(), "Contact submission failed on server");
			Err(ClientError::ServerError {
				status: status.as_u16(),
				message: error.message,
			})
		}
	}
}
