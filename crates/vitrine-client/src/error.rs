// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the contact client.

use thiserror::Error;
use vitrine_common_i18n::{t, Language};
use vitrine_server_api::ContactValidationError;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
	/// The form failed local validation; nothing was sent.
	#[error("invalid contact form: {0}")]
	Validation(#[from] ContactValidationError),

	/// Invalid base URL.
	#[error("invalid base URL: {0}")]
	InvalidBaseUrl(String),

	/// HTTP request failed.
	#[error("HTTP request failed: {0}")]
	RequestFailed(#[from] reqwest::Error),

	/// The server rejected the submission as invalid.
	#[error("submission rejected ({code}): {message}")]
	Rejected { code: String, message: String },

	/// The server could not store the submission.
	#[error("server error (status {status}): {message}")]
	ServerError { status: u16, message: String },

	/// The response body did not match the API.
	#[error("unexpected response (status {status}): {message}")]
	InvalidResponse { status: u16, message: String },
}

impl ClientError {
	/// Localized text suitable for showing next to the form.
	///
	/// Server responses already carry a message in the requested language.
	/// Local validation failures are translated here, and transport or decode
	/// failures fall back to the generic submission error.
	pub fn user_message(&self, lang: Language) -> String {
		match self {
			ClientError::Rejected { message, .. } | ClientError::ServerError { message, .. } => {
				message.clone()
			}
			ClientError::Validation(e) => e.localized_message(lang),
			ClientError::InvalidBaseUrl(_)
			| ClientError::RequestFailed(_)
			| ClientError::InvalidResponse { .. } => t(lang, "contact.error.submission_failed"),
		}
	}
}
