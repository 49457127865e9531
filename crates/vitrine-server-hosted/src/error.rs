// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the hosted backend client.

use thiserror::Error;
use vitrine_server_db::DbError;

/// PostgreSQL `insufficient_privilege`, reported when row-level security
/// rejects the write.
pub const INSUFFICIENT_PRIVILEGE: &str = "42501";

#[derive(Debug, Error)]
pub enum HostedError {
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	#[error("Request timed out")]
	Timeout,

	/// The key was rejected or the table policy forbids the operation.
	#[error("Permission denied ({status}): {message}")]
	PermissionDenied { status: u16, message: String },

	#[error("Backend error: {status} - {message}")]
	ApiError {
		status: u16,
		code: Option<String>,
		message: String,
	},

	#[error("Invalid response from backend: {0}")]
	InvalidResponse(String),

	#[error("Invalid backend configuration: {0}")]
	Config(String),
}

impl From<HostedError> for DbError {
	fn from(e: HostedError) -> Self {
		match e {
			HostedError::PermissionDenied { .. } => DbError::PermissionDenied(e.to_string()),
			HostedError::Network(_) | HostedError::Timeout => DbError::Unavailable(e.to_string()),
			HostedError::ApiError { .. } | HostedError::InvalidResponse(_) | HostedError::Config(_) => {
				DbError::Internal(e.to_string())
			}
		}
	}
}
