// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

#[derive(Debug, thiserror::Error)]
pub enum DbError {
	#[error("Database error: {0}")]
	Sqlx(#[from] sqlx::Error),

	/// The backend refused the write because of its access policy.
	#[error("Permission denied: {0}")]
	PermissionDenied(String),

	#[error("Backend unavailable: {0}")]
	Unavailable(String),

	#[error("Internal: {0}")]
	Internal(String),
}

impl DbError {
	pub fn is_permission_denied(&self) -> bool {
		matches!(self, DbError::PermissionDenied(_))
	}
}

pub type Result<T> = std::result::Result<T, DbError>;
