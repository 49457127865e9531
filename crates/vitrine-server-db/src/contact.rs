// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact submission store trait and its SQLite implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqlitePool, Row};
use std::str::FromStr;
use uuid::Uuid;
use vitrine_server_api::ProjectType;

use crate::error::DbError;
use crate::types::{ContactSubmission, NewContactSubmission, SubmissionStatus};

/// Write path for contact submissions.
///
/// Implementations perform exactly one insert per call: no transaction, no
/// retry, no idempotency key.
#[async_trait]
pub trait ContactStore: Send + Sync {
	fn backend_name(&self) -> &'static str;

	async fn insert(&self, submission: NewContactSubmission) -> Result<ContactSubmission, DbError>;

	async fn health_check(&self) -> Result<(), DbError>;
}

#[async_trait]
impl ContactStore for SqliteContactRepository {
	fn backend_name(&self) -> &'static str {
		"sqlite"
	}

	async fn insert(&self, submission: NewContactSubmission) -> Result<ContactSubmission, DbError> {
		self.insert_submission(submission).await
	}

	async fn health_check(&self) -> Result<(), DbError> {
		sqlx::query("SELECT 1").execute(&self.pool).await?;
		Ok(())
	}
}

/// Repository for contact submissions in a local SQLite database.
#[derive(Clone)]
pub struct SqliteContactRepository {
	pool: SqlitePool,
}

impl SqliteContactRepository {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Insert a submission and return the stored row.
	#[tracing::instrument(skip(self, submission), fields(submission_id))]
	pub async fn insert_submission(
		&self,
		submission: NewContactSubmission,
	) -> Result<ContactSubmission, DbError> {
		let id = Uuid::new_v4().to_string();
		let created_at = Utc::now();
		tracing::Span::current().record("submission_id", id.as_str());

		sqlx::query(
			r#"
			INSERT INTO contact_submissions (
				id, name, email, phone, company, project_type, message,
				ip_address, user_agent, status, created_at
			) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
			"#,
		)
		.bind(&id)
		.bind(&submission.name)
		.bind(&submission.email)
		.bind(&submission.phone)
		.bind(&submission.company)
		.bind(submission.project_type.map(|p| p.as_str()))
		.bind(&submission.message)
		.bind(&submission.ip_address)
		.bind(&submission.user_agent)
		.bind(submission.status.as_str())
		.bind(created_at.to_rfc3339())
		.execute(&self.pool)
		.await?;

		tracing::debug!(submission_id = %id, "contact submission stored");

		Ok(ContactSubmission {
			id,
			name: submission.name,
			email: submission.email,
			phone: submission.phone,
			company: submission.company,
			project_type: submission.project_type,
			message: submission.message,
			ip_address: submission.ip_address,
			user_agent: submission.user_agent,
			status: submission.status,
			created_at,
		})
	}

	/// Fetch a stored submission. Used by operators and tests.
	#[tracing::instrument(skip(self))]
	pub async fn get_submission(&self, id: &str) -> Result<Option<ContactSubmission>, DbError> {
		let row = sqlx::query(
			r#"
			SELECT id, name, email, phone, company, project_type, message,
			       ip_address, user_agent, status, created_at
			FROM contact_submissions
			WHERE id = ?
			"#,
		)
		.bind(id)
		.fetch_optional(&self.pool)
		.await?;

		row.map(|row| parse_submission_row(&row)).transpose()
	}

	pub async fn count_submissions(&self) -> Result<i64, DbError> {
		let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_submissions")
			.fetch_one(&self.pool)
			.await?;
		Ok(count)
	}
}

fn parse_submission_row(row: &sqlx::sqlite::SqliteRow) -> Result<ContactSubmission, DbError> {
	let project_type = row
		.get::<Option<String>, _>("project_type")
		.map(|p| ProjectType::from_str(&p))
		.transpose()
		.map_err(|e| DbError::Internal(e.to_string()))?;

	let status = SubmissionStatus::from_str(&row.get::<String, _>("status")).map_err(DbError::Internal)?;

	let created_at: String = row.get("created_at");
	let created_at = DateTime::parse_from_rfc3339(&created_at)
		.map_err(|e| DbError::Internal(format!("invalid created_at: {e}")))?
		.with_timezone(&Utc);

	Ok(ContactSubmission {
		id: row.get("id"),
		name: row.get("name"),
		email: row.get("email"),
		phone: row.get("phone"),
		company: row.get("company"),
		project_type,
		message: row.get("message"),
		ip_address: row.get("ip_address"),
		user_agent: row.get("user_agent"),
		status,
		created_at,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::create_test_pool;

	fn submission() -> NewContactSubmission {
		NewContactSubmission {
			name: "Dana Levi".to_string(),
			email: "dana@example.com".to_string(),
			phone: Some("+972501234567".to_string()),
			company: None,
			project_type: Some(ProjectType::Ecommerce),
			message: "We sell ceramics.".to_string(),
			ip_address: Some("203.0.113.7".to_string()),
			user_agent: Some("Mozilla/5.0".to_string()),
			status: SubmissionStatus::New,
		}
	}

	#[tokio::test]
	async fn insert_returns_stored_row() {
		let repo = SqliteContactRepository::new(create_test_pool().await);

		let stored = repo.insert(submission()).await.unwrap();
		assert!(Uuid::parse_str(&stored.id).is_ok());
		assert_eq!(stored.status, SubmissionStatus::New);

		let fetched = repo.get_submission(&stored.id).await.unwrap().unwrap();
		assert_eq!(fetched.email, "dana@example.com");
		assert_eq!(fetched.project_type, Some(ProjectType::Ecommerce));
		assert_eq!(fetched.ip_address.as_deref(), Some("203.0.113.7"));
		assert_eq!(fetched.created_at.timestamp(), stored.created_at.timestamp());
	}

	#[tokio::test]
	async fn each_insert_creates_one_row() {
		let repo = SqliteContactRepository::new(create_test_pool().await);

		repo.insert(submission()).await.unwrap();
		repo.insert(submission()).await.unwrap();
		assert_eq!(repo.count_submissions().await.unwrap(), 2);
	}

	#[tokio::test]
	async fn missing_row_is_none() {
		let repo = SqliteContactRepository::new(create_test_pool().await);
		assert!(repo.get_submission("nope").await.unwrap().is_none());
	}

	#[tokio::test]
	async fn insert_without_table_is_a_database_error() {
		let pool = sqlx::SqlitePool::connect(":memory:").await.unwrap();
		let repo = SqliteContactRepository::new(pool);

		let err = repo.insert(submission()).await.unwrap_err();
		assert!(matches!(err, DbError::Sqlx(_)));
		assert!(!err.is_permission_denied());
	}

	#[tokio::test]
	async fn health_check_passes() {
		let repo = SqliteContactRepository::new(create_test_pool().await);
		assert!(repo.health_check().await.is_ok());
		assert_eq!(repo.backend_name(), "sqlite");
	}

	#[tokio::test]
	async fn file_backed_pool_persists() {
		let dir = tempfile::tempdir().unwrap();
		let url = format!("sqlite:{}?mode=rwc", dir.path().join("contact.db").display());

		let pool = crate::create_pool(&url).await.unwrap();
		crate::run_migrations(&pool).await.unwrap();
		crate::run_migrations(&pool).await.unwrap();

		let repo = SqliteContactRepository::new(pool);
		repo.insert(submission()).await.unwrap();
		assert_eq!(repo.count_submissions().await.unwrap(), 1);
	}
}
