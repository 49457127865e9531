// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_server_api::{ContactForm, ProjectType};

/// Triage state of a submission. Only `New` is ever written by this service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
	#[default]
	New,
	Read,
	Replied,
	Archived,
}

impl SubmissionStatus {
	pub fn as_str(&self) -> &'static str {
		match self {
			SubmissionStatus::New => "new",
			SubmissionStatus::Read => "read",
			SubmissionStatus::Replied => "replied",
			SubmissionStatus::Archived => "archived",
		}
	}
}

impl fmt::Display for SubmissionStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SubmissionStatus {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"new" => Ok(SubmissionStatus::New),
			"read" => Ok(SubmissionStatus::Read),
			"replied" => Ok(SubmissionStatus::Replied),
			"archived" => Ok(SubmissionStatus::Archived),
			other => Err(format!("unknown submission status: {other}")),
		}
	}
}

/// A submission ready to be inserted. Column names match the hosted table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContactSubmission {
	pub name: String,
	pub email: String,
	pub phone: Option<String>,
	pub company: Option<String>,
	pub project_type: Option<ProjectType>,
	pub message: String,
	pub ip_address: Option<String>,
	pub user_agent: Option<String>,
	pub status: SubmissionStatus,
}

impl NewContactSubmission {
	pub fn from_form(form: ContactForm, ip_address: Option<String>, user_agent: Option<String>) -> Self {
		Self {
			name: form.name,
			email: form.email,
			phone: form.phone,
			company: form.company,
			project_type: form.project_type,
			message: form.message,
			ip_address,
			user_agent,
			status: SubmissionStatus::New,
		}
	}
}

/// A stored submission as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
	#[serde(deserialize_with = "id_as_string")]
	pub id: String,
	pub name: String,
	pub email: String,
	pub phone: Option<String>,
	pub company: Option<String>,
	pub project_type: Option<ProjectType>,
	pub message: String,
	pub ip_address: Option<String>,
	pub user_agent: Option<String>,
	pub status: SubmissionStatus,
	pub created_at: DateTime<Utc>,
}

/// Hosted tables may use either UUID or bigint identity keys.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: serde::Deserializer<'de>,
{
	match serde_json::Value::deserialize(deserializer)? {
		serde_json::Value::String(s) => Ok(s),
		serde_json::Value::Number(n) => Ok(n.to_string()),
		other => Err(serde::de::Error::custom(format!(
			"expected string or number id, got {other}"
		))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_round_trips_through_str() {
		for status in [
			SubmissionStatus::New,
			SubmissionStatus::Read,
			SubmissionStatus::Replied,
			SubmissionStatus::Archived,
		] {
			assert_eq!(status.as_str().parse::<SubmissionStatus>(), Ok(status));
		}
		assert!("spam".parse::<SubmissionStatus>().is_err());
	}

	#[test]
	fn new_submission_starts_as_new() {
		let form = ContactForm {
			name: "Dana".to_string(),
			email: "dana@example.com".to_string(),
			phone: None,
			company: None,
			project_type: Some(ProjectType::Branding),
			message: "Hello".to_string(),
		};
		let new = NewContactSubmission::from_form(form, Some("203.0.113.7".to_string()), None);
		assert_eq!(new.status, SubmissionStatus::New);

		let json = serde_json::to_value(&new).unwrap();
		assert_eq!(json["status"], "new");
		assert_eq!(json["project_type"], "branding");
		assert_eq!(json["ip_address"], "203.0.113.7");
	}

	#[test]
	fn stored_row_deserializes_from_backend_json() {
		let row: ContactSubmission = serde_json::from_str(
			r#"{
				"id": "5b0c6c1e-7f43-4a53-a1a8-0d6c1d1d9a11",
				"name": "Dana",
				"email": "dana@example.com",
				"phone": null,
				"company": "Levi & Co",
				"project_type": "web_app",
				"message": "Hello",
				"ip_address": "203.0.113.7",
				"user_agent": "Mozilla/5.0",
				"status": "new",
				"created_at": "2025-03-01T10:00:00.123456+00:00"
			}"#,
		)
		.unwrap();
		assert_eq!(row.project_type, Some(ProjectType::WebApp));
		assert_eq!(row.company.as_deref(), Some("Levi & Co"));
	}

	#[test]
	fn numeric_ids_are_accepted() {
		let row: ContactSubmission = serde_json::from_str(
			r#"{"id": 42, "name": "A", "email": "a@b.co", "phone": null, "company": null,
				"project_type": null, "message": "m", "ip_address": null, "user_agent": null,
				"status": "new", "created_at": "2025-03-01T10:00:00Z"}"#,
		)
		.unwrap();
		assert_eq!(row.id, "42");
	}
}
