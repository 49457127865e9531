// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact form payload, normalization and validation.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use vitrine_common_i18n::{t, t_fmt, Language};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_PHONE_LEN: usize = 50;
pub const MAX_COMPANY_LEN: usize = 200;
pub const MAX_MESSAGE_LEN: usize = 5000;

static EMAIL_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Kind of project the visitor is enquiring about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
	Website,
	Ecommerce,
	WebApp,
	MobileApp,
	Branding,
	Seo,
	Other,
}

impl ProjectType {
	pub const ALL: [ProjectType; 7] = [
		ProjectType::Website,
		ProjectType::Ecommerce,
		ProjectType::WebApp,
		ProjectType::MobileApp,
		ProjectType::Branding,
		ProjectType::Seo,
		ProjectType::Other,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			ProjectType::Website => "website",
			ProjectType::Ecommerce => "ecommerce",
			ProjectType::WebApp => "web_app",
			ProjectType::MobileApp => "mobile_app",
			ProjectType::Branding => "branding",
			ProjectType::Seo => "seo",
			ProjectType::Other => "other",
		}
	}
}

impl fmt::Display for ProjectType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ProjectType {
	type Err = ContactValidationError;

	/// Accepts the snake_case names in any case, with `-` or `_` separators.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
		ProjectType::ALL
			.into_iter()
			.find(|p| p.as_str() == normalized)
			.ok_or_else(|| ContactValidationError::InvalidProjectType(s.trim().to_string()))
	}
}

/// Raw contact form body as posted by the browser.
///
/// Every field is optional at the wire level so a missing field surfaces as
/// a validation error rather than a JSON decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub email: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub company: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub project_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

/// A validated, normalized contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
	pub name: String,
	/// Trimmed and lowercased.
	pub email: String,
	pub phone: Option<String>,
	pub company: Option<String>,
	pub project_type: Option<ProjectType>,
	pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactValidationError {
	#[error("missing required fields: {}", .0.join(", "))]
	MissingFields(Vec<&'static str>),

	#[error("invalid email address")]
	InvalidEmail,

	#[error("{field} exceeds {max} characters")]
	FieldTooLong { field: &'static str, max: usize },

	#[error("unknown project type: {0}")]
	InvalidProjectType(String),
}

impl ContactValidationError {
	/// Machine-readable error code returned in API responses.
	pub fn code(&self) -> &'static str {
		match self {
			ContactValidationError::MissingFields(_) => "missing_fields",
			ContactValidationError::InvalidEmail => "invalid_email",
			ContactValidationError::FieldTooLong { .. } => "field_too_long",
			ContactValidationError::InvalidProjectType(_) => "invalid_project_type",
		}
	}

	/// User-facing message in `lang`.
	pub fn localized_message(&self, lang: Language) -> String {
		match self {
			ContactValidationError::FieldTooLong { field, max } => {
				let field_label = t(lang, &format!("contact.form.{field}"));
				t_fmt(
					lang,
					"contact.error.field_too_long",
					&[("field", field_label.as_str()), ("max", max.to_string().as_str())],
				)
			}
			other => t(lang, &format!("contact.error.{}", other.code())),
		}
	}
}

fn trimmed(value: &Option<String>) -> Option<&str> {
	value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ContactValidationError> {
	if value.chars().count() > max {
		return Err(ContactValidationError::FieldTooLong { field, max });
	}
	Ok(())
}

/// Whether `email` looks like `local@domain.tld` with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
	EMAIL_REGEX.is_match(email)
}

/// Trim whitespace and lowercase.
pub fn sanitize_email(email: &str) -> String {
	email.trim().to_lowercase()
}

impl ContactRequest {
	/// Validate and normalize the request.
	///
	/// Checks run in order: required fields, email format, field lengths,
	/// project type. The first failing check is reported.
	pub fn validate(&self) -> Result<ContactForm, ContactValidationError> {
		let name = trimmed(&self.name);
		let email = trimmed(&self.email);
		let message = trimmed(&self.message);

		let missing: Vec<&'static str> = [("name", name), ("email", email), ("message", message)]
			.into_iter()
			.filter(|(_, v)| v.is_none())
			.map(|(field, _)| field)
			.collect();

		let (Some(name), Some(email), Some(message)) = (name, email, message) else {
			return Err(ContactValidationError::MissingFields(missing));
		};

		let email = sanitize_email(email);
		if !is_valid_email(&email) {
			return Err(ContactValidationError::InvalidEmail);
		}

		let phone = trimmed(&self.phone);
		let company = trimmed(&self.company);

		check_len("name", name, MAX_NAME_LEN)?;
		check_len("email", &email, MAX_EMAIL_LEN)?;
		check_len("message", message, MAX_MESSAGE_LEN)?;
		if let Some(phone) = phone {
			check_len("phone", phone, MAX_PHONE_LEN)?;
		}
		if let Some(company) = company {
			check_len("company", company, MAX_COMPANY_LEN)?;
		}

		let project_type = trimmed(&self.project_type)
			.map(ProjectType::from_str)
			.transpose()?;

		Ok(ContactForm {
			name: name.to_string(),
			email,
			phone: phone.map(String::from),
			company: company.map(String::from),
			project_type,
			message: message.to_string(),
		})
	}
}

impl From<&ContactForm> for ContactRequest {
	fn from(form: &ContactForm) -> Self {
		Self {
			name: Some(form.name.clone()),
			email: Some(form.email.clone()),
			phone: form.phone.clone(),
			company: form.company.clone(),
			project_type: form.project_type.map(|p| p.as_str().to_string()),
			message: Some(form.message.clone()),
		}
	}
}

/// Body of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ContactSuccessResponse {
	pub success: bool,
	pub message: String,
}

impl ContactSuccessResponse {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			success: true,
			message: message.into(),
		}
	}
}

/// Body of a rejected or failed submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ContactErrorResponse {
	pub success: bool,
	pub error: String,
	pub message: String,
}

impl ContactErrorResponse {
	pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			success: false,
			error: error.into(),
			message: message.into(),
		}
	}
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn stored_email_is_trimmed_and_lowercase(
			local in "[A-Za-z0-9._]{1,20}",
			domain in "[A-Za-z0-9]{1,20}",
			tld in "[A-Za-z]{2,6}",
			pad in "[ \t]{0,3}",
		) {
			let req = ContactRequest {
				name: Some("Name".to_string()),
				email: Some(format!("{pad}{local}@{domain}.{tld}{pad}")),
				message: Some("Hello".to_string()),
				..Default::default()
			};
			let form = req.validate().unwrap();
			prop_assert_eq!(form.email.clone(), form.email.trim().to_lowercase());
			prop_assert_eq!(form.email, format!("{local}@{domain}.{tld}").to_lowercase());
		}

		#[test]
		fn strings_without_at_sign_are_never_valid(s in "[^@]{0,40}") {
			prop_assert!(!is_valid_email(&s));
		}

		#[test]
		fn validate_never_panics(
			name in proptest::option::of("\\PC{0,50}"),
			email in proptest::option::of("\\PC{0,50}"),
			message in proptest::option::of("\\PC{0,50}"),
			project_type in proptest::option::of("\\PC{0,20}"),
		) {
			let req = ContactRequest { name, email, message, project_type, ..Default::default() };
			let _ = req.validate();
		}
	}
}
