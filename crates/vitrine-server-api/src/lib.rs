// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Wire types for the Vitrine HTTP API.
//!
//! The contact-form validation lives here so the server route and
//! `vitrine-client` apply exactly the same rules.

pub mod contact;
pub mod i18n;
pub mod projects;

pub use contact::{
	ContactErrorResponse, ContactForm, ContactRequest, ContactSuccessResponse,
	ContactValidationError, ProjectType, MAX_COMPANY_LEN, MAX_EMAIL_LEN, MAX_MESSAGE_LEN,
	MAX_NAME_LEN, MAX_PHONE_LEN,
};
pub use i18n::{LanguageInfoResponse, LanguageResponse, SetLanguageRequest};
pub use projects::{CarouselResponse, ProjectListResponse};
