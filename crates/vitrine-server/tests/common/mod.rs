// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared fixtures for vitrine-server integration tests.

#![allow(dead_code)]

use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{body::Body, http::Response, Router};
use vitrine_common_i18n::{CountryLookup, Language, LanguageResolver, LookupError};
use vitrine_server::{create_router, AppState};
use vitrine_server_db::{
	testing::create_test_pool, ContactStore, ContactSubmission, DbError, NewContactSubmission,
	SqliteContactRepository,
};

pub const BASE_URL: &str = "https://studio.example";

/// A store whose inserts always fail with the given error.
pub struct FailingStore {
	pub permission_denied: bool,
	pub inserts: AtomicUsize,
}

impl FailingStore {
	pub fn new(permission_denied: bool) -> Arc<Self> {
		Arc::new(Self {
			permission_denied,
			inserts: AtomicUsize::new(0),
		})
	}

	pub fn inserts(&self) -> usize {
		self.inserts.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl ContactStore for FailingStore {
	fn backend_name(&self) -> &'static str {
		"failing"
	}

	async fn insert(&self, _submission: NewContactSubmission) -> Result<ContactSubmission, DbError> {
		self.inserts.fetch_add(1, Ordering::SeqCst);
		if self.permission_denied {
			Err(DbError::PermissionDenied(
				"new row violates row-level security policy".to_string(),
			))
		} else {
			Err(DbError::Unavailable("connection reset".to_string()))
		}
	}

	async fn health_check(&self) -> Result<(), DbError> {
		Err(DbError::Unavailable("connection reset".to_string()))
	}
}

/// A store that keeps every inserted submission in memory.
#[derive(Default)]
pub struct RecordingStore {
	pub submissions: Mutex<Vec<NewContactSubmission>>,
}

impl RecordingStore {
	pub fn recorded(&self) -> Vec<NewContactSubmission> {
		self.submissions.lock().unwrap().clone()
	}
}

#[async_trait]
impl ContactStore for RecordingStore {
	fn backend_name(&self) -> &'static str {
		"recording"
	}

	async fn insert(&self, submission: NewContactSubmission) -> Result<ContactSubmission, DbError> {
		let mut submissions = self.submissions.lock().unwrap();
		submissions.push(submission.clone());
		Ok(ContactSubmission {
			id: submissions.len().to_string(),
			name: submission.name,
			email: submission.email,
			phone: submission.phone,
			company: submission.company,
			project_type: submission.project_type,
			message: submission.message,
			ip_address: submission.ip_address,
			user_agent: submission.user_agent,
			status: submission.status,
			created_at: chrono::Utc::now(),
		})
	}

	async fn health_check(&self) -> Result<(), DbError> {
		Ok(())
	}
}

/// A geolocator returning a fixed country and counting calls.
pub struct StubGeolocator {
	country: Option<&'static str>,
	delay: Duration,
	calls: AtomicUsize,
}

impl StubGeolocator {
	pub fn new(country: Option<&'static str>) -> Arc<Self> {
		Self::slow(country, Duration::ZERO)
	}

	pub fn slow(country: Option<&'static str>, delay: Duration) -> Arc<Self> {
		Arc::new(Self {
			country,
			delay,
			calls: AtomicUsize::new(0),
		})
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl CountryLookup for StubGeolocator {
	fn name(&self) -> &'static str {
		"stub"
	}

	async fn country_code(&self, _ip: IpAddr) -> Result<Option<String>, LookupError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		if !self.delay.is_zero() {
			tokio::time::sleep(self.delay).await;
		}
		Ok(self.country.map(str::to_string))
	}
}

pub async fn sqlite_repository() -> SqliteContactRepository {
	SqliteContactRepository::new(create_test_pool().await)
}

pub fn app_with_store(store: Arc<dyn ContactStore>) -> Router {
	create_router(AppState::new(
		store,
		LanguageResolver::new(Language::En),
		BASE_URL,
	))
}

pub async fn app_with_resolver(resolver: LanguageResolver) -> Router {
	let store = Arc::new(sqlite_repository().await);
	create_router(AppState::new(store, resolver, BASE_URL))
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
	axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap()
		.to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
	serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
	String::from_utf8(body_bytes(response).await).unwrap()
}

pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
	response
		.headers()
		.get_all(axum::http::header::SET_COOKIE)
		.iter()
		.filter_map(|v| v.to_str().ok())
		.map(str::to_string)
		.collect()
}
