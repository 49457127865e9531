// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router construction.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
	routing::{get, post, put},
	Router,
};
use tower_http::services::{ServeDir, ServeFile};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use vitrine_common_i18n::{Language, LanguageResolver};
use vitrine_server_config::{BackendConfig, GeoIpConfig, ServerConfig};
use vitrine_server_db::{create_pool, run_migrations, ContactStore, SqliteContactRepository};
use vitrine_server_geoip::{GeoIpService, HttpGeoLocator};
use vitrine_server_hosted::HostedClient;

use crate::{error::ServerError, routes};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
	pub contact_store: Arc<dyn ContactStore>,
	pub language_resolver: Arc<LanguageResolver>,
	/// Present when geolocation uses a local MaxMind database.
	pub geoip_service: Option<Arc<GeoIpService>>,
	pub base_url: String,
	pub web_dir: Option<PathBuf>,
}

impl AppState {
	pub fn new(
		contact_store: Arc<dyn ContactStore>,
		language_resolver: LanguageResolver,
		base_url: impl Into<String>,
	) -> Self {
		Self {
			contact_store,
			language_resolver: Arc::new(language_resolver),
			geoip_service: None,
			base_url: base_url.into().trim_end_matches('/').to_string(),
			web_dir: None,
		}
	}

	pub fn with_geoip_service(mut self, service: Arc<GeoIpService>) -> Self {
		self.geoip_service = Some(service);
		self
	}

	pub fn with_web_dir(mut self, web_dir: impl Into<PathBuf>) -> Self {
		self.web_dir = Some(web_dir.into());
		self
	}

	pub fn default_language(&self) -> Language {
		self.language_resolver.default_language()
	}
}

/// Build the contact store selected by the backend configuration.
pub async fn create_contact_store(
	backend: &BackendConfig,
) -> Result<Arc<dyn ContactStore>, ServerError> {
	match backend {
		BackendConfig::Hosted(hosted) => {
			let client = HostedClient::new(hosted.url.clone(), hosted.api_key.clone())?;
			tracing::info!(backend = "hosted", url = %client.base_url(), "contact store configured");
			Ok(Arc::new(client))
		}
		BackendConfig::Sqlite { url } => {
			let pool = create_pool(url).await?;
			run_migrations(&pool).await?;
			tracing::info!(backend = "sqlite", "contact store configured");
			Ok(Arc::new(SqliteContactRepository::new(pool)))
		}
	}
}

/// Attach the configured geolocation provider to `resolver`.
///
/// A MaxMind database wins over the HTTP lookup. A database that fails to
/// open leaves geolocation disabled; health reports it as degraded.
pub fn configure_geolocation(
	resolver: LanguageResolver,
	geoip: &GeoIpConfig,
) -> Result<(LanguageResolver, Option<Arc<GeoIpService>>), ServerError> {
	let resolver = resolver.with_timeout(geoip.timeout());

	if !geoip.enabled {
		tracing::info!("geolocation disabled");
		return Ok((resolver, None));
	}

	if let Some(path) = geoip.database_path.as_deref() {
		return match GeoIpService::new(path) {
			Ok(service) => {
				let service = Arc::new(service);
				Ok((resolver.with_geolocator(service.clone()), Some(service)))
			}
			Err(e) => {
				tracing::warn!(path, error = %e, "GeoIP database unavailable, geolocation disabled");
				Ok((resolver, None))
			}
		};
	}

	let locator = HttpGeoLocator::new(geoip.lookup_url.clone(), geoip.timeout())?;
	tracing::info!(
		lookup_url = %locator.url_template(),
		timeout = %humantime::format_duration(geoip.timeout()),
		"geolocation via HTTP lookup"
	);
	Ok((resolver.with_geolocator(Arc::new(locator)), None))
}

/// Creates the application state from resolved configuration.
pub async fn create_app_state(config: &ServerConfig) -> Result<AppState, ServerError> {
	let contact_store = create_contact_store(&config.backend).await?;

	let (resolver, geoip_service) =
		configure_geolocation(LanguageResolver::new(config.site.default_locale), &config.geoip)?;

	let mut state = AppState::new(contact_store, resolver, config.http.base_url.clone());
	if let Some(service) = geoip_service {
		state = state.with_geoip_service(service);
	}
	if let Some(web_dir) = &config.site.web_dir {
		state = state.with_web_dir(web_dir.clone());
	}
	Ok(state)
}

pub fn create_router(state: AppState) -> Router {
	let web_dir = state.web_dir.clone();

	let mut router = Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/robots.txt", get(routes::seo::robots_txt))
		.route("/sitemap.xml", get(routes::seo::sitemap_xml))
		.route(
			"/api/contact",
			post(routes::contact::submit_contact).options(routes::contact::contact_preflight),
		)
		.route("/api/i18n", get(routes::i18n::get_language))
		.route("/api/i18n/language", put(routes::i18n::set_language))
		.route("/api/projects", get(routes::projects::list_projects))
		.route("/api/projects/carousel", get(routes::projects::carousel))
		.route("/api/projects/{slug}", get(routes::projects::get_project))
		.with_state(state);

	router = router.merge(
		SwaggerUi::new("/api/docs").url("/api/openapi.json", crate::api_docs::ApiDoc::openapi()),
	);

	if let Some(web_path) = web_dir {
		tracing::info!(web_dir = %web_path.display(), "serving static web assets");
		router = router.fallback_service(
			ServeDir::new(&web_path).fallback(ServeFile::new(web_path.join("index.html"))),
		);
	}

	router
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{
		body::Body,
		http::{Request, StatusCode},
	};
	use tower::ServiceExt;
	use vitrine_server_db::testing::create_test_pool;

	async fn test_state() -> AppState {
		let pool = create_test_pool().await;
		AppState::new(
			Arc::new(SqliteContactRepository::new(pool)),
			LanguageResolver::new(Language::Fr),
			"https://studio.example/",
		)
	}

	#[tokio::test]
	async fn base_url_is_trimmed() {
		let state = test_state().await;
		assert_eq!(state.base_url, "https://studio.example");
		assert_eq!(state.default_language(), Language::Fr);
	}

	#[tokio::test]
	async fn openapi_json_is_served() {
		let app = create_router(test_state().await);
		let response = app
			.oneshot(
				Request::builder()
					.uri("/api/openapi.json")
					.body(Body::empty())
					.unwrap(),
			)
			.await
			.unwrap();
		assert_eq!(response.status(), StatusCode::OK);
	}

	#[tokio::test]
	async fn unknown_route_without_web_dir_is_404() {
		let app = create_router(test_state().await);
		let response = app
			.oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
			.await
			.unwrap();
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn web_dir_serves_index_for_client_routes() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("index.html"), "<html>vitrine</html>").unwrap();

		let app = create_router(test_state().await.with_web_dir(dir.path()));
		let response = app
			.oneshot(
				Request::builder()
					.uri("/projects/atelier")
					.body(Body::empty())
					.unwrap(),
			)
			.await
			.unwrap();
		assert_eq!(response.status(), StatusCode::OK);
	}

	#[test]
	fn disabled_geolocation_has_no_provider() {
		let config = GeoIpConfig {
			enabled: false,
			database_path: None,
			lookup_url: "https://ipapi.co/{ip}/json/".to_string(),
			timeout_ms: 900,
		};
		let (resolver, service) =
			configure_geolocation(LanguageResolver::new(Language::En), &config).unwrap();
		assert!(!resolver.has_geolocator());
		assert!(service.is_none());
		assert_eq!(resolver.geo_timeout().as_millis(), 900);
	}

	#[test]
	fn http_lookup_is_used_without_database() {
		let config = GeoIpConfig {
			enabled: true,
			database_path: None,
			lookup_url: "https://ipapi.co/{ip}/json/".to_string(),
			timeout_ms: 1200,
		};
		let (resolver, service) =
			configure_geolocation(LanguageResolver::new(Language::En), &config).unwrap();
		assert_eq!(resolver.geolocator_name(), Some("http"));
		assert!(service.is_none());
	}

	#[test]
	fn missing_database_disables_geolocation() {
		let config = GeoIpConfig {
			enabled: true,
			database_path: Some("/nonexistent/GeoLite2-Country.mmdb".to_string()),
			lookup_url: "https://ipapi.co/{ip}/json/".to_string(),
			timeout_ms: 1200,
		};
		let (resolver, service) =
			configure_geolocation(LanguageResolver::new(Language::En), &config).unwrap();
		assert!(!resolver.has_geolocator());
		assert!(service.is_none());
	}

	#[tokio::test]
	async fn sqlite_backend_builds_store() {
		let dir = tempfile::tempdir().unwrap();
		let url = format!("sqlite:{}", dir.path().join("contact.db").display());
		let store = create_contact_store(&BackendConfig::Sqlite { url }).await.unwrap();
		assert_eq!(store.backend_name(), "sqlite");
		store.health_check().await.unwrap();
	}
}
