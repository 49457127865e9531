// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! OpenAPI documentation for vitrine-server.

use utoipa::OpenApi;

/// Interactive documentation is served at `/api/docs` and the raw JSON spec
/// at `/api/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vitrine Server API",
        version = "1.0.0",
        description = "Backend for the Vitrine agency site: contact form, language resolution, project catalog and SEO artifacts.",
        license(name = "Proprietary"),
        contact(
            name = "Geoffrey Huntley",
            email = "ghuntley@ghuntley.com",
            url = "https://ghuntley.com"
        )
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "contact", description = "Contact form submission"),
        (name = "i18n", description = "Language resolution and explicit language choice"),
        (name = "projects", description = "Static project catalog views"),
        (name = "seo", description = "robots.txt and sitemap"),
        (name = "health", description = "Health checks and component status")
    ),
    paths(
        crate::routes::contact::submit_contact,
        crate::routes::contact::contact_preflight,
        crate::routes::i18n::get_language,
        crate::routes::i18n::set_language,
        crate::routes::projects::list_projects,
        crate::routes::projects::carousel,
        crate::routes::projects::get_project,
        crate::routes::seo::robots_txt,
        crate::routes::seo::sitemap_xml,
        crate::routes::health::health_check,
    ),
    components(
        schemas(
            vitrine_server_api::ContactRequest,
            vitrine_server_api::ContactSuccessResponse,
            vitrine_server_api::ContactErrorResponse,
            vitrine_server_api::ProjectType,
            vitrine_server_api::LanguageResponse,
            vitrine_server_api::LanguageInfoResponse,
            vitrine_server_api::SetLanguageRequest,
            vitrine_server_api::ProjectListResponse,
            vitrine_server_api::CarouselResponse,
            vitrine_common_catalog::ProjectDetail,
            crate::error::ErrorResponse,
            crate::health::HealthResponse,
            crate::health::HealthStatus,
        )
    )
)]
pub struct ApiDoc;
