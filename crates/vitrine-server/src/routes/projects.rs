// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Project catalog handlers.

use axum::{
	extract::{Path, State},
	http::HeaderMap,
	Json,
};
use vitrine_common_catalog::{carousel_slides, grid_tiles, project_detail, ProjectDetail};
use vitrine_server_api::{CarouselResponse, ProjectListResponse};

use crate::{
	api::AppState,
	error::ServerError,
	i18n::{request_language, t},
};

#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "Grid tiles in catalog order", body = ProjectListResponse)
    ),
    tag = "projects"
)]
/// GET /api/projects - List every project as a grid tile.
pub async fn list_projects() -> Json<ProjectListResponse> {
	Json(ProjectListResponse {
		projects: grid_tiles(),
	})
}

#[utoipa::path(
    get,
    path = "/api/projects/carousel",
    responses(
        (status = 200, description = "Featured projects for the home carousel", body = CarouselResponse)
    ),
    tag = "projects"
)]
/// GET /api/projects/carousel - Featured slides for the home page.
pub async fn carousel() -> Json<CarouselResponse> {
	Json(CarouselResponse {
		slides: carousel_slides(),
	})
}

#[utoipa::path(
    get,
    path = "/api/projects/{slug}",
    params(
        ("slug" = String, Path, description = "Project slug")
    ),
    responses(
        (status = 200, description = "Project detail", body = ProjectDetail),
        (status = 404, description = "Unknown slug", body = crate::error::ErrorResponse)
    ),
    tag = "projects"
)]
/// GET /api/projects/{slug} - Detail view with previous/next navigation.
pub async fn get_project(
	State(state): State<AppState>,
	Path(slug): Path<String>,
	headers: HeaderMap,
) -> Result<Json<ProjectDetail>, ServerError> {
	project_detail(&slug).map(Json).ok_or_else(|| {
		let lang = request_language(&headers, state.default_language());
		ServerError::NotFound(t(lang, "error.project_not_found"))
	})
}
