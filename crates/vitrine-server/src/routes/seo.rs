// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! robots.txt and sitemap handlers.

use axum::{extract::State, http::header, response::IntoResponse};

use crate::{api::AppState, seo};

#[utoipa::path(
    get,
    path = "/robots.txt",
    responses(
        (status = 200, description = "Crawler rules", content_type = "text/plain")
    ),
    tag = "seo"
)]
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
	(
		[(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
		seo::robots_txt(&state.base_url),
	)
}

#[utoipa::path(
    get,
    path = "/sitemap.xml",
    responses(
        (status = 200, description = "Sitemap of every public page", content_type = "application/xml")
    ),
    tag = "seo"
)]
pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
	(
		[(header::CONTENT_TYPE, "application/xml")],
		seo::sitemap_xml(&state.base_url),
	)
}
