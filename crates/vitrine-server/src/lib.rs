// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Vitrine agency site server.
//!
//! Serves the contact form endpoint, language resolution for the FR/EN/HE
//! site, the static project catalog, robots.txt and the sitemap.

pub mod api;
pub mod api_docs;
pub mod client_info;
pub mod cookies;
pub mod error;
pub mod health;
pub mod i18n;
pub mod routes;
pub mod seo;
pub mod version;

pub use api::{create_app_state, create_router, AppState};
pub use api_docs::ApiDoc;
pub use error::ServerError;
pub use vitrine_server_config::ServerConfig;
