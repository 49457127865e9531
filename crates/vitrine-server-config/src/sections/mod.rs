// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections for vitrine-server.

pub mod backend;
pub mod geoip;
pub mod http;
pub mod logging;
pub mod site;

pub use backend::{BackendConfig, BackendConfigLayer, BackendKind, HostedBackendConfig};
pub use geoip::{GeoIpConfig, GeoIpConfigLayer, DEFAULT_GEOIP_TIMEOUT_MS, DEFAULT_LOOKUP_URL};
pub use http::{HttpConfig, HttpConfigLayer};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
pub use site::{SiteConfig, SiteConfigLayer};
