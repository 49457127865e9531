// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client for the Vitrine contact endpoint.
//!
//! Forms are validated with the same rules the server applies, so an
//! obviously incomplete form never leaves the caller.
//!
//! ```ignore
//! use vitrine_client::ContactClient;
//! use vitrine_server_api::ContactRequest;
//!
//! let client = ContactClient::builder()
//!     .base_url("https://studio.example")
//!     .language(vitrine_common_i18n::Language::Fr)
//!     .build()?;
//! let response = client.submit(&request).await?;
//! ```

mod client;
mod error;

pub use client::{ContactClient, ContactClientBuilder, CONTACT_PATH};
pub use error::{ClientError, Result};
