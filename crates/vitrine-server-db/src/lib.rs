// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Contact submission storage.
//!
//! [`ContactStore`] is the seam the server writes through. Production uses
//! the hosted backend (`vitrine-server-hosted`); local development and tests
//! use [`SqliteContactRepository`].

pub mod contact;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod testing;
pub mod types;

pub use contact::{ContactStore, SqliteContactRepository};
pub use error::{DbError, Result};
pub use migrations::run_migrations;
pub use pool::create_pool;
pub use types::{ContactSubmission, NewContactSubmission, SubmissionStatus};
