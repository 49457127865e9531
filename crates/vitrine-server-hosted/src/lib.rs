// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Client for the hosted relational backend that stores contact submissions.
//!
//! The backend exposes a PostgREST-style REST interface authenticated with a
//! public API key. The client only inserts into `contact_submissions`.

mod client;
mod error;

pub use client::{HostedClient, CONTACT_TABLE};
pub use error::HostedError;
