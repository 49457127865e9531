// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client for Vitrine.
//!
//! Every outbound call (hosted backend, IP geolocation) goes through a client
//! built here so requests carry the same User-Agent. Callers never retry.

mod client;

pub use client::{builder, new_client_with_timeout, user_agent};
