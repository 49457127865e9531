// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The agency's project catalog.
//!
//! [`PROJECTS`] is the single source of truth. The home carousel, the project
//! index and the project detail page are projections over it; none of them
//! keeps its own copy.

mod entries;
mod model;
mod views;

pub use entries::PROJECTS;
pub use model::{ProjectCategory, ProjectEntry, Theme};
pub use views::{carousel_slides, grid_tiles, project_detail, CarouselSlide, GridTile, ProjectDetail};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
	#[error("duplicate project slug: {0}")]
	DuplicateSlug(&'static str),

	#[error("project slug is not URL-safe: {0:?}")]
	InvalidSlug(&'static str),

	#[error("project {0} has no desktop images")]
	MissingImages(&'static str),
}

/// Look up a catalog entry by slug.
pub fn find_by_slug(slug: &str) -> Option<&'static ProjectEntry> {
	PROJECTS.iter().find(|p| p.slug == slug)
}

/// All slugs in catalog order.
pub fn slugs() -> impl Iterator<Item = &'static str> {
	PROJECTS.iter().map(|p| p.slug)
}

fn is_url_safe(slug: &str) -> bool {
	!slug.is_empty()
		&& !slug.starts_with('-')
		&& !slug.ends_with('-')
		&& slug
			.chars()
			.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Check catalog invariants: unique, URL-safe slugs and a cover image for
/// every entry.
pub fn validate_catalog() -> Result<(), CatalogError> {
	validate_entries(PROJECTS)
}

fn validate_entries(entries: &'static [ProjectEntry]) -> Result<(), CatalogError> {
	let mut seen = std::collections::HashSet::new();
	for entry in entries {
		if !is_url_safe(entry.slug) {
			return Err(CatalogError::InvalidSlug(entry.slug));
		}
		if !seen.insert(entry.slug) {
			return Err(CatalogError::DuplicateSlug(entry.slug));
		}
		if entry.desktop_images.is_empty() {
			return Err(CatalogError::MissingImages(entry.slug));
		}
	}
	Ok(())
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn find_by_slug_only_matches_catalog(slug in "[a-z0-9-]{0,30}") {
			let known = PROJECTS.iter().any(|p| p.slug == slug);
			prop_assert_eq!(find_by_slug(&slug).is_some(), known);
		}
	}
}
