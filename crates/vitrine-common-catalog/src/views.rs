// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Presentation projections over the catalog.

use serde::Serialize;

use crate::entries::PROJECTS;
use crate::model::{ProjectCategory, ProjectEntry, Theme};

/// Home-page carousel slide. Only featured projects get one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CarouselSlide {
	pub slug: String,
	pub name: String,
	pub logo: String,
	#[cfg_attr(feature = "openapi", schema(value_type = Object))]
	pub theme: Theme,
	pub cover: String,
	pub desktop_images: Vec<String>,
	pub mobile_images: Vec<String>,
}

/// Tile on the project index.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GridTile {
	pub slug: String,
	pub name: String,
	pub logo: String,
	pub category: ProjectCategory,
	pub year: u16,
	#[cfg_attr(feature = "openapi", schema(value_type = Object))]
	pub theme: Theme,
	pub cover: String,
	pub href: String,
}

/// Everything the project page renders, plus neighbours for navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProjectDetail {
	pub slug: String,
	pub name: String,
	pub logo: String,
	#[cfg_attr(feature = "openapi", schema(value_type = Object))]
	pub theme: Theme,
	pub category: ProjectCategory,
	pub year: u16,
	pub url: Option<String>,
	pub desktop_images: Vec<String>,
	pub mobile_images: Vec<String>,
	pub previous_slug: String,
	pub next_slug: String,
}

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

impl From<&ProjectEntry> for CarouselSlide {
	fn from(entry: &ProjectEntry) -> Self {
		Self {
			slug: entry.slug.to_string(),
			name: entry.name.to_string(),
			logo: entry.logo.to_string(),
			theme: entry.theme,
			cover: entry.cover().to_string(),
			desktop_images: strings(entry.desktop_images),
			mobile_images: strings(entry.mobile_images),
		}
	}
}

impl From<&ProjectEntry> for GridTile {
	fn from(entry: &ProjectEntry) -> Self {
		Self {
			slug: entry.slug.to_string(),
			name: entry.name.to_string(),
			logo: entry.logo.to_string(),
			category: entry.category,
			year: entry.year,
			theme: entry.theme,
			cover: entry.cover().to_string(),
			href: entry.path(),
		}
	}
}

pub fn carousel_slides() -> Vec<CarouselSlide> {
	PROJECTS
		.iter()
		.filter(|p| p.featured)
		.map(CarouselSlide::from)
		.collect()
}

pub fn grid_tiles() -> Vec<GridTile> {
	PROJECTS.iter().map(GridTile::from).collect()
}

/// Detail view for `slug`. Previous and next wrap around the catalog.
pub fn project_detail(slug: &str) -> Option<ProjectDetail> {
	detail_in(PROJECTS, slug)
}

fn detail_in(entries: &[ProjectEntry], slug: &str) -> Option<ProjectDetail> {
	let index = entries.iter().position(|p| p.slug == slug)?;
	let entry = &entries[index];
	let len = entries.len();
	let previous = &entries[(index + len - 1) % len];
	let next = &entries[(index + 1) % len];

	Some(ProjectDetail {
		slug: entry.slug.to_string(),
		name: entry.name.to_string(),
		logo: entry.logo.to_string(),
		theme: entry.theme,
		category: entry.category,
		year: entry.year,
		url: entry.url.map(String::from),
		desktop_images: strings(entry.desktop_images),
		mobile_images: strings(entry.mobile_images),
		previous_slug: previous.slug.to_string(),
		next_slug: next.slug.to_string(),
	})
}
