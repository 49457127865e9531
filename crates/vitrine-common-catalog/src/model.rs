// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
	Website,
	Ecommerce,
	WebApp,
	MobileApp,
	Branding,
}

/// Colour tokens applied to a project's slide, tile and page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
	pub primary: &'static str,
	pub secondary: &'static str,
	pub accent: &'static str,
	pub text: &'static str,
}

/// A compiled-in portfolio record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
	pub slug: &'static str,
	pub name: &'static str,
	pub logo: &'static str,
	pub theme: Theme,
	pub category: ProjectCategory,
	pub year: u16,
	pub url: Option<&'static str>,
	/// Shown on the home carousel when set.
	pub featured: bool,
	pub desktop_images: &'static [&'static str],
	pub mobile_images: &'static [&'static str],
}

impl ProjectEntry {
	/// First desktop image, used as the cover on every view.
	pub fn cover(&self) -> &'static str {
		self.desktop_images.first().copied().unwrap_or(self.logo)
	}

	pub fn path(&self) -> String {
		format!("/projects/{}", self.slug)
	}
}
