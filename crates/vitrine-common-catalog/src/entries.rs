// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use crate::model::{ProjectCategory, ProjectEntry, Theme};

pub static PROJECTS: &[ProjectEntry] = &[
	ProjectEntry {
		slug: "atelier-lumiere",
		name: "Atelier Lumière",
		logo: "/images/projects/atelier-lumiere/logo.svg",
		theme: Theme {
			primary: "#1f2a44",
			secondary: "#f4efe6",
			accent: "#d4a373",
			text: "#ffffff",
		},
		category: ProjectCategory::Ecommerce,
		year: 2024,
		url: Some("https://atelier-lumiere.fr"),
		featured: true,
		desktop_images: &[
			"/images/projects/atelier-lumiere/desktop-1.webp",
			"/images/projects/atelier-lumiere/desktop-2.webp",
			"/images/projects/atelier-lumiere/desktop-3.webp",
		],
		mobile_images: &[
			"/images/projects/atelier-lumiere/mobile-1.webp",
			"/images/projects/atelier-lumiere/mobile-2.webp",
		],
	},
	ProjectEntry {
		slug: "cabinet-morel",
		name: "Cabinet Morel Avocats",
		logo: "/images/projects/cabinet-morel/logo.svg",
		theme: Theme {
			primary: "#0b3d2e",
			secondary: "#e9f1ec",
			accent: "#c9a227",
			text: "#ffffff",
		},
		category: ProjectCategory::Website,
		year: 2024,
		url: Some("https://cabinet-morel.fr"),
		featured: true,
		desktop_images: &[
			"/images/projects/cabinet-morel/desktop-1.webp",
			"/images/projects/cabinet-morel/desktop-2.webp",
		],
		mobile_images: &["/images/projects/cabinet-morel/mobile-1.webp"],
	},
	ProjectEntry {
		slug: "shaked-fitness",
		name: "Shaked Fitness",
		logo: "/images/projects/shaked-fitness/logo.svg",
		theme: Theme {
			primary: "#ff5a36",
			secondary: "#101010",
			accent: "#ffd23f",
			text: "#101010",
		},
		category: ProjectCategory::MobileApp,
		year: 2023,
		url: None,
		featured: true,
		desktop_images: &[
			"/images/projects/shaked-fitness/desktop-1.webp",
			"/images/projects/shaked-fitness/desktop-2.webp",
		],
		mobile_images: &[
			"/images/projects/shaked-fitness/mobile-1.webp",
			"/images/projects/shaked-fitness/mobile-2.webp",
			"/images/projects/shaked-fitness/mobile-3.webp",
		],
	},
	ProjectEntry {
		slug: "maison-verde",
		name: "Maison Verde",
		logo: "/images/projects/maison-verde/logo.svg",
		theme: Theme {
			primary: "#2d6a4f",
			secondary: "#fefae0",
			accent: "#bc6c25",
			text: "#ffffff",
		},
		category: ProjectCategory::Branding,
		year: 2023,
		url: Some("https://maisonverde.be"),
		featured: false,
		desktop_images: &[
			"/images/projects/maison-verde/desktop-1.webp",
			"/images/projects/maison-verde/desktop-2.webp",
		],
		mobile_images: &["/images/projects/maison-verde/mobile-1.webp"],
	},
	ProjectEntry {
		slug: "dashboard-logistik",
		name: "Logistik Dashboard",
		logo: "/images/projects/dashboard-logistik/logo.svg",
		theme: Theme {
			primary: "#3a0ca3",
			secondary: "#f1f3f8",
			accent: "#4cc9f0",
			text: "#ffffff",
		},
		category: ProjectCategory::WebApp,
		year: 2022,
		url: None,
		featured: true,
		desktop_images: &[
			"/images/projects/dashboard-logistik/desktop-1.webp",
			"/images/projects/dashboard-logistik/desktop-2.webp",
			"/images/projects/dashboard-logistik/desktop-3.webp",
		],
		mobile_images: &[],
	},
	ProjectEntry {
		slug: "boulangerie-levain",
		name: "Boulangerie Levain",
		logo: "/images/projects/boulangerie-levain/logo.svg",
		theme: Theme {
			primary: "#7f5539",
			secondary: "#ede0d4",
			accent: "#e6ccb2",
			text: "#ffffff",
		},
		category: ProjectCategory::Website,
		year: 2022,
		url: Some("https://boulangerie-levain.fr"),
		featured: false,
		desktop_images: &["/images/projects/boulangerie-levain/desktop-1.webp"],
		mobile_images: &["/images/projects/boulangerie-levain/mobile-1.webp"],
	},
];

#[cfg(test)]
pub(crate) const fn test_entry(slug: &'static str) -> ProjectEntry {
	ProjectEntry {
		slug,
		name: "Test",
		logo: "/logo.svg",
		theme: Theme {
			primary: "#000000",
			secondary: "#ffffff",
			accent: "#ff0000",
			text: "#ffffff",
		},
		category: ProjectCategory::Website,
		year: 2025,
		url: None,
		featured: false,
		desktop_images: &["/cover.webp"],
		mobile_images: &[],
	}
}
