// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! robots.txt and sitemap generation.

use std::fmt::Write;

/// A page listed in the sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
	pub path: String,
	pub changefreq: &'static str,
	pub priority: &'static str,
}

const STATIC_ROUTES: &[(&str, &str, &str)] = &[
	("/", "weekly", "1.0"),
	("/about", "monthly", "0.8"),
	("/contact", "monthly", "0.8"),
	("/projects", "weekly", "0.9"),
	("/legal-notice", "yearly", "0.3"),
	("/privacy-policy", "yearly", "0.3"),
];

/// Fixed routes followed by one entry per catalog project, in catalog order.
pub fn sitemap_entries() -> Vec<SitemapEntry> {
	let fixed = STATIC_ROUTES
		.iter()
		.map(|(path, changefreq, priority)| SitemapEntry {
			path: (*path).to_string(),
			changefreq,
			priority,
		});

	let projects = vitrine_common_catalog::PROJECTS.iter().map(|p| SitemapEntry {
		path: p.path(),
		changefreq: "monthly",
		priority: "0.7",
	});

	fixed.chain(projects).collect()
}

pub fn sitemap_xml(base_url: &str) -> String {
	let base = base_url.trim_end_matches('/');
	let mut out = String::from(
		"<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
		 <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
	);

	for entry in sitemap_entries() {
		let loc = xml_escape(&format!("{base}{}", entry.path));
		let _ = write!(
			out,
			"  <url>\n    <loc>{loc}</loc>\n    <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
			entry.changefreq, entry.priority
		);
	}

	out.push_str("</urlset>\n");
	out
}

pub fn robots_txt(base_url: &str) -> String {
	format!(
		"User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}/sitemap.xml\n",
		base_url.trim_end_matches('/')
	)
}

fn xml_escape(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn robots_disallows_api_and_points_to_sitemap() {
		let robots = robots_txt("https://studio.example/");
		assert!(robots.contains("User-agent: *"));
		assert!(robots.contains("Disallow: /api/"));
		assert!(robots.ends_with("Sitemap: https://studio.example/sitemap.xml\n"));
	}

	#[test]
	fn sitemap_lists_fixed_routes_and_every_project() {
		let xml = sitemap_xml("https://studio.example");
		for path in ["/", "/about", "/contact", "/projects", "/legal-notice", "/privacy-policy"] {
			let loc = format!("<loc>https://studio.example{path}</loc>");
			assert!(xml.contains(&loc), "missing {path}");
		}
		for slug in vitrine_common_catalog::slugs() {
			let loc = format!("<loc>https://studio.example/projects/{slug}</loc>");
			assert!(xml.contains(&loc), "missing project {slug}");
		}
		assert_eq!(
			xml.matches("<url>").count(),
			STATIC_ROUTES.len() + vitrine_common_catalog::PROJECTS.len()
		);
	}

	#[test]
	fn sitemap_is_well_formed_prologue() {
		let xml = sitemap_xml("https://studio.example");
		assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset"));
		assert!(xml.trim_end().ends_with("</urlset>"));
	}

	#[test]
	fn base_url_is_escaped() {
		let xml = sitemap_xml("https://studio.example/?a=1&b=<2>");
		assert!(xml.contains("https://studio.example/?a=1&amp;b=&lt;2&gt;/about"));
		assert!(!xml.contains("&b=<"));
	}

	#[test]
	fn escape_handles_quotes() {
		assert_eq!(xml_escape(r#"a"b'c"#), "a&quot;b&apos;c");
	}

	proptest! {
		#[test]
		fn escaped_text_has_no_raw_markup(input in ".{0,64}") {
			let escaped = xml_escape(&input);
			prop_assert!(!escaped.contains('<'));
			prop_assert!(!escaped.contains('>'));
			prop_assert!(!escaped.contains('"'));
		}
	}
}
