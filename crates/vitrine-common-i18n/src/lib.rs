// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization support for the Vitrine site.
//!
//! The site ships in French, English and Hebrew. Hebrew is right-to-left.
//!
//! # Dictionary keys
//!
//! Keys use dot-notation grouped by page or feature, e.g. `nav.projects`,
//! `contact.error.invalid_email`.
//!
//! # Example
//!
//! ```
//! use vitrine_common_i18n::{t, t_fmt, Language};
//!
//! let title = t(Language::Fr, "nav.contact");
//! let footer = t_fmt(Language::He, "footer.copyright", &[("year", "2025")]);
//! assert!(Language::He.direction().as_html_dir() == "rtl");
//! ```

mod catalog;
mod detect;
mod locale;
mod resolve;

pub use catalog::{dictionary, t, t_fmt};
pub use detect::{
	detect_client_signal, language_from_accept_language, language_from_country,
	language_from_timezone,
};
pub use locale::{Direction, Language, LocaleInfo, ParseLanguageError, DEFAULT_LANGUAGE, LANGUAGES};
pub use resolve::{
	CountryLookup, LanguageResolver, LanguageSource, LookupError,
	Resolution, ResolutionInputs, SessionState, DEFAULT_GEO_TIMEOUT,
};
