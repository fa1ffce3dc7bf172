// SPDX-License-Identifier: PMPL-1.0-or-later

//! po-lingo: runtime string translation backed by gettext `.po` catalogs.
//!
//! A [`i18n::TranslationEngine`] points at a directory of `<locale>.po`
//! files. It picks a locale (explicitly, from the system locale signal, or
//! by negotiating an `Accept-Language` header), loads that locale's catalog
//! on first use and translates strings, returning the original text
//! whenever no translation is available.

pub mod config;
pub mod error;
pub mod i18n;

pub use error::{Error, Result};
