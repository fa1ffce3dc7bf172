// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation of application strings through gettext `.po` catalogs.
//!
//! ## Layout
//!
//! | Module      | Role                                                    |
//! |-------------|---------------------------------------------------------|
//! | `catalog`   | `.po` parsing into a [`Catalog`]                        |
//! | `locale`    | system signal, region fallback, header negotiation      |
//! | `engine`    | [`TranslationEngine`]: locale state and cached lookups  |
//! | `discovery` | [`list_available`]: catalogs present in a directory     |
//! | `iso639`    | display labels for locale codes                         |
//!
//! ## Fallback
//!
//! Translation never fails. A missing catalog, a missing key or an empty
//! translation all return the original (trimmed) text. The only error is a
//! catalog directory that does not exist.
//!
//! ```no_run
//! use po_lingo::i18n::TranslationEngine;
//!
//! let mut engine = TranslationEngine::new("lang", Some("es_MX"))?;
//! engine.set_locale_from_request_header(Some("fr-CA,fr;q=0.9,en;q=0.5"));
//! println!("{}", engine.translate("Save changes"));
//! # Ok::<(), po_lingo::Error>(())
//! ```

mod catalog;
mod discovery;
mod engine;
mod iso639;
mod locale;

pub use catalog::{load_catalog, parse_catalog, unescape, Catalog};
pub use discovery::list_available;
pub use engine::{CatalogState, TranslationEngine};
pub use iso639::{language_name, native_name, EnglishLabels, LabelLookup, NativeLabels};
pub use locale::{
    derive_system_locale, header_candidates, negotiate, primary_subtag, separator_variants,
    system_locale_signal, DEFAULT_LOCALE,
};
