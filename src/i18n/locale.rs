// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale code helpers: system signal parsing, region splitting and
//! `Accept-Language` negotiation.
//!
//! Everything here is a pure function over strings and an existence
//! predicate, so the engine's policy can be tested without a filesystem.

use std::env;

/// Locale chosen when nothing else matches. It never needs a catalog file.
pub const DEFAULT_LOCALE: &str = "en";

/// Environment variables consulted by [`system_locale_signal`], in order.
const SYSTEM_LOCALE_VARS: [&str; 3] = ["LANGUAGE", "LC_ALL", "LANG"];

/// Extract the locale from a process locale signal of the form
/// `code[:rest]`.
///
/// ```
/// use po_lingo::i18n::derive_system_locale;
/// assert_eq!(derive_system_locale("fr_FR:en_US:en"), "fr_FR");
/// assert_eq!(derive_system_locale("de"), "de");
/// ```
pub fn derive_system_locale(signal: &str) -> &str {
    signal.split(':').next().unwrap_or_default()
}

/// Read the first non-empty locale signal from the process environment.
///
/// Binaries call this and hand the result to the engine; the engine itself
/// never reads the environment.
pub fn system_locale_signal() -> Option<String> {
    SYSTEM_LOCALE_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.trim().is_empty())
}

/// Primary subtag of an underscore-separated locale (`en_US` -> `en`), or
/// `None` when the code has no `_`.
pub fn primary_subtag(locale: &str) -> Option<&str> {
    locale.split_once('_').map(|(primary, _)| primary)
}

/// The locale as given, followed by its `_`/`-` swapped spelling when that
/// differs. Catalog file checks try both.
pub fn separator_variants(locale: &str) -> Vec<String> {
    let swapped: String = locale
        .chars()
        .map(|c| match c {
            '_' => '-',
            '-' => '_',
            other => other,
        })
        .collect();

    if swapped == locale {
        vec![locale.to_string()]
    } else {
        vec![locale.to_string(), swapped]
    }
}

/// Split an `Accept-Language`-shaped header into candidate language codes,
/// in header order.
///
/// The header is lowercased, spaces are removed and any `;` metadata
/// (including `q=` weights) is dropped. Weights are not compared; the
/// order of the header is the priority.
pub fn header_candidates(header: &str) -> Vec<String> {
    let normalized: String = header
        .to_lowercase()
        .chars()
        .filter(|c| *c != ' ')
        .collect();

    normalized
        .split(',')
        .filter_map(|entry| entry.split(';').next())
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pick a locale from a request header.
///
/// For each candidate in order: a code with a region subtag is accepted in
/// its full hyphenated form if `has_catalog` says so, otherwise as its
/// primary subtag. A code without a region is accepted as-is. `en` is
/// always acceptable. Falls back to [`DEFAULT_LOCALE`] when nothing
/// matches or no header is given.
pub fn negotiate<F>(header: Option<&str>, has_catalog: F) -> String
where
    F: Fn(&str) -> bool,
{
    let Some(header) = header else {
        return DEFAULT_LOCALE.to_string();
    };
    let acceptable = |code: &str| code == DEFAULT_LOCALE || has_catalog(code);

    for candidate in header_candidates(header) {
        let (primary, has_region) = match candidate.split_once('-') {
            Some((primary, _)) => (primary, true),
            None => (candidate.as_str(), false),
        };

        if has_region && acceptable(&candidate) {
            tracing::trace!(locale = %candidate, "negotiated full language range");
            return candidate;
        }
        if acceptable(primary) {
            tracing::trace!(locale = %primary, range = %candidate, "negotiated primary subtag");
            return primary.to_string();
        }
    }

    tracing::trace!(header, "no language range matched, using default");
    DEFAULT_LOCALE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(available: &'static [&'static str]) -> impl Fn(&str) -> bool {
        move |code: &str| available.iter().any(|known| *known == code)
    }

    #[test]
    fn system_signal_takes_first_segment() {
        assert_eq!(derive_system_locale("es_MX:es:en"), "es_MX");
        assert_eq!(derive_system_locale(""), "");
    }

    #[test]
    fn primary_subtag_splits_on_first_underscore() {
        assert_eq!(primary_subtag("en_US"), Some("en"));
        assert_eq!(primary_subtag("sr_Latn_RS"), Some("sr"));
        assert_eq!(primary_subtag("en-US"), None);
        assert_eq!(primary_subtag("en"), None);
    }

    #[test]
    fn separator_variants_swap_both_ways() {
        assert_eq!(separator_variants("en_US"), vec!["en_US", "en-US"]);
        assert_eq!(separator_variants("pt-br"), vec!["pt-br", "pt_br"]);
        assert_eq!(separator_variants("fr"), vec!["fr"]);
    }

    #[test]
    fn header_candidates_drop_weights_and_spaces() {
        assert_eq!(
            header_candidates("fr-CA, en;q=0.8 ,de ; q=0.5"),
            vec!["fr-ca", "en", "de"]
        );
        assert!(header_candidates("").is_empty());
    }

    #[test]
    fn region_falls_back_to_primary_before_next_candidate() {
        let locale = negotiate(Some("fr-CA,en;q=0.8"), only(&["fr", "en"]));
        assert_eq!(locale, "fr");
    }

    #[test]
    fn full_range_preferred_when_available() {
        let locale = negotiate(Some("pt-BR,pt"), only(&["pt-br", "pt"]));
        assert_eq!(locale, "pt-br");
    }

    #[test]
    fn header_order_beats_weights() {
        let locale = negotiate(Some("de;q=0.1,fr;q=0.9"), only(&["de", "fr"]));
        assert_eq!(locale, "de");
    }

    #[test]
    fn english_needs_no_catalog() {
        assert_eq!(negotiate(Some("ja,en-GB"), only(&[])), "en");
        assert_eq!(negotiate(Some("en-GB"), only(&[])), "en");
    }

    #[test]
    fn missing_or_unmatched_header_defaults_to_english() {
        assert_eq!(negotiate(None, only(&["fr"])), "en");
        assert_eq!(negotiate(Some(""), only(&["fr"])), "en");
        assert_eq!(negotiate(Some("ja,ko"), only(&["fr"])), "en");
    }
}
