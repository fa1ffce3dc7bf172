// SPDX-License-Identifier: PMPL-1.0-or-later

//! Display labels for locale codes.
//!
//! Catalog discovery needs a human-readable label for every locale code it
//! finds. [`LabelLookup`] is that seam; the default implementations use the
//! ISO 639-1 names below and render a region subtag as a suffix, so
//! `pt_BR` becomes `Portuguese (BR)`.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Maps a locale code to its display label.
pub trait LabelLookup {
    fn label(&self, code: &str) -> String;
}

impl<F> LabelLookup for F
where
    F: Fn(&str) -> String,
{
    fn label(&self, code: &str) -> String {
        self(code)
    }
}

/// Labels in English, e.g. `de_AT` -> `German (AT)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

/// Labels in the language's own script, e.g. `de_AT` -> `Deutsch (AT)`.
///
/// Codes without a native name fall back to the English name.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeLabels;

impl LabelLookup for EnglishLabels {
    fn label(&self, code: &str) -> String {
        compose_label(code, language_name)
    }
}

impl LabelLookup for NativeLabels {
    fn label(&self, code: &str) -> String {
        compose_label(code, |primary| {
            native_name(primary).or_else(|| language_name(primary))
        })
    }
}

/// Unknown primary codes label as the code itself.
fn compose_label(code: &str, name_of: impl Fn(&str) -> Option<&'static str>) -> String {
    let (primary, region) = match code.split_once(['_', '-']) {
        Some((primary, region)) => (primary, Some(region)),
        None => (code, None),
    };

    match (name_of(&primary.to_ascii_lowercase()), region) {
        (Some(name), Some(region)) if !region.is_empty() => {
            format!("{} ({})", name, region.to_ascii_uppercase())
        }
        (Some(name), _) => name.to_string(),
        (None, _) => code.to_string(),
    }
}

/// English name of an ISO 639-1 code, `None` for codes outside the table.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "ar" => Some("Arabic"),
        "bg" => Some("Bulgarian"),
        "ca" => Some("Catalan"),
        "cs" => Some("Czech"),
        "da" => Some("Danish"),
        "de" => Some("German"),
        "el" => Some("Greek"),
        "en" => Some("English"),
        "eo" => Some("Esperanto"),
        "es" => Some("Spanish"),
        "et" => Some("Estonian"),
        "eu" => Some("Basque"),
        "fa" => Some("Persian"),
        "fi" => Some("Finnish"),
        "fr" => Some("French"),
        "ga" => Some("Irish"),
        "gl" => Some("Galician"),
        "he" => Some("Hebrew"),
        "hi" => Some("Hindi"),
        "hr" => Some("Croatian"),
        "hu" => Some("Hungarian"),
        "id" => Some("Indonesian"),
        "is" => Some("Icelandic"),
        "it" => Some("Italian"),
        "ja" => Some("Japanese"),
        "ko" => Some("Korean"),
        "lt" => Some("Lithuanian"),
        "lv" => Some("Latvian"),
        "ms" => Some("Malay"),
        "nl" => Some("Dutch"),
        "no" | "nb" => Some("Norwegian"),
        "pl" => Some("Polish"),
        "pt" => Some("Portuguese"),
        "ro" => Some("Romanian"),
        "ru" => Some("Russian"),
        "sk" => Some("Slovak"),
        "sl" => Some("Slovenian"),
        "sr" => Some("Serbian"),
        "sv" => Some("Swedish"),
        "th" => Some("Thai"),
        "tr" => Some("Turkish"),
        "uk" => Some("Ukrainian"),
        "vi" => Some("Vietnamese"),
        "zh" => Some("Chinese"),
        _ => None,
    }
}

/// Native name of an ISO 639-1 code, used where users should see their
/// language written in its own script.
pub fn native_name(code: &str) -> Option<&'static str> {
    match code {
        "ca" => Some("Català"),
        "de" => Some("Deutsch"),
        "en" => Some("English"),
        "es" => Some("Español"),
        "fr" => Some("Français"),
        "it" => Some("Italiano"),
        "ja" => Some("日本語"),
        "ko" => Some("한국어"),
        "nl" => Some("Nederlands"),
        "pl" => Some("Polski"),
        "pt" => Some("Português"),
        "ru" => Some("Русский"),
        "sv" => Some("Svenska"),
        "uk" => Some("Українська"),
        "zh" => Some("中文"),
        _ => None,
    }
}
