// SPDX-License-Identifier: PMPL-1.0-or-later

//! Gettext `.po` catalog parsing.
//!
//! The parser pairs each `msgid "..."` line with the next `msgstr "..."`
//! line and ignores everything else. It is a subset of gettext on purpose:
//! existing catalogs for this format rely on the tolerant behaviour below.
//!
//! ## Scan rules
//!
//! - While waiting for an original, only a line starting with `msgid `
//!   (after trimming) is recognised.
//! - While waiting for a translation, only a line starting with `msgstr `
//!   is recognised. Another `msgid ` in between is skipped, so the pending
//!   original keeps waiting for its `msgstr`.
//! - Continuation strings, comments, flags, `msgctxt`, `msgid_plural` and
//!   `msgstr[n]` lines are never recognised. Multi-line entries therefore
//!   only contribute the segment on their `msgid`/`msgstr` line.
//!
//! Field text is taken from the first to the last double quote on the line,
//! then escape-decoded in a single pass.

use regex::Regex;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

/// Escape sequences understood inside quoted fields, keyed by the character
/// following the backslash.
const ESCAPES: [(char, char); 8] = [
    ('t', '\t'),
    ('n', '\n'),
    ('r', '\r'),
    ('0', '\0'),
    ('v', '\u{0B}'),
    ('f', '\u{0C}'),
    ('\\', '\\'),
    ('"', '"'),
];

/// In-memory mapping from original string to translated string for one
/// locale.
///
/// Empty translations are kept so the catalog mirrors the file, but
/// [`Catalog::lookup`] treats them as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. A repeated original replaces the earlier entry.
    pub fn insert(&mut self, original: impl Into<String>, translation: impl Into<String>) {
        self.entries.insert(original.into(), translation.into());
    }

    /// Raw stored translation, including empty ones.
    pub fn get(&self, original: &str) -> Option<&str> {
        self.entries.get(original).map(String::as_str)
    }

    /// Usable translation for `original`: present and non-empty.
    pub fn lookup(&self, original: &str) -> Option<&str> {
        self.get(original).filter(|translation| !translation.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(original, translation)| (original.as_str(), translation.as_str()))
    }
}

enum ScanState {
    ExpectingOriginal,
    ExpectingTranslation { original: String },
}

/// Parse catalog text. Never fails; unrecognised lines are skipped and an
/// original without a following `msgstr` is dropped.
pub fn parse_catalog(text: &str) -> Catalog {
    let mut catalog = Catalog::new();
    let mut state = ScanState::ExpectingOriginal;

    for line in text.lines() {
        let line = line.trim();
        state = match state {
            ScanState::ExpectingOriginal => match line.strip_prefix("msgid ") {
                Some(field) => ScanState::ExpectingTranslation {
                    original: decode_field(field),
                },
                None => ScanState::ExpectingOriginal,
            },
            ScanState::ExpectingTranslation { original } => match line.strip_prefix("msgstr ") {
                Some(field) => {
                    catalog.insert(original, decode_field(field));
                    ScanState::ExpectingOriginal
                }
                None => ScanState::ExpectingTranslation { original },
            },
        };
    }

    catalog
}

/// Load and parse the catalog at `path`.
///
/// Returns `None` when the file does not exist. Files that exist but cannot
/// be read are logged and also reported as `None`, so callers serve the
/// original strings either way.
pub fn load_catalog(path: &Path) -> Option<Catalog> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no catalog file");
            return None;
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "skipping unreadable catalog");
            return None;
        }
    };

    let catalog = parse_catalog(&decode_text(&raw));
    tracing::debug!(path = %path.display(), entries = catalog.len(), "loaded catalog");
    Some(catalog)
}

/// Decode escape sequences from [`ESCAPES`] in one pass. A backslash that
/// does not start a known sequence is kept as-is.
pub fn unescape(raw: &str) -> String {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        let escape = chars
            .peek()
            .and_then(|next| ESCAPES.iter().find(|(code, _)| code == next));
        match escape {
            Some(&(_, replacement)) => {
                decoded.push(replacement);
                chars.next();
            }
            None => decoded.push('\\'),
        }
    }

    decoded
}

fn decode_field(field: &str) -> String {
    unescape(&unquote(field.trim_start()))
}

/// Strip one pair of enclosing quotes: everything from the first to the
/// last `"` is replaced by its inner text. Text outside the quotes stays.
fn unquote(field: &str) -> Cow<'_, str> {
    static QUOTED: OnceLock<Regex> = OnceLock::new();
    let quoted = QUOTED.get_or_init(|| Regex::new(r#""(.*)""#).unwrap());
    quoted.replace(field, "$1")
}

/// Decode line by line: UTF-8 where the line is valid, Windows-1252 for the
/// lines that are not. A leading UTF-8 BOM is dropped.
fn decode_text(raw: &[u8]) -> String {
    let raw = raw.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(raw);
    let mut text = String::with_capacity(raw.len());

    for line in raw.split_inclusive(|&byte| byte == b'\n') {
        match encoding_rs::UTF_8.decode_without_bom_handling_and_without_replacement(line) {
            Some(decoded) => text.push_str(&decoded),
            None => {
                let (decoded, _) = encoding_rs::WINDOWS_1252.decode_without_bom_handling(line);
                text.push_str(&decoded);
            }
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_msgid_with_msgstr() {
        let catalog = parse_catalog("msgid \"Hello\"\nmsgstr \"Hola\"\n");
        assert_eq!(catalog.get("Hello"), Some("Hola"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn all_escapes_decode() {
        assert_eq!(
            unescape(r#"\t\n\r\0\v\f\\\""#),
            "\t\n\r\0\u{0B}\u{0C}\\\""
        );
    }

    #[test]
    fn escaped_backslash_is_not_decoded_twice() {
        assert_eq!(unescape(r"line\\nend"), "line\\nend");
        assert_eq!(unescape(r"path\\to\\file"), "path\\to\\file");
    }

    #[test]
    fn unknown_escape_kept_verbatim() {
        assert_eq!(unescape(r"a\qb"), "a\\qb");
        assert_eq!(unescape("trailing\\"), "trailing\\");
    }

    #[test]
    fn unquote_is_greedy_between_first_and_last_quote() {
        assert_eq!(unquote(r#""a" "b""#), r#"a" "b"#);
        assert_eq!(unquote("no quotes"), "no quotes");
    }

    #[test]
    fn msgid_while_translation_pending_is_skipped() {
        let text = "msgid \"first\"\nmsgid \"second\"\nmsgstr \"uno\"\n";
        let catalog = parse_catalog(text);
        assert_eq!(catalog.get("first"), Some("uno"));
        assert_eq!(catalog.get("second"), None);
    }

    #[test]
    fn plural_and_context_lines_ignored() {
        let text = concat!(
            "msgctxt \"menu\"\n",
            "msgid \"File\"\n",
            "msgstr \"Fichier\"\n",
            "msgid \"apple\"\n",
            "msgid_plural \"apples\"\n",
            "msgstr[0] \"pomme\"\n",
            "msgstr[1] \"pommes\"\n",
        );
        let catalog = parse_catalog(text);
        assert_eq!(catalog.get("File"), Some("Fichier"));
        assert_eq!(catalog.get("apple"), None);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn lookup_hides_empty_translations() {
        let catalog = parse_catalog("msgid \"X\"\nmsgstr \"\"\n");
        assert_eq!(catalog.get("X"), Some(""));
        assert_eq!(catalog.lookup("X"), None);
    }

    #[test]
    fn latin1_bytes_fall_back_to_windows_1252() {
        let raw = b"msgid \"Caf\xe9\"\nmsgstr \"Caf\xe9\"\n";
        let catalog = parse_catalog(&decode_text(raw));
        assert_eq!(catalog.get("Café"), Some("Café"));
    }

    #[test]
    fn legacy_line_does_not_garble_utf8_lines() {
        let mut raw = "msgid \"Hello\"\nmsgstr \"Olá\"\n".as_bytes().to_vec();
        raw.extend_from_slice(b"msgid \"Caf\xe9\"\nmsgstr \"x\"\n");

        let catalog = parse_catalog(&decode_text(&raw));
        assert_eq!(catalog.get("Hello"), Some("Olá"));
        assert_eq!(catalog.get("Café"), Some("x"));
    }

    #[test]
    fn line_endings_survive_decoding() {
        assert_eq!(decode_text(b"a\r\nb\xe9\nc"), "a\r\nbé\nc");
    }

    #[test]
    fn utf8_bom_dropped() {
        let raw = "\u{FEFF}msgid \"a\"\nmsgstr \"b\"\n".as_bytes();
        assert_eq!(parse_catalog(&decode_text(raw)).get("a"), Some("b"));
    }
}
