// SPDX-License-Identifier: PMPL-1.0-or-later

//! Discovery of the catalogs available in a directory.

use super::iso639::LabelLookup;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Catalog file reserved for the untranslated template.
const TEMPLATE_CATALOG: &str = "default";
const README_STEM: &str = "README";

/// List the catalogs directly inside `path` as `label -> locale code`.
///
/// Only regular `*.po` files count (symlinks are followed, subdirectories
/// are not entered). `default.po` and `README.po` are skipped. Files are
/// visited in file-name order; when two codes share a label the later file
/// wins.
pub fn list_available<L>(path: &Path, labels: &L) -> Result<BTreeMap<String, String>>
where
    L: LabelLookup + ?Sized,
{
    if !path.is_dir() {
        return Err(Error::DirectoryNotFound(path.to_path_buf()));
    }

    let walker = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut languages = BTreeMap::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source: io::Error::from(err),
                });
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let Some(code) = catalog_locale(entry.file_name()) else {
            continue;
        };

        let label = labels.label(code);
        if let Some(replaced) = languages.insert(label.clone(), code.to_string()) {
            tracing::debug!(%label, %replaced, winner = code, "catalog label collision");
        }
    }

    Ok(languages)
}

/// Locale code for a catalog file name, `None` for reserved or non-catalog
/// files.
fn catalog_locale(file_name: &OsStr) -> Option<&str> {
    let code = file_name.to_str()?.strip_suffix(".po")?;
    match code {
        "" | TEMPLATE_CATALOG | README_STEM => None,
        code => Some(code),
    }
}
