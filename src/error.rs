// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error type for the translation engine.
//!
//! Only directory-level problems surface as errors. Missing catalogs,
//! malformed catalog lines and untranslated strings all degrade to the
//! original text instead.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("languages directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
