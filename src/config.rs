// SPDX-License-Identifier: PMPL-1.0-or-later

//! Engine configuration files.

use crate::i18n::{EnglishLabels, LabelLookup, NativeLabels, TranslationEngine};
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    #[default]
    English,
    Native,
}

impl LabelStyle {
    pub fn lookup(self) -> &'static dyn LabelLookup {
        match self {
            LabelStyle::English => &EnglishLabels,
            LabelStyle::Native => &NativeLabels,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Directory holding the `<locale>.po` catalogs.
    pub directory: PathBuf,
    #[serde(default)]
    pub locale: Option<String>,
    /// Process locale signal (`code[:rest]`) used when `locale` is unset.
    #[serde(default)]
    pub system_locale: Option<String>,
    #[serde(default)]
    pub labels: LabelStyle,
}

impl EngineConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            locale: None,
            system_locale: None,
            labels: LabelStyle::default(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading engine config {}", path.display()))?;
        let mut config: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json engine config {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml engine config {}", path.display()))?,
            _ => {
                return Err(anyhow!(
                    "unsupported engine config extension for {}",
                    path.display()
                ))
            }
        };

        // Relative catalog directories are relative to the config file.
        if config.directory.is_relative() {
            if let Some(parent) = path.parent() {
                config.directory = parent.join(&config.directory);
            }
        }
        Ok(config)
    }

    pub fn build_engine(&self) -> Result<TranslationEngine> {
        let engine = TranslationEngine::with_system_locale(
            &self.directory,
            self.locale.as_deref(),
            self.system_locale.as_deref(),
        )?;
        Ok(engine)
    }
}
