//! Language type: the closed set of languages the page can be shown in.
//!
//! Every `Language` value has a registry entry and a copy bundle, so nothing
//! downstream of construction can fail. The only fallible step is parsing a
//! code string coming from outside (a URL path segment or a CLI argument).

use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A supported page language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, shown on a fresh page load
    #[default]
    En,
    /// Brazilian Portuguese
    Pt,
    /// Spanish
    Es,
}

/// Error returned when a language code is not one of `en`, `pt`, `es`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown language code: '{0}'")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// All languages in selector order.
    pub const ALL: [Language; 3] = [Language::En, Language::Pt, Language::Es];

    /// Position of this language in [`Language::ALL`] and in the registry.
    pub const fn index(self) -> usize {
        match self {
            Language::En => 0,
            Language::Pt => 1,
            Language::Es => 2,
        }
    }

    /// Get the ISO 639-1 language code (e.g., "en", "pt").
    pub fn code(self) -> &'static str {
        self.config().code
    }

    /// Get the registry entry for this language.
    pub fn config(self) -> &'static LanguageConfig {
        LanguageRegistry::get().config(self)
    }

    /// Get the English name of the language.
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "Português").
    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }

    /// Short uppercase label used on the selector control (e.g., "PT").
    pub fn label(self) -> &'static str {
        self.config().label
    }

    /// Path of the page rendered in this language.
    pub fn path(self) -> String {
        format!("/{}/", self.code())
    }

    /// Check if this is the language shown on a fresh page load.
    pub fn is_default(self) -> bool {
        self.config().is_default
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Parse a language code, ignoring ASCII case and surrounding whitespace.
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let normalized = code.trim().to_ascii_lowercase();
        LanguageRegistry::get()
            .get_by_code(&normalized)
            .map(|config| config.language)
            .ok_or_else(|| UnknownLanguage(code.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
