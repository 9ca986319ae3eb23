//! Language registry: Single source of truth for language metadata.
//!
//! The registry is a static table indexed by [`Language::index`], so looking
//! up a `Language` is a plain array access. Lookup by code string is linear
//! over three entries.

use crate::i18n::Language;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// The language this entry describes
    pub language: Language,

    /// ISO 639-1 language code (e.g., "en", "pt", "es")
    pub code: &'static str,

    /// English name of the language (e.g., "Portuguese")
    pub name: &'static str,

    /// Native name of the language, used as the selector's accessible label
    pub native_name: &'static str,

    /// Short label shown on the selector control (e.g., "PT")
    pub label: &'static str,

    /// Whether this is the language shown on a fresh page load (only one should be true)
    pub is_default: bool,
}

/// Global language registry.
pub struct LanguageRegistry {
    languages: [LanguageConfig; 3],
}

static REGISTRY: LanguageRegistry = LanguageRegistry {
    languages: [
        LanguageConfig {
            language: Language::En,
            code: "en",
            name: "English",
            native_name: "English",
            label: "EN",
            is_default: true,
        },
        LanguageConfig {
            language: Language::Pt,
            code: "pt",
            name: "Portuguese",
            native_name: "Português",
            label: "PT",
            is_default: false,
        },
        LanguageConfig {
            language: Language::Es,
            code: "es",
            name: "Spanish",
            native_name: "Español",
            label: "ES",
            is_default: false,
        },
    ],
};

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        &REGISTRY
    }

    /// Get the configuration of a language.
    pub fn config(&self, language: Language) -> &LanguageConfig {
        &self.languages[language.index()]
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the code is known
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages in selector order.
    pub fn list_all(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Get the default language configuration.
    pub fn default_language(&self) -> &LanguageConfig {
        self.config(Language::default())
    }
}
