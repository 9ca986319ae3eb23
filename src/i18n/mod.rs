//! Internationalization (i18n) module for the landing page copy.
//!
//! All language-related data lives here: the closed set of languages, their
//! display metadata, and the copy bundle each one renders.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for language metadata (codes, names, selector labels)
//! - `language`: The closed `Language` enum and code parsing
//! - `strings`: One static copy bundle per language
//! - `validator`: Completeness and consistency checks across bundles
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Language, LanguageStrings};
//!
//! let spanish: Language = "es".parse()?;
//! let copy = LanguageStrings::for_language(spanish);
//! assert_eq!(copy.services.len(), 6);
//! ```

mod language;
mod registry;
mod strings;
mod validator;

pub use language::{Language, UnknownLanguage};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::{LanguageStrings, ServiceItem, SERVICE_COUNT};
pub use validator::{BundleValidator, ValidationReport};
