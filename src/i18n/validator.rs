//! Copy bundle validation.
//!
//! Bundles are plain constants, so the compiler already guarantees every field
//! exists and every bundle has six services. This module checks what the type
//! system cannot: that the text is actually filled in, free of template
//! leftovers, and translated.

use crate::i18n::{Language, LanguageStrings};
use crate::whatsapp::initial_message;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the copy bundles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make a page unfit to publish
    pub errors: Vec<String>,

    /// Non-critical issues worth a look
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the shipped copy bundles.
pub struct BundleValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
static SPACING_REGEX: OnceLock<Regex> = OnceLock::new();

impl BundleValidator {
    /// Validate every language's bundle and greeting.
    pub fn validate_all() -> ValidationReport {
        let mut report = ValidationReport::new();
        let reference = LanguageStrings::for_language(Language::default());

        for lang in Language::ALL {
            let copy = LanguageStrings::for_language(lang);
            report.merge(Self::validate_bundle(lang.code(), copy));
            report.merge(Self::check_text(lang.code(), "greeting", initial_message(lang)));

            if !lang.is_default() {
                report.merge(Self::compare_with_reference(lang.code(), copy, reference));
            }
        }

        report
    }

    /// Validate a single bundle on its own.
    ///
    /// Checks that:
    /// - every field has visible text
    /// - no `{placeholder}` tokens are left unfilled
    /// - no field has stray leading, trailing or doubled whitespace
    /// - service titles are unique within the bundle
    pub fn validate_bundle(code: &str, copy: &LanguageStrings) -> ValidationReport {
        let mut report = ValidationReport::new();

        for (field, value) in copy.fields() {
            report.merge(Self::check_text(code, &field, value));
        }

        let mut seen = HashSet::new();
        for service in &copy.services {
            if !seen.insert(service.title) {
                report.errors.push(format!(
                    "[{}] duplicate service title: {:?}",
                    code, service.title
                ));
            }
        }

        report
    }

    /// Checks applying to any single string.
    fn check_text(code: &str, field: &str, value: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        if value.trim().is_empty() {
            report.errors.push(format!("[{}] {} is empty", code, field));
            return report;
        }

        let placeholders = Self::extract_placeholders(value);
        if !placeholders.is_empty() {
            report.errors.push(format!(
                "[{}] {} has unfilled placeholders: {:?}",
                code, field, placeholders
            ));
        }

        if value.trim() != value || Self::spacing_regex().is_match(value) {
            report
                .warnings
                .push(format!("[{}] {} has irregular whitespace", code, field));
        }

        report
    }

    /// Flag fields left identical to the reference language.
    fn compare_with_reference(
        code: &str,
        copy: &LanguageStrings,
        reference: &LanguageStrings,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        let pairs = copy.fields().into_iter().zip(reference.fields());
        for ((field, value), (_, reference_value)) in pairs {
            if value == reference_value {
                report
                    .warnings
                    .push(format!("[{}] {} looks untranslated: {:?}", code, field, value));
            }
        }

        report
    }

    /// Extract all `{name}` tokens from text
    fn extract_placeholders(text: &str) -> Vec<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{[a-zA-Z_]+\}").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn spacing_regex() -> &'static Regex {
        SPACING_REGEX.get_or_init(|| Regex::new(r"\s{2,}").unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::ServiceItem;

    fn sample_bundle() -> LanguageStrings {
        LanguageStrings::for_language(Language::En).clone()
    }

    // ==================== Shipped Bundle Tests ====================

    #[test]
    fn test_shipped_bundles_are_clean() {
        let report = BundleValidator::validate_all();
        assert!(report.is_clean(), "unexpected report: {:?}", report);
    }

    // ==================== Placeholder Tests ====================

    #[test]
    fn test_extract_placeholders_single() {
        let found = BundleValidator::extract_placeholders("Hello {name}!");
        assert_eq!(found, vec!["{name}"]);
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(BundleValidator::extract_placeholders("© EM SERVICES").is_empty());
    }

    #[test]
    fn test_placeholder_is_error() {
        let mut copy = sample_bundle();
        copy.footer = "© {company} — All rights reserved.";

        let report = BundleValidator::validate_bundle("en", &copy);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("footer"));
        assert!(report.errors[0].contains("{company}"));
    }

    // ==================== Empty Field Tests ====================

    #[test]
    fn test_empty_field_is_error() {
        let mut copy = sample_bundle();
        copy.hero_title = "   ";

        let report = BundleValidator::validate_bundle("en", &copy);
        assert_eq!(report.errors, vec!["[en] hero_title is empty"]);
    }

    #[test]
    fn test_empty_service_desc_names_index() {
        let mut copy = sample_bundle();
        copy.services[4].desc = "";

        let report = BundleValidator::validate_bundle("en", &copy);
        assert_eq!(report.errors, vec!["[en] services[4].desc is empty"]);
    }

    // ==================== Whitespace Tests ====================

    #[test]
    fn test_doubled_whitespace_is_warning() {
        let mut copy = sample_bundle();
        copy.nav_services = "Our  Services";

        let report = BundleValidator::validate_bundle("en", &copy);
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("irregular whitespace"));
    }

    #[test]
    fn test_trailing_whitespace_is_warning() {
        let mut copy = sample_bundle();
        copy.footer = "© EM SERVICES ";

        let report = BundleValidator::validate_bundle("en", &copy);
        assert!(report.has_warnings());
    }

    // ==================== Duplicate Tests ====================

    #[test]
    fn test_duplicate_service_title_is_error() {
        let mut copy = sample_bundle();
        copy.services[5] = ServiceItem {
            title: copy.services[0].title,
            desc: "Something else.",
        };

        let report = BundleValidator::validate_bundle("en", &copy);
        assert!(report.errors[0].contains("duplicate service title"));
    }

    // ==================== Untranslated Tests ====================

    #[test]
    fn test_untranslated_field_is_warning() {
        let reference = sample_bundle();
        let mut copy = LanguageStrings::for_language(Language::Es).clone();
        copy.services_title = reference.services_title;

        let report = BundleValidator::compare_with_reference("es", &copy, &reference);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("services_title"));
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_merge() {
        let mut report = ValidationReport::new();
        let mut other = ValidationReport::new();
        other.errors.push("e".to_string());
        other.warnings.push("w".to_string());

        report.merge(other);
        assert!(report.has_errors());
        assert!(report.has_warnings());
    }
}
