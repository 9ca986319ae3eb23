use crate::i18n::{BundleValidator, Language};
use crate::view::{LandingPage, Msg};
use anyhow::{bail, Result};
use tracing::{debug, info, warn};

/// Every language's page, rendered once up front.
///
/// Built by walking a single [`LandingPage`] through each language selection,
/// the same transitions the selector performs.
#[derive(Debug, Clone)]
pub struct RenderedSite {
    pages: [String; 3],
}

impl RenderedSite {
    /// Render all pages.
    pub fn build() -> Self {
        let mut page = LandingPage::new();
        let mut pages: [String; 3] = Default::default();

        for lang in Language::ALL {
            page.update(Msg::SelectLanguage(lang));
            let html = page.render();
            debug!("Rendered {} page ({} bytes)", lang, html.len());
            pages[lang.index()] = html;
        }

        Self { pages }
    }

    /// Validate the copy bundles, then render all pages.
    ///
    /// Warnings are logged; any error aborts so a broken page is never published.
    pub fn build_validated() -> Result<Self> {
        let report = BundleValidator::validate_all();

        for warning in &report.warnings {
            warn!("Copy validation: {}", warning);
        }

        if report.has_errors() {
            bail!(
                "Copy validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            );
        }

        let site = Self::build();
        info!("Rendered {} language pages", site.pages.len());
        Ok(site)
    }

    /// Page for a language.
    pub fn page(&self, language: Language) -> &str {
        &self.pages[language.index()]
    }

    /// Page shown on a fresh load.
    pub fn default_page(&self) -> &str {
        self.page(Language::default())
    }
}
