use crate::i18n::{Language, LanguageStrings};
use crate::view::components::{self, BRAND};
use crate::view::html::escape;
use crate::whatsapp;
use tracing::debug;

/// Requests the view accepts. The language selector emits these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    SelectLanguage(Language),
}

/// The landing page and its only piece of mutable state, the active language.
///
/// A fresh page always starts in the default language; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingPage {
    language: Language,
}

impl LandingPage {
    pub fn new() -> Self {
        Self {
            language: Language::default(),
        }
    }

    /// Currently active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Copy bundle for the active language.
    pub fn copy(&self) -> &'static LanguageStrings {
        LanguageStrings::for_language(self.language)
    }

    /// Greeting for the active language, encoded for a URL query.
    pub fn encoded_message(&self) -> String {
        whatsapp::encoded_message(self.language)
    }

    /// Apply a message.
    ///
    /// # Returns
    /// `true` if the state changed and the page needs re-rendering, `false`
    /// when the requested language was already active.
    pub fn update(&mut self, msg: Msg) -> bool {
        match msg {
            Msg::SelectLanguage(language) => {
                if language == self.language {
                    debug!("Language {} already active", language);
                    return false;
                }
                debug!("Switching language {} -> {}", self.language, language);
                self.language = language;
                true
            }
        }
    }

    /// Render the full HTML document for the current state.
    pub fn render(&self) -> String {
        let copy = self.copy();
        let language = self.language;
        let encoded_message = self.encoded_message();

        format!(
            r#"<!DOCTYPE html>
<html lang="{code}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{brand}</title>
<meta name="description" content="{description}">
</head>
<body>
<div class="site">
{header}
{hero}
{services}
{footer}
</div>
</body>
</html>
"#,
            code = language.code(),
            brand = BRAND,
            description = escape(copy.hero_subtitle),
            header = components::header(copy, language),
            hero = components::hero(copy, &encoded_message),
            services = components::services(copy),
            footer = components::footer(copy),
        )
    }
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whatsapp::initial_message;
    use proptest::prelude::*;

    fn selection_sequence(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Language>> {
        prop::collection::vec(prop::sample::select(Language::ALL.to_vec()), len)
    }

    /// Extract every `href` of the `btn` call-to-action anchors
    fn cta_hrefs(html: &str) -> Vec<String> {
        html.split(r#"<a class="btn "#)
            .skip(1)
            .filter_map(|rest| {
                let start = rest.find(r#"href=""#)? + r#"href=""#.len();
                let end = start + rest[start..].find('"')?;
                Some(rest[start..end].to_string())
            })
            .collect()
    }

    // ==================== State Tests ====================

    #[test]
    fn test_starts_in_english() {
        let page = LandingPage::new();
        assert_eq!(page.language(), Language::En);
        assert_eq!(page, LandingPage::default());
    }

    #[test]
    fn test_update_changes_language() {
        let mut page = LandingPage::new();
        assert!(page.update(Msg::SelectLanguage(Language::Pt)));
        assert_eq!(page.language(), Language::Pt);
        assert_eq!(page.copy().nav_services, "Serviços");
    }

    #[test]
    fn test_selecting_active_language_is_noop() {
        let mut page = LandingPage::new();
        page.update(Msg::SelectLanguage(Language::Es));
        let before = page.render();

        assert!(!page.update(Msg::SelectLanguage(Language::Es)));
        assert_eq!(page.language(), Language::Es);
        assert_eq!(page.render(), before);
    }

    #[test]
    fn test_no_terminal_state() {
        let mut page = LandingPage::new();
        for _ in 0..3 {
            for lang in [Language::Pt, Language::Es, Language::En] {
                assert!(page.update(Msg::SelectLanguage(lang)));
            }
        }
        assert_eq!(page.language(), Language::En);
    }

    // ==================== Render Tests ====================

    #[test]
    fn test_default_render_primary_cta() {
        let html = LandingPage::new().render();
        let hrefs = cta_hrefs(&html);
        assert_eq!(hrefs.len(), 2);
        assert_eq!(
            hrefs[0],
            "https://wa.me/13212403690?text=Hello%21%20I%20came%20from%20EM%20SERVICES%20website.%20I%E2%80%99d%20like%20assistance."
        );
        assert!(hrefs[1].starts_with("https://wa.me/14079639347?text=Hello%21"));
    }

    #[test]
    fn test_render_sets_document_language() {
        let mut page = LandingPage::new();
        page.update(Msg::SelectLanguage(Language::Pt));
        assert!(page.render().contains(r#"<html lang="pt">"#));
    }

    #[test]
    fn test_cta_text_decodes_to_greeting() {
        let mut page = LandingPage::new();
        for lang in Language::ALL {
            page.update(Msg::SelectLanguage(lang));
            for href in cta_hrefs(&page.render()) {
                let (_, encoded) = href.split_once("?text=").unwrap();
                let decoded = urlencoding::decode(encoded).unwrap();
                assert_eq!(decoded, initial_message(lang));
            }
        }
    }

    #[test]
    fn test_both_ctas_carry_page_encoded_message() {
        let mut page = LandingPage::new();
        page.update(Msg::SelectLanguage(Language::Es));
        let encoded = page.encoded_message();

        for href in cta_hrefs(&page.render()) {
            assert!(href.ends_with(&format!("?text={}", encoded)));
        }
    }

    #[test]
    fn test_portuguese_then_spanish_leaves_no_portuguese() {
        let mut page = LandingPage::new();
        page.update(Msg::SelectLanguage(Language::Pt));
        page.update(Msg::SelectLanguage(Language::Es));
        let html = page.render();

        assert_eq!(html.matches("lang-btn active").count(), 1);
        assert!(html.contains(r#"<a class="lang-btn active" href="/es/""#));

        let spanish = LanguageStrings::for_language(Language::Es);
        for (_, value) in spanish.fields().into_iter().skip(1) {
            assert!(html.contains(&escape(value)), "missing Spanish text: {}", value);
        }

        // The selector's own labels name every language; skip lang_name
        let portuguese = LanguageStrings::for_language(Language::Pt);
        for (name, value) in portuguese.fields().into_iter().skip(1) {
            assert!(
                !html.contains(&escape(value)),
                "Portuguese {} left in output: {}",
                name,
                value
            );
        }
        assert!(!html.contains(&whatsapp::encoded_message(Language::Pt)));
    }

    proptest! {
        #[test]
        fn prop_exactly_one_active_control(selections in selection_sequence(0..20)) {
            let mut page = LandingPage::new();
            for lang in &selections {
                page.update(Msg::SelectLanguage(*lang));
            }
            let expected = selections.last().copied().unwrap_or_default();
            let html = page.render();

            prop_assert_eq!(page.language(), expected);
            prop_assert_eq!(html.matches("lang-btn active").count(), 1);
            let active_href =
                format!(r#"<a class="lang-btn active" href="{}""#, expected.path());
            prop_assert!(html.contains(&active_href));
        }

        #[test]
        fn prop_service_card_count_is_stable(selections in selection_sequence(1..10)) {
            let mut page = LandingPage::new();
            for lang in selections {
                page.update(Msg::SelectLanguage(lang));
                let cards = page.render().matches(r#"<article class="card">"#).count();
                prop_assert_eq!(cards, 6);
            }
        }
    }
}
