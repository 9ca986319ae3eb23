//! Page sections. Each takes the active copy bundle (plus the active language
//! or encoded greeting where the section needs it) as plain values and
//! returns a markup fragment.

use crate::i18n::{Language, LanguageStrings, ServiceItem};
use crate::view::html::escape;
use crate::whatsapp::{encoded_link, ContactTarget};
use std::fmt::Write;

/// Brand name shown in the header and on the hero card
pub const BRAND: &str = "EM SERVICES";

/// Header with brand, `#services` link and the language selector.
pub fn header(copy: &LanguageStrings, active: Language) -> String {
    format!(
        r##"<header class="header">
<div class="brand"><div class="logo">EM</div><span>{brand}</span></div>
<nav class="nav">
<a href="#services">{nav}</a>
{selector}
</nav>
</header>"##,
        brand = BRAND,
        nav = escape(copy.nav_services),
        selector = language_selector(active),
    )
}

/// The three language controls. Exactly one carries `active`.
pub fn language_selector(active: Language) -> String {
    let mut out = String::from(r#"<div class="lang">"#);

    for lang in Language::ALL {
        let is_active = lang == active;
        let _ = write!(
            out,
            r#"<a class="lang-btn{class}" href="{href}" hreflang="{code}" lang="{code}" aria-label="{name}" title="{name}"{current}>{label}</a>"#,
            class = if is_active { " active" } else { "" },
            href = lang.path(),
            code = lang.code(),
            name = escape(lang.native_name()),
            current = if is_active { r#" aria-current="page""# } else { "" },
            label = lang.label(),
        );
    }

    out.push_str("</div>");
    out
}

/// Hero section with title, subtitle, both chat links and the info card.
///
/// `encoded_message` is the active greeting, already percent-encoded, shared
/// by both call-to-action links.
pub fn hero(copy: &LanguageStrings, encoded_message: &str) -> String {
    format!(
        r#"<section class="hero">
<div class="hero-content">
<h1>{title}</h1>
<p>{subtitle}</p>
<div class="cta">
{primary}
{secondary}
</div>
</div>
<div class="hero-card" aria-label="{card_label}">
<div class="badge">{badge}</div>
<h3>{brand}</h3>
<p>{tagline}</p>
<span>{note}</span>
</div>
</section>"#,
        title = escape(copy.hero_title),
        subtitle = escape(copy.hero_subtitle),
        primary = cta_link(
            ContactTarget::Primary,
            "btn btn-primary",
            copy.cta_primary,
            encoded_message,
        ),
        secondary = cta_link(
            ContactTarget::Secondary,
            "btn btn-outline",
            copy.cta_secondary,
            encoded_message,
        ),
        card_label = escape(copy.hero_card_label),
        badge = escape(copy.hero_badge),
        brand = BRAND,
        tagline = escape(copy.hero_tagline),
        note = escape(copy.hero_note),
    )
}

/// Call-to-action anchor opening a pre-filled chat in a new browsing context.
pub fn cta_link(
    target: ContactTarget,
    class: &str,
    label: &str,
    encoded_message: &str,
) -> String {
    format!(
        r#"<a class="{class}" href="{href}" target="_blank" rel="noreferrer">{label}</a>"#,
        class = class,
        href = escape(&encoded_link(target, encoded_message)),
        label = escape(label),
    )
}

/// Services section: title and one card per entry, in order.
pub fn services(copy: &LanguageStrings) -> String {
    let mut out = format!(
        r#"<section id="services" class="services">
<h2>{}</h2>
<div class="grid">
"#,
        escape(copy.services_title)
    );

    for service in &copy.services {
        out.push_str(&service_card(service));
        out.push('\n');
    }

    out.push_str("</div>\n</section>");
    out
}

fn service_card(service: &ServiceItem) -> String {
    format!(
        r#"<article class="card"><h3>{}</h3><p>{}</p></article>"#,
        escape(service.title),
        escape(service.desc)
    )
}

pub fn footer(copy: &LanguageStrings) -> String {
    format!(r#"<footer class="footer">{}</footer>"#, escape(copy.footer))
}
