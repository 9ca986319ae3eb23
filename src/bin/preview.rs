//! Preview binary - prints the rendered page for one language to stdout
//!
//! Usage:
//!   cargo run --bin preview        # English
//!   cargo run --bin preview -- pt  # Portuguese

use anyhow::{Context, Result};
use em_services_site::i18n::Language;
use em_services_site::logging;
use em_services_site::view::{LandingPage, Msg};

fn main() -> Result<()> {
    // stdout carries the page, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(logging::env_filter()?)
        .with_writer(std::io::stderr)
        .init();

    let language = match std::env::args().nth(1) {
        Some(code) => code
            .parse::<Language>()
            .context("Expected one of: en, pt, es")?,
        None => Language::default(),
    };

    let mut page = LandingPage::new();
    page.update(Msg::SelectLanguage(language));
    print!("{}", page.render());

    Ok(())
}
