//! Export binary - writes the landing page as static HTML files
//!
//! Usage:
//!   cargo run --bin export            # Writes to EXPORT_DIR (defaults to dist)
//!   cargo run --bin export -- public  # Writes to ./public
//!
//! Layout: `index.html` (English) plus `en/`, `pt/`, `es/` each holding an
//! `index.html`, so any static host serves `/pt/` as the Portuguese page.

use anyhow::Result;
use em_services_site::{config::Config, export, logging, site::RenderedSite};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    logging::init()?;

    let config = Config::from_env()?;
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.export_dir));

    let site = RenderedSite::build_validated()?;
    let written = export::write_site(&site, &dir)?;

    for path in &written {
        info!("  {}", path.display());
    }
    println!("✓ Exported {} pages to {}", written.len(), dir.display());

    Ok(())
}
