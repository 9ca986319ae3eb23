use crate::i18n::Language;
use crate::site::RenderedSite;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write the site as static files.
///
/// Layout:
/// - `index.html`: default language, served at `/`
/// - `<code>/index.html`: one per language, served at `/<code>/`
///
/// # Returns
/// The paths written, default page first.
pub fn write_site(site: &RenderedSite, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(Language::ALL.len() + 1);

    let index = dir.join("index.html");
    write_page(&index, site.default_page())?;
    written.push(index);

    for lang in Language::ALL {
        let lang_dir = dir.join(lang.code());
        fs::create_dir_all(&lang_dir)
            .with_context(|| format!("Failed to create {}", lang_dir.display()))?;

        let path = lang_dir.join("index.html");
        write_page(&path, site.page(lang))?;
        written.push(path);
    }

    info!("Exported {} pages to {}", written.len(), dir.display());
    Ok(written)
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))
}
