use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Directive applied on top of `RUST_LOG` so the crate logs at info by default
pub const DEFAULT_DIRECTIVE: &str = "em_services_site=info";

/// Log filter shared by every binary: `RUST_LOG` plus [`DEFAULT_DIRECTIVE`].
pub fn env_filter() -> Result<EnvFilter> {
    Ok(EnvFilter::from_default_env().add_directive(DEFAULT_DIRECTIVE.parse()?))
}

/// Initialize logging to stdout.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(env_filter()?).init();
    Ok(())
}
