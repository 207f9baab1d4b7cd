//! Admin server config loader (environment based).

pub mod schema;

use guides_core::error::{GuidesError, Result};

pub use schema::AdminConfig;

/// Environment variable holding the listen port.
pub const PORT_VAR: &str = "PORT";

pub fn load_from_env() -> Result<AdminConfig> {
    load_from_vars(|key| std::env::var(key).ok())
}

/// Load config through an arbitrary variable lookup (tests pass a map here).
pub fn load_from_vars<F>(lookup: F) -> Result<AdminConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(PORT_VAR).unwrap_or_default();
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(GuidesError::MissingEnv(PORT_VAR));
    }

    let port: u16 = raw
        .parse()
        .map_err(|e| GuidesError::InvalidConfig(format!("${PORT_VAR} must be a port number, got {raw:?}: {e}")))?;

    let cfg = AdminConfig { port };
    cfg.validate()?;
    Ok(cfg)
}
