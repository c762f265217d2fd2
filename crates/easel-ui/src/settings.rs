//! Bootstrap settings embedded in the host page.
//!
//! The page may carry `<script type="application/json" id="easel-config">`;
//! without it the stock defaults apply.

use easel_bootstrap::error::ConfigResult;
use easel_bootstrap::{BootstrapConfig, ConfigError};

/// Element id of the inline settings block.
pub const CONFIG_ELEMENT_ID: &str = "easel-config";

/// Parse the inline block, if present.
///
/// # Errors
///
/// Returns the [`ConfigError`] raised while parsing or validating the block.
pub fn resolve_config(inline: Option<&str>) -> ConfigResult<BootstrapConfig> {
    inline.map_or_else(|| Ok(BootstrapConfig::default()), BootstrapConfig::from_json)
}

/// Like [`resolve_config`], but an unusable block falls back to defaults.
///
/// The rejected block's error is handed back so the caller can report it.
#[must_use]
pub fn resolve_or_default(inline: Option<&str>) -> (BootstrapConfig, Option<ConfigError>) {
    match resolve_config(inline) {
        Ok(config) => (config, None),
        Err(err) => (BootstrapConfig::default(), Some(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_block_uses_defaults() -> ConfigResult<()> {
        assert_eq!(resolve_config(None)?, BootstrapConfig::default());
        Ok(())
    }

    #[test]
    fn inline_block_overrides_mount() -> ConfigResult<()> {
        let config = resolve_config(Some(r#"{"mount_id": "stage"}"#))?;
        assert_eq!(config.mount_id, "stage");
        Ok(())
    }

    #[test]
    fn broken_block_falls_back_with_error() {
        let (config, err) = resolve_or_default(Some("{not json"));
        assert_eq!(config, BootstrapConfig::default());
        assert!(matches!(err, Some(ConfigError::Parse { .. })));

        let (_, err) = resolve_or_default(Some(r#"{"canvas_tag": "canvas"}"#));
        assert!(matches!(err, Some(ConfigError::InvalidField { .. })));
    }
}
