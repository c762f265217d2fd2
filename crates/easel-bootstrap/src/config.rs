//! Bootstrap settings and their validation.
//!
//! # Design
//! - Every field has a default so an absent or empty config block boots the
//!   application exactly as the stock page expects.
//! - Validation is explicit and separate from parsing; callers decide whether
//!   an invalid document is fatal.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Identifier of the element the application mounts into by default.
pub const DEFAULT_MOUNT_ID: &str = "root";
/// Tag name of the drawing-surface custom element.
pub const DEFAULT_CANVAS_TAG: &str = "easel-canvas";

const RESERVED_ELEMENT_NAMES: [&str; 8] = [
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// Settings consumed by the startup sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BootstrapConfig {
    /// Element id of the mount point.
    pub mount_id: String,
    /// Custom element tag registered before the application starts.
    pub canvas_tag: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            canvas_tag: DEFAULT_CANVAS_TAG.to_string(),
        }
    }
}

impl BootstrapConfig {
    /// Parse a JSON document, treating blank input as "use defaults".
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::InvalidField`] when a value fails validation.
    pub fn from_json(raw: &str) -> ConfigResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.mount_id.is_empty() {
            return Err(invalid("mount_id", &self.mount_id, "must not be empty"));
        }
        if self.mount_id.chars().any(char::is_whitespace) {
            return Err(invalid(
                "mount_id",
                &self.mount_id,
                "must not contain whitespace",
            ));
        }
        if !is_valid_custom_element_name(&self.canvas_tag) {
            return Err(invalid(
                "canvas_tag",
                &self.canvas_tag,
                "must be a valid custom element name",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        field,
        value: value.to_string(),
        reason,
    }
}

/// Whether `name` may be passed to `customElements.define`.
///
/// The name must start with a lowercase ASCII letter, contain a hyphen, use
/// only potential custom element name characters (lowercase ASCII, digits,
/// `-`, `.`, `_` and the non-ASCII ranges of the HTML grammar), and avoid the
/// names reserved by SVG and `MathML`.
#[must_use]
pub fn is_valid_custom_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_lowercase() || !name.contains('-') {
        return false;
    }
    if RESERVED_ELEMENT_NAMES.contains(&name) {
        return false;
    }
    chars.all(is_name_char)
}

const fn is_name_char(ch: char) -> bool {
    matches!(
        ch,
        'a'..='z'
            | '0'..='9'
            | '-'
            | '.'
            | '_'
            | '\u{b7}'
            | '\u{c0}'..='\u{d6}'
            | '\u{d8}'..='\u{f6}'
            | '\u{f8}'..='\u{37d}'
            | '\u{37f}'..='\u{1fff}'
            | '\u{200c}'..='\u{200d}'
            | '\u{203f}'..='\u{2040}'
            | '\u{2070}'..='\u{218f}'
            | '\u{2c00}'..='\u{2fef}'
            | '\u{3001}'..='\u{d7ff}'
            | '\u{f900}'..='\u{fdcf}'
            | '\u{fdf0}'..='\u{fffd}'
            | '\u{10000}'..='\u{effff}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_yields_defaults() -> ConfigResult<()> {
        let config = BootstrapConfig::from_json("  \n")?;
        assert_eq!(config, BootstrapConfig::default());
        assert_eq!(config.mount_id, "root");
        assert_eq!(config.canvas_tag, "easel-canvas");
        Ok(())
    }

    #[test]
    fn partial_documents_fill_in_defaults() -> ConfigResult<()> {
        let config = BootstrapConfig::from_json(r#"{"mount_id": "app"}"#)?;
        assert_eq!(config.mount_id, "app");
        assert_eq!(config.canvas_tag, DEFAULT_CANVAS_TAG);
        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = BootstrapConfig::from_json(r#"{"mount": "app"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn invalid_values_name_the_field() {
        let err = BootstrapConfig::from_json(r#"{"mount_id": "two words"}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "mount_id",
                ..
            }
        ));

        let err = BootstrapConfig::from_json(r#"{"canvas_tag": "Canvas"}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "canvas_tag",
                ..
            }
        ));
    }

    #[test]
    fn worker_settings_are_not_accepted() {
        let err = BootstrapConfig::from_json(r#"{"service_worker": {"script_url": "/sw.js"}}"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn custom_element_names_follow_registry_rules() {
        assert!(is_valid_custom_element_name("easel-canvas"));
        assert!(is_valid_custom_element_name("elm-canvas"));
        assert!(is_valid_custom_element_name("x-1.2_b"));
        assert!(!is_valid_custom_element_name(""));
        assert!(!is_valid_custom_element_name("canvas"));
        assert!(!is_valid_custom_element_name("-canvas"));
        assert!(!is_valid_custom_element_name("Easel-canvas"));
        assert!(!is_valid_custom_element_name("easel-Canvas"));
        assert!(!is_valid_custom_element_name("font-face"));
        assert!(!is_valid_custom_element_name("easel canvas"));
    }

    #[test]
    fn non_ascii_names_follow_the_html_ranges() {
        assert!(is_valid_custom_element_name("easel-\u{e9}"));
        assert!(is_valid_custom_element_name("math-\u{3b1}"));
        assert!(is_valid_custom_element_name("emotion-\u{1f60d}"));
        assert!(!is_valid_custom_element_name("easel-\u{d7}"));
        assert!(!is_valid_custom_element_name("easel-\u{f7}"));
        assert!(!is_valid_custom_element_name("easel-\u{37e}"));
        assert!(!is_valid_custom_element_name("easel-\u{2000}"));
    }
}
