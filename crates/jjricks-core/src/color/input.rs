use serde::{Deserialize, Serialize};

use super::spec::{normalize_hex, parse_rgb, ColorSpec};
use crate::error::ValidationError;

/// Contents of the three RGB text boxes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbInput {
    #[serde(default)]
    pub r: String,
    #[serde(default)]
    pub g: String,
    #[serde(default)]
    pub b: String,
}

impl RgbInput {
    pub fn new(r: impl Into<String>, g: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }

    /// True when any box has non-whitespace content.
    pub fn has_any(&self) -> bool {
        [&self.r, &self.g, &self.b]
            .iter()
            .any(|v| !v.trim().is_empty())
    }
}

/// Resolve the color form: exactly one of the hex box or the RGB boxes must
/// carry content.
///
/// # Errors
///
/// [`ValidationError::NoInput`] when both are empty,
/// [`ValidationError::AmbiguousInput`] when both are filled, otherwise
/// whatever [`normalize_hex`] or [`parse_rgb`] reports.
pub fn resolve_input(hex: &str, rgb: &RgbInput) -> Result<ColorSpec, ValidationError> {
    let has_hex = !hex.trim().is_empty();
    let has_rgb = rgb.has_any();

    let spec = match (has_hex, has_rgb) {
        (true, true) => return Err(ValidationError::AmbiguousInput),
        (false, false) => return Err(ValidationError::NoInput),
        (true, false) => normalize_hex(hex)?,
        (false, true) => parse_rgb(&rgb.r, &rgb.g, &rgb.b)?,
    };
    tracing::debug!(color = %spec, "resolved color input");
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_empty_is_no_input() {
        assert_eq!(
            resolve_input("", &RgbInput::default()),
            Err(ValidationError::NoInput)
        );
        assert_eq!(
            resolve_input("   ", &RgbInput::new(" ", "", "\t")),
            Err(ValidationError::NoInput)
        );
    }

    #[test]
    fn both_filled_is_ambiguous() {
        assert_eq!(
            resolve_input("#FFF", &RgbInput::new("1", "", "")),
            Err(ValidationError::AmbiguousInput)
        );
    }

    #[test]
    fn hex_path_delegates_to_normalize() {
        let spec = resolve_input("#fa3", &RgbInput::default()).unwrap();
        assert_eq!(spec.to_hex(), "#FFAA33");
        assert!(matches!(
            resolve_input("#fa", &RgbInput::default()),
            Err(ValidationError::InvalidHex { .. })
        ));
    }

    #[test]
    fn rgb_path_delegates_to_parse() {
        let spec = resolve_input("", &RgbInput::new("0", "128", "255")).unwrap();
        assert_eq!(spec.to_hex(), "#0080FF");
    }

    #[test]
    fn partial_rgb_reports_the_empty_box() {
        assert!(matches!(
            resolve_input("", &RgbInput::new("10", "", "")),
            Err(ValidationError::NotANumber { .. })
        ));
    }
}
