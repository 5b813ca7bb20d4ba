//! Validated color values and their two text renderings.
//!
//! A [`ColorSpec`] can only be obtained through validation (or from bytes,
//! which are always in range), so holding one means the color is valid.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Channel, ValidationError};

/// A canonical RGB color.
///
/// Serialized as its `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorSpec {
    r: u8,
    g: u8,
    b: u8,
}

impl ColorSpec {
    /// Swatch shown before the user submits anything.
    pub const DEFAULT_PREVIEW: ColorSpec = ColorSpec::from_rgb(0xCC, 0xCC, 0xCC);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn red(&self) -> u8 {
        self.r
    }

    pub fn green(&self) -> u8 {
        self.g
    }

    pub fn blue(&self) -> u8 {
        self.b
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// `#RRGGBB`, uppercase, zero-padded per byte.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// `rgb(R, G, B)`, decimal without padding.
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for ColorSpec {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for ColorSpec {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_hex(s)
    }
}

impl TryFrom<String> for ColorSpec {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        normalize_hex(&value)
    }
}

impl From<ColorSpec> for String {
    fn from(spec: ColorSpec) -> Self {
        spec.to_hex()
    }
}

/// Both text renderings of a color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedColor {
    pub hex: String,
    pub rgb: String,
}

impl RenderedColor {
    /// Preview caption, e.g. `#FF8800 | rgb(255, 136, 0)`.
    pub fn label(&self) -> String {
        format!("{} | {}", self.hex, self.rgb)
    }
}

/// Parse `#RGB` / `#RRGGBB` text (the `#` is optional, case-insensitive).
///
/// Surrounding whitespace is ignored. Shorthand digits are doubled one by
/// one, so `1A2` becomes `11AA22`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidHex`] for any other length or for a
/// non-hex character.
pub fn normalize_hex(input: &str) -> Result<ColorSpec, ValidationError> {
    let raw = input.trim();
    let raw = raw.strip_prefix('#').unwrap_or(raw);
    let invalid = || ValidationError::InvalidHex {
        input: input.to_string(),
    };

    if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let digits = raw.as_bytes();
    let [r, g, b] = match digits.len() {
        3 => [
            hex_pair(digits[0], digits[0]),
            hex_pair(digits[1], digits[1]),
            hex_pair(digits[2], digits[2]),
        ],
        6 => [
            hex_pair(digits[0], digits[1]),
            hex_pair(digits[2], digits[3]),
            hex_pair(digits[4], digits[5]),
        ],
        _ => return Err(invalid()),
    };
    Ok(ColorSpec::from_rgb(r, g, b))
}

/// Parse the three RGB text boxes.
///
/// Fields are checked red, green, blue. A non-numeric field anywhere wins
/// over an out-of-range one.
///
/// # Errors
///
/// [`ValidationError::NotANumber`] or [`ValidationError::OutOfRange`] naming
/// the offending channel.
pub fn parse_rgb(r: &str, g: &str, b: &str) -> Result<ColorSpec, ValidationError> {
    let fields = [(Channel::Red, r), (Channel::Green, g), (Channel::Blue, b)];
    let parsed = fields
        .iter()
        .map(|&(channel, text)| parse_field(channel, text))
        .collect::<Result<Vec<_>, _>>()?;

    let mut bytes = [0u8; 3];
    for (slot, (value, &(channel, text))) in bytes.iter_mut().zip(parsed.into_iter().zip(&fields)) {
        *slot = value.ok_or_else(|| ValidationError::OutOfRange {
            channel,
            input: text.to_string(),
        })?;
    }
    Ok(ColorSpec::from(bytes))
}

/// Render a color in both forms.
pub fn render(spec: &ColorSpec) -> RenderedColor {
    RenderedColor {
        hex: spec.to_hex(),
        rgb: spec.to_rgb_string(),
    }
}

// `Ok(None)` means numeric but outside 0..=255.
fn parse_field(channel: Channel, text: &str) -> Result<Option<u8>, ValidationError> {
    match text.trim().parse::<i64>() {
        Ok(n) => Ok(u8::try_from(n).ok()),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Ok(None)
        }
        Err(_) => Err(ValidationError::NotANumber {
            channel,
            input: text.to_string(),
        }),
    }
}

fn hex_pair(hi: u8, lo: u8) -> u8 {
    (hex_value(hi) << 4) | hex_value(lo)
}

// Caller has already checked `is_ascii_hexdigit`.
fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
