//! The three synchronized text representations of the current color.
//!
//! Whichever field the user edits, all three are re-derived from a single
//! integer [`Rgb`] point so they never disagree.

use serde::Serialize;
use tinct_common::{ColorError, Hsl, Rgb};

use crate::convert::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
use crate::css::{format_hsl, format_rgb, parse_hsl, parse_rgb};
use crate::validate::is_valid_hex;

/// Which representation an edit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Hex,
    Rgb,
    Hsl,
}

impl FieldKind {
    /// Guess the field from the text's prefix: `#`, `rgb(` or `hsl(`.
    pub fn detect(text: &str) -> Option<Self> {
        let text = text.trim_start();
        let prefix = text.get(..4).map(str::to_ascii_lowercase);
        if text.starts_with('#') {
            Some(FieldKind::Hex)
        } else if prefix.as_deref() == Some("rgb(") {
            Some(FieldKind::Rgb)
        } else if prefix.as_deref() == Some("hsl(") {
            Some(FieldKind::Hsl)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorFields {
    /// Canonical `#RRGGBB`, uppercase.
    pub hex: String,
    /// `rgb(R, G, B)`.
    pub rgb: String,
    /// `hsl(H, S%, L%)`, rounded.
    pub hsl: String,
    #[serde(skip)]
    pub color: Rgb,
}

impl ColorFields {
    /// Derive all fields from a `#RGB` or `#RRGGBB` string.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let hex = hex.trim();
        if !is_valid_hex(hex) {
            return Err(ColorError::InvalidFormat(format!("invalid hex color: {hex}")));
        }
        Ok(Self::from_rgb(hex_to_rgb(hex)?))
    }

    pub fn from_rgb(color: Rgb) -> Self {
        Self {
            hex: rgb_to_hex(color),
            rgb: format_rgb(color),
            hsl: format_hsl(rgb_to_hsl(color)),
            color,
        }
    }

    /// Snap to the nearest integer RGB point, then derive every field from it.
    pub fn from_hsl(hsl: Hsl) -> Self {
        Self::from_rgb(hsl_to_rgb(hsl))
    }

    /// Parse any accepted form (`#hex`, `rgb(...)`, `hsl(...)`), picking the
    /// field from the text's prefix.
    pub fn parse(text: &str) -> Result<Self, ColorError> {
        let kind = FieldKind::detect(text).ok_or_else(|| {
            ColorError::InvalidFormat(format!("unrecognized color format: {}", text.trim()))
        })?;
        Self::from_input(kind, text)
    }

    /// Re-derive all fields after the user typed `text` into `kind`.
    ///
    /// On error the caller should keep its previous fields; partially typed
    /// input is expected to be invalid most of the time.
    pub fn from_input(kind: FieldKind, text: &str) -> Result<Self, ColorError> {
        let fields = match kind {
            FieldKind::Hex => Self::from_hex(text)?,
            FieldKind::Rgb => Self::from_rgb(parse_rgb(text)?),
            FieldKind::Hsl => Self::from_hsl(parse_hsl(text)?),
        };
        tracing::debug!(?kind, hex = %fields.hex, "color fields updated");
        Ok(fields)
    }
}
