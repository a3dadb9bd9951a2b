use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ColorError;

/// Upper bound of the hue circle, in degrees.
pub const HUE_MAX: f64 = 360.0;

/// Upper bound of saturation and lightness, in percent.
pub const PERCENT_MAX: f64 = 100.0;

/// A color as three integer channels.
///
/// Channels are `u8`, so a constructed value is always in `[0, 255]`.
/// Raw integers from user input go through [`Rgb::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from unchecked integers, rejecting any channel outside `[0, 255]`.
    pub fn try_new(r: i64, g: i64, b: i64) -> Result<Self, ColorError> {
        Ok(Self {
            r: channel("red", r)?,
            g: channel("green", g)?,
            b: channel("blue", b)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

fn channel(name: &str, value: i64) -> Result<u8, ColorError> {
    u8::try_from(value)
        .map_err(|_| ColorError::InvalidRange(format!("{name} = {value} is out of range [0, 255]")))
}

/// A color as hue (degrees), saturation and lightness (percent).
///
/// Components are kept unrounded; HSL only ever serves as an intermediate
/// between integer RGB values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Build from unchecked components, rejecting anything outside
    /// `h in [0, 360]`, `s in [0, 100]`, `l in [0, 100]`. NaN is rejected.
    pub fn try_new(h: f64, s: f64, l: f64) -> Result<Self, ColorError> {
        Ok(Self {
            h: component("hue", h, HUE_MAX)?,
            s: component("saturation", s, PERCENT_MAX)?,
            l: component("lightness", l, PERCENT_MAX)?,
        })
    }

    /// Each component rounded to the nearest integer.
    pub fn rounded(&self) -> Self {
        Self {
            h: self.h.round(),
            s: self.s.round(),
            l: self.l.round(),
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.rounded();
        write!(f, "hsl({}, {}%, {}%)", r.h, r.s, r.l)
    }
}

fn component(name: &str, value: f64, max: f64) -> Result<f64, ColorError> {
    if (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::InvalidRange(format!(
            "{name} = {value} is out of range [0, {max}]"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_try_new_accepts_bounds() {
        assert_eq!(Rgb::try_new(0, 128, 255).unwrap(), Rgb::new(0, 128, 255));
    }

    #[test]
    fn rgb_try_new_rejects_out_of_range() {
        let err = Rgb::try_new(256, 0, 0).unwrap_err();
        assert!(matches!(err, ColorError::InvalidRange(_)));
        assert!(err.to_string().contains("red = 256"));

        let err = Rgb::try_new(0, -1, 0).unwrap_err();
        assert!(err.to_string().contains("green = -1"));

        assert!(Rgb::try_new(0, 0, 1000).is_err());
    }

    #[test]
    fn rgb_display() {
        assert_eq!(Rgb::new(10, 20, 30).to_string(), "rgb(10, 20, 30)");
    }

    #[test]
    fn hsl_try_new_accepts_bounds() {
        assert!(Hsl::try_new(0.0, 0.0, 0.0).is_ok());
        assert!(Hsl::try_new(360.0, 100.0, 100.0).is_ok());
    }

    #[test]
    fn hsl_try_new_rejects_out_of_range() {
        assert!(Hsl::try_new(361.0, 50.0, 50.0).is_err());
        assert!(Hsl::try_new(-1.0, 50.0, 50.0).is_err());
        assert!(Hsl::try_new(10.0, 100.5, 50.0).is_err());
        assert!(Hsl::try_new(10.0, 50.0, -0.1).is_err());
        assert!(Hsl::try_new(f64::NAN, 50.0, 50.0).is_err());
    }

    #[test]
    fn hsl_display_rounds() {
        let hsl = Hsl::new(210.4, 65.5, 39.9);
        assert_eq!(hsl.to_string(), "hsl(210, 66%, 40%)");
    }

    #[test]
    fn rgb_serialization() {
        let c = Rgb::new(171, 205, 239);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"r":171,"g":205,"b":239}"#);
        let parsed: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(c, parsed);
    }
}
