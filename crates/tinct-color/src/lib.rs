//! HEX, RGB and HSL color conversion.
//!
//! All functions are pure. Validators never fail; converters either return
//! a value or a [`ColorError`]. Out-of-range numbers are rejected at the
//! typed boundary ([`Rgb::try_new`], [`Hsl::try_new`]) so the converters
//! themselves are total over their inputs.
//!
//! ```rust
//! use tinct_color::{hex_to_rgb, rgb_to_hex, rgb_to_hsl};
//!
//! let rgb = hex_to_rgb("#f80").unwrap();
//! assert_eq!(rgb_to_hex(rgb), "#FF8800");
//! assert_eq!(rgb_to_hsl(rgb).rounded().h, 32.0);
//! ```

pub mod convert;
pub mod css;
pub mod fields;
pub mod validate;

pub use convert::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use css::{format_hsl, format_rgb, parse_hsl, parse_rgb};
pub use fields::{ColorFields, FieldKind};
pub use validate::{is_valid_hex, is_valid_hsl, is_valid_rgb};

pub use tinct_common::{ColorError, Hsl, Rgb};
