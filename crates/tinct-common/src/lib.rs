pub mod errors;
pub mod types;

pub use errors::{ColorError, ConfigError, StorageError, TinctError};
pub use types::{Hsl, Rgb};
