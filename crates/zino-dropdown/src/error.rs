//! Errors raised when parsing options or loading configuration.

use crate::SharedString;
use std::io;

/// An error type for the dropdown configuration.
///
/// Rendering never fails. Only the strict parsers and config loaders return it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The arrow position is neither `top` nor `bottom`.
    #[error("invalid arrow position `{0}`, expected `top` or `bottom`")]
    InvalidArrowPosition(SharedString),
    /// The TOML config can not be deserialized.
    #[error("invalid dropdown config: {0}")]
    InvalidConfig(#[from] toml::de::Error),
    /// The config file can not be read.
    #[error("fail to read the dropdown config: {0}")]
    Io(#[from] io::Error),
}
