//! Style errors.

use plume_core::InvalidSide;

use crate::overrides::StyleProperty;

/// Errors raised by style mutations and lookups.
///
/// Every variant is a contract violation detected before any state changes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    /// A padding value was negative or NaN.
    #[error("padding cannot be negative: {0}")]
    NegativePadding(f32),

    /// A margin value was negative or NaN.
    #[error("margin cannot be negative: {0}")]
    NegativeMargin(f32),

    /// Opacity outside 0-255.
    #[error("opacity must be between 0-255: {0}")]
    OpacityOutOfRange(i32),

    /// Background transparency outside 0-255.
    #[error("transparency must be between 0-255: {0}")]
    TransparencyOutOfRange(i32),

    /// A float attribute was given NaN.
    #[error("{0} cannot be NaN")]
    NotANumber(StyleProperty),

    /// Orientation index outside the four box sides.
    #[error(transparent)]
    InvalidOrientation(#[from] InvalidSide),

    /// Unit code outside the known unit tags.
    #[error("unknown unit type {0}")]
    UnknownUnit(u8),

    /// Background type code outside the known background types.
    #[error("unknown background type {0}")]
    UnknownBackgroundType(u8),

    /// Attribute read attempted through a proxy style.
    #[error("proxy styles hold no attributes and cannot be read")]
    ProxyRead,
}

/// Result alias for style operations.
pub type Result<T, E = StyleError> = std::result::Result<T, E>;
