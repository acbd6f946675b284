//! Measurement units and their resolution to device pixels.
//!
//! Padding, margin and icon gaps are stored as `(value, unit)` pairs and only
//! turned into pixels when layout asks for them, so a theme authored in
//! viewport or font-relative units follows display rotation and font changes.
//!
//! | unit                | base                                              |
//! |---------------------|---------------------------------------------------|
//! | `Pixels`            | the value itself                                  |
//! | `ScreenPercentage`  | display height for top/bottom, width for left/right |
//! | `Dips`              | the platform's DIP conversion                     |
//! | `ViewportWidth`     | display width                                     |
//! | `ViewportHeight`    | display height                                    |
//! | `ViewportMin/Max`   | display height (see [`resolve`])                  |
//! | `RootEm`            | the default font's line height                    |

use plume_core::{DisplayMetrics, Side};

use crate::error::StyleError;

/// Unit tag for a stored length.
///
/// The discriminants are the stable byte codes used by theme data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Unit {
    /// Device pixels.
    #[default]
    Pixels = 0,
    /// Percent of the display dimension along the side's axis.
    ScreenPercentage = 1,
    /// Device-independent pixels.
    Dips = 2,
    /// Percent of the display width.
    ViewportWidth = 3,
    /// Percent of the display height.
    ViewportHeight = 4,
    /// Percent of the smaller display dimension; resolved on the height axis.
    ViewportMin = 5,
    /// Percent of the larger display dimension; resolved on the height axis.
    ViewportMax = 6,
    /// Multiples of the default font's line height.
    RootEm = 7,
}

impl Unit {
    /// All units in code order.
    pub const ALL: [Unit; 8] = [
        Unit::Pixels,
        Unit::ScreenPercentage,
        Unit::Dips,
        Unit::ViewportWidth,
        Unit::ViewportHeight,
        Unit::ViewportMin,
        Unit::ViewportMax,
        Unit::RootEm,
    ];

    /// The stable byte code of this unit.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Canonical short name, as used in theme sources.
    pub const fn as_str(self) -> &'static str {
        match self {
            Unit::Pixels => "px",
            Unit::ScreenPercentage => "%",
            Unit::Dips => "dip",
            Unit::ViewportWidth => "vw",
            Unit::ViewportHeight => "vh",
            Unit::ViewportMin => "vmin",
            Unit::ViewportMax => "vmax",
            Unit::RootEm => "rem",
        }
    }

    /// True for the units whose base is a display dimension.
    pub const fn is_display_relative(self) -> bool {
        matches!(
            self,
            Unit::ScreenPercentage
                | Unit::ViewportWidth
                | Unit::ViewportHeight
                | Unit::ViewportMin
                | Unit::ViewportMax
        )
    }
}

impl TryFrom<u8> for Unit {
    type Error = StyleError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Unit::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(StyleError::UnknownUnit(code))
    }
}

/// Resolve a stored length to device pixels.
///
/// `side` only matters for [`Unit::ScreenPercentage`], which measures against
/// the display height for top/bottom and the display width for left/right.
/// Screen percentages truncate toward zero; every other relative unit rounds
/// to the nearest pixel.
///
/// [`Unit::ViewportMin`] and [`Unit::ViewportMax`] both resolve against the
/// display height, the same single axis the box model uses for vertical
/// units. This is a pinned policy, not a min/max of width and height.
pub fn resolve<M: DisplayMetrics + ?Sized>(
    value: f32,
    unit: Unit,
    side: Side,
    metrics: &M,
) -> i32 {
    match unit {
        Unit::Pixels => value.round() as i32,
        Unit::RootEm => (value * metrics.default_line_height() as f32).round() as i32,
        Unit::ViewportHeight | Unit::ViewportMin | Unit::ViewportMax => {
            (value / 100.0 * metrics.display_height() as f32).round() as i32
        }
        Unit::ViewportWidth => (value / 100.0 * metrics.display_width() as f32).round() as i32,
        Unit::Dips => metrics.convert_dips_to_pixels(value),
        Unit::ScreenPercentage => {
            let base = if side.is_vertical() {
                metrics.display_height()
            } else {
                metrics.display_width()
            };
            (base as f32 / 100.0 * value) as i32
        }
    }
}
