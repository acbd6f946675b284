//! Text alignment and decoration.

use bitflags::bitflags;

/// Horizontal alignment of a component's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

bitflags! {
    /// Decorations applied when drawing text.
    ///
    /// The bit values are the codes used by theme data.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TextDecoration: u8 {
        const UNDERLINE = 1 << 0;
        const STRIKETHROUGH = 1 << 1;
        const OVERLINE = 1 << 2;
        const RAISED_3D = 1 << 3;
        const LOWERED_3D = 1 << 4;
        const SHADOW_NORTH_3D = 1 << 5;

        /// Every 3D variant.
        const ANY_3D = Self::RAISED_3D.bits() | Self::LOWERED_3D.bits() | Self::SHADOW_NORTH_3D.bits();
    }
}

impl TextDecoration {
    /// Returns a copy with the raised or lowered 3D effect turned on or off.
    ///
    /// Turning one relief on clears the other. Turning one off clears only
    /// that relief. A request matching the current state of the named relief
    /// changes nothing. The north shadow is independent.
    #[must_use]
    pub fn with_3d(self, enabled: bool, raised: bool) -> Self {
        let (named, other) = if raised {
            (Self::RAISED_3D, Self::LOWERED_3D)
        } else {
            (Self::LOWERED_3D, Self::RAISED_3D)
        };
        if self.contains(named) == enabled {
            return self;
        }
        if enabled {
            (self - other) | named
        } else {
            self - named
        }
    }
}
