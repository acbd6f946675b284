#![forbid(unsafe_code)]

//! Box orientations.

/// Error returned when an orientation index is outside the four box sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("wrong orientation {0}: expected 0 (top), 1 (bottom), 2 (left) or 3 (right)")]
pub struct InvalidSide(pub i32);

/// One side of a box.
///
/// The discriminants double as indices into per-side arrays, in the order
/// top, bottom, left, right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Top = 0,
    Bottom = 1,
    Left = 2,
    Right = 3,
}

impl Side {
    /// All sides in index order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// Index of this side into a `[T; 4]` box array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the side to read when laying out in the given direction.
    ///
    /// Under right-to-left layout, left and right swap; top and bottom never do.
    #[inline]
    pub const fn mirrored(self, rtl: bool) -> Side {
        match (self, rtl) {
            (Side::Left, true) => Side::Right,
            (Side::Right, true) => Side::Left,
            (side, _) => side,
        }
    }

    /// True for [`Side::Top`] and [`Side::Bottom`].
    #[inline]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

impl TryFrom<i32> for Side {
    type Error = InvalidSide;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Side::Top),
            1 => Ok(Side::Bottom),
            2 => Ok(Side::Left),
            3 => Ok(Side::Right),
            other => Err(InvalidSide(other)),
        }
    }
}

impl TryFrom<usize> for Side {
    type Error = InvalidSide;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        let index = i32::try_from(value).unwrap_or(i32::MAX);
        Side::try_from(index)
    }
}
