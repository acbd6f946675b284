//! Packed RGB colors.

/// A 24-bit RGB color packed as `0xRRGGBB`.
///
/// Alpha is tracked separately by the style engine (foreground alpha,
/// background transparency, component opacity), so it is not part of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x000000);
    pub const WHITE: Rgb = Rgb(0xFFFFFF);

    /// Create a color from a packed integer, discarding bits above 24.
    #[inline]
    pub const fn new(packed: u32) -> Self {
        Self(packed & 0x00FF_FFFF)
    }

    /// Create a color from its channels.
    #[inline]
    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// The packed `0xRRGGBB` value.
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }
}

impl From<u32> for Rgb {
    fn from(packed: u32) -> Self {
        Rgb::new(packed)
    }
}
