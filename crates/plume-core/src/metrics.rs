//! Display metrics consumed by unit resolution.
//!
//! Resolution of relative units (screen percentage, viewport units, DIPs,
//! root-em) needs the current display size, the platform's DIP conversion and
//! the default font's line height. Callers pass these explicitly through a
//! [`DisplayMetrics`] implementation at resolution time.

/// Horizontal layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    #[inline]
    pub const fn is_rtl(self) -> bool {
        matches!(self, LayoutDirection::RightToLeft)
    }
}

/// The display/platform collaborator.
pub trait DisplayMetrics {
    /// Display width in pixels.
    fn display_width(&self) -> i32;

    /// Display height in pixels.
    fn display_height(&self) -> i32;

    /// Convert device-independent pixels to device pixels.
    fn convert_dips_to_pixels(&self, dips: f32) -> i32;

    /// Line height of the default font, the base of root-em units.
    fn default_line_height(&self) -> i32;

    /// Whether the current layout direction is right-to-left.
    fn is_rtl(&self) -> bool;
}

impl<M: DisplayMetrics + ?Sized> DisplayMetrics for &M {
    fn display_width(&self) -> i32 {
        (**self).display_width()
    }

    fn display_height(&self) -> i32 {
        (**self).display_height()
    }

    fn convert_dips_to_pixels(&self, dips: f32) -> i32 {
        (**self).convert_dips_to_pixels(dips)
    }

    fn default_line_height(&self) -> i32 {
        (**self).default_line_height()
    }

    fn is_rtl(&self) -> bool {
        (**self).is_rtl()
    }
}

/// A fixed snapshot of display metrics.
///
/// Suitable for headless hosts, snapshot rendering and tests.
///
/// # Example
///
/// ```
/// use plume_core::{DisplayMetrics, FixedMetrics};
///
/// let metrics = FixedMetrics::new(320, 200).with_pixels_per_dip(2.0);
/// assert_eq!(metrics.convert_dips_to_pixels(8.0), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    /// Display width in pixels.
    pub width: i32,
    /// Display height in pixels.
    pub height: i32,
    /// Device pixels per device-independent pixel.
    pub pixels_per_dip: f32,
    /// Line height of the default font in pixels.
    pub line_height: i32,
    /// Layout direction.
    pub direction: LayoutDirection,
}

impl FixedMetrics {
    /// Create metrics for a display of the given size with default density,
    /// line height and left-to-right layout.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_pixels_per_dip(mut self, pixels_per_dip: f32) -> Self {
        self.pixels_per_dip = pixels_per_dip;
        self
    }

    pub fn with_line_height(mut self, line_height: i32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }
}

impl Default for FixedMetrics {
    /// A 1080x1920 portrait display at 1 pixel per DIP with a 16px line height.
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
            pixels_per_dip: 1.0,
            line_height: 16,
            direction: LayoutDirection::LeftToRight,
        }
    }
}

impl DisplayMetrics for FixedMetrics {
    fn display_width(&self) -> i32 {
        self.width
    }

    fn display_height(&self) -> i32 {
        self.height
    }

    fn convert_dips_to_pixels(&self, dips: f32) -> i32 {
        (dips * self.pixels_per_dip).round() as i32
    }

    fn default_line_height(&self) -> i32 {
        self.line_height
    }

    fn is_rtl(&self) -> bool {
        self.direction.is_rtl()
    }
}
