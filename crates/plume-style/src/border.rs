//! Component borders.
//!
//! Borders are value types compared by equality; painting them is the
//! renderer's job.

use std::sync::Arc;

use plume_core::{Image, Rgb};

/// Whether a 3D border appears raised or sunken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Relief {
    #[default]
    Raised,
    Lowered,
}

/// A component border.
#[derive(Debug, Clone, PartialEq)]
pub enum Border {
    /// Occupies no space and paints nothing.
    Empty,
    /// Solid line.
    Line { color: Rgb, thickness: f32 },
    /// Dashed line.
    Dashed { color: Rgb, thickness: f32 },
    /// Dotted line.
    Dotted { color: Rgb, thickness: f32 },
    /// Line with rounded corners.
    RoundRect {
        color: Rgb,
        thickness: f32,
        corner_radius: f32,
    },
    /// Two-tone bevel.
    Bevel {
        relief: Relief,
        highlight: Rgb,
        shadow: Rgb,
    },
    /// Two-tone etched groove.
    Etched {
        relief: Relief,
        highlight: Rgb,
        shadow: Rgb,
    },
    /// Nine-piece image border.
    Image { pieces: Arc<[Image]> },
}

impl Border {
    /// The border that takes no space.
    pub const fn empty() -> Self {
        Border::Empty
    }

    /// A solid line border.
    pub const fn line(color: Rgb, thickness: f32) -> Self {
        Border::Line { color, thickness }
    }

    /// A rounded-corner line border.
    pub const fn round_rect(color: Rgb, thickness: f32, corner_radius: f32) -> Self {
        Border::RoundRect {
            color,
            thickness,
            corner_radius,
        }
    }

    /// True for [`Border::Empty`].
    pub const fn is_empty(&self) -> bool {
        matches!(self, Border::Empty)
    }

    /// True when painting depends on the cached rounded-rect geometry.
    pub const fn is_rounded(&self) -> bool {
        matches!(self, Border::RoundRect { .. })
    }
}
