//! Background fill attributes.

use std::any::Any;
use std::fmt;

use plume_core::Rgb;

use crate::error::StyleError;

/// Horizontal placement of a vertically tiled image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical placement of a horizontally tiled image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// Placement of an unscaled, untiled image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// How the background of a component is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackgroundType {
    /// No background is painted.
    None,
    /// The image is stretched to the component bounds.
    #[default]
    ImageScaled,
    /// The image is tiled in both directions.
    ImageTiledBoth,
    /// The image is tiled down one column.
    ImageTiledVertical(HAlign),
    /// The image is tiled along one row.
    ImageTiledHorizontal(VAlign),
    /// The image is drawn once at its natural size.
    ImageAligned(Anchor),
    /// Left-to-right linear gradient.
    GradientLinearHorizontal,
    /// Top-to-bottom linear gradient.
    GradientLinearVertical,
    /// Radial gradient around the gradient's relative center.
    GradientRadial,
    /// Scaled preserving aspect ratio to cover the bounds.
    ImageScaledFill,
    /// Scaled preserving aspect ratio to fit inside the bounds.
    ImageScaledFit,
}

impl BackgroundType {
    /// Stable byte code used by theme data.
    pub const fn code(self) -> u8 {
        match self {
            BackgroundType::None => 0,
            BackgroundType::ImageScaled => 1,
            BackgroundType::ImageTiledBoth => 2,
            BackgroundType::ImageTiledVertical(HAlign::Left) => 3,
            BackgroundType::ImageTiledVertical(HAlign::Center) => 31,
            BackgroundType::ImageTiledVertical(HAlign::Right) => 32,
            BackgroundType::ImageTiledHorizontal(VAlign::Top) => 4,
            BackgroundType::ImageTiledHorizontal(VAlign::Center) => 29,
            BackgroundType::ImageTiledHorizontal(VAlign::Bottom) => 30,
            BackgroundType::GradientLinearVertical => 6,
            BackgroundType::GradientLinearHorizontal => 7,
            BackgroundType::GradientRadial => 8,
            BackgroundType::ImageAligned(Anchor::Top) => 20,
            BackgroundType::ImageAligned(Anchor::Bottom) => 21,
            BackgroundType::ImageAligned(Anchor::Left) => 22,
            BackgroundType::ImageAligned(Anchor::Right) => 23,
            BackgroundType::ImageAligned(Anchor::Center) => 24,
            BackgroundType::ImageAligned(Anchor::TopLeft) => 25,
            BackgroundType::ImageAligned(Anchor::TopRight) => 26,
            BackgroundType::ImageAligned(Anchor::BottomLeft) => 27,
            BackgroundType::ImageAligned(Anchor::BottomRight) => 28,
            BackgroundType::ImageScaledFill => 33,
            BackgroundType::ImageScaledFit => 34,
        }
    }

    /// True for the three gradient fills.
    pub const fn is_gradient(self) -> bool {
        matches!(
            self,
            BackgroundType::GradientLinearHorizontal
                | BackgroundType::GradientLinearVertical
                | BackgroundType::GradientRadial
        )
    }

    /// True for every fill that draws the background image.
    pub const fn is_image(self) -> bool {
        !self.is_gradient() && !matches!(self, BackgroundType::None)
    }

    /// True when an opaque image covers every pixel of the bounds.
    pub(crate) const fn covers_bounds(self) -> bool {
        matches!(
            self,
            BackgroundType::ImageScaled | BackgroundType::ImageTiledBoth
        )
    }
}

impl TryFrom<u8> for BackgroundType {
    type Error = StyleError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        let kind = match code {
            0 => BackgroundType::None,
            1 => BackgroundType::ImageScaled,
            2 => BackgroundType::ImageTiledBoth,
            3 => BackgroundType::ImageTiledVertical(HAlign::Left),
            4 => BackgroundType::ImageTiledHorizontal(VAlign::Top),
            6 => BackgroundType::GradientLinearVertical,
            7 => BackgroundType::GradientLinearHorizontal,
            8 => BackgroundType::GradientRadial,
            20 => BackgroundType::ImageAligned(Anchor::Top),
            21 => BackgroundType::ImageAligned(Anchor::Bottom),
            22 => BackgroundType::ImageAligned(Anchor::Left),
            23 => BackgroundType::ImageAligned(Anchor::Right),
            24 => BackgroundType::ImageAligned(Anchor::Center),
            25 => BackgroundType::ImageAligned(Anchor::TopLeft),
            26 => BackgroundType::ImageAligned(Anchor::TopRight),
            27 => BackgroundType::ImageAligned(Anchor::BottomLeft),
            28 => BackgroundType::ImageAligned(Anchor::BottomRight),
            29 => BackgroundType::ImageTiledHorizontal(VAlign::Center),
            30 => BackgroundType::ImageTiledHorizontal(VAlign::Bottom),
            31 => BackgroundType::ImageTiledVertical(HAlign::Center),
            32 => BackgroundType::ImageTiledVertical(HAlign::Right),
            33 => BackgroundType::ImageScaledFill,
            34 => BackgroundType::ImageScaledFit,
            other => return Err(StyleError::UnknownBackgroundType(other)),
        };
        Ok(kind)
    }
}

/// Legacy image alignment, superseded by [`BackgroundType::ImageAligned`].
///
/// Still tracked and merged so old theme data keeps round-tripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BackgroundAlignment {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

/// Gradient parameters.
///
/// An immutable value: style setters replace the whole gradient, and the
/// single-field setters build a modified copy with the `with_*` methods.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackgroundGradient {
    /// Color at the start of the gradient (or the center of a radial one).
    pub start: Rgb,
    /// Color at the end of the gradient.
    pub end: Rgb,
    /// Horizontal center of a radial gradient, relative to the width.
    pub relative_x: f32,
    /// Vertical center of a radial gradient, relative to the height.
    pub relative_y: f32,
    /// Radius of a radial gradient, relative to the smaller dimension.
    pub relative_size: f32,
}

impl BackgroundGradient {
    pub const DEFAULT: BackgroundGradient = BackgroundGradient {
        start: Rgb::WHITE,
        end: Rgb::BLACK,
        relative_x: 0.5,
        relative_y: 0.5,
        relative_size: 1.0,
    };

    /// A linear gradient between two colors, centered.
    pub const fn new(start: Rgb, end: Rgb) -> Self {
        Self {
            start,
            end,
            ..Self::DEFAULT
        }
    }

    pub const fn with_start(self, start: Rgb) -> Self {
        Self { start, ..self }
    }

    pub const fn with_end(self, end: Rgb) -> Self {
        Self { end, ..self }
    }

    pub const fn with_relative_x(self, relative_x: f32) -> Self {
        Self { relative_x, ..self }
    }

    pub const fn with_relative_y(self, relative_y: f32) -> Self {
        Self { relative_y, ..self }
    }

    pub const fn with_relative_size(self, relative_size: f32) -> Self {
        Self {
            relative_size,
            ..self
        }
    }
}

impl Default for BackgroundGradient {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A custom background painter supplied by the host.
///
/// Painters are opaque to the style engine: they are neither compared nor
/// override-tracked, and a theme merge always adopts the theme's painter.
pub trait BackgroundPainter: fmt::Debug {
    /// Paint the background of `width` x `height` at `(x, y)` onto `canvas`,
    /// a host-specific surface.
    fn paint(&self, canvas: &mut dyn Any, x: i32, y: i32, width: i32, height: i32);
}
