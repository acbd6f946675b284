//! The attribute bag behind a [`Style`](crate::Style).

use plume_core::{Font, Image, Rgb};

use crate::background::{BackgroundAlignment, BackgroundGradient, BackgroundType};
use crate::border::Border;
use crate::decoration::{Alignment, TextDecoration};
use crate::spacing::Spacing;
use crate::units::Unit;

/// Default padding on every side, in pixels.
pub const DEFAULT_PADDING: f32 = 3.0;
/// Default margin on every side, in pixels.
pub const DEFAULT_MARGIN: f32 = 2.0;
/// Icon gap value meaning "use the component's own default".
pub const ICON_GAP_UNSET: f32 = -1.0;

/// Every value that participates in style equality.
///
/// Bookkeeping (overrides, listeners, caches, painter) lives on `Style`.
/// Transparency compares as painted, so a stored byte hidden behind an
/// opaque full-cover image does not make two styles differ.
#[derive(Debug, Clone)]
pub(crate) struct Attributes {
    pub(crate) fg_color: Rgb,
    pub(crate) fg_alpha: u8,
    pub(crate) bg_color: Rgb,
    pub(crate) font: Option<Font>,
    pub(crate) bg_image: Option<Image>,
    pub(crate) transparency: u8,
    pub(crate) opacity: u8,
    pub(crate) elevation: u32,
    pub(crate) icon_gap: f32,
    pub(crate) icon_gap_unit: Unit,
    pub(crate) surface: bool,
    pub(crate) background_type: BackgroundType,
    pub(crate) background_alignment: BackgroundAlignment,
    pub(crate) gradient: BackgroundGradient,
    pub(crate) border: Border,
    pub(crate) alignment: Alignment,
    pub(crate) text_decoration: TextDecoration,
    pub(crate) padding: Spacing,
    pub(crate) margin: Spacing,
}

impl Attributes {
    /// Transparency as painted.
    ///
    /// An opaque or animated image scaled or tiled over the whole background
    /// hides the background color, which makes the style fully opaque.
    pub(crate) fn painted_transparency(&self) -> u8 {
        match &self.bg_image {
            Some(image)
                if self.background_type.covers_bounds()
                    && (image.is_opaque() || image.is_animation()) =>
            {
                0xFF
            }
            _ => self.transparency,
        }
    }
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        let Self {
            fg_color,
            fg_alpha,
            bg_color,
            font,
            bg_image,
            transparency: _,
            opacity,
            elevation,
            icon_gap,
            icon_gap_unit,
            surface,
            background_type,
            background_alignment,
            gradient,
            border,
            alignment,
            text_decoration,
            padding,
            margin,
        } = self;
        *fg_color == other.fg_color
            && *fg_alpha == other.fg_alpha
            && *bg_color == other.bg_color
            && *font == other.font
            && *bg_image == other.bg_image
            && self.painted_transparency() == other.painted_transparency()
            && *opacity == other.opacity
            && *elevation == other.elevation
            && *icon_gap == other.icon_gap
            && *icon_gap_unit == other.icon_gap_unit
            && *surface == other.surface
            && *background_type == other.background_type
            && *background_alignment == other.background_alignment
            && *gradient == other.gradient
            && *border == other.border
            && *alignment == other.alignment
            && *text_decoration == other.text_decoration
            && *padding == other.padding
            && *margin == other.margin
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            fg_color: Rgb::BLACK,
            fg_alpha: 0xFF,
            bg_color: Rgb::WHITE,
            font: None,
            bg_image: None,
            transparency: 0xFF,
            opacity: 0xFF,
            elevation: 0,
            icon_gap: ICON_GAP_UNSET,
            icon_gap_unit: Unit::Pixels,
            surface: false,
            background_type: BackgroundType::ImageScaled,
            background_alignment: BackgroundAlignment::Top,
            gradient: BackgroundGradient::DEFAULT,
            border: Border::Empty,
            alignment: Alignment::Left,
            text_decoration: TextDecoration::empty(),
            padding: Spacing::uniform(DEFAULT_PADDING),
            margin: Spacing::uniform(DEFAULT_MARGIN),
        }
    }
}
