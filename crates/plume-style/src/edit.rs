//! Validated attribute writes.
//!
//! An [`Edit`] is one setter call captured as a value. Constructors that
//! take unchecked input return `Result`, so by the time an edit reaches a
//! style (or fans out through a proxy) it is known to be valid and applying
//! it cannot fail halfway.

use std::rc::Rc;

use plume_core::{Font, Image, Rgb, Side};

use crate::background::{BackgroundAlignment, BackgroundGradient, BackgroundPainter, BackgroundType};
use crate::border::Border;
use crate::decoration::{Alignment, TextDecoration};
use crate::error::{Result, StyleError};
use crate::overrides::StyleProperty;
use crate::spacing::{self, Spacing};
use crate::units::Unit;

/// A single validated write to a style.
#[derive(Debug, Clone)]
pub struct Edit {
    pub(crate) kind: EditKind,
}

#[derive(Debug, Clone)]
pub(crate) enum EditKind {
    FgColor(Rgb),
    FgAlpha(u8),
    BgColor(Rgb),
    Font(Option<Font>),
    BgImage(Option<Image>),
    Transparency(u8),
    Opacity(u8),
    Elevation(u32),
    IconGap { gap: f32, unit: Option<Unit> },
    IconGapUnit(Unit),
    Surface(bool),
    BackgroundType(BackgroundType),
    BackgroundAlignment(BackgroundAlignment),
    Gradient(BackgroundGradient),
    GradientStart(Rgb),
    GradientEnd(Rgb),
    GradientX(f32),
    GradientY(f32),
    GradientSize(f32),
    Border(Border),
    Alignment(Alignment),
    TextDecoration(TextDecoration),
    Decorate { flag: TextDecoration, on: bool },
    Text3d { enabled: bool, raised: bool },
    Painter(Option<Rc<dyn BackgroundPainter>>),
    Padding(Spacing),
    PaddingValues([f32; 4]),
    PaddingSide(Side, f32),
    PaddingUnits(Option<[Unit; 4]>),
    PaddingUnit(Side, Unit),
    Margin(Spacing),
    MarginValues([f32; 4]),
    MarginSide(Side, f32),
    MarginUnits(Option<[Unit; 4]>),
    MarginUnit(Side, Unit),
}

impl From<EditKind> for Edit {
    fn from(kind: EditKind) -> Self {
        Self { kind }
    }
}

fn byte(value: i32, err: fn(i32) -> StyleError) -> Result<u8> {
    u8::try_from(value).map_err(|_| err(value))
}

fn lengths(values: [f32; 4], err: fn(f32) -> StyleError) -> Result<[f32; 4]> {
    match values.into_iter().find(|v| !spacing::is_valid_length(*v)) {
        Some(bad) => Err(err(bad)),
        None => Ok(values),
    }
}

fn number(value: f32, property: StyleProperty) -> Result<f32> {
    if value.is_nan() {
        return Err(StyleError::NotANumber(property));
    }
    Ok(value)
}

impl Edit {
    pub fn fg_color(color: Rgb) -> Self {
        EditKind::FgColor(color).into()
    }

    pub fn fg_alpha(alpha: u8) -> Self {
        EditKind::FgAlpha(alpha).into()
    }

    pub fn bg_color(color: Rgb) -> Self {
        EditKind::BgColor(color).into()
    }

    pub fn font(font: Option<Font>) -> Self {
        EditKind::Font(font).into()
    }

    pub fn bg_image(image: Option<Image>) -> Self {
        EditKind::BgImage(image).into()
    }

    /// Background transparency; fails outside 0-255.
    pub fn bg_transparency(value: i32) -> Result<Self> {
        byte(value, StyleError::TransparencyOutOfRange).map(|v| EditKind::Transparency(v).into())
    }

    /// Whole-component opacity; fails outside 0-255.
    pub fn opacity(value: i32) -> Result<Self> {
        byte(value, StyleError::OpacityOutOfRange).map(|v| EditKind::Opacity(v).into())
    }

    pub fn elevation(elevation: u32) -> Self {
        EditKind::Elevation(elevation).into()
    }

    /// Icon gap in the style's current gap unit; fails on NaN.
    pub fn icon_gap(gap: f32) -> Result<Self> {
        number(gap, StyleProperty::IconGap).map(|gap| EditKind::IconGap { gap, unit: None }.into())
    }

    /// Icon gap together with its unit, as one change.
    pub fn icon_gap_in(gap: f32, unit: Unit) -> Result<Self> {
        number(gap, StyleProperty::IconGap).map(|gap| {
            EditKind::IconGap {
                gap,
                unit: Some(unit),
            }
            .into()
        })
    }

    pub fn icon_gap_unit(unit: Unit) -> Self {
        EditKind::IconGapUnit(unit).into()
    }

    pub fn surface(surface: bool) -> Self {
        EditKind::Surface(surface).into()
    }

    pub fn background_type(kind: BackgroundType) -> Self {
        EditKind::BackgroundType(kind).into()
    }

    pub fn background_alignment(alignment: BackgroundAlignment) -> Self {
        EditKind::BackgroundAlignment(alignment).into()
    }

    /// Replace the whole gradient; fails if any relative field is NaN.
    pub fn background_gradient(gradient: BackgroundGradient) -> Result<Self> {
        for v in [gradient.relative_x, gradient.relative_y, gradient.relative_size] {
            number(v, StyleProperty::BgGradient)?;
        }
        Ok(EditKind::Gradient(gradient).into())
    }

    pub fn gradient_start_color(color: Rgb) -> Self {
        EditKind::GradientStart(color).into()
    }

    pub fn gradient_end_color(color: Rgb) -> Self {
        EditKind::GradientEnd(color).into()
    }

    pub fn gradient_relative_x(x: f32) -> Result<Self> {
        number(x, StyleProperty::BgGradient).map(|x| EditKind::GradientX(x).into())
    }

    pub fn gradient_relative_y(y: f32) -> Result<Self> {
        number(y, StyleProperty::BgGradient).map(|y| EditKind::GradientY(y).into())
    }

    pub fn gradient_relative_size(size: f32) -> Result<Self> {
        number(size, StyleProperty::BgGradient).map(|s| EditKind::GradientSize(s).into())
    }

    pub fn border(border: Border) -> Self {
        EditKind::Border(border).into()
    }

    pub fn alignment(alignment: Alignment) -> Self {
        EditKind::Alignment(alignment).into()
    }

    /// Replace the whole decoration set.
    pub fn text_decoration(decoration: TextDecoration) -> Self {
        EditKind::TextDecoration(decoration).into()
    }

    /// Turn one decoration flag on or off, keeping the rest.
    pub fn decorate(flag: TextDecoration, on: bool) -> Self {
        EditKind::Decorate { flag, on }.into()
    }

    /// Set the raised or lowered 3D text effect.
    pub fn text_3d(enabled: bool, raised: bool) -> Self {
        EditKind::Text3d { enabled, raised }.into()
    }

    pub fn bg_painter(painter: Option<Rc<dyn BackgroundPainter>>) -> Self {
        EditKind::Painter(painter).into()
    }

    /// All four padding values in top/bottom/left/right order.
    pub fn padding(top: f32, bottom: f32, left: f32, right: f32) -> Result<Self> {
        lengths([top, bottom, left, right], StyleError::NegativePadding)
            .map(|v| EditKind::PaddingValues(v).into())
    }

    /// One padding side, addressed by its stored slot.
    pub fn padding_side(side: Side, value: f32) -> Result<Self> {
        if !spacing::is_valid_length(value) {
            return Err(StyleError::NegativePadding(value));
        }
        Ok(EditKind::PaddingSide(side, value).into())
    }

    /// Padding units; see [`broadcast_units`](crate::spacing::broadcast_units).
    pub fn padding_units(units: &[Unit]) -> Self {
        EditKind::PaddingUnits(spacing::broadcast_units(units)).into()
    }

    pub fn padding_unit(side: Side, unit: Unit) -> Self {
        EditKind::PaddingUnit(side, unit).into()
    }

    /// All four margin values in top/bottom/left/right order.
    pub fn margin(top: f32, bottom: f32, left: f32, right: f32) -> Result<Self> {
        lengths([top, bottom, left, right], StyleError::NegativeMargin)
            .map(|v| EditKind::MarginValues(v).into())
    }

    /// One margin side, addressed by its stored slot.
    pub fn margin_side(side: Side, value: f32) -> Result<Self> {
        if !spacing::is_valid_length(value) {
            return Err(StyleError::NegativeMargin(value));
        }
        Ok(EditKind::MarginSide(side, value).into())
    }

    /// Margin units; see [`broadcast_units`](crate::spacing::broadcast_units).
    pub fn margin_units(units: &[Unit]) -> Self {
        EditKind::MarginUnits(spacing::broadcast_units(units)).into()
    }

    pub fn margin_unit(side: Side, unit: Unit) -> Self {
        EditKind::MarginUnit(side, unit).into()
    }

    /// Zero padding on every side.
    pub(crate) fn no_padding() -> Self {
        EditKind::PaddingValues([0.0; 4]).into()
    }

    /// Zero margin on every side.
    pub(crate) fn no_margin() -> Self {
        EditKind::MarginValues([0.0; 4]).into()
    }

    /// Margin values taken from a snapshot of an already valid box.
    pub(crate) fn margin_values(values: [f32; 4]) -> Self {
        EditKind::MarginValues(values).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_lengths_are_rejected() {
        assert_eq!(
            Edit::padding(1.0, -2.0, 0.0, 0.0).err(),
            Some(StyleError::NegativePadding(-2.0))
        );
        assert_eq!(
            Edit::margin_side(Side::Left, -0.5).err(),
            Some(StyleError::NegativeMargin(-0.5))
        );
        assert!(Edit::padding(0.0, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn nan_is_rejected() {
        assert!(matches!(
            Edit::margin(f32::NAN, 0.0, 0.0, 0.0),
            Err(StyleError::NegativeMargin(v)) if v.is_nan()
        ));
    }

    #[test]
    fn nan_floats_are_rejected() {
        let gap = StyleError::NotANumber(StyleProperty::IconGap);
        let gradient = StyleError::NotANumber(StyleProperty::BgGradient);
        assert_eq!(Edit::icon_gap(f32::NAN).err(), Some(gap.clone()));
        assert_eq!(Edit::icon_gap_in(f32::NAN, Unit::Dips).err(), Some(gap));
        assert_eq!(Edit::gradient_relative_x(f32::NAN).err(), Some(gradient.clone()));
        assert_eq!(Edit::gradient_relative_y(f32::NAN).err(), Some(gradient.clone()));
        assert_eq!(Edit::gradient_relative_size(f32::NAN).err(), Some(gradient.clone()));
        assert_eq!(
            Edit::background_gradient(BackgroundGradient::DEFAULT.with_relative_size(f32::NAN)).err(),
            Some(gradient)
        );
        assert!(Edit::icon_gap(-1.0).is_ok());
        assert!(Edit::background_gradient(BackgroundGradient::DEFAULT).is_ok());
    }

    #[test]
    fn byte_ranges() {
        assert!(Edit::opacity(0).is_ok());
        assert!(Edit::opacity(255).is_ok());
        assert_eq!(Edit::opacity(256).err(), Some(StyleError::OpacityOutOfRange(256)));
        assert_eq!(
            Edit::bg_transparency(-1).err(),
            Some(StyleError::TransparencyOutOfRange(-1))
        );
    }

    #[test]
    fn units_are_broadcast() {
        let edit = Edit::padding_units(&[Unit::Dips]);
        assert!(matches!(
            edit.kind,
            EditKind::PaddingUnits(Some([Unit::Dips, Unit::Dips, Unit::Dips, Unit::Dips]))
        ));
        assert!(matches!(
            Edit::margin_units(&[]).kind,
            EditKind::MarginUnits(None)
        ));
    }
}
