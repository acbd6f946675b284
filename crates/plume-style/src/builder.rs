//! Theme style construction.

use std::rc::Rc;

use plume_core::{Font, Image, Rgb};

use crate::background::{BackgroundAlignment, BackgroundGradient, BackgroundPainter, BackgroundType};
use crate::border::Border;
use crate::decoration::{Alignment, TextDecoration};
use crate::edit::Edit;
use crate::error::{Result, StyleError};
use crate::overrides::Origin;
use crate::sink::StyleSink;
use crate::style::Style;
use crate::units::Unit;

/// Chained construction of a theme default style.
///
/// Every value is written with [`Origin::Theme`], so the built style has no
/// overrides and a later merge may replace any of it. The first invalid
/// value is reported by [`build`](StyleBuilder::build).
///
/// # Example
///
/// ```
/// use plume_core::Rgb;
/// use plume_style::{Style, Unit};
///
/// let theme = Style::builder()
///     .fg_color(Rgb(0x222222))
///     .padding(1.0, 1.0, 2.0, 2.0)
///     .padding_units(&[Unit::Dips])
///     .build()?;
/// assert!(!theme.is_modified());
///
/// assert!(Style::builder().opacity(512).build().is_err());
/// # Ok::<(), plume_style::StyleError>(())
/// ```
#[derive(Debug, Default)]
#[must_use]
pub struct StyleBuilder {
    style: Style,
    error: Option<StyleError>,
}

impl StyleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn edit(mut self, edit: Edit) -> Self {
        self.style.apply_edit(edit, Origin::Theme);
        self
    }

    fn checked(mut self, edit: Result<Edit>) -> Self {
        match edit {
            Ok(edit) => self.edit(edit),
            Err(err) => {
                self.error.get_or_insert(err);
                self
            }
        }
    }

    pub fn fg_color(self, color: Rgb) -> Self {
        self.edit(Edit::fg_color(color))
    }

    pub fn fg_alpha(self, alpha: u8) -> Self {
        self.edit(Edit::fg_alpha(alpha))
    }

    pub fn bg_color(self, color: Rgb) -> Self {
        self.edit(Edit::bg_color(color))
    }

    pub fn font(self, font: Font) -> Self {
        self.edit(Edit::font(Some(font)))
    }

    pub fn bg_image(self, image: Image) -> Self {
        self.edit(Edit::bg_image(Some(image)))
    }

    pub fn bg_transparency(self, value: i32) -> Self {
        self.checked(Edit::bg_transparency(value))
    }

    pub fn opacity(self, value: i32) -> Self {
        self.checked(Edit::opacity(value))
    }

    pub fn elevation(self, elevation: u32) -> Self {
        self.edit(Edit::elevation(elevation))
    }

    pub fn icon_gap(self, gap: f32, unit: Unit) -> Self {
        self.checked(Edit::icon_gap_in(gap, unit))
    }

    pub fn surface(self, surface: bool) -> Self {
        self.edit(Edit::surface(surface))
    }

    pub fn background_type(self, kind: BackgroundType) -> Self {
        self.edit(Edit::background_type(kind))
    }

    pub fn background_alignment(self, alignment: BackgroundAlignment) -> Self {
        self.edit(Edit::background_alignment(alignment))
    }

    pub fn background_gradient(self, gradient: BackgroundGradient) -> Self {
        self.checked(Edit::background_gradient(gradient))
    }

    pub fn border(self, border: Border) -> Self {
        self.edit(Edit::border(border))
    }

    pub fn alignment(self, alignment: Alignment) -> Self {
        self.edit(Edit::alignment(alignment))
    }

    pub fn text_decoration(self, decoration: TextDecoration) -> Self {
        self.edit(Edit::text_decoration(decoration))
    }

    pub fn padding(self, top: f32, bottom: f32, left: f32, right: f32) -> Self {
        self.checked(Edit::padding(top, bottom, left, right))
    }

    pub fn padding_units(self, units: &[Unit]) -> Self {
        self.edit(Edit::padding_units(units))
    }

    pub fn margin(self, top: f32, bottom: f32, left: f32, right: f32) -> Self {
        self.checked(Edit::margin(top, bottom, left, right))
    }

    pub fn margin_units(self, units: &[Unit]) -> Self {
        self.edit(Edit::margin_units(units))
    }

    pub fn bg_painter(self, painter: Rc<dyn BackgroundPainter>) -> Self {
        self.edit(Edit::bg_painter(Some(painter)))
    }

    /// Finish, or return the first rejected value.
    pub fn build(self) -> Result<Style> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::StyleProperty;
    use plume_core::{FixedMetrics, Side};

    #[test]
    fn builds_unmodified_theme_style() {
        let style = StyleBuilder::new()
            .bg_color(Rgb(0x101010))
            .margin(0.0, 0.0, 4.0, 4.0)
            .margin_units(&[Unit::Dips])
            .alignment(Alignment::Center)
            .build()
            .unwrap();
        assert_eq!(style.bg_color(), Rgb(0x101010));
        assert_eq!(style.margin_unit(false, Side::Left), Unit::Dips);
        assert_eq!(
            style.margin_left(false, &FixedMetrics::default().with_pixels_per_dip(2.0)),
            8
        );
        assert!(!style.is_modified());
    }

    #[test]
    fn first_error_wins() {
        let err = StyleBuilder::new()
            .padding(-1.0, 0.0, 0.0, 0.0)
            .bg_transparency(999)
            .build()
            .unwrap_err();
        assert_eq!(err, StyleError::NegativePadding(-1.0));
    }

    #[test]
    fn nan_gap_fails_the_build() {
        let err = StyleBuilder::new()
            .icon_gap(f32::NAN, Unit::Dips)
            .build()
            .unwrap_err();
        assert_eq!(err, StyleError::NotANumber(StyleProperty::IconGap));
    }
}
