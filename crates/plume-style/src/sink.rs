//! The write side of a style.
//!
//! [`StyleSink`] is implemented by [`Style`], [`ProxyStyle`](crate::ProxyStyle)
//! and [`StyleSlot`](crate::StyleSlot). Implementors supply
//! [`apply_edit`](StyleSink::apply_edit) and the handful of operations that
//! are not attribute writes; every setter is a provided method building an
//! [`Edit`] and handing it over.
//!
//! Each setter comes as a pair: `set_x(value)` records a user override, and
//! `set_x_with(value, origin)` lets theme code write without one.

use std::rc::Rc;

use plume_core::{Font, Image, Rgb, Side};

use crate::background::{BackgroundAlignment, BackgroundGradient, BackgroundPainter, BackgroundType};
use crate::border::Border;
use crate::decoration::{Alignment, TextDecoration};
use crate::edit::Edit;
use crate::error::Result;
use crate::notify::StyleListener;
use crate::overrides::Origin;
use crate::style::Style;
use crate::units::Unit;

macro_rules! setter_pairs {
    ($(
        $(#[$meta:meta])*
        $set:ident, $set_with:ident ($($arg:ident: $ty:ty),+) => $edit:expr;
    )*) => {
        $(
            $(#[$meta])*
            fn $set(&mut self, $($arg: $ty),+) {
                self.$set_with($($arg),+, Origin::User)
            }

            #[doc = concat!("[`", stringify!($set), "`](Self::", stringify!($set), ") with an explicit origin.")]
            fn $set_with(&mut self, $($arg: $ty),+, origin: Origin) {
                self.apply_edit($edit, origin)
            }
        )*
    };
}

macro_rules! checked_setter_pairs {
    ($(
        $(#[$meta:meta])*
        $set:ident, $set_with:ident ($($arg:ident: $ty:ty),+) => $edit:expr;
    )*) => {
        $(
            $(#[$meta])*
            fn $set(&mut self, $($arg: $ty),+) -> Result<()> {
                self.$set_with($($arg),+, Origin::User)
            }

            #[doc = concat!("[`", stringify!($set), "`](Self::", stringify!($set), ") with an explicit origin.")]
            fn $set_with(&mut self, $($arg: $ty),+, origin: Origin) -> Result<()> {
                self.apply_edit($edit?, origin);
                Ok(())
            }
        )*
    };
}

/// Mutation interface shared by owned styles and proxies.
pub trait StyleSink {
    /// Apply one validated write.
    fn apply_edit(&mut self, edit: Edit, origin: Origin);

    /// Pull every attribute the user has not overridden from `theme`.
    fn merge(&mut self, theme: &Style);

    /// Save the current margin values, keeping an existing snapshot unless
    /// `override_existing` is set.
    fn cache_margins(&mut self, override_existing: bool);

    /// Write the saved margins back as a user change and drop the snapshot.
    fn restore_cached_margins(&mut self);

    /// Drop the saved margins without applying them.
    fn flush_margins_cache(&mut self);

    /// Register `listener` unless the same instance is already registered.
    fn add_listener(&mut self, listener: Rc<dyn StyleListener>);

    /// Unregister `listener`; unknown listeners are ignored.
    fn remove_listener(&mut self, listener: &Rc<dyn StyleListener>);

    fn remove_listeners(&mut self);

    /// While set, changes still apply and drop caches but notify nobody.
    fn set_suppress_change_events(&mut self, suppress: bool);

    setter_pairs! {
        set_fg_color, set_fg_color_with(color: Rgb) => Edit::fg_color(color);
        set_fg_alpha, set_fg_alpha_with(alpha: u8) => Edit::fg_alpha(alpha);
        set_bg_color, set_bg_color_with(color: Rgb) => Edit::bg_color(color);
        set_font, set_font_with(font: Option<Font>) => Edit::font(font);
        set_bg_image, set_bg_image_with(image: Option<Image>) => Edit::bg_image(image);
        set_elevation, set_elevation_with(elevation: u32) => Edit::elevation(elevation);
        set_icon_gap_unit, set_icon_gap_unit_with(unit: Unit) => Edit::icon_gap_unit(unit);
        set_surface, set_surface_with(surface: bool) => Edit::surface(surface);
        set_background_type, set_background_type_with(kind: BackgroundType) => Edit::background_type(kind);
        set_background_alignment, set_background_alignment_with(alignment: BackgroundAlignment) => Edit::background_alignment(alignment);
        set_bg_gradient_start_color, set_bg_gradient_start_color_with(color: Rgb) => Edit::gradient_start_color(color);
        set_bg_gradient_end_color, set_bg_gradient_end_color_with(color: Rgb) => Edit::gradient_end_color(color);
        set_border, set_border_with(border: Border) => Edit::border(border);
        set_alignment, set_alignment_with(alignment: Alignment) => Edit::alignment(alignment);
        set_text_decoration, set_text_decoration_with(decoration: TextDecoration) => Edit::text_decoration(decoration);
        set_underline, set_underline_with(on: bool) => Edit::decorate(TextDecoration::UNDERLINE, on);
        set_strike_through, set_strike_through_with(on: bool) => Edit::decorate(TextDecoration::STRIKETHROUGH, on);
        set_overline, set_overline_with(on: bool) => Edit::decorate(TextDecoration::OVERLINE, on);
        /// Raised or lowered 3D text; the two are exclusive.
        set_3d_text, set_3d_text_with(enabled: bool, raised: bool) => Edit::text_3d(enabled, raised);
        /// Toggle the north-facing 3D shadow, keeping other decorations.
        set_3d_text_north, set_3d_text_north_with(on: bool) => Edit::decorate(TextDecoration::SHADOW_NORTH_3D, on);
        /// Not override-tracked; a merge always adopts the theme's painter.
        set_bg_painter, set_bg_painter_with(painter: Option<Rc<dyn BackgroundPainter>>) => Edit::bg_painter(painter);
        /// Padding units, broadcast to four sides when fewer are given.
        set_padding_units, set_padding_units_with(units: &[Unit]) => Edit::padding_units(units);
        set_padding_unit, set_padding_unit_with(side: Side, unit: Unit) => Edit::padding_unit(side, unit);
        /// Margin units, broadcast to four sides when fewer are given.
        set_margin_units, set_margin_units_with(units: &[Unit]) => Edit::margin_units(units);
        set_margin_unit, set_margin_unit_with(side: Side, unit: Unit) => Edit::margin_unit(side, unit);
    }

    checked_setter_pairs! {
        /// Icon gap in the current gap unit; negative means unset, NaN fails.
        set_icon_gap, set_icon_gap_with(gap: f32) => Edit::icon_gap(gap);
        /// Icon gap and its unit as a single change.
        set_icon_gap_in, set_icon_gap_in_with(gap: f32, unit: Unit) => Edit::icon_gap_in(gap, unit);
        set_background_gradient, set_background_gradient_with(gradient: BackgroundGradient) => Edit::background_gradient(gradient);
        set_bg_gradient_relative_x, set_bg_gradient_relative_x_with(x: f32) => Edit::gradient_relative_x(x);
        set_bg_gradient_relative_y, set_bg_gradient_relative_y_with(y: f32) => Edit::gradient_relative_y(y);
        set_bg_gradient_relative_size, set_bg_gradient_relative_size_with(size: f32) => Edit::gradient_relative_size(size);
        /// Background transparency, 0-255.
        set_bg_transparency, set_bg_transparency_with(value: i32) => Edit::bg_transparency(value);
        /// Whole-component opacity, 0-255.
        set_opacity, set_opacity_with(value: i32) => Edit::opacity(value);
        /// Padding in top/bottom/left/right order; every value must be >= 0.
        set_padding, set_padding_with(top: f32, bottom: f32, left: f32, right: f32) => Edit::padding(top, bottom, left, right);
        set_padding_side, set_padding_side_with(side: Side, value: f32) => Edit::padding_side(side, value);
        /// Margin in top/bottom/left/right order; every value must be >= 0.
        set_margin, set_margin_with(top: f32, bottom: f32, left: f32, right: f32) => Edit::margin(top, bottom, left, right);
        set_margin_side, set_margin_side_with(side: Side, value: f32) => Edit::margin_side(side, value);
    }

    /// Zero padding and margin and drop the border, as user changes.
    fn strip_margin_and_padding(&mut self) {
        self.apply_edit(Edit::no_padding(), Origin::User);
        self.apply_edit(Edit::no_margin(), Origin::User);
        self.apply_edit(Edit::border(Border::empty()), Origin::User);
    }
}
