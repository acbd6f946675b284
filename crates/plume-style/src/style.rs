#![forbid(unsafe_code)]

//! The style object.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use plume_core::{DisplayMetrics, Font, Image, Rgb, Side};

use crate::attributes::Attributes;
use crate::background::{BackgroundAlignment, BackgroundGradient, BackgroundPainter, BackgroundType};
use crate::border::Border;
use crate::builder::StyleBuilder;
use crate::decoration::{Alignment, TextDecoration};
use crate::edit::{Edit, EditKind};
use crate::error::Result;
use crate::notify::{CacheToken, ListenerSet, StyleListener};
use crate::overrides::{Origin, Overrides, StyleProperty};
use crate::proxy::ProxyStyle;
use crate::sink::StyleSink;
use crate::spacing::Spacing;
use crate::units::{self, Unit};

/// Shared, mutable handle to a style owned by a component.
pub type StyleHandle = Rc<RefCell<Style>>;

/// The paintable and layout attributes of one component.
///
/// Attribute reads are inherent methods. Attribute writes go through
/// [`StyleSink`], which `Style`, [`ProxyStyle`] and
/// [`StyleSlot`](crate::StyleSlot) all implement.
///
/// A write that changes a value:
///
/// 1. marks the attribute's [`Overrides`] group when made with
///    [`Origin::User`],
/// 2. drops both renderer cache tokens,
/// 3. notifies listeners unless change events are suppressed.
///
/// Writes that store the current value do none of this.
///
/// # Example
///
/// ```
/// use plume_core::{FixedMetrics, Rgb};
/// use plume_style::{Style, StyleSink};
///
/// let mut style = Style::new();
/// style.set_fg_color(Rgb(0xFF0000));
/// style.set_padding(4.0, 4.0, 8.0, 2.0)?;
///
/// let metrics = FixedMetrics::new(320, 480);
/// // Under RTL the left accessor reads the right-hand slot.
/// assert_eq!(style.padding_left(true, &metrics), 2);
/// assert!(style.is_modified());
/// # Ok::<(), plume_style::StyleError>(())
/// ```
pub struct Style {
    pub(crate) attrs: Attributes,
    overrides: Overrides,
    painter: Option<Rc<dyn BackgroundPainter>>,
    cached_margin: Option<[f32; 4]>,
    listeners: Option<ListenerSet>,
    suppress_change_events: bool,
    round_rect_cache: Option<CacheToken>,
    native_render_cache: Option<CacheToken>,
    renderer: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self::from_attributes(Attributes::default())
    }
}

fn assign<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

fn same_painter(a: &Option<Rc<dyn BackgroundPainter>>, b: &Option<Rc<dyn BackgroundPainter>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
        _ => false,
    }
}

impl Style {
    fn from_attributes(attrs: Attributes) -> Self {
        Self {
            attrs,
            overrides: Overrides::empty(),
            painter: None,
            cached_margin: None,
            listeners: None,
            suppress_change_events: false,
            round_rect_cache: None,
            native_render_cache: None,
            renderer: false,
        }
    }

    /// A style with default attributes and no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of every compared attribute of `other`.
    ///
    /// Transparency is copied as painted, see [`Style::bg_transparency`].
    ///
    /// The copy starts unmodified, with no listeners, painter, cache tokens
    /// or cached margins.
    pub fn copy_of(other: &Style) -> Self {
        Self::from_attributes(Attributes {
            transparency: other.attrs.painted_transparency(),
            ..other.attrs.clone()
        })
    }

    /// A style with the given colors, font and background transparency.
    pub fn with_colors(fg: Rgb, bg: Rgb, font: Option<Font>, transparency: u8) -> Self {
        Self::with_background(fg, bg, font, transparency, None, BackgroundType::ImageScaled)
    }

    /// [`Style::with_colors`] plus a background image and fill type.
    pub fn with_background(
        fg: Rgb,
        bg: Rgb,
        font: Option<Font>,
        transparency: u8,
        image: Option<Image>,
        background_type: BackgroundType,
    ) -> Self {
        Self::from_attributes(Attributes {
            fg_color: fg,
            bg_color: bg,
            font,
            transparency,
            bg_image: image,
            background_type,
            ..Attributes::default()
        })
    }

    /// Start a theme style; see [`StyleBuilder`].
    pub fn builder() -> StyleBuilder {
        StyleBuilder::new()
    }

    /// Wrap the style in a shared handle.
    pub fn shared(self) -> StyleHandle {
        Rc::new(RefCell::new(self))
    }

    /// A write-only style forwarding every mutation to `targets`, in order.
    pub fn create_proxy(targets: impl IntoIterator<Item = StyleHandle>) -> ProxyStyle {
        ProxyStyle::new(targets)
    }

    // ----- bookkeeping -----

    /// True if any attribute group was set directly by application code.
    #[inline]
    pub fn is_modified(&self) -> bool {
        !self.overrides.is_empty()
    }

    /// The attribute groups a merge will leave alone.
    #[inline]
    pub fn overrides(&self) -> Overrides {
        self.overrides
    }

    /// Forget every override so the next merge reapplies the whole theme.
    pub fn reset_overrides(&mut self) {
        self.overrides = Overrides::empty();
    }

    /// Flag this style as belonging to a list cell renderer.
    pub fn mark_as_renderer_style(&mut self) {
        self.renderer = true;
    }

    pub fn is_renderer_style(&self) -> bool {
        self.renderer
    }

    pub fn is_suppress_change_events(&self) -> bool {
        self.suppress_change_events
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.as_ref().map_or(0, ListenerSet::len)
    }

    pub fn has_cached_margins(&self) -> bool {
        self.cached_margin.is_some()
    }

    /// The margin values saved by the last `cache_margins`, if any.
    pub fn cached_margins(&self) -> Option<[f32; 4]> {
        self.cached_margin
    }

    pub fn round_rect_cache(&self) -> Option<&CacheToken> {
        self.round_rect_cache.as_ref()
    }

    /// Store the renderer's rounded-rect geometry; cleared on the next change.
    pub fn set_round_rect_cache(&mut self, token: Option<CacheToken>) {
        self.round_rect_cache = token;
    }

    pub fn native_render_cache(&self) -> Option<&CacheToken> {
        self.native_render_cache.as_ref()
    }

    /// Store the renderer's native drawing state; cleared on the next change.
    pub fn set_native_render_cache(&mut self, token: Option<CacheToken>) {
        self.native_render_cache = token;
    }

    // ----- colors, font, image -----

    pub fn fg_color(&self) -> Rgb {
        self.attrs.fg_color
    }

    pub fn fg_alpha(&self) -> u8 {
        self.attrs.fg_alpha
    }

    pub fn bg_color(&self) -> Rgb {
        self.attrs.bg_color
    }

    pub fn font(&self) -> Option<&Font> {
        self.attrs.font.as_ref()
    }

    pub fn bg_image(&self) -> Option<&Image> {
        self.attrs.bg_image.as_ref()
    }

    /// Background transparency as painted.
    ///
    /// An opaque or animated image that is scaled or tiled over the whole
    /// background hides the background color, so this reports fully opaque
    /// in that case regardless of the stored byte.
    pub fn bg_transparency(&self) -> u8 {
        self.attrs.painted_transparency()
    }

    /// The stored transparency byte.
    pub fn raw_bg_transparency(&self) -> u8 {
        self.attrs.transparency
    }

    pub fn opacity(&self) -> u8 {
        self.attrs.opacity
    }

    pub fn elevation(&self) -> u32 {
        self.attrs.elevation
    }

    pub fn is_surface(&self) -> bool {
        self.attrs.surface
    }

    pub fn bg_painter(&self) -> Option<&Rc<dyn BackgroundPainter>> {
        self.painter.as_ref()
    }

    // ----- background -----

    pub fn background_type(&self) -> BackgroundType {
        self.attrs.background_type
    }

    pub fn background_alignment(&self) -> BackgroundAlignment {
        self.attrs.background_alignment
    }

    pub fn background_gradient(&self) -> BackgroundGradient {
        self.attrs.gradient
    }

    pub fn bg_gradient_start_color(&self) -> Rgb {
        self.attrs.gradient.start
    }

    pub fn bg_gradient_end_color(&self) -> Rgb {
        self.attrs.gradient.end
    }

    pub fn bg_gradient_relative_x(&self) -> f32 {
        self.attrs.gradient.relative_x
    }

    pub fn bg_gradient_relative_y(&self) -> f32 {
        self.attrs.gradient.relative_y
    }

    pub fn bg_gradient_relative_size(&self) -> f32 {
        self.attrs.gradient.relative_size
    }

    // ----- border, alignment, decoration -----

    pub fn border(&self) -> &Border {
        &self.attrs.border
    }

    pub fn alignment(&self) -> Alignment {
        self.attrs.alignment
    }

    pub fn text_decoration(&self) -> TextDecoration {
        self.attrs.text_decoration
    }

    pub fn is_underline(&self) -> bool {
        self.attrs.text_decoration.contains(TextDecoration::UNDERLINE)
    }

    pub fn is_strike_through(&self) -> bool {
        self.attrs.text_decoration.contains(TextDecoration::STRIKETHROUGH)
    }

    pub fn is_overline(&self) -> bool {
        self.attrs.text_decoration.contains(TextDecoration::OVERLINE)
    }

    pub fn is_raised_3d(&self) -> bool {
        self.attrs.text_decoration.contains(TextDecoration::RAISED_3D)
    }

    pub fn is_lowered_3d(&self) -> bool {
        self.attrs.text_decoration.contains(TextDecoration::LOWERED_3D)
    }

    pub fn is_3d_text_north(&self) -> bool {
        self.attrs.text_decoration.contains(TextDecoration::SHADOW_NORTH_3D)
    }

    // ----- icon gap -----

    /// The icon gap in pixels, or -1 when unset.
    ///
    /// Resolved on the horizontal axis.
    pub fn icon_gap<M: DisplayMetrics + ?Sized>(&self, metrics: &M) -> i32 {
        if self.attrs.icon_gap < 0.0 {
            return -1;
        }
        units::resolve(self.attrs.icon_gap, self.attrs.icon_gap_unit, Side::Left, metrics)
    }

    /// The stored icon gap value; negative means unset.
    pub fn icon_gap_value(&self) -> f32 {
        self.attrs.icon_gap
    }

    pub fn icon_gap_unit(&self) -> Unit {
        self.attrs.icon_gap_unit
    }

    // ----- padding -----

    pub fn padding_box(&self) -> &Spacing {
        &self.attrs.padding
    }

    /// Padding for `side` in pixels; `rtl` swaps left and right.
    pub fn padding<M: DisplayMetrics + ?Sized>(&self, rtl: bool, side: Side, metrics: &M) -> i32 {
        self.attrs.padding.resolve(rtl, side, metrics)
    }

    /// Padding for `side` in the direction reported by `metrics`.
    pub fn padding_for<M: DisplayMetrics + ?Sized>(&self, side: Side, metrics: &M) -> i32 {
        self.padding(metrics.is_rtl(), side, metrics)
    }

    /// Padding addressed by a raw orientation index (0 top, 1 bottom,
    /// 2 left, 3 right).
    pub fn padding_at<M: DisplayMetrics + ?Sized>(
        &self,
        rtl: bool,
        orientation: i32,
        metrics: &M,
    ) -> Result<i32> {
        let side = Side::try_from(orientation)?;
        Ok(self.padding(rtl, side, metrics))
    }

    pub fn padding_top<M: DisplayMetrics + ?Sized>(&self, metrics: &M) -> i32 {
        self.padding(false, Side::Top, metrics)
    }

    pub fn padding_bottom<M: DisplayMetrics + ?Sized>(&self, metrics: &M) -> i32 {
        self.padding(false, Side::Bottom, metrics)
    }

    pub fn padding_left<M: DisplayMetrics + ?Sized>(&self, rtl: bool, metrics: &M) -> i32 {
        self.padding(rtl, Side::Left, metrics)
    }

    pub fn padding_right<M: DisplayMetrics + ?Sized>(&self, rtl: bool, metrics: &M) -> i32 {
        self.padding(rtl, Side::Right, metrics)
    }

    /// Left plus right padding in pixels.
    pub fn horizontal_padding<M: DisplayMetrics + ?Sized>(&self, metrics: &M) -> i32 {
        self.attrs.padding.horizontal(metrics)
    }

    /// Top plus bottom padding in pixels.
    pub fn vertical_padding<M: DisplayMetrics + ?Sized>(&self, metrics: &M) -> i32 {
        self.attrs.padding.vertical(metrics)
    }

    /// The stored padding value for `side`, unresolved.
    pub fn padding_value(&self, rtl: bool, side: Side) -> f32 {
        self.attrs.padding.value(rtl, side)
    }

    pub fn padding_unit(&self, rtl: bool, side: Side) -> Unit {
        self.attrs.padding.unit(rtl, side)
    }

    /// The stored padding unit array; `None` means all pixels.
    pub fn padding_units(&self) -> Option<[Unit; 4]> {
        self.attrs.padding.units()
    }

    // ----- margin -----

    pub fn margin_box(&self) -> &Spacing {
        &self.attrs.margin
    }

    /// Margin for `side` in pixels; `rtl` swaps left and right.
    pub fn margin<M: DisplayMetrics + ?Sized>(&self, rtl: bool, side: Side, metrics: &M) -> i32 {
        self.attrs.margin.resolve(rtl, side, metrics)
    }

    pub fn margin_for<M: DisplayMetrics + ?Sized>(&self, side: Side, metrics: &M) -> i32 {
        self.margin(metrics.is_rtl(), side, metrics)
    }

    pub fn margin_at<M: DisplayMetrics + ?Sized>(
        &self,
        rtl: bool,
        orientation: i32,
        metrics: &M,
    ) -> Result<i32> {
        let side = Side::try_from(orientation)?;
        Ok(self.margin(rtl, side, metrics))
    }

    pub fn margin_top<M: DisplayMetrics + ?Sized>(&self, metrics: &M) -> i32 {
        self.margin(false, Side::Top, metrics)
    }

    pub fn margin_bottom<M: DisplayMetrics + ?Sized>(&self, metrics: &M) -> i32 {
        self.margin(false, Side::Bottom, metrics)
    }

    pub fn margin_left<M: DisplayMetrics + ?Sized>(&self, rtl: bool, metrics: &M) -> i32 {
        self.margin(rtl, Side::Left, metrics)
    }

    pub fn margin_right<M: DisplayMetrics + ?Sized>(&self, rtl: bool, metrics: &M) -> i32 {
        self.margin(rtl, Side::Right, metrics)
    }

    pub fn horizontal_margins<M: DisplayMetrics + ?Sized>(&self, metrics: &M) -> i32 {
        self.attrs.margin.horizontal(metrics)
    }

    pub fn vertical_margins<M: DisplayMetrics + ?Sized>(&self, metrics: &M) -> i32 {
        self.attrs.margin.vertical(metrics)
    }

    pub fn margin_value(&self, rtl: bool, side: Side) -> f32 {
        self.attrs.margin.value(rtl, side)
    }

    pub fn margin_unit(&self, rtl: bool, side: Side) -> Unit {
        self.attrs.margin.unit(rtl, side)
    }

    pub fn margin_units(&self) -> Option<[Unit; 4]> {
        self.attrs.margin.units()
    }

    // ----- mutation -----

    /// Store `kind`, then run the change protocol if anything changed.
    pub(crate) fn apply(&mut self, kind: EditKind, origin: Origin) {
        let a = &mut self.attrs;
        let (changed, property) = match kind {
            EditKind::FgColor(v) => (assign(&mut a.fg_color, v), StyleProperty::FgColor),
            EditKind::FgAlpha(v) => (assign(&mut a.fg_alpha, v), StyleProperty::FgAlpha),
            EditKind::BgColor(v) => (assign(&mut a.bg_color, v), StyleProperty::BgColor),
            EditKind::Font(v) => (assign(&mut a.font, v), StyleProperty::Font),
            EditKind::BgImage(v) => (assign(&mut a.bg_image, v), StyleProperty::BgImage),
            EditKind::Transparency(v) => {
                (assign(&mut a.transparency, v), StyleProperty::Transparency)
            }
            EditKind::Opacity(v) => (assign(&mut a.opacity, v), StyleProperty::Opacity),
            EditKind::Elevation(v) => (assign(&mut a.elevation, v), StyleProperty::Elevation),
            EditKind::IconGap { gap, unit } => {
                let unit = unit.unwrap_or(a.icon_gap_unit);
                let changed = assign(&mut a.icon_gap, gap) | assign(&mut a.icon_gap_unit, unit);
                (changed, StyleProperty::IconGap)
            }
            EditKind::IconGapUnit(v) => {
                (assign(&mut a.icon_gap_unit, v), StyleProperty::IconGapUnit)
            }
            EditKind::Surface(v) => (assign(&mut a.surface, v), StyleProperty::Surface),
            EditKind::BackgroundType(v) => {
                (assign(&mut a.background_type, v), StyleProperty::BgType)
            }
            EditKind::BackgroundAlignment(v) => {
                (assign(&mut a.background_alignment, v), StyleProperty::BgAlign)
            }
            EditKind::Gradient(v) => (assign(&mut a.gradient, v), StyleProperty::BgGradient),
            EditKind::GradientStart(v) => {
                let next = a.gradient.with_start(v);
                (assign(&mut a.gradient, next), StyleProperty::BgGradient)
            }
            EditKind::GradientEnd(v) => {
                let next = a.gradient.with_end(v);
                (assign(&mut a.gradient, next), StyleProperty::BgGradient)
            }
            EditKind::GradientX(v) => {
                let next = a.gradient.with_relative_x(v);
                (assign(&mut a.gradient, next), StyleProperty::BgGradient)
            }
            EditKind::GradientY(v) => {
                let next = a.gradient.with_relative_y(v);
                (assign(&mut a.gradient, next), StyleProperty::BgGradient)
            }
            EditKind::GradientSize(v) => {
                let next = a.gradient.with_relative_size(v);
                (assign(&mut a.gradient, next), StyleProperty::BgGradient)
            }
            EditKind::Border(v) => (assign(&mut a.border, v), StyleProperty::Border),
            EditKind::Alignment(v) => (assign(&mut a.alignment, v), StyleProperty::Align),
            EditKind::TextDecoration(v) => {
                (assign(&mut a.text_decoration, v), StyleProperty::TextDecoration)
            }
            EditKind::Decorate { flag, on } => {
                let mut next = a.text_decoration;
                next.set(flag, on);
                (assign(&mut a.text_decoration, next), StyleProperty::TextDecoration)
            }
            EditKind::Text3d { enabled, raised } => {
                let next = a.text_decoration.with_3d(enabled, raised);
                (assign(&mut a.text_decoration, next), StyleProperty::TextDecoration)
            }
            EditKind::Painter(v) => {
                let changed = !same_painter(&self.painter, &v);
                if changed {
                    self.painter = v;
                }
                (changed, StyleProperty::Painter)
            }
            EditKind::Padding(v) => (assign(&mut a.padding, v), StyleProperty::Padding),
            EditKind::PaddingValues(v) => {
                let next = a.padding.with_values(v);
                (assign(&mut a.padding, next), StyleProperty::Padding)
            }
            EditKind::PaddingSide(side, v) => {
                let next = a.padding.with_side(side, v);
                (assign(&mut a.padding, next), StyleProperty::Padding)
            }
            EditKind::PaddingUnits(v) => {
                let changed = !a.padding.same_units(v);
                if changed {
                    a.padding = a.padding.with_units(v);
                }
                (changed, StyleProperty::PaddingUnit)
            }
            EditKind::PaddingUnit(side, v) => {
                let next = a.padding.with_unit(side, v);
                (assign(&mut a.padding, next), StyleProperty::PaddingUnit)
            }
            EditKind::Margin(v) => (assign(&mut a.margin, v), StyleProperty::Margin),
            EditKind::MarginValues(v) => {
                let next = a.margin.with_values(v);
                (assign(&mut a.margin, next), StyleProperty::Margin)
            }
            EditKind::MarginSide(side, v) => {
                let next = a.margin.with_side(side, v);
                (assign(&mut a.margin, next), StyleProperty::Margin)
            }
            EditKind::MarginUnits(v) => {
                let changed = !a.margin.same_units(v);
                if changed {
                    a.margin = a.margin.with_units(v);
                }
                (changed, StyleProperty::MarginUnit)
            }
            EditKind::MarginUnit(side, v) => {
                let next = a.margin.with_unit(side, v);
                (assign(&mut a.margin, next), StyleProperty::MarginUnit)
            }
        };
        if changed {
            self.changed(property, origin);
        }
    }

    fn changed(&mut self, property: StyleProperty, origin: Origin) {
        if origin.marks_override() {
            self.overrides |= property.override_flag();
        }
        self.round_rect_cache = None;
        self.native_render_cache = None;
        if self.suppress_change_events {
            return;
        }
        let Some(listeners) = self.listeners.as_ref().map(ListenerSet::snapshot) else {
            return;
        };
        tracing::trace!(
            property = property.name(),
            listeners = listeners.len(),
            "style attribute changed"
        );
        for listener in &listeners {
            listener.style_changed(property, self);
        }
    }
}

impl StyleSink for Style {
    fn apply_edit(&mut self, edit: Edit, origin: Origin) {
        self.apply(edit.kind, origin);
    }

    /// Pull every non-overridden attribute group from `theme`.
    ///
    /// Groups are written as user changes, so listeners hear about each
    /// one, and the override set is then restored to what it was before the
    /// merge. Padding, margin and the gradient move as whole values, and
    /// transparency is taken as the theme paints it. The theme's painter is
    /// always adopted, silently.
    fn merge(&mut self, theme: &Style) {
        let kept = self.overrides;
        let _span = tracing::debug_span!("style_merge", kept = ?kept).entered();

        let t = &theme.attrs;
        let groups = [
            (Overrides::FG_COLOR, EditKind::FgColor(t.fg_color)),
            (Overrides::FG_ALPHA, EditKind::FgAlpha(t.fg_alpha)),
            (Overrides::BG_COLOR, EditKind::BgColor(t.bg_color)),
            (Overrides::FONT, EditKind::Font(t.font.clone())),
            (Overrides::BG_IMAGE, EditKind::BgImage(t.bg_image.clone())),
            (
                Overrides::TEXT_DECORATION,
                EditKind::TextDecoration(t.text_decoration),
            ),
            (Overrides::TRANSPARENCY, EditKind::Transparency(theme.bg_transparency())),
            (Overrides::PADDING, EditKind::Padding(t.padding)),
            (Overrides::MARGIN, EditKind::Margin(t.margin)),
            (Overrides::BORDER, EditKind::Border(t.border.clone())),
            (
                Overrides::BACKGROUND_TYPE,
                EditKind::BackgroundType(t.background_type),
            ),
            (
                Overrides::BACKGROUND_ALIGNMENT,
                EditKind::BackgroundAlignment(t.background_alignment),
            ),
            (Overrides::BACKGROUND_GRADIENT, EditKind::Gradient(t.gradient)),
            (Overrides::ALIGNMENT, EditKind::Alignment(t.alignment)),
            (Overrides::OPACITY, EditKind::Opacity(t.opacity)),
            (Overrides::ELEVATION, EditKind::Elevation(t.elevation)),
            (Overrides::SURFACE, EditKind::Surface(t.surface)),
            (
                Overrides::ICON_GAP,
                EditKind::IconGap {
                    gap: t.icon_gap,
                    unit: Some(t.icon_gap_unit),
                },
            ),
        ];
        for (group, kind) in groups {
            if !kept.contains(group) {
                self.apply(kind, Origin::User);
            }
        }

        self.overrides = kept;
        self.painter = theme.painter.clone();
        tracing::debug!(skipped = ?kept, "merged theme style");
    }

    fn cache_margins(&mut self, override_existing: bool) {
        if self.cached_margin.is_none() || override_existing {
            let values = self.attrs.margin.values();
            tracing::debug!(?values, "cached margins");
            self.cached_margin = Some(values);
        }
    }

    fn restore_cached_margins(&mut self) {
        if let Some(values) = self.cached_margin {
            tracing::debug!(?values, "restoring cached margins");
            self.apply_edit(Edit::margin_values(values), Origin::User);
            self.cached_margin = None;
        }
    }

    fn flush_margins_cache(&mut self) {
        self.cached_margin = None;
    }

    fn add_listener(&mut self, listener: Rc<dyn StyleListener>) {
        self.listeners.get_or_insert_with(ListenerSet::default).add(listener);
    }

    fn remove_listener(&mut self, listener: &Rc<dyn StyleListener>) {
        if let Some(listeners) = &mut self.listeners {
            listeners.remove(listener);
            if listeners.is_empty() {
                self.listeners = None;
            }
        }
    }

    fn remove_listeners(&mut self) {
        self.listeners = None;
    }

    fn set_suppress_change_events(&mut self, suppress: bool) {
        self.suppress_change_events = suppress;
    }
}

impl PartialEq for Style {
    fn eq(&self, other: &Self) -> bool {
        self.attrs == other.attrs
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Style")
            .field("attrs", &self.attrs)
            .field("overrides", &self.overrides)
            .field("listeners", &self.listener_count())
            .field("cached_margin", &self.cached_margin)
            .field("renderer", &self.renderer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::listener;
    use plume_core::FixedMetrics;
    use tracing_test::traced_test;

    fn recorder() -> (Rc<RefCell<Vec<StyleProperty>>>, Rc<dyn StyleListener>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let l = listener(move |p, _| sink.borrow_mut().push(p));
        (log, l)
    }

    #[test]
    fn defaults_are_unmodified() {
        let s = Style::new();
        assert!(!s.is_modified());
        assert_eq!(s.fg_color(), Rgb(0));
        assert_eq!(s.bg_color(), Rgb(0xFFFFFF));
        assert_eq!(s.alignment(), Alignment::Left);
        assert_eq!(s.padding_top(&FixedMetrics::default()), 3);
        assert_eq!(s.margin_top(&FixedMetrics::default()), 2);
    }

    #[test]
    fn user_write_marks_its_group() {
        let mut s = Style::new();
        s.set_fg_color(Rgb(0xFF0000));
        assert_eq!(s.overrides(), Overrides::FG_COLOR);
        s.set_bg_color_with(Rgb(0x00FF00), Origin::Theme);
        assert_eq!(s.overrides(), Overrides::FG_COLOR);
        assert_eq!(s.bg_color(), Rgb(0x00FF00));
    }

    #[test]
    fn noop_write_leaves_bits_untouched() {
        let mut s = Style::new();
        s.set_fg_color(Rgb::BLACK);
        assert!(!s.is_modified());
    }

    #[test]
    fn one_event_per_effective_change() {
        let (log, l) = recorder();
        let mut s = Style::new();
        s.add_listener(l);

        s.set_bg_color(Rgb(0x123456));
        s.set_bg_color(Rgb(0x123456));
        s.set_elevation(3);

        assert_eq!(*log.borrow(), vec![StyleProperty::BgColor, StyleProperty::Elevation]);
    }

    #[test]
    fn suppressed_changes_are_silent_but_applied() {
        let (log, l) = recorder();
        let mut s = Style::new();
        s.add_listener(l);
        s.set_suppress_change_events(true);
        s.set_fg_color(Rgb(0xABCDEF));
        assert!(log.borrow().is_empty());
        assert_eq!(s.fg_color(), Rgb(0xABCDEF));
        assert!(s.is_modified());

        s.set_suppress_change_events(false);
        s.set_fg_color(Rgb(0x000001));
        assert_eq!(*log.borrow(), vec![StyleProperty::FgColor]);
    }

    #[test]
    fn listeners_dispatch_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut s = Style::new();
        for id in 0..3 {
            let order = Rc::clone(&order);
            s.add_listener(listener(move |_, _| order.borrow_mut().push(id)));
        }
        s.set_opacity(10).unwrap();
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn listener_sees_the_new_value() {
        let seen = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&seen);
        let mut s = Style::new();
        s.add_listener(listener(move |_, style| *slot.borrow_mut() = Some(style.fg_alpha())));
        s.set_fg_alpha(40);
        assert_eq!(*seen.borrow(), Some(40));
    }

    #[test]
    fn removing_listeners() {
        let (log, l) = recorder();
        let mut s = Style::new();
        s.add_listener(Rc::clone(&l));
        s.add_listener(Rc::clone(&l));
        assert_eq!(s.listener_count(), 1);

        s.remove_listener(&listener(|_, _| {}));
        assert_eq!(s.listener_count(), 1);

        s.remove_listener(&l);
        s.set_surface(true);
        assert!(log.borrow().is_empty());

        s.add_listener(l);
        s.remove_listeners();
        assert_eq!(s.listener_count(), 0);
    }

    #[test]
    fn changes_drop_cache_tokens() {
        let mut s = Style::new();
        s.set_round_rect_cache(Some(Rc::new(7u32)));
        s.set_native_render_cache(Some(Rc::new("native")));

        s.set_fg_color(Rgb::BLACK);
        assert!(s.round_rect_cache().is_some());

        s.set_border(Border::line(Rgb(0x333333), 1.0));
        assert!(s.round_rect_cache().is_none());
        assert!(s.native_render_cache().is_none());
    }

    #[test]
    fn suppressed_changes_still_drop_caches() {
        let mut s = Style::new();
        s.set_suppress_change_events(true);
        s.set_round_rect_cache(Some(Rc::new(1u8)));
        s.set_alignment(Alignment::Center);
        assert!(s.round_rect_cache().is_none());
    }

    #[test]
    fn invalid_writes_leave_style_unchanged() {
        let mut s = Style::new();
        let before = Style::copy_of(&s);
        assert!(s.set_padding(1.0, -1.0, 1.0, 1.0).is_err());
        assert!(s.set_margin_side(Side::Right, -3.0).is_err());
        assert!(s.set_opacity(300).is_err());
        assert!(s.set_bg_transparency(-5).is_err());
        assert_eq!(s, before);
        assert!(!s.is_modified());
    }

    #[test]
    fn orientation_index_is_checked() {
        let s = Style::new();
        let m = FixedMetrics::default();
        assert_eq!(s.padding_at(false, 0, &m), Ok(3));
        assert!(matches!(
            s.margin_at(false, 4, &m),
            Err(crate::StyleError::InvalidOrientation(_))
        ));
    }

    #[test]
    fn copy_is_equal_and_unmodified() {
        let mut s = Style::new();
        s.set_fg_color(Rgb(0x112233));
        s.set_padding_units(&[Unit::Dips]);
        s.set_icon_gap_in(4.0, Unit::RootEm).unwrap();
        s.set_bg_gradient_relative_size(0.75).unwrap();
        s.add_listener(listener(|_, _| {}));
        s.cache_margins(false);

        let copy = Style::copy_of(&s);
        assert_eq!(copy, s);
        assert!(!copy.is_modified());
        assert_eq!(copy.listener_count(), 0);
        assert!(!copy.has_cached_margins());
    }

    #[test]
    fn equality_ignores_bookkeeping() {
        let mut a = Style::new();
        let b = Style::new();
        a.set_fg_color_with(Rgb::BLACK, Origin::User);
        a.mark_as_renderer_style();
        a.add_listener(listener(|_, _| {}));
        assert_eq!(a, b);
    }

    #[test]
    fn equality_uses_effective_units() {
        let mut a = Style::new();
        let b = Style::new();
        a.set_padding_units(&[Unit::Pixels]);
        assert_eq!(a, b);
        assert!(!a.is_modified());
        a.set_margin_unit(Side::Top, Unit::ViewportHeight);
        assert_ne!(a, b);
    }

    #[test]
    fn margin_cache_keeps_first_snapshot_unless_overridden() {
        let mut s = Style::new();
        s.set_margin(1.0, 1.0, 1.0, 1.0).unwrap();
        s.cache_margins(false);
        s.set_margin(5.0, 5.0, 5.0, 5.0).unwrap();
        s.cache_margins(false);
        assert_eq!(s.cached_margins(), Some([1.0; 4]));

        s.cache_margins(true);
        s.set_margin(9.0, 9.0, 9.0, 9.0).unwrap();
        s.cache_margins(true);
        assert_eq!(s.cached_margins(), Some([9.0; 4]));
    }

    #[test]
    fn restore_writes_back_and_clears() {
        let (log, l) = recorder();
        let mut s = Style::new();
        s.cache_margins(false);
        s.set_margin(0.0, 0.0, 0.0, 0.0).unwrap();
        s.reset_overrides();
        s.add_listener(l);

        s.restore_cached_margins();
        assert_eq!(s.margin_value(false, Side::Left), 2.0);
        assert!(!s.has_cached_margins());
        assert_eq!(*log.borrow(), vec![StyleProperty::Margin]);
        assert!(s.overrides().contains(Overrides::MARGIN));

        s.restore_cached_margins();
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn flush_discards_cache() {
        let mut s = Style::new();
        s.cache_margins(false);
        s.flush_margins_cache();
        assert!(!s.has_cached_margins());
        s.restore_cached_margins();
        assert!(!s.is_modified());
    }

    #[test]
    fn effective_transparency() {
        let opaque = Image::new("bg", 8, 8).with_opaque(true);
        let mut s = Style::new();
        s.set_bg_transparency(0).unwrap();
        assert_eq!(s.bg_transparency(), 0);

        s.set_bg_image(Some(opaque.clone()));
        assert_eq!(s.bg_transparency(), 0xFF);
        assert_eq!(s.raw_bg_transparency(), 0);

        s.set_background_type(BackgroundType::ImageAligned(crate::background::Anchor::Center));
        assert_eq!(s.bg_transparency(), 0);

        s.set_background_type(BackgroundType::ImageTiledBoth);
        s.set_bg_image(Some(Image::new("anim", 8, 8).with_animation(true)));
        assert_eq!(s.bg_transparency(), 0xFF);

        s.set_bg_image(Some(Image::new("clear", 8, 8)));
        assert_eq!(s.bg_transparency(), 0);
    }

    #[test]
    fn icon_gap_resolution() {
        let m = FixedMetrics::new(400, 800).with_line_height(20);
        let mut s = Style::new();
        assert_eq!(s.icon_gap(&m), -1);

        s.set_icon_gap(6.0).unwrap();
        assert_eq!(s.icon_gap(&m), 6);

        s.set_icon_gap_unit(Unit::ScreenPercentage);
        assert_eq!(s.icon_gap(&m), 24);

        let (log, l) = recorder();
        s.add_listener(l);
        s.set_icon_gap_in(1.0, Unit::RootEm).unwrap();
        assert_eq!(s.icon_gap(&m), 20);
        assert_eq!(*log.borrow(), vec![StyleProperty::IconGap]);
        assert!(s.overrides().contains(Overrides::ICON_GAP));
    }

    #[test]
    fn decoration_toggles() {
        let (log, l) = recorder();
        let mut s = Style::new();
        s.add_listener(l);

        s.set_underline(true);
        s.set_3d_text(true, true);
        s.set_3d_text_north(true);
        assert!(s.is_underline() && s.is_raised_3d() && s.is_3d_text_north());

        s.set_3d_text(true, false);
        assert!(s.is_lowered_3d() && !s.is_raised_3d());
        assert!(s.is_underline());

        s.set_underline(true);
        assert_eq!(log.borrow().len(), 4);
        assert!(log.borrow().iter().all(|p| *p == StyleProperty::TextDecoration));
        assert_eq!(s.overrides(), Overrides::TEXT_DECORATION);
    }

    #[test]
    fn gradient_fields_replace_the_whole_value() {
        let mut s = Style::new();
        assert_eq!(s.background_gradient(), BackgroundGradient::DEFAULT);
        s.set_bg_gradient_start_color(Rgb(0x00FF00));
        s.set_bg_gradient_relative_y(0.1).unwrap();
        assert_eq!(s.bg_gradient_start_color(), Rgb(0x00FF00));
        assert_eq!(s.bg_gradient_relative_y(), 0.1);
        assert_eq!(s.bg_gradient_end_color(), Rgb(0));
        assert_eq!(s.overrides(), Overrides::BACKGROUND_GRADIENT);
    }

    #[test]
    fn unit_writes_mark_box_group() {
        let (log, l) = recorder();
        let mut s = Style::new();
        s.add_listener(l);
        s.set_padding_unit(Side::Left, Unit::Dips);
        s.set_margin_units(&[Unit::ViewportWidth]);
        assert_eq!(s.overrides(), Overrides::PADDING | Overrides::MARGIN);
        assert_eq!(
            *log.borrow(),
            vec![StyleProperty::PaddingUnit, StyleProperty::MarginUnit]
        );
    }

    #[test]
    fn strip_clears_box_and_border() {
        let mut s = Style::new();
        s.set_border(Border::line(Rgb(1), 2.0));
        s.strip_margin_and_padding();
        let m = FixedMetrics::default();
        assert_eq!(s.horizontal_padding(&m) + s.vertical_padding(&m), 0);
        assert_eq!(s.horizontal_margins(&m) + s.vertical_margins(&m), 0);
        assert!(s.border().is_empty());
    }

    #[test]
    fn padding_for_follows_metrics_direction() {
        let mut s = Style::new();
        s.set_padding(0.0, 0.0, 10.0, 20.0).unwrap();
        let ltr = FixedMetrics::default();
        let rtl = FixedMetrics::default().with_direction(plume_core::LayoutDirection::RightToLeft);
        assert_eq!(s.padding_for(Side::Left, &ltr), 10);
        assert_eq!(s.padding_for(Side::Left, &rtl), 20);
    }

    #[test]
    fn constructors_start_unmodified() {
        let font = Font::new("Sans", 14);
        let s = Style::with_colors(Rgb(1), Rgb(2), Some(font.clone()), 0x80);
        assert_eq!(s.font(), Some(&font));
        assert_eq!(s.raw_bg_transparency(), 0x80);
        assert!(!s.is_modified());

        let image = Image::new("tile", 4, 4);
        let t = Style::with_background(
            Rgb(1),
            Rgb(2),
            None,
            0,
            Some(image.clone()),
            BackgroundType::ImageTiledBoth,
        );
        assert_eq!(t.bg_image(), Some(&image));
        assert_eq!(t.background_type(), BackgroundType::ImageTiledBoth);
    }

    #[test]
    fn huge_boxes_saturate() {
        let m = FixedMetrics::default();
        let mut s = Style::new();
        s.set_padding(0.0, 0.0, 3e9, 3e9).unwrap();
        s.set_margin(3e9, 3e9, 0.0, 0.0).unwrap();
        assert_eq!(s.horizontal_padding(&m), i32::MAX);
        assert_eq!(s.vertical_margins(&m), i32::MAX);
        assert_eq!(s.vertical_padding(&m), 0);
    }

    #[test]
    fn nan_floats_are_rejected_without_events() {
        let (log, l) = recorder();
        let mut s = Style::new();
        s.add_listener(l);
        for _ in 0..3 {
            assert!(s.set_icon_gap(f32::NAN).is_err());
            assert!(s.set_bg_gradient_relative_x(f32::NAN).is_err());
        }
        assert!(
            s.set_background_gradient(BackgroundGradient::DEFAULT.with_relative_y(f32::NAN))
                .is_err()
        );
        assert!(log.borrow().is_empty());
        assert!(!s.is_modified());
        assert_eq!(Style::copy_of(&s), s);
    }

    #[test]
    fn repeated_float_writes_notify_once() {
        let (log, l) = recorder();
        let mut s = Style::new();
        s.add_listener(l);
        for _ in 0..3 {
            s.set_icon_gap(4.5).unwrap();
            s.set_bg_gradient_relative_size(0.25).unwrap();
        }
        assert_eq!(
            *log.borrow(),
            vec![StyleProperty::IconGap, StyleProperty::BgGradient]
        );
    }

    #[test]
    fn copy_takes_painted_transparency() {
        let mut s = Style::new();
        s.set_bg_transparency(0).unwrap();
        s.set_bg_image(Some(Image::new("wall", 8, 8).with_opaque(true)));
        assert_eq!(s.bg_transparency(), 0xFF);

        let mut copy = Style::copy_of(&s);
        assert_eq!(copy.raw_bg_transparency(), 0xFF);
        assert_eq!(copy, s);

        copy.set_bg_image(None);
        assert_eq!(copy.bg_transparency(), 0xFF);
    }

    #[test]
    fn equality_compares_painted_transparency() {
        let wall = Image::new("wall", 8, 8).with_opaque(true);
        let mut a = Style::new();
        let mut b = Style::new();
        a.set_bg_transparency(0).unwrap();
        assert_ne!(a, b);
        a.set_bg_image(Some(wall.clone()));
        b.set_bg_image(Some(wall));
        assert_eq!(a, b);
    }

    #[test]
    fn listener_sees_its_handle_borrowed() {
        let handle = Style::new().shared();
        let weak = Rc::downgrade(&handle);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        handle
            .borrow_mut()
            .add_listener(listener(move |_, style: &Style| {
                let busy = weak.upgrade().is_some_and(|h| h.try_borrow_mut().is_err());
                sink.borrow_mut().push((busy, style.fg_color()));
            }));

        handle.borrow_mut().set_fg_color(Rgb(0x010203));
        assert_eq!(*seen.borrow(), vec![(true, Rgb(0x010203))]);

        // Once the write returns the handle is free again.
        handle.borrow_mut().remove_listeners();
        assert_eq!(handle.borrow().listener_count(), 0);
    }

    #[test]
    #[traced_test]
    fn dispatch_is_traced() {
        let mut s = Style::new();
        s.add_listener(listener(|_, _| {}));
        s.set_fg_color(Rgb(0x0000FF));
        assert!(logs_contain("style attribute changed"));
    }

    #[test]
    #[traced_test]
    fn merge_is_traced() {
        let mut s = Style::new();
        s.merge(&Style::new());
        assert!(logs_contain("merged theme style"));
    }
}
