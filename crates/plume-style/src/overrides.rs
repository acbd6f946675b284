//! User-override tracking.
//!
//! Each attribute group has one bit in [`Overrides`]. A value-changing write
//! made with [`Origin::User`] sets the group's bit; a [`Origin::Theme`] write
//! leaves it alone. [`Style::merge`](crate::Style::merge) skips every group
//! whose bit is set, which is how hand-set values survive a theme switch.

use bitflags::bitflags;

bitflags! {
    /// Attribute groups set directly by application code.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Overrides: u32 {
        const FG_COLOR = 1 << 0;
        const FG_ALPHA = 1 << 1;
        const BG_COLOR = 1 << 2;
        const FONT = 1 << 3;
        const BG_IMAGE = 1 << 4;
        const TEXT_DECORATION = 1 << 5;
        const TRANSPARENCY = 1 << 6;
        const PADDING = 1 << 7;
        const MARGIN = 1 << 8;
        const BORDER = 1 << 9;
        const BACKGROUND_TYPE = 1 << 10;
        const BACKGROUND_ALIGNMENT = 1 << 11;
        const BACKGROUND_GRADIENT = 1 << 12;
        const ALIGNMENT = 1 << 13;
        const OPACITY = 1 << 14;
        const ELEVATION = 1 << 15;
        const SURFACE = 1 << 16;
        const ICON_GAP = 1 << 17;
    }
}

/// Who is making a write.
///
/// `User` writes are recorded as overrides; `Theme` writes are not, so a
/// later merge may replace them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Origin {
    #[default]
    User,
    Theme,
}

impl Origin {
    /// True when a change made with this origin marks the group overridden.
    #[inline]
    pub const fn marks_override(self) -> bool {
        matches!(self, Origin::User)
    }
}

/// Name of the attribute carried by a change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    BgColor,
    FgColor,
    FgAlpha,
    BgImage,
    BgType,
    BgAlign,
    BgGradient,
    Font,
    Transparency,
    Opacity,
    Elevation,
    IconGap,
    IconGapUnit,
    Surface,
    Margin,
    Border,
    Padding,
    Painter,
    Align,
    TextDecoration,
    PaddingUnit,
    MarginUnit,
}

impl StyleProperty {
    /// The event name delivered to listeners.
    pub const fn name(self) -> &'static str {
        match self {
            StyleProperty::BgColor => "bgColor",
            StyleProperty::FgColor => "fgColor",
            StyleProperty::FgAlpha => "fgAlpha",
            StyleProperty::BgImage => "bgImage",
            StyleProperty::BgType => "bgType",
            StyleProperty::BgAlign => "bgAlign",
            StyleProperty::BgGradient => "bgGradient",
            StyleProperty::Font => "font",
            StyleProperty::Transparency => "transparency",
            StyleProperty::Opacity => "opacity",
            StyleProperty::Elevation => "elevation",
            StyleProperty::IconGap => "iconGap",
            StyleProperty::IconGapUnit => "iconGapUnit",
            StyleProperty::Surface => "surface",
            StyleProperty::Margin => "margin",
            StyleProperty::Border => "border",
            StyleProperty::Padding => "padding",
            StyleProperty::Painter => "painter",
            StyleProperty::Align => "align",
            StyleProperty::TextDecoration => "textDecoration",
            StyleProperty::PaddingUnit => "padUnit",
            StyleProperty::MarginUnit => "marUnit",
        }
    }

    /// The override group a change to this property belongs to.
    ///
    /// The painter is not tracked and returns an empty set.
    pub const fn override_flag(self) -> Overrides {
        match self {
            StyleProperty::BgColor => Overrides::BG_COLOR,
            StyleProperty::FgColor => Overrides::FG_COLOR,
            StyleProperty::FgAlpha => Overrides::FG_ALPHA,
            StyleProperty::BgImage => Overrides::BG_IMAGE,
            StyleProperty::BgType => Overrides::BACKGROUND_TYPE,
            StyleProperty::BgAlign => Overrides::BACKGROUND_ALIGNMENT,
            StyleProperty::BgGradient => Overrides::BACKGROUND_GRADIENT,
            StyleProperty::Font => Overrides::FONT,
            StyleProperty::Transparency => Overrides::TRANSPARENCY,
            StyleProperty::Opacity => Overrides::OPACITY,
            StyleProperty::Elevation => Overrides::ELEVATION,
            StyleProperty::IconGap | StyleProperty::IconGapUnit => Overrides::ICON_GAP,
            StyleProperty::Surface => Overrides::SURFACE,
            StyleProperty::Margin | StyleProperty::MarginUnit => Overrides::MARGIN,
            StyleProperty::Border => Overrides::BORDER,
            StyleProperty::Padding | StyleProperty::PaddingUnit => Overrides::PADDING,
            StyleProperty::Painter => Overrides::empty(),
            StyleProperty::Align => Overrides::ALIGNMENT,
            StyleProperty::TextDecoration => Overrides::TEXT_DECORATION,
        }
    }
}

impl std::fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
