#![forbid(unsafe_code)]

//! Style attributes for Plume components, with theme-safe user overrides.
//!
//! This crate provides:
//! - [`Style`], the attribute bag of one component, with change listeners
//!   and renderer cache invalidation
//! - [`Overrides`], which records what user code set so [`StyleSink::merge`]
//!   can refresh everything else from a theme
//! - [`ProxyStyle`] and [`StyleSlot`] for fanning writes out to several styles
//! - [`Unit`] and [`Spacing`] for padding and margin stored in mixed units and
//!   resolved to pixels against a [`plume_core::DisplayMetrics`], RTL-aware
//! - [`StyleBuilder`] for authoring theme styles

pub mod attributes;
pub mod background;
pub mod border;
pub mod builder;
pub mod decoration;
pub mod edit;
pub mod error;
pub mod notify;
pub mod overrides;
pub mod proxy;
pub mod sink;
pub mod spacing;
pub mod style;
pub mod units;

pub use attributes::{DEFAULT_MARGIN, DEFAULT_PADDING, ICON_GAP_UNSET};
pub use background::{
    Anchor, BackgroundAlignment, BackgroundGradient, BackgroundPainter, BackgroundType, HAlign,
    VAlign,
};
pub use border::{Border, Relief};
pub use builder::StyleBuilder;
pub use decoration::{Alignment, TextDecoration};
pub use edit::Edit;
pub use error::{Result, StyleError};
pub use notify::{CacheToken, StyleListener, listener};
pub use overrides::{Origin, Overrides, StyleProperty};
pub use proxy::{ProxyStyle, StyleSlot};
pub use sink::StyleSink;
pub use spacing::{Spacing, broadcast_units};
pub use style::{Style, StyleHandle};
pub use units::Unit;
