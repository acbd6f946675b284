#![forbid(unsafe_code)]

//! Core primitives for Plume.
//!
//! This crate provides the platform-facing values the style engine consumes:
//! - [`Side`] for box orientations (with RTL mirroring)
//! - [`Rgb`] for packed 24-bit colors
//! - [`Font`] and [`Image`] as opaque, shareable asset values
//! - [`DisplayMetrics`] for display size, DIP conversion and base font metrics

pub mod asset;
pub mod color;
pub mod geometry;
pub mod metrics;

pub use asset::{Font, FontFace, Image};
pub use color::Rgb;
pub use geometry::{InvalidSide, Side};
pub use metrics::{DisplayMetrics, FixedMetrics, LayoutDirection};
