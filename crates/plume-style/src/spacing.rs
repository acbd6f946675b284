//! Padding and margin boxes.
//!
//! A [`Spacing`] stores one float per side plus an optional per-side unit
//! array. An absent unit array means every side is in pixels; it is only
//! allocated once a side is given a non-default unit.

use plume_core::{DisplayMetrics, Side};

use crate::units::{self, Unit};

/// Four per-side lengths with their units, indexed top/bottom/left/right.
///
/// Values are never negative. Equality compares the values and the
/// *effective* units, so an absent unit array equals an all-pixels one.
#[derive(Debug, Clone, Copy)]
pub struct Spacing {
    values: [f32; 4],
    units: Option<[Unit; 4]>,
}

impl Spacing {
    /// A box with the same pixel value on every side.
    ///
    /// The caller guarantees `value >= 0`.
    pub(crate) const fn uniform(value: f32) -> Self {
        Self {
            values: [value; 4],
            units: None,
        }
    }

    /// The raw stored values in top/bottom/left/right order.
    #[inline]
    pub fn values(&self) -> [f32; 4] {
        self.values
    }

    /// The stored unit array, if one was ever set.
    #[inline]
    pub fn units(&self) -> Option<[Unit; 4]> {
        self.units
    }

    /// Units with the implicit all-pixels default applied.
    #[inline]
    pub fn effective_units(&self) -> [Unit; 4] {
        self.units.unwrap_or([Unit::Pixels; 4])
    }

    /// Raw value for a side, mirrored under RTL.
    #[inline]
    pub fn value(&self, rtl: bool, side: Side) -> f32 {
        self.values[side.mirrored(rtl).index()]
    }

    /// Unit for a side, mirrored under RTL.
    #[inline]
    pub fn unit(&self, rtl: bool, side: Side) -> Unit {
        self.effective_units()[side.mirrored(rtl).index()]
    }

    /// Resolve one side to device pixels.
    ///
    /// Under RTL, left and right swap before both the value and the unit are
    /// looked up, so `resolve(true, Left)` reads the right-hand entry.
    pub fn resolve<M: DisplayMetrics + ?Sized>(&self, rtl: bool, side: Side, metrics: &M) -> i32 {
        let stored = side.mirrored(rtl);
        units::resolve(
            self.values[stored.index()],
            self.effective_units()[stored.index()],
            stored,
            metrics,
        )
    }

    /// Left plus right, in pixels, clamped to `i32::MAX`.
    pub fn horizontal<M: DisplayMetrics + ?Sized>(&self, metrics: &M) -> i32 {
        self.resolve(false, Side::Right, metrics)
            .saturating_add(self.resolve(false, Side::Left, metrics))
    }

    /// Top plus bottom, in pixels, clamped to `i32::MAX`.
    pub fn vertical<M: DisplayMetrics + ?Sized>(&self, metrics: &M) -> i32 {
        self.resolve(false, Side::Top, metrics)
            .saturating_add(self.resolve(false, Side::Bottom, metrics))
    }

    pub(crate) fn with_values(mut self, values: [f32; 4]) -> Self {
        self.values = values;
        self
    }

    pub(crate) fn with_side(mut self, side: Side, value: f32) -> Self {
        self.values[side.index()] = value;
        self
    }

    pub(crate) fn with_units(mut self, units: Option<[Unit; 4]>) -> Self {
        self.units = units;
        self
    }

    pub(crate) fn with_unit(mut self, side: Side, unit: Unit) -> Self {
        let mut units = self.effective_units();
        units[side.index()] = unit;
        self.units = Some(units);
        self
    }

    /// True if the two boxes would lay out identically.
    pub(crate) fn same_units(&self, units: Option<[Unit; 4]>) -> bool {
        self.effective_units() == units.unwrap_or([Unit::Pixels; 4])
    }
}

impl PartialEq for Spacing {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values && self.effective_units() == other.effective_units()
    }
}

/// Expand a unit list to four sides.
///
/// An empty list clears the units (all pixels); a list shorter than four
/// applies its first entry to every side; extra entries are ignored.
pub fn broadcast_units(units: &[Unit]) -> Option<[Unit; 4]> {
    match units {
        [] => None,
        [top, bottom, left, right, ..] => Some([*top, *bottom, *left, *right]),
        [first, ..] => Some([*first; 4]),
    }
}

/// True when a box value is acceptable (non-negative and not NaN).
#[inline]
pub(crate) fn is_valid_length(value: f32) -> bool {
    value >= 0.0
}
