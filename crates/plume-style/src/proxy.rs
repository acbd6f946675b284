//! Write fan-out across several styles.
//!
//! A composite widget often needs one call to restyle several parts. A
//! [`ProxyStyle`] holds the part styles and forwards every write to each of
//! them in order. It stores no attributes and has no getters, so reading
//! through a proxy is not expressible; [`StyleSlot`] makes the owned/proxy
//! choice explicit where a caller may hold either.

use std::cell::Ref;
use std::rc::Rc;

use crate::edit::Edit;
use crate::error::{Result, StyleError};
use crate::notify::StyleListener;
use crate::overrides::Origin;
use crate::sink::StyleSink;
use crate::style::{Style, StyleHandle};

/// A write-only style forwarding to a fixed list of targets.
///
/// Validation happens when the [`Edit`] is built, before fan-out, so a
/// rejected write reaches no target. Targets fire their own change events;
/// the proxy fires none.
///
/// # Example
///
/// ```
/// use plume_core::Rgb;
/// use plume_style::{Style, StyleSink};
///
/// let label = Style::new().shared();
/// let icon = Style::new().shared();
/// let mut both = Style::create_proxy([label.clone(), icon.clone()]);
///
/// both.set_bg_color(Rgb(0x202020));
/// assert_eq!(label.borrow().bg_color(), Rgb(0x202020));
/// assert_eq!(icon.borrow().bg_color(), Rgb(0x202020));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProxyStyle {
    targets: Vec<StyleHandle>,
}

impl ProxyStyle {
    pub fn new(targets: impl IntoIterator<Item = StyleHandle>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
        }
    }

    /// The forwarded-to styles, in forwarding order.
    pub fn targets(&self) -> &[StyleHandle] {
        &self.targets
    }

    fn each(&self, op: &str, mut f: impl FnMut(&mut Style)) {
        tracing::debug!(op, targets = self.targets.len(), "proxy fan-out");
        for target in &self.targets {
            f(&mut target.borrow_mut());
        }
    }
}

impl StyleSink for ProxyStyle {
    fn apply_edit(&mut self, edit: Edit, origin: Origin) {
        self.each("apply_edit", |s| s.apply_edit(edit.clone(), origin));
    }

    fn merge(&mut self, theme: &Style) {
        self.each("merge", |s| s.merge(theme));
    }

    fn cache_margins(&mut self, override_existing: bool) {
        self.each("cache_margins", |s| s.cache_margins(override_existing));
    }

    fn restore_cached_margins(&mut self) {
        self.each("restore_cached_margins", |s| s.restore_cached_margins());
    }

    fn flush_margins_cache(&mut self) {
        self.each("flush_margins_cache", |s| s.flush_margins_cache());
    }

    fn add_listener(&mut self, listener: Rc<dyn StyleListener>) {
        self.each("add_listener", |s| s.add_listener(Rc::clone(&listener)));
    }

    fn remove_listener(&mut self, listener: &Rc<dyn StyleListener>) {
        self.each("remove_listener", |s| s.remove_listener(listener));
    }

    fn remove_listeners(&mut self) {
        self.each("remove_listeners", |s| s.remove_listeners());
    }

    fn set_suppress_change_events(&mut self, suppress: bool) {
        self.each("set_suppress_change_events", |s| {
            s.set_suppress_change_events(suppress)
        });
    }
}

/// A component's style: either its own, or a proxy over its parts.
#[derive(Debug, Clone)]
pub enum StyleSlot {
    Owned(StyleHandle),
    Proxy(ProxyStyle),
}

impl StyleSlot {
    /// Borrow the owned style for reading.
    ///
    /// Proxies hold no attributes; reading one is [`StyleError::ProxyRead`].
    pub fn read(&self) -> Result<Ref<'_, Style>> {
        match self {
            StyleSlot::Owned(handle) => Ok(handle.borrow()),
            StyleSlot::Proxy(_) => Err(StyleError::ProxyRead),
        }
    }

    pub fn is_proxy(&self) -> bool {
        matches!(self, StyleSlot::Proxy(_))
    }

    fn with_sink(&mut self, f: impl FnOnce(&mut dyn StyleSink)) {
        match self {
            StyleSlot::Owned(handle) => f(&mut *handle.borrow_mut()),
            StyleSlot::Proxy(proxy) => f(proxy),
        }
    }
}

impl From<Style> for StyleSlot {
    fn from(style: Style) -> Self {
        StyleSlot::Owned(style.shared())
    }
}

impl From<StyleHandle> for StyleSlot {
    fn from(handle: StyleHandle) -> Self {
        StyleSlot::Owned(handle)
    }
}

impl From<ProxyStyle> for StyleSlot {
    fn from(proxy: ProxyStyle) -> Self {
        StyleSlot::Proxy(proxy)
    }
}

impl StyleSink for StyleSlot {
    fn apply_edit(&mut self, edit: Edit, origin: Origin) {
        self.with_sink(|s| s.apply_edit(edit, origin));
    }

    fn merge(&mut self, theme: &Style) {
        self.with_sink(|s| s.merge(theme));
    }

    fn cache_margins(&mut self, override_existing: bool) {
        self.with_sink(|s| s.cache_margins(override_existing));
    }

    fn restore_cached_margins(&mut self) {
        self.with_sink(|s| s.restore_cached_margins());
    }

    fn flush_margins_cache(&mut self) {
        self.with_sink(|s| s.flush_margins_cache());
    }

    fn add_listener(&mut self, listener: Rc<dyn StyleListener>) {
        self.with_sink(|s| s.add_listener(listener));
    }

    fn remove_listener(&mut self, listener: &Rc<dyn StyleListener>) {
        self.with_sink(|s| s.remove_listener(listener));
    }

    fn remove_listeners(&mut self) {
        self.with_sink(|s| s.remove_listeners());
    }

    fn set_suppress_change_events(&mut self, suppress: bool) {
        self.with_sink(|s| s.set_suppress_change_events(suppress));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plume_core::Rgb;

    #[test]
    fn slot_reads_owned_and_rejects_proxy() {
        let owned = StyleSlot::from(Style::new());
        assert_eq!(owned.read().map(|s| s.fg_color()), Ok(Rgb::BLACK));

        let proxy = StyleSlot::from(Style::create_proxy([Style::new().shared()]));
        assert!(proxy.is_proxy());
        assert!(matches!(proxy.read(), Err(StyleError::ProxyRead)));
    }

    #[test]
    fn slot_writes_through_either_variant() {
        let target = Style::new().shared();
        let mut owned = StyleSlot::from(Rc::clone(&target));
        owned.set_elevation(2);
        assert_eq!(target.borrow().elevation(), 2);

        let mut proxy = StyleSlot::from(Style::create_proxy([Rc::clone(&target)]));
        proxy.set_elevation(5);
        assert_eq!(target.borrow().elevation(), 5);
    }

    #[test]
    fn empty_proxy_accepts_writes() {
        let mut proxy = ProxyStyle::default();
        proxy.set_fg_color(Rgb(1));
        assert!(proxy.targets().is_empty());
    }
}
