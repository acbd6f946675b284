//! Change listeners and renderer cache tokens.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::overrides::StyleProperty;
use crate::style::Style;

/// An opaque value the renderer caches on a style.
///
/// The style never looks inside; it only drops the token whenever an
/// attribute changes so the renderer knows to rebuild it.
pub type CacheToken = Rc<dyn Any>;

/// Observer of attribute changes on a style.
///
/// Implemented for every `Fn(StyleProperty, &Style)` closure.
///
/// Listeners run while the changed style is mutably borrowed. A listener
/// that holds the style's [`StyleHandle`](crate::StyleHandle) must not
/// borrow it again: `borrow` and `borrow_mut` panic there, and the `try_`
/// forms fail. Read through the `&Style` argument and make listener set
/// changes after the write returns. Dispatch walks a snapshot, so those
/// changes take effect from the next event.
pub trait StyleListener {
    /// Called synchronously after `property` changed on `style`.
    fn style_changed(&self, property: StyleProperty, style: &Style);
}

impl<F> StyleListener for F
where
    F: Fn(StyleProperty, &Style),
{
    fn style_changed(&self, property: StyleProperty, style: &Style) {
        self(property, style)
    }
}

/// Wrap a closure as a shareable listener.
///
/// Keep the returned handle to remove the listener later; removal matches
/// by identity.
pub fn listener<F>(f: F) -> Rc<dyn StyleListener>
where
    F: Fn(StyleProperty, &Style) + 'static,
{
    Rc::new(f)
}

/// Registered listeners in registration order.
#[derive(Default, Clone)]
pub(crate) struct ListenerSet {
    entries: Vec<Rc<dyn StyleListener>>,
}

impl ListenerSet {
    fn position(&self, listener: &Rc<dyn StyleListener>) -> Option<usize> {
        self.entries
            .iter()
            .position(|l| std::ptr::addr_eq(Rc::as_ptr(l), Rc::as_ptr(listener)))
    }

    /// Add `listener` unless the same instance is already registered.
    pub(crate) fn add(&mut self, listener: Rc<dyn StyleListener>) -> bool {
        if self.position(&listener).is_some() {
            return false;
        }
        self.entries.push(listener);
        true
    }

    pub(crate) fn remove(&mut self, listener: &Rc<dyn StyleListener>) -> bool {
        match self.position(listener) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A copy of the list to dispatch over.
    pub(crate) fn snapshot(&self) -> Vec<Rc<dyn StyleListener>> {
        self.entries.clone()
    }
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.entries.len())
            .finish()
    }
}
