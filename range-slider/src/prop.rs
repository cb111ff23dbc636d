//! Shareable callback handles.
//!
//! ## Usage
//!
//! Hand a closure to [`RangeSlider::subscribe`](crate::RangeSlider::subscribe)
//! or [`RangeSlider::set_on_control_changed`](crate::RangeSlider::set_on_control_changed);
//! anything implementing the right `Fn` converts through `From`.
//!
//! Handles compare by identity: clones of one handle are equal, two handles
//! built from separate closures never are. The slider relies on this to keep
//! a handle from being subscribed twice.

use std::{fmt, sync::Arc};

/// Callback handle for `Fn(T) -> R`, used for handlers that receive their
/// argument by value.
pub struct CallbackWith<T, R = ()> {
    handler: Arc<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) -> R {
        (self.handler)(value)
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CallbackWith(..)")
    }
}

/// Callback handle for `Fn(&T)`.
///
/// Unlike [`CallbackWith`], the argument is borrowed for the duration of the
/// call, which lets a control hand out a reference to itself.
pub struct CallbackRef<T: ?Sized> {
    handler: Arc<dyn Fn(&T) + Send + Sync>,
}

impl<T: ?Sized> CallbackRef<T> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the callback with a borrowed argument.
    pub fn call(&self, value: &T) {
        (self.handler)(value)
    }
}

impl<T: ?Sized, F> From<F> for CallbackRef<T>
where
    F: Fn(&T) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T: ?Sized> Clone for CallbackRef<T> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T: ?Sized> PartialEq for CallbackRef<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T: ?Sized> Eq for CallbackRef<T> {}

impl<T: ?Sized> fmt::Debug for CallbackRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CallbackRef(..)")
    }
}
