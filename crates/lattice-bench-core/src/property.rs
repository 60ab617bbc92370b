//! Reactive properties with change detection.
//!
//! A [`Property<T>`] wraps a value and reports whether a write actually changed
//! it. Paired with a [`Signal`](crate::Signal), it gives the panel its toggle
//! and spinner state: the owner writes, and only emits when `set` says the
//! value moved.
//!
//! # Example
//!
//! ```
//! use lattice_bench_core::{Property, Signal};
//!
//! struct Toggle {
//!     checked: Property<bool>,
//!     toggled: Signal<bool>,
//! }
//!
//! impl Toggle {
//!     fn set_checked(&self, checked: bool) {
//!         if self.checked.set(checked) {
//!             self.toggled.emit(checked);
//!         }
//!     }
//! }
//!
//! let toggle = Toggle { checked: Property::new(false), toggled: Signal::new() };
//! toggle.set_checked(true);
//! assert!(toggle.checked.get());
//! ```

use std::fmt;

use parking_lot::RwLock;

/// A value with change detection.
pub struct Property<T> {
    value: RwLock<T>,
}

impl<T: Clone> Property<T> {
    /// Create a new property with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Access the value through a closure without cloning.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.read())
    }

    /// Set the value without change detection.
    pub fn set_silent(&self, value: T) {
        *self.value.write() = value;
    }
}

impl<T: Clone + PartialEq> Property<T> {
    /// Set the value, returning `true` if the value changed.
    ///
    /// The caller emits the associated notification when this returns `true`.
    pub fn set(&self, value: T) -> bool {
        let mut current = self.value.write();
        if *current != value {
            *current = value;
            true
        } else {
            false
        }
    }

    /// Set the value, returning the previous one if it changed.
    pub fn replace(&self, value: T) -> Option<T> {
        let mut current = self.value.write();
        if *current != value {
            Some(std::mem::replace(&mut *current, value))
        } else {
            None
        }
    }
}

impl<T: Clone> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: Clone + Default> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.get())
            .finish()
    }
}
