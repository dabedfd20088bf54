//! Bindable Property
//!
//! A get/set pair that decouples an editable value from its storage.

use std::fmt;
use std::sync::Arc;

/// Two-operation binding contract consumed by every input component.
///
/// Implementations must be read-your-writes: after `set(v)` a `get()` on the
/// same instance observes `v` (unless the property is explicitly read-only).
pub trait Bindable<T> {
    /// Read the current value
    fn get(&self) -> T;

    /// Write a new value
    fn set(&self, value: T);
}

impl<T, P: Bindable<T> + ?Sized> Bindable<T> for Arc<P> {
    fn get(&self) -> T {
        (**self).get()
    }

    fn set(&self, value: T) {
        (**self).set(value)
    }
}

type Getter<T> = Arc<dyn Fn() -> T + Send + Sync>;
type Setter<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Property backed by arbitrary closures
pub struct ComputedProperty<T> {
    getter: Getter<T>,
    setter: Setter<T>,
}

impl<T> ComputedProperty<T> {
    pub fn new(
        getter: impl Fn() -> T + Send + Sync + 'static,
        setter: impl Fn(T) + Send + Sync + 'static,
    ) -> Self {
        Self {
            getter: Arc::new(getter),
            setter: Arc::new(setter),
        }
    }

    /// A property whose writes are dropped
    pub fn read_only(getter: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self::new(getter, |_| {})
    }
}

impl<T> Clone for ComputedProperty<T> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
        }
    }
}

impl<T> Bindable<T> for ComputedProperty<T> {
    fn get(&self) -> T {
        (self.getter)()
    }

    fn set(&self, value: T) {
        (self.setter)(value)
    }
}

impl<T> fmt::Debug for ComputedProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComputedProperty").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn cell(value: u32) -> (Arc<Mutex<u32>>, ComputedProperty<u32>) {
        let shared = Arc::new(Mutex::new(value));
        let read = shared.clone();
        let write = shared.clone();
        let property = ComputedProperty::new(move || *read.lock(), move |v| *write.lock() = v);
        (shared, property)
    }

    #[test]
    fn test_closure_property_reads_its_writes() {
        let (_, property) = cell(1);
        property.set(42);
        assert_eq!(property.get(), 42);
    }

    #[test]
    fn test_clones_share_closures() {
        let (shared, property) = cell(0);
        let other = property.clone();
        other.set(7);
        assert_eq!(property.get(), 7);
        assert_eq!(*shared.lock(), 7);
    }

    #[test]
    fn test_computed_property_delegates_to_closures() {
        let (backing, inner) = cell(0);
        let read = inner.clone();
        let doubled = ComputedProperty::new(move || read.get() * 2, move |v| inner.set(v / 2));

        doubled.set(10);
        assert_eq!(*backing.lock(), 5);
        assert_eq!(doubled.get(), 10);
    }

    #[test]
    fn test_read_only_property_ignores_writes() {
        let (backing, inner) = cell(3);
        let view = ComputedProperty::read_only(move || inner.get().to_string());
        view.set("9".to_string());
        assert_eq!(view.get(), "3");
        assert_eq!(*backing.lock(), 3);
    }

    #[test]
    fn test_shared_handles_are_bindable() {
        let (_, property) = cell(0);
        let property: Arc<dyn Bindable<u32> + Send + Sync> = Arc::new(property);
        property.set(5);
        assert_eq!(property.get(), 5);
    }
}
