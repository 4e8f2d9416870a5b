//! The comparison capability that orders a heap's elements.
//!
//! A heap never asks its element type how two values compare; it always asks
//! the [`Comparator`] value it was constructed with.  This is what allows the
//! same element type to be arranged under different orders at runtime,
//! without wrapper types or `Ord` newtype gymnastics.

use core::{cmp::Ordering, marker::PhantomData};

/// A three-way comparison over values of type `T`.
///
/// Implementations must describe a *total order* and must be pure: given the
/// same pair of values, [`cmp`] must always return the same answer, with no
/// side effects.  A heap invokes its comparator throughout its lifetime and
/// has no way to detect a comparator whose answers drift; such drift is a
/// logic error that leaves the heap arbitrarily (but memory-safely)
/// misordered.
///
/// Any closure or function of type `Fn(&T, &T) -> Ordering` is a
/// `Comparator<T>`, as is the zero-sized [`OrdComparator`] which delegates to
/// `T`'s own [`Ord`] implementation.
///
/// [`cmp`]: Comparator::cmp
pub trait Comparator<T: ?Sized> {
    /// Compares two values, returning [`Ordering::Less`] if `this` should
    /// sort before `that`, [`Ordering::Greater`] if after, and
    /// [`Ordering::Equal`] if the order holds them equivalent.
    fn cmp(&self, this: &T, that: &T) -> Ordering;

    /// Tests whether `this == that` under this order.
    fn eq(&self, this: &T, that: &T) -> bool {
        matches!(self.cmp(this, that), Ordering::Equal)
    }
    /// Tests whether `this != that` under this order.
    fn ne(&self, this: &T, that: &T) -> bool {
        !self.eq(this, that)
    }

    /// Tests whether `this >= that` under this order.
    fn ge(&self, this: &T, that: &T) -> bool {
        !matches!(self.cmp(this, that), Ordering::Less)
    }
    /// Tests whether `this > that` under this order.
    fn gt(&self, this: &T, that: &T) -> bool {
        matches!(self.cmp(this, that), Ordering::Greater)
    }
    /// Tests whether `this <= that` under this order.
    fn le(&self, this: &T, that: &T) -> bool {
        !matches!(self.cmp(this, that), Ordering::Greater)
    }
    /// Tests whether `this < that` under this order.
    fn lt(&self, this: &T, that: &T) -> bool {
        matches!(self.cmp(this, that), Ordering::Less)
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparator<T> for F {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        self(this, that)
    }
}

/// A zero-sized comparator that delegates to the [`Ord`] implementation of
/// its type parameter `T`.
///
/// This is the default order of an
/// [`IndirectHeap`](crate::heap::IndirectHeap), under which the heap behaves
/// as a plain min-heap of `T`.
pub struct OrdComparator<T: ?Sized + Ord>(PhantomData<fn(&T)>);

impl<T: ?Sized + Ord> Default for OrdComparator<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized + Ord> Clone for OrdComparator<T> {
    fn clone(&self) -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized + Ord> Copy for OrdComparator<T> {}

impl<T: ?Sized + Ord> Comparator<T> for OrdComparator<T> {
    // Delegate to `T`'s implementation of [`Ord`].
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }

    // The default implementations of the following methods are overridden so
    // that they delegate to `T`'s implementations of [`PartialEq`] and
    // [`PartialOrd`] rather than merely using its implementation of [`Ord`].
    //
    // If, as required by those traits, `T`'s implementations are consistent
    // with one another, then these overrides have no effect.

    fn eq(&self, this: &T, that: &T) -> bool {
        this == that
    }
    fn ne(&self, this: &T, that: &T) -> bool {
        this != that
    }

    fn ge(&self, this: &T, that: &T) -> bool {
        this >= that
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        this > that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this <= that
    }
    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }
}
