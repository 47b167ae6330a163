use std::fmt::{self, Debug};
use std::marker::PhantomData;

// Traits bound
pub trait Comparator<T>: Clone {
    fn new() -> Self;
    fn less(&self, lhs: &T, rhs: &T) -> bool;

    fn equal(&self, lhs: &T, rhs: &T) -> bool {
        !self.less(lhs, rhs) && !self.less(rhs, lhs)
    }
}

/// Orders elements with their own `<` and `==`.
pub struct DefaultComparator<T> {
    _t: PhantomData<fn(&T, &T) -> bool>,
}

impl<T: PartialOrd> Comparator<T> for DefaultComparator<T> {
    fn new() -> Self {
        Self { _t: PhantomData }
    }

    fn less(&self, lhs: &T, rhs: &T) -> bool {
        lhs < rhs
    }

    fn equal(&self, lhs: &T, rhs: &T) -> bool {
        lhs == rhs
    }
}

impl<T> Clone for DefaultComparator<T> {
    fn clone(&self) -> Self {
        Self { _t: PhantomData }
    }
}

impl<T> Default for DefaultComparator<T> {
    fn default() -> Self {
        Self { _t: PhantomData }
    }
}

impl<T> Debug for DefaultComparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultComparator")
    }
}

/// Reverses another comparator, e.g. for a descending tree.
#[derive(Clone, Debug, Default)]
pub struct ReverseComparator<C> {
    inner: C,
}

impl<T, C: Comparator<T>> Comparator<T> for ReverseComparator<C> {
    fn new() -> Self {
        Self { inner: C::new() }
    }

    fn less(&self, lhs: &T, rhs: &T) -> bool {
        self.inner.less(rhs, lhs)
    }

    fn equal(&self, lhs: &T, rhs: &T) -> bool {
        self.inner.equal(lhs, rhs)
    }
}

#[cfg(test)]
#[test]
fn test_comparators() {
    let cmp = DefaultComparator::<i32>::new();
    assert!(cmp.less(&1, &2));
    assert!(!cmp.less(&2, &2));
    assert!(cmp.equal(&2, &2));

    let rev = ReverseComparator::<DefaultComparator<i32>>::new();
    assert!(rev.less(&2, &1));
    assert!(!rev.less(&1, &2));
    assert!(rev.equal(&3, &3));
}
