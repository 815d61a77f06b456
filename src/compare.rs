//! Comparison policies supplied to a container at construction.

use std::cmp::Ordering;

/// A three-way total order over values of type `T`.
///
/// A container stores one comparator for its whole lifetime; every ordering
/// decision it makes goes through that comparator. Two values are considered
/// the same element exactly when the comparator returns `Ordering::Equal`.
///
/// # Examples
/// ```
/// use ordered_collections::compare::{Compare, NaturalOrd};
/// use std::cmp::Ordering;
///
/// assert_eq!(NaturalOrd.compare(&1, &2), Ordering::Less);
/// ```
pub trait Compare<T> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

/// The comparison policy that delegates to the type's `Ord` implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrd;

impl<T> Compare<T> for NaturalOrd
where
    T: Ord,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// A comparison policy backed by a closure.
///
/// # Examples
/// ```
/// use ordered_collections::avl_tree::AvlSet;
/// use ordered_collections::compare::FnCmp;
///
/// let mut set = AvlSet::with_cmp(FnCmp(|lhs: &u32, rhs: &u32| rhs.cmp(lhs)));
/// set.insert(1);
/// set.insert(3);
/// assert_eq!(set.iter().collect::<Vec<&u32>>(), vec![&3, &1]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnCmp<F>(pub F);

impl<T, F> Compare<T> for FnCmp<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (self.0)(lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::{Compare, FnCmp, NaturalOrd};
    use std::cmp::Ordering;

    #[test]
    fn test_natural_ord() {
        assert_eq!(NaturalOrd.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrd.compare(&2, &2), Ordering::Equal);
        assert_eq!(NaturalOrd.compare(&3, &2), Ordering::Greater);
    }

    #[test]
    fn test_fn_cmp_reversed() {
        let cmp = FnCmp(|lhs: &u32, rhs: &u32| rhs.cmp(lhs));
        assert_eq!(cmp.compare(&1, &2), Ordering::Greater);
        assert_eq!(cmp.compare(&2, &1), Ordering::Less);
    }
}
