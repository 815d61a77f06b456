use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::compare::{Compare, NaturalOrd};
use crate::result_list::Collector;

/// An ordered, duplicate-free set implemented using an AVL tree.
///
/// An AVL tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. All ordering decisions go
/// through the comparison policy supplied at construction; two values are the same element
/// exactly when the comparator considers them equal.
///
/// # Examples
/// ```
/// use ordered_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct AvlSet<T, C = NaturalOrd> {
    tree: tree::Tree<T>,
    cmp: C,
    len: usize,
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>` ordered by the type's `Ord` implementation.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_cmp(NaturalOrd)
    }
}

impl<T, C> AvlSet<T, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty `AvlSet<T, C>` ordered by `cmp`.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    /// use ordered_collections::compare::FnCmp;
    ///
    /// let mut set = AvlSet::with_cmp(FnCmp(|lhs: &u32, rhs: &u32| rhs.cmp(lhs)));
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&3));
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        AvlSet {
            tree: None,
            cmp,
            len: 0,
        }
    }

    /// Inserts a value into the set. If an equal value is already present, the set is left
    /// untouched and the rejected value is handed back as `Some(value)`; the stored value is
    /// never replaced.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.insert(1), None);
    /// assert!(set.contains(&1));
    /// assert_eq!(set.insert(1), Some(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> Option<T> {
        let AvlSet {
            ref mut tree,
            ref cmp,
            ref mut len,
        } = self;
        *len += 1;
        tree::insert(tree, Node::new(value), cmp).map(|rejected| {
            *len -= 1;
            rejected
        })
    }

    /// Removes a value from the set and returns it. The removed position is taken over by the
    /// value's in-order predecessor when both children are present. Returns `None` if no equal
    /// value exists.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let AvlSet {
            ref mut tree,
            ref cmp,
            ref mut len,
        } = self;
        tree::remove(tree, value, cmp).map(|removed| {
            *len -= 1;
            removed
        })
    }

    /// Returns a reference to the stored value comparing equal to `value`. Returns `None` if no
    /// such value exists or the set is empty.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.find(&0), None);
    /// assert_eq!(set.find(&1), Some(&1));
    /// ```
    pub fn find(&self, value: &T) -> Option<&T> {
        tree::get(&self.tree, value, &self.cmp)
    }

    /// Checks if a value exists in the set.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, dropping all values. A no-op on an empty set.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the height of the tree: the number of nodes on the longest root-to-leaf path,
    /// or 0 for an empty set.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.insert(3);
    /// assert_eq!(set.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns a value in the set that is less than or equal to a particular value. Returns
    /// `None` if such a value does not exist.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, value: &T) -> Option<&T> {
        tree::floor(&self.tree, value, &self.cmp)
    }

    /// Returns a value in the set that is greater than or equal to a particular value. Returns
    /// `None` if such a value does not exist.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, value: &T) -> Option<&T> {
        tree::ceil(&self.tree, value, &self.cmp)
    }

    /// Returns the minimum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum value of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Applies a visitor to every value using in-order traversal, so values are visited in
    /// ascending order under the set's comparator.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut values = Vec::new();
    /// set.traverse_in_order(|value| values.push(*value));
    /// assert_eq!(values, vec![1, 3]);
    /// ```
    pub fn traverse_in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        tree::traverse_in_order(&self.tree, &mut visit);
    }

    /// Appends every value satisfying `predicate` into a caller-supplied collector. Values are
    /// appended using in-order traversal, so the collector receives them in ascending order
    /// under the set's comparator. The collector borrows the values; the set keeps ownership.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    /// use ordered_collections::result_list::ResultList;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// set.insert(2);
    ///
    /// let mut odd = ResultList::new();
    /// set.collect_matching(|value| value % 2 == 1, &mut odd);
    /// assert_eq!(odd.iter().collect::<Vec<&u32>>(), vec![&1, &3]);
    /// ```
    pub fn collect_matching<'a, P, L>(&'a self, mut predicate: P, out: &mut L)
    where
        P: FnMut(&T) -> bool,
        L: Collector<'a, T>,
    {
        tree::collect_matching(&self.tree, &mut predicate, out);
    }

    /// Returns an iterator over the set. The iterator will yield values using in-order
    /// traversal.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlSetIter<T> {
        AvlSetIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T, C> IntoIterator for AvlSet<T, C>
where
    C: Compare<T>,
{
    type IntoIter = AvlSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a AvlSet<T, C>
where
    T: 'a,
    C: Compare<T>,
{
    type IntoIter = AvlSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields owned values.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { value, right, .. } = node;
            self.current = right;
            value
        })
    }
}

/// An iterator for `AvlSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references.
pub struct AvlSetIter<'a, T>
where
    T: 'a,
{
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            let Node {
                ref value,
                ref right,
                ..
            } = node;
            self.current = right;
            value
        })
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
