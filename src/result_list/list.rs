use crate::result_list::Collector;
use std::marker::PhantomData;
use std::ptr;

struct ListNode<'a, T>
where
    T: 'a,
{
    value: &'a T,
    next: *mut ListNode<'a, T>,
}

/// A singly-linked sequence of borrowed values in append order.
///
/// The list owns its nodes but never the values it references, so dropping it
/// releases only the list structure. Appending is O(1) through a tail pointer.
///
/// # Examples
/// ```
/// use ordered_collections::result_list::ResultList;
///
/// let values = vec![1, 2, 3];
/// let mut list = ResultList::new();
/// list.push_back(&values[2]);
/// list.push_back(&values[0]);
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&3, &1]);
/// ```
pub struct ResultList<'a, T>
where
    T: 'a,
{
    head: *mut ListNode<'a, T>,
    tail: *mut ListNode<'a, T>,
    len: usize,
    marker: PhantomData<Box<ListNode<'a, T>>>,
}

impl<'a, T> ResultList<'a, T> {
    /// Constructs a new, empty `ResultList<T>`.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::result_list::ResultList;
    ///
    /// let list: ResultList<u32> = ResultList::new();
    /// ```
    pub fn new() -> Self {
        ResultList {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            len: 0,
            marker: PhantomData,
        }
    }

    /// Appends a borrowed value to the back of the list.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::result_list::ResultList;
    ///
    /// let value = 1;
    /// let mut list = ResultList::new();
    /// list.push_back(&value);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn push_back(&mut self, value: &'a T) {
        let node = Box::into_raw(Box::new(ListNode {
            value,
            next: ptr::null_mut(),
        }));
        if self.head.is_null() {
            self.head = node;
        } else {
            // The tail pointer was produced by Box::into_raw on the previous
            // append and stays valid until Drop reclaims the node.
            unsafe {
                (*self.tail).next = node;
            }
        }
        self.tail = node;
        self.len += 1;
    }

    /// Returns the number of values in the list.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::result_list::ResultList;
    ///
    /// let value = 1;
    /// let mut list = ResultList::new();
    /// list.push_back(&value);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::result_list::ResultList;
    ///
    /// let list: ResultList<u32> = ResultList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the list. The iterator will yield values in append order.
    ///
    /// # Examples
    /// ```
    /// use ordered_collections::result_list::ResultList;
    ///
    /// let values = vec![1, 2];
    /// let mut list = ResultList::new();
    /// list.push_back(&values[0]);
    /// list.push_back(&values[1]);
    ///
    /// let mut iterator = list.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> ResultListIter<'a, '_, T> {
        ResultListIter {
            current: self.head,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Collector<'a, T> for ResultList<'a, T> {
    fn append(&mut self, value: &'a T) {
        self.push_back(value);
    }
}

impl<'a, T> Default for ResultList<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Drop for ResultList<'a, T> {
    // Unlinks iteratively so a long result list cannot overflow the stack.
    fn drop(&mut self) {
        let mut current = self.head;
        while !current.is_null() {
            let node = unsafe { Box::from_raw(current) };
            current = node.next;
        }
    }
}

impl<'b, 'a: 'b, T> IntoIterator for &'b ResultList<'a, T> {
    type IntoIter = ResultListIter<'a, 'b, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `ResultList<T>`.
///
/// This iterator traverses the list in append order and yields the borrowed values.
pub struct ResultListIter<'a, 'b, T>
where
    T: 'a,
    'a: 'b,
{
    current: *const ListNode<'a, T>,
    marker: PhantomData<&'b ListNode<'a, T>>,
}

impl<'a, 'b, T> Iterator for ResultListIter<'a, 'b, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_null() {
            return None;
        }
        // The borrow on the list keeps every node alive for 'b.
        let node = unsafe { &*self.current };
        self.current = node.next;
        Some(node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::ResultList;
    use crate::result_list::Collector;

    #[test]
    fn test_len_empty() {
        let list: ResultList<u32> = ResultList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn test_push_back_preserves_call_order() {
        let values = vec![5, 3, 9];
        let mut list = ResultList::new();
        for value in &values {
            list.push_back(value);
        }

        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&5, &3, &9]);
    }

    #[test]
    fn test_iter_restartable() {
        let value = 1;
        let mut list = ResultList::new();
        list.push_back(&value);

        assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&1]);
        assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&1]);
    }

    #[test]
    fn test_drop_leaves_values_intact() {
        let values = vec![1, 2, 3];
        {
            let mut list = ResultList::new();
            for value in &values {
                list.push_back(value);
            }
        }
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_append_through_collector() {
        fn fill<'a, L>(out: &mut L, values: &'a [u32])
        where
            L: Collector<'a, u32>,
        {
            for value in values {
                out.append(value);
            }
        }

        let values = vec![4, 2];
        let mut list = ResultList::new();
        fill(&mut list, &values);
        assert_eq!(list.iter().collect::<Vec<&u32>>(), vec![&4, &2]);

        let mut vec_out: Vec<&u32> = Vec::new();
        fill(&mut vec_out, &values);
        assert_eq!(vec_out, vec![&4, &2]);
    }

    #[test]
    fn test_long_list_drop() {
        let values = (0..100_000).collect::<Vec<u32>>();
        let mut list = ResultList::new();
        for value in &values {
            list.push_back(value);
        }
        assert_eq!(list.len(), values.len());
        drop(list);
    }
}
