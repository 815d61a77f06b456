//! Ordered, duplicate-free collections for opaque values with a client-supplied
//! comparison policy.
//!
//! The core container is [`AvlSet`](avl_tree/struct.AvlSet.html), a
//! height-balanced binary search tree. Filtered traversals emit matches through
//! the [`Collector`](result_list/trait.Collector.html) boundary, with
//! [`ResultList`](result_list/struct.ResultList.html) as the provided
//! append-ordered implementation.

pub mod avl_tree;
pub mod compare;
pub mod result_list;
