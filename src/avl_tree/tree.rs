use crate::avl_tree::node::Node;
use crate::compare::Compare;
use crate::result_list::Collector;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Recomputes the height of the subtree root and restores the balance invariant
// with a single or double rotation. Heights are recomputed child-first after
// every pointer swap so the next check up the path sees correct values.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// Detaches the in-order maximum, replacing it with its left subtree, and
// rebalances every node on the descent path on the way back up.
// precondition: there exists a maximum node in the tree
fn remove_max<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    let has_right = match tree {
        Some(ref node) => node.right.is_some(),
        None => unreachable!(),
    };

    if has_right {
        let max = match tree {
            Some(ref mut node) => remove_max(&mut node.right),
            None => unreachable!(),
        };
        balance(tree);
        return max;
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.left.take();
            node
        },
        None => unreachable!(),
    }
}

// The in-order predecessor of the removed value becomes the new subtree root.
fn combine_subtrees<T>(mut left_tree: Tree<T>, right_tree: Tree<T>) -> Tree<T> {
    let mut new_root = remove_max(&mut left_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    new_root.update();
    Some(new_root)
}

/// Inserts a node along the comparison path, rebalancing on the unwind. If an
/// equal value is already present the tree is left untouched and the rejected
/// value is returned.
pub fn insert<T, C>(tree: &mut Tree<T>, new_node: Node<T>, cmp: &C) -> Option<T>
where
    C: Compare<T>,
{
    let ret = match tree {
        Some(ref mut node) => match cmp.compare(&new_node.value, &node.value) {
            Ordering::Less => insert(&mut node.left, new_node, cmp),
            Ordering::Greater => insert(&mut node.right, new_node, cmp),
            Ordering::Equal => return Some(new_node.value),
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    balance(tree);
    ret
}

/// Removes the node comparing equal to `value`, rebalancing every ancestor on
/// the search path. A node with two children is replaced by its in-order
/// predecessor, detached from the left subtree by `remove_max`.
pub fn remove<T, C>(tree: &mut Tree<T>, value: &T, cmp: &C) -> Option<T>
where
    C: Compare<T>,
{
    let ret = match tree.take() {
        Some(mut node) => match cmp.compare(value, &node.value) {
            Ordering::Less => {
                let ret = remove(&mut node.left, value, cmp);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, value, cmp);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let unboxed_node = *node;
                let Node {
                    value: removed,
                    left,
                    right,
                    ..
                } = unboxed_node;
                match (left, right) {
                    (None, right) => *tree = right,
                    (left, None) => *tree = left,
                    (left, right) => *tree = combine_subtrees(left, right),
                }
                Some(removed)
            },
        },
        None => return None,
    };

    balance(tree);
    ret
}

pub fn get<'a, T, C>(tree: &'a Tree<T>, value: &T, cmp: &C) -> Option<&'a T>
where
    C: Compare<T>,
{
    tree.as_ref().and_then(|node| {
        match cmp.compare(value, &node.value) {
            Ordering::Less => get(&node.left, value, cmp),
            Ordering::Greater => get(&node.right, value, cmp),
            Ordering::Equal => Some(&node.value),
        }
    })
}

pub fn ceil<'a, T, C>(tree: &'a Tree<T>, value: &T, cmp: &C) -> Option<&'a T>
where
    C: Compare<T>,
{
    tree.as_ref().and_then(|node| {
        match cmp.compare(value, &node.value) {
            Ordering::Greater => ceil(&node.right, value, cmp),
            Ordering::Less => {
                match ceil(&node.left, value, cmp) {
                    None => Some(&node.value),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.value),
        }
    })
}

pub fn floor<'a, T, C>(tree: &'a Tree<T>, value: &T, cmp: &C) -> Option<&'a T>
where
    C: Compare<T>,
{
    tree.as_ref().and_then(|node| {
        match cmp.compare(value, &node.value) {
            Ordering::Less => floor(&node.left, value, cmp),
            Ordering::Greater => {
                match floor(&node.right, value, cmp) {
                    None => Some(&node.value),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.value),
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

/// Applies `visit` to every value in ascending order.
pub fn traverse_in_order<T, F>(tree: &Tree<T>, visit: &mut F)
where
    F: FnMut(&T),
{
    if let Some(ref node) = tree {
        traverse_in_order(&node.left, visit);
        visit(&node.value);
        traverse_in_order(&node.right, visit);
    }
}

/// Appends every value satisfying `predicate` into `out`, in ascending order.
pub fn collect_matching<'a, T, P, L>(tree: &'a Tree<T>, predicate: &mut P, out: &mut L)
where
    P: FnMut(&T) -> bool,
    L: Collector<'a, T>,
{
    if let Some(ref node) = tree {
        collect_matching(&node.left, predicate, out);
        if predicate(&node.value) {
            out.append(&node.value);
        }
        collect_matching(&node.right, predicate, out);
    }
}
