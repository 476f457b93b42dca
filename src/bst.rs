//! Unbalanced binary search tree.
//!
//! Left subtree strictly less, right subtree strictly greater; values equal
//! to an existing node are silently discarded, so the tree behaves as a set.
//! No rebalancing: adversarial insertion orders degrade the height to O(n).

use std::cmp::Ordering;
use std::fmt;

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

#[derive(Clone)]
pub struct BinarySearchTree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` at the first empty branch found by comparison.
    /// Duplicates are discarded.
    pub fn insert(&mut self, value: T) {
        Self::insert_node(&mut self.root, value);
    }

    fn insert_node(node: &mut Option<Box<Node<T>>>, value: T) {
        match node {
            None => *node = Some(Node::leaf(value)),
            Some(current) => match value.cmp(&current.value) {
                Ordering::Less => Self::insert_node(&mut current.left, value),
                Ordering::Greater => Self::insert_node(&mut current.right, value),
                Ordering::Equal => {}
            },
        }
    }

    /// Whether `value` is present.
    pub fn search(&self, value: &T) -> bool {
        Self::search_node(self.root.as_deref(), value)
    }

    fn search_node(node: Option<&Node<T>>, value: &T) -> bool {
        match node {
            None => false,
            Some(current) => match value.cmp(&current.value) {
                Ordering::Equal => true,
                Ordering::Less => Self::search_node(current.left.as_deref(), value),
                Ordering::Greater => Self::search_node(current.right.as_deref(), value),
            },
        }
    }

    /// Removes `value` if present; deleting an absent value is a no-op.
    ///
    /// A node with at most one child is replaced by that child. A node with
    /// two children is replaced by its in-order successor, detached from the
    /// right subtree.
    pub fn delete_value(&mut self, value: &T) {
        self.root = Self::delete_node(self.root.take(), value);
    }

    fn delete_node(node: Option<Box<Node<T>>>, value: &T) -> Option<Box<Node<T>>> {
        let mut node = node?;
        match value.cmp(&node.value) {
            Ordering::Less => {
                node.left = Self::delete_node(node.left.take(), value);
                Some(node)
            }
            Ordering::Greater => {
                node.right = Self::delete_node(node.right.take(), value);
                Some(node)
            }
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => right,
                (left, None) => left,
                (left, Some(right)) => {
                    let (rest, mut successor) = Self::detach_min(right);
                    successor.left = left;
                    successor.right = rest;
                    Some(successor)
                }
            },
        }
    }

    /// Splits the minimum node off a non-empty subtree, returning the
    /// remaining subtree and the detached node.
    fn detach_min(mut node: Box<Node<T>>) -> (Option<Box<Node<T>>>, Box<Node<T>>) {
        match node.left.take() {
            None => {
                let rest = node.right.take();
                (rest, node)
            }
            Some(left) => {
                let (rest, min) = Self::detach_min(left);
                node.left = rest;
                (Some(node), min)
            }
        }
    }

    /// Values in ascending order (left-root-right traversal).
    pub fn in_order(&self) -> Vec<&T> {
        let mut values = Vec::new();
        Self::visit_in_order(self.root.as_deref(), &mut values);
        values
    }

    fn visit_in_order<'a>(node: Option<&'a Node<T>>, values: &mut Vec<&'a T>) {
        if let Some(current) = node {
            Self::visit_in_order(current.left.as_deref(), values);
            values.push(&current.value);
            Self::visit_in_order(current.right.as_deref(), values);
        }
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in self.in_order() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
            first = false;
        }
        Ok(())
    }
}

impl<T> Drop for BinarySearchTree<T> {
    // Tear the tree down with an explicit stack; a degenerate tree is O(n)
    // deep and recursive Box drops would exhaust the call stack.
    fn drop(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(values: &[i32]) -> BinarySearchTree<i32> {
        let mut tree = BinarySearchTree::new();
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    fn sorted_contents(tree: &BinarySearchTree<i32>) -> Vec<i32> {
        tree.in_order().into_iter().copied().collect()
    }

    #[test]
    fn test_in_order_is_sorted() {
        let tree = tree_of(&[5, 3, 7, 2, 4, 6, 8]);
        assert_eq!(sorted_contents(&tree), vec![2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_duplicates_are_discarded() {
        let tree = tree_of(&[5, 3, 5, 3, 5]);
        assert_eq!(sorted_contents(&tree), vec![3, 5]);
    }

    #[test]
    fn test_search() {
        let tree = tree_of(&[5, 3, 7]);
        assert!(tree.search(&5));
        assert!(tree.search(&3));
        assert!(tree.search(&7));
        assert!(!tree.search(&4));
        assert!(!tree.search(&100));

        let empty: BinarySearchTree<i32> = BinarySearchTree::new();
        assert!(!empty.search(&1));
    }

    #[test]
    fn test_delete_leaf() {
        let mut tree = tree_of(&[5, 3, 7]);
        tree.delete_value(&3);
        assert_eq!(sorted_contents(&tree), vec![5, 7]);
        assert!(!tree.search(&3));
    }

    #[test]
    fn test_delete_single_child_node() {
        let mut tree = tree_of(&[5, 3, 2]);
        tree.delete_value(&3);
        assert_eq!(sorted_contents(&tree), vec![2, 5]);
    }

    #[test]
    fn test_delete_two_child_node_uses_successor() {
        let mut tree = tree_of(&[5, 3, 8, 7, 9, 6]);
        tree.delete_value(&8);
        assert_eq!(sorted_contents(&tree), vec![3, 5, 6, 7, 9]);
        assert!(tree.search(&9));
        assert!(tree.search(&7));
    }

    #[test]
    fn test_delete_root() {
        let mut tree = tree_of(&[5, 3, 7]);
        tree.delete_value(&5);
        assert_eq!(sorted_contents(&tree), vec![3, 7]);

        tree.delete_value(&3);
        tree.delete_value(&7);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_delete_absent_value_is_noop() {
        let mut tree = tree_of(&[5, 3, 7]);
        tree.delete_value(&100);
        assert_eq!(sorted_contents(&tree), vec![3, 5, 7]);

        let mut empty: BinarySearchTree<i32> = BinarySearchTree::new();
        empty.delete_value(&1);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_classic_scenario() {
        let mut tree = tree_of(&[5, 3, 7, 2, 4, 6, 8]);
        assert_eq!(sorted_contents(&tree), vec![2, 3, 4, 5, 6, 7, 8]);

        tree.delete_value(&5);
        assert_eq!(sorted_contents(&tree), vec![2, 3, 4, 6, 7, 8]);
        assert!(tree.search(&4));
        assert!(!tree.search(&10));
        assert!(!tree.search(&5));
    }

    #[test]
    fn test_remaining_values_survive_deletes() {
        let values = [50, 30, 70, 20, 40, 60, 80, 10, 25];
        let mut tree = tree_of(&values);
        for &doomed in &[30, 50, 10] {
            tree.delete_value(&doomed);
            assert!(!tree.search(&doomed));
            for &kept in values.iter().filter(|v| ![30, 50, 10].contains(v)) {
                assert!(tree.search(&kept), "lost {}", kept);
            }
        }
    }

    #[test]
    fn test_display_prints_ascending() {
        let tree = tree_of(&[5, 3, 7]);
        assert_eq!(tree.to_string(), "3 5 7");

        let empty: BinarySearchTree<i32> = BinarySearchTree::new();
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn test_clone_is_independent() {
        let original = tree_of(&[5, 3, 7]);
        let mut copy = original.clone();
        copy.delete_value(&3);
        copy.insert(9);
        assert_eq!(sorted_contents(&copy), vec![5, 7, 9]);
        assert_eq!(sorted_contents(&original), vec![3, 5, 7]);
    }

    #[test]
    fn test_degenerate_tree_drops_without_overflow() {
        // A right-leaning chain of height 100_000, built directly so the
        // test exercises only the teardown path.
        let mut tree = BinarySearchTree::new();
        for i in (0..100_000).rev() {
            let mut node = Node::leaf(i);
            node.right = tree.root.take();
            tree.root = Some(node);
        }
        assert!(!tree.is_empty());
        drop(tree);
    }
}
