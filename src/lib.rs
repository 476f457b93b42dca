//! Classic data structures and algorithms, implemented generically over the
//! element type and kept deliberately close to their textbook form.
//!
//! Containers: [`SinglyLinkedList`], [`DoublyLinkedList`], [`Stack`],
//! [`Queue`], [`BinarySearchTree`]. Algorithms: [`bubble_sort`],
//! [`selection_sort`], [`insertion_sort`], [`linear_search`],
//! [`binary_search`].
//!
//! Everything is single-threaded and value-semantic: cloning a container is
//! a deep copy, and moving one leaves nothing shared behind. Accessors that
//! can miss (`get`, `pop`, `peek`, `dequeue`) return
//! [`ContainerError`]; removals of absent targets are silent no-ops.
//!
//! Run the walkthrough with: cargo run --bin demo

pub mod bst;
pub mod doubly_linked_list;
pub mod error;
pub mod queue;
pub mod searching;
pub mod singly_linked_list;
pub mod sorting;
pub mod stack;

pub use bst::BinarySearchTree;
pub use doubly_linked_list::DoublyLinkedList;
pub use error::ContainerError;
pub use queue::Queue;
pub use searching::{binary_search, linear_search};
pub use singly_linked_list::SinglyLinkedList;
pub use sorting::{bubble_sort, insertion_sort, selection_sort};
pub use stack::Stack;
