//! Walkthrough of every container and algorithm in the crate.
//!
//! Run with: cargo run --bin demo

use classic_data_structures::{
    binary_search, bubble_sort, insertion_sort, linear_search, selection_sort, BinarySearchTree,
    ContainerError, DoublyLinkedList, Queue, SinglyLinkedList, Stack,
};
use colored::Colorize;
use itertools::Itertools;
use rand::Rng;

fn header(title: &str) {
    println!("\n{}", format!("=== {} ===", title).bold().cyan());
}

fn main() -> Result<(), ContainerError> {
    header("Singly Linked List");
    let mut list = SinglyLinkedList::new();
    list.insert(1);
    list.insert(2);
    list.insert(3);
    println!("list:  {}", list);
    println!("element at index 1: {}", list.get(1)?);

    let mut copy = list.clone();
    copy.remove(1);
    println!("copy after remove(1):  {}", copy);
    println!("original is untouched: {}", list);

    let moved = std::mem::take(&mut list);
    println!("moved-to list:  {}", moved);
    println!("moved-from list: {}", list);

    header("Doubly Linked List");
    let mut deque = DoublyLinkedList::new();
    deque.insert_front(1);
    deque.insert_back(2);
    deque.insert_back(3);
    println!("list: {}", deque);
    println!("element at index 2: {}", deque.get(2)?);
    println!("size: {}", deque.size());
    deque.remove_front();
    deque.remove_back();
    println!("after remove_front + remove_back: {}", deque);

    header("Stack");
    let mut stack = Stack::new();
    stack.push(10);
    stack.push(20);
    stack.push(30);
    println!("top element: {}", stack.peek()?);
    println!("popped: {}", stack.pop()?);
    println!("empty now? {}", stack.is_empty());

    header("Queue");
    let mut queue = Queue::new();
    queue.enqueue(10);
    queue.enqueue(20);
    queue.enqueue(30);
    println!("front element: {}", queue.peek()?);
    println!("dequeued: {}", queue.dequeue()?);
    println!("empty now? {}", queue.is_empty());

    header("Binary Search Tree");
    let mut tree = BinarySearchTree::new();
    for value in [5, 3, 7, 2, 4, 6, 8] {
        tree.insert(value);
    }
    println!("in-order: {}", tree);
    tree.delete_value(&5);
    println!("in-order after deleting 5: {}", tree);
    for target in [4, 10] {
        let verdict = if tree.search(&target) {
            "found".green()
        } else {
            "not found".red()
        };
        println!("search for {}: {}", target, verdict);
    }

    header("Sorting");
    let mut rng = rand::thread_rng();
    let unsorted: Vec<i32> = (0..10).map(|_| rng.gen_range(0..100)).collect();
    println!("input: {}", unsorted.iter().join(" "));
    for (name, sort) in [
        ("bubble sort", bubble_sort as fn(&mut [i32])),
        ("selection sort", selection_sort),
        ("insertion sort", insertion_sort),
    ] {
        let mut items = unsorted.clone();
        sort(&mut items);
        println!("{:>14}: {}", name, items.iter().join(" "));
    }

    header("Searching");
    let sorted = [1, 2, 4, 5, 8];
    println!("input: {}", sorted.iter().join(" "));
    println!("linear search for 4: {:?}", linear_search(&sorted, &4));
    println!("binary search for 4: {:?}", binary_search(&sorted, &4));
    println!("binary search for 10: {:?}", binary_search(&sorted, &10));

    header("Error Paths");
    let mut empty_stack: Stack<i32> = Stack::new();
    if let Err(err) = empty_stack.pop() {
        println!("pop on empty stack: {}", err.to_string().red());
    }
    let short_list = {
        let mut list = SinglyLinkedList::new();
        list.insert(1);
        list
    };
    if let Err(err) = short_list.get(5) {
        println!("get(5) on a 1-element list: {}", err.to_string().red());
    }

    println!("\n{}", "all sections completed".green());
    Ok(())
}
