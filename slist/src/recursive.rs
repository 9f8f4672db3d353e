//! Recursive forms of the list operations.
//!
//! Helpers that rewire links (push_back, reverse) take the rest of the chain
//! and hand back the rebuilt chain, which the public method stores in `head`.
//! Helpers that run caller code (`==`, the apply closure) work on borrowed
//! links instead, so a panic in that code leaves the chain attached. Every
//! helper recurses once per node, so a long enough list exhausts the
//! thread's stack. That failure is not caught.

use crate::list::LinkedList;
use crate::node::{Link, Node};

fn push_back_rec<T>(link: Link<T>, value: T) -> Link<T> {
    match link {
        None => Some(Node::boxed(value, None)),
        Some(mut node) => {
            node.next = push_back_rec(node.next.take(), value);
            Some(node)
        }
    }
}

// Splices only at the matching node; nothing is detached before `==` runs.
fn delete_rec<T: PartialEq>(link: &mut Link<T>, value: &T) -> bool {
    let Some(node) = link else {
        return false;
    };
    if node.value == *value {
        let rest = node.next.take();
        *link = rest;
        true
    } else {
        delete_rec(&mut node.next, value)
    }
}

fn find_rec<'a, T: PartialEq>(link: Option<&'a Node<T>>, value: &T) -> Option<&'a Node<T>> {
    let node = link?;
    if node.value == *value {
        Some(node)
    } else {
        find_rec(node.next.as_deref(), value)
    }
}

fn length_rec<T>(link: Option<&Node<T>>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + length_rec(node.next.as_deref()),
    }
}

// `prev` is the already reversed prefix.
fn reverse_rec<T>(link: Link<T>, prev: Link<T>) -> Link<T> {
    match link {
        None => prev,
        Some(mut node) => {
            let rest = node.next.take();
            node.next = prev;
            reverse_rec(rest, Some(node))
        }
    }
}

fn apply_rec<T, F>(link: Option<&mut Node<T>>, f: &mut F)
where
    F: FnMut(&T) -> T,
{
    let Some(node) = link else {
        return;
    };
    node.value = f(&node.value);
    apply_rec(node.next.as_deref_mut(), f);
}

impl<T> LinkedList<T> {
    pub fn push_back_recursive(&mut self, value: T) {
        self.head = push_back_rec(self.head.take(), value);
    }

    pub fn length_recursive(&self) -> usize {
        length_rec(self.head.as_deref())
    }

    pub fn reverse_recursive(&mut self) {
        self.head = reverse_rec(self.head.take(), None);
    }

    /// Same contract as [`apply`](LinkedList::apply): values are replaced
    /// head to tail.
    pub fn apply_recursive<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> T,
    {
        apply_rec(self.head.as_deref_mut(), &mut f);
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn delete_recursive(&mut self, value: &T) -> bool {
        delete_rec(&mut self.head, value)
    }

    pub fn find_recursive(&self, value: &T) -> Option<&Node<T>> {
        find_rec(self.head.as_deref(), value)
    }
}
