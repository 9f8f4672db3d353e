use std::fmt;

use crate::error::ListError;
use crate::node::{Link, Node};

/// A singly-linked list that owns its nodes through `Box` links.
///
/// There is no tail pointer and no cached length: `push_back` walks to the
/// tail and `length` counts the chain every time.
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
}

impl<T> LinkedList<T> {
    pub fn new() -> LinkedList<T> {
        LinkedList { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// First node of the chain, `None` when the list is empty.
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    pub fn push_front(&mut self, value: T) {
        let old_head = self.head.take();
        self.head = Some(Node::boxed(value, old_head));
    }

    /// Appends `value` after the current tail. O(n).
    pub fn push_back(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Node::boxed(value, None));
    }

    /// Removes and returns the head element.
    ///
    /// An empty list is left untouched and reported as
    /// [`ListError::EmptyContainer`].
    pub fn pop_front(&mut self) -> Result<T, ListError> {
        let node = self.head.take().ok_or(ListError::EmptyContainer)?;
        let Node { value, next } = *node;
        self.head = next;
        Ok(value)
    }

    /// Counts the nodes reachable from the head.
    pub fn length(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            count += 1;
            cursor = node.next.as_deref();
        }
        count
    }

    /// Reverses the chain in place with a previous/current/next rotation.
    pub fn reverse(&mut self) {
        let mut prev: Link<T> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    /// Replaces every value with `f(&value)`, head to tail.
    pub fn apply<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> T,
    {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            node.value = f(&node.value);
            cursor = node.next.as_deref_mut();
        }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Unlinks the first node equal to `value`. Returns whether one was
    /// removed; the list is unchanged otherwise.
    pub fn delete(&mut self, value: &T) -> bool {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.value != *value) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }

        match cursor.take() {
            Some(node) => {
                *cursor = node.next;
                true
            }
            None => false,
        }
    }

    /// The node holding the first occurrence of `value`.
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            if node.value == *value {
                return Some(node);
            }
            cursor = node.next.as_deref();
        }
        None
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink node by node; the default drop would recurse once per node.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkedList(")?;
        f.debug_list().entries(self.iter()).finish()?;
        write!(f, ")")
    }
}
