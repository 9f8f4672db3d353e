use std::fmt;

/// Owning link to the next node, or `None` at the tail.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// One element of a [`LinkedList`](crate::LinkedList).
///
/// Nodes are only created by the list's insertion methods. Callers see them
/// through shared references handed out by `head()`, `find()` and
/// `find_recursive()`.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Link<T>) -> Node<T> {
        Node { value, next }
    }

    pub(crate) fn boxed(value: T, next: Link<T>) -> Box<Node<T>> {
        Box::new(Node::new(value, next))
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// The successor node, `None` for the tail.
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

// Only the payload is printed; following `next` would dump the whole chain.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Node").field(&self.value).finish()
    }
}
