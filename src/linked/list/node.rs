use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

// NOTE: Nodes are allocated via Box rather than raw alloc calls, because moving out of a Box is
// the cleanest way to take a value out of an unlinked node.

#[derive(Debug)]
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    pub fn from_node(node: Node<T>) -> NodePtr<T> {
        // SAFETY: Box::into_raw never returns a null pointer.
        NodePtr(unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(node))) })
    }

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is alive until take_node or drop_node consumes it.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: The node is alive until take_node or drop_node consumes it.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is alive until take_node or drop_node consumes it.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The node is alive until take_node or drop_node consumes it.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is alive until take_node or drop_node consumes it.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The node is alive until take_node or drop_node consumes it.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Deallocates the node, moving it out by value.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer came from Box::into_raw in from_node, and taking it back consumes
        // the node's place in the list.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// Deallocates the node in place.
    ///
    /// # Safety
    /// The node must not be accessed through any other copy of this pointer afterwards.
    pub unsafe fn drop_node(self) {
        // SAFETY: The pointer came from Box::into_raw in from_node; the caller guarantees this
        // is the last use.
        drop(unsafe { Box::from_raw(self.0.as_ptr()) });
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
