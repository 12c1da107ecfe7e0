use std::fmt;
use std::ptr::NonNull;

/// Link to the next node. `None` past the tail.
///
/// Nodes live on the heap as raw allocations from [`Node::alloc`]; the list
/// that holds the link owns the node behind it and releases it exactly once
/// through [`Node::free`]. No `Box` exists while a node is linked, so the
/// cached tail pointer is never invalidated by a move or retag of its owner.
pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// One storage unit of the chain.
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Allocate a node in front of `next` and give up the box.
    pub(crate) fn alloc(data: T, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node { data, next })))
    }

    /// Take back ownership of a node allocated by [`Node::alloc`].
    ///
    /// # Safety
    ///
    /// `ptr` must come from `Node::alloc`, must not have been freed already,
    /// and must no longer be reachable from any list link.
    pub(crate) unsafe fn free(ptr: NonNull<Self>) -> Self {
        *Box::from_raw(ptr.as_ptr())
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({:?})", self.data)
    }
}
