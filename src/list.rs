use std::fmt;
use std::marker::PhantomData;

use itertools::Itertools;
use log::{debug, trace};

use crate::error::{ListError, Result};
use crate::node::{Link, Node};

/// A singly linked list that caches its tail and length.
///
/// `head` owns the first node and every node owns its successor. Nodes are
/// raw allocations (see [`Node::alloc`]); `tail` is a second, non-owning
/// pointer to the last one.
///
/// Invariants kept by every public method:
/// - `head`, `tail` and `size == 0` are absent/true together
/// - walking `next` from `head` visits exactly `size` nodes
/// - `tail` is the node reached last, and its `next` is `None`
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) size: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            size: 0,
            marker: PhantomData,
        }
    }

    /// Snapshot of every element, head to tail. Θ(n).
    pub fn items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Cached element count. O(1).
    pub fn len(&self) -> usize {
        self.size
    }

    /// Same as [`len`](Self::len).
    pub fn length(&self) -> usize {
        self.size
    }

    /// First element, if any.
    pub fn head(&self) -> Option<&T> {
        // SAFETY: `head` is a live node owned by this list; the reference
        // borrows `self`, which blocks every mutation until it is dropped.
        self.head.map(|node| unsafe { &(*node.as_ptr()).data })
    }

    /// Last element, if any. O(1) through the tail cache.
    pub fn tail(&self) -> Option<&T> {
        // SAFETY: as in `head`, `tail` is a live node of this list.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).data })
    }

    /// Element at `index`, walking from the head. Valid range is `[0, len)`.
    ///
    /// Cost is O(index). The tail cache is never used as a shortcut, even
    /// for `index == len - 1`.
    pub fn get_at_index(&self, index: usize) -> Result<&T> {
        match self.node_at(index) {
            // SAFETY: `node_at` only returns live nodes of this list.
            Some(node) => Ok(unsafe { &(*node.as_ptr()).data }),
            None => Err(self.out_of_range(index)),
        }
    }

    /// Insert `item` so that it ends up at `index`. Valid range is `[0, len]`;
    /// `len` appends.
    pub fn insert_at_index(&mut self, index: usize, item: T) -> Result<()> {
        if index == 0 {
            self.prepend(item);
            return Ok(());
        }
        if index == self.size {
            self.append(item);
            return Ok(());
        }

        // `index - 1 < size` exactly when `index` is a valid middle position.
        let Some(prev) = self.node_at(index - 1) else {
            return Err(self.out_of_range(index));
        };
        // SAFETY: `prev` is a live node of this list and `&mut self` keeps
        // every other access out. It is not the tail, so `tail` is unchanged.
        unsafe {
            let prev = prev.as_ptr();
            (*prev).next = Some(Node::alloc(item, (*prev).next));
        }
        self.size += 1;

        trace!("spliced node at index {index}, length now {}", self.size);
        Ok(())
    }

    /// Insert at the end. O(1).
    pub fn append(&mut self, item: T) {
        let node = Node::alloc(item, None);

        match self.tail {
            // SAFETY: `tail` is the live last node of this list, reached only
            // through raw pointers, and `&mut self` keeps every other access out.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.size += 1;
    }

    /// Insert at the front. O(1).
    pub fn prepend(&mut self, item: T) {
        let node = Node::alloc(item, self.head);

        if self.tail.is_none() {
            self.tail = Some(node);
        }

        self.head = Some(node);
        self.size += 1;
    }

    /// First element, head to tail, for which `predicate` holds.
    /// Stops at the first match.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|&item| predicate(item))
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|data| data == item)
    }

    /// Overwrite the payload of every node equal to `old_item` with
    /// `new_item`, keeping the nodes themselves. Returns how many slots were
    /// overwritten.
    ///
    /// All matches are replaced, not only the first one. Fails with
    /// [`ListError::ItemNotFound`] only when the whole scan found nothing.
    pub fn replace(&mut self, old_item: &T, new_item: T) -> Result<usize>
    where
        T: PartialEq + Clone,
    {
        let mut replaced = 0;
        for data in self.iter_mut() {
            if *data == *old_item {
                *data = new_item.clone();
                replaced += 1;
            }
        }

        if replaced == 0 {
            debug!("replace: no element matched in list of length {}", self.size);
            return Err(ListError::ItemNotFound);
        }
        Ok(replaced)
    }

    /// Remove the first node, head to tail, whose data equals `item`.
    pub fn delete(&mut self, item: &T) -> Result<()>
    where
        T: PartialEq,
    {
        let mut prev: Link<T> = None;
        let mut current = self.head;

        while let Some(node) = current {
            // SAFETY: every node on the walk is a live node of this list.
            let node = unsafe { &*node.as_ptr() };
            if node.data == *item {
                break;
            }
            prev = current;
            current = node.next;
        }

        let Some(removed) = current else {
            debug!("delete: no element matched in list of length {}", self.size);
            return Err(ListError::ItemNotFound);
        };

        // SAFETY: `removed` is live; `prev`, when present, is its live
        // predecessor. After relinking nothing in the list points at
        // `removed`, so it is freed exactly once.
        unsafe {
            let next = (*removed.as_ptr()).next;
            match prev {
                Some(prev) => (*prev.as_ptr()).next = next,
                None => self.head = next,
            }
            if next.is_none() {
                self.tail = prev;
            }
            drop(Node::free(removed));
        }
        self.size -= 1;

        trace!("unlinked node, length now {}", self.size);
        Ok(())
    }

    /// Remove and return the first element. O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` is live and owned by this list; it is unlinked here
        // and freed exactly once.
        let Node { data, next } = unsafe { Node::free(head) };
        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.size -= 1;
        Some(data)
    }

    /// Drop every node. The list stays usable.
    pub fn clear(&mut self) {
        // One node at a time, so long chains never recurse.
        while self.pop_front().is_some() {}
    }

    /// Node at `index` for `index < size`, walking from the head.
    /// `None` for any index past the end, before anything is walked.
    fn node_at(&self, index: usize) -> Link<T> {
        if index >= self.size {
            return None;
        }
        let mut current = self.head;
        for _ in 0..index {
            // SAFETY: fewer than `size` steps from `head` stay on live nodes.
            current = current.and_then(|node| unsafe { (*node.as_ptr()).next });
        }
        current
    }

    fn out_of_range(&self, index: usize) -> ListError {
        debug!("index {index} rejected for list of length {}", self.size);
        ListError::IndexOutOfRange {
            index,
            len: self.size,
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

/// `[('A') -> ('B') -> ('C')]`
impl<T: fmt::Debug> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.iter().map(|item| format!("({:?})", item)).join(" -> ");
        write!(f, "[{}]", body)
    }
}

/// `LinkedList(['A', 'B', 'C'])`
impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LinkedList(")?;
        f.debug_list().entries(self.iter()).finish()?;
        f.write_str(")")
    }
}

#[cfg(test)]
impl<T> LinkedList<T> {
    /// Walk the chain and panic if any structural invariant is broken.
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.head.is_none(), self.size == 0, "head vs size");
        assert_eq!(self.tail.is_none(), self.size == 0, "tail vs size");

        let mut count = 0;
        let mut last: Link<T> = None;
        let mut current = self.head;
        while let Some(node) = current {
            count += 1;
            assert!(count <= self.size, "chain is longer than size {}", self.size);
            last = current;
            // SAFETY: the first `size` nodes of the chain are live.
            current = unsafe { (*node.as_ptr()).next };
        }
        assert_eq!(count, self.size, "chain length vs size");
        assert_eq!(last, self.tail, "tail is not the last node");
    }
}
