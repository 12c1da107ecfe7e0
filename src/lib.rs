//! # singly-linked
//!
//! A singly linked list built from owned nodes:
//!
//! - `head` owns the first node, and every node owns its successor
//! - `tail` is a non-owning cache of the last node, so `append` is O(1)
//! - `size` is cached, so `len` never walks the chain
//!
//! The list is a single-threaded container. It is neither `Send` nor `Sync`;
//! wrap it in your own synchronization if it has to cross threads.
//!
//! ```
//! use singly_linked::LinkedList;
//!
//! let mut list: LinkedList<char> = ['A', 'B', 'C'].into();
//! list.insert_at_index(1, 'X').unwrap();
//! assert_eq!(list.items(), vec!['A', 'X', 'B', 'C']);
//! assert_eq!(list.to_string(), "[('A') -> ('X') -> ('B') -> ('C')]");
//! ```

mod error;
mod iter;
mod list;
mod node;
#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(test)]
mod proptests;

pub use error::{ListError, Result};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::LinkedList;
