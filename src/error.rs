use thiserror::Error;

/// Errors reported by [`LinkedList`](crate::LinkedList) operations.
///
/// A failed operation never mutates the list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("list index out of range: {index} (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("item not found")]
    ItemNotFound,
}

pub type Result<T, E = ListError> = std::result::Result<T, E>;
