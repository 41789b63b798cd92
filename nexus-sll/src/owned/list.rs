//! SinglyLinkedList - a singly linked list that owns its storage.

use core::fmt;

use crate::list::{List, SlabListStorage};
use crate::ListError;

/// A singly linked list that owns its storage.
///
/// This is a convenience wrapper around [`List`] + [`SlabListStorage`] for
/// cases where the list doesn't need to share storage with anything else.
/// Storage grows as needed; there is no capacity limit.
///
/// Rendering goes through [`Display`](fmt::Display): elements head to tail
/// joined by `->`, or `none` for an empty list.
///
/// # Example
///
/// ```
/// use nexus_sll::{ListError, SinglyLinkedList};
///
/// let mut list: SinglyLinkedList<&str> = SinglyLinkedList::new();
/// assert_eq!(list.to_string(), "none");
///
/// list.add_first("1");
/// list.add_last("2");
/// list.add_at_position(2, "3")?;
/// assert_eq!(list.to_string(), "1->3->2");
///
/// assert_eq!(list.remove_at_position(2)?, "3");
/// assert_eq!(list.remove_first()?, "1");
/// assert_eq!(list.remove_last()?, "2");
/// assert_eq!(list.remove_last(), Err(ListError::EmptyList));
/// # Ok::<(), ListError>(())
/// ```
pub struct SinglyLinkedList<T> {
    storage: SlabListStorage<T>,
    list: List<T, SlabListStorage<T>>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            storage: SlabListStorage::new(),
            list: List::new(),
        }
    }

    /// Creates an empty list with room for `capacity` elements before the
    /// storage reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: SlabListStorage::with_capacity(capacity),
            list: List::new(),
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the number of elements the storage can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Inserts a value at the head of the list.
    #[inline]
    pub fn add_first(&mut self, value: T) {
        self.list.add_first(&mut self.storage, value);
    }

    /// Appends a value after the tail of the list.
    #[inline]
    pub fn add_last(&mut self, value: T) {
        self.list.add_last(&mut self.storage, value);
    }

    /// Inserts a value so that it becomes the element at `position`
    /// (1-based, valid range `1..=len + 1`).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidPosition`] outside the valid range.
    #[inline]
    pub fn add_at_position(&mut self, position: usize, value: T) -> Result<(), ListError> {
        self.list.add_at_position(&mut self.storage, position, value)?;
        Ok(())
    }

    /// Removes and returns the head element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list has no elements.
    #[inline]
    pub fn remove_first(&mut self) -> Result<T, ListError> {
        self.list.remove_first(&mut self.storage)
    }

    /// Removes and returns the tail element. O(n).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list has no elements.
    #[inline]
    pub fn remove_last(&mut self) -> Result<T, ListError> {
        self.list.remove_last(&mut self.storage)
    }

    /// Removes and returns the element at `position` (1-based, valid range
    /// `1..=len`).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidPosition`] outside the valid range.
    #[inline]
    pub fn remove_at_position(&mut self, position: usize) -> Result<T, ListError> {
        self.list.remove_at_position(&mut self.storage, position)
    }

    /// Returns a reference to the head element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.list.front(&self.storage)
    }

    /// Returns a reference to the tail element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.list.back(&self.storage)
    }

    /// Returns a reference to the element at `position` (1-based). O(n).
    #[inline]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.list.get(&self.storage, position)
    }

    /// Checks the structural invariants of the underlying chain.
    ///
    /// See [`List::is_consistent`].
    pub fn is_consistent(&self) -> bool {
        self.list.is_consistent(&self.storage) && self.storage.len() == self.list.len()
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list.display(&self.storage), f)
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.list.display(&self.storage), f)
    }
}
