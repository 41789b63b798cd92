//! Singly linked list with external node storage.
//!
//! Nodes are stored in external storage, with the list managing the forward
//! links internally. Each node holds its value and the key of its successor;
//! the list header holds the head key, the tail key, and the length.
//!
//! # Storage Invariant
//!
//! A list instance must always be used with the same storage instance.
//! Read-only operations (`front`, `back`, `get`, `render`, `display`,
//! `is_consistent`) look nodes up with checked access and return `None` or
//! stop early against foreign storage. Mutations trust the chain: passing a
//! different storage to them is undefined behavior. This is the caller's
//! responsibility to enforce (same discipline as the `slab` crate). Use
//! [`SinglyLinkedList`](crate::SinglyLinkedList) when the list should own
//! its storage.
//!
//! # Positions
//!
//! Positional operations are 1-based: position `1` is the head and position
//! `len + 1` is the insertion point just after the tail. Walking to a
//! position is O(n); head and tail access is O(1). Removing the tail is
//! O(n) because there are no backward links.
//!
//! # Example
//!
//! ```
//! use nexus_sll::{List, SlabListStorage};
//!
//! let mut storage: SlabListStorage<&str> = SlabListStorage::with_capacity(16);
//! let mut list: List<&str, SlabListStorage<&str>> = List::new();
//!
//! list.add_first(&mut storage, "1");
//! list.add_last(&mut storage, "2");
//! list.add_at_position(&mut storage, 2, "3").unwrap();
//! assert_eq!(list.render(&storage), "1->3->2");
//!
//! assert_eq!(list.remove_at_position(&mut storage, 2), Ok("3"));
//! assert_eq!(list.remove_first(&mut storage), Ok("1"));
//! assert_eq!(list.remove_last(&mut storage), Ok("2"));
//! assert_eq!(list.render(&storage), "none");
//! ```

use core::fmt;
use core::marker::PhantomData;

use log::{debug, trace};

use crate::{Key, ListError, Storage};

/// Type alias for growable list storage backed by `slab::Slab`.
pub type SlabListStorage<T> = slab::Slab<SllNode<T, usize>>;

/// Token rendered for a list with no elements.
pub const EMPTY_RENDER: &str = "none";

/// Separator rendered between adjacent elements.
pub const RENDER_SEPARATOR: &str = "->";

/// A node in the singly linked list.
///
/// This wraps user data with a forward link. Users interact with `&T`
/// through the list's accessor methods; the node structure is an
/// implementation detail.
#[derive(Debug)]
pub struct SllNode<T, K: Key = usize> {
    pub(crate) data: T,
    pub(crate) next: K,
}

impl<T, K: Key> SllNode<T, K> {
    /// Creates a new unlinked node.
    #[inline]
    fn new(data: T) -> Self {
        Self {
            data,
            next: K::NONE,
        }
    }

    /// Returns a reference to the node's value.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Returns the key of the successor, or `None` for the last node.
    #[inline]
    pub fn next(&self) -> Option<K> {
        self.next.into_option()
    }
}

impl<T: fmt::Display, K: Key> fmt::Display for SllNode<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}

/// A singly linked list over external storage.
///
/// The list tracks head, tail, and length. Nodes live in user-provided
/// storage, wrapped in [`SllNode`].
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Storage type (e.g., [`SlabListStorage<T>`])
/// - `K`: Key type (default `usize`)
#[derive(Debug)]
pub struct List<T, S, K: Key = usize>
where
    S: Storage<SllNode<T, K>, Key = K>,
{
    head: K,
    tail: K,
    len: usize,
    _marker: PhantomData<(T, S)>,
}

impl<T, S, K: Key> Default for List<T, S, K>
where
    S: Storage<SllNode<T, K>, Key = K>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, K: Key> List<T, S, K>
where
    S: Storage<SllNode<T, K>, Key = K>,
{
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: K::NONE,
            tail: K::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head node's key, or `None` if empty.
    #[inline]
    pub fn front_key(&self) -> Option<K> {
        self.head.into_option()
    }

    /// Returns the tail node's key, or `None` if empty.
    #[inline]
    pub fn back_key(&self) -> Option<K> {
        self.tail.into_option()
    }

    // ========================================================================
    // Insert operations (allocate + link)
    // ========================================================================

    /// Inserts a value at the head of the list.
    ///
    /// Returns the key of the inserted node. If the list was empty, the new
    /// node is also the tail.
    #[inline]
    pub fn add_first(&mut self, storage: &mut S, value: T) -> K {
        let key = storage.insert(SllNode::new(value));
        self.link_front(storage, key);
        trace!("add_first: key={key:?} len={}", self.len);
        key
    }

    /// Appends a value after the tail of the list.
    ///
    /// Returns the key of the inserted node. On an empty list this behaves
    /// exactly like [`add_first`](Self::add_first).
    #[inline]
    pub fn add_last(&mut self, storage: &mut S, value: T) -> K {
        if self.tail.is_none() {
            return self.add_first(storage, value);
        }

        let key = storage.insert(SllNode::new(value));
        self.link_after(storage, self.tail, key);
        trace!("add_last: key={key:?} len={}", self.len);
        key
    }

    /// Inserts a value so that it becomes the element at `position`.
    ///
    /// Valid positions are `1..=len + 1`. Position `1` behaves like
    /// [`add_first`](Self::add_first); position `len + 1` appends after the
    /// tail.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidPosition`] for any other position. The
    /// list and storage are unchanged in that case.
    pub fn add_at_position(
        &mut self,
        storage: &mut S,
        position: usize,
        value: T,
    ) -> Result<K, ListError> {
        if position < 1 || position > self.len + 1 {
            debug!("add_at_position rejected: position={position} len={}", self.len);
            return Err(ListError::InvalidPosition {
                position,
                len: self.len,
            });
        }

        if position == 1 {
            return Ok(self.add_first(storage, value));
        }

        let prev = self.key_at(storage, position - 1);
        let key = storage.insert(SllNode::new(value));
        self.link_after(storage, prev, key);
        trace!("add_at_position: position={position} key={key:?} len={}", self.len);
        Ok(key)
    }

    // ========================================================================
    // Remove operations (unlink + deallocate)
    // ========================================================================

    /// Removes and returns the head element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list has no elements.
    #[inline]
    pub fn remove_first(&mut self, storage: &mut S) -> Result<T, ListError> {
        if self.head.is_none() {
            debug!("remove_first rejected: list is empty");
            return Err(ListError::EmptyList);
        }

        // Safety: head is valid when is_some()
        let node = unsafe { storage.remove_unchecked(self.head) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = K::NONE;
        }
        self.len -= 1;

        trace!("remove_first: len={}", self.len);
        Ok(node.data)
    }

    /// Removes and returns the tail element.
    ///
    /// This walks from the head to find the tail's predecessor, so it is
    /// O(n) for lists with more than one element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptyList`] if the list has no elements.
    pub fn remove_last(&mut self, storage: &mut S) -> Result<T, ListError> {
        if self.tail.is_none() {
            debug!("remove_last rejected: list is empty");
            return Err(ListError::EmptyList);
        }

        if self.head == self.tail {
            return self.remove_first(storage);
        }

        let prev = self.key_at(storage, self.len - 1);
        let value = self.unlink_after(storage, prev);
        trace!("remove_last: len={}", self.len);
        Ok(value)
    }

    /// Removes and returns the element at `position`.
    ///
    /// Valid positions are `1..=len`. Position `1` delegates to
    /// [`remove_first`](Self::remove_first) and position `len` to
    /// [`remove_last`](Self::remove_last).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidPosition`] for any other position,
    /// including `len + 1` and every position of an empty list. The list
    /// and storage are unchanged in that case.
    pub fn remove_at_position(&mut self, storage: &mut S, position: usize) -> Result<T, ListError> {
        if position < 1 || position > self.len {
            debug!("remove_at_position rejected: position={position} len={}", self.len);
            return Err(ListError::InvalidPosition {
                position,
                len: self.len,
            });
        }

        if position == 1 {
            return self.remove_first(storage);
        }

        if position == self.len {
            return self.remove_last(storage);
        }

        let prev = self.key_at(storage, position - 1);
        let value = self.unlink_after(storage, prev);
        trace!("remove_at_position: position={position} len={}", self.len);
        Ok(value)
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns a reference to the head element.
    ///
    /// Returns `None` when the list is empty or the head is missing from
    /// `storage`.
    #[inline]
    pub fn front<'a>(&'a self, storage: &'a S) -> Option<&'a T> {
        storage.get(self.head).map(|node| &node.data)
    }

    /// Returns a reference to the tail element.
    ///
    /// Returns `None` when the list is empty or the tail is missing from
    /// `storage`.
    #[inline]
    pub fn back<'a>(&'a self, storage: &'a S) -> Option<&'a T> {
        storage.get(self.tail).map(|node| &node.data)
    }

    /// Returns a reference to the element at `position`.
    ///
    /// Returns `None` unless `1 <= position <= len`, or if the walk reaches
    /// a key missing from `storage`. This is O(position).
    pub fn get<'a>(&'a self, storage: &'a S, position: usize) -> Option<&'a T> {
        if position < 1 || position > self.len {
            return None;
        }

        let mut node = storage.get(self.head)?;
        for _ in 1..position {
            node = storage.get(node.next)?;
        }
        Some(&node.data)
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Returns a [`Display`](fmt::Display) adapter rendering the list
    /// against `storage`.
    #[inline]
    pub fn display<'a>(&'a self, storage: &'a S) -> Render<'a, T, S, K> {
        Render {
            storage,
            head: self.head,
            len: self.len,
            _marker: PhantomData,
        }
    }

    /// Renders the elements head to tail joined by `->`, or `none` when
    /// empty.
    pub fn render(&self, storage: &S) -> String
    where
        T: fmt::Display,
    {
        self.display(storage).to_string()
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Walks the chain and checks the structural invariants.
    ///
    /// Returns `true` when head/tail emptiness agrees with `len`, exactly
    /// `len` nodes are reachable from the head, and the last reachable node
    /// is the tail. The walk is bounded by `len`, so a corrupted chain
    /// cannot loop forever. O(n).
    pub fn is_consistent(&self, storage: &S) -> bool {
        if self.len == 0 {
            return self.head.is_none() && self.tail.is_none();
        }
        if self.head.is_none() || self.tail.is_none() {
            return false;
        }

        let mut key = self.head;
        for _ in 1..self.len {
            match storage.get(key) {
                Some(node) if node.next.is_some() => key = node.next,
                _ => return false,
            }
        }

        key == self.tail && storage.get(key).is_some_and(|node| node.next.is_none())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Returns the key of the node at `position` (1-based).
    ///
    /// Callers guarantee `1 <= position <= len`.
    #[inline]
    fn key_at(&self, storage: &S, position: usize) -> K {
        debug_assert!(position >= 1 && position <= self.len);

        if position == self.len {
            return self.tail;
        }

        let mut key = self.head;
        for _ in 1..position {
            // Safety: position <= len, so every hop lands on a node
            key = unsafe { storage.get_unchecked(key) }.next;
        }
        key
    }

    /// Links a freshly inserted node in front of the head.
    #[inline]
    fn link_front(&mut self, storage: &mut S, key: K) {
        // Safety: key was just inserted
        unsafe { storage.get_unchecked_mut(key) }.next = self.head;

        if self.tail.is_none() {
            self.tail = key;
        }

        self.head = key;
        self.len += 1;
    }

    /// Links a freshly inserted node after `after`.
    #[inline]
    fn link_after(&mut self, storage: &mut S, after: K, key: K) {
        // Safety: after is in the list (caller)
        let next = unsafe { storage.get_unchecked(after) }.next;

        // Safety: key was just inserted
        unsafe { storage.get_unchecked_mut(key) }.next = next;
        unsafe { storage.get_unchecked_mut(after) }.next = key;

        if next.is_none() {
            self.tail = key;
        }

        self.len += 1;
    }

    /// Unlinks and deallocates the successor of `prev`, returning its value.
    #[inline]
    fn unlink_after(&mut self, storage: &mut S, prev: K) -> T {
        // Safety: prev is in the list and is not the tail (caller)
        let key = unsafe { storage.get_unchecked(prev) }.next;
        let node = unsafe { storage.remove_unchecked(key) };
        unsafe { storage.get_unchecked_mut(prev) }.next = node.next;

        if node.next.is_none() {
            self.tail = prev;
        }

        self.len -= 1;
        node.data
    }
}

// =============================================================================
// Render
// =============================================================================

/// Displays a list's elements head to tail.
///
/// Created by [`List::display`]. `Display` joins the elements with `->`
/// (`none` when empty); `Debug` formats them as a list. Both walk the chain
/// once, and stop early at a key missing from the storage they were given.
pub struct Render<'a, T, S, K: Key = usize> {
    storage: &'a S,
    head: K,
    len: usize,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, S, K> Render<'a, T, S, K>
where
    S: Storage<SllNode<T, K>, Key = K>,
    K: Key + 'a,
{
    /// Calls `f` with each value head to tail, at most `len` times.
    fn walk<F>(&self, mut f: F) -> fmt::Result
    where
        F: FnMut(usize, &'a T) -> fmt::Result,
    {
        let mut key = self.head;
        for i in 0..self.len {
            let Some(node) = self.storage.get(key) else {
                break;
            };
            f(i, &node.data)?;
            key = node.next;
        }
        Ok(())
    }
}

impl<T, S, K> fmt::Display for Render<'_, T, S, K>
where
    T: fmt::Display,
    S: Storage<SllNode<T, K>, Key = K>,
    K: Key,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.head.is_none() {
            return f.write_str(EMPTY_RENDER);
        }

        self.walk(|i, value| {
            if i > 0 {
                f.write_str(RENDER_SEPARATOR)?;
            }
            fmt::Display::fmt(value, f)
        })
    }
}

impl<T, S, K> fmt::Debug for Render<'_, T, S, K>
where
    T: fmt::Debug,
    S: Storage<SllNode<T, K>, Key = K>,
    K: Key,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.walk(|_, value| {
            list.entry(value);
            Ok(())
        })?;
        list.finish()
    }
}
