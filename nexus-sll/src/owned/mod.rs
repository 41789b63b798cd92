//! Convenience wrapper that owns its storage.
//!
//! [`SinglyLinkedList`] combines a [`List`](crate::List) with its backing
//! slab, providing a simpler API for the common case where the list is the
//! only user of the storage.
//!
//! # When to use the owned variant
//!
//! Use [`SinglyLinkedList`] when:
//! - You want a simpler API without passing `&mut storage` to every method
//! - You want `Display` rendering and `Drop` cleanup handled for you
//!
//! # When to use the raw variant
//!
//! Use [`List`](crate::List) with external storage when:
//! - Several lists share one storage pool
//! - You need node keys to address elements directly
//!
//! # Example
//!
//! ```
//! use nexus_sll::SinglyLinkedList;
//!
//! let mut list: SinglyLinkedList<u64> = SinglyLinkedList::with_capacity(100);
//! list.add_last(1);
//! list.add_last(2);
//! assert_eq!(list.remove_first(), Ok(1));
//! ```

mod list;

pub use list::SinglyLinkedList;
