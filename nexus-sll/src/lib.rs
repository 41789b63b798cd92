//! Singly linked list with slab-backed node storage.
//!
//! This crate provides an ordered container with insertion and removal at
//! the head, the tail, and any 1-based position. Head and tail access is
//! O(1); positional access and tail removal are O(n).
//!
//! # Design
//!
//! Nodes are not individually boxed. They live in a slab and link to their
//! successor by key:
//!
//! ```text
//! Storage (Slab)  - owns node values, provides stable keys
//! List            - owns the chain: head key, tail key, length
//! ```
//!
//! Each node is reachable from exactly one predecessor (or from the list
//! header, for the head), so the chain has a single owner and can never
//! form a cycle.
//!
//! # Quick Start
//!
//! ```
//! use nexus_sll::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//! assert_eq!(list.to_string(), "none");
//!
//! list.add_first("1");
//! list.add_last("2");
//! list.add_at_position(2, "3").unwrap();
//! assert_eq!(list.to_string(), "1->3->2");
//!
//! assert_eq!(list.remove_at_position(2), Ok("3"));
//! assert_eq!(list.to_string(), "1->2");
//! ```
//!
//! # External Storage
//!
//! [`List`] takes its storage as an argument so several lists can share one
//! slab. All operations on a list must use the same storage instance.
//!
//! ```
//! use nexus_sll::{List, SlabListStorage};
//!
//! let mut storage: SlabListStorage<u64> = SlabListStorage::with_capacity(64);
//! let mut evens: List<u64, SlabListStorage<u64>> = List::new();
//! let mut odds: List<u64, SlabListStorage<u64>> = List::new();
//!
//! for i in 0..6 {
//!     if i % 2 == 0 {
//!         evens.add_last(&mut storage, i);
//!     } else {
//!         odds.add_last(&mut storage, i);
//!     }
//! }
//!
//! assert_eq!(evens.render(&storage), "0->2->4");
//! assert_eq!(odds.render(&storage), "1->3->5");
//! ```
//!
//! # Errors
//!
//! Fallible operations return [`ListError`]. A failed operation never
//! mutates the list.
//!
//! # Logging
//!
//! Mutations are traced through the [`log`](https://docs.rs/log) facade at
//! `trace` level; rejected operations log at `debug`. No logger is
//! installed by this crate.

#![warn(missing_docs)]

pub mod error;
pub mod key;
pub mod list;
pub mod owned;
pub mod storage;
pub mod value;

pub use error::ListError;
pub use key::Key;
pub use list::{List, Render, SlabListStorage, SllNode};
pub use owned::SinglyLinkedList;
pub use storage::Storage;
pub use value::Value;
