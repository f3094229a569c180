//! Navigable ordered collections for Rust.
//!
//! This crate provides three containers whose ordering is chosen once, at
//! construction, through a [`Comparator`]:
//!
//! - [`NavMap`] - an ordered map with nearest-key queries (`floor`, `ceiling`,
//!   `lower`, `higher`) and lazy range views (`head_view`, `tail_view`,
//!   `range_view`, `range`)
//! - [`NavSet`] - the same navigation over a set of elements
//! - [`PriorityQueue`] - a binary heap that hands out the element that sorts first
//!
//! # Example
//!
//! ```
//! use navigable::{NavMap, NavSet, PriorityQueue, compare::Reverse};
//!
//! let mut stock = NavMap::new();
//! stock.insert("laptop", 15);
//! stock.insert("mouse", 50);
//! stock.insert("keyboard", 30);
//! assert_eq!(stock.first(), Ok((&"keyboard", &30)));
//! assert_eq!(stock.ceiling(&"l"), Some(&"laptop"));
//!
//! let ids: NavSet<u32> = [50, 20, 80, 10, 30].into_iter().collect();
//! assert_eq!(ids.lower(&30), Some(&20));
//! assert_eq!(ids.range_view(&20, &80)?.copied().collect::<Vec<_>>(), [20, 30, 50]);
//!
//! let mut largest_first = PriorityQueue::with_comparator(Reverse::natural());
//! largest_first.extend([10, 40, 20]);
//! assert_eq!(largest_first.extract_top(), Ok(40));
//! # Ok::<(), navigable::Error>(())
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Pluggable ordering** - [`Natural`], [`Reverse`], [`compare::by_key`] and
//!   [`compare::from_fn`], or any type implementing [`Comparator`]
//! - **Borrowed lookups** - `String` keys can be queried with `&str`, as in the
//!   standard collections
//! - **Snapshot views** - every view borrows its container, so the container
//!   cannot change while the view is alive
//!
//! # Implementation
//!
//! `NavMap` and `NavSet` are B+trees (all entries in leaves, doubly linked leaf
//! chain) whose nodes and values live in handle-indexed arenas. Lookups and
//! updates are O(log n); `first` and `last` are O(1). `PriorityQueue` is an
//! implicit binary heap in a `Vec`.
//!
//! # Logging
//!
//! Structural changes (node splits and merges, root changes, heap rebuilds) are
//! reported as `trace` events through [`tracing`]. Operations that return an
//! [`Error`] emit a `debug` event first. The crate never installs a subscriber.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

pub mod compare;
pub mod nav_map;
pub mod nav_set;
pub mod priority_queue;

pub use compare::{Comparator, Natural, Reverse};
pub use error::{Error, Result};
pub use nav_map::{Direction, NavMap};
pub use nav_set::NavSet;
pub use priority_queue::PriorityQueue;
