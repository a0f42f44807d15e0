//! # Chunked Deque
//!
//! A double-ended queue built from two independently growable tables of fixed-size
//! element chunks, instead of one ring buffer or a chain of linked nodes.
//!
//! ## Key Features
//!
//! * **Amortized O(1) at both ends:** pushes append to the last chunk of one side; pops
//!   truncate it.
//! * **O(1) random access:** a logical index maps arithmetically to a side, a chunk and a
//!   slot; nothing is scanned.
//! * **Cheap growth:** doubling a table moves chunk *handles*, never elements.
//! * **Bounded rebalancing:** a pop that would starve one side either moves whole chunks
//!   across the centre or, for short deques, redistributes the elements evenly.
//! * **Interoperability:** [`ChunkedDeque`] and `VecDeque` both implement the
//!   [`AnyDeque`] trait (feature `any-deque`, on by default).
//!
//! ## Layout
//!
//! Every chunk holds [`CHUNK_SIZE`] slots.  The front half of the sequence lives in the
//! left table in reverse order, the back half in the right table in order:
//!
//! ```text
//!   left table (reversed)          right table (forward)
//!   [ 4 3 2 1 0 ] ← centre →  [ 5 6 7 8 9 ]
//!    front                                 back
//! ```
//!
//! ## Errors
//!
//! `front`, `back`, `pop_front` and `pop_back` on an empty deque return
//! [`DequeError::EmptyContainer`].  Out-of-range indexing panics; use
//! [`get`](ChunkedDeque::get) for a checked lookup.
//!
//! ## Example
//!
//! ```rust
//! use chunked_deque::{ChunkedDeque, DequeError};
//!
//! let mut d = ChunkedDeque::new();
//! d.push_back(1);
//! d.push_front(2);
//! d.push_back(3);
//!
//! assert_eq!(d.pop_front(), Ok(2));
//! assert_eq!(d[0], 1);
//! assert_eq!(d.back(), Ok(&3));
//!
//! d.clear();
//! assert_eq!(d.pop_back(), Err(DequeError::EmptyContainer));
//! ```
//!
//! ## Logging
//!
//! Table growth and rebalancing emit `tracing` events (`trace` and `debug` level).  The
//! crate never installs a subscriber.

// --- Module Declarations ---

pub mod deques;
pub mod error;

// --- Re-exports ---

#[cfg(feature = "any-deque")]
pub use deques::any_deque::AnyDeque;
pub use deques::chunked_deque::ChunkedDeque;
pub use deques::iter::{IntoIter, Iter};
pub use deques::{CHUNK_SIZE, DEFAULT_CAPACITY, TWO_CHUNKS};
pub use error::DequeError;
