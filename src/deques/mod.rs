mod chunk;
mod growth;
mod rebalance;
mod table;

#[cfg(feature = "any-deque")]
pub mod any_deque;
pub mod chunked_deque;
pub mod iter;

pub use chunk::{CHUNK_SIZE, DEFAULT_CAPACITY, TWO_CHUNKS};
