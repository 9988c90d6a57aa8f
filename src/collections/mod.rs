//! Bounded containers
//!
//! Capacities are fixed when a container is built. Overflow is a rejected
//! push (`false`), never a reallocation or a panic.

mod bitset;
mod queue;
mod stack;

pub use bitset::BitSet;
pub use queue::BoundedQueue;
pub use stack::BoundedStack;
