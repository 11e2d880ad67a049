//! Associative decimal accumulators for sequential and parallel reductions.

pub mod iter;
pub mod summary;

pub use iter::DecimalIteratorExt;
pub use summary::DecimalSummary;
