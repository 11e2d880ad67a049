//! Pro-rata distribution of decimal amounts.

pub mod distribution;
pub mod percentage;
pub mod share;

#[cfg(test)]
mod props;

pub use distribution::{distribute, Allocation, Distributor, RemainderMode};
pub use percentage::calculate_percentage;
pub use share::Share;
