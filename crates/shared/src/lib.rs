//! Shared primitives for the tally commons toolkit.
//!
//! This crate provides the pieces every other crate leans on:
//! - Decimal rounding helpers with explicit strategies
//! - The toolkit-wide error type
//!
//! All money arithmetic across the workspace uses `rust_decimal::Decimal`;
//! floating point is denied by workspace lints.

pub mod error;
pub mod rounding;

pub use error::{CommonsError, CommonsResult};
