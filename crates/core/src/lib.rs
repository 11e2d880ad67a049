//! Decimal commons toolkit.
//!
//! This crate contains small, independent utility modules with ZERO web or
//! database dependencies. All money arithmetic uses `rust_decimal::Decimal`.
//!
//! # Modules
//!
//! - `math` - Pro-rata distribution of amounts and percentage calculation
//! - `stream` - Associative decimal accumulators for (parallel) reductions
//! - `text` - Normalization, hour formatting, and joining helpers
//! - `color` - Hex color helpers

pub mod color;
pub mod math;
pub mod stream;
pub mod text;
