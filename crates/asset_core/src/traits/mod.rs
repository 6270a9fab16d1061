//! Traits at the seams between the foundation and model layers.
//!
//! - [`MonetaryRounding`]: Rounds computed amounts to a currency precision

pub mod rounding;

pub use rounding::MonetaryRounding;
