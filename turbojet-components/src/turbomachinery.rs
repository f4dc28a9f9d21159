//! Turbomachinery component models.
//!
//! The compressor and turbine share one shaft with no mechanical losses, so
//! the turbine model is driven by the temperature rise the compressor
//! actually produced.
//!
//! Work is reported as a non-negative work type (e.g., [`CompressionWork`]),
//! with direction encoded in the type rather than a sign convention.

pub mod compressor;
pub mod turbine;
mod work;

pub use work::{CompressionWork, ExpansionWork};
