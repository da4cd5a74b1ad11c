//! Presentation layer: consumes model output, never feeds back into it.

pub mod chart;
pub mod table;
