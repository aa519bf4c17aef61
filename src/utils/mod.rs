//! Utility modules shared by the reader, models and report generator.

pub mod arrow;
pub mod logging;
