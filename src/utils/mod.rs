//! Utility functions shared across layers.
//!
//! - [`rut`] - Chilean RUT check digit, formatting and parsing

pub mod rut;
