//! Contains command line interface extensions.

pub mod solve;
pub mod tsplib;
