//! Contains the stochastic procedure which constructs agent routes.

mod route_builder;
pub use self::route_builder::*;
