//! Contains the colony engine which runs iterations and its configuration.

mod config;
pub use self::config::*;

mod engine;
pub use self::engine::*;

pub mod telemetry;
pub use self::telemetry::*;

mod termination;
pub use self::termination::*;

mod writer;
pub use self::writer::ScoreWriter;
