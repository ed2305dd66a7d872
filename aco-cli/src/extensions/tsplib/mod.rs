//! Contains a reader of symmetric TSP problems in TSPLIB format.

mod reader;
pub use self::reader::TsplibProblem;
