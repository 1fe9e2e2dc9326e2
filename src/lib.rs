//! Deterministic tile sequence generation for embedded display reveal animations
//!
//! The system partitions source images into ordered streams of fixed-size tiles
//! under three draw strategies, then emits the streams as compilable C artifacts
//! (tile descriptor arrays plus generated include files) for a constrained
//! on-device bitmap runtime.

#![forbid(unsafe_code)]

/// Tile descriptor assembly: geometry, naming, and reveal-order preservation
pub mod descriptor;
/// Input/output operations, phase orchestration, and error handling
pub mod io;
/// Grid partitioning and the three block ordering strategies
pub mod sequence;

pub use io::error::{Result, SequenceError};
