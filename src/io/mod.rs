//! Input/output operations and phase orchestration
//!
//! This module contains the ambient plumbing around the partitioning core:
//! - CLI parsing and the phase processing loop
//! - Image loading, cropping, and tile export
//! - Generated C artifact rendering
//! - Error types and progress display

/// Command-line interface and phase orchestration
pub mod cli;
/// Generated C artifact rendering from phase outputs
pub mod codegen;
/// Phase constants and runtime configuration defaults
pub mod configuration;
/// Error types for sequence generation operations
pub mod error;
/// Image loading and tile cropping
pub mod image;
/// The standard five-phase animation plan
pub mod phases;
/// Phase progress display
pub mod progress;
