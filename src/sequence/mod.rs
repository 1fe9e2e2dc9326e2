//! Image partitioning into ordered block sequences
//!
//! This module contains the partitioning core:
//! - Grid derivation from image dimensions and tile size
//! - Block identity and discovery indices
//! - The three reveal-order strategies

/// Grid derivation and block identity
pub mod grid;
/// Block ordering strategies for the reveal animations
pub mod strategy;

pub use grid::{Block, GridSpec};
pub use strategy::Strategy;
