//! Tile descriptor assembly from ordered block sequences
//!
//! Turns a partitioner's blocks into tiles: pixel-space crop boxes, display
//! positions, and the generated names shared by each tile's saved image,
//! include file, and symbol.

/// Geometry rules and descriptor construction
pub mod builder;
/// Stable name derivation from sequence indices
pub mod naming;

pub use builder::{CropBox, Layout, TileDescriptor, build_descriptors};
pub use naming::{GeneratedName, NameTemplate};
