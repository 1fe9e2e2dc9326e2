//! Geometry rules and tile descriptor construction
//!
//! The builder consumes blocks in partitioner order and emits one descriptor
//! per block, preserving length and order exactly. Geometry is selected by a
//! layout rule so grid-based and strip-based phases share one code path.

use crate::descriptor::naming::{GeneratedName, NameTemplate};
use crate::sequence::grid::Block;

/// Pixel-space geometry rule mapping blocks to crop boxes and display positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Square tiles addressed by grid cell, shifted by a fixed display origin
    Grid {
        /// Square tile edge length in pixels
        tile_size: u32,
        /// Display-space origin offset applied to every tile
        origin: (u32, u32),
    },
    /// Single-column vertical strips spanning the full image height
    Strip {
        /// Strip width in pixels
        width: u32,
        /// Source image height in pixels
        height: u32,
    },
}

impl Layout {
    /// Crop box for one block under this layout
    pub const fn crop_box(&self, block: &Block) -> CropBox {
        match *self {
            Self::Grid { tile_size, .. } => CropBox {
                x: block.column * tile_size,
                y: block.row * tile_size,
                width: tile_size,
                height: tile_size,
            },
            Self::Strip { width, height } => CropBox {
                x: block.column * width,
                y: 0,
                width,
                height,
            },
        }
    }

    /// Display position for one block under this layout
    pub const fn display_position(&self, block: &Block) -> (u32, u32) {
        match *self {
            Self::Grid { tile_size, origin } => (
                block.column * tile_size + origin.0,
                block.row * tile_size + origin.1,
            ),
            Self::Strip { width, .. } => (block.column * width, 0),
        }
    }
}

/// Rectangular crop region in source image pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Region width
    pub width: u32,
    /// Region height
    pub height: u32,
}

/// One tile ready for cropping and serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileDescriptor {
    /// Generated artifact names shared by image, include, and symbol
    pub name: GeneratedName,
    /// Display position in destination coordinates
    pub display: (u32, u32),
    /// Source region to crop for this tile
    pub crop: CropBox,
}

/// Assemble tile descriptors in the exact order of the block sequence
///
/// The returned list has the same length and order as `blocks`; each
/// descriptor's name is a pure function of its block's `sequence_index`.
pub fn build_descriptors(
    blocks: &[Block],
    layout: &Layout,
    template: &NameTemplate,
) -> Vec<TileDescriptor> {
    blocks
        .iter()
        .map(|block| TileDescriptor {
            name: template.derive(block.sequence_index),
            display: layout.display_position(block),
            crop: layout.crop_box(block),
        })
        .collect()
}
