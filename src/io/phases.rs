//! The standard five-phase animation plan
//!
//! Phase order is part of the reproducibility contract: the shared random
//! source is consumed in exactly this order, so one seed determines every
//! phase's reveal order. The pan phase deliberately re-reads the last
//! inter-transition image.

use crate::descriptor::builder::Layout;
use crate::descriptor::naming::NameTemplate;
use crate::io::configuration::{
    INTER_TILE_SIZE, LABEL_ORIGIN, LABEL_TILE_SIZE, NAME_WIDTH, PAN_STRIP_WIDTH,
};
use crate::sequence::grid::GridSpec;
use crate::sequence::strategy::Strategy;

/// One animation phase: a source image paired with a partitioning recipe
#[derive(Debug, Clone, Copy)]
pub struct PhaseSpec {
    /// Phase identifier used in generated symbol and length names
    pub name: &'static str,
    /// Source image filename beneath the assets directory
    pub source: &'static str,
    /// Block ordering strategy
    pub strategy: Strategy,
    /// Tile edge length in pixels (strip width for the pan strategy)
    pub tile_size: u32,
    /// Display origin offset for grid layouts
    pub origin: (u32, u32),
    /// Naming template for the phase's tiles
    pub template: NameTemplate,
}

impl PhaseSpec {
    /// Grid derivation for this phase given the source image dimensions
    pub const fn grid(&self, width: u32, height: u32) -> GridSpec {
        GridSpec::new(width, height, self.tile_size)
    }

    /// Geometry rule for this phase given the source image height
    pub const fn layout(&self, image_height: u32) -> Layout {
        match self.strategy {
            Strategy::SequentialPan => Layout::Strip {
                width: self.tile_size,
                height: image_height,
            },
            Strategy::FullShuffle | Strategy::WindowedShuffle => Layout::Grid {
                tile_size: self.tile_size,
                origin: self.origin,
            },
        }
    }
}

/// The five phases in their fixed processing order
pub const fn standard_phases() -> [PhaseSpec; 5] {
    [
        PhaseSpec {
            name: "label",
            source: "label_front.png",
            strategy: Strategy::FullShuffle,
            tile_size: LABEL_TILE_SIZE,
            origin: LABEL_ORIGIN,
            template: NameTemplate::new("reveal_1_label", NAME_WIDTH),
        },
        PhaseSpec {
            name: "inter_1",
            source: "inter_1.png",
            strategy: Strategy::WindowedShuffle,
            tile_size: INTER_TILE_SIZE,
            origin: (0, 0),
            template: NameTemplate::new("reveal_2_1", NAME_WIDTH),
        },
        PhaseSpec {
            name: "inter_2",
            source: "inter_2.png",
            strategy: Strategy::WindowedShuffle,
            tile_size: INTER_TILE_SIZE,
            origin: (0, 0),
            template: NameTemplate::new("reveal_2_2", NAME_WIDTH),
        },
        PhaseSpec {
            name: "inter_3",
            source: "inter_3.png",
            strategy: Strategy::WindowedShuffle,
            tile_size: INTER_TILE_SIZE,
            origin: (0, 0),
            template: NameTemplate::new("reveal_2_3", NAME_WIDTH),
        },
        PhaseSpec {
            name: "pan",
            source: "inter_3.png",
            strategy: Strategy::SequentialPan,
            tile_size: PAN_STRIP_WIDTH,
            origin: (0, 0),
            template: NameTemplate::new("reveal_3", NAME_WIDTH),
        },
    ]
}
