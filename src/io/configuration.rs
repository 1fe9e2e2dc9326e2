//! Phase constants and runtime configuration defaults

// Partitioning parameters for the three strategies
/// Tile edge length for the label reveal in pixels
pub const LABEL_TILE_SIZE: u32 = 8;
/// Tile edge length for the inter-transition reveals in pixels
pub const INTER_TILE_SIZE: u32 = 10;
/// Strip width for the horizontal pan in pixels
pub const PAN_STRIP_WIDTH: u32 = 8;

/// Display origin offset applied to every label tile
pub const LABEL_ORIGIN: (u32, u32) = (50, 42);

// Rows processed before the windowed reshuffle starts freezing blocks
/// Trailing window bound for the windowed-shuffle strategy
pub const SHUFFLE_WINDOW: usize = 32;

// Naming settings
/// Zero-pad width of the sequence index in generated names
pub const NAME_WIDTH: usize = 3;
/// Include path prefix of generated bitmap headers as seen by the firmware
pub const INCLUDE_PREFIX: &str = "images/external/reveal";

// Output settings
/// Directory beneath the assets root receiving cropped tile images
pub const TILES_SUBDIR: &str = "tiles";
/// Directory beneath the assets root receiving generated declaration files
pub const GENERATED_SUBDIR: &str = "generated";
/// Basename of the generated C source file
pub const GENERATED_SOURCE_FILE: &str = "reveal_animation_sequences.c";
/// Basename of the generated C header file
pub const GENERATED_HEADER_FILE: &str = "reveal_animation_sequences.h";

// Generated declarations store lengths and coordinates as uint8_t
/// Maximum tiles one phase may produce
pub const MAX_PHASE_TILES: usize = 255;
/// Maximum display coordinate a generated frame may carry
pub const MAX_DISPLAY_COORDINATE: u32 = 255;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 1001;
