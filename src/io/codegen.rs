//! Generated C artifact rendering from phase outputs
//!
//! Renders the descriptor arrays and include lists into the two compilable
//! files consumed by the on-device bitmap runtime. Templates are constant
//! strings with named `{marker}` placeholders; substitution is plain text
//! replacement, so the C braces need no escaping.

use crate::descriptor::builder::TileDescriptor;
use crate::io::configuration::{
    GENERATED_HEADER_FILE, GENERATED_SOURCE_FILE, MAX_DISPLAY_COORDINATE, MAX_PHASE_TILES,
};
use crate::io::error::{Result, SequenceError, invalid_parameter};
use std::path::Path;

const SOURCE_TEMPLATE: &str = r#"/*
 * This file was automatically generated by tilereveal.
 */

#include "reveal_animation_sequences.h"

{includes}

{lengths}

{sequences}
"#;

const HEADER_TEMPLATE: &str = r"/*
 * This file was automatically generated by tilereveal.
 */

#ifndef reveal_animation_sequences_h
#define reveal_animation_sequences_h
#include <bitmap.h>

struct reveal_sequence_frame {
    const struct bitmap_ext * bitmap;
    uint8_t x;
    uint8_t y;
};

{declarations}

{lengths}

#endif
";

/// Serialized output of one phase, ready for template substitution
#[derive(Debug, Clone)]
pub struct PhaseArtifact {
    /// Phase identifier used in generated symbol and length names
    pub name: &'static str,
    /// Include paths of the phase's tile bitmap headers, in reveal order
    pub includes: Vec<String>,
    /// `(symbol, x, y)` frame triples in reveal order
    pub frames: Vec<(String, u32, u32)>,
}

impl PhaseArtifact {
    /// Collect a phase's tile descriptors for serialization
    ///
    /// Preserves the descriptor order exactly; the generated arrays define
    /// the runtime draw order.
    ///
    /// # Errors
    ///
    /// Returns an error if a display coordinate does not fit the generated
    /// uint8_t frame fields
    pub fn from_descriptors(
        name: &'static str,
        descriptors: &[TileDescriptor],
    ) -> Result<Self> {
        let mut includes = Vec::with_capacity(descriptors.len());
        let mut frames = Vec::with_capacity(descriptors.len());

        for descriptor in descriptors {
            let (x, y) = descriptor.display;
            if x > MAX_DISPLAY_COORDINATE || y > MAX_DISPLAY_COORDINATE {
                return Err(invalid_parameter(
                    "display position",
                    &format!("({x}, {y})"),
                    &format!("generated frames store coordinates as uint8_t (max {MAX_DISPLAY_COORDINATE})"),
                ));
            }

            includes.push(descriptor.name.include_path.clone());
            frames.push((descriptor.name.symbol.clone(), x, y));
        }

        Ok(Self {
            name,
            includes,
            frames,
        })
    }

    /// Tile count, verified against the generated uint8_t length domain
    ///
    /// # Errors
    ///
    /// Returns an error if the phase produced more tiles than the generated
    /// length declaration can represent
    pub fn checked_len(&self) -> Result<usize> {
        if self.frames.len() > MAX_PHASE_TILES {
            return Err(SequenceError::PhaseOverflow {
                phase: self.name,
                count: self.frames.len(),
                limit: MAX_PHASE_TILES,
            });
        }

        Ok(self.frames.len())
    }
}

fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut output = template.to_string();
    for (marker, value) in substitutions {
        output = output.replace(&format!("{{{marker}}}"), value);
    }
    output
}

fn render_sequence(artifact: &PhaseArtifact) -> String {
    let entries = artifact
        .frames
        .iter()
        .enumerate()
        .map(|(index, (symbol, x, y))| {
            let separator = if index + 1 < artifact.frames.len() {
                ","
            } else {
                ""
            };
            format!("\t{{&{symbol}, {x}, {y}}}{separator}")
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "const struct reveal_sequence_frame reveal_sequence_{}[] = {{\n{entries}\n}};",
        artifact.name
    )
}

/// Render the generated C source defining the sequence arrays
///
/// Include lines, length definitions, and descriptor arrays appear in phase
/// order; within each array, entries appear in reveal order.
///
/// # Errors
///
/// Returns an error if a phase exceeds the generated uint8_t tile limit
pub fn render_source(artifacts: &[PhaseArtifact]) -> Result<String> {
    let includes = artifacts
        .iter()
        .flat_map(|artifact| artifact.includes.iter())
        .map(|include| format!("#include \"{include}\""))
        .collect::<Vec<_>>()
        .join("\n");

    let lengths = artifacts
        .iter()
        .map(|artifact| {
            Ok(format!(
                "const uint8_t reveal_sequence_{}_length = {};",
                artifact.name,
                artifact.checked_len()?
            ))
        })
        .collect::<Result<Vec<_>>>()?
        .join("\n");

    let sequences = artifacts
        .iter()
        .map(render_sequence)
        .collect::<Vec<_>>()
        .join("\n\n");

    Ok(render(
        SOURCE_TEMPLATE,
        &[
            ("includes", includes.as_str()),
            ("lengths", lengths.as_str()),
            ("sequences", sequences.as_str()),
        ],
    ))
}

/// Render the generated C header declaring the fixed-size sequence arrays
///
/// Array declarations are sized exactly to each phase's tile count.
///
/// # Errors
///
/// Returns an error if a phase exceeds the generated uint8_t tile limit
pub fn render_header(artifacts: &[PhaseArtifact]) -> Result<String> {
    let declarations = artifacts
        .iter()
        .map(|artifact| {
            Ok(format!(
                "const struct reveal_sequence_frame reveal_sequence_{}[{}];",
                artifact.name,
                artifact.checked_len()?
            ))
        })
        .collect::<Result<Vec<_>>>()?
        .join("\n");

    let lengths = artifacts
        .iter()
        .map(|artifact| format!("const uint8_t reveal_sequence_{}_length;", artifact.name))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(render(
        HEADER_TEMPLATE,
        &[
            ("declarations", declarations.as_str()),
            ("lengths", lengths.as_str()),
        ],
    ))
}

/// Render both artifacts and write them beneath the generated output root
///
/// # Errors
///
/// Returns an error if rendering fails or either file cannot be written
pub fn write_generated_files(artifacts: &[PhaseArtifact], directory: &Path) -> Result<()> {
    let source = render_source(artifacts)?;
    let header = render_header(artifacts)?;

    std::fs::create_dir_all(directory).map_err(|e| SequenceError::FileSystem {
        path: directory.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    write_file(directory.join(GENERATED_SOURCE_FILE), &source)?;
    write_file(directory.join(GENERATED_HEADER_FILE), &header)
}

fn write_file(path: std::path::PathBuf, contents: &str) -> Result<()> {
    std::fs::write(&path, contents).map_err(|e| SequenceError::FileSystem {
        path,
        operation: "write file",
        source: e,
    })
}
