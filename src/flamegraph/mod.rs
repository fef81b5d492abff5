//! Flamegraph output for stack samples.
//!
//! Stacks are encoded into a frame-indexed JSON document for an external
//! viewer, and can optionally be rendered as an SVG with inferno.

pub mod encoder;
pub mod schema;
pub mod svg;

// Re-export main types
pub use encoder::{
    collapsed_lines, decode_raw, encode_stacks, tally_stacks, validate_document, DecodedStack,
    DocumentStats, StackTally,
};
pub use schema::{FlamegraphDocument, Frame};
pub use svg::{generate_svg, FlamegraphConfig};
