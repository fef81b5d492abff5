use crate::flamegraph::{validate_document, DocumentStats};
use crate::output::read_document;
use crate::utils::config::{DOCUMENT_MODE, DOCUMENT_VERSION};
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a written flamegraph document
pub fn validate_profile_file(file_path: &Path) -> Result<DocumentStats> {
    println!("Validating document: {}", file_path.display());

    let document = read_document(file_path)?;
    let stats = validate_document(&document)
        .with_context(|| format!("Invalid document {}", file_path.display()))?;

    println!("✓ Valid flamegraph document");
    println!("  Version: {}", document.version);
    println!("  Mode: {}", document.mode);
    println!("  Frames: {}", stats.frames);
    println!("  Distinct stacks: {}", stats.distinct_stacks);
    println!("  Samples: {}", stats.samples);

    Ok(stats)
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Factory Prof Flamegraph Document");
    println!("Current Version: {} (mode: {})", DOCUMENT_VERSION, DOCUMENT_MODE);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: number                - Document version (1.2)");
        println!("  mode: string                   - Sampling mode ('wall')");
        println!("  frames: object                 - Frame id -> {{ name }}");
        println!("  raw: array                     - [len, id_0, ..., id_n-1, repeat] segments");
        println!("  raw_sample_timestamps: array   - One placeholder per sample");
        println!("  raw_timestamp_deltas: array    - One placeholder delta per sample");
        println!();
        println!("Snapshot Input:");
        println!("  started_at: string             - RFC 3339 run start");
        println!("  finished_at: string?           - RFC 3339 run end (defaults to now)");
        println!("  stats: array                   - {{ name, total_count, top_level_count, total_time, top_level_time }}");
        println!("  stacks: array                  - {{ stack: [factory names], location: 'file:line' }}");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Factory Prof v{}", env!("CARGO_PKG_VERSION"));
    println!("Document Version: {}", DOCUMENT_VERSION);
    println!();
    println!("Summaries, location hotspots and flamegraphs for test-factory overhead.");
}
