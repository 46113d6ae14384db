#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod align;
pub mod combinations;
pub mod edits;
mod error;
pub mod geometry;
pub mod host;
mod node;
pub mod pairing;
mod path;
pub mod segment;
mod snapshot;

pub use crate::{
    align::{Alignment, Endpoints},
    combinations::GlyphInfo,
    edits::{EditOutcome, MatchItalicAngle, Parallelize, SelectionEdit},
    error::GlyphToolsError,
    geometry::Orientation,
    host::{run_edit, Host, ScopedTransaction, SnapshotHost},
    node::{Node, NodeType},
    pairing::PickedPair,
    path::Path,
    segment::{reconstruct_segments, Segment, SegmentPolicy},
    snapshot::{NodeEdit, NodeRef, Snapshot},
};
use std::path::PathBuf;

/// Read a selection snapshot from a JSON file
pub fn load_snapshot(filename: impl Into<PathBuf>) -> Result<Snapshot, GlyphToolsError> {
    let pb = filename.into();
    let buffered = std::io::BufReader::new(std::fs::File::open(&pb)?);
    let snapshot: Snapshot = serde_json::from_reader(buffered)?;
    log::debug!(
        "Loaded {} paths, {} selected nodes from {}",
        snapshot.paths.len(),
        snapshot.selection.len(),
        pb.display()
    );
    Ok(snapshot)
}
