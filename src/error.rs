use std::io;
use thiserror::Error;

use crate::NodeRef;

#[derive(Debug, Error)]
pub enum GlyphToolsError {
    #[error("Select the endpoints of the two segments (at least 3 on-curve nodes, got {found})")]
    InsufficientSelection { found: usize },

    #[error("Couldn't infer two segments from the selection (found {found}); select both endpoints of each segment")]
    NotEnoughSegments { found: usize },

    #[error("Ambiguous selection; try selecting only the intended endpoints")]
    AmbiguousSelection,

    #[error("Target segment has zero length")]
    ZeroLengthTarget,

    #[error("Node {node} does not exist in the snapshot")]
    NodeNotFound { node: NodeRef },

    #[error("Italic angle is not set")]
    ItalicAngleNotSet,

    #[error("Italic angle {angle} is out of range; it must be between -90 and 90 degrees")]
    BadItalicAngle { angle: f64 },

    #[error("Edit would move {node} to a non-finite position")]
    NonFiniteEdit { node: NodeRef },

    #[error("The selected handle at {node} does not have an associated on-curve point")]
    HandleWithoutAnchor { node: NodeRef },

    #[error("The selected points must be neighbours on the same path")]
    NotAdjacent,

    #[error("Unsupported selection: {0}")]
    UnsupportedSelection(String),

    #[error("Glyph {glyph} has a bad Unicode value {value:?}")]
    BadCodepoint { glyph: String, value: String },

    #[error("No letters selected")]
    NoLettersSelected,

    #[error("IO Error: {0}")]
    IO(#[from] io::Error),

    #[error("Error reading snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

impl GlyphToolsError {
    /// Whether this error means "nothing to do" rather than a failure.
    pub fn is_no_op(&self) -> bool {
        matches!(self, GlyphToolsError::ZeroLengthTarget)
    }
}
