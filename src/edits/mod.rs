//! Edits computed from a selection snapshot.
mod matchitalicangle;
mod parallelize;

pub use matchitalicangle::MatchItalicAngle;
pub use parallelize::Parallelize;

use crate::{GlyphToolsError, NodeEdit, Snapshot};

/// The writes an edit wants applied, and what to tell the user about them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditOutcome {
    pub edits: Vec<NodeEdit>,
    pub message: String,
}

/// A trait for edits that can be computed from a selection snapshot
pub trait SelectionEdit {
    /// Title used when notifying the user
    fn name(&self) -> &'static str;

    /// Work out the node positions to write. Must not depend on anything but
    /// `snapshot` and the edit's own options.
    fn compute(&self, snapshot: &Snapshot) -> Result<EditOutcome, GlyphToolsError>;
}
