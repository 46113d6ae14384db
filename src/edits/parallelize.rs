use crate::{
    align::{assign_source_destination, match_angle},
    edits::{EditOutcome, SelectionEdit},
    geometry::Orientation,
    pairing::pick_pair,
    segment::{reconstruct_segments, SegmentPolicy},
    GlyphToolsError, Snapshot,
};

/// Make one selected segment parallel to another
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parallelize {
    /// Which kind of pair to look for first
    pub prefer: Orientation,
    /// Take the right/upper segment as the source instead of the left/lower one
    pub flip: bool,
    pub policy: SegmentPolicy,
}

impl Parallelize {
    pub fn new(prefer: Orientation, flip: bool) -> Self {
        Parallelize {
            prefer,
            flip,
            policy: SegmentPolicy::default(),
        }
    }

    pub fn with_policy(self, policy: SegmentPolicy) -> Self {
        Parallelize { policy, ..self }
    }

    fn source_side(&self, orientation: Orientation) -> &'static str {
        match (orientation, self.flip) {
            (Orientation::Horizontal, false) => "leftmost",
            (Orientation::Horizontal, true) => "rightmost",
            (Orientation::Vertical, false) => "lower/left",
            (Orientation::Vertical, true) => "upper/right",
        }
    }
}

impl SelectionEdit for Parallelize {
    fn name(&self) -> &'static str {
        "Parallelize Segment"
    }

    fn compute(&self, snapshot: &Snapshot) -> Result<EditOutcome, GlyphToolsError> {
        let segments = reconstruct_segments(snapshot, self.policy)?;
        let pair = pick_pair(snapshot, &segments, self.prefer)?;
        let (source, destination) = assign_source_destination(snapshot, &pair, self.flip)?;
        let alignment = match_angle(snapshot, source, destination, pair.orientation)?;

        let degrees = (alignment.theta.to_degrees() + 360.0) % 360.0;
        let message = format!(
            "{} pair | Source: {} | {:.2}° | A fixed, B moved",
            pair.orientation.name(),
            self.source_side(pair.orientation),
            degrees
        );
        log::info!("{}", message);
        Ok(EditOutcome {
            edits: alignment.edits(),
            message,
        })
    }
}
