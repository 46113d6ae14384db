//! Recovering the line segments a node selection implies.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{geometry::angle_between, GlyphToolsError, NodeRef, Snapshot};

/// Two cyclically consecutive on-curve nodes of one path.
///
/// `a` comes before `b` when walking the path forward through its on-curve
/// nodes; off-curve handles may sit between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub a: NodeRef,
    pub b: NodeRef,
}

impl Segment {
    pub fn new(a: NodeRef, b: NodeRef) -> Self {
        Segment { a, b }
    }

    /// Order-independent identity of the segment
    pub fn key(&self) -> (usize, usize, usize) {
        let (lo, hi) = if self.a.index <= self.b.index {
            (self.a.index, self.b.index)
        } else {
            (self.b.index, self.a.index)
        };
        (self.a.path, lo, hi)
    }

    pub fn shares_endpoint_with(&self, other: &Segment) -> bool {
        self.a == other.a || self.a == other.b || self.b == other.a || self.b == other.b
    }

    /// Direction from `a` to `b` in radians
    pub fn angle(&self, snapshot: &Snapshot) -> Result<f64, GlyphToolsError> {
        Ok(angle_between(
            snapshot.position(self.a)?,
            snapshot.position(self.b)?,
        ))
    }
}

/// How segments are recovered from the selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentPolicy {
    /// Walk every path's on-curve nodes in order and keep consecutive pairs
    /// whose endpoints are both selected.
    #[default]
    PathWalk,
    /// Test every pair of selected on-curve nodes for adjacency.
    Pairwise,
}

/// Build the de-duplicated list of segments implied by the selection.
pub fn reconstruct_segments(
    snapshot: &Snapshot,
    policy: SegmentPolicy,
) -> Result<Vec<Segment>, GlyphToolsError> {
    let on_curves = snapshot.selected_on_curves()?;
    if on_curves.len() < 3 {
        return Err(GlyphToolsError::InsufficientSelection {
            found: on_curves.len(),
        });
    }

    let mut segments: IndexMap<(usize, usize, usize), Segment> = IndexMap::new();
    let mut add = |segment: Segment| {
        segments.entry(segment.key()).or_insert(segment);
    };

    match policy {
        SegmentPolicy::PathWalk => {
            for (p, path) in snapshot.paths.iter().enumerate() {
                for (ia, ib) in path.on_curve_pairs() {
                    let (a, b) = (NodeRef::new(p, ia), NodeRef::new(p, ib));
                    if snapshot.is_selected(a) && snapshot.is_selected(b) {
                        add(Segment::new(a, b));
                    }
                }
            }
        }
        SegmentPolicy::Pairwise => {
            for (i, first) in on_curves.iter().enumerate() {
                for second in &on_curves[i + 1..] {
                    if first.path != second.path {
                        continue;
                    }
                    let path = snapshot.path(*first)?;
                    if let Some((ia, ib)) = path.on_curve_neighbours(first.index, second.index) {
                        add(Segment::new(
                            NodeRef::new(first.path, ia),
                            NodeRef::new(first.path, ib),
                        ));
                    }
                }
            }
        }
    }

    // Walk order, whatever order the nodes were selected in. Later tie-breaks
    // favour earlier segments.
    let mut segments: Vec<Segment> = segments.into_values().collect();
    segments.sort_by_key(|s| (s.a.path, s.a.index));
    log::debug!("Found {} segments using {:?}", segments.len(), policy);
    if segments.len() < 2 {
        return Err(GlyphToolsError::NotEnoughSegments {
            found: segments.len(),
        });
    }
    Ok(segments)
}
