//! Choosing which two segments to work with.

use ordered_float::OrderedFloat;

use crate::{
    geometry::{angle_diff, Orientation},
    GlyphToolsError, Segment, Snapshot,
};

/// The two segments picked from a selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickedPair {
    pub first: Segment,
    pub second: Segment,
    pub orientation: Orientation,
}

struct Candidate {
    first: Segment,
    second: Segment,
    first_angle: f64,
    second_angle: f64,
}

impl Candidate {
    fn gap(&self) -> OrderedFloat<f64> {
        OrderedFloat(angle_diff(self.first_angle, self.second_angle))
    }

    fn into_pair(self, orientation: Orientation) -> PickedPair {
        PickedPair {
            first: self.first,
            second: self.second,
            orientation,
        }
    }

    fn natural(self) -> PickedPair {
        let orientation = Orientation::classify(self.first_angle);
        self.into_pair(orientation)
    }
}

/// Pick the pair of segments to parallelize.
///
/// In order of preference: a pair sharing no endpoint whose segments both run
/// along `prefer`; then any pair sharing no endpoint; then any pair at all.
/// Within each tier the pair with the closest line directions wins, and ties
/// go to the earliest pair in the list.
pub fn pick_pair(
    snapshot: &Snapshot,
    segments: &[Segment],
    prefer: Orientation,
) -> Result<PickedPair, GlyphToolsError> {
    let angles = segments
        .iter()
        .map(|s| s.angle(snapshot))
        .collect::<Result<Vec<f64>, _>>()?;

    let mut all = vec![];
    for i in 0..segments.len() {
        for j in i + 1..segments.len() {
            all.push(Candidate {
                first: segments[i],
                second: segments[j],
                first_angle: angles[i],
                second_angle: angles[j],
            });
        }
    }
    let (disjoint, touching): (Vec<Candidate>, Vec<Candidate>) = all
        .into_iter()
        .partition(|c| !c.first.shares_endpoint_with(&c.second));

    if disjoint.is_empty() {
        log::debug!("No disjoint segment pair; using the closest pair overall");
        return touching
            .into_iter()
            .min_by_key(Candidate::gap)
            .map(Candidate::natural)
            .ok_or(GlyphToolsError::AmbiguousSelection);
    }

    let (wanted, other): (Vec<Candidate>, Vec<Candidate>) =
        disjoint.into_iter().partition(|c| {
            Orientation::classify(c.first_angle) == prefer
                && Orientation::classify(c.second_angle) == prefer
        });
    if let Some(best) = wanted.into_iter().min_by_key(Candidate::gap) {
        return Ok(best.into_pair(prefer));
    }

    log::debug!(
        "No disjoint {} pair; using the closest disjoint pair",
        prefer.name().to_lowercase()
    );
    other
        .into_iter()
        .min_by_key(Candidate::gap)
        .map(Candidate::natural)
        .ok_or(GlyphToolsError::AmbiguousSelection)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{reconstruct_segments, Node, NodeRef, Path, SegmentPolicy};

    /// Two separate stems, so disjoint pairs exist
    fn stem_pair() -> Snapshot {
        let mut snapshot = Snapshot::new(vec![
            // A slightly slanted stem
            Path::new(vec![
                Node::new_line(0.0, 0.0),
                Node::new_line(50.0, 0.0),
                Node::new_line(60.0, 500.0),
                Node::new_line(10.0, 500.0),
            ]),
            // A more slanted one
            Path::new(vec![
                Node::new_line(200.0, 0.0),
                Node::new_line(250.0, 2.0),
                Node::new_line(300.0, 500.0),
                Node::new_line(250.0, 500.0),
            ]),
        ]);
        snapshot.select_all();
        snapshot
    }

    fn pick(snapshot: &Snapshot, prefer: Orientation) -> PickedPair {
        let segments = reconstruct_segments(snapshot, SegmentPolicy::PathWalk).unwrap();
        pick_pair(snapshot, &segments, prefer).unwrap()
    }

    #[test]
    fn test_prefers_requested_orientation() {
        let snapshot = stem_pair();
        let horizontal = pick(&snapshot, Orientation::Horizontal);
        assert_eq!(horizontal.orientation, Orientation::Horizontal);
        for segment in [horizontal.first, horizontal.second] {
            let angle = segment.angle(&snapshot).unwrap();
            assert_eq!(Orientation::classify(angle), Orientation::Horizontal);
        }
        assert!(!horizontal.first.shares_endpoint_with(&horizontal.second));

        let vertical = pick(&snapshot, Orientation::Vertical);
        assert_eq!(vertical.orientation, Orientation::Vertical);
        for segment in [vertical.first, vertical.second] {
            let angle = segment.angle(&snapshot).unwrap();
            assert_eq!(Orientation::classify(angle), Orientation::Vertical);
        }
    }

    #[test]
    fn test_closest_angles_win() {
        let snapshot = stem_pair();
        let horizontal = pick(&snapshot, Orientation::Horizontal);
        // The second stem's foot is tilted; the first stem's foot and top are
        // exactly parallel and come first.
        assert_eq!(
            horizontal.first,
            Segment::new(NodeRef::new(0, 0), NodeRef::new(0, 1))
        );
        assert_eq!(
            horizontal.second,
            Segment::new(NodeRef::new(0, 2), NodeRef::new(0, 3))
        );
    }

    #[test]
    fn test_deterministic() {
        let snapshot = stem_pair();
        let a = pick(&snapshot, Orientation::Vertical);
        let b = pick(&snapshot, Orientation::Vertical);
        assert_eq!(a, b);
    }

    #[test]
    fn test_falls_back_to_any_disjoint_pair() {
        // A quadrilateral whose vertical sides are parallel
        let mut snapshot = Snapshot::new(vec![Path::new(vec![
            Node::new_line(0.0, 0.0),
            Node::new_line(100.0, 10.0),
            Node::new_line(100.0, 50.0),
            Node::new_line(0.0, 50.0),
        ])]);
        snapshot = snapshot.with_selection([
            NodeRef::new(0, 0),
            NodeRef::new(0, 1),
            NodeRef::new(0, 2),
            NodeRef::new(0, 3),
        ]);
        let picked = pick(&snapshot, Orientation::Vertical);
        // 1-2 (vertical) and 3-0 (vertical) are exactly parallel
        assert_eq!(picked.orientation, Orientation::Vertical);
        let segments = [picked.first, picked.second];
        assert!(segments.contains(&Segment::new(NodeRef::new(0, 1), NodeRef::new(0, 2))));
        assert!(segments.contains(&Segment::new(NodeRef::new(0, 3), NodeRef::new(0, 0))));

        let picked = pick(&snapshot, Orientation::Horizontal);
        assert_eq!(picked.orientation, Orientation::Horizontal);
        assert_eq!(picked.first, Segment::new(NodeRef::new(0, 0), NodeRef::new(0, 1)));
        assert_eq!(picked.second, Segment::new(NodeRef::new(0, 2), NodeRef::new(0, 3)));
    }

    #[test]
    fn test_mixed_disjoint_pair_uses_first_segment_orientation() {
        // Only one disjoint pair exists: a horizontal and a vertical segment
        let snapshot = Snapshot::new(vec![
            Path::new(vec![Node::new_line(0.0, 0.0), Node::new_line(100.0, 0.0)]),
            Path::new(vec![Node::new_line(200.0, 0.0), Node::new_line(200.0, 100.0)]),
        ])
        .with_selection([
            NodeRef::new(0, 0),
            NodeRef::new(0, 1),
            NodeRef::new(1, 0),
            NodeRef::new(1, 1),
        ]);
        let picked = pick(&snapshot, Orientation::Vertical);
        assert_eq!(picked.orientation, Orientation::Horizontal);
    }

    #[test]
    fn test_touching_pair_fallback() {
        // An L: three selected nodes, two segments sharing the corner
        let snapshot = Snapshot::new(vec![Path::new(vec![
            Node::new_line(0.0, 100.0),
            Node::new_line(0.0, 0.0),
            Node::new_line(100.0, 10.0),
            Node::new_line(100.0, 100.0),
        ])])
        .with_selection([NodeRef::new(0, 0), NodeRef::new(0, 1), NodeRef::new(0, 2)]);
        let picked = pick(&snapshot, Orientation::Horizontal);
        assert!(picked.first.shares_endpoint_with(&picked.second));
        // first segment is 0 -> 1, pointing straight down
        assert_eq!(picked.orientation, Orientation::Vertical);
    }

    #[test]
    fn test_single_segment_is_ambiguous() {
        let snapshot = Snapshot::default();
        let segments = [Segment::new(NodeRef::new(0, 0), NodeRef::new(0, 1))];
        // angles are read first, so a segment pointing nowhere is a lookup error
        assert!(pick_pair(&snapshot, &segments, Orientation::Horizontal).is_err());
        assert!(matches!(
            pick_pair(&snapshot, &[], Orientation::Horizontal),
            Err(GlyphToolsError::AmbiguousSelection)
        ));
    }
}
