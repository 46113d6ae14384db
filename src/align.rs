//! Making one segment parallel to another.
//!
//! The destination segment keeps its length and its `A` endpoint; its `B`
//! endpoint swings round `A`, and the handles between `A` and `B` swing with it.

use std::f64::consts::{PI, TAU};

use kurbo::Vec2;

use crate::{
    geometry::{angle_between, rotate_about, Orientation},
    GlyphToolsError, NodeEdit, NodeRef, PickedPair, Segment, Snapshot,
};

/// A segment's endpoints ordered as (A, B)
pub type Endpoints = (NodeRef, NodeRef);

/// Everything computed for one parallelize operation
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    pub orientation: Orientation,
    pub source: Endpoints,
    pub destination: Endpoints,
    /// Target direction of the destination segment, radians
    pub theta: f64,
    /// Rotation applied to the destination, radians in `[-π, π)`
    pub delta: f64,
    /// Length of the destination segment
    pub length: f64,
    /// New position of the destination's B endpoint
    pub moved: NodeEdit,
    /// New positions of the handles between the destination's A and B
    pub rotated: Vec<NodeEdit>,
}

impl Alignment {
    /// All writes, B first
    pub fn edits(&self) -> Vec<NodeEdit> {
        std::iter::once(self.moved)
            .chain(self.rotated.iter().copied())
            .collect()
    }
}

/// Order a segment's endpoints so that A is left of (or below) B.
///
/// Level endpoints are ordered by their index in the path.
pub fn order_endpoints(
    snapshot: &Snapshot,
    segment: &Segment,
    orientation: Orientation,
) -> Result<Endpoints, GlyphToolsError> {
    let first = orientation.axis(snapshot.position(segment.a)?);
    let second = orientation.axis(snapshot.position(segment.b)?);
    if first < second || (first == second && segment.a.index < segment.b.index) {
        Ok((segment.a, segment.b))
    } else {
        Ok((segment.b, segment.a))
    }
}

/// Decide which picked segment is the source and which the destination.
///
/// The segment further left (horizontal) or lower (vertical) is the source,
/// judged by the midpoints; `flip` reverses that.
pub fn assign_source_destination(
    snapshot: &Snapshot,
    pair: &PickedPair,
    flip: bool,
) -> Result<(Endpoints, Endpoints), GlyphToolsError> {
    let orientation = pair.orientation;
    let first = order_endpoints(snapshot, &pair.first, orientation)?;
    let second = order_endpoints(snapshot, &pair.second, orientation)?;
    let midpoint = |(a, b): Endpoints| -> Result<f64, GlyphToolsError> {
        Ok(0.5 * (orientation.axis(snapshot.position(a)?) + orientation.axis(snapshot.position(b)?)))
    };
    let m1 = midpoint(first)?;
    let m2 = midpoint(second)?;
    if (m1 <= m2 && !flip) || (m1 > m2 && flip) {
        Ok((first, second))
    } else {
        Ok((second, first))
    }
}

/// Rotate the destination segment to run parallel to the source.
///
/// All positions come from `snapshot`; nothing is written back.
pub fn match_angle(
    snapshot: &Snapshot,
    source: Endpoints,
    destination: Endpoints,
    orientation: Orientation,
) -> Result<Alignment, GlyphToolsError> {
    let (src_a, src_b) = (snapshot.position(source.0)?, snapshot.position(source.1)?);
    let (dst_a, dst_b) = (
        snapshot.position(destination.0)?,
        snapshot.position(destination.1)?,
    );

    let mut theta = angle_between(src_a, src_b);
    let length = dst_a.distance(dst_b);
    if length == 0.0 {
        return Err(GlyphToolsError::ZeroLengthTarget);
    }

    // B must stay right of / above A
    let along = orientation.axis(dst_a);
    if along + orientation.axis((Vec2::from_angle(theta) * length).to_point()) < along {
        theta = (theta + PI).rem_euclid(TAU);
    }
    let new_b = dst_a + Vec2::from_angle(theta) * length;

    let current = angle_between(dst_a, dst_b);
    let delta = (theta - current + PI).rem_euclid(TAU) - PI;

    let path = snapshot.path(destination.0)?;
    let mut rotated = vec![];
    for index in path.forward_between(destination.0.index, destination.1.index) {
        let node = NodeRef::new(destination.0.path, index);
        let handle = snapshot.node(node)?;
        if handle.is_on_curve() {
            continue;
        }
        rotated.push(NodeEdit::new(
            node,
            rotate_about(handle.to_kurbo(), dst_a, delta),
        ));
    }
    log::debug!(
        "Destination {}..{}: theta {:.4}, delta {:.4}, {} handles",
        destination.0,
        destination.1,
        theta,
        delta,
        rotated.len()
    );

    Ok(Alignment {
        orientation,
        source,
        destination,
        theta,
        delta,
        length,
        moved: NodeEdit::new(destination.1, new_b),
        rotated,
    })
}
