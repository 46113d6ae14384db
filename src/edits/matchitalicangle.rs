use kurbo::Point;

use crate::{
    edits::{EditOutcome, SelectionEdit},
    GlyphToolsError, Node, NodeEdit, NodeRef, NodeType, Snapshot,
};

/// Slant handles or a straight segment to a master's italic angle
///
/// The angle is in degrees, measured clockwise from the vertical the way
/// font editors store it. Only angles strictly between -90 and 90 are usable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchItalicAngle {
    pub italic_angle: f64,
}

impl MatchItalicAngle {
    pub fn new(italic_angle: f64) -> Self {
        MatchItalicAngle { italic_angle }
    }

    /// Horizontal offset of the italic line after rising `dy`
    fn run(&self, dy: f64) -> f64 {
        dy * self.italic_angle.to_radians().tan()
    }

    fn align_handle(
        &self,
        snapshot: &Snapshot,
        handle_ref: NodeRef,
        handle: &Node,
    ) -> Result<EditOutcome, GlyphToolsError> {
        let path = snapshot.path(handle_ref)?;
        let neighbour = move |index: Option<usize>| {
            index
                .and_then(|i| path.nodes.get(i))
                .filter(|n| n.is_on_curve())
        };
        let anchor = neighbour(path.prev_index(handle_ref.index))
            .or_else(|| neighbour(path.next_index(handle_ref.index)))
            .ok_or(GlyphToolsError::HandleWithoutAnchor { node: handle_ref })?;

        let x = anchor.x + self.run(handle.y - anchor.y);
        Ok(EditOutcome {
            edits: vec![NodeEdit::new(handle_ref, Point::new(x, handle.y))],
            message: "Aligned the handle to the italic angle".to_string(),
        })
    }

    fn align_point_handles(
        &self,
        snapshot: &Snapshot,
        node_ref: NodeRef,
        node: &Node,
    ) -> Result<EditOutcome, GlyphToolsError> {
        let message = "Aligned handles of the selected point to the italic angle".to_string();
        if node.nodetype != NodeType::Curve {
            log::info!("{} is not a curve point; nothing to align", node_ref);
            return Ok(EditOutcome {
                edits: vec![],
                message,
            });
        }
        let path = snapshot.path(node_ref)?;
        let lookup = move |index: Option<usize>| {
            index.and_then(|i| path.nodes.get(i).map(|n| (NodeRef::new(node_ref.path, i), n)))
        };
        let prev = lookup(path.prev_index(node_ref.index));
        let next = lookup(path.next_index(node_ref.index));
        let pick = move |test: &dyn Fn(&Node) -> bool| {
            prev.filter(|(_, n)| test(*n))
                .or_else(|| next.filter(|(_, n)| test(*n)))
                .filter(|(_, n)| !n.is_on_curve())
        };
        let upper = pick(&|n: &Node| n.y > node.y);
        let lower = pick(&|n: &Node| n.y < node.y);

        let target = (90.0 - self.italic_angle).to_radians();
        let mut edits = vec![];
        let mut shift = 0.0;
        if let Some((upper_ref, upper)) = upper {
            let x = node.x + (upper.y - node.y) / target.tan();
            shift = x - upper.x;
            edits.push(NodeEdit::new(upper_ref, Point::new(x, upper.y)));
        }
        if let Some((lower_ref, lower)) = lower {
            edits.push(NodeEdit::new(
                lower_ref,
                Point::new(lower.x - shift, lower.y),
            ));
        }
        Ok(EditOutcome { edits, message })
    }

    fn align_segment(
        &self,
        snapshot: &Snapshot,
        (first_ref, first): (NodeRef, &Node),
        (second_ref, second): (NodeRef, &Node),
    ) -> Result<EditOutcome, GlyphToolsError> {
        let path = snapshot.path(first_ref)?;
        let adjacent = first_ref.path == second_ref.path
            && (path.next_index(first_ref.index) == Some(second_ref.index)
                || path.prev_index(first_ref.index) == Some(second_ref.index));
        if !adjacent {
            return Err(GlyphToolsError::NotAdjacent);
        }

        let dx = self.run((second.y - first.y).abs());
        let edit = if second.y > first.y {
            NodeEdit::new(second_ref, Point::new(first.x + dx, second.y))
        } else {
            NodeEdit::new(first_ref, Point::new(second.x + dx, first.y))
        };
        Ok(EditOutcome {
            edits: vec![edit],
            message: "Aligned the selected line segment to the italic angle".to_string(),
        })
    }
}

impl SelectionEdit for MatchItalicAngle {
    fn name(&self) -> &'static str {
        "Match Italic Angle"
    }

    fn compute(&self, snapshot: &Snapshot) -> Result<EditOutcome, GlyphToolsError> {
        if self.italic_angle == 0.0 {
            return Err(GlyphToolsError::ItalicAngleNotSet);
        }
        if !self.italic_angle.is_finite() || self.italic_angle.abs() >= 90.0 {
            return Err(GlyphToolsError::BadItalicAngle {
                angle: self.italic_angle,
            });
        }
        let selected = snapshot.selected_nodes_in_path_order()?;
        let outcome = match selected.as_slice() {
            [(node_ref, node)] if node.is_on_curve() => {
                self.align_point_handles(snapshot, *node_ref, node)?
            }
            [(handle_ref, handle)] => self.align_handle(snapshot, *handle_ref, handle)?,
            [first, second] => self.align_segment(snapshot, *first, *second)?,
            _ => {
                return Err(GlyphToolsError::UnsupportedSelection(format!(
                    "select exactly one on-curve point, one handle, or two on-curve points (got {} nodes)",
                    selected.len()
                )))
            }
        };
        log::info!("{}", outcome.message);
        Ok(outcome)
    }
}
