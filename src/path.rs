use crate::Node;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// A contour in a glyph layer
///
/// Paths are cyclic: the successor of the last node is the first node.
pub struct Path {
    /// A list of nodes in the path
    pub nodes: Vec<Node>,
}

impl Path {
    pub fn new(nodes: Vec<Node>) -> Self {
        Path { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Indices of the on-curve nodes, in path order.
    pub fn on_curve_indices(&self) -> Vec<usize> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_on_curve())
            .map(|(i, _)| i)
            .collect()
    }

    /// Pairs of cyclically consecutive on-curve indices, in walk order.
    ///
    /// A path with fewer than two on-curve nodes has no on-curve pairs. A path
    /// with exactly two yields both `(a, b)` and `(b, a)`.
    pub fn on_curve_pairs(&self) -> Vec<(usize, usize)> {
        let on_idx = self.on_curve_indices();
        let count = on_idx.len();
        if count < 2 {
            return vec![];
        }
        (0..count)
            .map(|k| (on_idx[k], on_idx[(k + 1) % count]))
            .collect()
    }

    /// Whether `a` and `b` are cyclically adjacent in the on-curve ordering.
    ///
    /// Returns the pair in forward walk order if so. With only two on-curve
    /// nodes both orders qualify, and the lower index comes first.
    pub fn on_curve_neighbours(&self, a: usize, b: usize) -> Option<(usize, usize)> {
        if a == b {
            return None;
        }
        let on_idx = self.on_curve_indices();
        let count = on_idx.len();
        let pa = on_idx.iter().position(|&i| i == a)?;
        let pb = on_idx.iter().position(|&i| i == b)?;
        if count == 2 {
            return Some((a.min(b), a.max(b)));
        }
        if (pa + 1) % count == pb {
            Some((a, b))
        } else if (pb + 1) % count == pa {
            Some((b, a))
        } else {
            None
        }
    }

    pub fn prev_index(&self, index: usize) -> Option<usize> {
        match self.nodes.len() {
            0 => None,
            len => Some((index + len - 1) % len),
        }
    }

    pub fn next_index(&self, index: usize) -> Option<usize> {
        match self.nodes.len() {
            0 => None,
            len => Some((index + 1) % len),
        }
    }

    /// Node indices strictly between `start` and `end`, walking forward and
    /// wrapping at the end of the path.
    pub fn forward_between(&self, start: usize, end: usize) -> ForwardBetween {
        let count = self.nodes.len();
        ForwardBetween {
            next: if count == 0 { end } else { (start + 1) % count },
            end,
            count,
        }
    }
}

/// Iterator returned by [`Path::forward_between`]
#[derive(Debug, Clone)]
pub struct ForwardBetween {
    next: usize,
    end: usize,
    count: usize,
}

impl Iterator for ForwardBetween {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.count == 0 || self.next == self.end || self.end >= self.count {
            return None;
        }
        let current = self.next;
        self.next = (self.next + 1) % self.count;
        Some(current)
    }
}
