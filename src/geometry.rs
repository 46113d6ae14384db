//! Small angle helpers shared by the outline edits.

use std::f64::consts::{PI, TAU};

use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};

/// Which axis a segment (or a pair of segments) runs along
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Classify a direction: horizontal if it is at least as much x as y.
    pub fn classify(theta: f64) -> Self {
        if theta.cos().abs() >= theta.sin().abs() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// The coordinate of `p` along this axis
    pub fn axis(&self, p: Point) -> f64 {
        match self {
            Orientation::Horizontal => p.x,
            Orientation::Vertical => p.y,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "Horizontal",
            Orientation::Vertical => "Vertical",
        }
    }
}

/// Direction from `a` to `b`, in radians
pub fn angle_between(a: Point, b: Point) -> f64 {
    (b - a).atan2()
}

/// Smallest difference between two line directions, in `[0, π]`.
///
/// A direction and its reverse are the same line: `angle_diff(a, a + π) == 0`.
pub fn angle_diff(a1: f64, a2: f64) -> f64 {
    ((a1 - a2 + PI).rem_euclid(TAU) - PI).abs()
}

/// Rotate `p` by `delta` radians around `pivot`
pub fn rotate_about(p: Point, pivot: Point, delta: f64) -> Point {
    Affine::rotate_about(delta, pivot) * p
}
