use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum NodeType {
    Move,
    Line,
    OffCurve,
    Curve,
    QCurve,
}

impl NodeType {
    /// Everything but a Bézier handle lies on the outline.
    pub fn is_on_curve(&self) -> bool {
        *self != NodeType::OffCurve
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub nodetype: NodeType,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub smooth: bool,
}

impl Node {
    fn new(x: f64, y: f64, nodetype: NodeType) -> Self {
        Node {
            x,
            y,
            nodetype,
            smooth: false,
        }
    }

    pub fn new_move(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeType::Move)
    }

    pub fn new_line(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeType::Line)
    }

    pub fn new_offcurve(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeType::OffCurve)
    }

    pub fn new_curve(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeType::Curve)
    }

    pub fn new_qcurve(x: f64, y: f64) -> Self {
        Self::new(x, y, NodeType::QCurve)
    }

    pub fn is_on_curve(&self) -> bool {
        self.nodetype.is_on_curve()
    }

    pub fn to_kurbo(&self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: kurbo::Point) {
        self.x = position.x;
        self.y = position.y;
    }
}
