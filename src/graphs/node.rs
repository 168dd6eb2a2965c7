use serde::{Deserialize, Serialize};

use super::NodeId;

/// Where a node is drawn. Never read by the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Position {
        Position { x, y }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    #[serde(default)]
    pub position: Position,
}

impl Node {
    pub fn new(id: NodeId, name: impl Into<String>, position: Position) -> Node {
        Node {
            id,
            name: name.into(),
            position,
        }
    }
}
