use crate::{path::Cost, NodeID, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    /// Created, but no cost assigned yet
    New,
    Open,
    Closed,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub id: NodeID,
    pub pos: Point,
    /// cheapest known cost from the start
    pub g: Cost,
    /// estimated cost to the goal
    pub h: Cost,
    pub f: Cost,
    pub parent: Option<NodeID>,
    pub state: NodeState,
}

impl Node {
    pub fn new(id: NodeID, pos: Point) -> Node {
        Node {
            id,
            pos,
            g: 0,
            h: 0,
            f: 0,
            parent: None,
            state: NodeState::New,
        }
    }

    /// Records a cheaper way of reaching this Node and opens it.
    pub fn update(&mut self, parent: Option<NodeID>, g: Cost, h: Cost) {
        debug_assert!(self.state == NodeState::New || g < self.g);
        self.parent = parent;
        self.g = g;
        self.h = h;
        self.f = g.saturating_add(h);
        self.state = NodeState::Open;
    }
}
