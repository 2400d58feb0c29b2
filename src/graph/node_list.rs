use super::{Node, NodeID};
use crate::{Point, PointMap};

/// Every Node touched by one search, in order of creation.
///
/// A Node's ID is its index, so IDs grow monotonically and double as the
/// tie-break between equally scored Nodes.
#[derive(Clone, Debug)]
pub struct NodeList {
    nodes: Vec<Node>,
    pos_map: PointMap<NodeID>,
}

impl NodeList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            pos_map: PointMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    // Returns the existing Node at pos, or creates one.
    pub fn get_or_add(&mut self, pos: Point) -> NodeID {
        if let Some(&id) = self.pos_map.get(&pos) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(Node::new(id, pos));
        self.pos_map.insert(pos, id);
        id
    }

    #[cfg(test)]
    pub fn id_at(&self, pos: Point) -> Option<NodeID> {
        self.pos_map.get(&pos).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Follows the parent pointers from `id` back to the start.
    pub fn path_to(&self, id: NodeID) -> Vec<Point> {
        let mut steps = vec![];
        let mut current = Some(id);
        while let Some(id) = current {
            let node = &self[id];
            steps.push(node.pos);
            current = node.parent;
        }
        steps.reverse();
        steps
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for NodeList {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node {
        &self.nodes[index]
    }
}
impl IndexMut<NodeID> for NodeList {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut Node {
        &mut self.nodes[index]
    }
}

#[test]
fn get_or_add() {
    let mut nodes = NodeList::with_capacity(4);
    let a = nodes.get_or_add((0, 0));
    let b = nodes.get_or_add((-1, 5));
    assert_eq!(nodes.get_or_add((0, 0)), a);
    assert_eq!(nodes.len(), 2);
    assert!(a < b);
    assert_eq!(nodes[b].pos, (-1, 5));
    assert_eq!(nodes.id_at((-1, 5)), Some(b));
    assert_eq!(nodes.id_at((5, -1)), None);
}

#[test]
fn path_to() {
    let mut nodes = NodeList::with_capacity(4);
    let a = nodes.get_or_add((0, 0));
    let b = nodes.get_or_add((1, 1));
    let c = nodes.get_or_add((2, 1));
    nodes[a].update(None, 0, 20);
    nodes[b].update(Some(a), 14, 10);
    nodes[c].update(Some(b), 24, 0);

    assert_eq!(nodes.path_to(c), vec![(0, 0), (1, 1), (2, 1)]);
    assert_eq!(nodes.path_to(a), vec![(0, 0)]);
    assert_eq!(nodes.iter().map(|n| n.id).collect::<Vec<_>>(), vec![a, b, c]);
}
