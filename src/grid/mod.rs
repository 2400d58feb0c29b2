mod a_star;
pub use a_star::{find_path, find_path_with_stats, SearchStats};

mod batch;
pub use batch::find_paths;

use crate::{path::Cost, NodeID};

use std::cmp::Ordering;

/// An entry of the open set: a Node and the score it had when it was pushed.
///
/// Ordered so that a `BinaryHeap` pops the lowest score first and, among equal
/// scores, the oldest Node first.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
struct Element(NodeID, Cost);

impl PartialOrd for Element {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for Element {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.cmp(&self.1).then_with(|| rhs.0.cmp(&self.0))
    }
}
