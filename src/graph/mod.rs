mod node;
pub use node::{Node, NodeState};

mod node_list;
pub use node_list::NodeList;

use crate::NodeID;
