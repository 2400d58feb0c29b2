use super::Element;
use crate::{
    graph::{NodeList, NodeState},
    neighbors::{distance_estimate, is_valid_step, STEPS},
    path::Path,
    NodeID, Point, SearchConfig, TraversalPred,
};

use std::collections::BinaryHeap;

// upper bound for preallocating search storage; it grows with the cells actually visited
const MAX_SIZE_HINT: usize = 1024;

// a Macro to log::trace the time since $timer, and restart $timer
#[cfg(feature = "log")]
macro_rules! re_trace {
    ($msg: literal, $timer: ident) => {
        let now = std::time::Instant::now();
        log::trace!(concat!("time to ", $msg, ": {:?}"), now - $timer);
        #[allow(unused)]
        let $timer = now;
    };
}
#[cfg(not(feature = "log"))]
macro_rules! re_trace {
    // does nothing without log feature
    ($msg: literal, $timer: ident) => {};
}

/// Counters describing how much work a search did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// The number of distinct Points that were given a cost.
    pub considered: usize,
    /// The number of Points whose neighbors were examined.
    pub expanded: usize,
    /// Whether the returned Path (if any) ends at the goal.
    pub reached_goal: bool,
}

/// Searches for the cheapest Path from `start` to `goal` using A*.
///
/// `pred` decides which cells `traverser` may enter. The start cell is not
/// checked. Steps go to all 8 neighbors; a diagonal step needs both cells on
/// the corner it cuts to be traversable.
///
/// Returns `None` if `goal` can't be reached without exceeding
/// [`config.max_cost`](SearchConfig::max_cost), unless
/// [`config.loose`](SearchConfig::loose) is set, in which case the Path to the
/// evaluated Point closest to `goal` is returned instead.
///
/// Equally scored candidates are expanded in the order they were discovered,
/// so the same input always gives the same Path.
///
/// ## Examples
/// ```
/// use tile_pathfinding::prelude::*;
///
/// let open_field = |_: &(), _: i32, _: i32| true;
///
/// let path = find_path(&open_field, &(), &SearchConfig::default(), (0, 0), (3, 0)).unwrap();
/// assert_eq!(path.as_slice(), &[(0, 0), (1, 0), (2, 0), (3, 0)]);
/// assert_eq!(path.cost(), 3 * ADJACENT_COST);
///
/// let path = find_path(&open_field, &(), &SearchConfig::default(), (0, 0), (2, 2)).unwrap();
/// assert_eq!(path.as_slice(), &[(0, 0), (1, 1), (2, 2)]);
/// assert_eq!(path.cost(), 2 * DIAGONAL_COST);
/// ```
pub fn find_path<T, P>(
    pred: &P,
    traverser: &T,
    config: &SearchConfig,
    start: Point,
    goal: Point,
) -> Option<Path<Point>>
where
    T: ?Sized,
    P: TraversalPred<T> + ?Sized,
{
    find_path_with_stats(pred, traverser, config, start, goal).0
}

/// Same as [`find_path`], but also reports how many Points were looked at.
pub fn find_path_with_stats<T, P>(
    pred: &P,
    traverser: &T,
    config: &SearchConfig,
    start: Point,
    goal: Point,
) -> (Option<Path<Point>>, SearchStats)
where
    T: ?Sized,
    P: TraversalPred<T> + ?Sized,
{
    #[cfg(feature = "log")]
    let (outer_timer, timer) = (std::time::Instant::now(), std::time::Instant::now());

    let traversable = |(x, y): Point| pred.can_traverse(traverser, x, y);

    let size_hint = (distance_estimate(start, goal).min(config.max_cost) / 2).min(MAX_SIZE_HINT) + 16;
    let mut nodes = NodeList::with_capacity(size_hint);
    let mut open = BinaryHeap::with_capacity(size_hint / 2);
    let mut stats = SearchStats::default();

    let start_id = nodes.get_or_add(start);
    nodes[start_id].update(None, 0, distance_estimate(start, goal));
    open.push(Element(start_id, nodes[start_id].f));

    re_trace!("a* setup", timer);

    let mut reached = None;

    while let Some(Element(current_id, score)) = open.pop() {
        let current = &nodes[current_id];
        // outdated entry of a Node that was closed or rescored since
        if current.state != NodeState::Open || current.f != score {
            continue;
        }
        let (pos, current_cost) = (current.pos, current.g);

        if pos == goal {
            reached = Some(current_id);
            break;
        }

        for &(dx, dy, step_cost) in STEPS.iter() {
            let other_pos = match (pos.0.checked_add(dx), pos.1.checked_add(dy)) {
                (Some(x), Some(y)) => (x, y),
                _ => continue,
            };
            if !is_valid_step(&traversable, pos, other_pos) {
                continue;
            }
            let other_cost = match current_cost.checked_add(step_cost) {
                Some(cost) if cost <= config.max_cost => cost,
                _ => continue,
            };

            let other_id = nodes.get_or_add(other_pos);
            let other = &mut nodes[other_id];
            if other.state != NodeState::New && other.g <= other_cost {
                continue;
            }
            other.update(
                Some(current_id),
                other_cost,
                distance_estimate(other_pos, goal),
            );
            open.push(Element(other_id, other.f));
        }

        nodes[current_id].state = NodeState::Closed;
        stats.expanded += 1;
    }

    re_trace!("a* main loop", timer);

    stats.considered = nodes.len();
    stats.reached_goal = reached.is_some();

    let end = match reached {
        Some(id) => Some(id),
        None if config.loose => closest_to_goal(&nodes),
        None => None,
    };
    let path = end.map(|id| Path::new(nodes.path_to(id), nodes[id].g));

    re_trace!("a* path reconstruction", timer);

    #[cfg(feature = "log")]
    {
        let elapsed = outer_timer.elapsed();
        log::trace!(
            "a* {:?} -> {:?}: reached {}, {} considered, {} expanded, in {:?}",
            start,
            goal,
            stats.reached_goal,
            stats.considered,
            stats.expanded,
            elapsed
        );
        if config
            .slow_search_warning
            .map_or(false, |limit| elapsed > limit)
        {
            log::warn!(
                "Considered {} nodes for path from {:?} to {:?} [duration={:?}]",
                stats.considered,
                start,
                goal,
                elapsed
            );
        }
    }

    (path, stats)
}

// The evaluated Node with the lowest estimate to the goal. Ties prefer the
// cheaper Node, then the older one.
fn closest_to_goal(nodes: &NodeList) -> Option<NodeID> {
    nodes
        .iter()
        .filter(|node| node.state != NodeState::New)
        .min_by_key(|node| (node.h, node.g, node.id))
        .map(|node| node.id)
}
