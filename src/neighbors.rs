use crate::{path::Cost, Point};

/// The cost of a straight step to one of the four orthogonal neighbors.
pub const ADJACENT_COST: Cost = 10;

/// The cost of a diagonal step, `floor(sqrt(2 * ADJACENT_COST²))`.
pub const DIAGONAL_COST: Cost = 14;

/// The eight steps out of a cell, in the order they are considered.
pub(crate) const STEPS: [(i32, i32, Cost); 8] = [
    (-1, -1, DIAGONAL_COST),
    (0, -1, ADJACENT_COST),
    (1, -1, DIAGONAL_COST),
    (-1, 0, ADJACENT_COST),
    (1, 0, ADJACENT_COST),
    (-1, 1, DIAGONAL_COST),
    (0, 1, ADJACENT_COST),
    (1, 1, DIAGONAL_COST),
];

/// Estimates the cost from `a` to `b` as the straight-line distance in
/// [`ADJACENT_COST`] units, rounded down.
///
/// ## Examples
/// ```
/// use tile_pathfinding::distance_estimate;
///
/// assert_eq!(distance_estimate((0, 0), (3, 0)), 30);
/// assert_eq!(distance_estimate((0, 0), (1, 2)), 22);
/// assert_eq!(distance_estimate((5, 5), (5, 5)), 0);
/// ```
pub fn distance_estimate(a: Point, b: Point) -> Cost {
    let dx = (b.0 as f64) - (a.0 as f64);
    let dy = (b.1 as f64) - (a.1 as f64);
    (ADJACENT_COST as f64 * (dx * dx + dy * dy).sqrt()) as Cost
}

/// Returns whether moving from `from` to the neighboring `to` is allowed.
///
/// `to` itself has to be traversable, and a diagonal step additionally
/// requires both cells on the corner it cuts to be traversable.
pub fn is_valid_step(mut traversable: impl FnMut(Point) -> bool, from: Point, to: Point) -> bool {
    if !traversable(to) {
        return false;
    }
    if is_diagonal(from, to) {
        return traversable((to.0, from.1)) && traversable((from.0, to.1));
    }
    true
}

pub(crate) fn is_diagonal(from: Point, to: Point) -> bool {
    let (dx, dy) = offset(from, to);
    dx.abs() == 1 && dy.abs() == 1
}

// widened so points at opposite ends of the i32 range can't overflow
fn offset(from: Point, to: Point) -> (i64, i64) {
    (
        to.0 as i64 - from.0 as i64,
        to.1 as i64 - from.1 as i64,
    )
}

/// The cost of the single step `from` -> `to`, or `None` if they aren't neighbors.
pub fn step_cost(from: Point, to: Point) -> Option<Cost> {
    let (dx, dy) = offset(from, to);
    STEPS
        .iter()
        .find(|&&(sx, sy, _)| sx as i64 == dx && sy as i64 == dy)
        .map(|&(_, _, cost)| cost)
}
