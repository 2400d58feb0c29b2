use super::find_path;
use crate::{path::Path, Point, SearchConfig, TraversalPred};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs one [`find_path`] per `(start, goal)` pair.
///
/// The results are in the same order as `requests`. With the `parallel`
/// feature the searches are spread over the `rayon` thread pool, which is why
/// `pred` and `traverser` have to be `Sync`.
///
/// ## Examples
/// ```
/// use tile_pathfinding::prelude::*;
///
/// let grid = TileGrid::new(8, 8, true);
/// let walker = |open: &bool| *open;
///
/// let paths = find_paths(
///     &grid,
///     &walker,
///     &SearchConfig::default(),
///     &[((0, 0), (7, 7)), ((3, 3), (3, 3)), ((0, 0), (9, 9))],
/// );
///
/// assert_eq!(paths[0].as_ref().map(|path| path.cost()), Some(7 * DIAGONAL_COST));
/// assert_eq!(paths[1].as_ref().map(|path| path.len()), Some(1));
/// assert!(paths[2].is_none());
/// ```
pub fn find_paths<T, P>(
    pred: &P,
    traverser: &T,
    config: &SearchConfig,
    requests: &[(Point, Point)],
) -> Vec<Option<Path<Point>>>
where
    T: Sync + ?Sized,
    P: TraversalPred<T> + Sync + ?Sized,
{
    #[cfg(feature = "parallel")]
    let iter = requests.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = requests.iter();

    iter.map(|&(start, goal)| find_path(pred, traverser, config, start, goal))
        .collect()
}
