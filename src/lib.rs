#![deny(missing_docs)]

//! A crate to find deterministic, low-cost Paths on a Tile Grid using A*.
//!
//! Movement is 8-directional. Straight steps cost [`ADJACENT_COST`], diagonal
//! steps cost [`DIAGONAL_COST`], and a diagonal step is only taken if neither
//! of the two cells it brushes past is blocked.
//!
//! What can be walked on is decided by the caller through a [`TraversalPred`],
//! which receives an opaque "traverser" (the unit that wants to move) and a
//! coordinate.
//!
//! ## Example
//! ```
//! use tile_pathfinding::prelude::*;
//!
//! // 0 = grass, 1 = water
//! let grid = TileGrid::<u8>::from_rows(&[
//!     [0, 0, 0, 0],
//!     [1, 1, 1, 0],
//!     [0, 0, 0, 0],
//! ]);
//!
//! // a traverser that can't swim
//! let walker = |tile: &u8| *tile == 0;
//!
//! let path = find_path(&grid, &walker, &SearchConfig::default(), (0, 0), (0, 2))
//!     .expect("there is a way around the water");
//!
//! assert_eq!(path.start(), (0, 0));
//! assert_eq!(path.end(), (0, 2));
//!
//! // a path can be bounded by the number of tiles it may cross
//! let short = SearchConfig::default().with_longest(3);
//! assert!(find_path(&grid, &walker, &short, (0, 0), (0, 2)).is_none());
//! ```
//!
//! ## Features
//! - `parallel` (default): [`find_paths`] spreads independent searches over a
//!   `rayon` thread pool.
//! - `log`: trace the time spent in each phase of a search and warn about
//!   searches slower than [`SearchConfig::slow_search_warning`].

/// A shorthand for a Point on the grid. Coordinates may be negative; bounds
/// are up to the [`TraversalPred`].
pub type Point = (i32, i32);

type PointMap<V> = hashbrown::HashMap<Point, V>;

mod config;
pub use config::SearchConfig;

mod graph;
type NodeID = usize;

mod grid;
pub use grid::{find_path, find_path_with_stats, find_paths, SearchStats};

mod neighbors;
pub use neighbors::{distance_estimate, is_valid_step, step_cost, ADJACENT_COST, DIAGONAL_COST};

mod path;
pub use path::{Cost, Path};

mod traversal;
pub use traversal::{TileGrid, TraversalPred, Traverser};

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        find_path, find_path_with_stats, find_paths, Cost, Path, Point, SearchConfig,
        SearchStats, TileGrid, TraversalPred, Traverser, ADJACENT_COST, DIAGONAL_COST,
    };
}
