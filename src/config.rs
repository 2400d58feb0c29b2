use crate::{path::Cost, ADJACENT_COST};

use std::time::Duration;

/// Options for how a single search may behave.
///
/// ## Examples
/// Basic usage:
/// ```
/// use tile_pathfinding::prelude::*;
///
/// // no more than 12 straight tiles worth of walking, and settle for
/// // getting close if the goal can't be reached
/// let config = SearchConfig::default()
///     .with_longest(12)
///     .loose(true);
///
/// assert_eq!(config.max_cost, 12 * ADJACENT_COST);
/// assert!(config.loose);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// The highest total cost a returned Path may have.
    ///
    /// Steps that would push a Path above this are never taken.
    /// Default: unbounded
    pub max_cost: Cost,
    /// Whether to fall back to a Path towards the closest evaluated Point if
    /// the goal cannot be reached.
    ///
    /// Default: `false`
    pub loose: bool,
    /// Searches taking longer than this are reported with `log::warn`.
    /// Only has an effect with the `log` feature enabled.
    ///
    /// Default: 500 ms
    pub slow_search_warning: Option<Duration>,
}

impl SearchConfig {
    /// Creates a config bounded by `max_cost` in traversal-cost units.
    pub fn new(max_cost: Cost) -> SearchConfig {
        SearchConfig {
            max_cost,
            ..Default::default()
        }
    }

    /// Sets the maximum Path cost.
    pub fn with_max_cost(mut self, max_cost: Cost) -> SearchConfig {
        self.max_cost = max_cost;
        self
    }

    /// Bounds the Path by the number of straight tile traversals it may span,
    /// i.e. `tiles * ADJACENT_COST`.
    ///
    /// A diagonal step is cheaper than two straight ones, so a Path may
    /// contain more than `tiles` steps if some of them are diagonal.
    pub fn with_longest(mut self, tiles: usize) -> SearchConfig {
        self.max_cost = tiles.saturating_mul(ADJACENT_COST);
        self
    }

    /// Sets [`loose`](SearchConfig::loose).
    pub fn loose(mut self, loose: bool) -> SearchConfig {
        self.loose = loose;
        self
    }

    /// Sets [`slow_search_warning`](SearchConfig::slow_search_warning).
    pub fn with_slow_search_warning(mut self, threshold: Option<Duration>) -> SearchConfig {
        self.slow_search_warning = threshold;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> SearchConfig {
        SearchConfig {
            max_cost: Cost::MAX,
            loose: false,
            slow_search_warning: Some(Duration::from_millis(500)),
        }
    }
}
