use crate::Point;

/// Decides which cells a traverser may enter.
///
/// The traverser is an opaque token handed through unchanged from the call
/// to [`find_path`](crate::find_path), so one predicate can answer for units
/// with different movement capabilities. Bounds checking is up to the
/// implementation: cells outside the grid should simply return `false`.
///
/// The answers must not change during a single search.
///
/// Any `Fn(&T, i32, i32) -> bool` is a `TraversalPred<T>`:
/// ```
/// use tile_pathfinding::prelude::*;
///
/// let inside = |_: &(), x: i32, y: i32| (0..4).contains(&x) && (0..4).contains(&y);
/// assert!(inside.can_traverse(&(), 3, 0));
/// assert!(!inside.can_traverse(&(), -1, 0));
/// ```
pub trait TraversalPred<T: ?Sized> {
    /// Returns whether `traverser` can enter the cell at `(x, y)`.
    fn can_traverse(&self, traverser: &T, x: i32, y: i32) -> bool;
}

impl<T: ?Sized, F> TraversalPred<T> for F
where
    F: Fn(&T, i32, i32) -> bool,
{
    fn can_traverse(&self, traverser: &T, x: i32, y: i32) -> bool {
        self(traverser, x, y)
    }
}

/// Something that moves over tiles of type `C` and knows which of them it can cross.
///
/// Any `Fn(&C) -> bool` is a `Traverser<C>`.
pub trait Traverser<C> {
    /// Returns whether this traverser can cross `tile`.
    fn can_traverse(&self, tile: &C) -> bool;
}

impl<C, F> Traverser<C> for F
where
    F: Fn(&C) -> bool,
{
    fn can_traverse(&self, tile: &C) -> bool {
        self(tile)
    }
}

/// A bounded grid of tiles, stored row by row.
///
/// As a [`TraversalPred`] it rejects every coordinate outside of the grid and
/// asks the [`Traverser`] about the tile at every coordinate inside of it.
///
/// ## Examples
/// ```
/// use tile_pathfinding::prelude::*;
///
/// let mut grid = TileGrid::new(3, 2, '.');
/// grid.set((1, 1), '#');
///
/// let walker = |tile: &char| *tile == '.';
/// assert!(grid.can_traverse(&walker, 0, 0));
/// assert!(!grid.can_traverse(&walker, 1, 1));
/// assert!(!grid.can_traverse(&walker, 3, 0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid<C> {
    width: usize,
    height: usize,
    tiles: Vec<C>,
}

impl<C> TileGrid<C> {
    /// Creates a `width` x `height` grid filled with `fill`.
    pub fn new(width: usize, height: usize, fill: C) -> TileGrid<C>
    where
        C: Clone,
    {
        TileGrid {
            width,
            height,
            tiles: vec![fill; width * height],
        }
    }

    /// Creates a `width` x `height` grid, calling `tile` for every Point.
    pub fn from_fn(width: usize, height: usize, mut tile: impl FnMut(Point) -> C) -> TileGrid<C> {
        let mut tiles = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                tiles.push(tile((x as i32, y as i32)));
            }
        }
        TileGrid {
            width,
            height,
            tiles,
        }
    }

    /// Creates a grid from a list of rows. `rows[y][x]` is the tile at `(x, y)`.
    ///
    /// ## Panics
    /// If the rows don't all have the same length.
    #[track_caller]
    pub fn from_rows<R: AsRef<[C]>>(rows: &[R]) -> TileGrid<C>
    where
        C: Clone,
    {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut tiles = Vec::with_capacity(width * rows.len());
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), width, "TileGrid rows must have the same length");
            tiles.extend_from_slice(row);
        }
        TileGrid {
            width,
            height: rows.len(),
            tiles,
        }
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Point) -> bool {
        self.index_of(pos).is_some()
    }

    /// The tile at `pos`, if `pos` lies inside the grid.
    pub fn get(&self, pos: Point) -> Option<&C> {
        self.index_of(pos).map(|i| &self.tiles[i])
    }

    /// Replaces the tile at `pos`.
    ///
    /// ## Panics
    /// If `pos` lies outside the grid.
    #[track_caller]
    pub fn set(&mut self, pos: Point, tile: C) {
        let index = self
            .index_of(pos)
            .unwrap_or_else(|| panic!("{:?} is outside of the TileGrid", pos));
        self.tiles[index] = tile;
    }

    fn index_of(&self, (x, y): Point) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
}

impl<C, T: Traverser<C>> TraversalPred<T> for TileGrid<C> {
    fn can_traverse(&self, traverser: &T, x: i32, y: i32) -> bool {
        self.get((x, y))
            .map_or(false, |tile| traverser.can_traverse(tile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows() {
        let grid = TileGrid::from_rows(&[[1, 2, 3], [4, 5, 6]]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get((0, 0)), Some(&1));
        assert_eq!(grid.get((2, 1)), Some(&6));
        assert_eq!(grid.get((3, 1)), None);
        assert_eq!(grid.get((0, -1)), None);
    }

    #[test]
    fn from_fn_matches_rows() {
        let grid = TileGrid::from_fn(3, 2, |(x, y)| x + 3 * y);
        assert_eq!(grid, TileGrid::from_rows(&[[0, 1, 2], [3, 4, 5]]));
    }

    #[test]
    #[should_panic]
    fn ragged_rows() {
        let rows: Vec<Vec<u8>> = vec![vec![0, 0], vec![0]];
        TileGrid::from_rows(&rows[..]);
    }

    #[test]
    fn traversers_see_different_grids() {
        // 0 = ground, 1 = water, 2 = wall
        let grid = TileGrid::from_rows(&[[0u8, 1, 2]]);

        let walker = |tile: &u8| *tile == 0;
        let swimmer = |tile: &u8| *tile != 2;

        assert!(grid.can_traverse(&walker, 0, 0));
        assert!(!grid.can_traverse(&walker, 1, 0));
        assert!(grid.can_traverse(&swimmer, 1, 0));
        assert!(!grid.can_traverse(&swimmer, 2, 0));
        assert!(!grid.can_traverse(&swimmer, -1, 0));
    }

    #[test]
    fn closures_as_predicates() {
        let pred = |range: &i32, x: i32, y: i32| x.abs() + y.abs() <= *range;
        assert!(pred.can_traverse(&2, 1, -1));
        assert!(!pred.can_traverse(&1, 1, -1));
    }
}
