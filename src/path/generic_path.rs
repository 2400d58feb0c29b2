use super::Cost;

use std::fmt;
use std::ops::Index;

/// A Path from a start to a goal, both included, together with its total cost.
///
/// A Path always holds at least one Point.
#[derive(Clone, PartialEq, Eq)]
pub struct Path<P> {
    path: Vec<P>,
    cost: Cost,
}

impl<P: Copy> Path<P> {
    pub(crate) fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        debug_assert!(!path.is_empty(), "a Path needs at least one Point");
        Path { path, cost }
    }

    /// The sum of the costs of all steps along the Path.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of Points on the Path, including the start.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always `false`, since a Path contains at least its start.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The number of steps, one less than [`len`](Path::len).
    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }

    /// The first Point.
    pub fn start(&self) -> P {
        self.path[0]
    }

    /// The last Point.
    pub fn end(&self) -> P {
        self.path[self.path.len() - 1]
    }

    /// Iterates over the Points from start to end.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, P>> {
        self.path.iter().copied()
    }

    /// The Points as a slice.
    pub fn as_slice(&self) -> &[P] {
        &self.path
    }

    /// Converts the Path into its Points.
    pub fn into_vec(self) -> Vec<P> {
        self.path
    }
}

impl<P> Index<usize> for Path<P> {
    type Output = P;
    #[track_caller]
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P: Copy> IntoIterator for Path<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;
    fn into_iter(self) -> Self::IntoIter {
        self.path.into_iter()
    }
}

impl<'a, P: Copy> IntoIterator for &'a Path<P> {
    type Item = P;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, P>>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: fmt::Debug> fmt::Debug for Path<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path[cost {}] ", self.cost)?;
        f.debug_list().entries(self.path.iter()).finish()
    }
}
