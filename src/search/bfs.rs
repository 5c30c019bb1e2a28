use super::frontier::Queue;
use super::{Search, Strategy};
use crate::{Cost, Point};

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BreadthFirst;

impl Strategy for BreadthFirst {
    type Frontier = Queue;
    // the first discovery of a Point is always a shortest one
    const RELAX: bool = false;

    fn name(&self) -> &'static str {
        "Breadth First Search"
    }
    fn priority(&self, cost: Cost, _: Point, _: Point) -> Cost {
        cost
    }
}

/// Stepwise [Breadth First Search](https://en.wikipedia.org/wiki/Breadth-first_search).
///
/// Points are expanded in the order they were discovered. Every Point enters the frontier at
/// most once, so the first Path found to a Point is kept. Since every step costs the same,
/// that Path is a shortest one.
///
/// ## Examples
/// ```
/// use lockstep_pathfinding::{grid::CellGrid, BreadthFirstSearch, Pathfinder};
///
/// let grid = CellGrid::new(3, 3);
/// let mut bfs = BreadthFirstSearch::new();
/// bfs.initialize((0, 0), (2, 2));
///
/// // the start itself is not reported, only its neighbors
/// assert_eq!(bfs.step(&grid), vec![(1, 0), (0, 1)]);
/// // then the expanded Point, followed by what it discovered
/// assert_eq!(bfs.step(&grid), vec![(1, 0), (2, 0), (1, 1)]);
/// ```
#[derive(Debug)]
pub struct BreadthFirstSearch(pub(super) Search<BreadthFirst>);

impl BreadthFirstSearch {
    /// Creates an uninitialized search
    pub fn new() -> BreadthFirstSearch {
        BreadthFirstSearch(Search::new(BreadthFirst))
    }
}

impl Default for BreadthFirstSearch {
    fn default() -> Self {
        Self::new()
    }
}
