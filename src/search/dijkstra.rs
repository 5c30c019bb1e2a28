use super::frontier::Heap;
use super::{Search, Strategy};
use crate::{Cost, Point};

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Dijkstra;

impl Strategy for Dijkstra {
    type Frontier = Heap;
    const RELAX: bool = true;

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
    fn priority(&self, cost: Cost, _: Point, _: Point) -> Cost {
        cost
    }
}

/// Stepwise [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// The frontier is ordered by the Cost from the start, ties are broken by insertion order.
/// When a cheaper Path to an open Point is found, the Point is reinserted and the old entry is
/// skipped once it comes up. The search ends when the target is popped from the frontier.
///
/// ## Examples
/// ```
/// use lockstep_pathfinding::{grid::CellGrid, DijkstraSearch, Pathfinder};
///
/// let grid = CellGrid::new(5, 5);
/// let mut dijkstra = DijkstraSearch::new();
/// dijkstra.initialize((0, 0), (4, 4));
///
/// while !dijkstra.is_terminal() {
///     dijkstra.step(&grid);
/// }
///
/// assert_eq!(dijkstra.solution().unwrap().cost(), 8);
/// // Dijkstra has no sense of direction: every Point was expanded
/// assert_eq!(dijkstra.stats().expanded, 25);
/// ```
#[derive(Debug)]
pub struct DijkstraSearch(pub(super) Search<Dijkstra>);

impl DijkstraSearch {
    /// Creates an uninitialized search
    pub fn new() -> DijkstraSearch {
        DijkstraSearch(Search::new(Dijkstra))
    }
}

impl Default for DijkstraSearch {
    fn default() -> Self {
        Self::new()
    }
}
