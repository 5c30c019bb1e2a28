use super::frontier::Heap;
use super::{Search, Strategy};
use crate::{neighbors::heuristic, Cost, Point};

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct AStar;

impl Strategy for AStar {
    type Frontier = Heap;
    const RELAX: bool = true;

    fn name(&self) -> &'static str {
        "A* Search"
    }
    fn priority(&self, cost: Cost, pos: Point, target: Point) -> Cost {
        cost + heuristic(pos, target)
    }
}

/// Stepwise [A* Search](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The frontier is ordered by the Cost from the start plus the Manhattan distance to the
/// target. Ties go to the lower Cost from the start, then to the earlier insertion. The
/// Heuristic never overestimates, so the Paths are as short as the ones of
/// [`DijkstraSearch`](crate::DijkstraSearch), usually with far fewer expansions.
///
/// ## Examples
/// ```
/// use lockstep_pathfinding::{grid::CellGrid, AStarSearch, Pathfinder};
///
/// let grid = CellGrid::new(5, 5);
/// let mut a_star = AStarSearch::new();
/// a_star.initialize((0, 2), (4, 2));
///
/// while !a_star.is_terminal() {
///     a_star.step(&grid);
/// }
///
/// assert_eq!(a_star.solution().unwrap().cost(), 4);
/// // only the Points on the straight line were expanded
/// assert_eq!(a_star.stats().expanded, 5);
/// ```
#[derive(Debug)]
pub struct AStarSearch(pub(super) Search<AStar>);

impl AStarSearch {
    /// Creates an uninitialized search
    pub fn new() -> AStarSearch {
        AStarSearch(Search::new(AStar))
    }
}

impl Default for AStarSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn heads_straight_for_the_target() {
        let grid = CellGrid::new(5, 3);
        let mut a_star = AStarSearch::new();
        a_star.initialize((0, 0), (4, 0));

        while !a_star.is_terminal() {
            a_star.step(&grid);
        }

        let path = a_star.solution().unwrap();
        assert_eq!(path.path, vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        assert_eq!(a_star.stats().expanded, 5);
        assert!(!a_star.is_closed((0, 1)));
    }

    #[test]
    fn detour() {
        let grid: CellGrid = "
            .....
            .###.
            S#.#T
            .....
        "
        .parse()
        .unwrap();
        let mut a_star = AStarSearch::new();
        a_star.initialize((0, 2), (4, 2));

        while !a_star.is_terminal() {
            a_star.step(&grid);
        }

        // around the bottom: 6 steps, around the top: 8 steps
        let path = a_star.solution().unwrap();
        assert_eq!(path.cost(), 6);
        assert_eq!(
            path.path,
            vec![(0, 2), (0, 3), (1, 3), (2, 3), (3, 3), (4, 3), (4, 2)]
        );
    }
}
