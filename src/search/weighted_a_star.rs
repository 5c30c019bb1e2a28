use super::frontier::Heap;
use super::{Search, Strategy};
use crate::{neighbors::heuristic, Cost, Point};

#[derive(Clone, Copy, Debug)]
pub(crate) struct WeightedAStar {
    weight: Cost,
}

impl Strategy for WeightedAStar {
    type Frontier = Heap;
    const RELAX: bool = true;

    fn name(&self) -> &'static str {
        "Strong A* Search"
    }
    fn priority(&self, cost: Cost, pos: Point, target: Point) -> Cost {
        cost.saturating_add(self.weight.saturating_mul(heuristic(pos, target)))
    }
}

/// Stepwise A* Search with an inflated Heuristic ("Strong A*").
///
/// Works like [`AStarSearch`](crate::AStarSearch), except that the Manhattan distance is
/// multiplied by `weight` before it is added to the Cost from the start. This pulls the search
/// towards the target much harder, usually finishing after fewer expansions. The Heuristic
/// is no longer admissible, so the resulting Path may be longer than the shortest one, but
/// never more than `weight` times as long.
///
/// ## Examples
/// ```
/// use lockstep_pathfinding::{grid::CellGrid, Pathfinder, WeightedAStarSearch};
///
/// let grid: CellGrid = "
///     .........
///     .#######.
///     .#.....#.
///     S#.###.#T
///     .........
/// "
/// .parse()
/// .unwrap();
///
/// let mut strong = WeightedAStarSearch::new(2);
/// strong.initialize((0, 3), (8, 3));
///
/// while !strong.is_terminal() {
///     strong.step(&grid);
/// }
///
/// let cost = strong.solution().unwrap().cost();
/// assert!(cost >= 10 && cost <= 2 * 10);
/// ```
#[derive(Debug)]
pub struct WeightedAStarSearch(pub(super) Search<WeightedAStar>);

impl WeightedAStarSearch {
    /// The weight used when none is configured
    pub const DEFAULT_WEIGHT: Cost = 2;

    /// Creates an uninitialized search that multiplies the Heuristic by `weight`
    ///
    /// ## Panics
    /// If `weight < 2`. A weight of 1 is plain [`AStarSearch`](crate::AStarSearch).
    #[track_caller]
    pub fn new(weight: Cost) -> WeightedAStarSearch {
        assert!(weight > 1, "heuristic weight must be greater than 1, got {}", weight);
        WeightedAStarSearch(Search::new(WeightedAStar { weight }))
    }

    /// The factor applied to the Heuristic
    pub fn weight(&self) -> Cost {
        self.0.strategy.weight
    }
}

impl Default for WeightedAStarSearch {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    fn solve(pathfinder: &mut dyn Pathfinder, grid: &CellGrid, start: Point, target: Point) {
        pathfinder.initialize(start, target);
        while !pathfinder.is_terminal() {
            pathfinder.step(grid);
        }
    }

    #[test]
    #[should_panic(expected = "greater than 1")]
    fn weight_one_is_rejected() {
        WeightedAStarSearch::new(1);
    }

    #[test]
    fn fewer_expansions_than_a_star() {
        let grid = CellGrid::new(5, 5);
        let (start, target) = ((0, 0), (4, 4));

        let mut a_star = AStarSearch::new();
        let mut strong = WeightedAStarSearch::default();
        solve(&mut a_star, &grid, start, target);
        solve(&mut strong, &grid, start, target);

        // every Point of the square lies on a shortest Path, so plain A* has to look at all of them
        assert_eq!(a_star.stats().expanded, 25);
        assert_eq!(strong.stats().expanded, 9);

        let path = strong.solution().unwrap();
        assert_eq!(path.cost(), 8);
        assert_eq!(
            path.path,
            vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (4, 1), (4, 2), (4, 3), (4, 4)]
        );
    }

    #[test]
    fn open_point_takes_cheaper_path() {
        let grid: CellGrid = "
            .....
            T#...
            ....S
        "
        .parse()
        .unwrap();
        let mut strong = WeightedAStarSearch::new(2);
        strong.initialize((4, 2), (0, 1));

        assert_eq!(strong.step(&grid), vec![(4, 1), (3, 2)]);
        assert_eq!(strong.step(&grid), vec![(4, 1), (4, 0), (3, 1)]);
        assert_eq!(strong.step(&grid), vec![(3, 1), (3, 0), (2, 1)]);
        // (2, 2) is first reached around the top at cost 4
        assert_eq!(strong.step(&grid), vec![(2, 1), (2, 0), (2, 2)]);
        // then directly along the bottom at cost 2
        assert_eq!(strong.step(&grid), vec![(3, 2), (2, 2)]);
        assert_eq!(strong.step(&grid), vec![(2, 2), (1, 2)]);

        while !strong.is_terminal() {
            strong.step(&grid);
        }

        let path = strong.solution().unwrap();
        assert_eq!(path.cost(), 5);
        assert_eq!(
            path.path,
            vec![(4, 2), (3, 2), (2, 2), (1, 2), (0, 2), (0, 1)]
        );
        // (2, 2) sits in the frontier twice but is expanded once
        assert_eq!(strong.stats().expanded, 9);
    }

    #[test]
    fn huge_weight_saturates() {
        let grid: CellGrid = "
            S...
            .##.
            ...T
        "
        .parse()
        .unwrap();
        let mut strong = WeightedAStarSearch::new(usize::MAX);
        solve(&mut strong, &grid, (0, 0), (3, 2));

        assert_eq!(strong.status(), SearchStatus::Solved);
        assert_eq!(strong.solution().unwrap().cost(), 5);
    }

    #[test]
    fn cost_stays_within_weight() {
        let grid: CellGrid = "
            ..........
            ..........
            ....#.....
            S...#....T
            ....#.....
            ..........
        "
        .parse()
        .unwrap();
        let (start, target) = ((0, 3), (9, 3));

        let mut a_star = AStarSearch::new();
        let mut strong = WeightedAStarSearch::new(3);
        solve(&mut a_star, &grid, start, target);
        solve(&mut strong, &grid, start, target);

        let optimal = a_star.solution().unwrap().cost();
        let cost = strong.solution().unwrap().cost();
        assert_eq!(optimal, 13);
        assert!(cost >= optimal);
        assert!(cost <= strong.weight() * optimal);
    }
}
