use crate::search::{
    AStarSearch, BreadthFirstSearch, DijkstraSearch, SearchStats, SearchStatus,
    WeightedAStarSearch,
};
use crate::{grid::Grid, Cost, Path, Point};

use std::fmt;

/// A search that runs one expansion at a time.
///
/// The usual cycle is:
/// 1. [`initialize`](Pathfinder::initialize) with a start and a target
/// 2. call [`step`](Pathfinder::step) until [`is_terminal`](Pathfinder::is_terminal) returns
///    `true`, drawing the returned Points as explored
/// 3. read the result from [`solution`](Pathfinder::solution)
///
/// A Pathfinder never writes to the Grid. The Grid is passed to every step instead of being
/// stored, so that it can be edited between runs.
///
/// ## Examples
/// ```
/// use lockstep_pathfinding::{prelude::*, Algorithm};
///
/// let grid: CellGrid = "
///     S.#..
///     ..#..
///     ....T
/// "
/// .parse()
/// .unwrap();
///
/// let mut pathfinder = Algorithm::BreadthFirst.build();
/// pathfinder.initialize((0, 0), (4, 2));
///
/// let mut explored = vec![];
/// while !pathfinder.is_terminal() {
///     explored.extend(pathfinder.step(&grid));
/// }
///
/// assert_eq!(pathfinder.status(), SearchStatus::Solved);
/// assert_eq!(pathfinder.solution().unwrap().cost(), 6);
/// assert!(explored.contains(&(4, 2)));
/// ```
pub trait Pathfinder: fmt::Debug {
    /// A human readable name of the algorithm
    fn name(&self) -> &'static str;

    /// Discards any previous run and starts a new one from `start` towards `target`.
    ///
    /// `start` and `target` are expected to lie on the Grid and not on a wall.
    fn initialize(&mut self, start: Point, target: Point);

    /// Expands exactly one Point.
    ///
    /// Returns the Points that were added to the frontier or got a cheaper Path, preceded by
    /// the expanded Point itself unless it is the start. Returns an empty list once the search
    /// is terminal, or if it was never initialized.
    fn step(&mut self, grid: &dyn Grid) -> Vec<Point>;

    /// The Path from start to target, both inclusive.
    ///
    /// `None` until the target was expanded, and forever if the target is unreachable.
    fn solution(&self) -> Option<&Path<Point>>;

    /// Where the current run is in its lifecycle
    fn status(&self) -> SearchStatus;

    /// Counters of the current run
    fn stats(&self) -> SearchStats;

    /// Whether `pos` has been expanded in the current run
    fn is_closed(&self, pos: Point) -> bool;

    /// Whether further steps would be no-ops
    fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }
}

/// Identifies one of the available searches
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// [`DijkstraSearch`]
    Dijkstra,
    /// [`BreadthFirstSearch`]
    BreadthFirst,
    /// [`AStarSearch`]
    AStar,
    /// [`WeightedAStarSearch`]
    WeightedAStar {
        /// the factor the Heuristic is multiplied with. Must be greater than 1.
        weight: Cost,
    },
}

impl Algorithm {
    /// All four searches, with the given weight for the weighted A*
    ///
    /// ```
    /// # use lockstep_pathfinding::Algorithm;
    /// let names: Vec<_> = Algorithm::lineup(2).iter().map(|a| a.name()).collect();
    ///
    /// assert_eq!(
    ///     names,
    ///     vec!["Dijkstra", "Breadth First Search", "A* Search", "Strong A* Search"]
    /// );
    /// ```
    pub fn lineup(weight: Cost) -> [Algorithm; 4] {
        [
            Algorithm::Dijkstra,
            Algorithm::BreadthFirst,
            Algorithm::AStar,
            Algorithm::WeightedAStar { weight },
        ]
    }

    /// The name of the search this creates
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::BreadthFirst => "Breadth First Search",
            Algorithm::AStar => "A* Search",
            Algorithm::WeightedAStar { .. } => "Strong A* Search",
        }
    }

    /// Creates an uninitialized instance of the search
    ///
    /// ## Panics
    /// For a [`WeightedAStar`](Algorithm::WeightedAStar) with a weight below 2.
    #[track_caller]
    pub fn build(self) -> Box<dyn Pathfinder> {
        match self {
            Algorithm::Dijkstra => Box::new(DijkstraSearch::new()),
            Algorithm::BreadthFirst => Box::new(BreadthFirstSearch::new()),
            Algorithm::AStar => Box::new(AStarSearch::new()),
            Algorithm::WeightedAStar { weight } => Box::new(WeightedAStarSearch::new(weight)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::WeightedAStar { weight } => write!(fmt, "{} (x{})", self.name(), weight),
            _ => write!(fmt, "{}", self.name()),
        }
    }
}
