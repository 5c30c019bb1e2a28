#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to run Pathfinding Algorithms on a Grid side by side, one step at a time.
//!
//! ## Introduction
//! Regular implementations of A* or Dijkstra run to completion in a single call and only hand
//! back the final Path. That hides everything that makes the algorithms different from each
//! other: which Tiles they look at, in which order, and how many of them.
//!
//! This crate splits every search into single expansions. A [`Pathfinder`] is
//! [initialized](Pathfinder::initialize) with a start and a target and then advanced with
//! [`step`](Pathfinder::step), which expands exactly one Tile and returns every Tile that was
//! touched in the process. Several Pathfinders can be advanced in lockstep to watch their
//! explored regions grow, which is what the [`Driver`] does.
//!
//! Four searches are provided, all moving along the 4 cardinal directions (see [`neighbors`]):
//! - [`BreadthFirstSearch`]: explores in discovery order
//! - [`DijkstraSearch`]: explores by Cost from the start
//! - [`AStarSearch`]: explores by Cost plus the Manhattan distance to the target
//! - [`WeightedAStarSearch`]: like A*, but with the distance multiplied by a weight > 1,
//!   trading the guarantee of a shortest Path for fewer expansions
//!
//! ## Examples
//! Stepping a single search:
//! ```
//! use lockstep_pathfinding::prelude::*;
//!
//! // . = empty, # = wall, S = start, T = target
//! let grid: CellGrid = "
//!     S.#..
//!     ..#..
//!     .....
//!     ..#.T
//! "
//! .parse()
//! .unwrap();
//!
//! let mut a_star = AStarSearch::new();
//! a_star.initialize((0, 0), (4, 3));
//!
//! let mut steps = 0;
//! while !a_star.is_terminal() {
//!     let explored = a_star.step(&grid);
//!     assert!(!explored.is_empty());
//!     steps += 1;
//! }
//!
//! let path = a_star.solution().unwrap();
//! assert_eq!(path.cost(), 7);
//! assert_eq!(path.start(), Some(&(0, 0)));
//! assert_eq!(path.goal(), Some(&(4, 3)));
//! assert_eq!(steps, a_star.stats().expanded);
//! ```
//!
//! The Grid is only ever read through the [`Grid`](grid::Grid) Trait, so any storage works as
//! long as it can classify a Point and tell whether it lies on the Grid.
//!
//! ### Running all searches side by side
//! ```
//! use lockstep_pathfinding::prelude::*;
//!
//! let mut driver = Driver::new(DriverConfig::INSTANT);
//! driver.set_wall((15, 10)).unwrap();
//!
//! let mut drawn = 0;
//! driver.run(|reports| {
//!     // every report holds the Tiles to draw for one of the algorithms
//!     drawn += reports.iter().map(|report| report.explored.len()).sum::<usize>();
//! });
//!
//! assert!(driver.all_terminal());
//! assert!(drawn > 0);
//! // the wall sits right between start and target
//! let bfs = driver.lane(Algorithm::BreadthFirst).unwrap();
//! assert_eq!(bfs.pathfinder().solution().unwrap().cost(), 18);
//! ```

/// A shorthand for Points on the grid, as `(column, row)`
pub type Point = (usize, usize);

/// The Cost of a Path. Every step on the Grid costs `1`.
pub type Cost = usize;

/// A [`HashMap`](hashbrown::HashMap) keyed by Points
pub type PointMap<V> = hashbrown::HashMap<Point, V>;

pub mod grid;

pub mod neighbors;

mod path;
pub use self::path::Path;

mod search;
pub use self::search::{
    AStarSearch, BreadthFirstSearch, DijkstraSearch, SearchStats, SearchStatus,
    WeightedAStarSearch,
};

mod pathfinder;
pub use self::pathfinder::{Algorithm, Pathfinder};

mod driver;
pub use self::driver::{Driver, DriverConfig, EditError, Lane, StepReport};

/// The most commonly used types, for glob imports
pub mod prelude {
    pub use crate::grid::{CellClass, CellGrid, Grid, GridError, Mark};
    pub use crate::{
        AStarSearch, Algorithm, BreadthFirstSearch, DijkstraSearch, Driver, DriverConfig, Path,
        Pathfinder, Point, SearchStats, SearchStatus, WeightedAStarSearch,
    };
}
