//! The 4-connected Neighborhood every search moves in
//!
//! Agents move up, down, left or right. Diagonal steps are not part of the Neighborhood.
//!
//! ```no_code
//! A: Agent, o: reachable in one step
//!   o
//!   |
//! o-A-o
//!   |
//!   o
//! ```

use crate::{Cost, Point};

/// One of the 4 cardinal directions.
///
/// The order of the variants is the order in which neighbors are visited during an expansion,
/// which decides between equally short Paths.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    UP = 0,
    RIGHT = 1,
    DOWN = 2,
    LEFT = 3,
}
pub use self::Dir::*;

const UNIT_CIRCLE: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

impl Dir {
    /// All directions in expansion order: up, right, down, left
    pub fn all() -> std::iter::Copied<std::slice::Iter<'static, Dir>> {
        [UP, RIGHT, DOWN, LEFT].iter().copied()
    }
    fn num(self) -> usize {
        self as usize
    }
}

/// The Point one step from `pos` in `dir`.
///
/// Returns `None` if that step would leave the non-negative quadrant. The upper bounds of
/// the Grid are not known here; those are checked through [`Grid::in_bounds`](crate::grid::Grid::in_bounds).
pub fn get_in_dir(pos: Point, dir: Dir) -> Option<Point> {
    let (dx, dy) = UNIT_CIRCLE[dir.num()];
    Some((pos.0.checked_add_signed(dx)?, pos.1.checked_add_signed(dy)?))
}

/// All candidate neighbors of `pos` in expansion order.
///
/// ## Examples
/// ```
/// use lockstep_pathfinding::neighbors::get_all_neighbors;
///
/// assert_eq!(
///     get_all_neighbors((0, 2)).collect::<Vec<_>>(),
///     vec![(0, 1), (1, 2), (0, 3)],
/// );
/// ```
pub fn get_all_neighbors(pos: Point) -> impl Iterator<Item = Point> {
    Dir::all().filter_map(move |dir| get_in_dir(pos, dir))
}

/// The Manhattan distance between two Points.
///
/// This is the exact Cost of the shortest Path on an empty Grid, which makes it an admissible
/// and consistent Heuristic for every search in this crate.
pub fn heuristic(point: Point, goal: Point) -> Cost {
    point.0.abs_diff(goal.0) + point.1.abs_diff(goal.1)
}
