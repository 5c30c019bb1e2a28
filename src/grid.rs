//! The Grid the searches run on
//!
//! The searches only ever read the Grid through the [`Grid`] Trait. Writing explored cells and
//! solution Paths back is the job of whoever drives the searches (see [`Driver`](crate::Driver)),
//! which is why [`CellGrid`] carries a [`Mark`] per cell that the Trait does not expose.

use crate::Point;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// What occupies a cell, as far as a search is concerned
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellClass {
    /// Free to walk across
    Empty,
    /// Never walkable
    Wall,
    /// Where the searches start
    Start,
    /// What the searches look for
    Target,
}

impl CellClass {
    /// Only walls block a Path
    pub fn is_traversable(self) -> bool {
        self != CellClass::Wall
    }

    fn symbol(self) -> char {
        match self {
            CellClass::Empty => '.',
            CellClass::Wall => '#',
            CellClass::Start => 'S',
            CellClass::Target => 'T',
        }
    }
}

/// Read access to a Grid.
///
/// Implementors must answer consistently for the duration of a single
/// [`step`](crate::Pathfinder::step).
pub trait Grid {
    /// The occupancy of the cell at `pos`. Only called for Points where
    /// [`in_bounds`](Grid::in_bounds) returned `true`.
    fn classify(&self, pos: Point) -> CellClass;
    /// Whether `pos` lies on the Grid.
    fn in_bounds(&self, pos: Point) -> bool;

    /// Whether a Path may lead across `pos`. Points outside of the Grid are not walkable.
    fn is_walkable(&self, pos: Point) -> bool {
        self.in_bounds(pos) && self.classify(pos).is_traversable()
    }
}

/// Progress drawn onto a cell by a driver
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    /// The cell was reached by a search
    Explored,
    /// The cell is part of a found Path
    Solution,
}

/// Errors from building or editing a [`CellGrid`]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The text contained no cells
    #[error("grid has no cells")]
    Empty,
    /// A row in the text had a different length than the first one
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// index of the offending row
        row: usize,
        /// length of the first row
        expected: usize,
        /// length of the offending row
        found: usize,
    },
    /// A symbol that does not describe a cell
    #[error("unknown cell symbol {symbol:?} at {pos:?}")]
    UnknownCell {
        /// the symbol
        symbol: char,
        /// where it was found
        pos: Point,
    },
    /// A Point outside of the Grid
    #[error("{pos:?} is outside of the grid")]
    OutOfBounds {
        /// the Point
        pos: Point,
    },
    /// The text had no start or no target
    #[error("grid has no {0:?} cell")]
    MissingEndpoint(CellClass),
    /// The text had more than one start or target
    #[error("grid has more than one {0:?} cell")]
    DuplicateEndpoint(CellClass),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Tile {
    class: CellClass,
    mark: Option<Mark>,
}

impl Tile {
    const EMPTY: Tile = Tile {
        class: CellClass::Empty,
        mark: None,
    };
}

/// A rectangular Grid stored row by row
///
/// ## Examples
/// ```
/// use lockstep_pathfinding::grid::{CellClass, CellGrid, Grid};
///
/// let grid: CellGrid = "
///     S.#
///     ..#
///     ..T
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!((grid.width(), grid.height()), (3, 3));
/// assert_eq!(grid.find(CellClass::Target), Some((2, 2)));
/// assert!(!grid.is_walkable((2, 0)));
/// assert!(!grid.is_walkable((3, 0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl CellGrid {
    /// Creates a Grid of `width * height` empty cells
    pub fn new(width: usize, height: usize) -> CellGrid {
        CellGrid {
            width,
            height,
            tiles: vec![Tile::EMPTY; width * height],
        }
    }

    /// The number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, (x, y): Point) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(x + y * self.width)
    }

    fn tile_mut(&mut self, pos: Point) -> Result<&mut Tile, GridError> {
        let index = self.index(pos).ok_or(GridError::OutOfBounds { pos })?;
        Ok(&mut self.tiles[index])
    }

    /// The occupancy at `pos`, or `None` outside of the Grid
    pub fn get(&self, pos: Point) -> Option<CellClass> {
        self.index(pos).map(|i| self.tiles[i].class)
    }

    /// Changes the occupancy at `pos`. Any Mark on the cell is removed.
    pub fn set(&mut self, pos: Point, class: CellClass) -> Result<(), GridError> {
        *self.tile_mut(pos)? = Tile { class, mark: None };
        Ok(())
    }

    /// Draws `mark` onto the cell at `pos`, replacing any previous Mark.
    ///
    /// Only empty cells take Marks: start, target, walls and Points outside of the Grid are
    /// left untouched. Returns whether the Mark was drawn.
    pub fn mark(&mut self, pos: Point, mark: Mark) -> bool {
        match self.tile_mut(pos) {
            Ok(tile) if tile.class == CellClass::Empty => {
                tile.mark = Some(mark);
                true
            }
            _ => false,
        }
    }

    /// The Mark at `pos`, if any
    pub fn mark_at(&self, pos: Point) -> Option<Mark> {
        self.index(pos).and_then(|i| self.tiles[i].mark)
    }

    /// Removes all Marks while keeping the occupancy
    pub fn clear_marks(&mut self) {
        self.tiles.iter_mut().for_each(|tile| tile.mark = None);
    }

    /// Resets every cell to [`CellClass::Empty`] without Marks
    pub fn clear(&mut self) {
        self.tiles.iter_mut().for_each(|tile| *tile = Tile::EMPTY);
    }

    /// The first cell of the given class, scanning row by row
    pub fn find(&self, class: CellClass) -> Option<Point> {
        self.tiles
            .iter()
            .position(|tile| tile.class == class)
            .map(|i| (i % self.width, i / self.width))
    }

    /// All Points carrying `mark`, row by row
    pub fn marked(&self, mark: Mark) -> impl Iterator<Item = Point> + '_ {
        let width = self.width;
        self.tiles
            .iter()
            .enumerate()
            .filter(move |(_, tile)| tile.mark == Some(mark))
            .map(move |(i, _)| (i % width, i / width))
    }
}

impl Grid for CellGrid {
    fn classify(&self, pos: Point) -> CellClass {
        self.get(pos).unwrap_or(CellClass::Wall)
    }
    fn in_bounds(&self, pos: Point) -> bool {
        self.index(pos).is_some()
    }
}

impl FromStr for CellGrid {
    type Err = GridError;

    /// Parses a Grid from rows of `.` (empty), `#` (wall), `S` (start) and `T` (target).
    ///
    /// Blank lines and surrounding whitespace are ignored. A Grid may contain at most one start
    /// and one target, but is not required to contain either.
    fn from_str(text: &str) -> Result<CellGrid, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut grid = CellGrid::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, symbol) in row.chars().enumerate() {
                let class = match symbol {
                    '.' => CellClass::Empty,
                    '#' => CellClass::Wall,
                    'S' => CellClass::Start,
                    'T' => CellClass::Target,
                    _ => return Err(GridError::UnknownCell { symbol, pos: (x, y) }),
                };
                if matches!(class, CellClass::Start | CellClass::Target)
                    && grid.find(class).is_some()
                {
                    return Err(GridError::DuplicateEndpoint(class));
                }
                grid.set((x, y), class)?;
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for CellGrid {
    /// Start, target and walls are drawn over Marks. Explored cells are drawn as `o`,
    /// cells on a solution Path as `*`.
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for row in self.tiles.chunks(self.width.max(1)) {
            for tile in row {
                let symbol = match (tile.class, tile.mark) {
                    (CellClass::Empty, Some(Mark::Explored)) => 'o',
                    (CellClass::Empty, Some(Mark::Solution)) => '*',
                    (class, _) => class.symbol(),
                };
                write!(fmt, "{}", symbol)?;
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let grid: CellGrid = "S.#\n..#\n..T".parse().unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get((0, 0)), Some(CellClass::Start));
        assert_eq!(grid.get((2, 1)), Some(CellClass::Wall));
        assert_eq!(grid.get((2, 2)), Some(CellClass::Target));
        assert_eq!(grid.get((3, 2)), None);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<CellGrid>(), Err(GridError::Empty));
        assert_eq!(
            "...\n..".parse::<CellGrid>(),
            Err(GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "..x".parse::<CellGrid>(),
            Err(GridError::UnknownCell {
                symbol: 'x',
                pos: (2, 0)
            })
        );
        assert_eq!(
            "S.S".parse::<CellGrid>(),
            Err(GridError::DuplicateEndpoint(CellClass::Start))
        );
    }

    #[test]
    fn out_of_bounds_is_not_walkable() {
        let grid = CellGrid::new(2, 2);

        assert!(grid.is_walkable((1, 1)));
        assert!(!grid.is_walkable((2, 1)));
        assert!(!grid.is_walkable((1, 2)));
        assert_eq!(
            CellGrid::new(2, 2).set((2, 0), CellClass::Wall),
            Err(GridError::OutOfBounds { pos: (2, 0) })
        );
    }

    #[test]
    fn marks_do_not_change_classification() {
        let mut grid: CellGrid = "S..T".parse().unwrap();
        assert!(grid.mark((1, 0), Mark::Explored));
        assert!(grid.mark((2, 0), Mark::Solution));
        assert!(!grid.mark((0, 0), Mark::Solution));
        assert!(!grid.mark((4, 0), Mark::Solution));

        assert_eq!(grid.classify((1, 0)), CellClass::Empty);
        assert_eq!(grid.mark_at((1, 0)), Some(Mark::Explored));
        assert_eq!(grid.to_string(), "So*T\n");
        assert_eq!(grid.marked(Mark::Solution).collect::<Vec<_>>(), vec![(2, 0)]);

        grid.clear_marks();
        assert_eq!(grid.to_string(), "S..T\n");
    }

    #[test]
    fn display_roundtrip() {
        let text = "S.#.\n..#.\n...T\n";
        let grid: CellGrid = text.parse().unwrap();

        assert_eq!(grid.to_string(), text);
    }
}
