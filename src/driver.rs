use crate::grid::{CellClass, CellGrid, GridError};
use crate::{Algorithm, Point};

mod config;
pub use self::config::DriverConfig;

mod lane;
pub use self::lane::{Lane, StepReport};

use log::{debug, info};
use thiserror::Error;

/// Errors from editing the Grid of a [`Driver`]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    /// The edit did not fit the Grid
    #[error(transparent)]
    Grid(#[from] GridError),
    /// Edits are only possible before the first step or after a [`reset`](Driver::reset)
    #[error("the grid cannot be edited while a search is in progress")]
    SearchInProgress,
    /// Walls, start and target can only be placed on empty cells
    #[error("{pos:?} is occupied by {class:?}")]
    Occupied {
        /// the Point of the edit
        pos: Point,
        /// what is already there
        class: CellClass,
    },
    /// Only walls can be erased
    #[error("{pos:?} holds {class:?}, not a wall")]
    NotAWall {
        /// the Point of the edit
        pos: Point,
        /// what is there instead
        class: CellClass,
    },
}

/// Runs several searches side by side, one expansion each per tick.
///
/// Every search gets its own [`Lane`] with a copy of the Grid, onto which its explored Points
/// and its solution are drawn. Edits to the Grid are applied to all Lanes at once.
///
/// ## Examples
/// ```
/// use lockstep_pathfinding::{Algorithm, Driver, DriverConfig};
///
/// let mut driver = Driver::new(DriverConfig::with_size(12, 5));
/// for y in 0..4 {
///     driver.set_wall((6, y)).unwrap();
/// }
///
/// let ticks = driver.run(|_| {});
///
/// assert!(driver.all_terminal());
/// for lane in driver.lanes() {
///     let path = lane.pathfinder().solution().unwrap();
///     assert!(path.cost() >= 6, "{} took a shortcut", lane.algorithm());
/// }
/// // the slowest search decides how long the run takes
/// assert!(ticks >= driver.lane(Algorithm::AStar).unwrap().pathfinder().stats().expanded);
/// ```
#[derive(Debug)]
pub struct Driver {
    config: DriverConfig,
    start: Point,
    target: Point,
    lanes: Vec<Lane>,
    started: bool,
}

impl Driver {
    /// Creates a Driver on an empty Grid with start and target at their default positions
    ///
    /// ## Panics
    /// If the Grid in `config` is narrower than 2 or has no rows, or if the heuristic weight is
    /// below 2.
    #[track_caller]
    pub fn new(config: DriverConfig) -> Driver {
        assert!(
            config.width >= 2 && config.height >= 1,
            "a {}x{} grid is too small",
            config.width,
            config.height
        );
        let mut board = CellGrid::new(config.width, config.height);
        let (start, target) = (config.default_start(), config.default_target());
        Self::place_endpoints(&mut board, start, target);
        Self::with_board(config, board, start, target)
    }

    /// Creates a Driver on a prepared Grid.
    ///
    /// The size of `grid` replaces the size in `config`. The Grid has to contain a start and a
    /// target. Any Marks on it are removed.
    ///
    /// ## Panics
    /// If the Grid is narrower than 2, or if the heuristic weight is below 2.
    #[track_caller]
    pub fn with_grid(config: DriverConfig, mut grid: CellGrid) -> Result<Driver, GridError> {
        assert!(grid.width() >= 2, "a grid of width {} is too small", grid.width());
        let start = grid
            .find(CellClass::Start)
            .ok_or(GridError::MissingEndpoint(CellClass::Start))?;
        let target = grid
            .find(CellClass::Target)
            .ok_or(GridError::MissingEndpoint(CellClass::Target))?;
        grid.clear_marks();
        let config = DriverConfig {
            width: grid.width(),
            height: grid.height(),
            ..config
        };
        Ok(Self::with_board(config, grid, start, target))
    }

    #[track_caller]
    fn with_board(config: DriverConfig, board: CellGrid, start: Point, target: Point) -> Driver {
        let lanes = config
            .algorithms()
            .into_iter()
            .map(|algorithm| Lane::new(algorithm, board.clone()))
            .collect();
        Driver {
            config,
            start,
            target,
            lanes,
            started: false,
        }
    }

    fn place_endpoints(board: &mut CellGrid, start: Point, target: Point) {
        // both come from DriverConfig, which keeps them on the Grid
        for (pos, class) in [(start, CellClass::Start), (target, CellClass::Target)] {
            if let Err(err) = board.set(pos, class) {
                debug!("could not place {:?}: {}", class, err);
            }
        }
    }

    /// The config this Driver was created with
    pub fn config(&self) -> DriverConfig {
        self.config
    }

    /// Where the searches start
    pub fn start(&self) -> Point {
        self.start
    }

    /// What the searches look for
    pub fn target(&self) -> Point {
        self.target
    }

    /// All Lanes in the order of [`DriverConfig::algorithms`]
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// The Lane running `algorithm`
    pub fn lane(&self, algorithm: Algorithm) -> Option<&Lane> {
        self.lanes.iter().find(|lane| lane.algorithm() == algorithm)
    }

    /// Whether the searches were initialized and not yet reset
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether every search has either found the target or given up
    pub fn all_terminal(&self) -> bool {
        self.started && self.lanes.iter().all(Lane::is_terminal)
    }

    /// Advances every search that is not done yet by one expansion.
    ///
    /// The first call after creating, [clearing](Driver::clear) or [resetting](Driver::reset)
    /// initializes all searches with the current start and target first.
    pub fn step_all(&mut self) -> Vec<StepReport> {
        if !self.started {
            debug!(
                "initializing {} searches from {:?} to {:?}",
                self.lanes.len(),
                self.start,
                self.target
            );
            for lane in self.lanes.iter_mut() {
                lane.initialize(self.start, self.target);
            }
            self.started = true;
        }

        self.lanes
            .iter_mut()
            .filter(|lane| !lane.is_terminal())
            .map(Lane::step)
            .collect()
    }

    /// Calls [`step_all`](Driver::step_all) until every search is done, waiting
    /// [`step_delay`](DriverConfig::step_delay) between ticks.
    ///
    /// `on_tick` is called with the reports of every tick. Returns the number of ticks.
    pub fn run(&mut self, mut on_tick: impl FnMut(&[StepReport])) -> usize {
        let mut ticks = 0;
        loop {
            let reports = self.step_all();
            ticks += 1;
            on_tick(&reports);
            if self.all_terminal() {
                break;
            }
            if !self.config.step_delay.is_zero() {
                std::thread::sleep(self.config.step_delay);
            }
        }
        info!("all searches finished after {} ticks", ticks);
        for lane in self.lanes.iter() {
            let pathfinder = lane.pathfinder();
            debug!(
                "{}: {:?}, {} expanded, cost {:?}",
                lane.algorithm(),
                pathfinder.status(),
                pathfinder.stats().expanded,
                pathfinder.solution().map(|path| path.cost())
            );
        }
        ticks
    }

    /// Stops the searches and empties the Grid. Start and target return to their default
    /// positions.
    pub fn clear(&mut self) {
        self.started = false;
        self.start = self.config.default_start();
        self.target = self.config.default_target();
        for lane in self.lanes.iter_mut() {
            let board = lane.board_mut();
            board.clear();
            Self::place_endpoints(board, self.start, self.target);
        }
        debug!("grid cleared");
    }

    /// Stops the searches and removes their progress from the Grid, keeping walls, start and
    /// target.
    pub fn reset(&mut self) {
        self.started = false;
        for lane in self.lanes.iter_mut() {
            lane.board_mut().clear_marks();
        }
        debug!("searches reset");
    }

    fn class_at(&self, pos: Point) -> Result<CellClass, EditError> {
        if self.started {
            return Err(EditError::SearchInProgress);
        }
        self.lanes
            .first()
            .and_then(|lane| lane.board().get(pos))
            .ok_or(EditError::Grid(GridError::OutOfBounds { pos }))
    }

    fn set_all(&mut self, pos: Point, class: CellClass) -> Result<(), EditError> {
        for lane in self.lanes.iter_mut() {
            lane.board_mut().set(pos, class)?;
        }
        Ok(())
    }

    fn require_empty(&self, pos: Point) -> Result<(), EditError> {
        match self.class_at(pos)? {
            CellClass::Empty => Ok(()),
            class => Err(EditError::Occupied { pos, class }),
        }
    }

    /// Places a wall on an empty cell
    pub fn set_wall(&mut self, pos: Point) -> Result<(), EditError> {
        self.require_empty(pos)?;
        self.set_all(pos, CellClass::Wall)
    }

    /// Turns a wall back into an empty cell
    pub fn erase_wall(&mut self, pos: Point) -> Result<(), EditError> {
        match self.class_at(pos)? {
            CellClass::Wall => self.set_all(pos, CellClass::Empty),
            class => Err(EditError::NotAWall { pos, class }),
        }
    }

    /// Moves the start onto an empty cell
    pub fn move_start(&mut self, pos: Point) -> Result<(), EditError> {
        self.require_empty(pos)?;
        self.set_all(self.start, CellClass::Empty)?;
        self.set_all(pos, CellClass::Start)?;
        debug!("start moved from {:?} to {:?}", self.start, pos);
        self.start = pos;
        Ok(())
    }

    /// Moves the target onto an empty cell
    pub fn move_target(&mut self, pos: Point) -> Result<(), EditError> {
        self.require_empty(pos)?;
        self.set_all(self.target, CellClass::Empty)?;
        self.set_all(pos, CellClass::Target)?;
        debug!("target moved from {:?} to {:?}", self.target, pos);
        self.target = pos;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Mark;
    use crate::SearchStatus;

    #[test]
    fn default_layout() {
        let driver = Driver::new(DriverConfig::INSTANT);
        let board = driver.lanes()[0].board();

        assert_eq!(driver.lanes().len(), 4);
        assert_eq!(board.get((7, 10)), Some(CellClass::Start));
        assert_eq!(board.get((23, 10)), Some(CellClass::Target));
        assert!(!driver.is_started());
        assert!(!driver.all_terminal());
    }

    #[test]
    fn first_step_initializes() {
        let mut driver = Driver::new(DriverConfig::with_size(8, 3));
        let reports = driver.step_all();

        assert!(driver.is_started());
        assert_eq!(reports.len(), 4);
        for report in reports {
            assert_eq!(report.status, SearchStatus::Running);
            // the start expands into its 4 neighbors
            assert_eq!(report.explored.len(), 4);
        }
    }

    #[test]
    fn edits_apply_to_all_lanes() {
        let mut driver = Driver::new(DriverConfig::with_size(8, 3));
        driver.set_wall((4, 0)).unwrap();
        driver.move_start((0, 0)).unwrap();

        for lane in driver.lanes() {
            assert_eq!(lane.board().get((4, 0)), Some(CellClass::Wall));
            assert_eq!(lane.board().get((0, 0)), Some(CellClass::Start));
            assert_eq!(lane.board().get((2, 1)), Some(CellClass::Empty));
        }
        assert_eq!(driver.start(), (0, 0));
    }

    #[test]
    fn invalid_edits() {
        let mut driver = Driver::new(DriverConfig::with_size(8, 3));
        let (start, target) = (driver.start(), driver.target());

        assert_eq!(
            driver.set_wall(start),
            Err(EditError::Occupied {
                pos: start,
                class: CellClass::Start
            })
        );
        assert_eq!(
            driver.move_start(target),
            Err(EditError::Occupied {
                pos: target,
                class: CellClass::Target
            })
        );
        assert_eq!(
            driver.erase_wall((0, 0)),
            Err(EditError::NotAWall {
                pos: (0, 0),
                class: CellClass::Empty
            })
        );
        assert_eq!(
            driver.set_wall((8, 0)),
            Err(EditError::Grid(GridError::OutOfBounds { pos: (8, 0) }))
        );

        driver.step_all();
        assert_eq!(driver.set_wall((0, 0)), Err(EditError::SearchInProgress));

        driver.reset();
        assert_eq!(driver.set_wall((0, 0)), Ok(()));
        assert_eq!(driver.erase_wall((0, 0)), Ok(()));
    }

    #[test]
    fn reset_keeps_walls() {
        let mut driver = Driver::new(DriverConfig::with_size(8, 3));
        driver.set_wall((4, 1)).unwrap();
        driver.run(|_| {});

        let lane = driver.lane(Algorithm::BreadthFirst).unwrap();
        assert!(lane.board().marked(Mark::Solution).count() > 0);

        driver.reset();
        for lane in driver.lanes() {
            assert_eq!(lane.board().marked(Mark::Explored).count(), 0);
            assert_eq!(lane.board().marked(Mark::Solution).count(), 0);
            assert_eq!(lane.board().get((4, 1)), Some(CellClass::Wall));
        }
        assert!(!driver.all_terminal());
    }

    #[test]
    fn clear_restores_defaults() {
        let mut driver = Driver::new(DriverConfig::with_size(8, 3));
        driver.set_wall((4, 1)).unwrap();
        driver.move_target((7, 2)).unwrap();
        driver.clear();

        let config = driver.config();
        assert_eq!(driver.target(), config.default_target());
        for lane in driver.lanes() {
            assert_eq!(lane.board().get((4, 1)), Some(CellClass::Empty));
            assert_eq!(lane.board().get((7, 2)), Some(CellClass::Empty));
            assert_eq!(
                lane.board().get(config.default_target()),
                Some(CellClass::Target)
            );
        }
    }

    #[test]
    fn with_grid_needs_endpoints() {
        let grid: CellGrid = "S...".parse().unwrap();

        assert_eq!(
            Driver::with_grid(DriverConfig::INSTANT, grid).unwrap_err(),
            GridError::MissingEndpoint(CellClass::Target)
        );
    }

    #[test]
    fn unreachable_target_ends_the_run() {
        let grid: CellGrid = "
            S.#..
            ..#.T
            ..#..
        "
        .parse()
        .unwrap();
        let mut driver = Driver::with_grid(DriverConfig::INSTANT, grid).unwrap();
        driver.run(|_| {});

        assert!(driver.all_terminal());
        for lane in driver.lanes() {
            assert_eq!(lane.pathfinder().status(), SearchStatus::Unreachable);
            assert_eq!(lane.board().marked(Mark::Solution).count(), 0);
            // every reachable empty cell was explored
            assert_eq!(lane.board().marked(Mark::Explored).count(), 5);
        }
    }
}
