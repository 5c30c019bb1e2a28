use crate::grid::{CellGrid, Mark};
use crate::{Algorithm, Pathfinder, Point, SearchStatus};

/// What one Lane did during a tick
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// the search that was stepped
    pub algorithm: Algorithm,
    /// the Points returned by [`Pathfinder::step`]
    pub explored: Vec<Point>,
    /// the status after the step
    pub status: SearchStatus,
}

/// One search together with its own copy of the Grid
#[derive(Debug)]
pub struct Lane {
    algorithm: Algorithm,
    pathfinder: Box<dyn Pathfinder>,
    board: CellGrid,
}

impl Lane {
    pub(super) fn new(algorithm: Algorithm, board: CellGrid) -> Lane {
        Lane {
            algorithm,
            pathfinder: algorithm.build(),
            board,
        }
    }

    /// The search of this Lane
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The running search
    pub fn pathfinder(&self) -> &dyn Pathfinder {
        self.pathfinder.as_ref()
    }

    /// The Grid of this Lane, with the progress of the search marked on it
    pub fn board(&self) -> &CellGrid {
        &self.board
    }

    /// Whether the search of this Lane is done
    pub fn is_terminal(&self) -> bool {
        self.pathfinder.is_terminal()
    }

    pub(super) fn board_mut(&mut self) -> &mut CellGrid {
        &mut self.board
    }

    pub(super) fn initialize(&mut self, start: Point, target: Point) {
        self.pathfinder.initialize(start, target);
    }

    /// Steps the search once and draws the result onto the board
    pub(super) fn step(&mut self) -> StepReport {
        let explored = self.pathfinder.step(&self.board);
        for &pos in explored.iter() {
            self.board.mark(pos, Mark::Explored);
        }
        if let Some(path) = self.pathfinder.solution() {
            for &pos in path.iter() {
                self.board.mark(pos, Mark::Solution);
            }
        }
        StepReport {
            algorithm: self.algorithm,
            explored,
            status: self.pathfinder.status(),
        }
    }
}
