//! The four stepwise searches.
//!
//! All of them share the same [`SearchState`] and the same expansion routine. They only differ
//! in the frontier they use, in how they order it and in whether an open Node may be given a
//! cheaper Path after it was discovered.

mod frontier;
mod node_list;
mod state;

mod a_star;
pub use self::a_star::AStarSearch;

mod bfs;
pub use self::bfs::BreadthFirstSearch;

mod dijkstra;
pub use self::dijkstra::DijkstraSearch;

mod weighted_a_star;
pub use self::weighted_a_star::WeightedAStarSearch;

use self::frontier::Frontier;
use self::state::SearchState;
use crate::{grid::Grid, Cost, Path, Point};

use log::warn;
use std::fmt::Debug;

/// Where a search is in its lifecycle.
///
/// ```no_code
/// NotStarted -> Running -> Solved
///                       \-> Unreachable
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// Not initialized, or initialized without any step taken
    NotStarted,
    /// At least one step was taken and the target was not yet expanded
    Running,
    /// The target was expanded; a solution is available
    Solved,
    /// The frontier ran empty before the target was reached
    Unreachable,
}

impl SearchStatus {
    /// Whether any further step would be a no-op
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchStatus::Solved | SearchStatus::Unreachable)
    }
}

/// How much work a search has done in the current run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchStats {
    /// Points that were expanded (the closed set)
    pub expanded: usize,
    /// Points that were discovered, expanded or not
    pub discovered: usize,
    /// Entries currently in the frontier, including stale ones
    pub frontier: usize,
}

/// Frontier ordering and cost function of one search
pub(crate) trait Strategy: Debug {
    type Frontier: Frontier;
    /// whether an open Node takes a cheaper Path found after its discovery
    const RELAX: bool;

    fn name(&self) -> &'static str;
    fn priority(&self, cost: Cost, pos: Point, target: Point) -> Cost;
}

/// A [`Strategy`] together with the state of its current run
#[derive(Debug)]
pub(crate) struct Search<S: Strategy> {
    strategy: S,
    state: Option<SearchState<S::Frontier>>,
}

impl<S: Strategy> Search<S> {
    fn new(strategy: S) -> Self {
        Search {
            strategy,
            state: None,
        }
    }

    fn initialize(&mut self, start: Point, target: Point) {
        self.state = Some(SearchState::new(&self.strategy, start, target));
    }

    fn step(&mut self, grid: &dyn Grid) -> Vec<Point> {
        match &mut self.state {
            Some(state) => state.step(&self.strategy, grid),
            None => {
                warn!("{} was stepped before being initialized", self.strategy.name());
                vec![]
            }
        }
    }

    fn solution(&self) -> Option<&Path<Point>> {
        self.state.as_ref().and_then(SearchState::solution)
    }

    fn status(&self) -> SearchStatus {
        self.state
            .as_ref()
            .map_or(SearchStatus::NotStarted, SearchState::status)
    }

    fn stats(&self) -> SearchStats {
        self.state
            .as_ref()
            .map_or_else(SearchStats::default, SearchState::stats)
    }

    fn is_closed(&self, pos: Point) -> bool {
        self.state.as_ref().map_or(false, |state| state.is_closed(pos))
    }
}

/// Implements [`Pathfinder`](crate::Pathfinder) for newtypes around a [`Search`]
macro_rules! impl_pathfinder {
    ($($type:ty),+) => {$(
        impl crate::Pathfinder for $type {
            fn name(&self) -> &'static str {
                self.0.strategy.name()
            }
            fn initialize(&mut self, start: Point, target: Point) {
                self.0.initialize(start, target)
            }
            fn step(&mut self, grid: &dyn Grid) -> Vec<Point> {
                self.0.step(grid)
            }
            fn solution(&self) -> Option<&Path<Point>> {
                self.0.solution()
            }
            fn status(&self) -> SearchStatus {
                self.0.status()
            }
            fn stats(&self) -> SearchStats {
                self.0.stats()
            }
            fn is_closed(&self, pos: Point) -> bool {
                self.0.is_closed(pos)
            }
        }
    )+}
}

impl_pathfinder!(
    AStarSearch,
    BreadthFirstSearch,
    DijkstraSearch,
    WeightedAStarSearch
);
