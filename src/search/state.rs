use super::frontier::{Element, Frontier};
use super::node_list::{NodeID, NodeList};
use super::{SearchStats, SearchStatus, Strategy};
use crate::{grid::Grid, neighbors, Cost, Path, Point};

use log::{debug, trace};

/// Everything one run of a search knows.
///
/// Created by `initialize`, advanced one expansion per [`step`](SearchState::step) and thrown
/// away on the next `initialize`.
#[derive(Debug)]
pub(crate) struct SearchState<F> {
    start: Point,
    target: Point,
    nodes: NodeList,
    frontier: F,
    next_seq: u64,
    status: SearchStatus,
    solution: Option<Path<Point>>,
}

impl<F: Frontier> SearchState<F> {
    pub fn new<S: Strategy<Frontier = F>>(strategy: &S, start: Point, target: Point) -> Self {
        debug!(
            "{}: searching from {:?} to {:?}",
            strategy.name(),
            start,
            target
        );
        let mut state = SearchState {
            start,
            target,
            nodes: NodeList::new(),
            frontier: F::default(),
            next_seq: 0,
            status: SearchStatus::NotStarted,
            solution: None,
        };
        state.nodes.add_node(start, None, 0);
        state.push(start, 0, strategy.priority(0, start, target));
        state
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn solution(&self) -> Option<&Path<Point>> {
        self.solution.as_ref()
    }

    pub fn is_closed(&self, pos: Point) -> bool {
        self.nodes.is_closed(pos)
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            expanded: self.nodes.closed_count(),
            discovered: self.nodes.len(),
            frontier: self.frontier.len(),
        }
    }

    fn push(&mut self, pos: Point, cost: Cost, priority: Cost) {
        self.frontier.push(Element {
            pos,
            cost,
            priority,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    /// The open Node `element` describes, or `None` if the entry was superseded or its Node
    /// is already closed.
    fn live_node(&self, element: &Element) -> Option<NodeID> {
        let id = self.nodes.id_at(element.pos)?;
        let node = &self.nodes[id];
        (!node.closed && element.cost <= node.cost).then_some(id)
    }

    /// Pops entries until one is found that still describes an open Node.
    fn pop_open(&mut self) -> Option<(NodeID, Element)> {
        while let Some(element) = self.frontier.pop() {
            match self.live_node(&element) {
                Some(id) => return Some((id, element)),
                None => trace!("skipping stale entry for {:?}", element.pos),
            }
        }
        None
    }

    /// Drops stale entries from the head of the frontier. Returns whether an open Node is left.
    fn prune_stale(&mut self) -> bool {
        while let Some(element) = self.frontier.peek() {
            if self.live_node(element).is_some() {
                return true;
            }
            trace!("dropping stale entry for {:?}", element.pos);
            self.frontier.pop();
        }
        false
    }

    fn give_up<S: Strategy<Frontier = F>>(&mut self, strategy: &S) {
        self.status = SearchStatus::Unreachable;
        debug!(
            "{}: {:?} is unreachable from {:?} ({} expanded)",
            strategy.name(),
            self.target,
            self.start,
            self.nodes.closed_count()
        );
    }

    /// Expands exactly one Node.
    ///
    /// Returns every Point that was added to the frontier or had its Path improved, preceded by
    /// the expanded Point unless that is the start. Returns nothing once the search is terminal.
    ///
    /// The search becomes [`Unreachable`](SearchStatus::Unreachable) on the step that leaves
    /// no open Node behind.
    pub fn step<S: Strategy<Frontier = F>>(&mut self, strategy: &S, grid: &dyn Grid) -> Vec<Point> {
        if self.status.is_terminal() {
            return vec![];
        }
        self.status = SearchStatus::Running;

        let Some((current_id, current)) = self.pop_open() else {
            self.give_up(strategy);
            return vec![];
        };
        self.nodes.close(current_id);
        trace!(
            "{}: expanding {:?} at cost {} ({} in frontier)",
            strategy.name(),
            current.pos,
            current.cost,
            self.frontier.len()
        );

        let mut explored = vec![];
        if current.pos != self.start {
            explored.push(current.pos);
        }

        if current.pos == self.target {
            let path = Path::new(self.nodes.trace(current_id), current.cost);
            debug!(
                "{}: solved with cost {} ({} expanded)",
                strategy.name(),
                path.cost(),
                self.nodes.closed_count()
            );
            self.solution = Some(path);
            self.status = SearchStatus::Solved;
            return explored;
        }

        let other_cost = current.cost + 1;
        for other_pos in neighbors::get_all_neighbors(current.pos) {
            if !grid.is_walkable(other_pos) {
                continue;
            }

            match self.nodes.id_at(other_pos) {
                Some(other_id) => {
                    let other = &mut self.nodes[other_id];
                    if other.closed || !S::RELAX || other.cost <= other_cost {
                        continue;
                    }
                    other.cost = other_cost;
                    other.parent = Some(current_id);
                }
                None => {
                    self.nodes.add_node(other_pos, Some(current_id), other_cost);
                }
            }

            let priority = strategy.priority(other_cost, other_pos, self.target);
            self.push(other_pos, other_cost, priority);
            explored.push(other_pos);
        }

        if !self.prune_stale() {
            self.give_up(strategy);
        }
        explored
    }
}
