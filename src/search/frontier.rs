use crate::{Cost, Point};

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt::Debug;

/// An entry in a frontier.
///
/// `seq` counts insertions within one run, so an earlier entry always has a lower `seq`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Element {
    pub pos: Point,
    pub cost: Cost,
    pub priority: Cost,
    pub seq: u64,
}

impl PartialOrd for Element {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for Element {
    /// Reversed, so that [`BinaryHeap`] pops the lowest priority first, then the lowest cost,
    /// then the earliest insertion.
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.priority
            .cmp(&self.priority)
            .then_with(|| rhs.cost.cmp(&self.cost))
            .then_with(|| rhs.seq.cmp(&self.seq))
    }
}

/// The set of discovered but not yet expanded Points.
///
/// A frontier may contain stale entries for Points that were reinserted with a lower cost;
/// those are filtered out by the search when popped.
pub(crate) trait Frontier: Default + Debug {
    fn push(&mut self, element: Element);
    fn pop(&mut self) -> Option<Element>;
    /// the Element [`pop`](Frontier::pop) would return next
    fn peek(&self) -> Option<&Element>;
    fn len(&self) -> usize;
}

/// First in, first out. Ignores priorities entirely.
#[derive(Clone, Debug, Default)]
pub(crate) struct Queue(VecDeque<Element>);

impl Frontier for Queue {
    fn push(&mut self, element: Element) {
        self.0.push_back(element);
    }
    fn pop(&mut self) -> Option<Element> {
        self.0.pop_front()
    }
    fn peek(&self) -> Option<&Element> {
        self.0.front()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Lowest priority first, see [`Element`] for the tie-breaks.
#[derive(Clone, Debug, Default)]
pub(crate) struct Heap(BinaryHeap<Element>);

impl Frontier for Heap {
    fn push(&mut self, element: Element) {
        self.0.push(element);
    }
    fn pop(&mut self) -> Option<Element> {
        self.0.pop()
    }
    fn peek(&self) -> Option<&Element> {
        self.0.peek()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}
