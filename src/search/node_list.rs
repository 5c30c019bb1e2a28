use crate::{Cost, Point, PointMap};

pub(crate) type NodeID = usize;

/// A discovered Point together with what the search knows about it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    pub pos: Point,
    /// predecessor on the best known Path, `None` only for the start
    pub parent: Option<NodeID>,
    pub cost: Cost,
    /// set once the Node was expanded. Closed Nodes are never touched again.
    pub closed: bool,
}

/// Every Node discovered during one run of a search.
///
/// A Node is open (in the frontier) from the moment it is added until it is closed.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeList {
    nodes: slab::Slab<Node>,
    pos_map: PointMap<NodeID>,
    closed: usize,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pos_map.len()
    }

    pub fn closed_count(&self) -> usize {
        self.closed
    }

    pub fn add_node(&mut self, pos: Point, parent: Option<NodeID>, cost: Cost) -> NodeID {
        let id = self.nodes.insert(Node {
            pos,
            parent,
            cost,
            closed: false,
        });
        self.pos_map.insert(pos, id);
        id
    }

    pub fn id_at(&self, pos: Point) -> Option<NodeID> {
        self.pos_map.get(&pos).copied()
    }

    pub fn is_closed(&self, pos: Point) -> bool {
        self.id_at(pos).map_or(false, |id| self[id].closed)
    }

    #[track_caller]
    pub fn close(&mut self, id: NodeID) {
        let node = &mut self[id];
        assert!(!node.closed, "{:?} was expanded twice", node.pos);
        node.closed = true;
        self.closed += 1;
    }

    /// Follows the parent links from `id` back to the root, returning the Points root first.
    pub fn trace(&self, id: NodeID) -> Vec<Point> {
        let mut steps = vec![];
        let mut current = Some(id);
        while let Some(id) = current {
            let node = &self[id];
            steps.push(node.pos);
            current = node.parent;
        }
        steps.reverse();
        steps
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for NodeList {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node {
        &self.nodes[index]
    }
}
impl IndexMut<NodeID> for NodeList {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut Node {
        &mut self.nodes[index]
    }
}

#[test]
fn trace() {
    let mut nodes = NodeList::new();
    let root = nodes.add_node((0, 0), None, 0);
    let one = nodes.add_node((0, 1), Some(root), 1);
    let two = nodes.add_node((1, 1), Some(one), 2);
    nodes.add_node((1, 0), Some(root), 1);

    assert_eq!(nodes.len(), 4);
    assert_eq!(nodes.trace(two), vec![(0, 0), (0, 1), (1, 1)]);
    assert_eq!(nodes.trace(root), vec![(0, 0)]);
}

#[test]
fn close() {
    let mut nodes = NodeList::new();
    let root = nodes.add_node((2, 2), None, 0);

    assert!(!nodes.is_closed((2, 2)));
    nodes.close(root);
    assert!(nodes.is_closed((2, 2)));
    assert!(!nodes.is_closed((0, 0)));
    assert_eq!(nodes.closed_count(), 1);
}

#[test]
#[should_panic(expected = "expanded twice")]
fn close_twice() {
    let mut nodes = NodeList::new();
    let root = nodes.add_node((2, 2), None, 0);
    nodes.close(root);
    nodes.close(root);
}
