use crate::Cost;

/// A Path found by one of the searches
///
/// Stores the sequence of Points from start to target (both inclusive) in `path` and the total
/// Cost of walking it in `cost`. On the uniform Grids used here the Cost is the number of steps,
/// so `cost == path.len() - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
    /// the Path
    pub path: Vec<P>,
    /// the total Cost of the Path
    pub cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use lockstep_pathfinding::Path;
    /// let path = Path::new(vec![(0, 0), (0, 1), (1, 1)], 2);
    ///
    /// assert_eq!(path.path, vec![(0, 0), (0, 1), (1, 1)]);
    /// assert_eq!(path.cost(), 2);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// The total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The first Point of the Path
    pub fn start(&self) -> Option<&P> {
        self.path.first()
    }

    /// The last Point of the Path
    pub fn goal(&self) -> Option<&P> {
        self.path.last()
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path == *rhs
    }
}

use std::cmp::Ordering;

impl<P: Eq> Ord for Path<P> {
    fn cmp(&self, other: &Path<P>) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

impl<P: Eq> PartialOrd for Path<P> {
    fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{:?}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {:?}", p)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {

    use super::Path;
    #[test]
    fn path_index() {
        let path = Path::new(vec![(4, 0), (4, 1), (3, 1)], 2);

        assert_eq!(path[0], (4, 0));
        assert_eq!(path[1], (4, 1));
        assert_eq!(path[2], (3, 1));
        assert_eq!(path.start(), Some(&(4, 0)));
        assert_eq!(path.goal(), Some(&(3, 1)));
    }

    #[test]
    fn path_display() {
        let path = Path::new(vec![(4, 0), (4, 1), (3, 1)], 2);

        assert_eq!(
            &format!("{}", path),
            "Path[Cost = 2]: (4, 0) -> (4, 1) -> (3, 1)"
        );
    }

    #[test]
    fn path_display_empty() {
        let path = Path::new(Vec::<(usize, usize)>::new(), 0);

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }

    #[test]
    fn path_ordering() {
        let short = Path::new(vec![(0, 0), (0, 1)], 1);
        let long = Path::new(vec![(0, 0), (1, 0), (1, 1)], 2);

        assert!(short < long);
    }
}
