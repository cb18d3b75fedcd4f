//! Disjoint-set union with union by rank, path compression and group sizes.
//!
//! ```
//! use union_find::UnionFind;
//!
//! let mut uf = UnionFind::with_len(5);
//! assert_eq!(uf.union(0, 1), 2);
//! assert_eq!(uf.union(0, 2), 3);
//! assert_eq!(uf.union(1, 3), 4);
//! assert_eq!(uf.union(3, 2), 4);
//!
//! assert!(uf.equiv(2, 3));
//! assert_eq!(uf.count(4), 1);
//! assert_eq!(uf.partition(), [vec![0, 1, 2, 3], vec![4]]);
//! ```

use std::{cell::RefCell, cmp::Ordering, fmt};

#[derive(Clone, Copy, Debug)]
struct Node {
    parent: usize,
    rank: u32,
    size: usize,
}

impl Node {
    fn singleton(id: usize) -> Self { Self { parent: id, rank: 0, size: 1 } }
}

#[derive(Clone, Default)]
pub struct UnionFind {
    nodes: RefCell<Vec<Node>>,
    groups: usize,
}

impl UnionFind {
    pub fn new() -> Self { Self::default() }

    pub fn with_len(n: usize) -> Self {
        Self {
            nodes: RefCell::new((0..n).map(Node::singleton).collect()),
            groups: n,
        }
    }

    /// Adds `x` as a singleton group. Ids must be registered in order
    /// `0, 1, 2, ...`.
    pub fn register(&mut self, x: usize) {
        let nodes = self.nodes.get_mut();
        assert_eq!(
            x,
            nodes.len(),
            "element {x} registered out of order (next id: {})",
            nodes.len()
        );
        nodes.push(Node::singleton(x));
        self.groups += 1;
    }

    pub fn len(&self) -> usize { self.nodes.borrow().len() }
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns the root of `x`'s group, pointing every node on the way
    /// directly at it.
    pub fn find(&self, x: usize) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        assert!(
            x < nodes.len(),
            "element {x} is not registered (len: {})",
            nodes.len()
        );

        let mut root = x;
        while nodes[root].parent != root {
            root = nodes[root].parent;
        }
        let mut cur = x;
        while cur != root {
            let next = nodes[cur].parent;
            nodes[cur].parent = root;
            cur = next;
        }
        root
    }

    /// Merges the groups of `x` and `y` and returns the size of the
    /// resulting group. On a rank tie `y`'s root survives.
    pub fn union(&mut self, x: usize, y: usize) -> usize {
        let rx = self.find(x);
        let ry = self.find(y);
        let nodes = self.nodes.get_mut();
        if rx == ry {
            return nodes[rx].size;
        }

        let (par, child) = match nodes[rx].rank.cmp(&nodes[ry].rank) {
            Ordering::Less => (ry, rx),
            Ordering::Greater => (rx, ry),
            Ordering::Equal => {
                nodes[ry].rank += 1;
                (ry, rx)
            }
        };
        nodes[par].size += nodes[child].size;
        nodes[child].parent = par;
        self.groups -= 1;
        nodes[par].size
    }

    pub fn equiv(&self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    pub fn count(&self, x: usize) -> usize {
        let root = self.find(x);
        self.nodes.borrow()[root].size
    }

    /// Groups in ascending order of their smallest member, each sorted.
    pub fn partition(&self) -> Vec<Vec<usize>> {
        let len = self.len();
        let mut slot = vec![None; len];
        let mut ptn: Vec<Vec<usize>> = vec![];
        for i in 0..len {
            let root = self.find(i);
            let j = *slot[root].get_or_insert_with(|| {
                ptn.push(vec![]);
                ptn.len() - 1
            });
            ptn[j].push(i);
        }
        ptn
    }

    pub fn partition_len(&self) -> usize { self.groups }
}

struct AsSet<'a>(&'a [usize]);
impl fmt::Debug for AsSet<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.0.iter()).finish()
    }
}

impl fmt::Debug for UnionFind {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ptn = self.partition();
        fmt.debug_map()
            .entries(ptn.iter().map(|set| (self.find(set[0]), AsSet(set))))
            .finish()
    }
}

impl fmt::Display for UnionFind {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ptn = self.partition();
        fmt.debug_set().entries(ptn.iter().map(|set| AsSet(set))).finish()
    }
}
