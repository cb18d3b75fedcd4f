use union_find::UnionFind;

/// Citizens `0..n` joined pair by pair, tracking the largest circle.
pub struct FriendCircles {
    uf: UnionFind,
    largest: usize,
}

impl FriendCircles {
    pub fn new(n: usize) -> Self {
        let mut uf = UnionFind::new();
        for i in 0..n {
            uf.register(i);
        }
        Self { uf, largest: n.min(1) }
    }

    /// Returns the size of the circle `u` and `v` end up in.
    pub fn befriend(&mut self, u: usize, v: usize) -> usize {
        let size = self.uf.union(u, v);
        self.largest = self.largest.max(size);
        size
    }

    pub fn largest(&self) -> usize { self.largest }
    pub fn circles(&self) -> Vec<Vec<usize>> { self.uf.partition() }
}

pub fn largest_circle(
    n: usize,
    pairs: impl IntoIterator<Item = (usize, usize)>,
) -> usize {
    let mut fc = FriendCircles::new(n);
    for (u, v) in pairs {
        fc.befriend(u, v);
    }
    fc.largest()
}
