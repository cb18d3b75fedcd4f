/// Labels every element with its group id; merging relabels a whole group.
pub struct DisjointSet(Vec<usize>);

impl DisjointSet {
    pub fn new(n: usize) -> Self { Self((0..n).collect()) }
    pub fn register(&mut self, x: usize) {
        assert_eq!(x, self.0.len());
        self.0.push(x);
    }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn unite(&mut self, u: usize, v: usize) -> usize {
        let (from, to) = (self.0[u], self.0[v]);
        if from != to {
            for label in &mut self.0 {
                if *label == from {
                    *label = to;
                }
            }
        }
        self.count(v)
    }
    pub fn equiv(&self, u: usize, v: usize) -> bool {
        self.repr(u) == self.repr(v)
    }
    pub fn repr(&self, u: usize) -> usize { self.0[u] }
    pub fn count(&self, u: usize) -> usize {
        self.0.iter().filter(|&&label| label == self.0[u]).count()
    }
}

#[test]
fn sanity_check() {
    let mut ds = DisjointSet::new(4);
    assert_eq!(ds.unite(0, 1), 2);
    assert_eq!(ds.unite(1, 0), 2);
    assert_eq!(ds.unite(2, 3), 2);
    assert!(!ds.equiv(0, 3));
    ds.register(4);
    assert_eq!(ds.unite(3, 0), 4);
    assert!(ds.equiv(1, 2));
    assert_eq!(ds.count(4), 1);
    assert_eq!(ds.len(), 5);
}
