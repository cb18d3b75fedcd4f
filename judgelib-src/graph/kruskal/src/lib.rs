use union_find::UnionFind;

/// Minimum spanning tree of the undirected graph on `0..n`.
///
/// Returns the indices of the chosen edges in the order they were taken,
/// or `None` if the graph is disconnected. Edges of equal weight are
/// considered in input order.
pub fn kruskal<W: Ord>(
    n: usize,
    edges: &[(usize, usize, W)],
) -> Option<Vec<usize>> {
    let ord = {
        let mut ord: Vec<_> = (0..edges.len()).collect();
        ord.sort_by_key(|&i| &edges[i].2);
        ord
    };

    let mut uf = UnionFind::with_len(n);
    let mut tree = vec![];
    for i in ord {
        let &(u, v, _) = &edges[i];
        assert!(u < n && v < n, "edge {i} ({u}, {v}) out of range (n: {n})");
        if !uf.equiv(u, v) {
            uf.union(u, v);
            tree.push(i);
        }
    }
    (uf.partition_len() <= 1).then_some(tree)
}

/// Smallest possible largest edge weight of a spanning tree.
///
/// `None` if the graph is disconnected, `Some(None)` if the tree needs no
/// edges.
pub fn kruskal_bottleneck<W: Ord>(
    n: usize,
    edges: &[(usize, usize, W)],
) -> Option<Option<&W>> {
    let tree = kruskal(n, edges)?;
    Some(tree.last().map(|&i| &edges[i].2))
}

#[cfg(test)]
mod tests {
    use naive::DisjointSet;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use randgen::{Edges, Gen};

    use super::*;

    fn weight(edges: &[(usize, usize, i32)], tree: &[usize]) -> i32 {
        tree.iter().map(|&i| edges[i].2).sum()
    }

    fn spanning_trees(
        n: usize,
        edges: &[(usize, usize, i32)],
    ) -> Vec<Vec<usize>> {
        let m = edges.len();
        let mut trees = vec![];
        for mask in 0_u32..1 << m {
            if mask.count_ones() as usize + 1 != n {
                continue;
            }
            let mut ds = DisjointSet::new(n);
            let mut acyclic = true;
            for i in (0..m).filter(|&i| mask >> i & 1 != 0) {
                let (u, v, _) = edges[i];
                acyclic &= !ds.equiv(u, v);
                ds.unite(u, v);
            }
            if acyclic {
                trees.push((0..m).filter(|&i| mask >> i & 1 != 0).collect());
            }
        }
        trees
    }

    fn brute(n: usize, edges: &[(usize, usize, i32)]) -> Option<i32> {
        spanning_trees(n, edges).iter().map(|tree| weight(edges, tree)).min()
    }

    fn brute_bottleneck(
        n: usize,
        edges: &[(usize, usize, i32)],
    ) -> Option<Option<i32>> {
        spanning_trees(n, edges)
            .iter()
            .map(|tree| tree.iter().map(|&i| edges[i].2).max())
            .min()
    }

    #[test]
    fn sanity_check() {
        let edges = [
            (0, 1, 4),
            (1, 2, 2),
            (0, 2, 5),
            (2, 3, 7),
            (1, 3, 8),
            (3, 3, 1),
            (2, 1, 2),
        ];
        let tree = kruskal(4, &edges).unwrap();
        assert_eq!(tree, [1, 0, 3]);
        assert_eq!(weight(&edges, &tree), 13);
    }

    #[test]
    fn disconnected() {
        let edges = [(0, 1, 1), (2, 3, 1)];
        assert_eq!(kruskal(4, &edges), None);
        assert_eq!(kruskal::<i32>(3, &[]), None);
    }

    #[test]
    fn trivial() {
        assert_eq!(kruskal::<i32>(0, &[]), Some(vec![]));
        assert_eq!(kruskal(1, &[(0, 0, 3)]), Some(vec![]));
    }

    #[test]
    fn bottleneck() {
        let edges = [(0, 1, 10), (1, 2, 20), (0, 2, 15)];
        assert_eq!(kruskal_bottleneck(3, &edges), Some(Some(&15)));
        assert_eq!(kruskal_bottleneck::<i32>(2, &[]), None);
        assert_eq!(kruskal_bottleneck::<i32>(1, &[]), Some(None));
    }

    #[test]
    fn bottleneck_against_brute() {
        let mut rng = ChaCha20Rng::from_seed([0x1E; 32]);
        for n in 1..=5 {
            for len in 0..=9 {
                let edges =
                    (Edges { n, len, weight: -5..10 }).generate(&mut rng);
                assert_eq!(
                    kruskal_bottleneck(n, &edges).map(|w| w.copied()),
                    brute_bottleneck(n, &edges),
                    "{edges:?}"
                );
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn bad_endpoint() { kruskal(2, &[(0, 2, 1)]); }

    #[test]
    fn against_brute() {
        let mut rng = ChaCha20Rng::from_seed([0x9A; 32]);
        for n in 1..=5 {
            for len in 0..=9 {
                let edges =
                    (Edges { n, len, weight: -5..10 }).generate(&mut rng);
                let actual = kruskal(n, &edges);
                if let Some(tree) = &actual {
                    assert_eq!(tree.len() + 1, n);
                }
                assert_eq!(
                    actual.map(|tree| weight(&edges, &tree)),
                    brute(n, &edges),
                    "{edges:?}"
                );
            }
        }
    }
}
