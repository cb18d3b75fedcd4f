use std::ops::Range;

use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

pub trait Gen {
    type Output;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output;
}

/// `len` pairs of ids drawn uniformly from `0..n`.
pub struct Pairs {
    pub n: usize,
    pub len: usize,
}

/// A `rows` by `cols` matrix with entries drawn from `bound`.
pub struct Grid {
    pub bound: Range<i32>,
    pub rows: usize,
    pub cols: usize,
}

/// `len` undirected edges `(u, v, w)` over `0..n`, weights from `weight`.
pub struct Edges {
    pub n: usize,
    pub len: usize,
    pub weight: Range<i32>,
}

impl Gen for Range<i32> {
    type Output = i32;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.clone());
        between.sample(rng)
    }
}

impl Gen for Pairs {
    type Output = Vec<(usize, usize)>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(0..self.n);
        (0..self.len)
            .map(|_| (between.sample(rng), between.sample(rng)))
            .collect()
    }
}

impl Gen for Grid {
    type Output = Vec<Vec<i32>>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let between = Uniform::from(self.bound.clone());
        (0..self.rows)
            .map(|_| (0..self.cols).map(|_| between.sample(rng)).collect())
            .collect()
    }
}

impl Gen for Edges {
    type Output = Vec<(usize, usize, i32)>;
    fn generate<R: Rng>(&self, rng: &mut R) -> Self::Output {
        let Self { n, len, weight } = self;
        (Pairs { n: *n, len: *len })
            .generate(rng)
            .into_iter()
            .map(|(u, v)| (u, v, weight.generate(rng)))
            .collect()
    }
}
