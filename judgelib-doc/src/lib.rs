//! Building blocks for judge problems.
//!
//! - [`ds`]: union-find with group sizes.
//! - [`algo`]: friend circles on top of it.
//! - [`graph`]: Kruskal's minimum spanning tree.
//! - [`seq`]: maximum subarray and sub-rectangle sums.
//! - [`io`]: token input and the `scan!` macro.
//! - [`naive`]: slow reference implementations for testing.

#[doc(inline)]
pub use {algo, ds, graph, io, naive, seq};
