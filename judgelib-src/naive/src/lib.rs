#[doc(inline)]
pub use disjoint_set::{self, *};
