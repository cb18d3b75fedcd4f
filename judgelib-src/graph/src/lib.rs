#[doc(inline)]
pub use kruskal::{self, *};
