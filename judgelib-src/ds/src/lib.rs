#[doc(inline)]
pub use union_find::{self, *};
