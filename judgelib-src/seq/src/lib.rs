#[doc(inline)]
pub use max_subarray::{self, *};
#[doc(inline)]
pub use max_subrect::{self, *};
