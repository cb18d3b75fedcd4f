#[doc(inline)]
pub use friend_circles::{self, *};
