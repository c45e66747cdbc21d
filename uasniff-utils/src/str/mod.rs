//! String utilities.

mod search;
#[doc(inline)]
pub use search::{contains_any_token, find_token};
