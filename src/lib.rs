//! 🕵️ uasniff: User-Agent (UA) string sniffing for 🦀 Rust.
//!
//! Answer boolean questions about an identification string a client reports,
//! such as "is this Chrome", "is this a tablet" or "is this iOS":
//!
//! ```
//! use uasniff::{Classifier, Predicate};
//!
//! let ua = Classifier::new(
//!     "Mozilla/5.0 (iPad; CPU OS 17_4 like Mac OS X) AppleWebKit/605.1.15 \
//!      (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1",
//! );
//! assert!(ua.is_ipad());
//! assert!(ua.is_tablet());
//! assert!(!ua.is_mobile());
//! assert!(ua.matches(Predicate::Safari));
//! ```
//!
//! | crate | content |
//! |-|-|
//! | [`ua`] | [`Classifier`], [`Predicate`], [`Classification`] and the [host adapters](ua::host) |
//! | [`error`] | error types used for parsing at the edges |
//! | [`utils`] | ASCII case insensitive string helpers |
//!
//! Classification never fails, never blocks and holds no mutable state:
//! a [`Classifier`] can be shared freely between threads.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]
#![forbid(unsafe_code)]

pub mod error {
    //! Error types for uasniff.
    #[doc(inline)]
    pub use uasniff_error::*;
}

pub mod utils {
    //! Utilities for uasniff.
    #[doc(inline)]
    pub use uasniff_utils::*;
}

pub mod ua {
    //! User-Agent sniffing.
    #[doc(inline)]
    pub use uasniff_ua::*;
}

#[doc(inline)]
pub use ua::{Classification, Classifier, Predicate};
