//! utilities crate for uasniff
//!
//! `uasniff-utils` contains the small string helpers
//! used by the classification table and its surrounding types,
//! that are not really part of one of the other crates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(hidden)]
#[macro_use]
pub mod macros;

pub mod str;
