//! User Agent (UA) sniffing.
//!
//! This crate provides a [`Classifier`] that captures a User-Agent string
//! once and answers a fixed battery of yes/no questions about it:
//! "is this Chrome", "is this a tablet", "is this iOS", ...
//!
//! Each question is a [`Predicate`] backed by one rule of a declarative
//! classification table. All predicates are pure, total and ASCII case insensitive:
//! any string is accepted, and the empty string matches nothing.
//!
//! ```
//! use uasniff_ua::Classifier;
//!
//! let ua = Classifier::new(
//!     "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 \
//!      (KHTML, like Gecko) Chrome/124.0.6367.82 Mobile Safari/537.36",
//! );
//! assert!(ua.is_chrome());
//! assert!(!ua.is_safari());
//! assert!(ua.is_mobile());
//! assert!(!ua.is_tablet());
//! ```
//!
//! # Rules
//!
//! | predicate | holds when the UA string |
//! |-|-|
//! | `isWebKit` | contains a WebKit token |
//! | `isChrome` | has a Chrome or Chromium token after a WebKit token |
//! | `isSafari` | has a Safari token after a WebKit token, and no Chrome or Chromium token after it |
//! | `isFirefox` | has a Firefox token after a Mozilla token |
//! | `isGecko` | has a Gecko token after a Mozilla token, and no WebKit token at all |
//! | `isOpera` | contains a Presto token, or an `Opera` or `OPR/` marker |
//! | `isIE` | contains an `MSIE` or `Trident` token, or the host app name is `Microsoft Internet Explorer` |
//! | `isIE7` .. `isIE10` | contains `MSIE <version>.` |
//! | `isAndroid` | contains an Android token |
//! | `isIOS` | contains an iPad, iPhone or iPod token |
//! | `isIPad`, `isIPhone`, `isIPod` | contains the respective token |
//! | `isKindle` | contains a Kindle or Silk token |
//! | `isMobile` | contains an iPhone, iPod, BlackBerry or Nokia token, or a Mobile token after an Android token |
//! | `isTablet` | contains an iPad or Tablet token, or an Android token without a Mobile token after it |
//! | `isTV` | contains a GoogleTV or SonyDTV token |
//!
//! # Remarks
//!
//! These are heuristics, and they are kept loose on purpose:
//!
//! - `isGecko` overlaps with `isFirefox`, and also covers other Gecko based agents;
//! - Android phones and tablets are told apart only by a "mobile" token
//!   following "android" on the same line;
//! - Chrome on iOS (`CriOS`) is reported as Safari;
//! - iPods report `iPhone OS`, and are thus also reported as iPhone.
//!
//! # Hosts
//!
//! The [`Classifier`] never reads ambient state. Use one of the [`host`]
//! adapters ([`Navigator`], [`EnvHost`]) together with [`Classifier::from_host`]
//! to capture the User-Agent string of a hosting environment.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod classifier;
pub use classifier::{Classification, Classifier, Predicate};

pub mod host;
#[doc(inline)]
pub use host::{EnvHost, Host, Navigator};
