//! The classification table: one matching rule per [`Predicate`].
//!
//! Rules are plain data. Exclusions that tie two predicates together
//! (Chrome vs Safari, Android phone vs Android tablet) are spelled out
//! inside the rule that needs them, so every entry can be read and
//! tested on its own.

use super::{
    Predicate,
    rule::{Rule, Subject},
};
use std::sync::LazyLock;

/// Application name reported by Internet Explorer hosts.
const IE_APP_NAME: &str = "Microsoft Internet Explorer";

/// Chrome or Chromium after a WebKit token.
const CHROME: &str = r"webkit\W.*(chrome|chromium)\W";

/// Looser variant of [`CHROME`], used to exclude Safari.
///
/// Matches every string [`CHROME`] matches.
const CHROME_ANYWHERE_AFTER_WEBKIT: &str = r"webkit\W.*(chrome|chromium)";

/// Android followed by a mobile token, on the same line.
///
/// Shared by the mobile and tablet rules so that, for Android,
/// the two are decided by the very same expression.
const ANDROID_MOBILE: &str = r"android.*mobile";

static TABLE: LazyLock<Vec<Rule>> =
    LazyLock::new(|| Predicate::ALL.into_iter().map(define).collect());

/// Returns the compiled rule for the given predicate.
pub(crate) fn rule(predicate: Predicate) -> &'static Rule {
    &TABLE[predicate.index()]
}

/// Evaluates the predicate against the subject.
pub(crate) fn is_match(predicate: Predicate, subject: Subject<'_>) -> bool {
    rule(predicate).is_match(subject)
}

fn define(predicate: Predicate) -> Rule {
    match predicate {
        Predicate::WebKit => Rule::pattern(r"webkit\W"),
        Predicate::Chrome => Rule::pattern(CHROME),
        Predicate::Safari => {
            Rule::pattern(r"webkit\W.*safari\W").unless(Rule::pattern(CHROME_ANYWHERE_AFTER_WEBKIT))
        }
        Predicate::Firefox => Rule::pattern(r"mozilla.*\Wfirefox\W"),
        Predicate::Gecko => Rule::pattern(r"mozilla.*\Wgecko\W").unless(Rule::tokens(&["webkit"])),
        Predicate::Opera => Rule::pattern(r"\Wpresto\W|\bopera\b|\bopr/"),
        Predicate::IE => Rule::any([
            Rule::app_name(IE_APP_NAME),
            Rule::tokens(&["msie", "trident"]),
        ]),
        Predicate::IE7 => Rule::pattern(r"\bmsie 7\."),
        Predicate::IE8 => Rule::pattern(r"\bmsie 8\."),
        Predicate::IE9 => Rule::pattern(r"\bmsie 9\."),
        Predicate::IE10 => Rule::pattern(r"\bmsie 10\."),
        Predicate::Android => Rule::tokens(&["android"]),
        Predicate::IOS => Rule::tokens(&["ipad", "iphone", "ipod"]),
        Predicate::IPad => Rule::tokens(&["ipad"]),
        Predicate::IPhone => Rule::tokens(&["iphone"]),
        Predicate::IPod => Rule::tokens(&["ipod"]),
        Predicate::Kindle => Rule::pattern(r"\W(kindle|silk)\W"),
        Predicate::Mobile => Rule::any([
            Rule::tokens(&["iphone", "ipod", "blackberry", "nokia"]),
            Rule::pattern(ANDROID_MOBILE),
        ]),
        Predicate::Tablet => Rule::any([
            Rule::tokens(&["ipad", "tablet"]),
            Rule::tokens(&["android"]).unless(Rule::pattern(ANDROID_MOBILE)),
        ]),
        Predicate::TV => Rule::tokens(&["googletv", "sonydtv"]),
    }
}
