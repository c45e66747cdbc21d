use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};
use uasniff_error::OpaqueError;
use uasniff_utils::macros::match_ignore_ascii_case_str;

/// A named yes/no question that can be asked about a User-Agent string.
///
/// Every predicate is backed by exactly one rule
/// of the classification table, see [`Classifier::matches`].
///
/// [`Classifier::matches`]: super::Classifier::matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Predicate {
    /// WebKit rendering engine
    WebKit,
    /// Chrome or Chromium (WebKit/Blink based)
    Chrome,
    /// Safari (WebKit based, not Chrome)
    Safari,
    /// Firefox
    Firefox,
    /// Any Gecko based agent, not only Firefox
    Gecko,
    /// Opera, Presto engine or an explicit Opera marker
    Opera,
    /// Internet Explorer, any version
    IE,
    /// Internet Explorer 7
    IE7,
    /// Internet Explorer 8
    IE8,
    /// Internet Explorer 9
    IE9,
    /// Internet Explorer 10
    IE10,
    /// Android platform
    Android,
    /// iOS platform (iPad, iPhone or iPod)
    IOS,
    /// iPad device
    IPad,
    /// iPhone device
    IPhone,
    /// iPod device
    IPod,
    /// Amazon Kindle or the Silk browser
    Kindle,
    /// Mobile phone
    Mobile,
    /// Tablet
    Tablet,
    /// Television
    TV,
}

impl Predicate {
    /// All predicates, in table order.
    pub const ALL: [Self; 20] = [
        Self::WebKit,
        Self::Chrome,
        Self::Safari,
        Self::Firefox,
        Self::Gecko,
        Self::Opera,
        Self::IE,
        Self::IE7,
        Self::IE8,
        Self::IE9,
        Self::IE10,
        Self::Android,
        Self::IOS,
        Self::IPad,
        Self::IPhone,
        Self::IPod,
        Self::Kindle,
        Self::Mobile,
        Self::Tablet,
        Self::TV,
    ];

    /// Canonical name of the predicate, e.g. `isWebKit`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebKit => "isWebKit",
            Self::Chrome => "isChrome",
            Self::Safari => "isSafari",
            Self::Firefox => "isFirefox",
            Self::Gecko => "isGecko",
            Self::Opera => "isOpera",
            Self::IE => "isIE",
            Self::IE7 => "isIE7",
            Self::IE8 => "isIE8",
            Self::IE9 => "isIE9",
            Self::IE10 => "isIE10",
            Self::Android => "isAndroid",
            Self::IOS => "isIOS",
            Self::IPad => "isIPad",
            Self::IPhone => "isIPhone",
            Self::IPod => "isIPod",
            Self::Kindle => "isKindle",
            Self::Mobile => "isMobile",
            Self::Tablet => "isTablet",
            Self::TV => "isTV",
        }
    }

    /// Position of the predicate within [`Predicate::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Predicate {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "isWebKit" | "webkit" => Ok(Self::WebKit),
                "isChrome" | "chrome" => Ok(Self::Chrome),
                "isSafari" | "safari" => Ok(Self::Safari),
                "isFirefox" | "firefox" => Ok(Self::Firefox),
                "isGecko" | "gecko" => Ok(Self::Gecko),
                "isOpera" | "opera" => Ok(Self::Opera),
                "isIE" | "ie" => Ok(Self::IE),
                "isIE7" | "ie7" => Ok(Self::IE7),
                "isIE8" | "ie8" => Ok(Self::IE8),
                "isIE9" | "ie9" => Ok(Self::IE9),
                "isIE10" | "ie10" => Ok(Self::IE10),
                "isAndroid" | "android" => Ok(Self::Android),
                "isIOS" | "ios" => Ok(Self::IOS),
                "isIPad" | "ipad" => Ok(Self::IPad),
                "isIPhone" | "iphone" => Ok(Self::IPhone),
                "isIPod" | "ipod" => Ok(Self::IPod),
                "isKindle" | "kindle" => Ok(Self::Kindle),
                "isMobile" | "mobile" => Ok(Self::Mobile),
                "isTablet" | "tablet" => Ok(Self::Tablet),
                "isTV" | "tv" => Ok(Self::TV),
                _ => Err(OpaqueError::from_display(format!("invalid predicate: {s}"))),
            }
        }
    }
}

impl Serialize for Predicate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Predicate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}
