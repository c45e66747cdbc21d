use super::Predicate;
use serde::{Deserialize, Serialize};

/// Snapshot of every predicate for a single User-Agent string.
///
/// Created by [`Classifier::classify`](super::Classifier::classify).
/// One field per [`Predicate`], serialized under its canonical name (e.g. `isWebKit`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// The User-Agent string, verbatim.
    pub user_agent: String,
    /// Outcome of [`Predicate::WebKit`].
    #[serde(rename = "isWebKit")]
    pub is_webkit: bool,
    /// Outcome of [`Predicate::Chrome`].
    pub is_chrome: bool,
    /// Outcome of [`Predicate::Safari`].
    pub is_safari: bool,
    /// Outcome of [`Predicate::Firefox`].
    pub is_firefox: bool,
    /// Outcome of [`Predicate::Gecko`].
    pub is_gecko: bool,
    /// Outcome of [`Predicate::Opera`].
    pub is_opera: bool,
    /// Outcome of [`Predicate::IE`].
    #[serde(rename = "isIE")]
    pub is_ie: bool,
    /// Outcome of [`Predicate::IE7`].
    #[serde(rename = "isIE7")]
    pub is_ie7: bool,
    /// Outcome of [`Predicate::IE8`].
    #[serde(rename = "isIE8")]
    pub is_ie8: bool,
    /// Outcome of [`Predicate::IE9`].
    #[serde(rename = "isIE9")]
    pub is_ie9: bool,
    /// Outcome of [`Predicate::IE10`].
    #[serde(rename = "isIE10")]
    pub is_ie10: bool,
    /// Outcome of [`Predicate::Android`].
    pub is_android: bool,
    /// Outcome of [`Predicate::IOS`].
    #[serde(rename = "isIOS")]
    pub is_ios: bool,
    /// Outcome of [`Predicate::IPad`].
    #[serde(rename = "isIPad")]
    pub is_ipad: bool,
    /// Outcome of [`Predicate::IPhone`].
    #[serde(rename = "isIPhone")]
    pub is_iphone: bool,
    /// Outcome of [`Predicate::IPod`].
    #[serde(rename = "isIPod")]
    pub is_ipod: bool,
    /// Outcome of [`Predicate::Kindle`].
    pub is_kindle: bool,
    /// Outcome of [`Predicate::Mobile`].
    pub is_mobile: bool,
    /// Outcome of [`Predicate::Tablet`].
    pub is_tablet: bool,
    /// Outcome of [`Predicate::TV`].
    #[serde(rename = "isTV")]
    pub is_tv: bool,
}

impl Classification {
    /// Returns the recorded outcome for the given predicate.
    #[must_use]
    pub fn get(&self, predicate: Predicate) -> bool {
        *self.field(predicate)
    }

    /// Predicates that hold, in table order.
    pub fn matching(&self) -> impl Iterator<Item = Predicate> + '_ {
        Predicate::ALL.into_iter().filter(|p| self.get(*p))
    }

    pub(super) fn set(&mut self, predicate: Predicate, value: bool) {
        *self.field_mut(predicate) = value;
    }

    fn field(&self, predicate: Predicate) -> &bool {
        match predicate {
            Predicate::WebKit => &self.is_webkit,
            Predicate::Chrome => &self.is_chrome,
            Predicate::Safari => &self.is_safari,
            Predicate::Firefox => &self.is_firefox,
            Predicate::Gecko => &self.is_gecko,
            Predicate::Opera => &self.is_opera,
            Predicate::IE => &self.is_ie,
            Predicate::IE7 => &self.is_ie7,
            Predicate::IE8 => &self.is_ie8,
            Predicate::IE9 => &self.is_ie9,
            Predicate::IE10 => &self.is_ie10,
            Predicate::Android => &self.is_android,
            Predicate::IOS => &self.is_ios,
            Predicate::IPad => &self.is_ipad,
            Predicate::IPhone => &self.is_iphone,
            Predicate::IPod => &self.is_ipod,
            Predicate::Kindle => &self.is_kindle,
            Predicate::Mobile => &self.is_mobile,
            Predicate::Tablet => &self.is_tablet,
            Predicate::TV => &self.is_tv,
        }
    }

    fn field_mut(&mut self, predicate: Predicate) -> &mut bool {
        match predicate {
            Predicate::WebKit => &mut self.is_webkit,
            Predicate::Chrome => &mut self.is_chrome,
            Predicate::Safari => &mut self.is_safari,
            Predicate::Firefox => &mut self.is_firefox,
            Predicate::Gecko => &mut self.is_gecko,
            Predicate::Opera => &mut self.is_opera,
            Predicate::IE => &mut self.is_ie,
            Predicate::IE7 => &mut self.is_ie7,
            Predicate::IE8 => &mut self.is_ie8,
            Predicate::IE9 => &mut self.is_ie9,
            Predicate::IE10 => &mut self.is_ie10,
            Predicate::Android => &mut self.is_android,
            Predicate::IOS => &mut self.is_ios,
            Predicate::IPad => &mut self.is_ipad,
            Predicate::IPhone => &mut self.is_iphone,
            Predicate::IPod => &mut self.is_ipod,
            Predicate::Kindle => &mut self.is_kindle,
            Predicate::Mobile => &mut self.is_mobile,
            Predicate::Tablet => &mut self.is_tablet,
            Predicate::TV => &mut self.is_tv,
        }
    }
}
