use crate::host::Host;
use std::{convert::Infallible, fmt, str::FromStr, sync::Arc};

mod predicate;
pub use predicate::Predicate;

mod report;
pub use report::Classification;

mod rule;
use rule::Subject;

mod table;

/// User-Agent (UA) sniffer.
///
/// Captures a User-Agent string once and answers a fixed battery of
/// yes/no questions about the rendering engine, browser vendor and
/// device class it advertises. See [the crate level documentation](crate)
/// for the rules behind each predicate.
///
/// The captured string is never modified. Re-detection requires a new
/// [`Classifier`]. Cloning is cheap: clones share the same string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Classifier {
    user_agent: Arc<str>,
    app_name: Option<Arc<str>>,
}

impl Classifier {
    /// Create a new [`Classifier`] for the given User-Agent string.
    ///
    /// Any string is accepted, an empty one included.
    pub fn new(user_agent: impl Into<Arc<str>>) -> Self {
        let user_agent = user_agent.into();
        tracing::trace!(user_agent = %user_agent, "ua classifier created");
        Self {
            user_agent,
            app_name: None,
        }
    }

    /// Create a new [`Classifier`] from whatever the [`Host`] reports.
    ///
    /// A host without User-Agent string results in the empty string.
    pub fn from_host<H: Host + ?Sized>(host: &H) -> Self {
        let classifier = Self::new(host.user_agent().unwrap_or_default());
        match host.app_name() {
            Some(app_name) => classifier.with_app_name(app_name),
            None => classifier,
        }
    }

    /// Attach the application name reported by the host environment.
    ///
    /// Only used by [`Classifier::is_ie`], in browser hosts where
    /// Internet Explorer identifies itself through its application name.
    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<Arc<str>>) -> Self {
        self.set_app_name(app_name);
        self
    }

    /// Attach the application name reported by the host environment.
    pub fn set_app_name(&mut self, app_name: impl Into<Arc<str>>) -> &mut Self {
        let app_name = app_name.into();
        tracing::trace!(app_name = %app_name, "ua classifier: host app name attached");
        self.app_name = Some(app_name);
        self
    }

    /// Returns the application name reported by the host, if any.
    #[must_use]
    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref()
    }

    /// Returns the complete User-Agent string, verbatim.
    #[must_use]
    pub fn whoami(&self) -> &str {
        &self.user_agent
    }

    /// Evaluates the rule of the given [`Predicate`].
    #[must_use]
    pub fn matches(&self, predicate: Predicate) -> bool {
        table::is_match(predicate, self.subject())
    }

    /// Evaluates every [`Predicate`] into a single [`Classification`].
    #[must_use]
    pub fn classify(&self) -> Classification {
        let mut report = Classification {
            user_agent: (*self.user_agent).to_owned(),
            ..Default::default()
        };
        for predicate in Predicate::ALL {
            report.set(predicate, self.matches(predicate));
        }
        report
    }

    /// Iterates over the predicates that hold, in table order.
    pub fn matching(&self) -> impl Iterator<Item = Predicate> + '_ {
        Predicate::ALL.into_iter().filter(|p| self.matches(*p))
    }

    /// Returns true if the browser is using the WebKit engine.
    #[must_use]
    pub fn is_webkit(&self) -> bool {
        self.matches(Predicate::WebKit)
    }

    /// Returns true if the browser is Chrome or compatible.
    #[must_use]
    pub fn is_chrome(&self) -> bool {
        self.matches(Predicate::Chrome)
    }

    /// Returns true if the browser is Safari.
    ///
    /// Never true together with [`Classifier::is_chrome`].
    #[must_use]
    pub fn is_safari(&self) -> bool {
        self.matches(Predicate::Safari)
    }

    /// Returns true if the browser is Firefox.
    #[must_use]
    pub fn is_firefox(&self) -> bool {
        self.matches(Predicate::Firefox)
    }

    /// Returns true if the browser is using the Gecko engine.
    ///
    /// Broader than [`Classifier::is_firefox`]: matches other
    /// Gecko based agents as well.
    #[must_use]
    pub fn is_gecko(&self) -> bool {
        self.matches(Predicate::Gecko)
    }

    /// Returns true if the browser is Opera.
    #[must_use]
    pub fn is_opera(&self) -> bool {
        self.matches(Predicate::Opera)
    }

    /// Returns true if the browser is Internet Explorer.
    ///
    /// Checks the host application name when one is attached,
    /// and the `MSIE` and `Trident` tokens of the User-Agent string.
    #[must_use]
    pub fn is_ie(&self) -> bool {
        self.matches(Predicate::IE)
    }

    /// Returns true if the browser is Internet Explorer 7.
    #[must_use]
    pub fn is_ie7(&self) -> bool {
        self.matches(Predicate::IE7)
    }

    /// Returns true if the browser is Internet Explorer 8.
    #[must_use]
    pub fn is_ie8(&self) -> bool {
        self.matches(Predicate::IE8)
    }

    /// Returns true if the browser is Internet Explorer 9.
    #[must_use]
    pub fn is_ie9(&self) -> bool {
        self.matches(Predicate::IE9)
    }

    /// Returns true if the browser is Internet Explorer 10.
    #[must_use]
    pub fn is_ie10(&self) -> bool {
        self.matches(Predicate::IE10)
    }

    /// Returns true if the browser is running on Android.
    #[must_use]
    pub fn is_android(&self) -> bool {
        self.matches(Predicate::Android)
    }

    /// Returns true if the browser is running on iOS.
    #[must_use]
    pub fn is_ios(&self) -> bool {
        self.matches(Predicate::IOS)
    }

    /// Returns true if the browser is running on an iPad.
    #[must_use]
    pub fn is_ipad(&self) -> bool {
        self.matches(Predicate::IPad)
    }

    /// Returns true if the browser is running on an iPhone.
    #[must_use]
    pub fn is_iphone(&self) -> bool {
        self.matches(Predicate::IPhone)
    }

    /// Returns true if the browser is running on an iPod.
    #[must_use]
    pub fn is_ipod(&self) -> bool {
        self.matches(Predicate::IPod)
    }

    /// Returns true if the browser is running on Kindle.
    #[must_use]
    pub fn is_kindle(&self) -> bool {
        self.matches(Predicate::Kindle)
    }

    /// Returns true if the browser is running on a mobile device.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.matches(Predicate::Mobile)
    }

    /// Returns true if the browser is running on a tablet.
    ///
    /// Android phones advertise a "mobile" token after "Android",
    /// an Android agent without one is taken to be a tablet.
    #[must_use]
    pub fn is_tablet(&self) -> bool {
        self.matches(Predicate::Tablet)
    }

    /// Returns true if the browser is running on a TV.
    #[must_use]
    pub fn is_tv(&self) -> bool {
        self.matches(Predicate::TV)
    }

    fn subject(&self) -> Subject<'_> {
        Subject {
            user_agent: &self.user_agent,
            app_name: self.app_name.as_deref(),
        }
    }
}

impl fmt::Display for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_agent)
    }
}

impl FromStr for Classifier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Classifier {
    fn from(user_agent: &str) -> Self {
        Self::new(user_agent)
    }
}

impl From<String> for Classifier {
    fn from(user_agent: String) -> Self {
        Self::new(user_agent)
    }
}
