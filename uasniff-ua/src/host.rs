//! Adapters between a hosting environment and the [`Classifier`].
//!
//! The classifier never reads ambient state itself.
//! A [`Host`] is the thin layer that does, so the classification
//! logic stays testable with synthetic strings.
//!
//! [`Classifier`]: crate::Classifier

use serde::{Deserialize, Serialize};
use std::{borrow::Cow, env};

/// A hosting environment that can report a User-Agent string.
pub trait Host {
    /// The User-Agent string reported by the host, if any.
    fn user_agent(&self) -> Option<Cow<'_, str>>;

    /// The application name reported by the host, if any.
    ///
    /// Only browser hosts report one.
    fn app_name(&self) -> Option<Cow<'_, str>> {
        None
    }
}

/// Snapshot of a browser host, mirroring the `navigator` object.
///
/// Can be (de)serialized, which makes it usable as configuration
/// for embedders and as a fixture format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigator {
    /// The User-Agent string (`navigator.userAgent`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// The application name (`navigator.appName`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
}

impl Navigator {
    /// Create a [`Navigator`] reporting the given User-Agent string.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: Some(user_agent.into()),
            app_name: None,
        }
    }

    /// Set the application name reported by this [`Navigator`].
    #[must_use]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }
}

impl Host for Navigator {
    fn user_agent(&self) -> Option<Cow<'_, str>> {
        self.user_agent.as_deref().map(Cow::Borrowed)
    }

    fn app_name(&self) -> Option<Cow<'_, str>> {
        self.app_name.as_deref().map(Cow::Borrowed)
    }
}

/// A non-browser host reading the User-Agent string from an environment variable.
///
/// Defaults to [`EnvHost::DEFAULT_VAR`], the variable CGI servers use to
/// forward the User-Agent header of the request. There is no application
/// name outside of a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvHost {
    var: Cow<'static, str>,
}

impl EnvHost {
    /// Environment variable read by [`EnvHost::default`].
    pub const DEFAULT_VAR: &'static str = "HTTP_USER_AGENT";

    /// Create an [`EnvHost`] reading the given environment variable.
    pub fn with_var(var: impl Into<Cow<'static, str>>) -> Self {
        Self { var: var.into() }
    }

    /// The environment variable read by this [`EnvHost`].
    #[must_use]
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvHost {
    fn default() -> Self {
        Self::with_var(Self::DEFAULT_VAR)
    }
}

impl Host for EnvHost {
    fn user_agent(&self) -> Option<Cow<'_, str>> {
        if self.var.is_empty() || self.var.contains(['=', '\0']) {
            tracing::debug!(var = %self.var, "invalid environment variable name: no ua");
            return None;
        }
        match env::var(self.var.as_ref()) {
            Ok(user_agent) => {
                tracing::trace!(var = %self.var, "ua read from environment");
                Some(Cow::Owned(user_agent))
            }
            Err(err) => {
                tracing::debug!(var = %self.var, "no ua in environment: {err}");
                None
            }
        }
    }
}
