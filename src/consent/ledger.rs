//! The visitor's consent, read from and written to the `CookieConsent` cookie.
//!
//! A ledger lives for one request. It borrows the shared [`ConsentConfig`],
//! owns the request's [`ConsentJar`], and every mutation re-serializes the
//! whole consent set into the jar so the response can write it back.

use crate::base::error::ConsentError;
use crate::consent::config::ConsentConfig;
use crate::consent::group::CookieGroup;
use crate::cookies::jar::ConsentJar;
use cookie::Cookie;
use http::header::{HeaderMap, HOST};
use http::uri::Authority;
use time::{Duration, OffsetDateTime};

/// Name of the cookie holding the consent set.
pub const COOKIE_NAME: &str = "CookieConsent";

/// Separator between group names in the cookie value.
pub const DELIMITER: &str = ",";

/// Lifetime of the consent cookie in days.
pub const LIFETIME_DAYS: i64 = 90;

/// Attributes of the persisted consent cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerOptions {
    /// Cookie name.
    pub cookie_name: String,

    /// How long the consent cookie is kept.
    pub lifetime: Duration,

    /// Path for the consent cookie and for expiries.
    pub path: String,
}

impl Default for LedgerOptions {
    fn default() -> Self {
        Self {
            cookie_name: COOKIE_NAME.to_string(),
            lifetime: Duration::days(LIFETIME_DAYS),
            path: "/".to_string(),
        }
    }
}

/// Request-scoped consent ledger.
#[derive(Debug)]
pub struct ConsentLedger<'a> {
    config: &'a ConsentConfig,
    options: LedgerOptions,
    host: String,
    jar: ConsentJar,
}

impl<'a> ConsentLedger<'a> {
    /// Create a ledger for a request to `host` carrying the cookies in `jar`.
    pub fn new(config: &'a ConsentConfig, host: impl Into<String>, jar: ConsentJar) -> Self {
        Self::with_options(config, host, jar, LedgerOptions::default())
    }

    pub fn with_options(
        config: &'a ConsentConfig,
        host: impl Into<String>,
        jar: ConsentJar,
        options: LedgerOptions,
    ) -> Self {
        Self {
            config,
            options,
            host: host.into(),
            jar,
        }
    }

    /// Create a ledger from request headers: `Host` (port stripped) and `Cookie`.
    pub fn from_headers(config: &'a ConsentConfig, headers: &HeaderMap) -> Self {
        let host = headers
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .map(request_host)
            .unwrap_or_default();
        Self::new(config, host, ConsentJar::from_request_headers(headers))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn config(&self) -> &ConsentConfig {
        self.config
    }

    /// Whether the visitor accepted `group`.
    ///
    /// Fails when `group` is not configured. The required default group is
    /// always accepted.
    pub fn check(&self, group: &str) -> Result<bool, ConsentError> {
        if !self.config.contains(group) {
            return Err(ConsentError::group_not_configured(group));
        }
        if group == CookieGroup::REQUIRED_DEFAULT {
            return Ok(true);
        }
        Ok(self.get_consent().iter().any(|g| g == group))
    }

    /// Record consent for `group`.
    ///
    /// Unconfigured names are accepted and written as-is.
    pub fn grant(&mut self, group: &str) {
        if !self.config.contains(group) {
            tracing::warn!(group = %group, "granting consent for an unconfigured cookie group");
        }

        let mut consent = self.get_consent();
        consent.push(group.to_string());
        self.set_consent(consent);
        tracing::debug!(group = %group, "cookie consent granted");
    }

    /// Replace the consent with every configured group.
    pub fn grant_all(&mut self) {
        let consent: Vec<String> = self.config.group_names().map(str::to_string).collect();
        self.set_consent(consent);
        tracing::debug!(groups = self.config.len(), "cookie consent granted for all groups");
    }

    /// Revoke consent for `group` and expire the cookies it covers.
    ///
    /// The required default group is written back afterwards, so revoking it
    /// only expires its cookies.
    pub fn remove(&mut self, group: &str) {
        let config = self.config;
        let mut consent = self.get_consent();

        if let Some(configured) = config.group(group) {
            for spec in &configured.cookies {
                let domain = spec.host_key.resolve(&self.host);
                let domain = (!domain.is_empty()).then_some(domain.as_str());
                self.jar
                    .force_expiry(&spec.cookie_name, domain, &self.options.path);
                tracing::debug!(
                    group = %group,
                    cookie = %spec.cookie_name,
                    domain = ?domain,
                    "expiring revoked cookie"
                );
            }
        }

        consent.retain(|g| g != group);
        self.set_consent(consent);
        tracing::debug!(group = %group, "cookie consent removed");
    }

    /// Group names in the persisted cookie, in stored order.
    ///
    /// An absent or empty cookie yields an empty list; empty segments and
    /// repeated names are dropped.
    pub fn get_consent(&self) -> Vec<String> {
        let mut consent: Vec<String> = Vec::new();
        let value = self.persisted_value().unwrap_or("");
        for name in value.split(DELIMITER).filter(|s| !s.is_empty()) {
            if !consent.iter().any(|g| g == name) {
                consent.push(name.to_string());
            }
        }
        consent
    }

    /// Persist `consent` plus the required default group, de-duplicated.
    pub fn set_consent<I, S>(&mut self, consent: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        let names = consent
            .into_iter()
            .map(Into::into)
            .chain(std::iter::once(CookieGroup::REQUIRED_DEFAULT.to_string()));
        for name in names {
            if !name.is_empty() && !unique.contains(&name) {
                unique.push(name);
            }
        }

        let value = unique.join(DELIMITER);
        let cookie = Cookie::build((self.options.cookie_name.clone(), value))
            .path(self.options.path.clone())
            .max_age(self.options.lifetime)
            .expires(OffsetDateTime::now_utc() + self.options.lifetime)
            .secure(false)
            .http_only(false)
            .build();
        self.jar.set(cookie);
    }

    /// Current value of the consent cookie, including changes made in this request.
    pub fn persisted_value(&self) -> Option<&str> {
        self.jar.get(&self.options.cookie_name).map(|c| c.value())
    }

    /// Cookies the response has to write: expiries, then the consent cookie.
    pub fn pending_cookies(&self) -> Vec<&Cookie<'static>> {
        self.jar.delta()
    }

    /// Append the pending cookies as `Set-Cookie` headers.
    pub fn write_response_headers(&self, headers: &mut HeaderMap) -> Result<(), ConsentError> {
        self.jar.write_set_cookie_headers(headers)
    }

    pub fn into_jar(self) -> ConsentJar {
        self.jar
    }
}

/// Host of a `Host` header value without the port.
fn request_host(value: &str) -> String {
    match value.parse::<Authority>() {
        Ok(authority) => authority.host().to_string(),
        Err(_) => value.to_string(),
    }
}
