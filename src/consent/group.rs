use std::fmt;

/// Where a configured cookie lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostKey {
    /// The host serving the current request.
    Local,
    /// A third-party host. Written with underscores in place of dots in the
    /// configuration, e.g. `google_com`.
    Literal(String),
}

impl HostKey {
    /// Config key that stands for the current request host.
    pub const LOCAL: &'static str = "local";

    pub fn parse(key: &str) -> Self {
        if key == Self::LOCAL {
            HostKey::Local
        } else {
            HostKey::Literal(key.to_string())
        }
    }

    /// Resolve to the cookie domain an expiry must be issued for.
    pub fn resolve(&self, request_host: &str) -> String {
        match self {
            HostKey::Local => request_host.to_string(),
            HostKey::Literal(key) => key.replace('_', "."),
        }
    }
}

impl fmt::Display for HostKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostKey::Local => f.write_str(Self::LOCAL),
            HostKey::Literal(key) => f.write_str(key),
        }
    }
}

/// A single cookie a group covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSpec {
    pub host_key: HostKey,
    pub cookie_name: String,
}

impl CookieSpec {
    pub fn new(host_key: HostKey, cookie_name: impl Into<String>) -> Self {
        Self {
            host_key,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn local(cookie_name: impl Into<String>) -> Self {
        Self::new(HostKey::Local, cookie_name)
    }
}

/// A named category of cookies that takes a single consent decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieGroup {
    pub name: String,
    pub cookies: Vec<CookieSpec>,
}

impl CookieGroup {
    /// The group consent logic always keeps present.
    pub const REQUIRED_DEFAULT: &'static str = "Necessary";
    pub const NECESSARY: &'static str = "Necessary";
    pub const ANALYTICS: &'static str = "Analytics";
    pub const MARKETING: &'static str = "Marketing";
    pub const PREFERENCES: &'static str = "Preferences";

    pub fn new(name: impl Into<String>, cookies: Vec<CookieSpec>) -> Self {
        Self {
            name: name.into(),
            cookies,
        }
    }

    pub fn is_required(&self) -> bool {
        self.name == Self::REQUIRED_DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_key_parse() {
        assert_eq!(HostKey::parse("local"), HostKey::Local);
        assert_eq!(
            HostKey::parse("google_com"),
            HostKey::Literal("google_com".to_string())
        );
    }

    #[test]
    fn test_resolve_local_uses_request_host() {
        assert_eq!(HostKey::Local.resolve("www.example.org"), "www.example.org");
    }

    #[test]
    fn test_resolve_literal_replaces_underscores() {
        let key = HostKey::parse("www_google-analytics_com");
        assert_eq!(key.resolve("example.org"), "www.google-analytics.com");
    }

    #[test]
    fn test_is_required() {
        assert!(CookieGroup::new("Necessary", vec![]).is_required());
        assert!(!CookieGroup::new("Analytics", vec![]).is_required());
    }
}
