use crate::base::error::ConsentError;
use cookie::{Cookie, CookieJar};
use http::header::{HeaderMap, HeaderValue, COOKIE, SET_COOKIE};

/// Request-scoped cookie jar.
///
/// Holds the cookies the visitor sent with the request (the originals) and
/// the delta a response has to write back: cookies that were set plus
/// removal cookies queued by [`ConsentJar::force_expiry`].
///
/// Expiries are kept apart from the inner [`CookieJar`] because its delta is
/// keyed by name only, and the same cookie name may need expiring on several
/// domains.
#[derive(Debug, Default, Clone)]
pub struct ConsentJar {
    jar: CookieJar,
    expired: Vec<Cookie<'static>>,
}

impl ConsentJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a jar from a single `Cookie` request header value.
    pub fn from_cookie_header(header: &str) -> Self {
        let mut jar = Self::new();
        jar.add_cookie_header(header);
        jar
    }

    /// Build a jar from every `Cookie` header of a request.
    pub fn from_request_headers(headers: &HeaderMap) -> Self {
        let mut jar = Self::new();
        for value in headers.get_all(COOKIE) {
            match value.to_str() {
                Ok(header) => jar.add_cookie_header(header),
                Err(_) => tracing::debug!("ignoring non-ASCII Cookie header"),
            }
        }
        jar
    }

    /// Parse a `Cookie` header (percent-decoded) and record its pairs as originals.
    pub fn add_cookie_header(&mut self, header: &str) {
        for parsed in Cookie::split_parse_encoded(header) {
            match parsed {
                Ok(c) => self.jar.add_original(c.into_owned()),
                Err(e) => tracing::debug!(error = %e, "skipping malformed cookie pair"),
            }
        }
    }

    /// Get a cookie, preferring a value set during this request over the original.
    pub fn get(&self, name: &str) -> Option<&Cookie<'static>> {
        self.jar.get(name)
    }

    /// Set a cookie on the response.
    pub fn set(&mut self, cookie: Cookie<'static>) {
        self.jar.add(cookie);
    }

    /// Queue a removal cookie for `name` on `domain` and `path`.
    ///
    /// The cookie does not have to be present in the request: cookies set for
    /// other hosts are never sent back to us but can still be expired.
    pub fn force_expiry(&mut self, name: &str, domain: Option<&str>, path: &str) {
        let mut builder = Cookie::build((name.to_string(), String::new())).path(path.to_string());
        if let Some(domain) = domain {
            builder = builder.domain(domain.to_string());
        }
        let mut removal = builder.build();
        removal.make_removal();

        self.expired
            .retain(|c| c.name() != removal.name() || c.domain() != removal.domain());
        self.expired.push(removal);
    }

    /// Cookies the response must carry: expiries first, then cookies set.
    pub fn delta(&self) -> Vec<&Cookie<'static>> {
        self.expired.iter().chain(self.jar.delta()).collect()
    }

    /// Removal cookies queued so far.
    pub fn expired(&self) -> &[Cookie<'static>] {
        &self.expired
    }

    /// Append one `Set-Cookie` header per delta cookie.
    pub fn write_set_cookie_headers(&self, headers: &mut HeaderMap) -> Result<(), ConsentError> {
        for c in self.delta() {
            let value = HeaderValue::from_str(&c.encoded().to_string()).map_err(|_| {
                ConsentError::InvalidHeaderValue {
                    name: c.name().to_string(),
                }
            })?;
            headers.append(SET_COOKIE, value);
        }
        Ok(())
    }
}
