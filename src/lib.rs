//! # cookieconsent
//!
//! Cookie consent for websites: the operator configures named groups of
//! cookies, the visitor accepts or revokes groups, and the choice is kept in
//! a single `CookieConsent` cookie on the visitor's device.
//!
//! ## Features
//!
//! - **Configuration**: JSON group definitions, validated once at startup
//! - **Consent Ledger**: check, grant, grant all, and revoke per request
//! - **Enforcement**: revoking a group expires its cookies, including cookies
//!   on third-party hosts
//! - **HTTP Integration**: read from request headers, write `Set-Cookie`
//!   headers to the response
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cookieconsent::consent::config::ConsentConfig;
//! use cookieconsent::consent::ledger::ConsentLedger;
//!
//! let config = ConsentConfig::from_json_file(Path::new("consent.json"))?;
//!
//! // per request
//! let mut ledger = ConsentLedger::from_headers(&config, request.headers());
//! if form.accept_all {
//!     ledger.grant_all();
//! }
//! ledger.write_response_headers(response.headers_mut())?;
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error types and context helpers
//! - [`consent`] - Configuration, cookie groups, and the consent ledger
//! - [`cookies`] - Request-scoped cookie jar and public suffix checks

pub mod base;
pub mod consent;
pub mod cookies;
