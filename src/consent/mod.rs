//! Cookie consent: configured groups and the visitor's ledger.
//!
//! | Type | Responsibility |
//! |------|----------------|
//! | [`ConsentConfig`](config::ConsentConfig) | Configured groups, immutable |
//! | [`CookieGroup`](group::CookieGroup) | Named set of cookies, one consent decision |
//! | [`ConsentLedger`](ledger::ConsentLedger) | Visitor's accepted groups for one request |
//! | [`CookieGroupRecord`](record::CookieGroupRecord) | What the admin layer stores per group |
//!
//! # Example
//!
//! ```rust
//! use cookieconsent::consent::config::ConsentConfig;
//! use cookieconsent::consent::ledger::ConsentLedger;
//! use cookieconsent::cookies::jar::ConsentJar;
//!
//! let config = ConsentConfig::from_json_str(r#"{
//!     "Necessary": { "local": ["PHPSESSID"] },
//!     "Analytics": { "local": ["_ga"] }
//! }"#)?;
//!
//! let jar = ConsentJar::from_cookie_header("CookieConsent=Analytics%2CNecessary");
//! let mut ledger = ConsentLedger::new(&config, "example.com", jar);
//! assert!(ledger.check("Analytics")?);
//!
//! ledger.remove("Analytics");
//! assert!(!ledger.check("Analytics")?);
//! assert_eq!(ledger.persisted_value(), Some("Necessary"));
//! # Ok::<(), cookieconsent::base::error::ConsentError>(())
//! ```

pub mod config;
pub mod group;
pub mod ledger;
pub mod record;
