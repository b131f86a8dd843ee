//! Request-scoped cookie handling.
//!
//! - **Jar**: incoming `Cookie` header plus the `Set-Cookie` delta of a
//!   response ([`ConsentJar`](jar::ConsentJar))
//! - **PSL**: public suffix checks for expiry domains ([`psl`])
//!
//! The jar is the only place the consent ledger reads from or writes to. It
//! is filled once at request start and drained into the response headers at
//! the end:
//!
//! ```rust
//! use cookieconsent::cookies::jar::ConsentJar;
//! use http::HeaderMap;
//!
//! let mut jar = ConsentJar::from_cookie_header("_ga=GA1.2.3");
//! jar.force_expiry("_ga", Some("example.com"), "/");
//!
//! let mut response = HeaderMap::new();
//! jar.write_set_cookie_headers(&mut response)?;
//! assert_eq!(response.len(), 1);
//! # Ok::<(), cookieconsent::base::error::ConsentError>(())
//! ```

pub mod jar;
pub mod psl;
