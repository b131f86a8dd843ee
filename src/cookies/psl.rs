//! Public Suffix List (PSL) checks for cookie expiry domains.
//!
//! A removal cookie scoped to a public suffix such as `.com` or `.co.uk` is
//! rejected by browsers, so a host key that resolves to one can never expire
//! anything. Uses Mozilla's Public Suffix List via the `psl` crate.

use psl::{List, Psl};

/// Check if a domain is a public suffix (e.g., "com", "co.uk").
/// Returns true if the domain itself is a public suffix.
pub fn is_public_suffix(domain: &str) -> bool {
    let domain_lower = domain.trim_start_matches('.').to_lowercase();
    let domain_bytes = domain_lower.as_bytes();

    if let Some(suffix) = List.suffix(domain_bytes) {
        suffix.as_bytes() == domain_bytes
    } else {
        false
    }
}
