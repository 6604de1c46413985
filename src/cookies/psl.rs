//! Public Suffix List (PSL) lookups for registrable domains.
//!
//! The registrable domain ("eTLD+1") is the smallest unit a registrant can
//! own under the public DNS suffix registry: `example.com` for
//! `foo.bar.example.com`, `bbc.co.uk` for `www.bbc.co.uk`.
//!
//! Uses Mozilla's Public Suffix List via the `psl` crate.

use std::net::IpAddr;
use url::{Host, Url};

/// Get the registrable domain (eTLD+1) for a domain.
/// For "sub.example.com", returns "example.com".
/// For "example.com", returns "example.com".
/// For "com" (public suffix), returns None.
pub fn registrable_domain(domain: &str) -> Option<String> {
    if domain.is_empty() || domain.parse::<IpAddr>().is_ok() {
        return None;
    }

    let domain_lower = domain.to_lowercase();
    psl::domain(domain_lower.as_bytes())
        .and_then(|d| std::str::from_utf8(d.as_bytes()).ok())
        .map(|s| s.to_string())
}

/// Get the registrable domain of a URL's host.
///
/// Returns `None` when the URL has no host (`data:`, `file:///`), when the
/// host is an IP literal, or when the host is itself a public suffix.
pub fn registrable_domain_for_url(url: &Url) -> Option<String> {
    match url.host()? {
        Host::Domain(domain) => registrable_domain(domain),
        Host::Ipv4(_) | Host::Ipv6(_) => None,
    }
}
