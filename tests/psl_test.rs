//! Public Suffix List (PSL) integration tests.

use cookiepolicy::cookies::psl::{registrable_domain, registrable_domain_for_url};
use url::Url;

#[test]
fn test_public_suffix_has_no_registrable_domain() {
    // Top-level and multi-label suffixes cannot be registered themselves
    for suffix in ["com", "org", "net", "co.uk", "com.au"] {
        assert_eq!(registrable_domain(suffix), None, "{}", suffix);
    }
}

#[test]
fn test_registrable_domain_extraction() {
    // eTLD+1 extraction
    assert_eq!(
        registrable_domain("www.example.com"),
        Some("example.com".to_string())
    );
    assert_eq!(
        registrable_domain("sub.example.com"),
        Some("example.com".to_string())
    );
    assert_eq!(
        registrable_domain("www.bbc.co.uk"),
        Some("bbc.co.uk".to_string())
    );
}

#[test]
fn test_private_suffix_registrable_domain() {
    // github.io is a PSL entry, so each user site is its own registrable domain
    assert_eq!(registrable_domain("github.io"), None);
    assert_eq!(
        registrable_domain("www.user.github.io"),
        Some("user.github.io".to_string())
    );
    assert_ne!(
        registrable_domain("alice.github.io"),
        registrable_domain("bob.github.io")
    );
}

#[test]
fn test_url_registrable_domain_ignores_scheme_and_port() {
    let http = Url::parse("http://a.example.com/").unwrap();
    let https = Url::parse("https://b.example.com:8443/x").unwrap();
    let ws = Url::parse("wss://example.com/socket").unwrap();

    let expected = Some("example.com".to_string());
    assert_eq!(registrable_domain_for_url(&http), expected);
    assert_eq!(registrable_domain_for_url(&https), expected);
    assert_eq!(registrable_domain_for_url(&ws), expected);
}

#[test]
fn test_url_without_registrable_domain() {
    let ip = Url::parse("http://192.168.0.1/a").unwrap();
    let localhost = Url::parse("http://localhost:8080/").unwrap();
    let about = Url::parse("about:blank").unwrap();

    assert_eq!(registrable_domain_for_url(&ip), None);
    assert_eq!(registrable_domain_for_url(&localhost), None);
    assert_eq!(registrable_domain_for_url(&about), None);
}
