//! Cookie access policy.
//!
//! This module decides whether a cookie operation is permitted; it never
//! reads or writes a cookie jar itself.
//!
//! # Architecture
//!
//! This implementation mirrors Chromium's cookie policy layering:
//!
//! | Chromium (C++) | cookiepolicy (Rust) | Responsibility |
//! |----------------|---------------------|----------------|
//! | `net::CookiePolicy` | [`CookiePolicy`](policy::CookiePolicy) | Capability interface |
//! | `net::StaticCookiePolicy` | [`StaticCookiePolicy`](policy::StaticCookiePolicy) | Mode-based decisions |
//! | `SameDomainOrHost` | [`firstparty`] | First-party / third-party classification |
//! | `GetDomainAndRegistry` | [`psl`] | Registrable domain lookup |
//!
//! # Example
//!
//! ```rust
//! use cookiepolicy::cookies::config::CookiePolicyConfig;
//! use cookiepolicy::cookies::firstparty::parse_first_party;
//! use cookiepolicy::cookies::policy::{CookiePolicy, CookiePolicyMode};
//! use url::Url;
//!
//! let config = CookiePolicyConfig::from_json_str(r#"{"mode":3}"#)?;
//! let policy = config.build();
//! assert_eq!(policy.mode(), CookiePolicyMode::BlockAllThirdParty);
//!
//! let target = Url::parse("https://cdn.example.com/app.js")?;
//! let page = parse_first_party("https://www.example.com/");
//! policy.can_get_cookies(&target, page.as_ref()).into_result()?;
//! # Ok::<(), cookiepolicy::base::neterror::NetError>(())
//! ```

pub mod config;
pub mod firstparty;
pub mod policy;
pub mod psl;
