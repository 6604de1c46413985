//! # cookiepolicy
//!
//! A Chromium-inspired cookie access policy engine for Rust.
//!
//! `cookiepolicy` answers the two questions a network stack asks before
//! touching a cookie jar: may cookies for this URL be sent, and may this
//! URL store a cookie, given the page that started the request?
//!
//! ## Quick Start
//!
//! ```rust
//! use cookiepolicy::cookies::policy::{CookiePolicy, CookiePolicyMode, StaticCookiePolicy};
//! use url::Url;
//!
//! let policy = StaticCookiePolicy::with_mode(CookiePolicyMode::BlockSettingThirdParty);
//! let target = Url::parse("https://tracker.net/pixel").unwrap();
//! let page = Url::parse("https://www.example.com/").unwrap();
//!
//! assert!(policy.can_get_cookies(&target, Some(&page)).is_allowed());
//! assert!(!policy.can_set_cookie(&target, Some(&page), "id=1").is_allowed());
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Core types and error definitions
//! - [`cookies`] - Registrable domains, first-party classification, and the policy engine
//!
//! ## Security
//!
//! Classification uses the Public Suffix List, so `a.example.com` and
//! `b.example.com` are the same party while `example.com` and `tracker.net`
//! are not. Any URL that cannot be classified is treated as third-party.

pub mod base;
pub mod cookies;
