//! Static cookie access policy.
//!
//! Decides whether cookies may be read for, or stored from, a request,
//! based on one globally configured [`CookiePolicyMode`] and whether the
//! request is first-party or third-party.
//!
//! | Mode | get, same party | get, cross party | set, same party | set, cross party |
//! |------|-----------------|------------------|-----------------|------------------|
//! | `AllowAll` | allow | allow | allow | allow |
//! | `BlockSettingThirdParty` | allow | allow | allow | deny |
//! | `BlockAll` | deny | deny | deny | deny |
//! | `BlockAllThirdParty` | allow | deny | allow | deny |
//!
//! Based on Chromium's `net::StaticCookiePolicy`.

use crate::base::neterror::{NetError, OK};
use crate::cookies::firstparty::{classify, PartyContext};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use url::Url;

/// Cookie blocking mode.
///
/// The discriminants are persisted in user preferences. Never renumber them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(u8)]
pub enum CookiePolicyMode {
    /// Do not perform any cookie blocking.
    #[default]
    AllowAll = 0,
    /// Prevent only third-party cookies from being set.
    BlockSettingThirdParty = 1,
    /// Block all cookies (third-party or not) from being set or read.
    BlockAll = 2,
    /// Prevent only third-party cookies from being set or read.
    BlockAllThirdParty = 3,
}

impl CookiePolicyMode {
    /// Every mode, in ordinal order.
    pub const ALL: [CookiePolicyMode; 4] = [
        CookiePolicyMode::AllowAll,
        CookiePolicyMode::BlockSettingThirdParty,
        CookiePolicyMode::BlockAll,
        CookiePolicyMode::BlockAllThirdParty,
    ];

    /// The persisted ordinal.
    pub fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CookiePolicyMode::AllowAll => "allow_all",
            CookiePolicyMode::BlockSettingThirdParty => "block_setting_third_party",
            CookiePolicyMode::BlockAll => "block_all",
            CookiePolicyMode::BlockAllThirdParty => "block_all_third_party",
        }
    }

    /// Decision for reading cookies.
    pub fn get_decision(self, context: PartyContext) -> PolicyDecision {
        match (self, context) {
            (CookiePolicyMode::AllowAll, _) => PolicyDecision::Allow,
            (CookiePolicyMode::BlockSettingThirdParty, _) => PolicyDecision::Allow,
            (CookiePolicyMode::BlockAll, _) => PolicyDecision::Deny(DenyReason::AllCookiesBlocked),
            (CookiePolicyMode::BlockAllThirdParty, PartyContext::SameParty) => {
                PolicyDecision::Allow
            }
            (CookiePolicyMode::BlockAllThirdParty, PartyContext::CrossParty) => {
                PolicyDecision::Deny(DenyReason::ThirdPartyBlocked)
            }
        }
    }

    /// Decision for storing a cookie.
    pub fn set_decision(self, context: PartyContext) -> PolicyDecision {
        match (self, context) {
            (CookiePolicyMode::AllowAll, _) => PolicyDecision::Allow,
            (CookiePolicyMode::BlockAll, _) => PolicyDecision::Deny(DenyReason::AllCookiesBlocked),
            (
                CookiePolicyMode::BlockSettingThirdParty | CookiePolicyMode::BlockAllThirdParty,
                PartyContext::SameParty,
            ) => PolicyDecision::Allow,
            (
                CookiePolicyMode::BlockSettingThirdParty | CookiePolicyMode::BlockAllThirdParty,
                PartyContext::CrossParty,
            ) => PolicyDecision::Deny(DenyReason::ThirdPartyBlocked),
        }
    }
}

impl From<CookiePolicyMode> for i32 {
    fn from(mode: CookiePolicyMode) -> Self {
        mode.as_i32()
    }
}

impl TryFrom<i32> for CookiePolicyMode {
    type Error = NetError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CookiePolicyMode::AllowAll),
            1 => Ok(CookiePolicyMode::BlockSettingThirdParty),
            2 => Ok(CookiePolicyMode::BlockAll),
            3 => Ok(CookiePolicyMode::BlockAllThirdParty),
            other => Err(NetError::invalid_mode(other)),
        }
    }
}

impl FromStr for CookiePolicyMode {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(ordinal) = trimmed.parse::<i32>() {
            return CookiePolicyMode::try_from(ordinal);
        }

        let name = trimmed.to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == name)
            .ok_or_else(|| NetError::invalid_config(format!("unknown cookie policy mode: {}", s)))
    }
}

impl fmt::Display for CookiePolicyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a cookie operation was denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenyReason {
    /// The mode blocks every cookie regardless of party.
    AllCookiesBlocked,
    /// The request is third-party and the mode blocks this operation for third parties.
    ThirdPartyBlocked,
}

/// Outcome of a single policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyDecision {
    Allow,
    Deny(DenyReason),
}

impl PolicyDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, PolicyDecision::Allow)
    }

    pub fn deny_reason(self) -> Option<DenyReason> {
        match self {
            PolicyDecision::Allow => None,
            PolicyDecision::Deny(reason) => Some(reason),
        }
    }

    /// The net error a caller should report, if any.
    pub fn to_net_error(self) -> Option<NetError> {
        self.deny_reason().map(|_| NetError::AccessDenied)
    }

    /// Convert into a `Result` so denials can be propagated with `?`.
    pub fn into_result(self) -> Result<(), NetError> {
        match self.to_net_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Chromium-style integer result: `OK` or `ERR_ACCESS_DENIED`.
    pub fn as_i32(self) -> i32 {
        self.to_net_error().map_or(OK, |err| err.as_i32())
    }
}

/// A cookie access policy.
///
/// Implementations must answer synchronously and must never panic on any
/// URL pair. A missing `first_party_for_cookies` is treated as third-party.
pub trait CookiePolicy {
    /// Whether cookies stored for `url` may be attached to a request made
    /// on behalf of `first_party_for_cookies`.
    fn can_get_cookies(&self, url: &Url, first_party_for_cookies: Option<&Url>) -> PolicyDecision;

    /// Whether a `Set-Cookie` line received from `url` may be stored.
    fn can_set_cookie(
        &self,
        url: &Url,
        first_party_for_cookies: Option<&Url>,
        cookie_line: &str,
    ) -> PolicyDecision;
}

impl<P: CookiePolicy + ?Sized> CookiePolicy for &P {
    fn can_get_cookies(&self, url: &Url, first_party_for_cookies: Option<&Url>) -> PolicyDecision {
        (**self).can_get_cookies(url, first_party_for_cookies)
    }

    fn can_set_cookie(
        &self,
        url: &Url,
        first_party_for_cookies: Option<&Url>,
        cookie_line: &str,
    ) -> PolicyDecision {
        (**self).can_set_cookie(url, first_party_for_cookies, cookie_line)
    }
}

impl<P: CookiePolicy + ?Sized> CookiePolicy for Arc<P> {
    fn can_get_cookies(&self, url: &Url, first_party_for_cookies: Option<&Url>) -> PolicyDecision {
        (**self).can_get_cookies(url, first_party_for_cookies)
    }

    fn can_set_cookie(
        &self,
        url: &Url,
        first_party_for_cookies: Option<&Url>,
        cookie_line: &str,
    ) -> PolicyDecision {
        (**self).can_set_cookie(url, first_party_for_cookies, cookie_line)
    }
}

/// Cookie policy with a single, runtime-adjustable mode.
///
/// Decisions complete synchronously. The mode is stored atomically, so one
/// instance can be shared between threads (e.g. behind an `Arc`) while a
/// preferences observer calls [`set_mode`](Self::set_mode).
#[derive(Debug)]
pub struct StaticCookiePolicy {
    mode: AtomicU8,
}

impl Default for StaticCookiePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticCookiePolicy {
    /// Create a policy that allows all cookies.
    pub fn new() -> Self {
        Self::with_mode(CookiePolicyMode::AllowAll)
    }

    pub fn with_mode(mode: CookiePolicyMode) -> Self {
        Self {
            mode: AtomicU8::new(mode as u8),
        }
    }

    /// The mode currently enforced.
    pub fn mode(&self) -> CookiePolicyMode {
        Self::decode(self.mode.load(Ordering::Acquire))
    }

    /// Sets the mode to enforce. Call this when the user's preferences change.
    pub fn set_mode(&self, mode: CookiePolicyMode) {
        let previous = Self::decode(self.mode.swap(mode as u8, Ordering::AcqRel));
        if previous != mode {
            tracing::debug!(from = %previous, to = %mode, "cookie policy mode changed");
        }
    }

    fn decode(stored: u8) -> CookiePolicyMode {
        match stored {
            0 => CookiePolicyMode::AllowAll,
            1 => CookiePolicyMode::BlockSettingThirdParty,
            2 => CookiePolicyMode::BlockAll,
            // Only values written by `with_mode` and `set_mode` are ever stored.
            _ => CookiePolicyMode::BlockAllThirdParty,
        }
    }
}

impl CookiePolicy for StaticCookiePolicy {
    fn can_get_cookies(&self, url: &Url, first_party_for_cookies: Option<&Url>) -> PolicyDecision {
        let mode = self.mode();
        // Party only matters for modes that treat the two columns differently.
        match mode {
            CookiePolicyMode::AllowAll
            | CookiePolicyMode::BlockSettingThirdParty
            | CookiePolicyMode::BlockAll => mode.get_decision(PartyContext::CrossParty),
            CookiePolicyMode::BlockAllThirdParty => {
                mode.get_decision(classify(Some(url), first_party_for_cookies))
            }
        }
    }

    fn can_set_cookie(
        &self,
        url: &Url,
        first_party_for_cookies: Option<&Url>,
        _cookie_line: &str,
    ) -> PolicyDecision {
        let mode = self.mode();
        match mode {
            CookiePolicyMode::AllowAll | CookiePolicyMode::BlockAll => {
                mode.set_decision(PartyContext::CrossParty)
            }
            CookiePolicyMode::BlockSettingThirdParty | CookiePolicyMode::BlockAllThirdParty => {
                mode.set_decision(classify(Some(url), first_party_for_cookies))
            }
        }
    }
}
