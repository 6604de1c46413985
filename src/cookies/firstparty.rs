//! First-party / third-party classification.
//!
//! A request is first-party when its URL and the first-party URL of the
//! browsing context share a registrable domain, or failing that, an
//! identical host. Scheme and port never take part in the comparison.
//!
//! Based on Chromium's `SameDomainOrHost` from
//! `net/base/registry_controlled_domains`.

use crate::cookies::psl::registrable_domain_for_url;
use url::Url;

/// Relationship between a request URL and its first-party URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartyContext {
    /// Same registrable domain, or the same literal host.
    SameParty,
    /// Different parties, or at least one side could not be classified.
    CrossParty,
}

impl PartyContext {
    pub fn is_same_party(self) -> bool {
        self == PartyContext::SameParty
    }
}

/// Parse a first-party URL as it arrives from a browsing context.
///
/// Empty and malformed input yield `None`, which [`classify`] treats as
/// third-party.
pub fn parse_first_party(input: &str) -> Option<Url> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    Url::parse(input).ok()
}

/// Classify a URL pair. Absent URLs and URLs without a host are always
/// [`PartyContext::CrossParty`].
pub fn classify(url: Option<&Url>, first_party: Option<&Url>) -> PartyContext {
    let (Some(url), Some(first_party)) = (url, first_party) else {
        tracing::trace!("missing URL, classifying as cross-party");
        return PartyContext::CrossParty;
    };

    let (Some(host), Some(first_party_host)) = (url.host_str(), first_party.host_str()) else {
        tracing::trace!(url = %url, first_party = %first_party, "hostless URL, classifying as cross-party");
        return PartyContext::CrossParty;
    };
    if host.is_empty() || first_party_host.is_empty() {
        return PartyContext::CrossParty;
    }

    let domain = registrable_domain_for_url(url);
    let first_party_domain = registrable_domain_for_url(first_party);

    let same = match (domain, first_party_domain) {
        (Some(a), Some(b)) => a == b,
        // Exactly one side has a registrable domain.
        (Some(_), None) | (None, Some(_)) => false,
        // IP literals, localhost and bare public suffixes.
        (None, None) => host == first_party_host,
    };

    if same {
        PartyContext::SameParty
    } else {
        PartyContext::CrossParty
    }
}

/// Whether `url` and `first_party` belong to the same party.
///
/// Symmetric in its arguments.
pub fn is_same_party(url: Option<&Url>, first_party: Option<&Url>) -> bool {
    classify(url, first_party).is_same_party()
}
