// Offer profiles - expected content of each bookmaker's offer card
//
// Card verification is one routine driven by a profile rather than one
// hand-written routine per bookmaker.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// `data-bookie` identifier of the bet365 offer card.
pub const BET365_BOOKIE_ID: &str = "bookie-67116";

/// Expected content of one bookmaker's offer card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferProfile {
    /// `data-bookie` attribute value
    pub bookie_id: String,
    /// Display name used in logs
    pub name: String,
    /// Alt text of each category icon; the icon's `src` must contain the same text
    pub icon_labels: Vec<String>,
    /// Text the offer title must contain
    pub title: String,
    /// Substring the claim button's `href` must contain
    pub link_substring: String,
    /// Text the expiry label must contain
    pub expiry_text: String,
    /// Origin the claim button navigates to
    pub origin: String,
}

impl OfferProfile {
    /// The bet365 sports welcome offer.
    pub fn bet365() -> Self {
        Self {
            bookie_id: BET365_BOOKIE_ID.to_string(),
            name: "bet365".to_string(),
            icon_labels: vec!["Welcome Offer".to_string(), "Sports".to_string()],
            title: "Sports: Bet £10 & Get £30 in Free Bets".to_string(),
            link_substring: "bet365".to_string(),
            expiry_text: "No Expiry".to_string(),
            origin: "https://www.bet365.com".to_string(),
        }
    }
}

/// Profiles indexed by bookmaker identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferProfiles {
    profiles: Vec<OfferProfile>,
}

impl OfferProfiles {
    /// The profiles shipped with the suite.
    pub fn builtin() -> Self {
        Self {
            profiles: vec![OfferProfile::bet365()],
        }
    }

    /// Adds a profile, replacing any existing one for the same bookmaker.
    pub fn insert(&mut self, profile: OfferProfile) {
        self.profiles.retain(|p| p.bookie_id != profile.bookie_id);
        self.profiles.push(profile);
    }

    /// Looks up the profile for `bookie_id`.
    pub fn get(&self, bookie_id: &str) -> Result<&OfferProfile> {
        self.profiles
            .iter()
            .find(|p| p.bookie_id == bookie_id)
            .ok_or_else(|| Error::UnknownBookie(bookie_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for OfferProfiles {
    fn default() -> Self {
        Self::builtin()
    }
}
