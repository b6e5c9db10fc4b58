// Locator registry for the Free Bets page
//
// Every selector the suite uses lives here so tests never embed raw
// selectors. Nothing is cached: each call builds a fresh Selector and the
// driver resolves it against the page as it is at that moment.

use crate::selector::{Scope, Selector};

const OFFER_CARD: &str = "li.promo-codes-card";
const SEE_MORE_BUTTON: &str = "button.promo-codes-see-more";

/// Process-wide locator table.
pub static LOCATORS: Locators = Locators::new();

/// Elements found inside an offer card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardElement {
    BookieLogo,
    OfferTitle,
    ClaimBonusButton,
    ExpiryText,
    PromoCodeText,
    TermsText,
    /// Category icon identified by its alt text ("Welcome Offer", "Sports", ...)
    Icon(String),
}

impl CardElement {
    /// Icon with the given alt text.
    pub fn icon(label: impl Into<String>) -> Self {
        CardElement::Icon(label.into())
    }

    /// The unscoped selector for this element.
    pub fn selector(&self) -> Selector {
        match self {
            CardElement::BookieLogo => Selector::css("figure img"),
            CardElement::OfferTitle => Selector::css("#card-name"),
            CardElement::ClaimBonusButton => Selector::css("a.btn-cta"),
            CardElement::ExpiryText => Selector::css(".font-red"),
            CardElement::PromoCodeText => Selector::css(".fs-10:has-text(\"PROMO CODE\")"),
            CardElement::TermsText => Selector::css(".fs-10:has-text(\"T&Cs apply\")"),
            CardElement::Icon(label) => Selector::css(format!("img[alt=\"{}\"]", escape(label))),
        }
    }
}

/// Named element queries for the Free Bets page.
#[derive(Debug, Default)]
pub struct Locators {
    _private: (),
}

impl Locators {
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Every offer card on the page.
    pub fn all_offer_cards(&self) -> Selector {
        Selector::css(OFFER_CARD)
    }

    /// Promo-code cards; the page renders offers and promo codes with the same card markup.
    pub fn promo_cards(&self) -> Selector {
        Selector::css(OFFER_CARD)
    }

    /// The "see more" pagination control.
    pub fn see_more_button(&self) -> Selector {
        Selector::css(SEE_MORE_BUTTON)
    }

    /// Card(s) whose `data-bookie` attribute equals `bookie_id`.
    ///
    /// Several cards may share an identifier; callers pick one with
    /// [`Selector::pick`] before using it as a scope.
    pub fn offer_card(&self, bookie_id: &str) -> Selector {
        Selector::css(format!("li[data-bookie=\"{}\"]", escape(bookie_id)))
    }

    /// A card element resolved under `scope`, narrowed to its first match.
    pub fn element(&self, element: &CardElement, scope: &Scope) -> Selector {
        scope.resolve(&element.selector()).first()
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
