// Mock Page - Scripted in-memory Driver for integration tests
//
// Elements are keyed by their rendered selector string, so a test only
// "finds" an element if the page object resolves exactly the selector the
// fixture registered (scoping mistakes show up as missing elements).
//
// Clicking an element with an href navigates the page, unless its target is
// "_blank", in which case the URL is recorded as an opened tab instead.
// Deferred actions fire after a number of reads, which lets tests exercise
// the retry loops with content that changes late.

// Note: Functions appear "unused" because each test binary compiles separately,
// but they ARE used across multiple test files. Suppress false-positive warnings.
#![allow(dead_code)]

use async_trait::async_trait;
use free_bets_e2e::{
    BET365_BOOKIE_ID, CardElement, Driver, Error, LOCATORS, Result, Scope, Selector, SuiteConfig,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

pub type Action = Arc<dyn Fn(&mut MockState) + Send + Sync>;

/// Link target of the bet365 claim button in the fixture
pub const BET365_LINK: &str = "https://www.bet365.com/olp/open-account?affiliate=365_03230998";

#[derive(Debug, Clone, Default)]
pub struct MockElement {
    pub visible: bool,
    pub text: String,
    pub attributes: HashMap<String, String>,
}

impl MockElement {
    pub fn visible() -> Self {
        Self {
            visible: true,
            ..Self::default()
        }
    }

    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }
}

#[derive(Default)]
pub struct MockState {
    pub elements: HashMap<String, MockElement>,
    pub counts: HashMap<String, usize>,
    pub url: String,
    pub status: Option<u16>,
    pub visits: Vec<String>,
    pub clicks: Vec<String>,
    pub opened_tabs: Vec<String>,
    handlers: HashMap<String, Action>,
    deferred: Vec<(usize, Action)>,
}

impl MockState {
    pub fn element(&self, selector: &Selector) -> Option<&MockElement> {
        self.elements.get(&selector.to_string())
    }

    pub fn element_mut(&mut self, selector: &Selector) -> Option<&mut MockElement> {
        self.elements.get_mut(&selector.to_string())
    }

    pub fn insert(&mut self, selector: &Selector, element: MockElement) {
        self.elements.insert(selector.to_string(), element);
    }

    pub fn set_text(&mut self, selector: &Selector, text: &str) {
        if let Some(element) = self.element_mut(selector) {
            element.text = text.to_string();
        }
    }

    pub fn set_count(&mut self, selector: &Selector, count: usize) {
        self.counts.insert(selector.to_string(), count);
    }

    /// Runs `action` once `reads` more driver reads have happened.
    pub fn defer(&mut self, reads: usize, action: impl Fn(&mut MockState) + Send + Sync + 'static) {
        self.deferred.push((reads, Arc::new(action)));
    }

    fn tick(&mut self) {
        let mut ready = Vec::new();
        self.deferred.retain_mut(|(remaining, action)| {
            if *remaining == 0 {
                ready.push(Arc::clone(action));
                false
            } else {
                *remaining -= 1;
                true
            }
        });
        for action in ready {
            action(self);
        }
    }

    fn require(&self, selector: &Selector) -> Result<&MockElement> {
        self.element(selector)
            .ok_or_else(|| Error::Driver(format!("no element matches '{}'", selector)))
    }
}

/// Scripted page implementing [`Driver`].
pub struct MockPage {
    state: Mutex<MockState>,
}

impl MockPage {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                url: "about:blank".to_string(),
                status: Some(200),
                ..MockState::default()
            }),
        }
    }

    pub fn with_element(self, selector: &Selector, element: MockElement) -> Self {
        self.state().insert(selector, element);
        self
    }

    pub fn with_count(self, selector: &Selector, count: usize) -> Self {
        self.state().set_count(selector, count);
        self
    }

    pub fn with_status(self, status: Option<u16>) -> Self {
        self.state().status = status;
        self
    }

    pub fn on_click(
        self,
        selector: &Selector,
        action: impl Fn(&mut MockState) + Send + Sync + 'static,
    ) -> Self {
        self.state()
            .handlers
            .insert(selector.to_string(), Arc::new(action));
        self
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    fn read(&self) -> MutexGuard<'_, MockState> {
        let mut state = self.state();
        state.tick();
        state
    }
}

#[async_trait]
impl Driver for MockPage {
    async fn goto(&self, url: &str) -> Result<Option<u16>> {
        let mut state = self.state();
        state.url = url.to_string();
        state.visits.push(url.to_string());
        Ok(state.status)
    }

    fn url(&self) -> String {
        self.read().url.clone()
    }

    async fn count(&self, selector: &Selector) -> Result<usize> {
        let state = self.read();
        let key = selector.to_string();
        Ok(match state.counts.get(&key) {
            Some(count) => *count,
            None => usize::from(state.elements.contains_key(&key)),
        })
    }

    async fn is_visible(&self, selector: &Selector) -> Result<bool> {
        Ok(self.read().element(selector).is_some_and(|e| e.visible))
    }

    async fn inner_text(&self, selector: &Selector) -> Result<String> {
        Ok(self.read().require(selector)?.text.clone())
    }

    async fn get_attribute(&self, selector: &Selector, name: &str) -> Result<Option<String>> {
        Ok(self
            .read()
            .require(selector)?
            .attributes
            .get(name)
            .cloned())
    }

    async fn click(&self, selector: &Selector) -> Result<()> {
        let mut state = self.state();
        let element = state.require(selector)?.clone();
        state.clicks.push(selector.to_string());

        if let Some(handler) = state.handlers.get(&selector.to_string()).cloned() {
            handler(&mut *state);
            return Ok(());
        }

        if let Some(href) = element.attributes.get("href") {
            if element.attributes.get("target").map(String::as_str) == Some("_blank") {
                state.opened_tabs.push(href.clone());
            } else {
                state.url = href.clone();
            }
        }
        Ok(())
    }

    async fn remove_attribute(&self, selector: &Selector, name: &str) -> Result<()> {
        let mut state = self.state();
        state.require(selector)?;
        if let Some(element) = state.element_mut(selector) {
            element.attributes.remove(name);
        }
        Ok(())
    }
}

/// Short timeouts so failing assertions fail fast.
pub fn test_config() -> SuiteConfig {
    SuiteConfig::new()
        .base_url("https://www.thepunterspage.com")
        .assertion_timeout(Duration::from_millis(200))
        .poll_interval(Duration::from_millis(10))
        .navigation_timeout(Duration::from_millis(200))
}

/// Scope of the first bet365 card.
pub fn first_bet365_card() -> Scope {
    Scope::Within(LOCATORS.offer_card(BET365_BOOKIE_ID).first())
}

/// Scope of the last bet365 card.
pub fn last_bet365_card() -> Scope {
    Scope::Within(LOCATORS.offer_card(BET365_BOOKIE_ID).last())
}

pub fn card_element(element: CardElement, scope: &Scope) -> Selector {
    LOCATORS.element(&element, scope)
}

pub fn see_more() -> Selector {
    LOCATORS.see_more_button().first()
}

/// Registers a fully conforming bet365 card under `scope`.
pub fn insert_bet365_card(state: &mut MockState, scope: &Scope, title: &str) {
    state.insert(
        &card_element(CardElement::BookieLogo, scope),
        MockElement::visible().attr("src", "/logos/bet365.png"),
    );
    state.insert(
        &card_element(CardElement::OfferTitle, scope),
        MockElement::visible().text(title),
    );
    state.insert(
        &card_element(CardElement::icon("Welcome Offer"), scope),
        MockElement::visible()
            .attr("alt", "Welcome Offer")
            .attr("src", "/icons/Welcome Offer.svg"),
    );
    state.insert(
        &card_element(CardElement::icon("Sports"), scope),
        MockElement::visible()
            .attr("alt", "Sports")
            .attr("src", "/icons/Sports.svg"),
    );
    state.insert(
        &card_element(CardElement::ClaimBonusButton, scope),
        MockElement::visible()
            .text("CLAIM BONUS")
            .attr("href", BET365_LINK)
            .attr("target", "_blank"),
    );
    state.insert(
        &card_element(CardElement::ExpiryText, scope),
        MockElement::visible().text("No Expiry"),
    );
    state.insert(
        &card_element(CardElement::PromoCodeText, scope),
        MockElement::visible().text("PROMO CODE: NOT REQUIRED"),
    );
    state.insert(
        &card_element(CardElement::TermsText, scope),
        MockElement::visible().text("18+ T&Cs apply"),
    );
}

/// A Free Bets page as the live site renders it: two bet365 cards (the
/// second a casino offer), 12 cards shown and "See More (24)" which drops to
/// 12 a few reads after being clicked.
pub fn conforming_page() -> MockPage {
    let page = MockPage::new()
        .with_element(&see_more(), MockElement::visible().text("See More (24)"))
        .with_count(&LOCATORS.all_offer_cards(), 12)
        .on_click(&see_more(), |state| {
            state.defer(2, |state| {
                state.set_text(&see_more(), "See More (12)");
                state.set_count(&LOCATORS.all_offer_cards(), 24);
            });
        });

    {
        let mut state = page.state();
        insert_bet365_card(
            &mut state,
            &first_bet365_card(),
            "Sports: Bet £10 & Get £30 in Free Bets",
        );
        insert_bet365_card(
            &mut state,
            &last_bet365_card(),
            "Casino: Get 500 Free Spins",
        );
    }
    page
}
