// FreeBetsPage - page object for /free-bets
//
// Every operation awaits its driver commands in order and returns &Self, so
// a test reads as one fluent chain:
//
//     page.visit().await?.click_see_more_and_verify().await?;
//
// Card-level checks run through an OfferCard view whose locator resolutions
// are scoped to one card. The page itself always resolves page-wide.

use crate::config::SuiteConfig;
use crate::counter::extract_count;
use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::expect::{Expectation, Poller, UrlExpectation, expect, expect_url};
use crate::locators::{CardElement, LOCATORS};
use crate::position::CardPosition;
use crate::profiles::{BET365_BOOKIE_ID, OfferProfile, OfferProfiles};
use crate::selector::{Scope, Selector};

/// Text the claim button must contain on every offer card
pub const CLAIM_BONUS_TEXT: &str = "CLAIM BONUS";

/// Page object for the Free Bets promotions page.
pub struct FreeBetsPage<D: Driver> {
    driver: D,
    config: SuiteConfig,
    profiles: OfferProfiles,
}

impl<D: Driver> FreeBetsPage<D> {
    /// Path of the page relative to the site base URL
    pub const PATH: &'static str = "/free-bets";

    pub fn new(driver: D, config: SuiteConfig) -> Self {
        Self {
            driver,
            config,
            profiles: OfferProfiles::builtin(),
        }
    }

    /// Registers an extra offer profile, replacing any existing one for the same bookmaker.
    pub fn with_profile(mut self, profile: OfferProfile) -> Self {
        self.profiles.insert(profile);
        self
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    pub fn profiles(&self) -> &OfferProfiles {
        &self.profiles
    }

    /// Navigates to the page.
    #[tracing::instrument(skip(self))]
    pub async fn visit(&self) -> Result<&Self> {
        let url = self.config.page_url(Self::PATH)?;
        self.driver.goto(&url).await?;
        Ok(self)
    }

    /// Navigates to the page and checks it loaded: a 200 document response
    /// and a URL that still contains the page path.
    #[tracing::instrument(skip(self))]
    pub async fn visit_and_verify_loaded(&self) -> Result<&Self> {
        let url = self.config.page_url(Self::PATH)?;
        let status = self.driver.goto(&url).await?;
        if status != Some(200) {
            return Err(Error::Navigation { url, status });
        }

        self.expect_url()
            .with_timeout(self.config.navigation_timeout)
            .to_contain(Self::PATH)
            .await?;
        tracing::info!(%url, "page loaded");
        Ok(self)
    }

    /// Number of offer cards currently rendered.
    pub async fn offer_card_count(&self) -> Result<usize> {
        self.driver.count(&LOCATORS.all_offer_cards()).await
    }

    /// Number of promo-code cards currently rendered.
    pub async fn promo_card_count(&self) -> Result<usize> {
        self.driver.count(&LOCATORS.promo_cards()).await
    }

    /// A view of one offer card. Locators resolved through it stay inside the card.
    pub fn offer_card(&self, bookie_id: &str, position: CardPosition) -> OfferCard<'_, D> {
        let root = LOCATORS.offer_card(bookie_id).pick(position);
        OfferCard {
            page: self,
            scope: Scope::Within(root),
        }
    }

    /// Runs `callback` with a view scoped to one offer card.
    ///
    /// The scope lasts exactly as long as the callback; the page stays
    /// page-wide afterwards.
    ///
    /// ```ignore
    /// page.within_offer_card(BET365_BOOKIE_ID, CardPosition::First, async |card| {
    ///     card.verify_common_elements().await?;
    ///     card.verify_bet365_specific_elements().await?;
    ///     Ok(())
    /// })
    /// .await?;
    /// ```
    #[tracing::instrument(skip(self, callback))]
    pub async fn within_offer_card<F>(
        &self,
        bookie_id: &str,
        position: CardPosition,
        callback: F,
    ) -> Result<&Self>
    where
        F: AsyncFnOnce(&OfferCard<'_, D>) -> Result<()>,
    {
        let card = self.offer_card(bookie_id, position);
        callback(&card)
            .await
            .map_err(|e| e.context(format!("within offer card '{}' ({})", bookie_id, position)))?;
        Ok(self)
    }

    /// Checks the elements every offer card has, page-wide.
    pub async fn verify_common_elements(&self) -> Result<&Self> {
        self.verify_common_in(&Scope::Page).await?;
        Ok(self)
    }

    /// Checks the bet365 card content, page-wide.
    pub async fn verify_bet365_specific_elements(&self) -> Result<&Self> {
        let profile = self.profiles.get(BET365_BOOKIE_ID)?;
        self.verify_profile_in(&Scope::Page, profile).await?;
        Ok(self)
    }

    /// Checks a bookmaker's card content, page-wide.
    pub async fn verify_offer_profile(&self, profile: &OfferProfile) -> Result<&Self> {
        self.verify_profile_in(&Scope::Page, profile).await?;
        Ok(self)
    }

    /// Clicks the claim button of the first `bookie_id` card and checks the
    /// browser ends up on the bookmaker's origin.
    ///
    /// The link normally opens a new tab; its `target` attribute is removed
    /// first so navigation happens in the tracked page. `expected_url` is
    /// recorded but not asserted: the check is "URL contains the profile
    /// origin".
    #[tracing::instrument(skip(self))]
    pub async fn click_offer_and_verify_new_tab(
        &self,
        bookie_id: &str,
        expected_url: &str,
    ) -> Result<&Self> {
        let profile = self.profiles.get(bookie_id)?;
        let card = Scope::Within(LOCATORS.offer_card(bookie_id).first());
        let button = LOCATORS.element(&CardElement::ClaimBonusButton, &card);

        self.expect(button.clone()).to_be_visible().await?;
        self.driver.remove_attribute(&button, "target").await?;
        self.driver.click(&button).await?;

        self.expect_url()
            .with_timeout(self.config.navigation_timeout)
            .to_contain(&profile.origin)
            .await?;
        tracing::info!(url = %self.driver.url(), origin = %profile.origin, "offer link opened");
        Ok(self)
    }

    /// Clicks "see more" and checks the count in its label goes down.
    #[tracing::instrument(skip(self))]
    pub async fn click_see_more_and_verify(&self) -> Result<&Self> {
        let button = LOCATORS.see_more_button().first();
        self.expect(button.clone()).to_be_visible().await?;

        let initial_text = self.driver.inner_text(&button).await?;
        let initial = extract_count_from_button(&initial_text)?;
        self.driver.click(&button).await?;

        let mut poller = Poller::new(self.config.assertion_timeout, self.config.poll_interval);
        loop {
            let text = self.driver.inner_text(&button).await?;
            let current = extract_count_from_button(&text)?;
            if current < initial {
                tracing::info!(initial, current, "see more reduced the remaining count");
                return Ok(self);
            }

            if !poller.retry().await {
                return Err(Error::AssertionTimeout(format!(
                    "Expected see-more count to drop below {}, but was {} after {:?}",
                    initial, current, self.config.assertion_timeout
                )));
            }
        }
    }

    fn expect(&self, selector: Selector) -> Expectation<'_, D> {
        expect(&self.driver, selector)
            .with_timeout(self.config.assertion_timeout)
            .with_poll_interval(self.config.poll_interval)
    }

    fn expect_url(&self) -> UrlExpectation<'_, D> {
        expect_url(&self.driver).with_poll_interval(self.config.poll_interval)
    }

    fn element(&self, element: &CardElement, scope: &Scope) -> Selector {
        LOCATORS.element(element, scope)
    }

    async fn verify_common_in(&self, scope: &Scope) -> Result<()> {
        self.expect(self.element(&CardElement::BookieLogo, scope))
            .to_be_visible()
            .await?;
        self.expect(self.element(&CardElement::OfferTitle, scope))
            .to_be_visible()
            .await?;

        let claim = self.element(&CardElement::ClaimBonusButton, scope);
        self.expect(claim.clone()).to_be_visible().await?;
        self.expect(claim).to_contain_text(CLAIM_BONUS_TEXT).await?;

        self.expect(self.element(&CardElement::ExpiryText, scope))
            .to_be_visible()
            .await?;

        tracing::info!(?scope, "common offer elements verified");
        Ok(())
    }

    async fn verify_profile_in(&self, scope: &Scope, profile: &OfferProfile) -> Result<()> {
        for label in &profile.icon_labels {
            let icon = self.element(&CardElement::icon(label.as_str()), scope);
            self.expect(icon.clone()).to_be_visible().await?;
            self.expect(icon)
                .to_have_attribute_containing("src", label)
                .await?;
        }

        self.expect(self.element(&CardElement::OfferTitle, scope))
            .to_contain_text(&profile.title)
            .await?;
        self.expect(self.element(&CardElement::ClaimBonusButton, scope))
            .to_have_attribute_containing("href", &profile.link_substring)
            .await?;
        self.expect(self.element(&CardElement::ExpiryText, scope))
            .to_contain_text(&profile.expiry_text)
            .await?;

        tracing::info!(bookie = %profile.name, ?scope, "offer profile verified");
        Ok(())
    }

    async fn verify_promo_code_and_terms_in(&self, scope: &Scope) -> Result<()> {
        self.expect(self.element(&CardElement::PromoCodeText, scope))
            .to_be_visible()
            .await?;
        self.expect(self.element(&CardElement::TermsText, scope))
            .to_be_visible()
            .await?;
        Ok(())
    }
}

/// Count shown in the see-more label; a label without one is an immediate failure.
fn extract_count_from_button(text: &str) -> Result<u32> {
    extract_count(text)
}

/// One offer card, addressed by bookmaker id and position.
pub struct OfferCard<'p, D: Driver> {
    page: &'p FreeBetsPage<D>,
    scope: Scope,
}

impl<'p, D: Driver> OfferCard<'p, D> {
    /// The scope every locator of this card resolves under
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Selector of a card element, scoped to this card.
    pub fn element(&self, element: &CardElement) -> Selector {
        self.page.element(element, &self.scope)
    }

    pub async fn verify_common_elements(&self) -> Result<&Self> {
        self.page.verify_common_in(&self.scope).await?;
        Ok(self)
    }

    pub async fn verify_bet365_specific_elements(&self) -> Result<&Self> {
        let profile = self.page.profiles.get(BET365_BOOKIE_ID)?;
        self.page.verify_profile_in(&self.scope, profile).await?;
        Ok(self)
    }

    pub async fn verify_offer_profile(&self, profile: &OfferProfile) -> Result<&Self> {
        self.page.verify_profile_in(&self.scope, profile).await?;
        Ok(self)
    }

    /// Checks the "PROMO CODE" and "T&Cs apply" labels are shown.
    pub async fn verify_promo_code_and_terms(&self) -> Result<&Self> {
        self.page.verify_promo_code_and_terms_in(&self.scope).await?;
        Ok(self)
    }
}
