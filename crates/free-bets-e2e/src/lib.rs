//! free-bets-e2e: page-object end-to-end suite for the Free Bets page
//!
//! The crate bundles everything a test needs to drive `/free-bets`:
//! a locator registry, a chainable page object, auto-retrying expectations
//! and a Playwright-backed driver.
//!
//! # Examples
//!
//! ## Card content
//!
//! ```ignore
//! use free_bets_e2e::{
//!     BET365_BOOKIE_ID, BrowserSession, CardPosition, FreeBetsPage, SuiteConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SuiteConfig::from_env()?;
//!     let session = BrowserSession::launch(&config).await?;
//!     let page = FreeBetsPage::new(session.new_driver().await?, config);
//!
//!     page.visit()
//!         .await?
//!         .within_offer_card(BET365_BOOKIE_ID, CardPosition::First, async |card| {
//!             card.verify_common_elements().await?;
//!             card.verify_bet365_specific_elements().await?;
//!             Ok(())
//!         })
//!         .await?;
//!
//!     session.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pagination and outbound links
//!
//! ```ignore
//! page.visit()
//!     .await?
//!     .click_see_more_and_verify()
//!     .await?;
//!
//! page.visit()
//!     .await?
//!     .click_offer_and_verify_new_tab(
//!         BET365_BOOKIE_ID,
//!         "https://www.bet365.com/crossdomainapi/geoblock",
//!     )
//!     .await?;
//! ```
//!
//! # Configuration
//!
//! [`SuiteConfig::from_env`] reads `FREE_BETS_BASE_URL`,
//! `FREE_BETS_ASSERTION_TIMEOUT_MS`, `FREE_BETS_POLL_INTERVAL_MS`,
//! `FREE_BETS_NAVIGATION_TIMEOUT_MS`, `FREE_BETS_HEADLESS` and
//! `FREE_BETS_BROWSER` on top of the defaults.

pub mod config;
pub mod counter;
pub mod driver;
mod error;
mod expect;
pub mod locators;
pub mod page;
pub mod playwright_driver;
pub mod position;
pub mod profiles;
pub mod selector;

// Re-export error types
pub use error::{Error, Result};

// Re-export assertions API
pub use expect::{Expectation, UrlExpectation, expect, expect_url};

// Re-export the page object and its building blocks
pub use config::{BrowserKind, SuiteConfig};
pub use driver::Driver;
pub use locators::{CardElement, LOCATORS, Locators};
pub use page::{FreeBetsPage, OfferCard};
pub use playwright_driver::{BrowserSession, PlaywrightDriver};
pub use position::CardPosition;
pub use profiles::{BET365_BOOKIE_ID, OfferProfile, OfferProfiles};
pub use selector::{Scope, Selector, Step};
