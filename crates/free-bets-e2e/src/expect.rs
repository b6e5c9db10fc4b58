// Expectations - Auto-retry assertions over a Driver
//
// Same contract as Playwright's expect(): re-evaluate the condition until it
// holds or the timeout elapses, sleeping between attempts. A missing element
// counts as "condition not met yet" rather than a hard failure, so content
// that renders late is waited for.
//
// See: https://playwright.dev/docs/test-assertions

use crate::config::{DEFAULT_ASSERTION_TIMEOUT, DEFAULT_POLL_INTERVAL};
use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::selector::Selector;
use std::time::{Duration, Instant};

/// Retry clock shared by every polling loop in the crate.
#[derive(Debug)]
pub(crate) struct Poller {
    start: Instant,
    timeout: Duration,
    interval: Duration,
    attempts: u32,
}

impl Poller {
    pub(crate) fn new(timeout: Duration, interval: Duration) -> Self {
        Self {
            start: Instant::now(),
            timeout,
            interval,
            attempts: 0,
        }
    }

    /// Sleeps before the next attempt. Returns `false` once the deadline has passed.
    pub(crate) async fn retry(&mut self) -> bool {
        self.attempts += 1;
        if self.start.elapsed() >= self.timeout {
            tracing::debug!(attempts = self.attempts, "retry window elapsed");
            return false;
        }
        tokio::time::sleep(self.interval).await;
        true
    }
}

/// Creates an expectation for the element(s) matched by `selector`.
///
/// # Example
///
/// ```ignore
/// use free_bets_e2e::{expect, Selector};
///
/// expect(&driver, Selector::css("a.btn-cta").first())
///     .to_contain_text("CLAIM BONUS")
///     .await?;
/// expect(&driver, Selector::css("#spinner")).not().to_be_visible().await?;
/// ```
pub fn expect<D: Driver + ?Sized>(driver: &D, selector: Selector) -> Expectation<'_, D> {
    Expectation::new(driver, selector)
}

/// Creates an expectation on the page URL.
pub fn expect_url<D: Driver + ?Sized>(driver: &D) -> UrlExpectation<'_, D> {
    UrlExpectation {
        driver,
        timeout: DEFAULT_ASSERTION_TIMEOUT,
        poll_interval: DEFAULT_POLL_INTERVAL,
    }
}

/// Expectation wraps a selector and provides assertion methods with auto-retry.
pub struct Expectation<'d, D: ?Sized> {
    driver: &'d D,
    selector: Selector,
    timeout: Duration,
    poll_interval: Duration,
    negate: bool,
}

// to_* methods consume self, matching the expect() chaining style
#[allow(clippy::wrong_self_convention)]
impl<'d, D: Driver + ?Sized> Expectation<'d, D> {
    pub(crate) fn new(driver: &'d D, selector: Selector) -> Self {
        Self {
            driver,
            selector,
            timeout: DEFAULT_ASSERTION_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            negate: false,
        }
    }

    /// Sets a custom timeout for this assertion.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a custom poll interval for this assertion.
    ///
    /// Default is 100ms.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Negates the assertion.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Asserts that the element is visible.
    pub async fn to_be_visible(self) -> Result<()> {
        let mut poller = Poller::new(self.timeout, self.poll_interval);

        loop {
            let is_visible = self.driver.is_visible(&self.selector).await?;
            if is_visible != self.negate {
                tracing::debug!(selector = %self.selector, negate = self.negate, "visibility matched");
                return Ok(());
            }

            if !poller.retry().await {
                let message = if self.negate {
                    format!(
                        "Expected element '{}' NOT to be visible, but it was visible after {:?}",
                        self.selector, self.timeout
                    )
                } else {
                    format!(
                        "Expected element '{}' to be visible, but it was not visible after {:?}",
                        self.selector, self.timeout
                    )
                };
                return Err(Error::AssertionTimeout(message));
            }
        }
    }

    /// Asserts that the element is hidden (not visible or absent).
    pub async fn to_be_hidden(self) -> Result<()> {
        let negated = Expectation {
            negate: !self.negate,
            ..self
        };
        negated.to_be_visible().await
    }

    /// Asserts that the element's trimmed text equals `expected`.
    pub async fn to_have_text(self, expected: &str) -> Result<()> {
        let expected = expected.trim();
        self.check_text(|actual| actual == expected, "have text", expected)
            .await
    }

    /// Asserts that the element's text contains `expected`.
    pub async fn to_contain_text(self, expected: &str) -> Result<()> {
        self.check_text(|actual| actual.contains(expected), "contain text", expected)
            .await
    }

    /// Asserts that attribute `name` is present and contains `expected`.
    pub async fn to_have_attribute_containing(self, name: &str, expected: &str) -> Result<()> {
        let mut poller = Poller::new(self.timeout, self.poll_interval);

        loop {
            let actual = if self.driver.count(&self.selector).await? == 0 {
                None
            } else {
                self.driver.get_attribute(&self.selector, name).await?
            };
            let contains = actual.as_deref().is_some_and(|v| v.contains(expected));
            if contains != self.negate {
                return Ok(());
            }

            if !poller.retry().await {
                let message = if self.negate {
                    format!(
                        "Expected element '{}' attribute '{}' NOT to contain '{}', but it did after {:?}",
                        self.selector, name, expected, self.timeout
                    )
                } else {
                    format!(
                        "Expected element '{}' attribute '{}' to contain '{}', but had {:?} after {:?}",
                        self.selector, name, expected, actual, self.timeout
                    )
                };
                return Err(Error::AssertionTimeout(message));
            }
        }
    }

    async fn check_text<F>(self, matches: F, verb: &str, expected: &str) -> Result<()>
    where
        F: Fn(&str) -> bool,
    {
        let mut poller = Poller::new(self.timeout, self.poll_interval);

        loop {
            let actual = if self.driver.count(&self.selector).await? == 0 {
                None
            } else {
                Some(self.driver.inner_text(&self.selector).await?)
            };
            let matched = actual.as_deref().map(str::trim).is_some_and(&matches);
            if matched != self.negate {
                return Ok(());
            }

            if !poller.retry().await {
                let message = match (&actual, self.negate) {
                    (_, true) => format!(
                        "Expected element '{}' NOT to {} '{}', but it did after {:?}",
                        self.selector, verb, expected, self.timeout
                    ),
                    (Some(actual), false) => format!(
                        "Expected element '{}' to {} '{}', but had '{}' after {:?}",
                        self.selector,
                        verb,
                        expected,
                        actual.trim(),
                        self.timeout
                    ),
                    (None, false) => format!(
                        "Expected element '{}' to {} '{}', but no element matched after {:?}",
                        self.selector, verb, expected, self.timeout
                    ),
                };
                return Err(Error::AssertionTimeout(message));
            }
        }
    }
}

/// Auto-retry assertions on the page URL.
pub struct UrlExpectation<'d, D: ?Sized> {
    driver: &'d D,
    timeout: Duration,
    poll_interval: Duration,
}

#[allow(clippy::wrong_self_convention)]
impl<'d, D: Driver + ?Sized> UrlExpectation<'d, D> {
    /// Sets a custom timeout for this assertion.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a custom poll interval for this assertion.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Asserts that the current URL contains `expected`.
    pub async fn to_contain(self, expected: &str) -> Result<()> {
        let mut poller = Poller::new(self.timeout, self.poll_interval);

        loop {
            let url = self.driver.url();
            if url.contains(expected) {
                tracing::debug!(%url, expected, "URL matched");
                return Ok(());
            }

            if !poller.retry().await {
                return Err(Error::AssertionTimeout(format!(
                    "Expected URL to contain '{}', but was '{}' after {:?}",
                    expected, url, self.timeout
                )));
            }
        }
    }
}
