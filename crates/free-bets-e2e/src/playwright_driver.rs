// Playwright-backed Driver
//
// Selectors render straight to Playwright's chained selector syntax, so
// query commands delegate to playwright_rs::Locator. Attribute removal has
// no Locator command and is done with a page script that walks the same
// selector chain.
//
// See: https://playwright.dev/docs/api/class-locator

use crate::config::{BrowserKind, SuiteConfig};
use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::selector::{Selector, Step};
use async_trait::async_trait;
use playwright_rs::protocol::{Browser, GotoOptions, Page, Playwright};
use playwright_rs::{LaunchOptions, Locator};
use serde::Serialize;
use std::time::Duration;

/// Evaluates the selector chain in the page and strips an attribute from every match.
const REMOVE_ATTRIBUTE_SCRIPT: &str = r#"({ steps, name }) => {
    let nodes = [document];
    for (const step of steps) {
        if (step.css !== undefined) {
            nodes = nodes.flatMap((node) => Array.from(node.querySelectorAll(step.css)));
        } else {
            const index = step.nth < 0 ? nodes.length + step.nth : step.nth;
            nodes = index >= 0 && index < nodes.length ? [nodes[index]] : [];
        }
    }
    nodes.forEach((node) => node.removeAttribute(name));
    return nodes.length;
}"#;

#[derive(Serialize)]
struct RemoveAttributeArgs<'a> {
    steps: &'a [Step],
    name: &'a str,
}

/// A [`Driver`] over a Playwright page.
#[derive(Clone)]
pub struct PlaywrightDriver {
    page: Page,
    navigation_timeout: Duration,
}

impl PlaywrightDriver {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            navigation_timeout: crate::config::DEFAULT_NAVIGATION_TIMEOUT,
        }
    }

    /// Sets the timeout applied to every `goto`
    pub fn with_navigation_timeout(mut self, timeout: Duration) -> Self {
        self.navigation_timeout = timeout;
        self
    }

    /// The underlying Playwright page
    pub fn page(&self) -> &Page {
        &self.page
    }

    async fn locator(&self, selector: &Selector) -> Locator {
        self.page.locator(&selector.to_string()).await
    }
}

#[async_trait]
impl Driver for PlaywrightDriver {
    async fn goto(&self, url: &str) -> Result<Option<u16>> {
        tracing::debug!(url, "navigating");
        let options = GotoOptions::new().timeout(self.navigation_timeout);
        let response = self.page.goto(url, Some(options)).await?;
        Ok(response.map(|r| r.status()))
    }

    fn url(&self) -> String {
        self.page.url()
    }

    async fn count(&self, selector: &Selector) -> Result<usize> {
        Ok(self.locator(selector).await.count().await?)
    }

    async fn is_visible(&self, selector: &Selector) -> Result<bool> {
        Ok(self.locator(selector).await.is_visible().await?)
    }

    async fn inner_text(&self, selector: &Selector) -> Result<String> {
        Ok(self.locator(selector).await.inner_text().await?)
    }

    async fn get_attribute(&self, selector: &Selector, name: &str) -> Result<Option<String>> {
        Ok(self.locator(selector).await.get_attribute(name).await?)
    }

    async fn click(&self, selector: &Selector) -> Result<()> {
        tracing::debug!(%selector, "clicking");
        Ok(self.locator(selector).await.click(None).await?)
    }

    async fn remove_attribute(&self, selector: &Selector, name: &str) -> Result<()> {
        let args = RemoveAttributeArgs {
            steps: selector.steps(),
            name,
        };
        let touched: usize = self
            .page
            .evaluate(REMOVE_ATTRIBUTE_SCRIPT, Some(&args))
            .await?;

        tracing::debug!(%selector, name, touched, "removed attribute");
        if touched == 0 {
            return Err(Error::Driver(format!(
                "Cannot remove '{}': no element matches '{}'",
                name, selector
            )));
        }
        Ok(())
    }
}

/// A launched browser, kept alive for the duration of a test case.
pub struct BrowserSession {
    playwright: Playwright,
    browser: Browser,
    config: SuiteConfig,
}

impl BrowserSession {
    /// Starts Playwright and launches the browser named in `config`.
    pub async fn launch(config: &SuiteConfig) -> Result<Self> {
        tracing::debug!(browser = %config.browser, headless = config.headless, "launching browser");
        let playwright = Playwright::launch()
            .await
            .map_err(|e| Error::from(e).context("launching Playwright"))?;

        let browser_type = match config.browser {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        };
        let options = LaunchOptions::new()
            .headless(config.headless)
            .timeout(config.navigation_timeout.as_millis() as f64);
        let browser = browser_type
            .launch_with_options(options)
            .await
            .map_err(|e| Error::from(e).context(format!("launching {}", config.browser)))?;

        Ok(Self {
            playwright,
            browser,
            config: config.clone(),
        })
    }

    /// Opens a fresh page and wraps it as a driver.
    pub async fn new_driver(&self) -> Result<PlaywrightDriver> {
        let page = self.browser.new_page().await?;
        Ok(PlaywrightDriver::new(page).with_navigation_timeout(self.config.navigation_timeout))
    }

    /// Closes the browser and shuts Playwright down.
    pub async fn close(self) -> Result<()> {
        self.browser.close().await?;
        self.playwright.shutdown().await?;
        Ok(())
    }
}
