// Suite configuration
//
// Defaults target the production site. Every field can be overridden from
// FREE_BETS_* environment variables so CI can point the suite at a staging
// host or widen timeouts without code changes.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default site under test
pub const DEFAULT_BASE_URL: &str = "https://www.thepunterspage.com";

/// Default timeout for assertions (5 seconds, matching Playwright)
pub const DEFAULT_ASSERTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Default polling interval for assertions (100ms)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Default navigation timeout (20 seconds)
pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(20);

pub const ENV_BASE_URL: &str = "FREE_BETS_BASE_URL";
pub const ENV_ASSERTION_TIMEOUT_MS: &str = "FREE_BETS_ASSERTION_TIMEOUT_MS";
pub const ENV_POLL_INTERVAL_MS: &str = "FREE_BETS_POLL_INTERVAL_MS";
pub const ENV_NAVIGATION_TIMEOUT_MS: &str = "FREE_BETS_NAVIGATION_TIMEOUT_MS";
pub const ENV_HEADLESS: &str = "FREE_BETS_HEADLESS";
pub const ENV_BROWSER: &str = "FREE_BETS_BROWSER";

/// Browser engine to launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl FromStr for BrowserKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => Ok(BrowserKind::Chromium),
            "firefox" => Ok(BrowserKind::Firefox),
            "webkit" => Ok(BrowserKind::Webkit),
            other => Err(Error::Config(format!("unknown browser '{}'", other))),
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        })
    }
}

/// Settings shared by every test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteConfig {
    pub base_url: String,
    pub assertion_timeout: Duration,
    pub poll_interval: Duration,
    pub navigation_timeout: Duration,
    pub headless: bool,
    pub browser: BrowserKind,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            assertion_timeout: DEFAULT_ASSERTION_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
            headless: true,
            browser: BrowserKind::default(),
        }
    }
}

impl SuiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each FREE_BETS_* key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config = config.base_url(base_url);
        }
        if let Some(raw) = lookup(ENV_ASSERTION_TIMEOUT_MS) {
            config.assertion_timeout = parse_millis(ENV_ASSERTION_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_POLL_INTERVAL_MS) {
            config.poll_interval = parse_millis(ENV_POLL_INTERVAL_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_NAVIGATION_TIMEOUT_MS) {
            config.navigation_timeout = parse_millis(ENV_NAVIGATION_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_HEADLESS) {
            config.headless = parse_bool(ENV_HEADLESS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_BROWSER) {
            config.browser = raw.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Sets the site under test
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the retry window for assertions
    pub fn assertion_timeout(mut self, timeout: Duration) -> Self {
        self.assertion_timeout = timeout;
        self
    }

    /// Sets the delay between assertion attempts
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the navigation timeout
    pub fn navigation_timeout(mut self, timeout: Duration) -> Self {
        self.navigation_timeout = timeout;
        self
    }

    /// Sets headless mode
    pub fn headless(mut self, enabled: bool) -> Self {
        self.headless = enabled;
        self
    }

    /// Sets the browser engine
    pub fn browser(mut self, browser: BrowserKind) -> Self {
        self.browser = browser;
        self
    }

    /// Checks that the base URL parses and the poll interval is non-zero.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("base URL '{}': {}", self.base_url, e)))?;
        if self.poll_interval.is_zero() {
            return Err(Error::Config("poll interval must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Absolute URL of `path` on the site under test.
    ///
    /// `path` is resolved below the base URL's own path, so a base of
    /// `https://host/site` yields `https://host/site/free-bets`.
    pub fn page_url(&self, path: &str) -> Result<String> {
        let mut base = url::Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("base URL '{}': {}", self.base_url, e)))?;
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        base.join(path.trim_start_matches('/'))
            .map(String::from)
            .map_err(|e| Error::Config(format!("path '{}': {}", path, e)))
    }
}

fn parse_millis(key: &str, raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| Error::Config(format!("{} must be milliseconds, got '{}'", key, raw)))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(Error::Config(format!("{} must be a boolean, got '{}'", key, raw))),
    }
}
