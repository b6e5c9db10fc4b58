// Driver - browser capabilities the page object is written against
//
// The page object never talks to a browser directly. It issues commands
// through this trait, one at a time and in order, so the same verification
// routines run on a real Playwright page or on a scripted stand-in.

use crate::error::Result;
use crate::selector::Selector;
use async_trait::async_trait;

/// Commands a browser page must support.
///
/// Selectors are evaluated on every call; implementations must not cache
/// element handles between calls.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Navigates to `url` and returns the document response status, if any.
    async fn goto(&self, url: &str) -> Result<Option<u16>>;

    /// Returns the last committed URL.
    fn url(&self) -> String;

    /// Returns the number of elements matching `selector`.
    async fn count(&self, selector: &Selector) -> Result<usize>;

    /// Returns whether the element is visible. A missing element is not visible.
    async fn is_visible(&self, selector: &Selector) -> Result<bool>;

    /// Returns the rendered text of the element.
    async fn inner_text(&self, selector: &Selector) -> Result<String>;

    /// Returns the value of attribute `name`, or `None` if it is absent.
    async fn get_attribute(&self, selector: &Selector, name: &str) -> Result<Option<String>>;

    /// Clicks the element.
    async fn click(&self, selector: &Selector) -> Result<()>;

    /// Removes attribute `name` from every element matching `selector`.
    async fn remove_attribute(&self, selector: &Selector, name: &str) -> Result<()>;
}
