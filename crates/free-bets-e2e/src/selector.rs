// Selector - Immutable, chainable element query
//
// A Selector is a description of how to find element(s), never a handle to
// them. Drivers evaluate it on every command, so it always reflects the
// current page state.
//
// Rendering follows Playwright's selector chaining: steps are joined with
// " >> ", ordinal picks are written "nth=<i>" and "nth=-1" selects the last
// match.
//
// See: https://playwright.dev/docs/other-locators#chaining-selectors

use crate::position::CardPosition;
use serde::Serialize;
use std::fmt;

/// One step of a selector chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// CSS (or Playwright pseudo-class) query evaluated inside the previous step's matches
    Css(String),
    /// Keep only the match at this index; negative values count from the end
    Nth(i64),
}

/// Lazy element query built from chained steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    steps: Vec<Step>,
}

impl Selector {
    /// Creates a single-step selector from a CSS query.
    pub fn css(query: impl Into<String>) -> Self {
        Self {
            steps: vec![Step::Css(query.into())],
        }
    }

    /// Returns the chain's steps in evaluation order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Selects the first match.
    pub fn first(&self) -> Selector {
        self.nth(0)
    }

    /// Selects the last match.
    pub fn last(&self) -> Selector {
        self.nth(-1)
    }

    /// Selects the match at `index` (0-indexed, negative counts from the end).
    pub fn nth(&self, index: i64) -> Selector {
        self.with_step(Step::Nth(index))
    }

    /// Selects the match described by a card position.
    pub fn pick(&self, position: CardPosition) -> Selector {
        match position {
            CardPosition::First => self.first(),
            CardPosition::Last => self.last(),
            CardPosition::Index(index) => self.nth(i64::from(index)),
        }
    }

    /// Creates a sub-selector evaluated within this selector's matches.
    pub fn locator(&self, inner: &Selector) -> Selector {
        let mut steps = self.steps.clone();
        steps.extend(inner.steps.iter().cloned());
        Selector { steps }
    }

    fn with_step(&self, step: Step) -> Selector {
        let mut steps = self.steps.clone();
        steps.push(step);
        Selector { steps }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" >> ")?;
            }
            match step {
                Step::Css(query) => f.write_str(query)?,
                Step::Nth(index) => write!(f, "nth={}", index)?,
            }
        }
        Ok(())
    }
}

/// The subtree that locator resolution is constrained to.
///
/// Scope is passed explicitly to every resolution instead of being held as
/// ambient state; dropping a scoped value is all it takes to return to
/// page-wide queries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Scope {
    /// Whole document
    #[default]
    Page,
    /// Descendants of the element(s) matched by the selector
    Within(Selector),
}

impl Scope {
    /// Places `selector` under this scope.
    pub fn resolve(&self, selector: &Selector) -> Selector {
        match self {
            Scope::Page => selector.clone(),
            Scope::Within(root) => root.locator(selector),
        }
    }
}
