//! Headline substitution.
//!
//! Headlines are delimited by runs of `=`. The level-1 pattern `=(.*)=`
//! also matches level-2 and level-3 headlines, so the passes always run
//! from the most specific delimiter to the least: level 3, then 2, then 1.

use crate::rules::Rule;

/// The three headline rules in application order.
#[derive(Debug, Clone)]
pub struct HeadlineRules {
    levels: [Rule; 3],
}

impl HeadlineRules {
    #[must_use]
    pub fn new() -> Self {
        Self {
            levels: [
                Rule::new("headline 3", r"===(.*)===", "<h3>${1}</h3>"),
                Rule::new("headline 2", r"==(.*)==", "<h2>${1}</h2>"),
                Rule::new("headline 1", r"=(.*)=", "<h1>${1}</h1>"),
            ],
        }
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.levels
    }

    /// Replace headline markup across the whole text.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.levels {
            out = rule.apply(&out).into_owned();
        }
        out
    }
}

impl Default for HeadlineRules {
    fn default() -> Self {
        Self::new()
    }
}
