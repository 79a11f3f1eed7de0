//! Inline pattern rules.
//!
//! A [`Rule`] pairs a compiled pattern with a replacement template. The
//! [`InlineRules`] registry holds the inline styles and both link forms in
//! a fixed order and applies them one whole-text pass at a time.
//!
//! Every pattern captures the span between its delimiters greedily, so
//! `*a* x *b*` becomes a single bold span covering `a* x *b`.

use std::borrow::Cow;

use regex::Regex;

/// A single pattern/template substitution.
///
/// The template refers to capture groups with `${n}` placeholders.
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    template: &'static str,
}

impl Rule {
    /// Compile a rule.
    ///
    /// # Panics
    /// Panics if `pattern` is not a valid regular expression. Rules are
    /// built from literals, so this only fires on a programming error.
    #[must_use]
    pub fn new(name: &'static str, pattern: &str, template: &'static str) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid pattern for {name} rule: {e}"));
        Self {
            name,
            pattern,
            template,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    #[must_use]
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Replace every leftmost, non-overlapping match in `text`.
    ///
    /// Returns the input borrowed when nothing matches.
    #[must_use]
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, self.template)
    }
}

const URL_CHARS: &str = r"[\d\w\-\s:.\\/]*";
const LABEL_CHARS: &str = r"[\d\w\-\s: .\\/'?]*";

/// The ordered inline substitutions: styles first, then links.
#[derive(Debug, Clone)]
pub struct InlineRules {
    rules: Vec<Rule>,
}

impl InlineRules {
    #[must_use]
    pub fn new() -> Self {
        let aliased_link = format!(r"\[\[({URL_CHARS})\|({LABEL_CHARS})\]\]");
        let bare_link = format!(r"\[\[({URL_CHARS})\]\]");
        let rules = vec![
            Rule::new("underline", r"_(.*)_", "<u>${1}</u>"),
            Rule::new("bold", r"\*(.*)\*", "<b>${1}</b>"),
            Rule::new("italic", r"//(.*)//", "<i>${1}</i>"),
            Rule::new("strikeout", r"~(.*)~", "<s>${1}</s>"),
            Rule::new("superscript", r"\^(.*)\^", "<sup>${1}</sup>"),
            Rule::new("subscript", r",,(.*),,", "<sub>${1}</sub>"),
            Rule::new("aliased link", &aliased_link, "<a href='${1}'>${2}</a>"),
            Rule::new("bare link", &bare_link, "<a href='${1}'>${1}</a>"),
        ];
        Self { rules }
    }

    /// Rules in the order they are applied.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Run every rule over `text`, each pass feeding the next.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            let replaced = match rule.apply(&out) {
                Cow::Borrowed(_) => None,
                Cow::Owned(s) => Some(s),
            };
            if let Some(s) = replaced {
                log::trace!("{} rule rewrote text", rule.name());
                out = s;
            }
        }
        out
    }
}

impl Default for InlineRules {
    fn default() -> Self {
        Self::new()
    }
}
