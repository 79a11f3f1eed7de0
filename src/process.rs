//! Wiki text to HTML pipeline.
//!
//! Passes run in a fixed order: tables, numbered lists, bulleted lists,
//! inline styles and links, then headlines.

use std::sync::LazyLock;

use crate::{
    blocks::{TrailingBlock, extract_text},
    headings::HeadlineRules,
    lists::{BULLETED_LIST, NUMBERED_LIST},
    rules::InlineRules,
    table::Table,
};

/// Options controlling the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Handling of a table or list that runs to the end of the document.
    pub trailing: TrailingBlock,
}

/// Converts wiki markup to HTML.
///
/// Rules are compiled once when the formatter is built. A formatter is
/// immutable afterwards and can be shared between threads.
///
/// # Examples
///
/// ```
/// use wikifmt::Formatter;
///
/// let formatter = Formatter::new();
/// assert_eq!(formatter.format("*bold*"), "<b>bold</b>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    inline: InlineRules,
    headlines: HeadlineRules,
    options: FormatOptions,
}

impl Formatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: FormatOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn options(&self) -> FormatOptions {
        self.options
    }

    #[must_use]
    pub fn inline_rules(&self) -> &InlineRules {
        &self.inline
    }

    /// Render `document` as an HTML fragment.
    ///
    /// Never fails: text without markup comes back unchanged.
    #[must_use]
    pub fn format(&self, document: &str) -> String {
        let trailing = self.options.trailing;
        let text = extract_text(&Table, document, trailing);
        let text = extract_text(&NUMBERED_LIST, &text, trailing);
        let text = extract_text(&BULLETED_LIST, &text, trailing);
        log::trace!("block passes produced {} bytes", text.len());
        let text = self.inline.apply(&text);
        self.headlines.apply(&text)
    }
}

static DEFAULT_FORMATTER: LazyLock<Formatter> = LazyLock::new(Formatter::new);

/// Render `document` with the default options.
///
/// # Examples
///
/// ```
/// assert_eq!(wikifmt::format("=== Keywords ==="), "<h3> Keywords </h3>");
/// ```
#[must_use]
pub fn format(document: &str) -> String {
    DEFAULT_FORMATTER.format(document)
}
