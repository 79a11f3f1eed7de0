//! Bulleted and numbered list blocks.
//!
//! An item line contains whitespace, the marker (`*` or `#`) and a space.
//! The marker and everything after it become an `<li>` element. Text
//! before the marker stays in place.

use std::sync::LazyLock;

use regex::Regex;

use crate::blocks::BlockKind;

static BULLET_RE: LazyLock<Regex> = crate::lazy_regex!(r"\s\* (.*)$", "valid bullet regex");
static NUMBER_RE: LazyLock<Regex> = crate::lazy_regex!(r"\s# (.*)$", "valid number regex");

/// A list block recognised by a single item pattern.
#[derive(Debug)]
pub struct ListKind {
    name: &'static str,
    item: &'static LazyLock<Regex>,
    open: &'static str,
    close: &'static str,
}

/// `* item` lines wrapped in `<ul>`.
pub static BULLETED_LIST: ListKind = ListKind {
    name: "bulleted list",
    item: &BULLET_RE,
    open: "<ul>",
    close: "</ul>",
};

/// `# item` lines wrapped in `<ol>`.
pub static NUMBERED_LIST: ListKind = ListKind {
    name: "numbered list",
    item: &NUMBER_RE,
    open: "<ol>",
    close: "</ol>",
};

impl BlockKind for ListKind {
    type Run = String;

    fn name(&self) -> &'static str {
        self.name
    }

    fn matches(&self, line: &str) -> bool {
        self.item.is_match(line)
    }

    fn push(&self, run: &mut String, line: &str) {
        run.push_str(&self.item.replace(line, "<li>${1}</li>"));
        run.push('\n');
    }

    fn render(&self, run: String) -> String {
        format!("{}{run}{}", self.open, self.close)
    }
}
