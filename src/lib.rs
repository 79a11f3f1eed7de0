//! Library for converting wiki markup into HTML.
//!
//! The dialect has inline styles (`*bold*`, `//italic//`, `_underline_`,
//! `~strikeout~`, `^superscript^`, `,,subscript,,`), two link forms
//! (`[[url]]` and `[[url|label]]`), bulleted (` * `) and numbered (` # `)
//! list lines, `||`-delimited table rows, and `=`, `==`, `===` headlines.
//!
//! [`format`] runs the whole pipeline with default options; build a
//! [`Formatter`] to reuse compiled rules or to change [`FormatOptions`].
//!
//! ```
//! let html = wikifmt::format("== Links ==\n[[/projects/njoy|njoy link]]");
//! assert_eq!(
//!     html,
//!     "<h2> Links </h2>\n<a href='/projects/njoy'>njoy link</a>"
//! );
//! ```

#[macro_use]
mod macros;

pub mod blocks;
pub mod headings;
pub mod io;
pub mod lists;
pub mod process;
pub mod rules;
pub mod sample;
pub mod table;

pub use blocks::{BlockKind, Extraction, TrailingBlock, extract, extract_text};
pub use headings::HeadlineRules;
pub use io::{render_file, write_html};
pub use lists::{BULLETED_LIST, ListKind, NUMBERED_LIST};
pub use process::{FormatOptions, Formatter, format};
pub use rules::{InlineRules, Rule};
pub use sample::SAMPLE_DOCUMENT;
pub use table::{Table, TableRun, split_columns};
