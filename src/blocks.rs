//! Line-oriented block extraction.
//!
//! Tables and lists are recognised one line at a time. Contiguous runs of
//! matching lines are gathered into a single block and rendered inside a
//! wrapper, while every other line passes through untouched. The scan is a
//! fold over the lines with two states:
//!
//! * `Outside` - not currently inside a block;
//! * `InBlock` - collecting a run of matching lines.
//!
//! A non-matching line closes the open block. When the input ends while a
//! block is still open the block has not been emitted yet; what happens to
//! it is decided by [`Extraction::finish`] and [`TrailingBlock`].

/// What to do with a block that is still open when the input ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingBlock {
    /// Discard the block. Documents ending in a list or table row lose it.
    #[default]
    Drop,
    /// Render the block as if a non-matching line followed it.
    Flush,
}

/// A kind of block: how lines are recognised, collected and rendered.
pub trait BlockKind {
    /// Per-run accumulator.
    type Run: Default;

    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Whether `line` belongs to a block of this kind.
    fn matches(&self, line: &str) -> bool;

    /// Add a matching line to the current run.
    fn push(&self, run: &mut Self::Run, line: &str);

    /// Render a finished run, wrapper included.
    fn render(&self, run: Self::Run) -> String;
}

enum State<R> {
    Outside,
    InBlock { run: R, lines: usize },
}

/// Result of scanning a document for one block kind.
pub struct Extraction<'k, K: BlockKind> {
    kind: &'k K,
    lines: Vec<String>,
    pending: Option<(K::Run, usize)>,
}

impl<K: BlockKind> Extraction<'_, K> {
    /// Lines emitted so far, with closed blocks already rendered.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of source lines in the block left open at end of input.
    #[must_use]
    pub fn pending_lines(&self) -> Option<usize> {
        self.pending.as_ref().map(|(_, n)| *n)
    }

    /// Resolve any open block and join the output with newlines.
    #[must_use]
    pub fn finish(self, trailing: TrailingBlock) -> String {
        let Self {
            kind,
            mut lines,
            pending,
        } = self;
        match (pending, trailing) {
            (None, _) => {}
            (Some((_, count)), TrailingBlock::Drop) => {
                log::debug!(
                    "dropping unterminated {} block of {count} line(s)",
                    kind.name()
                );
            }
            (Some((run, count)), TrailingBlock::Flush) => {
                log::debug!(
                    "flushing unterminated {} block of {count} line(s)",
                    kind.name()
                );
                lines.push(kind.render(run));
            }
        }
        lines.join("\n")
    }
}

/// Scan `lines`, wrapping each run of lines accepted by `kind`.
#[must_use]
pub fn extract<'k, 'a, K, I>(kind: &'k K, lines: I) -> Extraction<'k, K>
where
    K: BlockKind,
    I: IntoIterator<Item = &'a str>,
{
    let (out, state) = lines.into_iter().fold(
        (Vec::new(), State::Outside),
        |(mut out, state), line| {
            if kind.matches(line) {
                let (mut run, count) = match state {
                    State::InBlock { run, lines } => (run, lines),
                    State::Outside => (<K::Run as Default>::default(), 0),
                };
                kind.push(&mut run, line);
                return (
                    out,
                    State::InBlock {
                        run,
                        lines: count + 1,
                    },
                );
            }
            if let State::InBlock { run, lines } = state {
                log::debug!("wrapped {} block of {lines} line(s)", kind.name());
                out.push(kind.render(run));
            }
            out.push(line.to_string());
            (out, State::Outside)
        },
    );
    let pending = match state {
        State::InBlock { run, lines } => Some((run, lines)),
        State::Outside => None,
    };
    Extraction {
        kind,
        lines: out,
        pending,
    }
}

/// Run one block pass over a whole document.
#[must_use]
pub fn extract_text<K: BlockKind>(kind: &K, text: &str, trailing: TrailingBlock) -> String {
    extract(kind, text.split('\n')).finish(trailing)
}
