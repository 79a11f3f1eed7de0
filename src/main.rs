use std::{
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use wikifmt::{FormatOptions, Formatter, SAMPLE_DOCUMENT, TrailingBlock, render_file, write_html};

#[derive(Parser)]
#[command(version, about = "Convert wiki markup to HTML")]
struct Cli {
    /// Write each rendered file next to its source with an `.html` extension
    #[arg(long = "write", requires = "files")]
    write: bool,
    /// Render the built-in sample page
    #[arg(long = "sample", conflicts_with = "files")]
    sample: bool,
    #[command(flatten)]
    opts: FormatOpts,
    /// Wiki files to render
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone, Copy)]
struct FormatOpts {
    /// Render a table or list that ends the document instead of dropping it
    #[arg(long = "flush-trailing")]
    flush_trailing: bool,
}

impl From<FormatOpts> for FormatOptions {
    fn from(opts: FormatOpts) -> Self {
        let trailing = if opts.flush_trailing {
            TrailingBlock::Flush
        } else {
            TrailingBlock::Drop
        };
        Self { trailing }
    }
}

/// Entry point for the command-line wiki renderer.
///
/// Renders the given files (in parallel, printed in argument order), the
/// built-in sample page, or standard input when no files are given.
///
/// # Examples
///
/// ```sh
/// # Render a page to stdout
/// wikifmt page.wiki
///
/// # Write page.html next to page.wiki
/// wikifmt --write page.wiki
///
/// # Render from standard input
/// cat page.wiki | wikifmt
/// ```
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let formatter = Formatter::with_options(cli.opts.into());

    if cli.sample {
        print!("{}", formatter.format(SAMPLE_DOCUMENT));
        return Ok(());
    }

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read standard input")?;
        print!("{}", formatter.format(&input));
        return Ok(());
    }

    if cli.write {
        let written = cli
            .files
            .par_iter()
            .map(|path| {
                write_html(path, &formatter)
                    .with_context(|| format!("failed to render {}", path.display()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        for path in written {
            log::info!("wrote {}", path.display());
        }
        return Ok(());
    }

    let rendered = cli
        .files
        .par_iter()
        .map(|path| {
            render_file(path, &formatter)
                .with_context(|| format!("failed to render {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    for html in rendered {
        print!("{html}");
    }
    Ok(())
}
