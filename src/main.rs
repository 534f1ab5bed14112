use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polliter::{lines_with, Bst, InOrder, PollIterator, ScanConfig, DEFAULT_MAX_LINE_LEN};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "polliter", about = "Walk trees and text streams with a poll-then-fetch iterator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Insert values into a binary search tree and print them in order.
    Tree {
        /// Values to insert, in insertion order.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Print a text stream line by line.
    Lines {
        /// Input file (`-` or omitted: stdin).
        path: Option<PathBuf>,
        /// Longest accepted line in bytes.
        #[arg(long, default_value_t = DEFAULT_MAX_LINE_LEN)]
        max_line_len: usize,
        /// Keep a carriage return that precedes the newline.
        #[arg(long)]
        keep_cr: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tree { values } => run_tree(values)?,
        Commands::Lines {
            path,
            max_line_len,
            keep_cr,
        } => run_lines(path, max_line_len, keep_cr)?,
    }

    Ok(())
}

fn run_tree(values: Vec<i64>) -> Result<()> {
    let empty = InOrder::<i64>::new(None);
    println!("Do empty iterators have a next item? {}", empty.has_next());

    let mut tree = Bst::new();
    for value in values {
        if !tree.insert(value) {
            debug!(value, "duplicate ignored");
        }
    }
    info!(len = tree.len(), depth = tree.depth(), "tree built");

    let mut elements = Vec::with_capacity(tree.len());
    let mut it = tree.iter();
    while it.has_next() {
        // In-order traversal only fails past exhaustion.
        elements.push(it.next()?.to_string());
    }
    println!("Elements: {}", elements.join(" "));
    Ok(())
}

fn run_lines(path: Option<PathBuf>, max_line_len: usize, keep_cr: bool) -> Result<()> {
    let config = ScanConfig::new(max_line_len)?.with_strip_cr(!keep_cr);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match path.filter(|p| p.as_os_str() != "-") {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            let label = path.display().to_string();
            print_lines(lines_with(BufReader::new(file), config), &label, &mut out)
        }
        None => print_lines(lines_with(io::stdin().lock(), config), "stdin", &mut out),
    }
}

fn print_lines<I, W>(mut it: I, label: &str, out: &mut W) -> Result<()>
where
    I: PollIterator<String>,
    W: Write,
{
    let mut count = 0usize;
    while it.has_next() {
        let line = it
            .next()
            .with_context(|| format!("read failed in {} after {} lines", label, count))?;
        writeln!(out, "{}", line)?;
        count += 1;
    }
    info!(count, source = label, "lines printed");
    Ok(())
}
