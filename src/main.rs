//! hufftree CLI - build a Huffman tree from text and print it sideways.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::builder::TypedValueParser;
use clap::Parser;
use huffman_tree::printer::{PrintConfig, DEFAULT_INDENT_STEP};
use huffman_tree::{Error, HuffmanTree, TreePrinter};
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, warn};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(name = "hufftree", version, about = "Build and print a Huffman coding tree")]
struct Cli {
    /// Input text (reads stdin when neither TEXT nor --file is given)
    #[arg(conflicts_with = "file")]
    text: Option<String>,

    /// Read input text from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Indent added per tree level
    #[arg(
        short,
        long,
        env = "HUFFTREE_INDENT",
        default_value_t = DEFAULT_INDENT_STEP,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    indent: usize,

    /// Also print the symbol frequency table
    #[arg(long)]
    frequencies: bool,

    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let text = read_input(cli)?;
    info!(chars = text.chars().count(), "read input");

    let mut tree = HuffmanTree::new();
    tree.build(&text);

    if cli.frequencies {
        print_frequencies(&tree)?;
    }

    let printer = TreePrinter::new(PrintConfig {
        indent_step: cli.indent,
    });
    debug!(indent_step = printer.config().indent_step, "printing tree");
    printer.print(&tree)?;
    Ok(())
}

fn read_input(cli: &Cli) -> Result<String, Error> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.file {
        debug!(?path, "reading input file");
        let bytes = fs::read(path).map_err(|source| Error::Input {
            path: path.clone(),
            source,
        })?;
        return Ok(decode_input(bytes));
    }
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    Ok(decode_input(bytes))
}

/// Invalid UTF-8 sequences become U+FFFD so any byte input yields a tree.
fn decode_input(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("input is not valid UTF-8, replacing invalid sequences");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

fn print_frequencies(tree: &HuffmanTree) -> Result<(), Error> {
    let mut leaves = tree.leaves();
    leaves.sort_unstable();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (symbol, count) in leaves {
        writeln!(out, "{}:{}", symbol.escape_debug(), count)?;
    }
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false);

    // RUST_LOG directives override the -d level
    let env_filter = EnvFilter::builder()
        .with_default_directive(filter.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(env_filter))
        .init();

    debug!(?filter, "logging initialised");
}
