use std::io::{self, Write};

use anyhow::{Context, Result};
use avl::tree::Tree;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Builds an AVL tree from the given keys, deletes some of them, and prints what is left in
/// order.
#[derive(Parser, Debug)]
#[command(name = "avl", about = "Insert keys into an AVL tree and print them in order")]
struct Cli {
    /// Keys to insert, in order.
    #[arg(default_values_t = [20, 10, 30, 5, 15, 25, 35])]
    keys: Vec<i64>,
    /// Keys to delete once every key has been inserted.
    #[arg(short, long, value_delimiter = ',', default_values_t = [10])]
    delete: Vec<i64>,
    /// Also print the height of the resulting tree.
    #[arg(long)]
    show_height: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut tree = Tree::new();
    for key in &cli.keys {
        debug!(key, "inserting");
        tree = tree.insert(*key);
    }
    for key in &cli.delete {
        debug!(key, "deleting");
        tree = tree.delete(key);
    }
    debug!(height = tree.height(), len = tree.len(), "built tree");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "AVL tree in order:").context("failed to write to stdout")?;
    writeln!(out, "{}", tree).context("failed to write to stdout")?;
    if cli.show_height {
        writeln!(out, "height: {}", tree.height()).context("failed to write to stdout")?;
    }

    Ok(())
}
