use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bae")]
#[command(about = "Board-aware static evaluation of chess positions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Weight file to evaluate with. Without it every score is zero.
    #[arg(short, long)]
    pub weights: Option<PathBuf>,

    /// Position to evaluate, as FEN. May be repeated.
    #[arg(short, long)]
    pub fen: Vec<String>,

    /// File with one FEN per line. Blank lines and lines starting with '#' are skipped.
    #[arg(short, long)]
    pub positions: Option<PathBuf>,

    /// Worker threads for batch evaluation (defaults to all cores).
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Write a zero-filled weight file to this path and exit.
    #[arg(long)]
    pub write_template: Option<PathBuf>,

    /// Log to a file instead of stderr.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Log debug output.
    #[arg(short, long)]
    pub verbose: bool,
}
