mod args;
mod batch;

use args::Args;
use clap::Parser;
use evaluation::bae::{self, WeightTable};
use log::{info, warn, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    if let Some(path) = &args.write_template {
        WeightTable::zeroed().save(path)?;
        return Ok(());
    }

    let table = match &args.weights {
        Some(path) => WeightTable::load(path)?,
        None => {
            warn!("No weight file given, all scores will be zero");
            WeightTable::zeroed()
        }
    };
    bae::install(table).map_err(|_| "BAE weight table was already installed")?;

    let mut fens = args.fen.clone();
    if let Some(path) = &args.positions {
        fens.extend(batch::read_positions(BufReader::new(File::open(path)?))?);
    }
    if fens.is_empty() {
        warn!("No positions given, use --fen or --positions");
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads.unwrap_or(0))
        .build()?;
    info!("Evaluating on {} threads", pool.current_num_threads());

    let results = pool.install(|| batch::evaluate_all(fens));

    for result in results {
        match result.score {
            Ok(score) => println!("{}\t{}", score, result.fen),
            Err(e) => warn!("Skipping invalid FEN '{}': {}", result.fen, e),
        }
    }

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(level, Config::default(), File::create(log_file)?)?;
    } else {
        TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?;
    }

    Ok(args)
}
