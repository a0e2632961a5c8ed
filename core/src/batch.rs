use cozy_chess::Board;
use evaluation::{bae, Value};
use log::debug;
use rayon::prelude::*;
use std::io::{self, BufRead};

pub struct Scored {
    pub fen: String,
    pub score: Result<Value, String>,
}

/// Reads FENs one per line, skipping blank lines and `#` comments.
pub fn read_positions<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut fens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        fens.push(line.to_string());
    }
    Ok(fens)
}

/// Evaluates every FEN in parallel against the installed weight table.
/// Input order is preserved; unparsable FENs carry their error instead of a score.
pub fn evaluate_all(fens: Vec<String>) -> Vec<Scored> {
    debug!("Evaluating {} positions", fens.len());

    fens.into_par_iter()
        .map(|fen| {
            let score = fen
                .parse::<Board>()
                .map(|board| bae::evaluate(&board))
                .map_err(|e| format!("{:?}", e));
            Scored { fen, score }
        })
        .collect()
}
