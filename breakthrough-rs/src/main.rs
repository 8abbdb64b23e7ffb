#![deny(warnings)]

use anyhow::Result;
use breakthrough_rs::{
    play::play_game, Aggressor, Board, Conqueror, Defender, Evaluate, Evasive,
};
use decorum::N64;
use itertools::iproduct;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    tracing_subscriber::fmt::init();

    let mut rng = StdRng::seed_from_u64(42);

    // A small warm-up game with the full record dumped as JSON.
    let board = Board::start_position(5, 5, 1)?;
    let record = play_game(&Evasive, &Evasive, board, 3, &mut rng)?;
    println!("evasive vs evasive on 5x5:");
    println!("{}", serde_json::to_string_pretty(&record)?);
    println!();

    let sizes = [(8usize, 8usize, 2usize), (6, 6, 2), (10, 10, 3)];
    let matchups: [(&str, &dyn Evaluate<Board, N64>, &str, &dyn Evaluate<Board, N64>); 2] = [
        ("evasive", &Evasive, "conqueror", &Conqueror),
        ("aggressor", &Aggressor, "defender", &Defender),
    ];

    for ((rows, cols, home_rows), (white_name, white, black_name, black)) in
        iproduct!(sizes, matchups)
    {
        let board = Board::start_position(rows, cols, home_rows)?;
        let record = play_game(white, black, board, 3, &mut rng)?;

        info!(
            white = white_name,
            black = black_name,
            rows,
            cols,
            winner = %record.winner,
            moves = record.move_count,
            white_captures = record.white_captures,
            black_captures = record.black_captures,
            "match finished"
        );
        println!(
            "{white_name} (X) vs {black_name} (O) on {rows}x{cols}: {} wins in {} moves \
             ({} / {} captures)",
            record.winner, record.move_count, record.white_captures, record.black_captures
        );
        println!("{}", record.final_board);
        println!();
    }

    Ok(())
}
