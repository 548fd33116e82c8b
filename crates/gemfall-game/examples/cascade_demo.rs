//! Example driving the cascade engine headlessly from a terminal.
//!
//! This example shows how to:
//! - Configure a board and construct a `CascadeEngine` with injected
//!   collaborators (a `HeadlessVisuals` renderer and a seeded RNG)
//! - Feed select events to the engine and inspect their outcomes
//! - Watch the board stabilize after each cascade
//!
//! # Usage
//!
//! ```sh
//! cargo run --example cascade_demo
//! ```
//!
//! Control the board shape, token variety, and reproducibility:
//!
//! ```sh
//! cargo run --example cascade_demo -- --width 6 --height 6 --types 4 --seed 7
//! ```
//!
//! Resolve more than one cascade:
//!
//! ```sh
//! cargo run --example cascade_demo -- --cascades 5
//! ```

use clap::Parser;
use futures::executor::block_on;
use gemfall_core::CellPos;
use gemfall_game::{
    AppearanceId, Board, BoardConfig, CascadeEngine, HeadlessVisuals, ResolutionOutcome,
    SelectOutcome, TokenType, TokenTypeId,
};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of board columns.
    #[arg(long, value_name = "CELLS", default_value_t = 8)]
    width: u32,

    /// Number of board rows.
    #[arg(long, value_name = "CELLS", default_value_t = 10)]
    height: u32,

    /// Number of distinct token types.
    #[arg(long, value_name = "COUNT", default_value_t = 5)]
    types: u16,

    /// RNG seed for the initial fill and refills.
    #[arg(long, value_name = "SEED", default_value_t = 42)]
    seed: u64,

    /// Number of matching swaps to resolve before stopping.
    #[arg(long, value_name = "COUNT", default_value_t = 3)]
    cascades: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let token_types = (0..args.types)
        .map(|i| TokenType::new(TokenTypeId::new(i), AppearanceId::new(u32::from(i))))
        .collect();
    let config = BoardConfig::new(args.width, args.height, token_types);

    let mut engine = match CascadeEngine::new(config, HeadlessVisuals::new(), Pcg64::seed_from_u64(args.seed)) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("Cannot build board: {err}");
            std::process::exit(2);
        }
    };

    println!("Initial board:");
    print_board(engine.board());

    let mut resolved = 0;
    while resolved < args.cascades {
        let Some((a, b)) = find_matching_swap(&mut engine) else {
            println!("No swap produces a match; stopping.");
            break;
        };
        resolved += 1;
        println!("\nCascade {resolved}: swapped {a} and {b}");
        print_board(engine.board());
    }

    let visuals = engine.visuals();
    println!(
        "\nRenderer workload: {} created, {} moved, {} effects, {} destroyed",
        visuals.created(),
        visuals.moved(),
        visuals.effects(),
        visuals.destroyed()
    );
}

/// Tries adjacent pairs until one swap matches; the engine reverts the
/// misses, so probing leaves the board unchanged.
fn find_matching_swap(
    engine: &mut CascadeEngine<HeadlessVisuals, Pcg64>,
) -> Option<(CellPos, CellPos)> {
    let width = i32::try_from(engine.board().width()).expect("width fits in i32");
    let height = i32::try_from(engine.board().height()).expect("height fits in i32");
    for x in 0..width {
        for y in 0..height {
            let pos = CellPos::new(x, y);
            for neighbor in [CellPos::new(x + 1, y), CellPos::new(x, y + 1)] {
                if !engine.board().is_valid(neighbor) {
                    continue;
                }
                assert!(block_on(engine.select_cell(pos)).is_selected());
                let outcome = block_on(engine.select_cell(neighbor));
                match outcome {
                    SelectOutcome::Resolved(ResolutionOutcome::Cleared { removed, refilled }) => {
                        println!("  removed {removed} tokens, refilled {refilled} cells");
                        return Some((pos, neighbor));
                    }
                    SelectOutcome::Resolved(ResolutionOutcome::Reverted) => {}
                    other => panic!("unexpected outcome while probing: {other:?}"),
                }
            }
        }
    }
    None
}

fn print_board(board: &Board) {
    let width = i32::try_from(board.width()).expect("width fits in i32");
    let height = i32::try_from(board.height()).expect("height fits in i32");
    for y in (0..height).rev() {
        let mut line = String::new();
        for x in 0..width {
            let cell = board
                .token_type(CellPos::new(x, y))
                .map_or('.', |token_type| {
                    char::from(b'a' + u8::try_from(token_type.id().value() % 26).expect("in range"))
                });
            line.push(cell);
            line.push(' ');
        }
        println!("  {line}");
    }
}
