use clap::Parser;
use crossterm::style::Stylize;
use eight_puzzle::puzzle::BLANK;
use eight_puzzle::{Move, PuzzleError, SearchStats, State, Strategy};

/// Depth-first paths run to tens of thousands of moves.
const MAX_PRINTED_MOVES: usize = 64;

#[derive(Debug, Parser)]
#[command(name = "eight-puzzle", version, about = "Solve the 8-puzzle with graph search")]
struct Args {
    /// Start board, row-major; `_` or `0` marks the blank
    #[arg(default_value = "2_3541687")]
    state: String,

    /// bfs, dfs, astar-hamming, astar-manhattan or all
    #[arg(short, long, default_value = "astar-manhattan")]
    strategy: String,

    /// Print the board after every move of the solution
    #[arg(long)]
    replay: bool,

    /// Only print the move lists
    #[arg(short, long)]
    quiet: bool,
}

fn print_board(state: &State) {
    for row in state.grid() {
        let cells: String = row
            .iter()
            .map(|&tile| {
                if tile == BLANK {
                    "_".dark_yellow().bold().to_string()
                } else {
                    tile.to_string()
                }
            })
            .collect();
        println!("|{}|", cells);
    }
}

fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let start: State = args.state.parse()?;
    let strategies = if args.strategy.eq_ignore_ascii_case("all") {
        Strategy::ALL.to_vec()
    } else {
        vec![args.strategy.parse()?]
    };

    if !args.quiet {
        println!("{}", "Initial Puzzle:".bold());
        print_board(&start);
    }

    for strategy in strategies {
        let outcome = strategy.search(&start);

        if args.quiet {
            match &outcome.moves {
                Some(moves) => println!("{}", format_moves(moves)),
                None => println!("none"),
            }
            continue;
        }

        println!();
        let Some(moves) = outcome.moves else {
            println!("{} {}", format!("[{strategy}]").bold(), "no solution".red());
            print_stats(&outcome.stats);
            continue;
        };

        let kind = if strategy.is_optimal() {
            "shortest"
        } else {
            "not necessarily shortest"
        };
        println!(
            "{} found a solution with {} moves ({kind})",
            format!("[{strategy}]").bold(),
            moves.len().to_string().green()
        );
        print_stats(&outcome.stats);
        if moves.len() <= MAX_PRINTED_MOVES || args.replay {
            println!("{}", format_moves(&moves));
        }

        if args.replay {
            let mut board = start;
            for (step, &item) in moves.iter().enumerate() {
                board = board
                    .apply(item)
                    .ok_or(PuzzleError::IllegalMove { step, action: item })?;
                println!("{}", item.to_string().cyan());
                print_board(&board);
            }
        }
    }

    Ok(())
}

fn print_stats(stats: &SearchStats) {
    println!(
        "  expanded {} / generated {} / peak frontier {}",
        stats.expanded, stats.generated, stats.max_frontier
    );
}
