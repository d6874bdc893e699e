use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use wordgrid::board::{self, Board};
use wordgrid::exploration;
use wordgrid::graph::Graph;
use wordgrid::search;

/// Which path search to run for each word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Backtracking depth-first search
    Dfs,
    /// Breadth-first search over partial paths
    Bfs,
}

/// Word-grid search: find words in a letter grid via 8-directional adjacency
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// The grid, rows separated by '/' (e.g., "CATS/OREN/DESK/ABCD")
    grid: String,

    /// Words to search for
    #[arg(required = true)]
    words: Vec<String>,

    /// Search algorithm to use
    #[arg(short, long, value_enum, default_value = "bfs")]
    algorithm: Algorithm,

    /// Also print the breadth-first exploration tree for each word
    #[arg(short, long)]
    tree: bool,
}

/// Entry point of the wordgrid CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("WORDGRID_DEBUG").is_ok();
    wordgrid::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a PuzzleError
        if let Some(puzzle_err) = e.downcast_ref::<wordgrid::errors::PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the wordgrid CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Uppercase and validate the grid and every word.
/// 3. Build the adjacency graph and run the chosen search per word.
/// 4. Print a verdict (and path) per word on stdout; with `--tree`, also
///    the exploration tree of the visualization search.
/// 5. Print timing diagnostics on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Validate the grid (rows arrive '/'-separated; uppercase first,
    //    matching what the original board editor did to user input)
    let rows: Vec<String> = cli
        .grid
        .split('/')
        .map(str::to_ascii_uppercase)
        .collect();
    let board = Board::from_rows(&rows)?;

    let words: Vec<String> = cli.words.iter().map(|w| w.to_ascii_uppercase()).collect();
    for word in &words {
        board::validate_word(word)?;
    }

    // 2. Build the graph once; every search reads it immutably
    let graph = Graph::new(board.grid());
    log::info!(
        "Searching {}x{} grid for {} word(s)",
        board.rows(),
        board.cols(),
        words.len()
    );

    // 3. Search each word and print its verdict
    let t_search = Instant::now();
    for word in &words {
        if cli.tree {
            print_with_tree(&graph, word);
        } else {
            print_verdict(&graph, word, cli.algorithm);
        }
    }
    let search_secs = t_search.elapsed().as_secs_f64();

    // 4. Diagnostics on stderr
    eprintln!("Searched {} word(s) in {search_secs:.3}s.", words.len());

    Ok(())
}

fn print_verdict(graph: &Graph, word: &str, algorithm: Algorithm) {
    let path = match algorithm {
        Algorithm::Dfs => search::find_path_dfs(graph, word),
        Algorithm::Bfs => search::find_path_bfs(graph, word),
    };

    if path.is_empty() {
        println!("{word}: not found");
    } else {
        let steps: Vec<String> = path.iter().map(ToString::to_string).collect();
        println!("{word}: {}", steps.join(" -> "));
    }
}

fn print_with_tree(graph: &Graph, word: &str) {
    let outcome = exploration::find_path_with_exploration(graph, word);

    if outcome.found {
        let steps: Vec<String> = outcome.path.iter().map(ToString::to_string).collect();
        println!("{word}: {}", steps.join(" -> "));
    } else {
        println!("{word}: not found");
    }

    match outcome.start_cell {
        Some(start) => {
            println!("  exploration from {start}:");
            let mut edges: Vec<String> = outcome
                .tree_edges()
                .map(|(child, parent)| format!("  {parent} -> {child}"))
                .collect();
            // parent-map order is arbitrary; sort for stable output
            edges.sort();
            for edge in edges {
                println!("{edge}");
            }
        }
        None => println!("  (no start cell matched the first letter)"),
    }
}
