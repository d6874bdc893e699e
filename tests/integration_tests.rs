//! Integration tests for the wordgrid search engine.
//!
//! These tests exercise the full pipeline a caller would use: validate a
//! board, build the graph, and run the DFS, BFS, and exploration searches
//! against each other on realistic puzzle grids.

use wordgrid::board::{validate_word, Board};
use wordgrid::cell::Cell;
use wordgrid::errors::PuzzleError;
use wordgrid::exploration::find_path_with_exploration;
use wordgrid::graph::Graph;
use wordgrid::search::{find_path_bfs, find_path_dfs, sweep};

/// Validate rows and build a graph, the way the CLI does.
fn build_graph(rows: &[&str]) -> Graph {
    let board = Board::from_rows(rows).expect("test grids must be valid");
    Graph::new(board.grid())
}

fn path_letters(path: &[&Cell]) -> String {
    path.iter().map(|n| n.value()).collect()
}

mod board_to_search_pipeline {
    use super::*;

    #[test]
    fn test_validated_board_feeds_the_searches() {
        let graph = build_graph(&["CATS", "OREN", "DESK", "ABCD"]);

        validate_word("CAT").unwrap();
        let path = find_path_bfs(&graph, "CAT");
        assert_eq!(path_letters(&path), "CAT");
    }

    #[test]
    fn test_invalid_input_is_stopped_before_the_graph() {
        assert!(matches!(
            Board::from_rows(&["CATS", "ORE"]),
            Err(PuzzleError::RaggedRow { .. })
        ));
        assert!(matches!(validate_word("cat"), Err(PuzzleError::InvalidWordChar { .. })));
    }
}

mod cross_algorithm_agreement {
    use super::*;

    const DICTIONARY: &[&str] = &[
        "CAT", "CATS", "CORE", "DESK", "TEN", "REST", "DOG", "BED", "ZEBRA", "ABE", "ORE",
    ];

    #[test]
    fn test_dfs_bfs_and_exploration_agree_on_every_word() {
        let graph = build_graph(&["CATS", "OREN", "DESK", "ABCD"]);

        for &word in DICTIONARY {
            let dfs_found = !find_path_dfs(&graph, word).is_empty();
            let bfs_found = !find_path_bfs(&graph, word).is_empty();
            let outcome = find_path_with_exploration(&graph, word);

            assert_eq!(dfs_found, bfs_found, "DFS/BFS disagree on '{word}'");
            assert_eq!(bfs_found, outcome.found, "BFS/exploration disagree on '{word}'");
        }
    }

    #[test]
    fn test_sweep_matches_individual_searches() {
        let graph = build_graph(&["CATS", "OREN", "DESK", "ABCD"]);
        let verdicts = sweep(&graph, DICTIONARY);

        assert_eq!(verdicts.len(), DICTIONARY.len());
        for verdict in verdicts {
            let individually = !find_path_bfs(&graph, verdict.word).is_empty();
            assert_eq!(verdict.found, individually, "sweep disagrees on '{}'", verdict.word);
        }
    }
}

mod path_validity {
    use super::*;

    /// Replay `path` on the graph: letters match the word in order, each
    /// step is an 8-neighbor move, and no cell repeats.
    fn assert_path_replays(graph: &Graph, word: &str, path: &[&Cell]) {
        assert_eq!(path_letters(path), word);
        for pair in path.windows(2) {
            assert!(
                graph.neighbors(pair[0]).any(|n| n == pair[1]),
                "step {} -> {} is not an adjacency move",
                pair[0],
                pair[1]
            );
        }
        for (i, a) in path.iter().enumerate() {
            for b in &path[i + 1..] {
                assert_ne!(a, b, "cell {a} repeats within the path");
            }
        }
    }

    #[test]
    fn test_all_found_paths_replay_on_a_dense_grid() {
        // Several words share cells and force turns and diagonals
        let graph = build_graph(&["SNAKE", "TRAIL", "ADOBE", "RIVER", "SOUTH"]);

        for word in ["SNAKE", "TRAIL", "RIVER", "SOUTH", "STAR", "DART", "ROAD"] {
            let dfs_path = find_path_dfs(&graph, word);
            let bfs_path = find_path_bfs(&graph, word);
            if !dfs_path.is_empty() {
                assert_path_replays(&graph, word, &dfs_path);
            }
            if !bfs_path.is_empty() {
                assert_path_replays(&graph, word, &bfs_path);
            }
            assert_eq!(dfs_path.is_empty(), bfs_path.is_empty());
        }
    }

    #[test]
    fn test_straight_rows_are_always_found() {
        let graph = build_graph(&["SNAKE", "TRAIL", "ADOBE", "RIVER", "SOUTH"]);
        for word in ["SNAKE", "TRAIL", "ADOBE", "RIVER", "SOUTH"] {
            let path = find_path_dfs(&graph, word);
            assert_path_replays(&graph, word, &path);
        }
    }

    #[test]
    fn test_bent_word_across_rows_and_diagonals() {
        // STAR: S(0,0) T(1,0) A(2,0)... or via diagonals; either way it
        // must exist and replay cleanly
        let graph = build_graph(&["SNAKE", "TRAIL", "ADOBE", "RIVER", "SOUTH"]);
        let path = find_path_bfs(&graph, "STAR");
        assert_path_replays(&graph, "STAR", &path);
    }
}

mod exploration_trees {
    use super::*;

    #[test]
    fn test_failed_search_still_yields_a_renderable_tree() {
        let graph = build_graph(&["CAAA", "AAAA", "AAAA"]);
        let outcome = find_path_with_exploration(&graph, "CAAAAAQ");

        assert!(!outcome.found);
        assert!(outcome.path.is_empty());

        let root = outcome.start_cell.expect("the 'C' cell starts an attempt");
        assert_eq!((root.row(), root.col()), (0, 0));
        assert!(!outcome.parent_map.is_empty());

        // every explored cell walks back to the root without cycling
        for (child, _) in outcome.tree_edges() {
            let mut current = child;
            let mut steps = 0;
            while current != root {
                current = outcome.parent_map[current];
                steps += 1;
                assert!(steps <= outcome.parent_map.len(), "cycle at {current}");
            }
        }
    }

    #[test]
    fn test_tree_edges_are_adjacency_edges() {
        let graph = build_graph(&["CAAA", "AAAA", "AAAA"]);
        let outcome = find_path_with_exploration(&graph, "CAAAAAQ");
        for (child, parent) in outcome.tree_edges() {
            assert!(graph.neighbors(parent).any(|n| n == child));
        }
    }

    #[test]
    fn test_success_reports_the_matching_attempts_tree() {
        let graph = build_graph(&["CATS", "OREN", "DESK", "ABCD"]);
        let outcome = find_path_with_exploration(&graph, "CORE");
        assert!(outcome.found);
        assert_eq!(outcome.start_cell, Some(graph.cell_at(0, 0)));
        // the found path's non-start cells were discovered during this attempt
        for cell in &outcome.path[1..] {
            assert!(
                outcome.parent_map.contains_key(cell),
                "{cell} on the found path is missing from the exploration tree"
            );
        }
    }
}

mod boundaries {
    use super::*;

    #[test]
    fn test_one_by_one_grid() {
        let graph = build_graph(&["Q"]);
        assert_eq!(path_letters(&find_path_dfs(&graph, "Q")), "Q");
        assert_eq!(path_letters(&find_path_bfs(&graph, "Q")), "Q");
        assert!(find_path_dfs(&graph, "QQ").is_empty());
        let outcome = find_path_with_exploration(&graph, "Q");
        assert!(outcome.found);
    }

    #[test]
    fn test_word_longer_than_cell_count() {
        // 3x3 grid of 'A': no non-repeating path can hold 10 letters
        let graph = build_graph(&["AAA", "AAA", "AAA"]);
        let word = "A".repeat(10);
        assert!(find_path_dfs(&graph, &word).is_empty());
        assert!(find_path_bfs(&graph, &word).is_empty());
        assert!(!find_path_with_exploration(&graph, &word).found);
    }

    #[test]
    fn test_word_exactly_cell_count() {
        let graph = build_graph(&["AAA", "AAA", "AAA"]);
        let word = "A".repeat(9);
        let path = find_path_dfs(&graph, &word);
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn test_single_row_grid() {
        let graph = build_graph(&["WORDS"]);
        assert_eq!(path_letters(&find_path_bfs(&graph, "WORDS")), "WORDS");
        assert_eq!(path_letters(&find_path_bfs(&graph, "SDROW")), "SDROW");
        assert!(find_path_bfs(&graph, "SWORD").is_empty());
    }

    #[test]
    fn test_single_column_grid() {
        let graph = build_graph(&["T", "O", "P"]);
        assert_eq!(path_letters(&find_path_dfs(&graph, "TOP")), "TOP");
        assert_eq!(path_letters(&find_path_dfs(&graph, "POT")), "POT");
    }
}

mod concurrency {
    use super::*;
    use std::thread;

    #[test]
    fn test_concurrent_searches_share_one_graph() {
        let graph = build_graph(&["CATS", "OREN", "DESK", "ABCD"]);

        thread::scope(|scope| {
            let handles: Vec<_> = ["CAT", "CORE", "DESK", "DOG"]
                .into_iter()
                .map(|word| {
                    let graph = &graph;
                    scope.spawn(move || (word, find_path_bfs(graph, word).len()))
                })
                .collect();

            for handle in handles {
                let (word, len) = handle.join().unwrap();
                let expected = find_path_bfs(&graph, word).len();
                assert_eq!(len, expected, "concurrent result differs for '{word}'");
            }
        });
    }
}
