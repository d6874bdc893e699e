//! Path searches for one word occurrence in the grid.
//!
//! Both searches walk the 8-neighbor adjacency of [`Graph`], never repeating
//! a cell within a single candidate path, and are fully deterministic: start
//! cells are tried in row-major order and neighbors in the graph's fixed
//! offset order, so the same grid and word always yield the same path.
//!
//! An empty word means "nothing to search for" and returns an empty path
//! from either search; callers must treat it as a non-match, not a trivial
//! match.
//!
//! The searches are purely functional over the graph: every queue, path, and
//! visited-set is allocated per call and discarded at return, so concurrent
//! searches over one shared graph need no coordination.

use crate::cell::Cell;
use crate::graph::Graph;
use log::{debug, info};
use std::collections::{HashSet, VecDeque};

/// An ordered, non-repeating walk through the grid: first element is the
/// search start, last is the most recently visited cell.
pub type Path<'g> = Vec<&'g Cell>;

/// Found/not-found verdict for one word of a dictionary sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict<'w> {
    pub word: &'w str,
    pub found: bool,
}

/// Depth-first backtracking search for one occurrence of `word`.
///
/// Tries every cell in row-major order as a start; at each cell, fails the
/// branch on a letter mismatch, succeeds on matching the final letter, and
/// otherwise recurses into each not-yet-on-this-path neighbor in graph
/// order. Returns the first complete path encountered, or an empty path if
/// no start cell yields a match (or `word` is empty).
#[must_use]
pub fn find_path_dfs<'g>(graph: &'g Graph, word: &str) -> Path<'g> {
    if word.is_empty() {
        return Vec::new();
    }

    let letters: Vec<char> = word.chars().collect();

    for start in graph.cells() {
        let mut path: Path<'g> = Vec::new();
        let mut visited: HashSet<&Cell> = HashSet::new();
        if dfs(graph, start, &letters, 0, &mut path, &mut visited) {
            debug!("DFS found '{word}' starting at {start}");
            return path;
        }
    }

    debug!("DFS exhausted all start cells without finding '{word}'");
    Vec::new()
}

/// One backtracking step of the DFS: try to match `letters[index..]`
/// starting at `cell`, extending `path` on success.
fn dfs<'g>(
    graph: &'g Graph,
    cell: &'g Cell,
    letters: &[char],
    index: usize,
    path: &mut Path<'g>,
    visited: &mut HashSet<&'g Cell>,
) -> bool {
    if cell.value() != letters[index] {
        return false;
    }

    if index == letters.len() - 1 {
        path.push(cell);
        return true;
    }

    visited.insert(cell);
    path.push(cell);

    for neighbor in graph.neighbors(cell) {
        if !visited.contains(neighbor) && dfs(graph, neighbor, letters, index + 1, path, visited) {
            return true;
        }
    }

    // No neighbor completes the word from here; undo and report failure
    path.pop();
    visited.remove(cell);
    false
}

/// Breadth-first search over partial paths for one occurrence of `word`.
///
/// For each start cell in row-major order whose letter matches `word[0]`,
/// explores extensions of the start's one-cell path breadth-first: a path
/// whose length reaches the word length is returned immediately, and a path
/// is only extended by a neighbor that is not already on it and whose letter
/// matches the next character. Start cells are tried sequentially, so the
/// overall result belongs to the earliest start cell that admits a full
/// path, not necessarily the globally shortest completion.
#[must_use]
pub fn find_path_bfs<'g>(graph: &'g Graph, word: &str) -> Path<'g> {
    if word.is_empty() {
        return Vec::new();
    }

    let letters: Vec<char> = word.chars().collect();

    for start in graph.cells() {
        if start.value() != letters[0] {
            continue;
        }

        let mut queue: VecDeque<Path<'g>> = VecDeque::new();
        queue.push_back(vec![start]);

        while let Some(current_path) = queue.pop_front() {
            if current_path.len() == letters.len() {
                debug!("BFS found '{word}' starting at {start}");
                return current_path;
            }

            let last = current_path[current_path.len() - 1];
            let next_letter = letters[current_path.len()];

            for neighbor in graph.neighbors(last) {
                if neighbor.value() == next_letter && !current_path.contains(&neighbor) {
                    let mut extended = current_path.clone();
                    extended.push(neighbor);
                    queue.push_back(extended);
                }
            }
        }
    }

    debug!("BFS exhausted all start cells without finding '{word}'");
    Vec::new()
}

/// Run every word of a dictionary through [`find_path_bfs`] and report a
/// found/not-found verdict per word.
#[must_use]
pub fn sweep<'w>(graph: &Graph, words: &[&'w str]) -> Vec<Verdict<'w>> {
    let verdicts: Vec<Verdict<'w>> = words
        .iter()
        .map(|&word| Verdict {
            word,
            found: !find_path_bfs(graph, word).is_empty(),
        })
        .collect();

    let found_count = verdicts.iter().filter(|v| v.found).count();
    info!("Sweep: {found_count}/{} words found", verdicts.len());

    verdicts
}
