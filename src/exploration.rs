//! Breadth-first path search that also records its exploration tree.
//!
//! This is the same per-start-cell search as [`find_path_bfs`], with one
//! extra piece of bookkeeping: a parent map over single cells, recording for
//! every cell the cell from which it was first discovered during the
//! attempt. The parent map exists purely so a caller can render the
//! breadth-first expansion, including when the word is not found.
//!
//! The two structures are deliberately separate. Path-queue correctness
//! needs per-path no-repeat tracking (one cell may legitimately sit on many
//! candidate paths at once), while the tree needs a single discovery event
//! per cell per attempt. Conflating them would either let paths cycle or
//! give explored cells multiple parents.
//!
//! [`find_path_bfs`]: crate::search::find_path_bfs

use crate::cell::Cell;
use crate::graph::Graph;
use crate::search::Path;
use log::debug;
use std::collections::{HashMap, HashSet, VecDeque};

/// Parent links of one breadth-first attempt: maps each discovered cell to
/// the cell that first reached it. The start cell has no entry.
pub type ParentMap<'g> = HashMap<&'g Cell, &'g Cell>;

/// Result bundle of a visualization search.
///
/// On failure, `parent_map` and `start_cell` describe the *last* start cell
/// attempted, so the caller can still render one representative exploration
/// tree. `start_cell` is `None` only when the word was empty or no cell
/// matched its first letter.
#[derive(Debug)]
pub struct SearchOutcome<'g> {
    pub found: bool,
    /// The matching path; empty when `found` is false.
    pub path: Path<'g>,
    pub parent_map: ParentMap<'g>,
    pub start_cell: Option<&'g Cell>,
}

impl<'g> SearchOutcome<'g> {
    fn not_found(parent_map: ParentMap<'g>, start_cell: Option<&'g Cell>) -> Self {
        Self { found: false, path: Vec::new(), parent_map, start_cell }
    }

    /// The `(child, parent)` edges of the exploration tree, in no particular
    /// order.
    pub fn tree_edges(&self) -> impl Iterator<Item = (&'g Cell, &'g Cell)> + '_ {
        self.parent_map.iter().map(|(&child, &parent)| (child, parent))
    }
}

/// Breadth-first path search for `word` that additionally records the
/// exploration tree of the attempt.
///
/// Start cells are tried in row-major order; each matching start cell resets
/// the path queue, the exploration visited-set, and the parent map, so the
/// returned tree always belongs to a single attempt. Returns immediately on
/// the first completed path with the parent map accumulated so far; if every
/// attempt fails, the last attempt's tree is returned ("last attempt wins").
#[must_use]
pub fn find_path_with_exploration<'g>(graph: &'g Graph, word: &str) -> SearchOutcome<'g> {
    if word.is_empty() {
        return SearchOutcome::not_found(HashMap::new(), None);
    }

    let letters: Vec<char> = word.chars().collect();

    let mut parent_map: ParentMap<'g> = HashMap::new();
    let mut start_cell: Option<&'g Cell> = None;

    for start in graph.cells() {
        if start.value() != letters[0] {
            continue;
        }

        // Fresh attempt: the tree must describe this start cell only
        parent_map.clear();
        start_cell = Some(start);

        let mut queue: VecDeque<Path<'g>> = VecDeque::new();
        queue.push_back(vec![start]);

        // Single-cell visited-set for the tree; the start has no parent
        let mut explored: HashSet<&'g Cell> = HashSet::new();
        explored.insert(start);

        while let Some(current_path) = queue.pop_front() {
            if current_path.len() == letters.len() {
                debug!(
                    "exploration BFS found '{word}' from {start} after discovering {} cells",
                    explored.len()
                );
                return SearchOutcome {
                    found: true,
                    path: current_path,
                    parent_map,
                    start_cell,
                };
            }

            let last = current_path[current_path.len() - 1];
            let next_letter = letters[current_path.len()];

            for neighbor in graph.neighbors(last) {
                if neighbor.value() == next_letter && !current_path.contains(&neighbor) {
                    let mut extended = current_path.clone();
                    extended.push(neighbor);
                    queue.push_back(extended);

                    // First discovery of this cell in this attempt: record
                    // its parent for the tree
                    if explored.insert(neighbor) {
                        parent_map.insert(neighbor, last);
                    }
                }
            }
        }
    }

    debug!("exploration BFS did not find '{word}'");
    SearchOutcome::not_found(parent_map, start_cell)
}
