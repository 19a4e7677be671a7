use config::*;
use error::*;
use graph::*;
use grid_2d::Coord;
use hash::*;
use metadata::*;
use path;
use std::collections::{HashMap, HashSet, VecDeque};
use std::mem;

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
struct Entry {
    coord: Coord,
    hash: u32,
    depth: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct BfsStatus {
    pub found: bool,
    pub num_nodes_visited: usize,
}

/// Reusable breadth-first search state. Finds paths with the fewest edges on
/// graphs where per-edge cost is irrelevant.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct BfsContext {
    frontier: VecDeque<Entry>,
    visited: HashSet<u32>,
    came_from: HashMap<u32, Coord>,
    neighbour_buf: Vec<Coord>,
}

impl BfsContext {
    pub fn new() -> Self {
        Self {
            frontier: VecDeque::new(),
            visited: HashSet::new(),
            came_from: HashMap::new(),
            neighbour_buf: Vec::new(),
        }
    }

    pub fn search<G>(
        &mut self,
        graph: &G,
        start: Coord,
        goal: Coord,
        config: BfsConfig,
    ) -> Result<BfsStatus, Error>
    where
        G: UnweightedGraph,
    {
        self.frontier.clear();
        self.visited.clear();
        self.came_from.clear();

        let start_hash = to_hash(start).ok_or(Error::CoordOutOfRange(start))?;
        let goal_hash = to_hash(goal).ok_or(Error::CoordOutOfRange(goal))?;

        if start_hash == goal_hash {
            return Ok(BfsStatus {
                found: true,
                num_nodes_visited: 0,
            });
        }

        if !graph.is_passable(start) {
            return Ok(BfsStatus {
                found: false,
                num_nodes_visited: 0,
            });
        }

        self.visited.insert(start_hash);
        self.frontier.push_back(Entry {
            coord: start,
            hash: start_hash,
            depth: 0,
        });

        let mut num_nodes_visited = 0;
        let mut outcome = Ok(false);
        let mut nbuf = mem::replace(&mut self.neighbour_buf, Vec::new());

        'search: while let Some(entry) = self.frontier.pop_front() {
            if entry.hash == goal_hash {
                outcome = Ok(true);
                break 'search;
            }

            if entry.depth >= config.max_depth {
                continue;
            }
            num_nodes_visited += 1;

            nbuf.clear();
            graph.neighbours(entry.coord, &mut nbuf);

            for &neighbour_coord in nbuf.iter() {
                let neighbour_hash = match to_hash(neighbour_coord) {
                    Some(hash) => hash,
                    None => {
                        outcome = Err(Error::CoordOutOfRange(neighbour_coord));
                        break 'search;
                    }
                };

                if self.visited.insert(neighbour_hash) {
                    self.came_from.insert(neighbour_hash, entry.coord);
                    self.frontier.push_back(Entry {
                        coord: neighbour_coord,
                        hash: neighbour_hash,
                        depth: entry.depth + 1,
                    });
                }
            }
        }

        self.neighbour_buf = nbuf;

        outcome.map(|found| BfsStatus {
            found,
            num_nodes_visited,
        })
    }

    pub fn search_path<G>(
        &mut self,
        graph: &G,
        start: Coord,
        goal: Coord,
        config: BfsConfig,
        path: &mut Vec<Coord>,
    ) -> Result<Option<SearchMetadata<usize>>, Error>
    where
        G: UnweightedGraph,
    {
        let status = self.search(graph, start, goal, config)?;

        if !status.found {
            path.clear();
            return Ok(None);
        }

        let came_from = &self.came_from;
        path::reconstruct(
            goal,
            |coord| to_hash(coord).and_then(|hash| came_from.get(&hash).cloned()),
            |coord| coord,
            path,
        );

        Ok(Some(SearchMetadata {
            num_nodes_visited: status.num_nodes_visited,
            cost: path.len() - 1,
            length: path.len(),
        }))
    }

    pub fn has_path<G>(
        &mut self,
        graph: &G,
        start: Coord,
        goal: Coord,
        config: BfsConfig,
    ) -> Result<bool, Error>
    where
        G: UnweightedGraph,
    {
        let status = self.search(graph, start, goal, config)?;
        Ok(status.found)
    }
}

impl Default for BfsContext {
    fn default() -> Self {
        Self::new()
    }
}
