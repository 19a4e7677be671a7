use config::*;
use error::*;
use graph::*;
use grid_2d::Coord;
use hash::*;
use metadata::*;
use num_traits::Zero;
use path;
use pool::*;
use queue::*;
use std::collections::{HashMap, HashSet};
use std::mem;
use std::ops::Add;

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy)]
struct OpenEntry<Cost> {
    node: usize,
    priority: Cost,
}

impl<Cost: Copy + PartialOrd<Cost>> PriorityItem for OpenEntry<Cost> {
    type Priority = Cost;
    fn priority(&self) -> Cost {
        self.priority
    }
}

/// Handle to the goal node of a successful search. Valid until the next
/// search or `reclaim` on the context that produced it.
#[derive(Debug, Clone, Copy)]
pub struct GoalNode(pub(crate) usize);

#[derive(Debug, Clone, Copy)]
pub struct SearchStatus {
    pub num_nodes_visited: usize,
    pub goal: Option<GoalNode>,
}

/// Reusable A* search state. Each context owns its node pool, priority queue,
/// open-set lookup and closed set, so independent contexts never share state.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct AstarContext<Cost> {
    pool: NodePool<Cost>,
    queue: PriorityQueue<OpenEntry<Cost>>,
    open: HashMap<u32, usize>,
    closed: HashSet<u32>,
    pub(crate) nodes: Vec<Box<SearchNode<Cost>>>,
    neighbour_buf: Vec<Coord>,
}

impl<Cost: Copy + Add<Cost> + PartialOrd<Cost> + Zero> AstarContext<Cost> {
    pub fn new() -> Self {
        Self::with_pool_capacity(DEFAULT_POOL_CAPACITY)
    }

    pub fn with_pool_capacity(capacity: usize) -> Self {
        Self {
            pool: NodePool::new(capacity),
            queue: PriorityQueue::new(),
            open: HashMap::new(),
            closed: HashSet::new(),
            nodes: Vec::new(),
            neighbour_buf: Vec::new(),
        }
    }

    /// Searches for a path from `start` to `goal`. On success the returned
    /// status holds a `GoalNode` handle for `reconstruct_path`; an
    /// unreachable goal yields `goal: None`, not an error.
    pub fn search<G>(
        &mut self,
        graph: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
    ) -> Result<SearchStatus, Error>
    where
        G: AstarGraph<Cost = Cost>,
    {
        self.reclaim();

        let start_hash = to_hash(start).ok_or(Error::CoordOutOfRange(start))?;
        let goal_hash = to_hash(goal).ok_or(Error::CoordOutOfRange(goal))?;

        if start_hash == goal_hash {
            let node = self
                .pool
                .get(start, start_hash, Zero::zero(), Zero::zero(), None);
            self.nodes.push(node);
            return Ok(SearchStatus {
                num_nodes_visited: 0,
                goal: Some(GoalNode(0)),
            });
        }

        if !graph.is_passable(start) {
            return Ok(SearchStatus {
                num_nodes_visited: 0,
                goal: None,
            });
        }

        let start_heuristic = graph.heuristic(start, goal);
        let node = self
            .pool
            .get(start, start_hash, Zero::zero(), start_heuristic, None);
        let priority = node.priority;
        self.nodes.push(node);
        self.open.insert(start_hash, 0);
        self.queue.enqueue(OpenEntry { node: 0, priority });

        let mut num_nodes_visited = 0;
        let mut outcome = Ok(None);
        let mut nbuf = mem::replace(&mut self.neighbour_buf, Vec::new());

        'search: while let Some(entry) = self.queue.dequeue() {
            let index = entry.node;
            let (current_coord, current_hash, current_g) = {
                let node = &self.nodes[index];
                (node.coord, node.hash, node.g)
            };

            self.open.remove(&current_hash);

            if current_hash == goal_hash {
                outcome = Ok(Some(GoalNode(index)));
                break 'search;
            }

            if num_nodes_visited >= config.max_expansions {
                break 'search;
            }
            num_nodes_visited += 1;

            self.closed.insert(current_hash);

            nbuf.clear();
            graph.neighbours(current_coord, &mut nbuf);

            for &neighbour_coord in nbuf.iter() {
                let neighbour_hash = match to_hash(neighbour_coord) {
                    Some(hash) => hash,
                    None => {
                        outcome = Err(Error::CoordOutOfRange(neighbour_coord));
                        break 'search;
                    }
                };

                if self.closed.contains(&neighbour_hash) {
                    continue;
                }

                let tentative = current_g + graph.cost(current_coord, neighbour_coord);

                if let Some(&open_index) = self.open.get(&neighbour_hash) {
                    let node = &mut self.nodes[open_index];
                    if tentative < node.g {
                        // The queue entry keeps its old priority; the node
                        // still carries the improved cost when dequeued.
                        node.g = tentative;
                        node.priority = tentative + node.h;
                        node.parent = Some(index);
                    }
                } else {
                    let heuristic = graph.heuristic(neighbour_coord, goal);
                    let node = self.pool.get(
                        neighbour_coord,
                        neighbour_hash,
                        tentative,
                        heuristic,
                        Some(index),
                    );
                    let priority = node.priority;
                    let new_index = self.nodes.len();
                    self.nodes.push(node);
                    self.open.insert(neighbour_hash, new_index);
                    self.queue.enqueue(OpenEntry {
                        node: new_index,
                        priority,
                    });
                }
            }
        }

        self.neighbour_buf = nbuf;

        outcome.map(|goal| SearchStatus {
            num_nodes_visited,
            goal,
        })
    }

    /// Writes the coordinates from `start` to the goal into `path`. Must be
    /// called before `reclaim` or the next search.
    pub fn reconstruct_path(&self, goal: GoalNode, path: &mut Vec<Coord>) {
        path::reconstruct(
            goal.0,
            |index| self.nodes[index].parent,
            |index| self.nodes[index].coord,
            path,
        );
    }

    pub fn search_path<G>(
        &mut self,
        graph: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
        path: &mut Vec<Coord>,
    ) -> Result<Option<SearchMetadata<Cost>>, Error>
    where
        G: AstarGraph<Cost = Cost>,
    {
        let status = self.search(graph, start, goal, config)?;
        let result = match status.goal {
            Some(goal_node) => {
                self.reconstruct_path(goal_node, path);
                Some(SearchMetadata {
                    num_nodes_visited: status.num_nodes_visited,
                    cost: self.nodes[goal_node.0].g,
                    length: path.len(),
                })
            }
            None => {
                path.clear();
                None
            }
        };
        self.reclaim();
        Ok(result)
    }

    pub fn has_path<G>(
        &mut self,
        graph: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
    ) -> Result<bool, Error>
    where
        G: AstarGraph<Cost = Cost>,
    {
        let status = self.search(graph, start, goal, config)?;
        let found = status.goal.is_some();
        self.reclaim();
        Ok(found)
    }

    /// Returns every node from the last search to the pool in one batch.
    /// Parent chains stay intact until this runs, so recycling can never
    /// corrupt a path that is still being reconstructed.
    pub fn reclaim(&mut self) {
        for node in self.nodes.drain(..) {
            self.pool.recycle(node);
        }
        self.open.clear();
        self.closed.clear();
        self.queue.clear();
    }

    pub fn pool_stats(&self) -> PoolStats {
        PoolStats {
            size: self.pool.len(),
            capacity: self.pool.capacity(),
        }
    }

    pub fn clear_pool(&mut self) {
        self.pool.clear();
    }
}

impl<Cost: Copy + Add<Cost> + PartialOrd<Cost> + Zero> Default for AstarContext<Cost> {
    fn default() -> Self {
        Self::new()
    }
}
