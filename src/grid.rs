use direction::Direction;
use error::*;
use graph::*;
use grid_2d::Coord;
use hash::*;
use std::collections::{HashMap, HashSet};

const CARDINAL_DIRS: [Direction; 4] = [
    Direction::East,
    Direction::North,
    Direction::West,
    Direction::South,
];

const COMPASS_DIRS: [Direction; 8] = [
    Direction::East,
    Direction::NorthEast,
    Direction::North,
    Direction::NorthWest,
    Direction::West,
    Direction::SouthWest,
    Direction::South,
    Direction::SouthEast,
];

fn manhatten_distance(a: Coord, b: Coord) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Rectangular grid with walls and weighted nodes, cardinal movement and a
/// manhatten-distance heuristic. Wall and weight membership is keyed by
/// coordinate hash.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct AstarGridGraph {
    width: u32,
    height: u32,
    walls: HashSet<u32>,
    weighted_nodes: HashSet<u32>,
    pub default_weight: u32,
    pub weighted_node_weight: u32,
}

impl AstarGridGraph {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            walls: HashSet::new(),
            weighted_nodes: HashSet::new(),
            default_weight: 1,
            weighted_node_weight: 5,
        }
    }

    pub fn is_node_in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    pub fn add_wall(&mut self, coord: Coord) -> Result<(), Error> {
        let hash = to_hash(coord).ok_or(Error::CoordOutOfRange(coord))?;
        self.walls.insert(hash);
        Ok(())
    }

    pub fn add_walls<I>(&mut self, coords: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = Coord>,
    {
        for coord in coords {
            self.add_wall(coord)?;
        }
        Ok(())
    }

    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }

    pub fn add_weighted_node(&mut self, coord: Coord) -> Result<(), Error> {
        let hash = to_hash(coord).ok_or(Error::CoordOutOfRange(coord))?;
        self.weighted_nodes.insert(hash);
        Ok(())
    }

    pub fn add_weighted_nodes<I>(&mut self, coords: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = Coord>,
    {
        for coord in coords {
            self.add_weighted_node(coord)?;
        }
        Ok(())
    }

    pub fn clear_weighted_nodes(&mut self) {
        self.weighted_nodes.clear();
    }
}

impl UnweightedGraph for AstarGridGraph {
    fn neighbours(&self, node: Coord, buf: &mut Vec<Coord>) {
        for direction in CARDINAL_DIRS.iter() {
            let next = node + direction.coord();
            if self.is_passable(next) {
                buf.push(next);
            }
        }
    }

    fn is_passable(&self, node: Coord) -> bool {
        if !self.is_node_in_bounds(node) {
            return false;
        }
        match to_hash(node) {
            Some(hash) => !self.walls.contains(&hash),
            None => false,
        }
    }
}

impl WeightedGraph for AstarGridGraph {
    type Cost = u32;

    fn cost(&self, _from: Coord, to: Coord) -> u32 {
        match to_hash(to) {
            Some(hash) => {
                if self.weighted_nodes.contains(&hash) {
                    self.weighted_node_weight
                } else {
                    self.default_weight
                }
            }
            None => self.default_weight,
        }
    }
}

impl AstarGraph for AstarGridGraph {
    fn heuristic(&self, node: Coord, goal: Coord) -> u32 {
        manhatten_distance(node, goal) as u32
    }
}

/// Rectangular grid with walls and weighted nodes but no heuristic. Pair
/// with the dijkstra entry points.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct WeightedGridGraph {
    width: u32,
    height: u32,
    walls: HashSet<u32>,
    weighted_nodes: HashSet<u32>,
    pub default_weight: u32,
    pub weighted_node_weight: u32,
    allow_diagonal: bool,
}

impl WeightedGridGraph {
    pub fn new(width: u32, height: u32, allow_diagonal: bool) -> Self {
        Self {
            width,
            height,
            walls: HashSet::new(),
            weighted_nodes: HashSet::new(),
            default_weight: 1,
            weighted_node_weight: 5,
            allow_diagonal,
        }
    }

    pub fn is_node_in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    pub fn add_wall(&mut self, coord: Coord) -> Result<(), Error> {
        let hash = to_hash(coord).ok_or(Error::CoordOutOfRange(coord))?;
        self.walls.insert(hash);
        Ok(())
    }

    pub fn add_walls<I>(&mut self, coords: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = Coord>,
    {
        for coord in coords {
            self.add_wall(coord)?;
        }
        Ok(())
    }

    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }

    pub fn add_weighted_node(&mut self, coord: Coord) -> Result<(), Error> {
        let hash = to_hash(coord).ok_or(Error::CoordOutOfRange(coord))?;
        self.weighted_nodes.insert(hash);
        Ok(())
    }

    pub fn clear_weighted_nodes(&mut self) {
        self.weighted_nodes.clear();
    }
}

impl UnweightedGraph for WeightedGridGraph {
    fn neighbours(&self, node: Coord, buf: &mut Vec<Coord>) {
        let directions: &[Direction] = if self.allow_diagonal {
            &COMPASS_DIRS
        } else {
            &CARDINAL_DIRS
        };
        for direction in directions {
            let next = node + direction.coord();
            if self.is_passable(next) {
                buf.push(next);
            }
        }
    }

    fn is_passable(&self, node: Coord) -> bool {
        if !self.is_node_in_bounds(node) {
            return false;
        }
        match to_hash(node) {
            Some(hash) => !self.walls.contains(&hash),
            None => false,
        }
    }
}

impl WeightedGraph for WeightedGridGraph {
    type Cost = u32;

    fn cost(&self, _from: Coord, to: Coord) -> u32 {
        match to_hash(to) {
            Some(hash) => {
                if self.weighted_nodes.contains(&hash) {
                    self.weighted_node_weight
                } else {
                    self.default_weight
                }
            }
            None => self.default_weight,
        }
    }
}

/// Rectangular grid with walls only, for breadth-first search.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct UnweightedGridGraph {
    width: u32,
    height: u32,
    walls: HashSet<u32>,
    allow_diagonal: bool,
}

impl UnweightedGridGraph {
    pub fn new(width: u32, height: u32, allow_diagonal: bool) -> Self {
        Self {
            width,
            height,
            walls: HashSet::new(),
            allow_diagonal,
        }
    }

    pub fn is_node_in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    pub fn add_wall(&mut self, coord: Coord) -> Result<(), Error> {
        let hash = to_hash(coord).ok_or(Error::CoordOutOfRange(coord))?;
        self.walls.insert(hash);
        Ok(())
    }

    pub fn add_walls<I>(&mut self, coords: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = Coord>,
    {
        for coord in coords {
            self.add_wall(coord)?;
        }
        Ok(())
    }

    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }
}

impl UnweightedGraph for UnweightedGridGraph {
    fn neighbours(&self, node: Coord, buf: &mut Vec<Coord>) {
        let directions: &[Direction] = if self.allow_diagonal {
            &COMPASS_DIRS
        } else {
            &CARDINAL_DIRS
        };
        for direction in directions {
            let next = node + direction.coord();
            if self.is_passable(next) {
                buf.push(next);
            }
        }
    }

    fn is_passable(&self, node: Coord) -> bool {
        if !self.is_node_in_bounds(node) {
            return false;
        }
        match to_hash(node) {
            Some(hash) => !self.walls.contains(&hash),
            None => false,
        }
    }
}

/// Adjacency-list graph over arbitrary coordinates. A node is passable when
/// it has an edge list, even an empty one.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct EdgeGraph {
    edges: HashMap<u32, Vec<Coord>>,
}

impl EdgeGraph {
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    pub fn add_edges(&mut self, node: Coord, neighbours: Vec<Coord>) -> Result<(), Error> {
        let hash = to_hash(node).ok_or(Error::CoordOutOfRange(node))?;
        self.edges.insert(hash, neighbours);
        Ok(())
    }
}

impl UnweightedGraph for EdgeGraph {
    fn neighbours(&self, node: Coord, buf: &mut Vec<Coord>) {
        if let Some(hash) = to_hash(node) {
            if let Some(neighbours) = self.edges.get(&hash) {
                buf.extend_from_slice(neighbours);
            }
        }
    }

    fn is_passable(&self, node: Coord) -> bool {
        match to_hash(node) {
            Some(hash) => self.edges.contains_key(&hash),
            None => false,
        }
    }
}

impl Default for EdgeGraph {
    fn default() -> Self {
        Self::new()
    }
}
