use grid_2d::Coord;

/// Neighbour enumeration and passability for a search space. Implementations
/// push each neighbour of `node` onto `buf`; the search clears the buffer
/// before each call.
pub trait UnweightedGraph {
    fn neighbours(&self, node: Coord, buf: &mut Vec<Coord>);
    fn is_passable(&self, node: Coord) -> bool;
}

/// Adds a non-negative cost for traversing the edge `from -> to`. Edge costs
/// are only requested for pairs produced by `neighbours`.
pub trait WeightedGraph: UnweightedGraph {
    type Cost;
    fn cost(&self, from: Coord, to: Coord) -> Self::Cost;
}

/// Adds a goal-distance estimate. The estimate must be non-negative, and must
/// not overestimate the true remaining cost if optimal paths are required.
pub trait AstarGraph: WeightedGraph {
    fn heuristic(&self, node: Coord, goal: Coord) -> Self::Cost;
}
