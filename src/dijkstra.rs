use astar::*;
use config::*;
use error::*;
use graph::*;
use grid_2d::Coord;
use metadata::*;
use num_traits::Zero;
use std::ops::Add;

struct ZeroHeuristic<'a, G: 'a>(&'a G);

impl<'a, G: UnweightedGraph> UnweightedGraph for ZeroHeuristic<'a, G> {
    fn neighbours(&self, node: Coord, buf: &mut Vec<Coord>) {
        self.0.neighbours(node, buf)
    }
    fn is_passable(&self, node: Coord) -> bool {
        self.0.is_passable(node)
    }
}

impl<'a, G: WeightedGraph> WeightedGraph for ZeroHeuristic<'a, G> {
    type Cost = G::Cost;
    fn cost(&self, from: Coord, to: Coord) -> Self::Cost {
        self.0.cost(from, to)
    }
}

impl<'a, G: WeightedGraph> AstarGraph for ZeroHeuristic<'a, G>
where
    G::Cost: Zero,
{
    fn heuristic(&self, _node: Coord, _goal: Coord) -> Self::Cost {
        Zero::zero()
    }
}

impl<Cost: Copy + Add<Cost> + PartialOrd<Cost> + Zero> AstarContext<Cost> {
    pub fn dijkstra<G>(
        &mut self,
        graph: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
    ) -> Result<SearchStatus, Error>
    where
        G: WeightedGraph<Cost = Cost>,
    {
        self.search(&ZeroHeuristic(graph), start, goal, config)
    }

    pub fn dijkstra_path<G>(
        &mut self,
        graph: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
        path: &mut Vec<Coord>,
    ) -> Result<Option<SearchMetadata<Cost>>, Error>
    where
        G: WeightedGraph<Cost = Cost>,
    {
        self.search_path(&ZeroHeuristic(graph), start, goal, config, path)
    }

    pub fn dijkstra_has_path<G>(
        &mut self,
        graph: &G,
        start: Coord,
        goal: Coord,
        config: SearchConfig,
    ) -> Result<bool, Error>
    where
        G: WeightedGraph<Cost = Cost>,
    {
        self.has_path(&ZeroHeuristic(graph), start, goal, config)
    }
}
