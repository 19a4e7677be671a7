use bfs::*;
use error::*;
use graph::*;
use grid::*;
use grid_2d::Coord;

#[test]
fn bounds_and_passability() {
    let mut grid = AstarGridGraph::new(3, 3);
    grid.add_wall(Coord::new(1, 1)).unwrap();

    assert!(grid.is_node_in_bounds(Coord::new(0, 0)));
    assert!(grid.is_node_in_bounds(Coord::new(2, 2)));
    assert!(!grid.is_node_in_bounds(Coord::new(3, 0)));
    assert!(!grid.is_node_in_bounds(Coord::new(-1, 0)));

    assert!(grid.is_passable(Coord::new(0, 0)));
    assert!(!grid.is_passable(Coord::new(1, 1)));
    assert!(!grid.is_passable(Coord::new(0, 3)));

    grid.clear_walls();
    assert!(grid.is_passable(Coord::new(1, 1)));
}

#[test]
fn out_of_range_wall() {
    let mut grid = AstarGridGraph::new(3, 3);
    let coord = Coord::new(40000, 0);
    assert_eq!(grid.add_wall(coord), Err(Error::CoordOutOfRange(coord)));
}

#[test]
fn cardinal_neighbours() {
    let grid = AstarGridGraph::new(3, 3);
    let mut buf = Vec::new();

    grid.neighbours(Coord::new(1, 1), &mut buf);
    assert_eq!(buf.len(), 4);

    buf.clear();
    grid.neighbours(Coord::new(0, 0), &mut buf);
    assert_eq!(buf.len(), 2);
}

#[test]
fn diagonal_neighbours() {
    let grid = UnweightedGridGraph::new(3, 3, true);
    let mut buf = Vec::new();

    grid.neighbours(Coord::new(1, 1), &mut buf);
    assert_eq!(buf.len(), 8);

    buf.clear();
    grid.neighbours(Coord::new(0, 0), &mut buf);
    assert_eq!(buf.len(), 3);
}

#[test]
fn weighted_costs() {
    let mut grid = AstarGridGraph::new(3, 3);
    grid.add_weighted_node(Coord::new(1, 1)).unwrap();

    assert_eq!(grid.cost(Coord::new(0, 1), Coord::new(1, 1)), 5);
    assert_eq!(grid.cost(Coord::new(0, 0), Coord::new(0, 1)), 1);

    grid.weighted_node_weight = 9;
    assert_eq!(grid.cost(Coord::new(0, 1), Coord::new(1, 1)), 9);

    grid.clear_weighted_nodes();
    assert_eq!(grid.cost(Coord::new(0, 1), Coord::new(1, 1)), 1);
}

#[test]
fn manhatten_heuristic() {
    let grid = AstarGridGraph::new(10, 10);
    assert_eq!(grid.heuristic(Coord::new(1, 4), Coord::new(8, 5)), 8);
    assert_eq!(grid.heuristic(Coord::new(3, 3), Coord::new(3, 3)), 0);
}

#[test]
fn edge_graph_search() {
    let a = Coord::new(0, 0);
    let b = Coord::new(1, 0);
    let c = Coord::new(0, 1);
    let d = Coord::new(7, -3);

    let mut graph = EdgeGraph::new();
    graph.add_edges(a, vec![b, c]).unwrap();
    graph.add_edges(b, vec![a, d]).unwrap();
    graph.add_edges(c, vec![a]).unwrap();
    graph.add_edges(d, vec![b]).unwrap();

    assert!(graph.is_passable(a));
    assert!(!graph.is_passable(Coord::new(5, 5)));

    let mut ctx = BfsContext::new();
    let mut path = Vec::new();
    let metadata = ctx
        .search_path(&graph, a, d, Default::default(), &mut path)
        .unwrap()
        .unwrap();
    assert_eq!(path, vec![a, b, d]);
    assert_eq!(metadata.cost, 2);
}
