use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::UnGraph;
use smallvec::SmallVec;

use crate::cells::{Direction, GridCoordinate};
use crate::grid::MazeGrid;
use crate::units::{EdgesCount, NodesCount};
use crate::utils;
use crate::utils::FnvHashMap;

/// Flood fill step counts from a start cell to every carved cell reachable from it.
#[derive(Debug, Clone)]
pub struct Distances {
    start_coordinate: GridCoordinate,
    distances: FnvHashMap<GridCoordinate, u32>,
    max_distance: u32,
}

impl Distances {
    /// Returns None if the start is outside the grid or is a wall.
    pub fn new(grid: &MazeGrid, start_coordinate: GridCoordinate) -> Option<Distances> {

        if !grid.is_in_bounds(start_coordinate) || !grid.is_carved(start_coordinate) {
            return None;
        }

        let mut max = 0;
        let mut distances = utils::fnv_hashmap(grid.carved_count());
        distances.insert(start_coordinate, 0);

        // Every step costs the same, so the first time a cell is reached is the shortest
        // distance to it and the distances map doubles as the visited set.
        let mut frontier = vec![start_coordinate];
        while !frontier.is_empty() {

            let mut new_frontier = vec![];
            for cell_coord in &frontier {

                let distance_to_cell = distances[cell_coord];
                if distance_to_cell > max {
                    max = distance_to_cell;
                }

                for link_coordinate in grid.links(*cell_coord) {
                    if !distances.contains_key(&link_coordinate) {
                        distances.insert(link_coordinate, distance_to_cell + 1);
                        new_frontier.push(link_coordinate);
                    }
                }
            }
            frontier = new_frontier;
        }

        Some(Distances {
            start_coordinate,
            distances,
            max_distance: max,
        })
    }

    #[inline(always)]
    pub fn start(&self) -> GridCoordinate {
        self.start_coordinate
    }

    #[inline(always)]
    pub fn max(&self) -> u32 {
        self.max_distance
    }

    #[inline(always)]
    pub fn distance_from_start_to(&self, coord: GridCoordinate) -> Option<u32> {
        self.distances.get(&coord).cloned()
    }

    #[inline]
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    pub fn furthest_points_on_grid(&self) -> SmallVec<[GridCoordinate; 8]> {
        let furthest_distance = self.max();
        let mut furthest = self.distances
            .iter()
            .filter(|&(_, distance)| *distance == furthest_distance)
            .map(|(coord, _)| *coord)
            .collect::<SmallVec<[GridCoordinate; 8]>>();
        furthest.sort();
        furthest
    }
}

/// Walk back from `end_point` to the start of `distances_from_start`, always stepping to the linked
/// neighbour closest to the start. Returns the path ordered start first, or None if `end_point`
/// cannot be reached.
pub fn shortest_path(grid: &MazeGrid,
                     distances_from_start: &Distances,
                     end_point: GridCoordinate)
                     -> Option<Vec<GridCoordinate>> {

    let mut current_distance = distances_from_start.distance_from_start_to(end_point)?;
    let mut path = vec![end_point];
    let mut current_coord = end_point;

    while current_distance > 0 {

        let closer = grid.links(current_coord)
            .into_iter()
            .filter_map(|coord| {
                distances_from_start.distance_from_start_to(coord).map(|d| (coord, d))
            })
            .min_by_key(|&(_, d)| d);

        match closer {
            Some((closer_coord, closer_distance)) if closer_distance < current_distance => {
                current_coord = closer_coord;
                current_distance = closer_distance;
                path.push(current_coord);
            }
            // Not getting any closer, the distances were computed on some other grid.
            _ => return None,
        }
    }

    path.reverse();
    Some(path)
}

/// The route between two cells, if both are open and connected.
pub fn path_between(grid: &MazeGrid,
                    from: GridCoordinate,
                    to: GridCoordinate)
                    -> Option<Vec<GridCoordinate>> {
    Distances::new(grid, from).and_then(|distances| shortest_path(grid, &distances, to))
}

/// The carved cells of a grid as graph nodes with an edge between each orthogonally adjacent pair.
pub fn passage_graph(grid: &MazeGrid) -> UnGraph<GridCoordinate, ()> {
    let (NodesCount(nodes_hint), EdgesCount(edges_hint)) = grid.dimensions().graph_size();
    let mut graph = UnGraph::with_capacity(nodes_hint, edges_hint);
    let mut node_indices = utils::fnv_hashmap(nodes_hint);

    for coord in grid.iter_carved() {
        node_indices.insert(coord, graph.add_node(coord));
    }

    // Looking only right and down adds each edge once.
    for coord in grid.iter_carved() {
        for &dir in &[Direction::Right, Direction::Down] {
            let neighbour_index = coord.offset(dir).and_then(|n| node_indices.get(&n));
            if let (Some(&a), Some(&b)) = (node_indices.get(&coord), neighbour_index) {
                let _ = graph.add_edge(a, b, ());
            }
        }
    }

    graph
}

/// Works only on the carved cells: a perfect maze is one connected tree of passages.
pub fn is_perfect_maze(grid: &MazeGrid) -> bool {
    let graph = passage_graph(grid);
    graph.node_count() > 0 && connected_components(&graph) == 1 && !is_cyclic_undirected(&graph)
}
