//! Room connectivity graph
//!
//! Candidate edges join every pair of rooms, weighted by the distance between
//! their centers. This full distance-sorted set stands in for a Delaunay
//! triangulation. A minimum spanning tree (Prim) keeps every room reachable,
//! then a share of the leftover edges is added back to create loops.

use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::room::{Room, RoomId};

/// Candidate connection between two rooms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: RoomId,
    pub b: RoomId,
    /// Euclidean distance between the room centers
    pub weight: f64,
}

/// Undirected adjacency lists keyed by room id, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityGraph {
    adjacency: BTreeMap<RoomId, Vec<RoomId>>,
}

impl ConnectivityGraph {
    /// Graph with one isolated node per room
    pub fn with_rooms(rooms: &[Room]) -> Self {
        Self {
            adjacency: rooms.iter().map(|r| (r.id, Vec::new())).collect(),
        }
    }

    /// Add an isolated node (no-op if present)
    pub fn add_node(&mut self, id: RoomId) {
        self.adjacency.entry(id).or_default();
    }

    /// Connect two rooms in both directions; duplicate edges and self loops
    /// are ignored
    pub fn add_edge(&mut self, a: RoomId, b: RoomId) {
        if a == b || self.contains_edge(a, b) {
            return;
        }
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
    }

    /// Check if the two rooms are directly connected
    pub fn contains_edge(&self, a: RoomId, b: RoomId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Directly connected rooms, in insertion order
    pub fn neighbors(&self, id: RoomId) -> &[RoomId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Node ids in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Each undirected edge once as `(low, high)`, ordered by the low id and
    /// then by insertion order
    pub fn edges(&self) -> Vec<(RoomId, RoomId)> {
        self.adjacency
            .iter()
            .flat_map(|(&a, list)| list.iter().filter(move |&&b| a < b).map(move |&b| (a, b)))
            .collect()
    }

    /// Hop distances from `start` to every reachable node
    pub fn bfs_distances(&self, start: RoomId) -> BTreeMap<RoomId, u32> {
        let mut dist = BTreeMap::new();
        if !self.adjacency.contains_key(&start) {
            return dist;
        }

        let mut queue = VecDeque::new();
        dist.insert(start, 0);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let d = dist[&current];
            for &next in self.neighbors(current) {
                if !dist.contains_key(&next) {
                    dist.insert(next, d + 1);
                    queue.push_back(next);
                }
            }
        }
        dist
    }

    /// Check if every node is reachable from every other
    pub fn is_connected(&self) -> bool {
        match self.adjacency.keys().next() {
            None => true,
            Some(&first) => self.bfs_distances(first).len() == self.adjacency.len(),
        }
    }
}

/// Edge counts from one graph build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    /// Pairwise candidates considered
    pub candidate_edges: usize,
    /// Edges chosen by the spanning tree
    pub mst_edges: usize,
    /// Extra edges added for loops
    pub loop_edges: usize,
}

/// Every room pair `(i < j)` in placement order, stably sorted by weight
pub fn candidate_edges(rooms: &[Room]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(rooms.len() * rooms.len().saturating_sub(1) / 2);
    for (i, a) in rooms.iter().enumerate() {
        for b in &rooms[i + 1..] {
            edges.push(Edge {
                a: a.id,
                b: b.id,
                weight: a.distance_to(b),
            });
        }
    }
    edges.sort_by(|x, y| x.weight.total_cmp(&y.weight));
    edges
}

/// Build the spanning tree plus `loop_percentage`% of the leftover edges
pub fn build_graph(rooms: &[Room], loop_percentage: u32) -> (ConnectivityGraph, GraphStats) {
    let mut graph = ConnectivityGraph::with_rooms(rooms);
    let edges = candidate_edges(rooms);
    let mut stats = GraphStats {
        candidate_edges: edges.len(),
        ..GraphStats::default()
    };

    let Some(first) = rooms.first() else {
        return (graph, stats);
    };

    let in_tree = minimum_spanning_tree(&edges, first.id, rooms.len());
    for (edge, _) in edges.iter().zip(&in_tree).filter(|(_, used)| **used) {
        graph.add_edge(edge.a, edge.b);
        stats.mst_edges += 1;
    }

    let remaining: Vec<&Edge> = edges
        .iter()
        .zip(&in_tree)
        .filter(|(_, used)| !**used)
        .map(|(edge, _)| edge)
        .collect();
    let loop_count = remaining.len() * loop_percentage as usize / 100;
    for edge in remaining.into_iter().take(loop_count) {
        graph.add_edge(edge.a, edge.b);
        stats.loop_edges += 1;
    }

    (graph, stats)
}

/// Prim's algorithm over a weight-sorted edge list.
///
/// Returns a flag per edge marking those in the tree. Stops early, leaving
/// rooms unvisited, when no edge reaches past the visited set.
fn minimum_spanning_tree(sorted: &[Edge], start: RoomId, room_count: usize) -> Vec<bool> {
    let mut in_tree = vec![false; sorted.len()];
    let mut visited = hashbrown::HashSet::with_capacity(room_count);
    visited.insert(start);

    while visited.len() < room_count {
        // Lowest weight edge with exactly one visited end
        let next = sorted
            .iter()
            .enumerate()
            .find(|(i, e)| !in_tree[*i] && (visited.contains(&e.a) != visited.contains(&e.b)));

        let Some((idx, edge)) = next else {
            warn!(
                visited = visited.len(),
                rooms = room_count,
                "spanning tree ran out of edges; graph left disconnected"
            );
            break;
        };

        in_tree[idx] = true;
        visited.insert(edge.a);
        visited.insert(edge.b);
    }

    in_tree
}
