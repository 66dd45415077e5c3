use super::ticket::Transport;
use serde::Deserialize;
use std::collections::BTreeMap;

/// An edge leading out of a location on the map.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Edge {
    pub destination: u32,
    pub transport: Transport,
}

/// The read-only map that the game is played on.
pub trait Graph {
    /// Gets the edges leading out of the given location.
    fn edges_from(&self, location: u32) -> &[Edge];

    /// Returns true if the map has no locations.
    fn is_empty(&self) -> bool;
}

/// An undirected transport map held as an adjacency list.
#[derive(Clone, Default, Debug, Deserialize)]
#[serde(from = "GraphData")]
pub struct TransportGraph {
    adjacency: BTreeMap<u32, Vec<Edge>>,
}

#[derive(Deserialize)]
struct GraphData {
    #[serde(default)]
    nodes: Vec<u32>,
    edges: Vec<EdgeData>,
}

#[derive(Deserialize)]
struct EdgeData {
    from: u32,
    to: u32,
    transport: Transport,
}

impl TransportGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a location with no edges, if it is not already on the map.
    pub fn add_node(&mut self, location: u32) {
        self.adjacency.entry(location).or_default();
    }

    /// Connects two locations in both directions.
    pub fn add_edge(&mut self, from: u32, to: u32, transport: Transport) {
        self.adjacency.entry(from).or_default().push(Edge { destination: to, transport });
        self.adjacency.entry(to).or_default().push(Edge { destination: from, transport });
    }

    /// Builder-style variant of [TransportGraph::add_edge].
    pub fn with_edge(mut self, from: u32, to: u32, transport: Transport) -> Self {
        self.add_edge(from, to, transport);
        self
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn contains(&self, location: u32) -> bool {
        self.adjacency.contains_key(&location)
    }
}

impl Graph for TransportGraph {
    fn edges_from(&self, location: u32) -> &[Edge] {
        self.adjacency.get(&location).map(Vec::as_slice).unwrap_or(&[])
    }

    fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl From<GraphData> for TransportGraph {
    fn from(data: GraphData) -> Self {
        let mut graph = TransportGraph::new();
        for node in data.nodes {
            graph.add_node(node);
        }
        for edge in data.edges {
            graph.add_edge(edge.from, edge.to, edge.transport);
        }
        graph
    }
}
