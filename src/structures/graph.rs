use std::collections::HashMap;

use thiserror::Error;

use crate::structures::{Edge, NodeData, NodeID};

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0} not found")]
    NodeNotFoundError(NodeID),
}

/// Encoded street network. Edges are stored under their origin node.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<NodeData>,
    edges: Vec<Vec<Edge>>,
    id_mapper: HashMap<String, NodeID>,
}

impl Graph {
    pub fn new() -> Graph {
        Graph::default()
    }

    pub fn add_node(&mut self, node: NodeData) -> NodeID {
        let id = NodeID(self.nodes.len());

        self.id_mapper.insert(node.eid.clone(), id);
        self.nodes.push(node);
        self.edges.push(Vec::new());

        id
    }

    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        match self.edges.get_mut(edge.origin.0) {
            Some(outgoing) => {
                outgoing.push(edge);
                Ok(())
            }
            None => Err(GraphError::NodeNotFoundError(edge.origin)),
        }
    }

    pub fn get_id(&self, eid: &str) -> Option<&NodeID> {
        self.id_mapper.get(eid)
    }

    pub fn get_node(&self, id: NodeID) -> Option<&NodeData> {
        self.nodes.get(id.0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    pub fn edges_from(&self, id: NodeID) -> &[Edge] {
        self.edges.get(id.0).map_or(&[], Vec::as_slice)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().flatten()
    }
}
