//! Backing storage for every node of a network.
//!
//! Nodes are appended and never removed; relationships between them are
//! plain `NodeId` indices, so the parent/child cycles of the graph need no
//! shared ownership. Dropping the arena frees all the nodes at once.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::node::{Node, Variable};

const DEFAULT_CAPACITY: usize = 64;

/// Stable handle to a node stored in a network.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn from_index(index: usize) -> NodeId {
        NodeId(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub(crate) struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    pub fn new() -> Arena {
        Arena {
            nodes: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `None` for ids handed out by another, larger arena.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn variable(&self, id: NodeId) -> Option<&Variable> {
        self.get(id).and_then(Node::as_variable)
    }

    pub fn variable_mut(&mut self, id: NodeId) -> Option<&mut Variable> {
        self.get_mut(id).and_then(Node::as_variable_mut)
    }
}

impl Index<NodeId> for Arena {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for Arena {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}
