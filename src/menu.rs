//! Menu: the letter graph derived from a crib.
//!
//! Every distinct letter of the ciphertext and crib is a node; every crib
//! position `i` is an edge between `crib[i]` and `ciphertext[i]` labelled
//! with `i`. The Bombe is wired from one connected piece of this graph,
//! the one with the most loops, because loops are what make wrong rotor
//! positions contradict themselves quickly.
//!
//! Nodes and edges live in two arenas and refer to each other by index,
//! so the traversal can mark them without shared mutable references.

use tracing::debug;

use crate::error::BombeError;
use crate::utils::converter::{i2a, ALPHABET_LEN};

/// Shortest crib the Bombe accepts.
pub const MIN_CRIB_LEN: usize = 2;

/// Longest crib the Bombe accepts. Anything longer is certain to span a
/// middle-rotor turnover.
pub const MAX_CRIB_LEN: usize = 25;

/// Index of a node in the menu arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

/// Index of an edge in the menu arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EdgeId(usize);

struct Node {
    letter: u8,
    edges: Vec<EdgeId>,
    visited: bool,
}

struct EdgeSlot {
    edge: MenuEdge,
    ends: (NodeId, NodeId),
    visited: bool,
}

/// One crib position: the plaintext and ciphertext letters it links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEdge {
    /// Offset from the start of the crib.
    pub position: usize,
    /// Crib (plaintext) letter.
    pub crib: u8,
    /// Ciphertext letter.
    pub cipher: u8,
}

impl MenuEdge {
    /// Given one end of the edge, returns the other.
    pub fn other(&self, letter: u8) -> u8 {
        if self.crib == letter {
            self.cipher
        } else {
            self.crib
        }
    }
}

/// A connected piece of the menu, as selected for wiring up the Bombe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subgraph {
    /// Edges that closed a cycle during the traversal.
    pub loops: usize,
    /// Letters in this piece.
    pub node_count: usize,
    /// Letter with the most edges; becomes the test register.
    pub most_connected: u8,
    /// Degree of `most_connected`.
    pub connections: usize,
    /// The other end of the first edge on `most_connected`.
    pub first_neighbour: u8,
    /// Every edge in this piece.
    pub edges: Vec<MenuEdge>,
}

/// Traversal summary for one connected piece.
struct Walk {
    loops: usize,
    node_count: usize,
    most_connected: NodeId,
    connections: usize,
    edges: Vec<EdgeId>,
}

/// The full crib graph.
pub struct Menu {
    nodes: Vec<Node>,
    edges: Vec<EdgeSlot>,
}

impl Menu {
    /// Builds the menu for a ciphertext and a crib aligned at its start.
    ///
    /// # Errors
    /// - [`BombeError::CribOverrunsCiphertext`] if the crib is longer than the ciphertext.
    /// - [`BombeError::CribTooShort`] / [`BombeError::CribTooLong`] outside 2..=25 letters.
    /// - [`BombeError::SelfMappedLetter`] if some position holds the same
    ///   letter in both; Enigma never encrypts a letter to itself, so the
    ///   crib must be misplaced.
    pub fn build(ciphertext: &[u8], crib: &[u8]) -> Result<Self, BombeError> {
        Self::validate(ciphertext, crib)?;

        let mut nodes: Vec<Node> = Vec::new();
        let mut by_letter: [Option<NodeId>; ALPHABET_LEN] = [None; ALPHABET_LEN];
        for &c in ciphertext.iter().chain(crib.iter()) {
            if by_letter[c as usize].is_none() {
                by_letter[c as usize] = Some(NodeId(nodes.len()));
                nodes.push(Node {
                    letter: c,
                    edges: Vec::new(),
                    visited: false,
                });
            }
        }

        let mut edges = Vec::with_capacity(crib.len());
        for (i, (&p, &c)) in crib.iter().zip(ciphertext.iter()).enumerate() {
            // Both letters were registered in the loop above.
            let (Some(a), Some(b)) = (by_letter[p as usize], by_letter[c as usize]) else {
                continue;
            };
            let id = EdgeId(edges.len());
            edges.push(EdgeSlot {
                edge: MenuEdge {
                    position: i,
                    crib: p,
                    cipher: c,
                },
                ends: (a, b),
                visited: false,
            });
            nodes[a.0].edges.push(id);
            nodes[b.0].edges.push(id);
        }

        Ok(Menu { nodes, edges })
    }

    fn validate(ciphertext: &[u8], crib: &[u8]) -> Result<(), BombeError> {
        if ciphertext.len() < crib.len() {
            return Err(BombeError::CribOverrunsCiphertext);
        }
        if crib.len() < MIN_CRIB_LEN {
            return Err(BombeError::CribTooShort);
        }
        if crib.len() > MAX_CRIB_LEN {
            return Err(BombeError::CribTooLong);
        }
        for (i, (&p, &c)) in crib.iter().zip(ciphertext.iter()).enumerate() {
            if p == c {
                return Err(BombeError::SelfMappedLetter {
                    letter: i2a(c),
                    position: i,
                });
            }
        }
        Ok(())
    }

    /// Number of distinct letters in the menu.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The `(crib, ciphertext)` letters at crib offset `position`.
    pub fn edge(&self, position: usize) -> Option<(u8, u8)> {
        self.edges
            .get(position)
            .map(|slot| (slot.edge.crib, slot.edge.cipher))
    }

    /// All edges in crib order.
    pub fn edges(&self) -> impl Iterator<Item = &MenuEdge> {
        self.edges.iter().map(|slot| &slot.edge)
    }

    /// Picks the connected piece with the most loops, ties broken by the
    /// larger node count, earlier pieces winning exact ties.
    pub fn best_subgraph(&mut self) -> Subgraph {
        for node in &mut self.nodes {
            node.visited = false;
        }
        for slot in &mut self.edges {
            slot.visited = false;
        }

        let mut walks = Vec::new();
        for i in 0..self.nodes.len() {
            if !self.nodes[i].visited {
                walks.push(self.dfs(NodeId(i)));
            }
        }
        // Stable sort keeps discovery order among equals.
        walks.sort_by(|a, b| {
            b.loops
                .cmp(&a.loops)
                .then_with(|| b.node_count.cmp(&a.node_count))
        });

        // Every crib letter is a node, so there is always at least one walk
        // and the winner has at least one edge.
        let best = walks.swap_remove(0);
        let hub = &self.nodes[best.most_connected.0];
        let first_neighbour = hub
            .edges
            .first()
            .map(|e| self.edges[e.0].edge.other(hub.letter))
            .unwrap_or(hub.letter);

        let subgraph = Subgraph {
            loops: best.loops,
            node_count: best.node_count,
            most_connected: hub.letter,
            connections: best.connections,
            first_neighbour,
            edges: best.edges.iter().map(|e| self.edges[e.0].edge).collect(),
        };
        debug!(
            loops = subgraph.loops,
            nodes = subgraph.node_count,
            edges = subgraph.edges.len(),
            hub = %i2a(subgraph.most_connected),
            "menu selected"
        );
        subgraph
    }

    /// Depth-first walk from `start`, marking everything it reaches.
    ///
    /// Recursion depth is bounded by the crib length.
    fn dfs(&mut self, start: NodeId) -> Walk {
        let mut walk = Walk {
            loops: 0,
            node_count: 1,
            most_connected: start,
            connections: self.nodes[start.0].edges.len(),
            edges: Vec::new(),
        };
        self.nodes[start.0].visited = true;

        let incident = self.nodes[start.0].edges.clone();
        for edge_id in incident {
            let slot = &mut self.edges[edge_id.0];
            if slot.visited {
                // Already walked from the other end.
                continue;
            }
            slot.visited = true;
            walk.edges.push(edge_id);
            let other = if slot.ends.0 == start {
                slot.ends.1
            } else {
                slot.ends.0
            };
            if self.nodes[other.0].visited {
                walk.loops += 1;
                continue;
            }
            let sub = self.dfs(other);
            walk.loops += sub.loops;
            walk.node_count += sub.node_count;
            walk.edges.extend(sub.edges);
            if sub.connections > walk.connections {
                walk.most_connected = sub.most_connected;
                walk.connections = sub.connections;
            }
        }
        walk
    }
}
