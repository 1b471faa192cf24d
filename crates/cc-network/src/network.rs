//! Contact network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** adjacency.  Every undirected
//! tie `{a, b}` appears twice, once in each endpoint's row.  Given a
//! `NodeId n`, its neighbours occupy the slice:
//!
//! ```text
//! adjacency[ neighbor_start[n] .. neighbor_start[n+1] ]
//! ```
//!
//! Rows are sorted by neighbour id, so iterating a node's neighbours is a
//! contiguous scan in a fixed order.  That order is the order in which an
//! acting agent evaluates its susceptible neighbours.

use rustc_hash::FxHashSet;

use cc_core::NodeId;

use crate::{NetworkError, NetworkResult};

// ── ContactNetwork ────────────────────────────────────────────────────────────

/// Undirected simple graph in CSR format.
///
/// Do not construct directly; use [`ContactNetworkBuilder`] or
/// [`ErdosRenyi`][crate::ErdosRenyi].
#[derive(Clone, Debug)]
pub struct ContactNetwork {
    /// CSR row pointer.  Length = `node_count + 1`.
    neighbor_start: Vec<u32>,

    /// Concatenated, per-row sorted neighbour lists.
    adjacency: Vec<NodeId>,

    /// Each tie once, as `(low, high)`, in insertion order.
    edges: Vec<(NodeId, NodeId)>,
}

impl ContactNetwork {
    /// A network with `node_count` isolated nodes.
    pub fn isolated(node_count: usize) -> Self {
        ContactNetworkBuilder::new(node_count).build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.neighbor_start.len() - 1
    }

    /// Number of undirected ties.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Mean degree `2E / N`.  Zero for an empty network.
    pub fn mean_degree(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        2.0 * self.edge_count() as f64 / self.node_count() as f64
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over all node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count() as u32).map(NodeId)
    }

    /// Neighbours of `node`, sorted ascending.  No allocation.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let start = self.neighbor_start[node.index()] as usize;
        let end   = self.neighbor_start[node.index() + 1] as usize;
        &self.adjacency[start..end]
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        let start = self.neighbor_start[node.index()] as usize;
        let end   = self.neighbor_start[node.index() + 1] as usize;
        end - start
    }

    /// `true` if `a` and `b` share a tie.  O(log degree).
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        if a.index() >= self.node_count() || b.index() >= self.node_count() {
            return false;
        }
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Every tie once, as `(low, high)`.  This is the edge list a renderer
    /// draws.
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }
}

// ── ContactNetworkBuilder ─────────────────────────────────────────────────────

/// Construct a [`ContactNetwork`] incrementally, then call
/// [`build`](Self::build).
///
/// Self-loops are rejected and repeated ties are ignored, so the result is
/// always a simple graph.
///
/// # Example
///
/// ```
/// use cc_core::NodeId;
/// use cc_network::ContactNetworkBuilder;
///
/// let mut b = ContactNetworkBuilder::new(3);
/// b.add_tie(NodeId(0), NodeId(1)).unwrap();
/// b.add_tie(NodeId(1), NodeId(0)).unwrap(); // same tie, ignored
/// let net = b.build();
/// assert_eq!(net.edge_count(), 1);
/// assert_eq!(net.neighbors(NodeId(1)), &[NodeId(0)]);
/// ```
pub struct ContactNetworkBuilder {
    node_count: usize,
    edges:      Vec<(NodeId, NodeId)>,
    seen:       FxHashSet<(u32, u32)>,
}

impl ContactNetworkBuilder {
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
            seen:  FxHashSet::default(),
        }
    }

    /// Pre-allocate for the expected number of ties.
    pub fn with_capacity(node_count: usize, edges: usize) -> Self {
        let mut seen = FxHashSet::default();
        seen.reserve(edges);
        Self {
            node_count,
            edges: Vec::with_capacity(edges),
            seen,
        }
    }

    pub fn node_count(&self) -> usize { self.node_count }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Add the undirected tie `{a, b}`.
    ///
    /// Returns `Ok(false)` if the tie already exists.
    pub fn add_tie(&mut self, a: NodeId, b: NodeId) -> NetworkResult<bool> {
        for node in [a, b] {
            if node.index() >= self.node_count {
                return Err(NetworkError::NodeOutOfRange { node, node_count: self.node_count });
            }
        }
        if a == b {
            return Err(NetworkError::SelfLoop(a));
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        if !self.seen.insert((lo.0, hi.0)) {
            return Ok(false);
        }
        self.edges.push((lo, hi));
        Ok(true)
    }

    /// Consume the builder and produce a [`ContactNetwork`].
    ///
    /// Time complexity: O(N + E log E).
    pub fn build(self) -> ContactNetwork {
        let node_count = self.node_count;

        let mut neighbor_start = vec![0u32; node_count + 1];
        for &(a, b) in &self.edges {
            neighbor_start[a.index() + 1] += 1;
            neighbor_start[b.index() + 1] += 1;
        }
        for i in 1..=node_count {
            neighbor_start[i] += neighbor_start[i - 1];
        }
        debug_assert_eq!(neighbor_start[node_count] as usize, 2 * self.edges.len());

        // Scatter both directions into their rows, then sort each row.
        let mut cursor: Vec<u32> = neighbor_start[..node_count].to_vec();
        let mut adjacency = vec![NodeId(0); 2 * self.edges.len()];
        for &(a, b) in &self.edges {
            adjacency[cursor[a.index()] as usize] = b;
            cursor[a.index()] += 1;
            adjacency[cursor[b.index()] as usize] = a;
            cursor[b.index()] += 1;
        }
        for n in 0..node_count {
            let start = neighbor_start[n] as usize;
            let end   = neighbor_start[n + 1] as usize;
            adjacency[start..end].sort_unstable();
        }

        ContactNetwork {
            neighbor_start,
            adjacency,
            edges: self.edges,
        }
    }
}
