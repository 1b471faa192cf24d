//! Erdős–Rényi G(n, p) random graphs.
//!
//! Two generators share one distribution:
//!
//! - [`ErdosRenyi::generate`] flips one coin per unordered pair, O(n²).
//!   This is the default and the one the simulation uses.
//! - [`ErdosRenyi::generate_sparse`] skips over absent pairs with geometric
//!   jumps (Batagelj & Brandes), O(n + E).  Use it for large, sparse
//!   populations.  It consumes the random stream differently, so the two
//!   generators produce different graphs from the same seed.

use log::debug;

use cc_core::{NodeId, SimRng};

use crate::{ContactNetwork, ContactNetworkBuilder};

/// Parameters of a G(n, p) graph.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ErdosRenyi {
    node_count: usize,
    p:          f64,
}

impl ErdosRenyi {
    /// G(n, p) with an explicit edge probability, clamped to `[0, 1]`
    /// (NaN becomes 0).
    pub fn new(node_count: usize, p: f64) -> Self {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        Self { node_count, p }
    }

    /// G(n, p) with `p = avg_degree / node_count`.  An empty population gets
    /// `p = 0`.
    pub fn with_mean_degree(node_count: usize, avg_degree: f64) -> Self {
        if node_count == 0 {
            return Self::new(0, 0.0);
        }
        Self::new(node_count, avg_degree / node_count as f64)
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_probability(&self) -> f64 {
        self.p
    }

    /// Expected number of ties, `p · n(n-1)/2`.
    pub fn expected_edges(&self) -> f64 {
        let n = self.node_count as f64;
        self.p * n * (n - 1.0) / 2.0
    }

    /// One Bernoulli(p) trial per unordered pair `(i, j)`, `i < j`, in
    /// lexicographic order.
    pub fn generate(&self, rng: &mut SimRng) -> ContactNetwork {
        let n = self.node_count;
        let mut b = ContactNetworkBuilder::with_capacity(n, self.expected_edges() as usize);

        if self.p > 0.0 {
            for i in 0..n as u32 {
                for j in (i + 1)..n as u32 {
                    if rng.gen_bool(self.p) {
                        // Pairs are distinct and in range by construction.
                        let _ = b.add_tie(NodeId(i), NodeId(j));
                    }
                }
            }
        }

        let net = b.build();
        debug!(
            "G(n={}, p={:.5}): {} ties, mean degree {:.3}",
            n, self.p, net.edge_count(), net.mean_degree()
        );
        net
    }

    /// Same distribution as [`generate`](Self::generate), drawing one
    /// geometric skip per present tie instead of one coin per pair.
    pub fn generate_sparse(&self, rng: &mut SimRng) -> ContactNetwork {
        let n = self.node_count;
        if self.p >= 1.0 {
            return self.generate(rng);
        }
        let mut b = ContactNetworkBuilder::with_capacity(n, self.expected_edges() as usize);

        if self.p > 0.0 && n > 1 {
            let log_q = (1.0 - self.p).ln();
            let n = n as i64;
            let mut v: i64 = 1;
            let mut w: i64 = -1;
            while v < n {
                let u: f64 = rng.random();
                let skip = ((1.0 - u).ln() / log_q).floor() as i64;
                w = w.saturating_add(1).saturating_add(skip);
                while w >= v && v < n {
                    w -= v;
                    v += 1;
                }
                if v < n {
                    let _ = b.add_tie(NodeId(v as u32), NodeId(w as u32));
                }
            }
        }

        let net = b.build();
        debug!(
            "sparse G(n={}, p={:.5}): {} ties, mean degree {:.3}",
            n, self.p, net.edge_count(), net.mean_degree()
        );
        net
    }
}
