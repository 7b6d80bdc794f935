use sssp_common::types::Cycle;

/// Final output of one solver run over a `(graph, source)` pair.
///
/// `edge_to[v]` is the arena index (see `Graph::edge`) of the edge that last
/// improved `v`. When `negative_cycle` is set the distance and predecessor
/// arrays are not meaningful for anything the cycle can reach.
#[derive(Debug, Clone)]
pub struct Relaxation {
    pub(crate) dist: Vec<f64>,
    pub(crate) edge_to: Vec<Option<usize>>,
    pub(crate) negative_cycle: Option<Cycle>,
    pub(crate) phases: usize,
    pub(crate) relaxations: usize,
}

impl Relaxation {
    pub fn distances(&self) -> &[f64] {
        &self.dist
    }

    pub fn edge_to(&self) -> &[Option<usize>] {
        &self.edge_to
    }

    pub fn negative_cycle(&self) -> Option<&Cycle> {
        self.negative_cycle.as_ref()
    }

    /// Phases (Moore) or full edge passes (Bellman-Ford) that were started.
    pub fn phases(&self) -> usize {
        self.phases
    }

    /// Number of strict distance improvements performed.
    pub fn relaxations(&self) -> usize {
        self.relaxations
    }
}
