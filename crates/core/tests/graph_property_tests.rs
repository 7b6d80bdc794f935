use proptest::prelude::*;
use proptest::strategy::Strategy;
use sssp_common::types::Edge;
use sssp_core::graph::Graph;

const NUM_VERTICES_STRATEGY: std::ops::Range<usize> = 1usize..10;

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    NUM_VERTICES_STRATEGY.prop_flat_map(|num_vertices| {
        let edge_generator = (0usize..num_vertices, 0usize..num_vertices, -10.0f64..10.0);
        let edges_generator = prop::collection::vec(edge_generator, 0..50);

        (proptest::strategy::Just(num_vertices), edges_generator)
    })
}

proptest! {
    /// Property: every edge is stored exactly once.
    #[test]
    fn all_edges_included((num_vertices, edges) in graph_strategy()) {
        let size = edges.len();
        let graph = Graph::from_edges(num_vertices, edges).unwrap();
        prop_assert_eq!(graph.num_edges(), size);
        prop_assert_eq!(graph.edges().count(), size);
    }

    /// Property: edge index ranges tile the arena in vertex order.
    #[test]
    fn edge_ranges_are_contiguous((num_vertices, edges) in graph_strategy()) {
        let graph = Graph::from_edges(num_vertices, edges).unwrap();
        let mut next = 0;
        for u in 0..graph.num_vertices() {
            let range = graph.edge_indices(u);
            prop_assert_eq!(range.start, next);
            next = range.end;
        }
        prop_assert_eq!(next, graph.num_edges());
    }

    /// Property: adj(u) is exactly the input edges leaving u, in input order.
    #[test]
    fn adjacency_preserves_insertion_order((num_vertices, edges) in graph_strategy()) {
        let graph = Graph::from_edges(num_vertices, edges.clone()).unwrap();

        for u in 0..num_vertices {
            let expected: Vec<Edge> = edges
                .iter()
                .filter(|&&(from, _, _)| from == u)
                .map(|&e| Edge::from(e))
                .collect();
            prop_assert_eq!(graph.adj(u), expected.as_slice());
        }
    }

    /// Property: vertices with no outgoing edges have an empty range.
    #[test]
    fn vertices_without_edges((num_vertices, edges) in graph_strategy()) {
        let graph = Graph::from_edges(num_vertices, edges.clone()).unwrap();

        let mut has_edges = vec![false; num_vertices];
        for &(from, _, _) in &edges {
            has_edges[from] = true;
        }

        for (u, has) in has_edges.iter().enumerate() {
            if !has {
                prop_assert!(graph.edge_indices(u).is_empty());
            }
        }
    }
}
