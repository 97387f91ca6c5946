use halo_graph::algorithm::{Algorithm, Observable, RelaxationConfig, RunState};
use halo_graph::graph::{AdjacencyGraph, Edge, Reversed};
use halo_graph::observers::{DistanceRecorder, PredecessorRecorder};
use halo_graph::shortest_path::{
    AStarShortestPath, BellmanFordShortestPath, CriticalDistance, DagShortestPath,
    DijkstraShortestPath, ShortestDistance,
};
use halo_graph::GraphError;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef as _;
use proptest::prelude::*;

type Graph = AdjacencyGraph<usize, f64>;
type Weight = fn(&Edge<usize, f64>) -> f64;

fn weight(edge: &Edge<usize, f64>) -> f64 {
    edge.data
}

fn build(n: usize, edges: &[(usize, usize, i32)]) -> Graph {
    let mut g = AdjacencyGraph::new();
    for v in 0..n {
        g.add_vertex(v);
    }
    for &(s, t, w) in edges {
        g.add_edge(s, t, f64::from(w));
    }
    g
}

fn petgraph_of(n: usize, edges: &[(usize, usize, i32)]) -> (DiGraph<(), f64>, Vec<NodeIndex>) {
    let mut pg = DiGraph::new();
    let nodes: Vec<_> = (0..n).map(|_| pg.add_node(())).collect();
    for &(s, t, w) in edges {
        pg.add_edge(nodes[s], nodes[t], f64::from(w));
    }
    (pg, nodes)
}

fn weighted_graph(
    max_n: usize,
    weights: std::ops::Range<i32>,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, i32)>)> {
    (1..max_n).prop_flat_map(move |n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, weights.clone()), 0..n * 3),
        )
    })
}

fn weighted_dag(max_n: usize, weights: std::ops::Range<i32>) -> impl Strategy<Value = (usize, Vec<(usize, usize, i32)>)> {
    weighted_graph(max_n, weights).prop_map(|(n, edges)| {
        let forward = edges
            .into_iter()
            .filter(|(s, t, _)| s != t)
            .map(|(s, t, w)| (s.min(t), s.max(t), w))
            .collect();
        (n, forward)
    })
}

/// Longest path from `root` by dynamic programming over vertex order; every
/// edge of a generated DAG goes from a smaller to a larger index.
fn longest_paths(n: usize, edges: &[(usize, usize, i32)], root: usize) -> Vec<Option<i64>> {
    let mut best = vec![None; n];
    best[root] = Some(0i64);
    for u in 0..n {
        let Some(du) = best[u] else { continue };
        for &(s, t, w) in edges {
            if s == u {
                let candidate = du + i64::from(w);
                if best[t].map_or(true, |bt| candidate > bt) {
                    best[t] = Some(candidate);
                }
            }
        }
    }
    best
}

#[test]
fn five_vertex_scenario() {
    let g: AdjacencyGraph<&'static str, f64> = AdjacencyGraph::from_edges([
        ("A", "B", 4.0),
        ("A", "D", 1.0),
        ("B", "C", 2.0),
        ("D", "B", 1.0),
        ("D", "E", 2.0),
        ("C", "E", 1.0),
    ]);
    let parents: PredecessorRecorder<&'static str, Edge<&'static str, f64>> = PredecessorRecorder::new();
    let mut dijkstra: DijkstraShortestPath<'_, AdjacencyGraph<&'static str, f64>, f64, _> =
        DijkstraShortestPath::new(|e: &Edge<&'static str, f64>| e.data);
    dijkstra.set_root("A");
    dijkstra.observe(&parents, |d| d.compute(&g)).unwrap();

    for (v, d) in [("A", 0.0), ("B", 2.0), ("D", 1.0), ("C", 4.0), ("E", 3.0)] {
        assert_eq!(dijkstra.distances().get(&v), d, "{v}");
    }
    let parent = |v| parents.try_get(&v).map(|e| e.source);
    assert_eq!(parent("A"), None);
    assert_eq!(parent("B"), Some("D"));
    assert_eq!(parent("C"), Some("B"));
    assert_eq!(parent("D"), Some("A"));
    assert_eq!(parent("E"), Some("D"));
    assert_eq!(parents.vertices_to(&"C"), vec!["A", "D", "B", "C"]);
}

#[test]
fn cyclic_scenario_dag_fails_bellman_ford_succeeds() {
    let edges = [(1, 2, 1), (2, 3, 1), (1, 4, 1), (3, 1, 1)];
    let g = build(5, &edges);

    let mut dag: DagShortestPath<'_, Graph, f64, Weight> = DagShortestPath::new(weight);
    dag.set_root(1);
    assert!(matches!(dag.compute(&g), Err(GraphError::CyclicGraph(_))));

    let mut bf: BellmanFordShortestPath<'_, Graph, f64, Weight> = BellmanFordShortestPath::new(weight);
    bf.set_root(1);
    bf.compute(&g).unwrap();
    assert!(!bf.found_negative_cycle());
    assert_eq!(bf.state(), RunState::Finished);
    assert_eq!(bf.distances().get(&3), 2.0);
    assert_eq!(bf.distances().try_get(&0), None);
}

#[test]
fn reversed_view_gives_distances_to_a_target() {
    let g = build(4, &[(0, 1, 2), (1, 3, 2), (2, 3, 1), (0, 2, 5)]);
    let view = Reversed::new(&g);
    let mut dijkstra: DijkstraShortestPath<'_, Reversed<'_, Graph>, f64, _> =
        DijkstraShortestPath::new(|e: &halo_graph::graph::ReversedEdge<Edge<usize, f64>>| e.inner().data);
    dijkstra.set_root(3);
    dijkstra.compute(&view).unwrap();

    assert_eq!(dijkstra.distances().get(&0), 4.0);
    assert_eq!(dijkstra.distances().get(&2), 1.0);
}

#[test]
fn accumulated_bellman_ford_is_a_multi_source_minimum() {
    let g = build(5, &[(0, 2, 4), (1, 2, 1), (2, 3, 1), (3, 4, 1)]);
    let mut bf: BellmanFordShortestPath<'_, Graph, f64, Weight> =
        BellmanFordShortestPath::with_config(weight, RelaxationConfig::accumulating());
    for root in [0, 1] {
        bf.set_root(root);
        bf.compute(&g).unwrap();
    }
    assert_eq!(bf.distances().get(&4), 3.0);
    assert_eq!(bf.distances().get(&0), 0.0);
    assert_eq!(bf.distances().get(&1), 0.0);
}

proptest! {
    #[test]
    fn dijkstra_matches_petgraph((n, edges) in weighted_graph(30, 0..20)) {
        let g = build(n, &edges);
        let mut dijkstra: DijkstraShortestPath<'_, Graph, f64, Weight> = DijkstraShortestPath::new(weight);
        dijkstra.set_root(0);
        dijkstra.compute(&g).unwrap();

        let (pg, nodes) = petgraph_of(n, &edges);
        let expected = petgraph::algo::dijkstra(&pg, nodes[0], None, |e| *e.weight());
        for v in 0..n {
            prop_assert_eq!(dijkstra.distances().try_get(&v), expected.get(&nodes[v]).copied(), "vertex {}", v);
        }
    }

    #[test]
    fn bellman_ford_matches_petgraph((n, edges) in weighted_graph(20, -4..15)) {
        let g = build(n, &edges);
        let mut bf: BellmanFordShortestPath<'_, Graph, f64, Weight> = BellmanFordShortestPath::new(weight);
        bf.set_root(0);
        bf.compute(&g).unwrap();

        let (pg, nodes) = petgraph_of(n, &edges);
        match petgraph::algo::bellman_ford(&pg, nodes[0]) {
            Ok(paths) => {
                prop_assert!(!bf.found_negative_cycle());
                for v in 0..n {
                    let expected = paths.distances[v];
                    let ours = bf.distances().try_get(&v).unwrap_or(f64::INFINITY);
                    prop_assert_eq!(ours, expected, "vertex {}", v);
                }
            }
            Err(_) => prop_assert!(bf.found_negative_cycle()),
        }
    }

    #[test]
    fn relaxation_algorithms_agree_on_dags((n, edges) in weighted_dag(30, 0..20)) {
        let g = build(n, &edges);
        let mut dijkstra: DijkstraShortestPath<'_, Graph, f64, Weight> = DijkstraShortestPath::new(weight);
        let mut bf: BellmanFordShortestPath<'_, Graph, f64, Weight> = BellmanFordShortestPath::new(weight);
        let mut dag: DagShortestPath<'_, Graph, f64, Weight> = DagShortestPath::new(weight);
        dijkstra.set_root(0);
        bf.set_root(0);
        dag.set_root(0);
        dijkstra.compute(&g).unwrap();
        bf.compute(&g).unwrap();
        dag.compute(&g).unwrap();

        for v in 0..n {
            let d = dijkstra.distances().try_get(&v);
            prop_assert_eq!(d, bf.distances().try_get(&v));
            prop_assert_eq!(d, dag.distances().try_get(&v));
            prop_assert_eq!(dijkstra.colors().is_unvisited(&v), dag.colors().is_unvisited(&v));
        }
    }

    #[test]
    fn critical_relaxer_finds_longest_paths((n, edges) in weighted_dag(25, -5..20)) {
        let g = build(n, &edges);
        let mut dag: DagShortestPath<'_, Graph, f64, Weight, CriticalDistance> = DagShortestPath::new(weight);
        let mut bf: BellmanFordShortestPath<'_, Graph, f64, Weight, CriticalDistance> =
            BellmanFordShortestPath::new(weight);
        dag.set_root(0);
        bf.set_root(0);
        dag.compute(&g).unwrap();
        bf.compute(&g).unwrap();

        let expected = longest_paths(n, &edges, 0);
        prop_assert!(!bf.found_negative_cycle());
        for v in 0..n {
            let want = expected[v].map(|d| d as f64);
            prop_assert_eq!(dag.distances().try_get(&v), want, "vertex {}", v);
            prop_assert_eq!(bf.distances().try_get(&v), want, "vertex {}", v);
        }
    }

    #[test]
    fn a_star_with_zero_heuristic_is_dijkstra((n, edges) in weighted_graph(25, 0..20), target in 0usize..25) {
        let g = build(n, &edges);
        let target = target % n;
        let mut dijkstra: DijkstraShortestPath<'_, Graph, f64, Weight> = DijkstraShortestPath::new(weight);
        let mut astar: AStarShortestPath<'_, Graph, f64, Weight, _, ShortestDistance> =
            AStarShortestPath::new(weight, |_: &usize| 0.0);
        dijkstra.set_root(0);
        astar.set_root(0);
        astar.set_target(target);
        dijkstra.compute(&g).unwrap();
        astar.compute(&g).unwrap();

        prop_assert_eq!(astar.distances().try_get(&target), dijkstra.distances().try_get(&target));
    }

    #[test]
    fn recorded_distances_match_the_algorithm((n, edges) in weighted_graph(25, 0..20)) {
        let g = build(n, &edges);
        let recorder: DistanceRecorder<usize, Edge<usize, f64>, f64, Weight> = DistanceRecorder::new(weight);
        let mut dijkstra: DijkstraShortestPath<'_, Graph, f64, Weight> = DijkstraShortestPath::new(weight);
        dijkstra.set_root(0);
        dijkstra.observe(&recorder, |d| d.compute(&g)).unwrap();

        for v in 0..n {
            prop_assert_eq!(recorder.try_get(&v), dijkstra.distances().try_get(&v));
        }
    }
}
