use halo_graph::algorithm::{Algorithm, Color, Observable, TraversalConfig};
use halo_graph::graph::{AdjacencyGraph, Edge, EdgeRef, Undirected, VertexListGraph};
use halo_graph::observers::{DistanceRecorder, PredecessorRecorder, TimeStampRecorder};
use halo_graph::traversal::{topological_order, BreadthFirstSearch, DepthFirstSearch};
use halo_graph::GraphError;
use proptest::prelude::*;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

type Graph = AdjacencyGraph<usize>;

fn build(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut g = AdjacencyGraph::new();
    for v in 0..n {
        g.add_vertex(v);
    }
    for &(s, t) in edges {
        g.add_edge(s, t, ());
    }
    g
}

fn graph_strategy(max_n: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..max_n).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..n * 3)))
}

fn dag_strategy(max_n: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    graph_strategy(max_n).prop_map(|(n, edges)| {
        let forward = edges
            .into_iter()
            .filter(|(s, t)| s != t)
            .map(|(s, t)| (s.min(t), s.max(t)))
            .collect();
        (n, forward)
    })
}

fn reachable_with_petgraph(n: usize, edges: &[(usize, usize)], root: usize) -> HashSet<usize> {
    let mut pg = petgraph::graph::DiGraph::<(), ()>::new();
    let nodes: Vec<_> = (0..n).map(|_| pg.add_node(())).collect();
    for &(s, t) in edges {
        pg.add_edge(nodes[s], nodes[t], ());
    }
    let mut dfs = petgraph::visit::Dfs::new(&pg, nodes[root]);
    let mut seen = HashSet::new();
    while let Some(node) = dfs.next(&pg) {
        seen.insert(node.index());
    }
    seen
}

proptest! {
    #[test]
    fn dfs_intervals_nest_and_cover_every_vertex((n, edges) in graph_strategy(40)) {
        let g = build(n, &edges);
        let stamps = TimeStampRecorder::new();
        let mut dfs: DepthFirstSearch<'_, Graph> =
            DepthFirstSearch::with_config(TraversalConfig::forest());
        dfs.observe(&stamps, |dfs| dfs.compute(&g)).unwrap();

        prop_assert_eq!(dfs.colors().count(Color::Finished), n);
        prop_assert_eq!(stamps.ticks(), 2 * n);

        let intervals = stamps.intervals();
        for (a, a_start, a_end) in &intervals {
            prop_assert!(a_start < a_end);
            for (b, b_start, b_end) in &intervals {
                if a == b {
                    continue;
                }
                let disjoint = a_end < b_start || b_end < a_start;
                let nested = (a_start < b_start && b_end < a_end) || (b_start < a_start && a_end < b_end);
                prop_assert!(disjoint || nested, "{:?} and {:?} overlap", (a, a_start, a_end), (b, b_start, b_end));
            }
        }
    }

    #[test]
    fn dfs_edge_classes_partition_examined_edges((n, edges) in graph_strategy(30)) {
        let g = build(n, &edges);
        let counts = Rc::new(RefCell::new([0usize; 4]));
        let sink = Rc::clone(&counts);
        let mut dfs: DepthFirstSearch<'_, Graph> =
            DepthFirstSearch::with_config(TraversalConfig::forest());
        dfs.subscribe(move |token, ev| {
            let c = Rc::clone(&sink);
            ev.examine_edge.connect(token, move |_, _| c.borrow_mut()[0] += 1);
            let c = Rc::clone(&sink);
            ev.tree_edge.connect(token, move |_, _| c.borrow_mut()[1] += 1);
            let c = Rc::clone(&sink);
            ev.back_edge.connect(token, move |e, colors| {
                assert_eq!(colors.get(e.target()), Color::Discovered);
                c.borrow_mut()[2] += 1;
            });
            ev.forward_or_cross_edge.connect(token, move |e, colors| {
                assert_eq!(colors.get(e.target()), Color::Finished);
                sink.borrow_mut()[3] += 1;
            });
        });
        dfs.compute(&g).unwrap();

        let [examined, tree, back, cross] = *counts.borrow();
        prop_assert_eq!(examined, edges.len());
        prop_assert_eq!(examined, tree + back + cross);
        prop_assert!(tree < n);
    }

    #[test]
    fn dfs_reaches_what_petgraph_reaches((n, edges) in graph_strategy(30)) {
        let g = build(n, &edges);
        let mut dfs: DepthFirstSearch<'_, Graph> = DepthFirstSearch::new();
        dfs.set_root(0);
        dfs.compute(&g).unwrap();

        let ours: HashSet<usize> = g.vertices().filter(|v| !dfs.colors().is_unvisited(v)).collect();
        prop_assert_eq!(ours, reachable_with_petgraph(n, &edges, 0));
    }

    #[test]
    fn bfs_hops_are_level_distances((n, edges) in graph_strategy(30)) {
        let g = build(n, &edges);
        let view = Undirected::new(&g);
        let hops: DistanceRecorder<usize, _, usize, _> = DistanceRecorder::hops();
        let mut bfs: BreadthFirstSearch<'_, Undirected<'_, Graph>> = BreadthFirstSearch::new();
        bfs.set_root(0);
        bfs.observe(&hops, |bfs| bfs.compute(&view)).unwrap();

        for &(s, t) in &edges {
            match (hops.try_get(&s), hops.try_get(&t)) {
                (Some(a), Some(b)) => prop_assert!(a.abs_diff(b) <= 1, "{s}:{a} {t}:{b}"),
                (None, None) => {}
                _ => prop_assert!(false, "edge {s}-{t} crosses the reached set"),
            }
        }
    }

    #[test]
    fn bfs_tree_edges_add_exactly_one_hop((n, edges) in graph_strategy(30)) {
        let g = build(n, &edges);
        let hops: DistanceRecorder<usize, _, usize, _> = DistanceRecorder::hops();
        let parents: PredecessorRecorder<usize, Edge<usize>> = PredecessorRecorder::new();
        let mut bfs: BreadthFirstSearch<'_, Graph> = BreadthFirstSearch::new();
        bfs.attach(&hops);
        bfs.attach(&parents);
        bfs.set_root(0);
        bfs.compute(&g).unwrap();

        for v in 0..n {
            if let Some(edge) = parents.try_get(&v) {
                prop_assert_eq!(hops.get(edge.target()), hops.get(edge.source()) + 1);
                prop_assert_eq!(parents.path_to(&v).len(), hops.get(&v));
            }
        }
    }

    #[test]
    fn topological_order_respects_every_edge((n, edges) in dag_strategy(40)) {
        let g = build(n, &edges);
        let order = topological_order(&g).unwrap();
        prop_assert_eq!(order.len(), n);

        let position: HashMap<usize, usize> = order.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        for &(s, t) in &edges {
            prop_assert!(position[&s] < position[&t]);
        }
    }

    #[test]
    fn max_depth_bounds_every_discovery((n, edges) in graph_strategy(30), depth in 0usize..4) {
        let g = build(n, &edges);
        let hops: DistanceRecorder<usize, _, usize, _> = DistanceRecorder::hops();
        let mut dfs: DepthFirstSearch<'_, Graph> =
            DepthFirstSearch::with_config(TraversalConfig::with_max_depth(depth));
        dfs.set_root(0);
        dfs.observe(&hops, |dfs| dfs.compute(&g)).unwrap();

        for v in 0..n {
            if let Some(h) = hops.try_get(&v) {
                prop_assert!(h <= depth);
                prop_assert_eq!(dfs.colors().get(&v), Color::Finished);
            }
        }
    }
}

#[test]
fn cyclic_graph_has_no_topological_order() {
    let g = build(5, &[(1, 2), (2, 3), (1, 4), (3, 1)]);
    assert!(matches!(topological_order(&g), Err(GraphError::CyclicGraph(_))));
}

#[test]
fn cancellation_from_another_handle_stops_bfs() {
    let g = build(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
    let mut bfs: BreadthFirstSearch<'_, Graph> = BreadthFirstSearch::new();
    let token = bfs.cancellation_token();
    let finished = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&finished);
    bfs.subscribe(move |t, ev| {
        ev.finish_vertex.connect(t, move |v, _| {
            sink.borrow_mut().push(*v);
            if *v == 2 {
                token.cancel();
            }
        });
    });
    bfs.set_root(0);
    bfs.compute(&g).unwrap();

    assert_eq!(bfs.state(), halo_graph::RunState::Aborted);
    assert_eq!(*finished.borrow(), vec![0, 1, 2]);
    assert_eq!(bfs.colors().get(&3), Color::Discovered);
}
