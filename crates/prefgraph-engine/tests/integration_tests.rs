//! Integration tests for prefgraph-engine
//!
//! These tests drive the public API through full ingest / resolve / recommend cycles.

use prefgraph_domain::{ElementId, Judgment, SignedJudgment};
use prefgraph_engine::{GraphConfig, GraphError, PreferenceGraph};

fn id(s: &str) -> ElementId {
    ElementId::from(s)
}

#[test]
fn test_three_cycle_scenario() {
    let mut graph = PreferenceGraph::default();

    assert!(!graph.add_evaluation("A", "B").unwrap());
    assert!(!graph.add_evaluation("B", "C").unwrap());
    assert!(graph.add_evaluation("C", "A").unwrap());

    assert!(graph.is_consistent());
    assert_eq!(
        graph.judgments(),
        vec![Judgment::new("B", "C"), Judgment::new("C", "A")]
    );
    assert!(graph.prefers(&id("A"), &id("C")));
    assert!(!graph.prefers(&id("B"), &id("A")));
}

#[test]
fn test_oldest_single_retraction_wins() {
    // Either judgment alone breaks the path a -> b -> c; b -> c is the older one
    let mut graph = PreferenceGraph::default();
    graph.add_evaluation("b", "c").unwrap();
    graph.add_evaluation("a", "b").unwrap();
    graph.add_evaluation("c", "a").unwrap();

    assert_eq!(
        graph.judgments(),
        vec![Judgment::new("a", "b"), Judgment::new("c", "a")]
    );
}

#[test]
fn test_unrelated_judgments_survive_resolution() {
    let mut graph = PreferenceGraph::default();
    graph.add_evaluation("a", "b").unwrap();
    graph.add_evaluation("x", "y").unwrap();
    graph.add_evaluation("b", "c").unwrap();
    graph.add_evaluation("c", "a").unwrap();

    let judgments = graph.judgments();
    assert!(judgments.contains(&Judgment::new("x", "y")));
    assert!(!judgments.contains(&Judgment::new("a", "b")));
    assert_eq!(graph.metrics().judgments_retracted, 1);
}

#[test]
fn test_parallel_paths_retract_two_oldest_branches() {
    let mut graph = PreferenceGraph::default();
    graph.add_evaluation("w", "m1").unwrap();
    graph.add_evaluation("m1", "l").unwrap();
    graph.add_evaluation("w", "m2").unwrap();
    graph.add_evaluation("m2", "l").unwrap();

    // Now claim w beats l
    assert!(graph.add_evaluation("l", "w").unwrap());

    assert_eq!(
        graph.judgments(),
        vec![
            Judgment::new("m1", "l"),
            Judgment::new("m2", "l"),
            Judgment::new("l", "w"),
        ]
    );
    assert!(graph.is_consistent());
}

#[test]
fn test_signed_source_ingestion() {
    let mut graph = PreferenceGraph::default();
    let mut source = vec![
        SignedJudgment::new("v1", "v2", 5.0),
        SignedJudgment::new("v2", "v3", 0.0),
        SignedJudgment::new("v3", "v2", -2.0),
    ];

    let metrics = graph.ingest(&mut source).unwrap();
    assert_eq!(metrics.ingested, 2);
    assert!(graph.prefers(&id("v3"), &id("v1")));
}

#[test]
fn test_capped_conflict_leaves_graph_untouched() {
    let mut graph = PreferenceGraph::new(GraphConfig::bounded(2));
    graph
        .add_evaluations(vec![
            Judgment::new("a", "b"),
            Judgment::new("b", "c"),
            Judgment::new("c", "d"),
        ])
        .unwrap();

    let before = graph.judgments();
    let err = graph.add_evaluation("d", "a").unwrap_err();
    assert!(matches!(err, GraphError::ConflictTooLarge { edges: 3, max: 2 }));
    assert_eq!(graph.judgments(), before);
}

#[test]
fn test_batch_continues_past_capped_conflict() {
    let mut graph = PreferenceGraph::new(GraphConfig::bounded(1));
    let metrics = graph
        .add_evaluations(vec![
            Judgment::new("a", "b"),
            Judgment::new("b", "c"),
            Judgment::new("c", "a"),
            Judgment::new("x", "y"),
        ])
        .unwrap();

    assert_eq!(metrics.refused, 1);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.judgments().contains(&Judgment::new("x", "y")));
    assert!(!graph.judgments().contains(&Judgment::new("c", "a")));
}

#[test]
fn test_recommendation_cycle() {
    let mut graph = PreferenceGraph::default();
    graph
        .add_evaluations(vec![
            Judgment::new("a", "b"),
            Judgment::new("c", "d"),
            Judgment::new("e", "f"),
        ])
        .unwrap();

    // Keep answering the first recommendation until everything is ordered
    let mut rounds = 0;
    while let Some(next) = graph.recommend().into_iter().next() {
        graph.add_evaluation(next.first, next.second).unwrap();
        rounds += 1;
        assert!(rounds < 50, "recommendations should run out");
    }

    assert!(graph.is_consistent());
    let elements: Vec<ElementId> = graph.elements().cloned().collect();
    for (i, a) in elements.iter().enumerate() {
        for b in &elements[i + 1..] {
            assert!(graph.are_ordered(a, b).unwrap(), "{} and {} left unordered", a, b);
        }
    }
}

#[test]
fn test_render_plan_counts_match_ancestry() {
    let mut graph = PreferenceGraph::default();
    graph
        .add_evaluations(vec![
            Judgment::new("a", "b"),
            Judgment::new("b", "c"),
            Judgment::new("a", "d"),
        ])
        .unwrap();

    let plan = graph.render_plan();
    for node in &plan.nodes {
        assert_eq!(node.ancestors, graph.ancestors(&node.element).unwrap().len());
        assert_eq!(node.descendants, graph.descendants(&node.element).unwrap().len());
    }
    let drawn: usize = plan.points.iter().map(|p| p.size).sum();
    assert_eq!(drawn, graph.node_count());
}

#[test]
fn test_config_file_drives_graph() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefgraph.toml");
    std::fs::write(&path, "[graph]\nmax_candidate_degree = 1\n").unwrap();

    let config = GraphConfig::load(&path).unwrap();
    let mut graph = PreferenceGraph::new(config);
    graph.add_evaluation("a", "b").unwrap();
    graph.add_evaluation("c", "d").unwrap();

    // Every element has one judgment, so nothing is eligible
    assert!(graph.recommend().is_empty());
}
