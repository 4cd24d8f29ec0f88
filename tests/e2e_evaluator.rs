//! End-to-end tests for the full weights pipeline.
//!
//! Each test exercises: declare weights -> build evaluator -> query
//! concrete addresses, the way a cred computation pass consumes the crate.

use cred_weights::{
    EdgeAddress, EdgeWeight, EdgeWeights, EdgeWeightEvaluator, NodeAddress, NodeWeights,
    NodeWeightEvaluator, SharedWeights, Weights,
};

// ============================================================================
// 1. Default identity: empty tables weigh everything 1
// ============================================================================

#[test]
fn test_empty_tables_give_identity_everywhere() {
    let nodes = NodeWeightEvaluator::new(&NodeWeights::empty());
    assert_eq!(nodes.weight(&NodeAddress::empty()), 1.0);
    assert_eq!(nodes.weight(&NodeAddress::from_parts(["github", "issue", "42"])), 1.0);

    let edges = EdgeWeightEvaluator::new(&EdgeWeights::empty());
    assert_eq!(edges.weight(&EdgeAddress::empty()), EdgeWeight::new(1.0, 1.0));
    assert_eq!(
        edges.weight(&EdgeAddress::from_parts(["github", "authors"])),
        EdgeWeight::new(1.0, 1.0),
    );
}

// ============================================================================
// 2. Exact match returns the declared weight
// ============================================================================

#[test]
fn test_exact_match() {
    let issue = NodeAddress::from_parts(["github", "issue"]);
    let mut weights = NodeWeights::empty();
    weights.set(issue.clone(), 4.0).unwrap();

    let evaluator = NodeWeightEvaluator::new(&weights);
    assert_eq!(evaluator.weight(&issue), 4.0);
}

// ============================================================================
// 3. Cumulative composition and downstream inheritance
// ============================================================================

#[test]
fn test_weights_compose_down_the_hierarchy() {
    let mut weights = NodeWeights::empty();
    weights.set(NodeAddress::from_parts(["foo"]), 2.0).unwrap();
    weights.set(NodeAddress::from_parts(["foo", "bar"]), 3.0).unwrap();

    let evaluator = NodeWeightEvaluator::new(&weights);
    assert_eq!(evaluator.weight(&NodeAddress::empty()), 1.0);
    assert_eq!(evaluator.weight(&NodeAddress::from_parts(["foo"])), 2.0);
    assert_eq!(evaluator.weight(&NodeAddress::from_parts(["foo", "bar"])), 6.0);
    // Non-key descendants inherit every ancestor weight.
    assert_eq!(
        evaluator.weight(&NodeAddress::from_parts(["foo", "bar", "qox"])),
        6.0,
    );
}

// ============================================================================
// 4. Edge directions accumulate independently
// ============================================================================

#[test]
fn test_edge_directional_independence() {
    let mut weights = EdgeWeights::empty();
    weights
        .set(EdgeAddress::from_parts(["foo"]), EdgeWeight::new(2.0, 3.0))
        .unwrap();
    weights
        .set(EdgeAddress::from_parts(["foo", "bar"]), EdgeWeight::new(4.0, 5.0))
        .unwrap();

    let evaluator = EdgeWeightEvaluator::new(&weights);
    assert_eq!(
        evaluator.weight(&EdgeAddress::from_parts(["foo", "bar"])),
        EdgeWeight::new(8.0, 15.0),
    );
    assert_eq!(
        evaluator.weight(&EdgeAddress::from_parts(["foo", "bar", "qox"])),
        EdgeWeight::new(8.0, 15.0),
    );
}

// ============================================================================
// 5. Sibling branches never interfere
// ============================================================================

#[test]
fn test_sibling_non_interference() {
    let mut weights = NodeWeights::empty();
    weights.set(NodeAddress::from_parts(["baz"]), 100.0).unwrap();
    weights.set(NodeAddress::from_parts(["foo"]), 2.0).unwrap();

    let evaluator = NodeWeightEvaluator::new(&weights);
    assert_eq!(evaluator.weight(&NodeAddress::from_parts(["foo", "anything"])), 2.0);
}

// ============================================================================
// 6. Insertion order never matters
// ============================================================================

#[test]
fn test_insertion_order_independence() {
    let entries = [
        (NodeAddress::empty(), 2.0),
        (NodeAddress::from_parts(["foo"]), 3.0),
        (NodeAddress::from_parts(["foo", "bar"]), 5.0),
        (NodeAddress::from_parts(["baz"]), 7.0),
    ];

    let mut forward = NodeWeights::empty();
    for (address, weight) in entries.clone() {
        forward.set(address, weight).unwrap();
    }
    let mut reverse = NodeWeights::empty();
    for (address, weight) in entries.clone().into_iter().rev() {
        reverse.set(address, weight).unwrap();
    }

    let a = NodeWeightEvaluator::new(&forward);
    let b = NodeWeightEvaluator::new(&reverse);
    let queries = [
        NodeAddress::empty(),
        NodeAddress::from_parts(["foo"]),
        NodeAddress::from_parts(["foo", "bar", "qox"]),
        NodeAddress::from_parts(["baz", "deep"]),
        NodeAddress::from_parts(["unrelated"]),
    ];
    for query in &queries {
        assert_eq!(a.weight(query), b.weight(query), "query {query}");
    }
}

// ============================================================================
// 7. Snapshot isolation: evaluators never see later mutation
// ============================================================================

#[test]
fn test_snapshot_isolation() {
    let mut weights = EdgeWeights::empty();
    weights
        .set(EdgeAddress::from_parts(["foo"]), EdgeWeight::new(2.0, 3.0))
        .unwrap();

    let evaluator = EdgeWeightEvaluator::new(&weights);
    weights
        .set(EdgeAddress::from_parts(["foo"]), EdgeWeight::new(9.0, 9.0))
        .unwrap();

    assert_eq!(
        evaluator.weight(&EdgeAddress::from_parts(["foo"])),
        EdgeWeight::new(2.0, 3.0),
    );
}

// ============================================================================
// 8. Configuration round trip: declare -> JSON -> parse -> evaluate
// ============================================================================

#[test]
fn test_json_round_trip_preserves_evaluation() {
    let mut weights = Weights::empty();
    weights
        .node_weights
        .set(NodeAddress::from_parts(["github", "issue"]), 2.0)
        .unwrap();
    weights
        .edge_weights
        .set(EdgeAddress::from_parts(["github", "authors"]), EdgeWeight::new(0.5, 2.0))
        .unwrap();

    let json = weights.to_json_string().unwrap();
    let parsed = Weights::from_json_str(&json).unwrap();

    let query = NodeAddress::from_parts(["github", "issue", "42"]);
    assert_eq!(
        NodeWeightEvaluator::new(&weights.node_weights).weight(&query),
        NodeWeightEvaluator::new(&parsed.node_weights).weight(&query),
    );
    let edge_query = EdgeAddress::from_parts(["github", "authors", "42"]);
    assert_eq!(
        EdgeWeightEvaluator::new(&weights.edge_weights).weight(&edge_query),
        EdgeWeightEvaluator::new(&parsed.edge_weights).weight(&edge_query),
    );
}

// ============================================================================
// 9. Merged declarations evaluate like a single table
// ============================================================================

#[test]
fn test_merge_then_evaluate() {
    let mut plugin_a = Weights::empty();
    plugin_a
        .node_weights
        .set(NodeAddress::from_parts(["github"]), 2.0)
        .unwrap();
    let mut plugin_b = Weights::empty();
    plugin_b
        .node_weights
        .set(NodeAddress::from_parts(["github", "issue"]), 3.0)
        .unwrap();

    let merged = Weights::merge([&plugin_a, &plugin_b]).unwrap();
    let evaluator = NodeWeightEvaluator::new(&merged.node_weights);
    assert_eq!(
        evaluator.weight(&NodeAddress::from_parts(["github", "issue", "42"])),
        6.0,
    );
}

// ============================================================================
// 10. Shared store: live edits, frozen computation passes
// ============================================================================

#[test]
fn test_shared_store_rebuild_after_update() {
    let store = SharedWeights::new(Weights::empty());
    let pass_one = store.node_evaluator();

    store
        .update(|w| w.node_weights.set(NodeAddress::from_parts(["foo"]), 4.0))
        .unwrap();
    let pass_two = store.node_evaluator();

    let query = NodeAddress::from_parts(["foo", "bar"]);
    assert_eq!(pass_one.weight(&query), 1.0);
    assert_eq!(pass_two.weight(&query), 4.0);

    // A snapshot is a plain value, detached from further edits.
    let frozen = store.snapshot();
    store
        .update(|w| w.node_weights.set(NodeAddress::from_parts(["foo"]), 9.0))
        .unwrap();
    assert_eq!(
        NodeWeightEvaluator::new(&frozen.node_weights).weight(&query),
        4.0,
    );
}
