//! End-to-end tests: text → instance → solution → checker.

use std::sync::Arc;
use u_gvrp::config::{CheckerConfig, DepotPolicy, InstanceConfig};
use u_gvrp::error::{ErrorClass, GvrpError};
use u_gvrp::evaluation::{cost, is_valid, SolutionChecker};
use u_gvrp::format::{parse_instance, read_instance_file, GvrpProblem};
use u_gvrp::models::{Instance, Solution, ViolationType};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/small.gvrp");

/// Four nodes, cluster {1, 2} with demand 5; nodes 3 and 4 have no cluster.
const GAP: &str = "NAME : gap
COMMENT : GVRP
DIMENSION : 4
VEHICLES : 1
GVRP_SETS : 1
CAPACITY : 10
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 10 10
2 20 20
3 30 30
4 40 40
GVRP_SET_SECTION
1 1 2 -1
DEMAND_SECTION
1 5
";

/// Eight nodes in four clusters of two, depot 8.
const EIGHT: &str = "NAME : eight COMMENT : GVRP DIMENSION : 8 VEHICLES : 2 GVRP_SETS : 4
CAPACITY : 10 EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 0 5 2 0 6 3 5 0 4 6 0 5 0 -5 6 0 -6 7 -5 0 8 0 0
GVRP_SET_SECTION
1 1 2 -1 2 3 4 -1 3 5 6 -1 4 7 -1
DEMAND_SECTION
1 6 2 6 3 2 4 3
";

fn solution(instance: &Arc<Instance>, routes: &[&[usize]]) -> Solution {
    let mut sol = Solution::new(instance.clone());
    for (route, ids) in sol.routes_mut().iter_mut().zip(routes) {
        for &id in ids.iter() {
            route.push(*instance.node(id).expect("node exists"));
        }
    }
    sol
}

#[test]
fn test_read_fixture_file() {
    let instance = read_instance_file(FIXTURE, &InstanceConfig::default()).expect("fixture parses");
    assert_eq!(instance.name(), "small");
    assert_eq!(instance.num_nodes(), 6);
    assert_eq!(instance.num_clusters(), 3);
    assert_eq!(instance.depot().id(), 1);

    let dump = instance.to_string();
    assert!(dump.starts_with("name = small\nfleet = 2\ncapacity = 10\ndepot = C1 = (0, 0)"));
    assert!(dump.contains("S2 = { demand = 5, customers = [C4 = (0, 10), C5 = (6, 8)] }"));
}

#[test]
fn test_string_reader_matches_file_reader() {
    let text = std::fs::read_to_string(FIXTURE).expect("fixture readable");
    let from_text = text.read_gvrp(&InstanceConfig::default()).expect("parses");
    let from_file = read_instance_file(FIXTURE, &InstanceConfig::default()).expect("parses");
    assert_eq!(from_text, from_file);
    assert_eq!(from_text.num_nodes(), from_file.num_nodes());
}

#[test]
fn test_last_unassigned_depot_quirk() {
    let instance = parse_instance(GAP, &InstanceConfig::default()).expect("parses");
    assert_eq!(instance.clusters().len(), 1);
    assert_eq!(instance.clusters()[0].len(), 2);
    assert_eq!(instance.clusters()[0].demand(), 5);
    assert_eq!(instance.depot().position(), (40, 40));
    // node 3 remains an ordinary node without cluster
    let node3 = instance.node(3).expect("node 3");
    assert!(node3.cluster_id().is_none());
    assert!(instance.customers().contains(node3));
}

#[test]
fn test_unique_unassigned_rejects_quirk() {
    let config = InstanceConfig::default().with_depot_policy(DepotPolicy::UniqueUnassigned);
    let err = parse_instance(GAP, &config).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Reference);
    assert!(matches!(err, GvrpError::AmbiguousDepot { ref node_ids } if node_ids == &[3, 4]));
}

#[test]
fn test_capacity_violation() {
    let instance = Arc::new(parse_instance(EIGHT, &InstanceConfig::default()).expect("parses"));
    // 6 + 6 = 12 > 10
    let sol = solution(&instance, &[&[1, 3], &[5, 7]]);
    assert!(!is_valid(&sol));
    assert!(matches!(
        SolutionChecker::new().first_violation(&sol).map(|v| v.kind),
        Some(ViolationType::CapacityExceeded { load: 12, capacity: 10, .. })
    ));
}

#[test]
fn test_node_shared_by_two_routes() {
    let instance = Arc::new(parse_instance(EIGHT, &InstanceConfig::default()).expect("parses"));
    let sol = solution(&instance, &[&[1, 7], &[3, 7]]);
    assert!(!is_valid(&sol));

    let ok = solution(&instance, &[&[1, 7], &[3, 5]]);
    assert!(is_valid(&ok));
}

#[test]
fn test_single_node_round_trips() {
    let instance = Arc::new(parse_instance(EIGHT, &InstanceConfig::default()).expect("parses"));
    let sol = solution(&instance, &[&[2], &[4]]);
    let depot = instance.depot();
    let expected: f64 = [2, 4]
        .iter()
        .map(|&id| 2.0 * instance.distance(depot, instance.node(id).expect("node")))
        .sum();
    assert!((cost(&sol) - expected).abs() < 1e-10);
    assert!((cost(&sol) - 24.0).abs() < 1e-10);
}

#[test]
fn test_coverage_rule_is_opt_in() {
    let instance = Arc::new(parse_instance(EIGHT, &InstanceConfig::default()).expect("parses"));
    // cluster 3 and 4 never visited
    let sol = solution(&instance, &[&[1], &[3]]);
    assert!(is_valid(&sol));

    let strict = SolutionChecker::with_config(CheckerConfig::default().with_cluster_coverage(true));
    assert!(!strict.is_valid(&sol));
    assert!(strict.is_valid(&solution(&instance, &[&[2, 5], &[4, 7]])));
}

#[test]
fn test_instance_shared_across_threads() {
    let instance = Arc::new(parse_instance(EIGHT, &InstanceConfig::default()).expect("parses"));
    let plans: Vec<Vec<Vec<usize>>> = vec![
        vec![vec![1, 7], vec![3, 5]],
        vec![vec![2], vec![4]],
        vec![vec![1, 3], vec![5]],
    ];

    let results: Vec<bool> = std::thread::scope(|s| {
        let handles: Vec<_> = plans
            .iter()
            .map(|plan| {
                let instance = instance.clone();
                s.spawn(move || {
                    let routes: Vec<&[usize]> = plan.iter().map(Vec::as_slice).collect();
                    is_valid(&solution(&instance, &routes))
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("thread finished"))
            .collect()
    });

    assert_eq!(results, vec![true, true, false]);
}
