//! Topology model construction tests: adjacency shape, edge attributes,
//! fail-fast invariant checks, and stats collection.

use faultline_analysis::stats::TopologyStats;
use faultline_analysis::topology::TopologyModel;
use faultline_core::config::ModelConfig;
use faultline_core::errors::ModelError;
use faultline_core::types::{CallKind, Dependency, DependencyKind, Service};

fn chain_input() -> (Vec<Service>, Vec<Dependency>) {
    // api depends on auth, auth depends on db
    let services = vec![Service::new("api"), Service::new("auth"), Service::new("db")];
    let deps = vec![
        Dependency::new("api", "auth"),
        Dependency::with_kinds("auth", "db", DependencyKind::Soft, CallKind::Async),
    ];
    (services, deps)
}

#[test]
fn build_indexes_edges_by_destination_with_attributes() {
    let (services, deps) = chain_input();
    let model = TopologyModel::build(&services, &deps, &ModelConfig::default()).unwrap();

    assert_eq!(model.node_count(), 3);
    assert_eq!(model.edge_count(), 2);

    let auth = model.node("auth").unwrap();
    let api = model.node("api").unwrap();
    let db = model.node("db").unwrap();

    // auth's only depender is api, on a default hard/sync edge
    let auth_in = model.in_edges(auth);
    assert_eq!(auth_in.len(), 1);
    assert_eq!(auth_in[0].src, api);
    assert_eq!(auth_in[0].dependency_kind, DependencyKind::Hard);
    assert_eq!(auth_in[0].call_kind, CallKind::Sync);

    // db's only depender is auth, soft/async as declared
    let db_in = model.in_edges(db);
    assert_eq!(db_in.len(), 1);
    assert_eq!(db_in[0].src, auth);
    assert_eq!(db_in[0].dependency_kind, DependencyKind::Soft);
    assert_eq!(db_in[0].call_kind, CallKind::Async);

    // api has no dependers
    assert!(model.in_edges(api).is_empty());
}

#[test]
fn out_degree_counts_edges_where_node_is_source() {
    let (services, deps) = chain_input();
    let model = TopologyModel::build(&services, &deps, &ModelConfig::default()).unwrap();

    assert_eq!(model.out_degree(model.node("api").unwrap()), 1);
    assert_eq!(model.out_degree(model.node("auth").unwrap()), 1);
    assert_eq!(model.out_degree(model.node("db").unwrap()), 0);
}

#[test]
fn resolve_round_trips_node_ids() {
    let (services, deps) = chain_input();
    let model = TopologyModel::build(&services, &deps, &ModelConfig::default()).unwrap();

    for id in model.node_ids() {
        let name = model.resolve(*id);
        assert_eq!(model.node(name), Some(*id));
    }
    assert_eq!(model.node("unknown"), None);
}

#[test]
fn ids_are_case_sensitive() {
    let services = vec![Service::new("API"), Service::new("api")];
    let model = TopologyModel::build(&services, &[], &ModelConfig::default()).unwrap();
    assert_eq!(model.node_count(), 2);
    assert_ne!(model.node("API"), model.node("api"));
}

#[test]
fn duplicate_service_id_fails_fast() {
    let services = vec![Service::new("api"), Service::new("api")];
    let err = TopologyModel::build(&services, &[], &ModelConfig::default()).unwrap_err();
    assert!(matches!(err, ModelError::DuplicateService { id } if id == "api"));
}

#[test]
fn dangling_endpoint_fails_fast() {
    let services = vec![Service::new("api")];
    let deps = vec![Dependency::new("api", "ghost")];
    let err = TopologyModel::build(&services, &deps, &ModelConfig::default()).unwrap_err();
    match err {
        ModelError::UnknownEndpoint { unknown, .. } => assert_eq!(unknown, "ghost"),
        other => panic!("expected UnknownEndpoint, got {other:?}"),
    }
}

#[test]
fn self_dependency_rejected_unless_configured() {
    let services = vec![Service::new("api")];
    let deps = vec![Dependency::new("api", "api")];

    let err = TopologyModel::build(&services, &deps, &ModelConfig::default()).unwrap_err();
    assert!(matches!(err, ModelError::SelfDependency { .. }));

    let permissive = ModelConfig {
        allow_self_dependencies: true,
    };
    let model = TopologyModel::build(&services, &deps, &permissive).unwrap();
    assert_eq!(model.edge_count(), 1);
}

#[test]
fn duplicate_edges_are_kept_as_declared() {
    // Duplicate (src, dst) pairs are a caller error the model does not police.
    let services = vec![Service::new("a"), Service::new("b")];
    let deps = vec![
        Dependency::new("a", "b"),
        Dependency::with_kinds("a", "b", DependencyKind::Soft, CallKind::Async),
    ];
    let model = TopologyModel::build(&services, &deps, &ModelConfig::default()).unwrap();
    assert_eq!(model.edge_count(), 2);
    assert_eq!(model.in_edges(model.node("b").unwrap()).len(), 2);
}

#[test]
fn stats_rank_top_dependers_with_lexical_tie_break() {
    let services = vec![
        Service::new("web"),
        Service::new("worker"),
        Service::new("db"),
        Service::new("cache"),
    ];
    let deps = vec![
        Dependency::new("web", "db"),
        Dependency::new("web", "cache"),
        Dependency::new("worker", "db"),
        Dependency::new("worker", "cache"),
    ];
    let model = TopologyModel::build(&services, &deps, &ModelConfig::default()).unwrap();

    let stats = TopologyStats::collect(&model, 3);
    assert_eq!(stats.services, 4);
    assert_eq!(stats.dependencies, 4);
    assert_eq!(stats.top_dependers.len(), 3);
    // web and worker tie at 2; lexical order puts web first
    assert_eq!(stats.top_dependers[0].id, "web");
    assert_eq!(stats.top_dependers[0].out_degree, 2);
    assert_eq!(stats.top_dependers[1].id, "worker");
    assert_eq!(stats.top_dependers[2].out_degree, 0);
}

#[test]
fn empty_topology_builds() {
    let model = TopologyModel::build(&[], &[], &ModelConfig::default()).unwrap();
    assert_eq!(model.node_count(), 0);
    assert_eq!(model.edge_count(), 0);
    assert!(model.node_ids().is_empty());
}
