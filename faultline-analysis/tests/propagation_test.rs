//! Failure propagation tests: chain and shared-dependency scenarios,
//! selective admission by dependency and call kind, and error cases.

use faultline_analysis::simulation::{propagate, propagate_from, ImpactMap};
use faultline_analysis::topology::TopologyModel;
use faultline_core::config::ModelConfig;
use faultline_core::errors::SimulationError;
use faultline_core::types::{CallKind, Dependency, DependencyKind, FailureKind, Service};

fn build(services: &[Service], deps: &[Dependency]) -> TopologyModel {
    TopologyModel::build(services, deps, &ModelConfig::default()).unwrap()
}

fn impacted_ids(model: &TopologyModel, map: &ImpactMap) -> Vec<String> {
    let mut ids: Vec<String> = map.keys().map(|&id| model.resolve(id).to_string()).collect();
    ids.sort();
    ids
}

fn chain() -> TopologyModel {
    // api -> auth -> db in dependency direction
    build(
        &[Service::new("api"), Service::new("auth"), Service::new("db")],
        &[Dependency::new("api", "auth"), Dependency::new("auth", "db")],
    )
}

#[test]
fn down_at_chain_root_impacts_all_dependers() {
    let model = chain();
    let impacted = propagate(&model, "db", FailureKind::Down).unwrap();

    assert_eq!(impacted_ids(&model, &impacted), ["api", "auth", "db"]);
    for kind in impacted.values() {
        assert_eq!(*kind, FailureKind::Down);
    }
}

#[test]
fn down_mid_chain_impacts_dependers_but_not_dependencies() {
    let model = chain();
    let impacted = propagate(&model, "auth", FailureKind::Down).unwrap();

    // db is auth's own dependency; impact never flows that way
    assert_eq!(impacted_ids(&model, &impacted), ["api", "auth"]);
}

#[test]
fn leaf_depender_impacts_only_itself() {
    let model = chain();
    let impacted = propagate(&model, "api", FailureKind::Down).unwrap();
    assert_eq!(impacted_ids(&model, &impacted), ["api"]);
}

#[test]
fn shared_dependency_impacts_both_dependers() {
    let model = build(
        &[Service::new("a"), Service::new("b"), Service::new("c")],
        &[Dependency::new("a", "c"), Dependency::new("b", "c")],
    );
    let impacted = propagate(&model, "c", FailureKind::Down).unwrap();

    assert_eq!(impacted_ids(&model, &impacted), ["a", "b", "c"]);
    for kind in impacted.values() {
        assert_eq!(*kind, FailureKind::Down);
    }
}

#[test]
fn degraded_does_not_cross_soft_dependencies() {
    let model = build(
        &[Service::new("auth"), Service::new("db")],
        &[Dependency::with_kinds(
            "auth",
            "db",
            DependencyKind::Soft,
            CallKind::Sync,
        )],
    );

    let degraded = propagate(&model, "db", FailureKind::Degraded).unwrap();
    assert_eq!(impacted_ids(&model, &degraded), ["db"]);

    // the same edge still carries a full outage
    let down = propagate(&model, "db", FailureKind::Down).unwrap();
    assert_eq!(impacted_ids(&model, &down), ["auth", "db"]);
}

#[test]
fn degraded_does_not_cross_optional_dependencies() {
    let model = build(
        &[Service::new("auth"), Service::new("db")],
        &[Dependency::with_kinds(
            "auth",
            "db",
            DependencyKind::Optional,
            CallKind::Sync,
        )],
    );
    let degraded = propagate(&model, "db", FailureKind::Degraded).unwrap();
    assert_eq!(impacted_ids(&model, &degraded), ["db"]);
}

#[test]
fn latency_does_not_cross_async_calls() {
    let model = build(
        &[Service::new("auth"), Service::new("db")],
        &[Dependency::with_kinds(
            "auth",
            "db",
            DependencyKind::Hard,
            CallKind::Async,
        )],
    );

    let latency = propagate(&model, "db", FailureKind::LatencyUp).unwrap();
    assert_eq!(impacted_ids(&model, &latency), ["db"]);

    let down = propagate(&model, "db", FailureKind::Down).unwrap();
    assert_eq!(impacted_ids(&model, &down), ["auth", "db"]);
}

#[test]
fn admission_is_checked_per_hop() {
    // web -> auth is hard, auth -> db is soft: a degraded db stops at db,
    // while a degraded auth still reaches web.
    let model = build(
        &[Service::new("web"), Service::new("auth"), Service::new("db")],
        &[
            Dependency::new("web", "auth"),
            Dependency::with_kinds("auth", "db", DependencyKind::Soft, CallKind::Sync),
        ],
    );

    let from_db = propagate(&model, "db", FailureKind::Degraded).unwrap();
    assert_eq!(impacted_ids(&model, &from_db), ["db"]);

    let from_auth = propagate(&model, "auth", FailureKind::Degraded).unwrap();
    assert_eq!(impacted_ids(&model, &from_auth), ["auth", "web"]);
}

#[test]
fn diamond_topology_labels_each_node_once() {
    //   api depends on auth and billing; both depend on db
    let model = build(
        &[
            Service::new("api"),
            Service::new("auth"),
            Service::new("billing"),
            Service::new("db"),
        ],
        &[
            Dependency::new("api", "auth"),
            Dependency::new("api", "billing"),
            Dependency::new("auth", "db"),
            Dependency::new("billing", "db"),
        ],
    );
    let impacted = propagate(&model, "db", FailureKind::Down).unwrap();
    assert_eq!(impacted_ids(&model, &impacted), ["api", "auth", "billing", "db"]);
}

#[test]
fn cycle_terminates_and_impacts_every_member() {
    // a -> b -> c -> a: mutual dependence is invalid operationally but the
    // walk must still terminate via the visited set.
    let model = build(
        &[Service::new("a"), Service::new("b"), Service::new("c")],
        &[
            Dependency::new("a", "b"),
            Dependency::new("b", "c"),
            Dependency::new("c", "a"),
        ],
    );
    let impacted = propagate(&model, "b", FailureKind::Down).unwrap();
    assert_eq!(impacted_ids(&model, &impacted), ["a", "b", "c"]);
}

#[test]
fn start_is_always_labeled_with_injected_kind() {
    let model = chain();
    for kind in [FailureKind::Down, FailureKind::Degraded, FailureKind::LatencyUp] {
        let impacted = propagate(&model, "auth", kind).unwrap();
        let auth = model.node("auth").unwrap();
        assert_eq!(impacted.get(&auth), Some(&kind));
    }
}

#[test]
fn propagate_twice_yields_identical_maps() {
    let model = chain();
    let first = propagate(&model, "db", FailureKind::Down).unwrap();
    let second = propagate(&model, "db", FailureKind::Down).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unknown_start_node_is_an_error() {
    let model = chain();
    let err = propagate(&model, "nonexistent", FailureKind::Down).unwrap_err();
    assert!(matches!(err, SimulationError::UnknownService { id } if id == "nonexistent"));
}

#[test]
fn propagate_from_matches_string_entry_point() {
    let model = chain();
    let db = model.node("db").unwrap();
    let by_id = propagate_from(&model, db, FailureKind::Down);
    let by_name = propagate(&model, "db", FailureKind::Down).unwrap();
    assert_eq!(by_id, by_name);
}
