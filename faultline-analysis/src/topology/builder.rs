//! Topology model construction with fail-fast invariant checks.

use faultline_core::config::ModelConfig;
use faultline_core::errors::ModelError;
use faultline_core::types::collections::SmallVec4;
use faultline_core::types::{Dependency, Service, ServiceId};
use lasso::Rodeo;
use tracing::debug;

use super::types::{InEdge, TopologyModel};

impl TopologyModel {
    /// Build the model from an immutable service/dependency batch.
    ///
    /// The validator normally runs first and reports every violation at
    /// once; this builder still re-checks each invariant as it goes and
    /// fails on the first one, so a bypassed validator can never produce a
    /// silently corrupt model.
    pub fn build(
        services: &[Service],
        dependencies: &[Dependency],
        config: &ModelConfig,
    ) -> Result<TopologyModel, ModelError> {
        let mut ids = Rodeo::default();
        let mut nodes = Vec::with_capacity(services.len());

        for svc in services {
            if ids.get(&svc.id).is_some() {
                return Err(ModelError::DuplicateService { id: svc.id.clone() });
            }
            nodes.push(ServiceId::new(ids.get_or_intern(&svc.id)));
        }

        let mut in_edges = vec![SmallVec4::<InEdge>::new(); nodes.len()];
        let mut out_degree = vec![0u32; nodes.len()];

        for dep in dependencies {
            let src = lookup_endpoint(&ids, dep, &dep.src)?;
            let dst = lookup_endpoint(&ids, dep, &dep.dst)?;

            if src == dst && !config.allow_self_dependencies {
                return Err(ModelError::SelfDependency {
                    id: dep.src.clone(),
                });
            }

            // Duplicate (src, dst) pairs are intentionally not collapsed:
            // edge uniqueness is the caller's contract, not the model's.
            in_edges[dst.index()].push(InEdge {
                src,
                dependency_kind: dep.dependency_kind,
                call_kind: dep.call_kind,
            });
            out_degree[src.index()] += 1;
        }

        debug!(
            nodes = nodes.len(),
            edges = dependencies.len(),
            "topology model built"
        );

        Ok(TopologyModel {
            ids: ids.into_reader(),
            nodes,
            in_edges,
            out_degree,
            edge_count: dependencies.len(),
        })
    }
}

fn lookup_endpoint(
    ids: &Rodeo,
    dep: &Dependency,
    endpoint: &str,
) -> Result<ServiceId, ModelError> {
    ids.get(endpoint)
        .map(ServiceId::new)
        .ok_or_else(|| ModelError::UnknownEndpoint {
            src: dep.src.clone(),
            dst: dep.dst.clone(),
            unknown: endpoint.to_string(),
        })
}
