//! Degree summaries for the reporting layer.

use serde::Serialize;

use crate::topology::TopologyModel;

/// One row of the top-dependers listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependerStat {
    pub id: String,
    pub out_degree: u32,
}

/// Basic shape summary of a topology.
#[derive(Debug, Clone, Serialize)]
pub struct TopologyStats {
    pub services: usize,
    pub dependencies: usize,
    /// Heaviest dependers by out-degree, descending, lexical tie-break.
    pub top_dependers: Vec<DependerStat>,
}

impl TopologyStats {
    /// Collect stats from a built model, keeping at most `top` depender rows.
    pub fn collect(model: &TopologyModel, top: usize) -> Self {
        let mut dependers: Vec<DependerStat> = model
            .node_ids()
            .iter()
            .map(|&id| DependerStat {
                id: model.resolve(id).to_string(),
                out_degree: model.out_degree(id),
            })
            .collect();
        dependers.sort_by(|a, b| b.out_degree.cmp(&a.out_degree).then_with(|| a.id.cmp(&b.id)));
        dependers.truncate(top);

        Self {
            services: model.node_count(),
            dependencies: model.edge_count(),
            top_dependers: dependers,
        }
    }
}
