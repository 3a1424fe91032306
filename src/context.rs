//! Read-only dashboard context
//!
//! Built once at startup from a [`Dataset`]: validate, roll up the org tree,
//! sync the root with the summary cards, index parents. Request handlers
//! share it behind an `Arc` and only ever read it.

use crate::algo::{self, ParentIndex};
use crate::correlation::{CorrelationEntry, CorrelationResolver};
use crate::dataset::{Dataset, DatasetResult};
use crate::org::{DepartmentNode, MetricSummary};
use chrono::{DateTime, Utc};
use tracing::info;

#[derive(Debug)]
pub struct DashboardContext {
    summary: Vec<MetricSummary>,
    tree: DepartmentNode,
    parents: ParentIndex,
    correlations: CorrelationResolver,
    loaded_at: DateTime<Utc>,
}

impl DashboardContext {
    pub fn build(dataset: Dataset) -> DatasetResult<Self> {
        dataset.validate()?;
        let Dataset {
            summary,
            org,
            correlations,
        } = dataset;

        let (mut tree, rollup) = algo::aggregate(org);
        info!(
            "Rolled up {} departments, total headcount {}",
            tree.department_count(),
            rollup.headcount
        );

        if algo::sync_root_with_summary(&mut tree, &summary) {
            info!("Root '{}' headline synced to summary value {}", tree.id, tree.value);
        }

        let parents = ParentIndex::build(&tree);
        let correlations = CorrelationResolver::new(correlations, tree.id.clone());

        Ok(Self {
            summary,
            tree,
            parents,
            correlations,
            loaded_at: Utc::now(),
        })
    }

    /// Context over the built-in sample dataset
    pub fn builtin() -> DatasetResult<Self> {
        Self::build(Dataset::builtin()?)
    }

    pub fn summary(&self) -> &[MetricSummary] {
        &self.summary
    }

    pub fn tree(&self) -> &DepartmentNode {
        &self.tree
    }

    /// Department shown when the dashboard opens: the root
    pub fn default_dept_id(&self) -> &str {
        &self.tree.id
    }

    pub fn parents(&self) -> &ParentIndex {
        &self.parents
    }

    pub fn department(&self, id: &str) -> Option<&DepartmentNode> {
        self.tree.find(id)
    }

    pub fn department_count(&self) -> usize {
        self.parents.len()
    }

    pub fn correlations(&self, dept_id: &str) -> &[CorrelationEntry] {
        self.correlations.resolve(dept_id, &self.parents)
    }

    pub fn search(&self, query: &str) -> Vec<String> {
        algo::search(&self.tree, query)
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
