//! Department node implementation for the organization tree
//!
//! A department owns its children exclusively. Leaves carry the authoritative
//! headcount and metric inputs; internal nodes are filled in by the rollup in
//! [`crate::algo::rollup`].

use super::metric::{HistoryPoint, MetricPoint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Traffic-light status shown next to a department
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeptStatus {
    Good,
    Warn,
    Bad,
}

impl fmt::Display for DeptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeptStatus::Good => "good",
            DeptStatus::Warn => "warn",
            DeptStatus::Bad => "bad",
        };
        write!(f, "{}", s)
    }
}

/// Narrative attached to a department: how its efficiency is computed,
/// where it stands and what to do about it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDetail {
    /// Calculation rule, human readable
    pub rule: String,
    pub baseline: f64,
    /// Actual / baseline
    pub attainment: f64,
    /// Time-ordered history of the primary metric
    #[serde(default)]
    pub history: Vec<HistoryPoint>,
    #[serde(default)]
    pub status_summary: String,
    #[serde(default)]
    pub root_cause: String,
    #[serde(default)]
    pub actions: Vec<String>,
}

/// A department in the organization tree
///
/// `headcount`, `value` and `metrics` on internal nodes are derived; they are
/// rewritten exactly once, by the rollup at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentNode {
    /// Unique across the whole tree
    pub id: String,
    pub name: String,
    pub leader: String,
    #[serde(default)]
    pub headcount: u32,
    pub status: DeptStatus,
    pub baseline: f64,
    /// Primary metric (revenue per labor cost)
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub metrics: Vec<MetricPoint>,
    #[serde(default)]
    pub detail: DepartmentDetail,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DepartmentNode>,
}

impl DepartmentNode {
    /// Create a childless department with no metrics
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        leader: impl Into<String>,
        status: DeptStatus,
    ) -> Self {
        DepartmentNode {
            id: id.into(),
            name: name.into(),
            leader: leader.into(),
            headcount: 0,
            status,
            baseline: 0.0,
            value: 0.0,
            metrics: Vec::new(),
            detail: DepartmentDetail::default(),
            children: Vec::new(),
        }
    }

    /// Builder-style headcount setter
    pub fn with_headcount(mut self, headcount: u32) -> Self {
        self.headcount = headcount;
        self
    }

    /// Builder-style metric append
    pub fn with_metric(mut self, metric: MetricPoint) -> Self {
        self.metrics.push(metric);
        self
    }

    /// Builder-style child append
    pub fn with_child(mut self, child: DepartmentNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Look up one of this node's own metrics by id
    pub fn metric(&self, id: &str) -> Option<&MetricPoint> {
        self.metrics.iter().find(|m| m.id == id)
    }

    pub fn metric_mut(&mut self, id: &str) -> Option<&mut MetricPoint> {
        self.metrics.iter_mut().find(|m| m.id == id)
    }

    /// Pre-order iterator over this node and all of its descendants
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Find a department anywhere in this subtree
    pub fn find(&self, id: &str) -> Option<&DepartmentNode> {
        self.iter().find(|n| n.id == id)
    }

    /// Number of departments in this subtree, including this one
    pub fn department_count(&self) -> usize {
        self.iter().count()
    }
}

/// Pre-order traversal, children visited in their stored order
pub struct PreOrder<'a> {
    stack: Vec<&'a DepartmentNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a DepartmentNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
