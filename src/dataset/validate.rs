//! Structural checks run once before a dataset is served

use super::{Dataset, DatasetError, DatasetResult};
use crate::org::{DepartmentNode, MetricPoint};
use rustc_hash::FxHashSet;

impl Dataset {
    /// Reject datasets the rest of the system cannot serve consistently:
    /// duplicate or empty department ids, a metric id listed twice on one
    /// department, coefficients outside [-1, 1],
    /// directions that contradict the coefficient's sign, and correlation
    /// sets attached to departments that do not exist.
    pub fn validate(&self) -> DatasetResult<()> {
        let ids = department_ids(&self.org)?;

        for (dept, entries) in &self.correlations {
            if !ids.contains(dept.as_str()) {
                return Err(DatasetError::UnknownDepartment(dept.clone()));
            }
            for entry in entries {
                if !entry.coefficient.is_finite() || !(-1.0..=1.0).contains(&entry.coefficient) {
                    return Err(DatasetError::CoefficientOutOfRange {
                        dept: dept.clone(),
                        entry: entry.id.clone(),
                        coefficient: entry.coefficient,
                    });
                }
                if !entry.direction.agrees_with(entry.coefficient) {
                    return Err(DatasetError::DirectionMismatch {
                        dept: dept.clone(),
                        entry: entry.id.clone(),
                        direction: entry.direction,
                        coefficient: entry.coefficient,
                    });
                }
            }
        }

        Ok(())
    }
}

fn department_ids(root: &DepartmentNode) -> DatasetResult<FxHashSet<&str>> {
    let mut ids = FxHashSet::default();
    let mut stack: Vec<(&DepartmentNode, &str)> = vec![(root, "")];

    while let Some((node, parent)) = stack.pop() {
        if node.id.is_empty() {
            return Err(DatasetError::EmptyDepartmentId(parent.to_string()));
        }
        if !ids.insert(node.id.as_str()) {
            return Err(DatasetError::DuplicateDepartment(node.id.clone()));
        }
        check_metric_ids(&node.id, &node.metrics)?;
        stack.extend(node.children.iter().map(|child| (child, node.id.as_str())));
    }

    Ok(ids)
}

fn check_metric_ids(dept: &str, metrics: &[MetricPoint]) -> DatasetResult<()> {
    let mut seen = FxHashSet::default();
    for metric in metrics {
        if !seen.insert(metric.id.as_str()) {
            return Err(DatasetError::DuplicateMetric {
                dept: dept.to_string(),
                metric: metric.id.clone(),
            });
        }
    }
    Ok(())
}
