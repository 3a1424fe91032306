//! Nearest-ancestor correlation lookup

use super::CorrelationEntry;
use crate::algo::ParentIndex;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Correlation entry sets keyed by department id, plus the root fallback
#[derive(Debug, Clone, Default)]
pub struct CorrelationResolver {
    by_dept: FxHashMap<String, Vec<CorrelationEntry>>,
    root_id: String,
}

impl CorrelationResolver {
    pub fn new(
        by_dept: impl IntoIterator<Item = (String, Vec<CorrelationEntry>)>,
        root_id: impl Into<String>,
    ) -> Self {
        Self {
            by_dept: by_dept.into_iter().collect(),
            root_id: root_id.into(),
        }
    }

    /// Entries attached directly to `dept_id`, without inheritance
    pub fn direct(&self, dept_id: &str) -> Option<&[CorrelationEntry]> {
        self.by_dept.get(dept_id).map(Vec::as_slice)
    }

    /// Departments that carry their own entry set
    pub fn attached(&self) -> impl Iterator<Item = &str> {
        self.by_dept.keys().map(String::as_str)
    }

    /// Entry set for `dept_id`: its own, else the nearest ancestor's, else
    /// the root's, else empty. Unknown ids go straight to the root fallback.
    pub fn resolve<'a>(&'a self, dept_id: &str, parents: &ParentIndex) -> &'a [CorrelationEntry] {
        if let Some(entries) = self.direct(dept_id) {
            return entries;
        }

        for ancestor in parents.ancestors(dept_id) {
            if let Some(entries) = self.direct(ancestor) {
                debug!("Correlations for '{}' inherited from '{}'", dept_id, ancestor);
                return entries;
            }
        }

        debug!("Correlations for '{}' fall back to root '{}'", dept_id, self.root_id);
        self.direct(&self.root_id).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correlation::CorrelationDetail;
    use crate::org::{DepartmentNode, DeptStatus};

    fn entry(id: &str, coefficient: f64) -> CorrelationEntry {
        CorrelationEntry::new(
            id,
            id,
            coefficient,
            "",
            0.0,
            CorrelationDetail { rule: String::new(), breakdown: vec![] },
        )
    }

    fn parents() -> ParentIndex {
        let tree = DepartmentNode::new("hq", "HQ", "L", DeptStatus::Good)
            .with_child(
                DepartmentNode::new("east", "East", "L", DeptStatus::Warn)
                    .with_child(DepartmentNode::new("east-a", "East A", "L", DeptStatus::Good)),
            )
            .with_child(
                DepartmentNode::new("south", "South", "L", DeptStatus::Bad)
                    .with_child(DepartmentNode::new("south-a", "South A", "L", DeptStatus::Warn)),
            );
        ParentIndex::build(&tree)
    }

    fn resolver() -> CorrelationResolver {
        CorrelationResolver::new(
            vec![
                ("hq".to_string(), vec![entry("attrition", -0.86), entry("avg_project_value", 0.88)]),
                ("south".to_string(), vec![entry("mobility", -0.83)]),
            ],
            "hq",
        )
    }

    #[test]
    fn test_direct_entries() {
        let resolver = resolver();
        let found = resolver.resolve("south", &parents());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "mobility");
    }

    #[test]
    fn test_walks_multiple_levels() {
        let resolver = resolver();
        let found = resolver.resolve("east-a", &parents());
        let ids: Vec<&str> = found.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["attrition", "avg_project_value"]);
    }

    #[test]
    fn test_one_hop() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("south-a", &parents())[0].id, "mobility");
    }

    #[test]
    fn test_unknown_falls_back_to_root() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("atlantis", &parents()).len(), 2);
    }

    #[test]
    fn test_no_root_entries() {
        let resolver = CorrelationResolver::new(
            vec![("south".to_string(), vec![entry("mobility", -0.83)])],
            "hq",
        );
        let index = parents();
        assert!(resolver.resolve("east-a", &index).is_empty());
        assert!(resolver.resolve("atlantis", &index).is_empty());
        assert_eq!(resolver.resolve("south-a", &index).len(), 1);
    }

    #[test]
    fn test_idempotent() {
        let resolver = resolver();
        let index = parents();
        let first = resolver.resolve("east-a", &index).to_vec();
        let second = resolver.resolve("east-a", &index).to_vec();
        assert_eq!(first, second);
    }
}
