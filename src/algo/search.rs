//! Department search by name or leader

use crate::org::DepartmentNode;

/// Ids of departments whose name or leader contains `query`, case-insensitive,
/// in pre-order. A blank query matches nothing.
pub fn search(root: &DepartmentNode, query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    root.iter()
        .filter(|node| {
            node.name.to_lowercase().contains(&needle) || node.leader.to_lowercase().contains(&needle)
        })
        .map(|node| node.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::DeptStatus;

    fn tree() -> DepartmentNode {
        DepartmentNode::new("hq", "全国销售中心", "陈一舟", DeptStatus::Good)
            .with_child(
                DepartmentNode::new("east", "华东大区", "王悦", DeptStatus::Warn)
                    .with_child(DepartmentNode::new("east-a", "Shanghai Unit", "Liu Chang", DeptStatus::Good)),
            )
            .with_child(
                DepartmentNode::new("south", "华南大区", "张蕾", DeptStatus::Bad)
                    .with_child(DepartmentNode::new("south-a", "深圳事业部", "陈鹏", DeptStatus::Warn)),
            )
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        let tree = tree();
        assert!(search(&tree, "").is_empty());
        assert!(search(&tree, "   ").is_empty());
    }

    #[test]
    fn test_match_leader() {
        assert_eq!(search(&tree(), "张"), vec!["south"]);
    }

    #[test]
    fn test_pre_order_results() {
        assert_eq!(search(&tree(), "陈"), vec!["hq", "south-a"]);
        assert_eq!(search(&tree(), "大区"), vec!["east", "south"]);
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        assert_eq!(search(&tree(), "  shanghai "), vec!["east-a"]);
        assert_eq!(search(&tree(), "LIU"), vec!["east-a"]);
        assert!(search(&tree(), "shanghai unit x").is_empty());
    }
}
