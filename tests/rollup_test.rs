use sales_efficiency::algo::round2;
use sales_efficiency::dataset::{CORRELATIONS_FILE, ORG_FILE, SUMMARY_FILE};
use sales_efficiency::{aggregate, DashboardContext, Dataset, DepartmentNode, REVENUE_PER_COST};
use std::collections::HashMap;

/// Recompute every internal node from its (already aggregated) children
fn assert_weighted_means(node: &DepartmentNode) {
    if node.is_leaf() {
        return;
    }
    let total: u32 = node.children.iter().map(|c| c.headcount).sum();
    assert_eq!(node.headcount, total, "headcount of {}", node.id);

    let mut sums: HashMap<&str, f64> = HashMap::new();
    for child in &node.children {
        for metric in &child.metrics {
            *sums.entry(metric.id.as_str()).or_default() += metric.value * f64::from(child.headcount);
        }
    }
    assert_eq!(sums.len(), node.metrics.len(), "metric ids of {}", node.id);
    for (id, sum) in sums {
        let expected = round2(sum / f64::from(total));
        assert_eq!(node.metric(id).unwrap().value, expected, "{} of {}", id, node.id);
    }

    for child in &node.children {
        assert_weighted_means(child);
    }
}

#[test]
fn test_builtin_rollup_properties() {
    let dataset = Dataset::builtin().unwrap();
    let (tree, rollup) = aggregate(dataset.org);

    assert_eq!(rollup.headcount, 180);
    // (10.83·70 + 12.9·60 + 10·50) / 180, before the summary sync
    assert_eq!(rollup.value(REVENUE_PER_COST), Some(11.29));
    assert_weighted_means(&tree);

    for leaf in tree.iter().filter(|n| n.is_leaf()) {
        assert_eq!(leaf.value, leaf.metric(REVENUE_PER_COST).unwrap().value);
    }
}

#[test]
fn test_root_matches_summary_card() {
    let ctx = DashboardContext::builtin().unwrap();
    let card = ctx.summary().iter().find(|m| m.id == REVENUE_PER_COST).unwrap();
    let root = ctx.tree();
    assert_eq!(root.value, card.value);
    assert_eq!(root.metric(REVENUE_PER_COST).unwrap().value, card.value);
    assert_eq!(root.metric(REVENUE_PER_COST).unwrap().unit, card.unit);
}

#[test]
fn test_resolve_is_total_over_the_tree() {
    let ctx = DashboardContext::builtin().unwrap();
    for node in ctx.tree().iter() {
        let found = ctx.correlations(&node.id);
        assert!(!found.is_empty(), "no correlations for {}", node.id);
    }
}

#[test]
fn test_dataset_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(SUMMARY_FILE),
        r#"[{"id": "revenue_per_cost", "name": "人效", "value": 9.9, "unit": "万元",
             "yoy": 0.01, "trend": "flat",
             "detail": {"rule": "r", "baseline": 9.0, "attainment": 1.1, "history": []}}]"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join(ORG_FILE),
        r#"{"id": "root", "name": "Root", "leader": "Ada", "status": "good", "baseline": 9.0,
            "children": [
              {"id": "a", "name": "Alpha", "leader": "Bo", "headcount": 10, "status": "good", "baseline": 9.0,
               "metrics": [{"id": "revenue_per_cost", "name": "人效", "value": 8.0, "unit": "万元"}]},
              {"id": "b", "name": "Beta", "leader": "Cy", "headcount": 30, "status": "warn", "baseline": 9.0,
               "metrics": [{"id": "revenue_per_cost", "name": "人效", "value": 12.0, "unit": "万元"}]}
            ]}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join(CORRELATIONS_FILE),
        r#"{"b": [{"id": "attrition", "name": "离职率", "coefficient": -0.5, "direction": "negative",
                   "description": "d", "value": 0.1, "detail": {"rule": "r", "breakdown": []}}]}"#,
    )
    .unwrap();

    let ctx = DashboardContext::build(Dataset::from_dir(dir.path()).unwrap()).unwrap();
    assert_eq!(ctx.tree().headcount, 40);
    assert_eq!(ctx.tree().value, 9.9);
    assert_eq!(ctx.correlations("b").len(), 1);
    // root has no entry set of its own
    assert!(ctx.correlations("a").is_empty());
    assert!(ctx.correlations("root").is_empty());
    assert_eq!(ctx.search("cy"), vec!["b"]);
}
