//! Headcount-weighted rollup of department metrics
//!
//! Leaves hold the authoritative headcount and metric values. Every internal
//! node gets the sum of its children's headcounts and, per metric id, the
//! headcount-weighted mean of its children's values rounded to 2 decimals.
//! Internal nodes are aggregated from their children's already-rounded
//! results, bottom-up.
//!
//! The fold consumes the subtree and hands back the rewritten one together
//! with its [`Rollup`], so callers never observe a half-aggregated tree.

use crate::org::{DepartmentNode, MetricPoint, MetricSummary, REVENUE_PER_COST};
use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::warn;

/// Aggregated headcount and metrics of one subtree
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rollup {
    pub headcount: u32,
    /// Metric id → metric, in order of first appearance
    pub metrics: IndexMap<String, MetricPoint>,
}

impl Rollup {
    /// A repeated metric id keeps its first entry, the one `DepartmentNode::metric` returns
    fn of(headcount: u32, metrics: &[MetricPoint]) -> Self {
        let mut by_id = IndexMap::with_capacity(metrics.len());
        for metric in metrics {
            by_id.entry(metric.id.clone()).or_insert_with(|| metric.clone());
        }
        Self {
            headcount,
            metrics: by_id,
        }
    }

    pub fn value(&self, metric_id: &str) -> Option<f64> {
        self.metrics.get(metric_id).map(|m| m.value)
    }
}

struct WeightedSum {
    name: String,
    unit: String,
    total: f64,
}

/// Round to 2 decimal places from the exact binary value.
///
/// Scaling by 100 first would round twice (`4.004999…` becomes `400.5`), so
/// the value goes through fixed-precision formatting instead. Exact ties
/// round to even: `10.125` gives `10.12`.
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Aggregate a subtree bottom-up.
///
/// - Leaf: own headcount and metrics, verbatim.
/// - Internal: headcount = Σ children; metric = round2(Σ value·headcount / Σ headcount).
///   Name and unit of a metric come from the first child that defines it.
/// - If the children's headcounts sum to 0 the node keeps its own headcount
///   and metrics.
///
/// On every node carrying a `revenue_per_cost` metric afterwards, `value` is
/// set to that metric's value.
pub fn aggregate(mut node: DepartmentNode) -> (DepartmentNode, Rollup) {
    if node.is_leaf() {
        sync_value(&mut node);
        let rollup = Rollup::of(node.headcount, &node.metrics);
        return (node, rollup);
    }

    let children = std::mem::take(&mut node.children);
    let mut aggregated = Vec::with_capacity(children.len());
    let mut total: u32 = 0;
    let mut sums: IndexMap<String, WeightedSum> = IndexMap::new();

    for child in children {
        let (child, rollup) = aggregate(child);
        total = total.saturating_add(rollup.headcount);
        let weight = f64::from(rollup.headcount);

        for (id, metric) in rollup.metrics {
            match sums.entry(id) {
                Entry::Occupied(mut slot) => {
                    let sum = slot.get_mut();
                    if sum.name != metric.name || sum.unit != metric.unit {
                        warn!(
                            "Metric '{}' under '{}': child '{}' names it '{}' ({}), keeping '{}' ({})",
                            metric.id, node.id, child.id, metric.name, metric.unit, sum.name, sum.unit
                        );
                    }
                    sum.total += metric.value * weight;
                }
                Entry::Vacant(slot) => {
                    slot.insert(WeightedSum {
                        name: metric.name,
                        unit: metric.unit,
                        total: metric.value * weight,
                    });
                }
            }
        }
        aggregated.push(child);
    }
    node.children = aggregated;

    if total > 0 {
        let divisor = f64::from(total);
        node.headcount = total;
        node.metrics = sums
            .into_iter()
            .map(|(id, sum)| MetricPoint {
                id,
                name: sum.name,
                value: round2(sum.total / divisor),
                unit: sum.unit,
            })
            .collect();
    }

    sync_value(&mut node);
    let rollup = Rollup::of(node.headcount, &node.metrics);
    (node, rollup)
}

/// Force the root's headline figure to match the summary card of the same id.
///
/// The root's `value` and its `revenue_per_cost` metric (value and unit) are
/// overwritten; the metric is appended if the root has none. Returns `false`
/// when there is no `revenue_per_cost` summary card to sync with.
pub fn sync_root_with_summary(root: &mut DepartmentNode, summary: &[MetricSummary]) -> bool {
    let Some(card) = summary.iter().find(|m| m.id == REVENUE_PER_COST) else {
        return false;
    };

    root.value = card.value;
    match root.metric_mut(REVENUE_PER_COST) {
        Some(metric) => {
            metric.value = card.value;
            metric.unit = card.unit.clone();
        }
        None => root.metrics.push(MetricPoint::new(
            REVENUE_PER_COST,
            card.name.clone(),
            card.value,
            card.unit.clone(),
        )),
    }
    true
}

fn sync_value(node: &mut DepartmentNode) {
    if let Some(value) = node.metric(REVENUE_PER_COST).map(|m| m.value) {
        node.value = value;
    }
}
