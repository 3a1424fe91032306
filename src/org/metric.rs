//! Metric types: per-department metric points and the flat summary cards

use serde::{Deserialize, Serialize};

/// Metric id of the headline efficiency KPI (revenue per unit of labor cost)
pub const REVENUE_PER_COST: &str = "revenue_per_cost";

/// One metric value attached to a department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub id: String,
    pub name: String,
    pub value: f64,
    #[serde(default)]
    pub unit: String,
}

impl MetricPoint {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
    ) -> Self {
        MetricPoint {
            id: id.into(),
            name: name.into(),
            value,
            unit: unit.into(),
        }
    }
}

/// A labelled point in a metric history (e.g. one month)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
}

impl HistoryPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        HistoryPoint {
            label: label.into(),
            value,
            ratio: None,
        }
    }
}

/// Direction of the year-over-year movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Rule, target and history behind a summary card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDetail {
    pub rule: String,
    pub baseline: f64,
    pub attainment: f64,
    #[serde(default)]
    pub history: Vec<HistoryPoint>,
}

/// Top-level dashboard card, independent of the org tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub unit: String,
    /// Year-over-year change as a ratio (0.078 = +7.8%)
    pub yoy: f64,
    pub trend: Trend,
    pub detail: MetricDetail,
}

impl MetricSummary {
    /// Latest history point, if any
    pub fn latest(&self) -> Option<&HistoryPoint> {
        self.detail.history.last()
    }
}
