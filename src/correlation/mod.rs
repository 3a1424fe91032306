//! Correlation / root-cause data attached to departments
//!
//! Each entry is a factor statistically associated with efficiency. Entry sets
//! are attached to a handful of departments; everyone else inherits from the
//! nearest ancestor that has one (see [`resolver`]).

pub mod resolver;

use serde::{Deserialize, Serialize};

pub use resolver::CorrelationResolver;

/// Sign of a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    /// Direction implied by a coefficient. Zero counts as positive.
    pub fn of(coefficient: f64) -> Self {
        if coefficient < 0.0 {
            Direction::Negative
        } else {
            Direction::Positive
        }
    }

    /// Whether this direction is consistent with `coefficient`
    pub fn agrees_with(self, coefficient: f64) -> bool {
        coefficient == 0.0 || Direction::of(coefficient) == self
    }
}

/// One labelled figure behind a correlation entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationDetail {
    pub rule: String,
    #[serde(default)]
    pub breakdown: Vec<BreakdownItem>,
}

/// A factor correlated with efficiency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationEntry {
    pub id: String,
    pub name: String,
    /// Pearson coefficient in [-1, 1]
    pub coefficient: f64,
    pub direction: Direction,
    pub description: String,
    pub value: f64,
    pub detail: CorrelationDetail,
}

impl CorrelationEntry {
    /// Build an entry whose direction is derived from the coefficient
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coefficient: f64,
        description: impl Into<String>,
        value: f64,
        detail: CorrelationDetail,
    ) -> Self {
        CorrelationEntry {
            id: id.into(),
            name: name.into(),
            coefficient,
            direction: Direction::of(coefficient),
            description: description.into(),
            value,
            detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_sign() {
        assert_eq!(Direction::of(-0.86), Direction::Negative);
        assert_eq!(Direction::of(0.9), Direction::Positive);
        assert!(Direction::Negative.agrees_with(0.0));
        assert!(!Direction::Positive.agrees_with(-0.2));
    }

    #[test]
    fn test_entry_serialization() {
        let entry = CorrelationEntry::new(
            "attrition",
            "离职率",
            -0.86,
            "离职率上升显著拖累人效",
            0.11,
            CorrelationDetail {
                rule: "离职人数 ÷ 平均在职人数".to_string(),
                breakdown: vec![BreakdownItem { label: "离职人数".to_string(), value: 16.0 }],
            },
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["direction"], "negative");
        assert_eq!(json["detail"]["breakdown"][0]["label"], "离职人数");
    }
}
