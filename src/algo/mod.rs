//! Tree algorithms over the organization tree
//!
//! - `rollup`: headcount-weighted metric aggregation, bottom-up
//! - `parent_index`: id → parent id map for ancestor walks
//! - `search`: name / leader substring search in pre-order
//!
//! All of these run over plain `DepartmentNode` trees and hold no state.

pub mod parent_index;
pub mod rollup;
pub mod search;

pub use parent_index::{Ancestors, ParentIndex};
pub use rollup::{aggregate, round2, sync_root_with_summary, Rollup};
pub use search::search;
