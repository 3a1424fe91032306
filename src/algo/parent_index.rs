//! Department id → parent id index
//!
//! Built once from the final (aggregated) tree. Ids never change after the
//! rollup, so the index stays valid for the rest of the process.

use crate::org::DepartmentNode;
use rustc_hash::FxHashMap;

/// Flat parent lookup for ancestor walks
#[derive(Debug, Clone, Default)]
pub struct ParentIndex {
    parents: FxHashMap<String, Option<String>>,
    root: String,
}

impl ParentIndex {
    /// Build the index by pre-order traversal. The root maps to `None`.
    pub fn build(root: &DepartmentNode) -> Self {
        let mut parents = FxHashMap::default();
        let mut stack: Vec<(&DepartmentNode, Option<&str>)> = vec![(root, None)];

        while let Some((node, parent)) = stack.pop() {
            parents.insert(node.id.clone(), parent.map(str::to_string));
            for child in node.children.iter().rev() {
                stack.push((child, Some(node.id.as_str())));
            }
        }

        Self {
            parents,
            root: root.id.clone(),
        }
    }

    /// `None` if the id is unknown, `Some(None)` for the root
    pub fn parent_of(&self, id: &str) -> Option<Option<&str>> {
        self.parents.get(id).map(|p| p.as_deref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.parents.contains_key(id)
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Walk upward from `id`: parent, grandparent, ..., root.
    /// Empty for the root and for unknown ids.
    pub fn ancestors<'a>(&'a self, id: &str) -> Ancestors<'a> {
        let next = self.parents.get(id).and_then(|p| p.as_deref());
        Ancestors {
            index: self,
            next,
            remaining: self.parents.len(),
        }
    }
}

/// Iterator returned by [`ParentIndex::ancestors`]
pub struct Ancestors<'a> {
    index: &'a ParentIndex,
    next: Option<&'a str>,
    // Bounded by the number of departments so a malformed index cannot loop
    remaining: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.next?;
        self.next = self.index.parents.get(current).and_then(|p| p.as_deref());
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::DeptStatus;

    fn tree() -> DepartmentNode {
        DepartmentNode::new("hq", "HQ", "L0", DeptStatus::Good)
            .with_child(
                DepartmentNode::new("east", "East", "L1", DeptStatus::Warn)
                    .with_child(DepartmentNode::new("east-a", "East A", "L2", DeptStatus::Good))
                    .with_child(DepartmentNode::new("east-b", "East B", "L3", DeptStatus::Bad)),
            )
            .with_child(DepartmentNode::new("north", "North", "L4", DeptStatus::Good))
    }

    #[test]
    fn test_build_parent_index() {
        let index = ParentIndex::build(&tree());
        assert_eq!(index.len(), 5);
        assert_eq!(index.root(), "hq");
        assert_eq!(index.parent_of("hq"), Some(None));
        assert_eq!(index.parent_of("east"), Some(Some("hq")));
        assert_eq!(index.parent_of("east-b"), Some(Some("east")));
        assert_eq!(index.parent_of("nowhere"), None);
    }

    #[test]
    fn test_ancestors() {
        let index = ParentIndex::build(&tree());
        let chain: Vec<&str> = index.ancestors("east-a").collect();
        assert_eq!(chain, vec!["east", "hq"]);
        assert_eq!(index.ancestors("hq").count(), 0);
        assert_eq!(index.ancestors("unknown").count(), 0);
    }
}
