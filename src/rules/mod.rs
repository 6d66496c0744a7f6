//! Rule store: the PSL as a reversed-domain trie per section.
//!
//! Nodes live in a flat arena and refer to their children by index. The two
//! PSL markers are flags on the node instead of reserved child keys:
//!
//! - `wildcard` on a node means any single label below it matches (`*.ck`
//!   sets it on `ck`).
//! - `exception` on a node means the path up to its parent is the final
//!   match (`!www.ck` sets it on `ck` -> `www`).
//!
//! ## Example
//!
//! ```
//! use psl_engine_r::rules::RuleStoreBuilder;
//! use psl_engine_r::Section;
//!
//! let mut builder = RuleStoreBuilder::new();
//! builder.add_rule(Section::Icann, "*.ck").unwrap();
//! builder.add_rule(Section::Icann, "!www.ck").unwrap();
//! let store = builder.build();
//!
//! let ck = store.root(Section::Icann).unwrap().child("ck").unwrap();
//! assert!(ck.has_wildcard());
//! assert!(ck.has_exception_for("www"));
//! ```

mod builder;
mod data;

pub use builder::RuleStoreBuilder;
pub use data::{RuleData, RuleTree};

use std::collections::HashMap;

use crate::error::Result;
use crate::types::Section;

/// Index of a node in the rule arena
pub type NodeId = usize;

#[derive(Debug, Clone, Default)]
pub(crate) struct RuleNode {
    pub(crate) children: HashMap<String, NodeId>,
    pub(crate) wildcard: bool,
    pub(crate) exception: bool,
}

/// Immutable PSL rule trie, one root per section.
///
/// Built once and then only read; share it across threads freely.
#[derive(Debug, Clone)]
pub struct RuleStore {
    nodes: Vec<RuleNode>,
    icann: NodeId,
    private: NodeId,
}

impl Default for RuleStore {
    fn default() -> Self {
        Self {
            nodes: vec![RuleNode::default(), RuleNode::default()],
            icann: 0,
            private: 1,
        }
    }
}

impl RuleStore {
    /// Start building a rule store.
    pub fn builder() -> RuleStoreBuilder {
        RuleStoreBuilder::new()
    }

    /// Build a rule store from the nested-mapping form.
    pub fn from_data(data: &RuleData) -> Result<Self> {
        let mut builder = RuleStoreBuilder::new();
        builder.add_data(data)?;
        Ok(builder.build())
    }

    /// Build a rule store from nested-mapping JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: RuleData = serde_json::from_str(json)?;
        Self::from_data(&data)
    }

    /// Export the nested-mapping form of this store.
    pub fn to_data(&self) -> RuleData {
        let mut data = RuleData::new();
        for section in [Section::Icann, Section::Private] {
            if let Some(root) = self.root(section) {
                data.insert(section.as_str().to_string(), root.to_tree());
            }
        }
        data
    }

    /// Root node of a section.
    ///
    /// Only `Icann` and `Private` have a root; `All` is a resolution policy,
    /// not a section of the list.
    pub fn root(&self, section: Section) -> Option<RuleNodeRef<'_>> {
        let id = match section {
            Section::Icann => self.icann,
            Section::Private => self.private,
            Section::All => return None,
        };
        Some(RuleNodeRef { store: self, id })
    }

    /// Total number of nodes, roots included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check if neither section holds a rule
    pub fn is_empty(&self) -> bool {
        [self.icann, self.private].iter().all(|&id| {
            let node = &self.nodes[id];
            node.children.is_empty() && !node.wildcard
        })
    }

    pub(crate) fn from_parts(nodes: Vec<RuleNode>, icann: NodeId, private: NodeId) -> Self {
        Self {
            nodes,
            icann,
            private,
        }
    }

    fn node(&self, id: NodeId) -> &RuleNode {
        &self.nodes[id]
    }
}

/// Read-only view of one trie node.
#[derive(Debug, Clone, Copy)]
pub struct RuleNodeRef<'a> {
    store: &'a RuleStore,
    id: NodeId,
}

impl<'a> RuleNodeRef<'a> {
    /// Arena index of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// True when `label` below this node is an exception rule.
    pub fn has_exception_for(&self, label: &str) -> bool {
        self.child(label).is_some_and(|child| child.is_exception())
    }

    /// True when any single label below this node matches.
    pub fn has_wildcard(&self) -> bool {
        self.store.node(self.id).wildcard
    }

    /// True when this node terminates an exception rule.
    pub fn is_exception(&self) -> bool {
        self.store.node(self.id).exception
    }

    /// Concrete child for `label`.
    pub fn child(&self, label: &str) -> Option<RuleNodeRef<'a>> {
        self.store
            .node(self.id)
            .children
            .get(label)
            .map(|&id| RuleNodeRef {
                store: self.store,
                id,
            })
    }

    /// Number of concrete children.
    pub fn child_count(&self) -> usize {
        self.store.node(self.id).children.len()
    }

    fn to_tree(self) -> RuleTree {
        let node = self.store.node(self.id);
        let mut tree = RuleTree::default();
        if node.wildcard {
            tree.0.insert(data::WILDCARD_KEY.to_string(), RuleTree::default());
        }
        if node.exception {
            tree.0.insert(data::EXCEPTION_KEY.to_string(), RuleTree::default());
        }
        for (label, &id) in &node.children {
            let child = RuleNodeRef {
                store: self.store,
                id,
            };
            tree.0.insert(label.clone(), child.to_tree());
        }
        tree
    }
}
