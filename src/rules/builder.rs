use std::collections::HashMap;

use super::data::{RuleData, RuleTree, EMPTY_WILDCARD_KEY, EXCEPTION_KEY, WILDCARD_KEY};
use super::{NodeId, RuleNode, RuleStore};
use crate::error::{PslError, Result};
use crate::idn;
use crate::types::Section;

/// Builder for [`RuleStore`]
#[derive(Debug, Clone)]
pub struct RuleStoreBuilder {
    nodes: Vec<RuleNode>,
    icann: NodeId,
    private: NodeId,
}

impl Default for RuleStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleStoreBuilder {
    /// Create a builder with two empty section roots.
    pub fn new() -> Self {
        Self {
            nodes: vec![RuleNode::default(), RuleNode::default()],
            icann: 0,
            private: 1,
        }
    }

    /// Add one PSL rule (`co.uk`, `*.ck`, `!www.ck`) to a section.
    ///
    /// Labels are normalized to lowercase ASCII. A `*` is only accepted as the
    /// leftmost label and never together with `!`.
    pub fn add_rule(&mut self, section: Section, rule: &str) -> Result<&mut Self> {
        let root = self.section_root(section)?;
        let rule = rule.trim();

        let (exception, body) = match rule.strip_prefix('!') {
            Some(body) => (true, body),
            None => (false, rule),
        };
        let (wildcard, body) = if body == WILDCARD_KEY {
            (true, "")
        } else if let Some(body) = body.strip_prefix("*.") {
            (true, body)
        } else {
            (false, body)
        };

        if exception && wildcard {
            return Err(PslError::InvalidRule(format!(
                "'{}' combines an exception with a wildcard",
                rule
            )));
        }
        if body.is_empty() && !wildcard {
            return Err(PslError::InvalidRule(format!("'{}' has no labels", rule)));
        }
        if body.contains('*') || body.contains('!') {
            return Err(PslError::InvalidRule(format!(
                "'{}' has a marker outside the leftmost position",
                rule
            )));
        }

        let labels = if body.is_empty() {
            Vec::new()
        } else {
            normalize_rule_labels(rule, body)?
        };

        let mut node = root;
        for label in labels.iter().rev() {
            node = self.child_or_insert(node, label);
        }
        if wildcard {
            self.nodes[node].wildcard = true;
        }
        if exception {
            self.nodes[node].exception = true;
        }
        Ok(self)
    }

    /// Merge a nested rule mapping into the builder.
    pub fn add_data(&mut self, data: &RuleData) -> Result<&mut Self> {
        for (name, tree) in data {
            let section: Section = name.parse()?;
            let root = self.section_root(section)?;
            self.add_tree(root, tree, name)?;
        }
        Ok(self)
    }

    /// Finish building.
    pub fn build(self) -> RuleStore {
        RuleStore::from_parts(self.nodes, self.icann, self.private)
    }

    fn add_tree(&mut self, parent: NodeId, tree: &RuleTree, path: &str) -> Result<()> {
        for (key, child) in &tree.0 {
            match key.as_str() {
                WILDCARD_KEY | EMPTY_WILDCARD_KEY => {
                    if !child.0.is_empty() {
                        return Err(PslError::InvalidRule(format!(
                            "wildcard under '{}' has children",
                            path
                        )));
                    }
                    self.nodes[parent].wildcard = true;
                }
                EXCEPTION_KEY => {
                    self.nodes[parent].exception = true;
                }
                label => {
                    let normalized = normalize_rule_labels(label, label)?;
                    if normalized.len() != 1 {
                        return Err(PslError::InvalidRule(format!(
                            "'{}' under '{}' is not a single label",
                            label, path
                        )));
                    }
                    let id = self.child_or_insert(parent, &normalized[0]);
                    let child_path = format!("{}.{}", label, path);
                    self.add_tree(id, child, &child_path)?;
                }
            }
        }
        Ok(())
    }

    fn section_root(&self, section: Section) -> Result<NodeId> {
        match section {
            Section::Icann => Ok(self.icann),
            Section::Private => Ok(self.private),
            Section::All => Err(PslError::InvalidRule(format!(
                "rules belong to {} or {}, not {}",
                Section::ICANN_DOMAINS,
                Section::PRIVATE_DOMAINS,
                Section::ALL_DOMAINS
            ))),
        }
    }

    fn child_or_insert(&mut self, parent: NodeId, label: &str) -> NodeId {
        if let Some(&id) = self.nodes[parent].children.get(label) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(RuleNode {
            children: HashMap::new(),
            wildcard: false,
            exception: false,
        });
        self.nodes[parent].children.insert(label.to_string(), id);
        id
    }
}

/// Lowercase ASCII labels of a rule body, natural order.
fn normalize_rule_labels(rule: &str, body: &str) -> Result<Vec<String>> {
    let ascii = idn::domain_to_ascii(body)
        .map_err(|e| PslError::InvalidRule(format!("'{}': {}", rule, e)))?;
    let labels: Vec<String> = ascii.split('.').map(str::to_string).collect();
    if labels.iter().any(String::is_empty) {
        return Err(PslError::InvalidRule(format!(
            "'{}' contains an empty label",
            rule
        )));
    }
    Ok(labels)
}
