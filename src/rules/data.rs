use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key marking a wildcard below a node.
pub(crate) const WILDCARD_KEY: &str = "*";
/// Alternate wildcard key produced by some converters.
pub(crate) const EMPTY_WILDCARD_KEY: &str = "";
/// Key marking the node itself as an exception.
pub(crate) const EXCEPTION_KEY: &str = "!";

/// One level of the nested rule mapping: label -> child mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTree(pub BTreeMap<String, RuleTree>);

/// Nested rule mapping keyed by section name (`ICANN_DOMAINS`, `PRIVATE_DOMAINS`).
///
/// This is the interchange format between a list converter and the
/// [`RuleStore`](super::RuleStore):
///
/// ```json
/// {"ICANN_DOMAINS": {"ck": {"*": {}, "www": {"!": {}}}}}
/// ```
pub type RuleData = BTreeMap<String, RuleTree>;
