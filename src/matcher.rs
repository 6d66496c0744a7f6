//! Longest-match suffix resolution against the rule store.
//!
//! Each section is matched on its own by walking the domain's labels
//! TLD-first. At every node:
//!
//! 1. an exception for the label ends the match without taking the label,
//! 2. a wildcard takes the label and ends the match,
//! 3. a concrete child takes the label and the walk descends,
//! 4. anything else ends the match.
//!
//! The per-section results are then combined according to the requested
//! [`Section`].

use crate::domain::{Domain, PublicSuffix};
use crate::error::Result;
use crate::idn;
use crate::labels::Labels;
use crate::rules::{RuleNodeRef, RuleStore};
use crate::types::Section;

/// Match TLD-first `labels` against one section root.
///
/// Returns the matched labels, still TLD-first; empty when nothing matched.
pub fn match_section<'l, I>(labels: I, root: RuleNodeRef<'_>) -> Vec<&'l str>
where
    I: IntoIterator<Item = &'l str>,
{
    let mut matched = Vec::new();
    let mut node = root;
    for label in labels {
        if node.has_exception_for(label) {
            break;
        }
        if node.has_wildcard() {
            matched.push(label);
            break;
        }
        match node.child(label) {
            Some(child) => {
                matched.push(label);
                node = child;
            }
            None => break,
        }
    }
    matched
}

/// Suffix matcher over a borrowed rule store.
#[derive(Debug, Clone, Copy)]
pub struct SuffixMatcher<'a> {
    rules: &'a RuleStore,
}

impl<'a> SuffixMatcher<'a> {
    pub fn new(rules: &'a RuleStore) -> Self {
        Self { rules }
    }

    /// Public suffix of `domain` under `section`.
    ///
    /// Falls back to the TLD with no section when no rule matches. The result
    /// is in Unicode form unless the domain itself is in ASCII form.
    pub fn find(&self, domain: &Domain, section: Section) -> Result<PublicSuffix> {
        let ascii = idn::to_ascii(domain.labels())?;

        let icann = self.match_in(&ascii, Section::Icann);
        let private = self.match_in(&ascii, Section::Private);
        tracing::trace!(
            domain = %domain,
            icann = icann.len(),
            private = private.len(),
            "matched sections"
        );

        let (matched, tag) = match section {
            Section::Icann => (icann, Section::Icann),
            Section::Private if private.len() > icann.len() => (private, Section::Private),
            Section::Private => (Vec::new(), Section::Private),
            Section::All if private.len() > icann.len() => (private, Section::Private),
            Section::All => (icann, Section::Icann),
        };

        let public_suffix = if matched.is_empty() {
            PublicSuffix::new(ascii.tail(1), None)
        } else {
            PublicSuffix::new(
                Labels::from_reversed(matched.into_iter().map(str::to_string).collect()),
                Some(tag),
            )
        };

        let in_ascii_form = domain.content().is_some_and(|d| idn::has_ace_marker(&d));
        if in_ascii_form {
            Ok(public_suffix)
        } else {
            public_suffix.to_unicode()
        }
    }

    fn match_in<'l>(&self, ascii: &'l Labels, section: Section) -> Vec<&'l str> {
        match self.rules.root(section) {
            Some(root) => match_section(ascii.iter(), root),
            None => Vec::new(),
        }
    }
}
