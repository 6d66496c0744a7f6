//! Label sequence shared by [`Domain`](crate::Domain) and
//! [`PublicSuffix`](crate::PublicSuffix).
//!
//! Labels are stored TLD-first (`com`, `example`, `www`), which is the order
//! the rule trie is walked in. Indexed access uses natural order.

use std::fmt;

/// Dot-separated domain labels.
///
/// `Labels::parse(None)` has zero labels while `Labels::parse(Some(""))` has
/// exactly one empty label, so "no domain" and "empty domain" stay distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Labels {
    /// Labels in reversed (TLD-first) order
    reversed: Vec<String>,
}

impl Labels {
    /// Create an empty label sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a domain string on `.`.
    pub fn parse(domain: Option<&str>) -> Self {
        match domain {
            None => Self::default(),
            Some(domain) => Self {
                reversed: domain.rsplit('.').map(str::to_string).collect(),
            },
        }
    }

    /// Build from labels already in TLD-first order.
    pub fn from_reversed(reversed: Vec<String>) -> Self {
        Self { reversed }
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.reversed.len()
    }

    /// Check if there are no labels at all
    pub fn is_empty(&self) -> bool {
        self.reversed.is_empty()
    }

    /// Label at a natural-order index.
    ///
    /// Negative indices count from the right, so `-1` is the TLD. Anything
    /// out of range yields `None`.
    pub fn label(&self, index: isize) -> Option<&str> {
        let len = self.reversed.len() as isize;
        let natural = if index < 0 { len + index } else { index };
        if natural < 0 || natural >= len {
            return None;
        }
        let reversed = (len - 1 - natural) as usize;
        self.reversed.get(reversed).map(String::as_str)
    }

    /// Natural-order indices of every label equal to `label`.
    pub fn indices_of(&self, label: &str) -> Vec<usize> {
        self.natural()
            .enumerate()
            .filter(|(_, l)| *l == label)
            .map(|(i, _)| i)
            .collect()
    }

    /// Labels in TLD-first order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + Clone {
        self.reversed.iter().map(String::as_str)
    }

    /// Labels in natural (left-to-right) order.
    pub fn natural(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + Clone {
        self.iter().rev()
    }

    /// TLD-first slice of the labels.
    pub fn as_reversed(&self) -> &[String] {
        &self.reversed
    }

    /// The first `count` labels from the right, as a new sequence.
    pub fn tail(&self, count: usize) -> Self {
        let count = count.min(self.reversed.len());
        Self {
            reversed: self.reversed[..count].to_vec(),
        }
    }

    /// The leading labels left after dropping `count` labels from the right.
    pub fn head(&self, count: usize) -> Self {
        let count = count.min(self.reversed.len());
        Self {
            reversed: self.reversed[count..].to_vec(),
        }
    }

    /// Check whether `other` is a trailing subsequence of these labels.
    pub fn ends_with(&self, other: &Labels) -> bool {
        self.reversed.starts_with(&other.reversed)
    }

    /// Joined domain string, or `None` when there are no labels.
    pub fn content(&self) -> Option<String> {
        if self.reversed.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.natural().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(label)?;
        }
        Ok(())
    }
}
