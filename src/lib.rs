//! PSL Engine - Public Suffix List resolution for Rust
//!
//! This library splits a domain name into its public suffix (the part a
//! registry delegates under, such as `co.uk`) and the registrable part owned
//! by an end user. It provides:
//! - A reversed-domain rule trie per PSL section (ICANN, PRIVATE)
//! - Longest-match resolution with wildcard and exception rules
//! - IDN (punycode <-> Unicode) normalization of input and results
//! - Loading the list from text, files, nested-mapping JSON or HTTP
//!
//! # Example
//!
//! ```rust
//! use psl_engine_r::{parse_rules, Resolver, Section};
//!
//! let list = "
//! // ===BEGIN ICANN DOMAINS===
//! uk
//! co.uk
//! // ===END ICANN DOMAINS===
//! // ===BEGIN PRIVATE DOMAINS===
//! blogspot.co.uk
//! // ===END PRIVATE DOMAINS===
//! ";
//!
//! let resolver = Resolver::new(parse_rules(list).unwrap());
//!
//! let domain = resolver.resolve(Some("www.example.co.uk"), Section::All);
//! assert_eq!(domain.public_suffix().content().as_deref(), Some("co.uk"));
//! assert_eq!(domain.registrable_domain().as_deref(), Some("example.co.uk"));
//! assert_eq!(domain.sub_domain().as_deref(), Some("www"));
//!
//! let suffix = resolver
//!     .get_public_suffix(Some("foo.blogspot.co.uk"), Section::All)
//!     .unwrap();
//! assert!(suffix.is_private());
//! ```
//!
//! # Sections
//!
//! | Section | Result |
//! |---------|--------|
//! | `ALL_DOMAINS` | Private match if strictly longer than the ICANN match, else ICANN |
//! | `ICANN_DOMAINS` | ICANN match only |
//! | `PRIVATE_DOMAINS` | Private match if strictly longer than the ICANN match, else nothing |
//!
//! When nothing matches, the rightmost label is used as an unlisted suffix.
//!
//! # Errors
//!
//! [`Resolver::get_public_suffix`] fails with
//! [`PslError::InvalidDomainEncoding`], [`PslError::UnknownSection`] or
//! [`PslError::NotMatchable`]. [`Resolver::resolve`] never fails.

pub mod domain;
pub mod error;
pub mod idn;
pub mod labels;
pub mod loader;
pub mod matcher;
pub mod parser;
pub mod resolver;
pub mod rules;
pub mod types;

// Re-export commonly used items
pub use domain::{Domain, PublicSuffix};
pub use error::{LoadErrorKind, PslError, Result};
pub use labels::Labels;
pub use loader::{
    FileRuleLoader, MemoryRuleLoader, RuleFormat, RuleLoader, UrlRuleLoader, DEFAULT_PSL_URL,
};
pub use matcher::{match_section, SuffixMatcher};
pub use parser::{parse_rules, parse_rules_from_file};
pub use resolver::Resolver;
pub use rules::{RuleData, RuleNodeRef, RuleStore, RuleStoreBuilder, RuleTree};
pub use types::{ResolverOptions, Section};
