//! Public suffix resolver.
//!
//! Entry points for callers: [`Resolver::get_public_suffix`] reports every
//! failure, [`Resolver::resolve`] never fails and degrades to a domain without
//! a public suffix.

use std::sync::Arc;

use crate::domain::{Domain, PublicSuffix};
use crate::error::{PslError, Result};
use crate::loader::RuleLoader;
use crate::matcher::SuffixMatcher;
use crate::rules::RuleStore;
use crate::types::{ResolverOptions, Section};

/// Resolves domains against a shared, read-only [`RuleStore`].
#[derive(Debug, Clone)]
pub struct Resolver {
    rules: Arc<RuleStore>,
    options: ResolverOptions,
}

impl Resolver {
    /// Create a resolver with default options.
    pub fn new(rules: RuleStore) -> Self {
        Self::with_options(rules, ResolverOptions::default())
    }

    /// Create a resolver with explicit options.
    pub fn with_options(rules: RuleStore, options: ResolverOptions) -> Self {
        Self::from_shared(Arc::new(rules), options)
    }

    /// Create a resolver over a store that is already shared.
    pub fn from_shared(rules: Arc<RuleStore>, options: ResolverOptions) -> Self {
        Self { rules, options }
    }

    /// Load rules and create a resolver.
    pub fn from_loader(loader: &dyn RuleLoader, options: ResolverOptions) -> Result<Self> {
        let rules = loader.load()?;
        Ok(Self::with_options(rules, options))
    }

    pub fn rules(&self) -> &RuleStore {
        &self.rules
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Public suffix of `domain` under `section`.
    ///
    /// Fails with `InvalidDomainEncoding` on malformed input and with
    /// `NotMatchable` when the domain has fewer than two labels, or an empty
    /// one.
    pub fn get_public_suffix(&self, domain: Option<&str>, section: Section) -> Result<PublicSuffix> {
        let domain = Domain::parse(domain)?;
        self.find(&domain, section)
    }

    /// Same as [`get_public_suffix`](Self::get_public_suffix) with the
    /// section given by name (`ALL_DOMAINS`, `ICANN_DOMAINS`, `PRIVATE_DOMAINS`).
    pub fn get_public_suffix_by_name(&self, domain: Option<&str>, section: &str) -> Result<PublicSuffix> {
        let section: Section = section.parse()?;
        self.get_public_suffix(domain, section)
    }

    /// Public suffix of `domain` under the configured default section.
    pub fn public_suffix(&self, domain: Option<&str>) -> Result<PublicSuffix> {
        self.get_public_suffix(domain, self.options.default_section)
    }

    /// Domain with its public suffix attached.
    ///
    /// Invalid input yields an empty domain; a valid domain that cannot carry
    /// a suffix is returned without one.
    pub fn resolve(&self, domain: Option<&str>, section: Section) -> Domain {
        let parsed = match Domain::parse(domain) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(error = %e, "resolve degraded to an empty domain");
                return Domain::default();
            }
        };

        let public_suffix = match self.find(&parsed, section) {
            Ok(public_suffix) => public_suffix,
            Err(e) => {
                tracing::debug!(domain = %parsed, error = %e, "resolve without public suffix");
                return parsed;
            }
        };

        match parsed.clone().with_public_suffix(public_suffix) {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::debug!(domain = %parsed, error = %e, "resolve without public suffix");
                parsed
            }
        }
    }

    /// Same as [`resolve`](Self::resolve) with the section given by name.
    ///
    /// An unknown section name yields an empty domain.
    pub fn resolve_by_name(&self, domain: Option<&str>, section: &str) -> Domain {
        match section.parse::<Section>() {
            Ok(section) => self.resolve(domain, section),
            Err(e) => {
                tracing::debug!(error = %e, "resolve degraded to an empty domain");
                Domain::default()
            }
        }
    }

    /// Resolve under the configured default section.
    pub fn resolve_default(&self, domain: Option<&str>) -> Domain {
        self.resolve(domain, self.options.default_section)
    }

    fn find(&self, domain: &Domain, section: Section) -> Result<PublicSuffix> {
        if !domain.is_resolvable() {
            return Err(PslError::NotMatchable(format!(
                "'{}' needs at least two non-empty labels",
                domain
            )));
        }
        SuffixMatcher::new(&self.rules).find(domain, section)
    }
}
