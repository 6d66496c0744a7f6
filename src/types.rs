use std::fmt;
use std::str::FromStr;

use crate::error::PslError;

/// PSL section selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// Both sections; a strictly longer private match overrides ICANN
    #[default]
    All,
    /// Suffixes delegated through the ICANN root
    Icann,
    /// Suffixes submitted by organizations for their own subdomains
    Private,
}

impl Section {
    pub const ALL_DOMAINS: &'static str = "ALL_DOMAINS";
    pub const ICANN_DOMAINS: &'static str = "ICANN_DOMAINS";
    pub const PRIVATE_DOMAINS: &'static str = "PRIVATE_DOMAINS";

    /// Constant name of this section
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::All => Self::ALL_DOMAINS,
            Section::Icann => Self::ICANN_DOMAINS,
            Section::Private => Self::PRIVATE_DOMAINS,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = PslError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            Self::ALL_DOMAINS => Ok(Section::All),
            Self::ICANN_DOMAINS => Ok(Section::Icann),
            Self::PRIVATE_DOMAINS => Ok(Section::Private),
            _ => Err(PslError::UnknownSection(format!(
                "'{}' is not one of {}, {}, {}",
                s,
                Self::ALL_DOMAINS,
                Self::ICANN_DOMAINS,
                Self::PRIVATE_DOMAINS
            ))),
        }
    }
}

/// Resolver options.
#[derive(Debug, Clone, Default)]
pub struct ResolverOptions {
    /// Section used by the entry points that take no explicit section
    pub default_section: Section,
}

impl ResolverOptions {
    /// Create new resolver options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default section.
    pub fn with_default_section(mut self, section: Section) -> Self {
        self.default_section = section;
        self
    }
}
