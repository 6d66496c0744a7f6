//! Resolution results: [`PublicSuffix`] and [`Domain`].

use std::fmt;

use crate::error::{PslError, Result};
use crate::idn;
use crate::labels::Labels;
use crate::types::Section;

/// Public suffix of a domain, tagged with the PSL section it came from.
///
/// An empty suffix (no labels, no section) means nothing was found. A suffix
/// without a section is a fallback that no rule backs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PublicSuffix {
    labels: Labels,
    section: Option<Section>,
}

impl PublicSuffix {
    /// Create a suffix from its labels and originating section.
    ///
    /// `section` is expected to be `Icann`, `Private` or `None`.
    pub fn new(labels: Labels, section: Option<Section>) -> Self {
        let section = if labels.is_empty() { None } else { section };
        Self { labels, section }
    }

    /// Suffix with no content.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Suffix text, `None` when nothing was found.
    pub fn content(&self) -> Option<String> {
        self.labels.content()
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Section the matching rule lives in.
    pub fn section(&self) -> Option<Section> {
        self.section
    }

    /// Check if a PSL rule backs this suffix
    pub fn is_known(&self) -> bool {
        self.section.is_some()
    }

    pub fn is_icann(&self) -> bool {
        self.section == Some(Section::Icann)
    }

    pub fn is_private(&self) -> bool {
        self.section == Some(Section::Private)
    }

    /// ASCII (punycode) form of this suffix.
    pub fn to_ascii(&self) -> Result<Self> {
        Ok(Self {
            labels: idn::to_ascii(&self.labels)?,
            section: self.section,
        })
    }

    /// Unicode form of this suffix.
    pub fn to_unicode(&self) -> Result<Self> {
        Ok(Self {
            labels: idn::to_unicode(&self.labels)?,
            section: self.section,
        })
    }
}

impl fmt::Display for PublicSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.labels, f)
    }
}

/// A domain name with its (optional) public suffix attached.
///
/// The attached suffix is always a trailing subsequence of the domain's
/// labels, or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Domain {
    labels: Labels,
    public_suffix: PublicSuffix,
}

impl Domain {
    /// Parse domain input.
    ///
    /// Percent-encoded input is decoded first. The result is lowercased and
    /// kept in ASCII form when the input carries an `xn--` label, Unicode form
    /// otherwise. `None` yields a domain with no labels.
    pub fn parse(domain: Option<&str>) -> Result<Self> {
        let Some(domain) = domain else {
            return Ok(Self::default());
        };
        let decoded = idn::percent_decode(domain)?;
        let ascii = idn::domain_to_ascii(&decoded)?;
        let normalized = if idn::has_ace_marker(&decoded) {
            ascii
        } else {
            idn::domain_to_unicode(&ascii)?
        };
        Ok(Self {
            labels: Labels::parse(Some(normalized.as_str())),
            public_suffix: PublicSuffix::empty(),
        })
    }

    /// Attach a public suffix, checking it ends this domain.
    pub fn with_public_suffix(mut self, public_suffix: PublicSuffix) -> Result<Self> {
        if !self.labels.ends_with(public_suffix.labels()) {
            return Err(PslError::PublicSuffixMismatch {
                domain: self.labels.to_string(),
                suffix: public_suffix.to_string(),
            });
        }
        self.public_suffix = public_suffix;
        Ok(self)
    }

    /// Domain text, `None` for a domain with no labels.
    pub fn content(&self) -> Option<String> {
        self.labels.content()
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Label at a natural-order index; negative indices count from the right.
    pub fn label(&self, index: isize) -> Option<&str> {
        self.labels.label(index)
    }

    pub fn public_suffix(&self) -> &PublicSuffix {
        &self.public_suffix
    }

    /// Check whether this domain can carry a public suffix at all: at least
    /// two labels and none of them empty.
    pub fn is_resolvable(&self) -> bool {
        self.labels.len() >= 2 && self.labels.iter().all(|l| !l.is_empty())
    }

    /// Public suffix plus one label, if the domain is longer than its suffix.
    pub fn registrable_domain(&self) -> Option<String> {
        self.registrable_labels().content()
    }

    /// Labels left of the registrable domain.
    pub fn sub_domain(&self) -> Option<String> {
        let registrable = self.registrable_labels();
        if registrable.is_empty() {
            return None;
        }
        self.labels.head(registrable.len()).content()
    }

    pub fn is_known(&self) -> bool {
        self.public_suffix.is_known()
    }

    pub fn is_icann(&self) -> bool {
        self.public_suffix.is_icann()
    }

    pub fn is_private(&self) -> bool {
        self.public_suffix.is_private()
    }

    /// ASCII form of the domain and its suffix.
    pub fn to_ascii(&self) -> Result<Self> {
        Ok(Self {
            labels: idn::to_ascii(&self.labels)?,
            public_suffix: self.public_suffix.to_ascii()?,
        })
    }

    /// Unicode form of the domain and its suffix.
    pub fn to_unicode(&self) -> Result<Self> {
        Ok(Self {
            labels: idn::to_unicode(&self.labels)?,
            public_suffix: self.public_suffix.to_unicode()?,
        })
    }

    fn registrable_labels(&self) -> Labels {
        let suffix_len = self.public_suffix.len();
        if suffix_len == 0 || self.labels.len() <= suffix_len {
            return Labels::new();
        }
        self.labels.tail(suffix_len + 1)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.labels, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix(s: &str, section: Option<Section>) -> PublicSuffix {
        PublicSuffix::new(Labels::parse(Some(s)), section)
    }

    #[test]
    fn test_empty_public_suffix() {
        let ps = PublicSuffix::empty();
        assert_eq!(ps.content(), None);
        assert!(!ps.is_known());
        assert!(ps.is_empty());
        // Section is dropped when there is nothing to tag
        assert_eq!(PublicSuffix::new(Labels::new(), Some(Section::Icann)).section(), None);
    }

    #[test]
    fn test_public_suffix_predicates() {
        let icann = suffix("co.uk", Some(Section::Icann));
        assert!(icann.is_known() && icann.is_icann() && !icann.is_private());
        let private = suffix("github.io", Some(Section::Private));
        assert!(private.is_known() && private.is_private() && !private.is_icann());
        let fallback = suffix("localhost", None);
        assert!(!fallback.is_known());
        assert_eq!(fallback.content().as_deref(), Some("localhost"));
    }

    #[test]
    fn test_public_suffix_idn_keeps_section() {
        let ps = suffix("公司.cn", Some(Section::Icann));
        let ascii = ps.to_ascii().unwrap();
        assert_eq!(ascii.to_string(), "xn--55qx5d.cn");
        assert_eq!(ascii.section(), Some(Section::Icann));
        assert_eq!(ascii.to_unicode().unwrap(), ps);
    }

    #[test]
    fn test_parse_none_and_empty() {
        let none = Domain::parse(None).unwrap();
        assert_eq!(none.content(), None);
        assert_eq!(none.labels().len(), 0);

        let empty = Domain::parse(Some("")).unwrap();
        assert_eq!(empty.content().as_deref(), Some(""));
        assert_eq!(empty.labels().len(), 1);
        assert!(!empty.is_resolvable());
    }

    #[test]
    fn test_parse_normalizes_form() {
        assert_eq!(
            Domain::parse(Some("WWW.Example.COM")).unwrap().to_string(),
            "www.example.com"
        );
        assert_eq!(
            Domain::parse(Some("xn--85x722f.xn--55qx5d.cn")).unwrap().to_string(),
            "xn--85x722f.xn--55qx5d.cn"
        );
        assert_eq!(
            Domain::parse(Some("食狮.公司.cn")).unwrap().to_string(),
            "食狮.公司.cn"
        );
    }

    #[test]
    fn test_parse_percent_encoded() {
        let domain = Domain::parse(Some("b%C3%BCcher.de")).unwrap();
        assert_eq!(domain.to_string(), "bücher.de");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            Domain::parse(Some("exa mple.com")),
            Err(PslError::InvalidDomainEncoding(_))
        ));
        assert!(matches!(
            Domain::parse(Some("%FF.com")),
            Err(PslError::InvalidDomainEncoding(_))
        ));
    }

    #[test]
    fn test_resolvable() {
        assert!(Domain::parse(Some("example.com")).unwrap().is_resolvable());
        assert!(!Domain::parse(Some("com")).unwrap().is_resolvable());
        assert!(!Domain::parse(Some("example.com.")).unwrap().is_resolvable());
        assert!(!Domain::parse(None).unwrap().is_resolvable());
    }

    #[test]
    fn test_registrable_and_sub_domain() {
        let domain = Domain::parse(Some("a.b.example.co.uk"))
            .unwrap()
            .with_public_suffix(suffix("co.uk", Some(Section::Icann)))
            .unwrap();
        assert_eq!(domain.registrable_domain().as_deref(), Some("example.co.uk"));
        assert_eq!(domain.sub_domain().as_deref(), Some("a.b"));
        assert!(domain.is_icann());
    }

    #[test]
    fn test_no_sub_domain() {
        let domain = Domain::parse(Some("example.com"))
            .unwrap()
            .with_public_suffix(suffix("com", Some(Section::Icann)))
            .unwrap();
        assert_eq!(domain.registrable_domain().as_deref(), Some("example.com"));
        assert_eq!(domain.sub_domain(), None);
    }

    #[test]
    fn test_domain_equal_to_suffix() {
        let domain = Domain::parse(Some("co.uk"))
            .unwrap()
            .with_public_suffix(suffix("co.uk", Some(Section::Icann)))
            .unwrap();
        assert_eq!(domain.registrable_domain(), None);
        assert_eq!(domain.sub_domain(), None);
    }

    #[test]
    fn test_without_suffix() {
        let domain = Domain::parse(Some("www.example.com")).unwrap();
        assert_eq!(domain.registrable_domain(), None);
        assert_eq!(domain.sub_domain(), None);
        assert!(!domain.is_known());
    }

    #[test]
    fn test_suffix_mismatch() {
        let result = Domain::parse(Some("example.com"))
            .unwrap()
            .with_public_suffix(suffix("org", None));
        assert!(matches!(
            result,
            Err(PslError::PublicSuffixMismatch { .. })
        ));
    }

    #[test]
    fn test_domain_idn_conversion() {
        let domain = Domain::parse(Some("www.食狮.公司.cn"))
            .unwrap()
            .with_public_suffix(suffix("公司.cn", Some(Section::Icann)))
            .unwrap();
        let ascii = domain.to_ascii().unwrap();
        assert_eq!(ascii.to_string(), "www.xn--85x722f.xn--55qx5d.cn");
        assert_eq!(ascii.public_suffix().to_string(), "xn--55qx5d.cn");
        assert_eq!(
            ascii.registrable_domain().as_deref(),
            Some("xn--85x722f.xn--55qx5d.cn")
        );
        assert_eq!(ascii.to_unicode().unwrap(), domain);
    }

    #[test]
    fn test_label_access() {
        let domain = Domain::parse(Some("www.example.com")).unwrap();
        assert_eq!(domain.label(0), Some("www"));
        assert_eq!(domain.label(-1), Some("com"));
        assert_eq!(domain.label(5), None);
    }
}
