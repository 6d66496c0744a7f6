//! IDN normalization between ASCII (punycode) and Unicode label forms.
//!
//! Conversion goes through UTS #46 processing, so ASCII labels come out
//! lowercased and Unicode labels come out mapped (e.g. `Ａ` -> `a`). Any
//! label that cannot be converted yields
//! [`PslError::InvalidDomainEncoding`].

use std::borrow::Cow;

use idna::AsciiDenyList;
use percent_encoding::percent_decode_str;

use crate::error::{PslError, Result};
use crate::labels::Labels;

/// ASCII-compatible encoding prefix of punycode labels.
pub const ACE_PREFIX: &str = "xn--";

/// Check whether a string carries the `xn--` marker anywhere (case-insensitive).
pub fn has_ace_marker(domain: &str) -> bool {
    domain
        .as_bytes()
        .windows(ACE_PREFIX.len())
        .any(|w| w.eq_ignore_ascii_case(ACE_PREFIX.as_bytes()))
}

/// Percent-decode domain input (`b%C3%BCcher.de` -> `bücher.de`).
pub fn percent_decode(input: &str) -> Result<Cow<'_, str>> {
    percent_decode_str(input).decode_utf8().map_err(|e| {
        PslError::InvalidDomainEncoding(format!("'{}' is not valid UTF-8 once decoded: {}", input, e))
    })
}

/// Convert a domain string to its ASCII form.
pub fn domain_to_ascii(domain: &str) -> Result<String> {
    if domain.is_empty() {
        return Ok(String::new());
    }
    idna::domain_to_ascii_cow(domain.as_bytes(), AsciiDenyList::URL)
        .map(Cow::into_owned)
        .map_err(|e| {
            PslError::InvalidDomainEncoding(format!("'{}' cannot be converted to ASCII: {:?}", domain, e))
        })
}

/// Convert a domain string to its Unicode form.
pub fn domain_to_unicode(domain: &str) -> Result<String> {
    if domain.is_empty() {
        return Ok(String::new());
    }
    let (unicode, result) = idna::domain_to_unicode(domain);
    result.map_err(|e| {
        PslError::InvalidDomainEncoding(format!("'{}' cannot be converted to Unicode: {:?}", domain, e))
    })?;
    Ok(unicode)
}

/// Apply punycode encoding to every non-ASCII label.
pub fn to_ascii(labels: &Labels) -> Result<Labels> {
    convert(labels, domain_to_ascii)
}

/// Decode every punycode label to Unicode.
pub fn to_unicode(labels: &Labels) -> Result<Labels> {
    convert(labels, domain_to_unicode)
}

fn convert(labels: &Labels, f: impl Fn(&str) -> Result<String>) -> Result<Labels> {
    match labels.content() {
        None => Ok(Labels::new()),
        Some(domain) => {
            let converted = f(domain.as_str())?;
            Ok(Labels::parse(Some(converted.as_str())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(s: &str) -> Labels {
        Labels::parse(Some(s))
    }

    #[test]
    fn test_ace_marker() {
        assert!(has_ace_marker("xn--85x722f.cn"));
        assert!(has_ace_marker("www.XN--bcher-kva.de"));
        assert!(!has_ace_marker("bücher.de"));
        assert!(!has_ace_marker("xn-"));
    }

    #[test]
    fn test_percent_decode() {
        assert_eq!(percent_decode("b%C3%BCcher.de").unwrap(), "bücher.de");
        assert_eq!(percent_decode("example.com").unwrap(), "example.com");
        assert!(matches!(
            percent_decode("%C3%28.com"),
            Err(PslError::InvalidDomainEncoding(_))
        ));
    }

    #[test]
    fn test_to_ascii() {
        assert_eq!(
            to_ascii(&labels("食狮.公司.cn")).unwrap().to_string(),
            "xn--85x722f.xn--55qx5d.cn"
        );
        assert_eq!(
            to_ascii(&labels("bücher.de")).unwrap().to_string(),
            "xn--bcher-kva.de"
        );
    }

    #[test]
    fn test_to_ascii_passes_ascii_through() {
        assert_eq!(
            to_ascii(&labels("www.example.com")).unwrap(),
            labels("www.example.com")
        );
        assert_eq!(
            to_ascii(&labels("xn--bcher-kva.de")).unwrap(),
            labels("xn--bcher-kva.de")
        );
    }

    #[test]
    fn test_to_ascii_lowercases() {
        assert_eq!(
            to_ascii(&labels("WWW.Example.COM")).unwrap().to_string(),
            "www.example.com"
        );
    }

    #[test]
    fn test_to_unicode() {
        assert_eq!(
            to_unicode(&labels("xn--85x722f.xn--55qx5d.cn"))
                .unwrap()
                .to_string(),
            "食狮.公司.cn"
        );
        assert_eq!(
            to_unicode(&labels("www.example.com")).unwrap(),
            labels("www.example.com")
        );
    }

    #[test]
    fn test_empty_sequences() {
        assert!(to_ascii(&Labels::new()).unwrap().is_empty());
        assert!(to_unicode(&Labels::new()).unwrap().is_empty());
        assert_eq!(to_ascii(&labels("")).unwrap(), labels(""));
    }

    #[test]
    fn test_round_trip() {
        for domain in ["食狮.公司.cn", "xn--85x722f.xn--55qx5d.cn", "bücher.de", "example.com"] {
            let l = labels(domain);
            let ascii = to_ascii(&l).unwrap();
            let unicode = to_unicode(&l).unwrap();
            assert_eq!(to_ascii(&unicode).unwrap(), ascii, "{}", domain);
            assert_eq!(to_unicode(&ascii).unwrap(), unicode, "{}", domain);
        }
    }

    #[test]
    fn test_invalid_encoding() {
        assert!(matches!(
            to_ascii(&labels("exa mple.com")),
            Err(PslError::InvalidDomainEncoding(_))
        ));
        assert!(matches!(
            to_unicode(&labels("xn--a.com")),
            Err(PslError::InvalidDomainEncoding(_))
        ));
    }
}
