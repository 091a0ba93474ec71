use crate::errors::DomainError;
use std::fmt;
use std::sync::Arc;

/// A normalized probe target.
///
/// Parsing accepts what users tend to paste into a form: surrounding
/// whitespace, a leading `http://` or `https://`, and a trailing path are
/// all dropped, and the remainder is lowercased. Nothing beyond emptiness is
/// validated; a syntactically odd name simply fails to resolve later.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName(Arc<str>);

const SCHEME_PREFIXES: [&str; 2] = ["http://", "https://"];

impl DomainName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let mut s = raw.trim();

        for prefix in SCHEME_PREFIXES {
            if let Some(head) = s.get(..prefix.len()) {
                if head.eq_ignore_ascii_case(prefix) {
                    s = &s[prefix.len()..];
                    break;
                }
            }
        }

        let host = s.split('/').next().unwrap_or_default().trim();
        if host.is_empty() {
            return Err(DomainError::EmptyDomain);
        }

        Ok(Self(Arc::from(host.to_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
