use crate::domain_name::DomainName;

/// URL scheme probed by a protocol check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Root path URL of `domain` under this scheme, e.g. `https://example.com/`
    pub fn root_url(&self, domain: &DomainName) -> String {
        format!("{}://{}/", self.as_str(), domain)
    }
}
