use std::net::IpAddr;

/// Result of a single hostname lookup.
///
/// Resolver adapters never return errors: every failure mode (NXDOMAIN,
/// timeout, malformed name) is folded into `Unresolved`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    Resolved { address: IpAddr },
    Unresolved { reason: String },
}

impl ResolveOutcome {
    pub fn unresolved(reason: impl Into<String>) -> Self {
        Self::Unresolved {
            reason: reason.into(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    pub fn address(&self) -> Option<IpAddr> {
        match self {
            Self::Resolved { address } => Some(*address),
            Self::Unresolved { .. } => None,
        }
    }
}

/// Result of a single HTTP GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A response was received. `final_url` is where the redirect chain ended.
    Success { status_code: u16, final_url: String },
    /// No response: connection, TLS, timeout or redirect-limit failure.
    Failure { reason: String },
}

impl FetchOutcome {
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Success { status_code, .. } => Some(*status_code),
            Self::Failure { .. } => None,
        }
    }
}
