use reachd_domain::check_result::is_reachable_status;
use reachd_domain::{DomainCheckResult, DomainName, FetchOutcome, ProtocolCheck, ResolveOutcome};
use std::net::IpAddr;

fn success(status_code: u16) -> FetchOutcome {
    FetchOutcome::Success {
        status_code,
        final_url: "https://example.com/".to_string(),
    }
}

#[test]
fn test_reachable_status_boundaries() {
    assert!(!is_reachable_status(199));
    assert!(is_reachable_status(200));
    assert!(is_reachable_status(301));
    assert!(is_reachable_status(399));
    assert!(!is_reachable_status(400));
    assert!(!is_reachable_status(404));
    assert!(!is_reachable_status(503));
}

#[test]
fn test_protocol_check_success_sets_status_and_requested_url() {
    let check = ProtocolCheck::from_outcome("http://example.com/", success(200));

    assert!(check.ok);
    assert_eq!(check.status_code, Some(200));
    assert_eq!(check.url.as_deref(), Some("http://example.com/"));
    assert!(check.error.is_none());
}

#[test]
fn test_protocol_check_reports_requested_url_not_final_url() {
    let check = ProtocolCheck::from_outcome("http://example.com/", success(200));
    assert_ne!(check.url.as_deref(), Some("https://example.com/"));
}

#[test]
fn test_protocol_check_error_status_is_not_ok() {
    let check = ProtocolCheck::from_outcome("https://example.com/", success(500));

    assert!(!check.ok);
    assert_eq!(check.status_code, Some(500));
    assert!(check.error.is_none());
}

#[test]
fn test_protocol_check_failure_sets_error_only() {
    let check = ProtocolCheck::from_outcome(
        "https://example.com/",
        FetchOutcome::failure("connection refused"),
    );

    assert!(!check.ok);
    assert!(check.status_code.is_none());
    assert!(check.url.is_none());
    assert_eq!(check.error.as_deref(), Some("connection refused"));
}

#[test]
fn test_result_ip_present_iff_resolved() {
    let domain = DomainName::parse("example.com").unwrap();
    let http = ProtocolCheck::from_outcome("http://example.com/", success(200));
    let https = ProtocolCheck::from_outcome("https://example.com/", success(200));

    let address: IpAddr = "93.184.216.34".parse().unwrap();
    let resolved = DomainCheckResult::new(
        domain.clone(),
        &ResolveOutcome::Resolved { address },
        http.clone(),
        https.clone(),
    );
    assert!(resolved.dns_resolves);
    assert_eq!(resolved.ip, Some(address));

    let unresolved = DomainCheckResult::new(
        domain,
        &ResolveOutcome::unresolved("no such host"),
        http,
        https,
    );
    assert!(!unresolved.dns_resolves);
    assert!(unresolved.ip.is_none());
}
