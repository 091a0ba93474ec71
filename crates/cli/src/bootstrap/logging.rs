use reachd_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    if config.logging.json {
        builder.json().init();
    } else {
        builder.with_ansi(true).init();
    }

    info!(
        level = %config.logging.level,
        json = config.logging.json,
        bind = %config.server.bind_address,
        port = config.server.port,
        connect_timeout_ms = config.probe.connect_timeout_ms,
        request_timeout_ms = config.probe.request_timeout_ms,
        dns_timeout_ms = config.probe.dns_timeout_ms,
        max_redirects = config.probe.max_redirects,
        "Configuration loaded"
    );
}
