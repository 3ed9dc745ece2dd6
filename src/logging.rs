//! Diagnostic logging setup
//!
//! Events go to stderr so stdout stays clean for payloads and recovered
//! phrases. Secrets are never part of any event.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive: RUST_LOG, then verbosity flags, then the setting
pub fn filter_directive(verbosity: u8, configured: &str) -> String {
    if let Ok(env) = std::env::var(EnvFilter::DEFAULT_ENV) {
        if !env.is_empty() {
            return env;
        }
    }
    match verbosity {
        0 => configured.to_string(),
        1 => "seedlock=info".to_string(),
        _ => "seedlock=debug".to_string(),
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
