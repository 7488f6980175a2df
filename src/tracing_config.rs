use std::env;

use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

const FORMAT_VAR: &str = "MPRIS_LOG_FORMAT";

/// Initialize tracing for `mpris-ctl`
///
/// Uses RUST_LOG if set, otherwise only warnings reach stderr so command
/// output stays clean. Set MPRIS_LOG_FORMAT=json for JSON lines.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init() -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    if wants_json(env::var(FORMAT_VAR).ok().as_deref()) {
        registry.with(layer.json()).try_init()
    } else {
        registry.with(layer.compact()).try_init()
    }
}

fn wants_json(format: Option<&str>) -> bool {
    format.is_some_and(|format| format.eq_ignore_ascii_case("json"))
}
