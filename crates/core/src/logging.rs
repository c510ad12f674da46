//! Logging initialization.
//!
//! All Provenant components log through `tracing`; this module owns
//! subscriber setup so every binary and test harness configures it the same
//! way. The filter comes from `RUST_LOG`, falling back to `info`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initializes human-readable logging.
///
/// Panics if a global subscriber is already installed; use [`try_init`] in
/// contexts where one may be.
///
/// # Example
/// ```no_run
/// use provenant_core::logging;
///
/// logging::init();
/// tracing::info!("Trust layer started");
/// ```
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(true))
        .init();
}

/// Initializes JSON logging for log-aggregation environments.
pub fn init_json() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().json().with_target(true))
        .init();
}

/// Installs the human-readable subscriber unless one is already set.
///
/// Returns whether this call installed it. Intended for test harnesses,
/// where any test may have initialized logging first.
pub fn try_init() -> bool {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}
