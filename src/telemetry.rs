//! Opt-in tracing bootstrap.
//!
//! The engine and controllers emit `tracing` events (set-projects counts,
//! pan transitions, settled search queries) but never install a subscriber
//! themselves; a host that wants the quick default calls
//! `init_default_tracing`, anything else wires its own subscriber.

/// Installs an env-filtered compact subscriber when the `telemetry` feature
/// is enabled.
///
/// Returns `true` on success, `false` when the feature is off or the host
/// already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
