//! Telemetry helpers for hosts embedding `slide-deck`.
//!
//! Tracing setup stays explicit and opt-in: call `init_default_tracing`
//! or install your own `tracing` subscriber before driving a deck.

/// Installs a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter comes from `RUST_LOG` and falls back to `slide_deck=info`.
/// Output goes to stderr so tools can keep stdout for JSON.
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed by the host.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("slide_deck=info")),
            )
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
