use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LogFormat {
    /// One short human-readable line per event.
    #[default]
    Compact,
    /// JSON lines, for hosts that ship logs to a collector.
    Json,
}

/// Directive used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "cedricia_client=debug,info"
    } else {
        "cedricia_client=info"
    }
}

/// Installs the global subscriber. Call once, from the binary.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // Exactly one of the two layers is present.
    let (compact, json) = match format {
        LogFormat::Compact => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .compact(),
            ),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .json()
                    .with_current_span(false),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(compact)
        .with(json)
        .init();
}
