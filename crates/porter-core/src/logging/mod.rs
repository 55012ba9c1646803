use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// Events are written as JSON to stderr so stdout stays clean for CLI output.
/// When `quiet` is true, only error-level events are emitted.
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::from_default_env().add_directive(log_directive(quiet));

    // try_init: the UI and tests may both attempt to install a subscriber.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .try_init();
}

fn log_directive(quiet: bool) -> Directive {
    let directive = if quiet { "porter=error" } else { "porter=info" };
    directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into())
}
