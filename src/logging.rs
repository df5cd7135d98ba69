use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directives override, e.g. `GOSCAFFOLD_LOG=goscaffold=trace`
pub const LOG_ENV: &str = "GOSCAFFOLD_LOG";

/// Install the stderr subscriber. Safe to call more than once.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(verbose));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("goscaffold=debug")
    } else {
        EnvFilter::new("goscaffold=warn")
    }
}
