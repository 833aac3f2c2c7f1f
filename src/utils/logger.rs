use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const QUIET_DIRECTIVES: &str = "dataset_convert=warn";
const VERBOSE_DIRECTIVES: &str = "dataset_convert=debug,info";

/// `RUST_LOG` wins over the flag when set.
fn cli_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        VERBOSE_DIRECTIVES
    } else {
        QUIET_DIRECTIVES
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Status lines own stdout; every log event goes to stderr without
/// timestamps or targets.
pub fn init_cli_logger(verbose: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(cli_filter(verbose))
        .with(fmt_layer)
        .init();
}
