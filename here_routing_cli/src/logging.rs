use tracing_subscriber::EnvFilter;

/// `--debug` wins over `RUST_LOG` (which `.env.local` may set); without either, log at INFO.
pub fn log_filter(directives: Option<&str>, debug: bool) -> EnvFilter {
    match (debug, directives) {
        (true, _) => EnvFilter::new("debug"),
        (false, Some(directives)) => EnvFilter::new(directives),
        (false, None) => EnvFilter::new("info"),
    }
}

pub fn init(debug: bool) {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref(), debug))
        .init();
}
