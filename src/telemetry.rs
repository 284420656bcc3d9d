/// Initializes structured logging for the binary.
///
/// Verbosity is controlled by `RUST_LOG` (e.g. `RUST_LOG=orderdesk=debug`);
/// with nothing set only errors are shown. Logs are written to stderr so
/// stdout only ever carries responses.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
