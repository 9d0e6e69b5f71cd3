use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber filtered by the `CONSOLE_LOG` environment variable.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_env("CONSOLE_LOG").unwrap_or_default();
  let _ = tracing_subscriber::fmt() // Ignore error ok: another test may have installed the subscriber already.
    .with_env_filter(filter)
    .with_test_writer()
    .try_init();
}
