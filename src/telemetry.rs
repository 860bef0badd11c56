//! Tracing subscriber setup shared by all binaries.

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `log_level`. `log_format` selects
/// human-readable (`text`) or structured (`json`) output.
pub fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match log_format {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };

    if let Err(e) = installed {
        eprintln!("Tracing subscriber already installed: {e}");
    }
}
