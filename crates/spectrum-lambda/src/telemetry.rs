//! Tracing initialization.
//!
//! `RUST_LOG` controls the filter. Output is JSON (for CloudWatch) unless
//! `LOG_FORMAT=pretty`.

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

pub fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}
