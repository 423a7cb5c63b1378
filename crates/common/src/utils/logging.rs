use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Default directives when `RUST_LOG` is unset. Pizza operation events come
/// from `service`; `sea_orm` stays at `warn` unless asked for, e.g.
/// `RUST_LOG=info,sea_orm=debug` to see SQL statements.
pub const DEFAULT_FILTER: &str = "info,service=info,models=info,sea_orm=warn,tower_http=info,axum=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Compact human-readable output on stdout.
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// One JSON object per event on stdout, span fields included.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .json()
        .with_current_span(true)
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the formatter from `LOG_FORMAT` (`json` or anything else for compact).
pub fn init_logging_from_env() {
    match std::env::var("LOG_FORMAT") {
        Ok(v) if v.eq_ignore_ascii_case("json") => init_logging_json(),
        _ => init_logging_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        let filter = EnvFilter::try_new(DEFAULT_FILTER).expect("valid directives");
        assert!(filter.to_string().contains("sea_orm=warn"));
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging_default();
        init_logging_json();
    }
}
