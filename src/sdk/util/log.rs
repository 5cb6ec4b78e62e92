use std::env;
use env_logger::Builder;

/// Filter variable read before `RUST_LOG`.
pub const LOG_ENV: &str = "TRIP_COST_LOG";

const CRATE_TARGET: &str = "trip_cost";

/// Installs the global logger. Everything else is capped at warn so the HTTP
/// stack stays quiet unless a filter variable says otherwise; `verbose`
/// lifts this crate to debug on top of any configured filter.
pub fn init_logging(verbose: bool) {
    let configured = env::var(LOG_ENV).or_else(|_| env::var("RUST_LOG")).ok();
    let spec = filter_spec(verbose, configured);

    let installed = Builder::new()
        .parse_filters(&spec)
        .format_timestamp_secs()
        .format_module_path(false)
        .try_init();
    if installed.is_err() {
        log::debug!("Logger already installed, ignoring filter {:?}", spec);
    }
}

fn filter_spec(verbose: bool, configured: Option<String>) -> String {
    let configured = configured
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    match (configured, verbose) {
        (Some(spec), false) => spec,
        (Some(spec), true) => format!("{},{}=debug", spec, CRATE_TARGET),
        (None, false) => format!("warn,{}=info", CRATE_TARGET),
        (None, true) => format!("warn,{}=debug", CRATE_TARGET),
    }
}
