//! Diagnostic logging
//!
//! Diagnostics go to stderr through the `log` facade so they never mix with
//! journal output on stdout. The level comes from `NOTR_LOG` and defaults to
//! `warn`.

use flexi_logger::{Logger, LoggerHandle};
use log::info;

/// Environment variable selecting the diagnostic level
pub const LOG_LEVEL_ENV: &str = "NOTR_LOG";

/// Level used when `NOTR_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Start the stderr logger at `level`
///
/// The returned handle must be kept alive for the lifetime of the program.
pub fn init_logging(level: &str) -> Result<LoggerHandle, String> {
    let level = normalize_level(level)?;
    let handle = Logger::try_with_str(level)
        .map_err(|e| format!("invalid log level `{}`: {}", level, e))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|e| format!("failed to start logger: {}", e))?;

    info!(
        "event=app_start version={} level={}",
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(handle)
}

/// Level from `NOTR_LOG`, or the default
pub fn level_from_env() -> String {
    std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Ok("off"),
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{}`; expected off|trace|debug|info|warn|error",
            other
        )),
    }
}
