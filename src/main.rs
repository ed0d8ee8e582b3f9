//! notr - Binary Entry Point
//!
//! `-c` starts the interactive loop, `-l` runs a one-shot query, anything
//! else prints usage.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::error;

use notr::query::{export_entries, parse_since, QueryEngine, ScanFilter};
use notr::session::{help, Session};
use notr::store::LogStore;
use notr::utils::SystemClock;
use notr::{logging, Config, NotrResult};

/// CLI args
#[derive(Parser, Debug)]
#[command(name = "notr", disable_help_flag = true)]
struct Args {
    /// Start continuous input mode
    #[arg(short = 'c')]
    continuous: bool,

    /// List logs (past 24 hours unless --since is given)
    #[arg(short = 'l')]
    list: bool,

    /// Show usage
    #[arg(short = 'h')]
    help: bool,

    /// Show logs since this date (YYYY-MM-DD)
    #[arg(long)]
    since: Option<String>,

    /// Keep only logs containing this text (case-insensitive)
    #[arg(long)]
    search: Option<String>,

    /// Keep only logs containing #TAG
    #[arg(long)]
    tag: Option<String>,

    /// Write matching logs to this file
    #[arg(long)]
    export: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Usage,
    Interactive,
    Query,
}

impl Args {
    /// `-h` beats `-c`, which beats `-l`
    fn mode(&self) -> Mode {
        if self.help {
            Mode::Usage
        } else if self.continuous {
            Mode::Interactive
        } else if self.list {
            Mode::Query
        } else {
            Mode::Usage
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let _logger = match logging::init_logging(&logging::level_from_env()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: diagnostics disabled: {}", e);
            None
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("event=command_failed error={}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> NotrResult<()> {
    let mode = args.mode();
    if mode == Mode::Usage {
        print!("{}", help::USAGE);
        return Ok(());
    }

    let config = Config::load()?;
    let store = LogStore::open(config.store_config(), Arc::new(SystemClock))?;

    if mode == Mode::Interactive {
        let stdin = io::stdin();
        let mut session =
            Session::new(&store, stdin.lock(), io::stdout()).with_list_count(config.list_count);
        return session.run();
    }

    let since = args.since.as_deref().map(parse_since).transpose()?;
    let filter = ScanFilter {
        since,
        search: args.search,
        tag: args.tag,
    };

    let engine = QueryEngine::with_window_hours(&store, config.window_hours);
    let entries = engine.scan(&filter)?;

    let mut stdout = io::stdout().lock();
    for entry in &entries {
        writeln!(stdout, "{}", entry.raw)?;
    }

    if let Some(path) = args.export {
        export_entries(&entries, &path)?;
        writeln!(stdout, "Logs exported to {}", path.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode_of(argv: &[&str]) -> Mode {
        Args::try_parse_from(argv).unwrap().mode()
    }

    #[test]
    fn test_mode_precedence() {
        assert_eq!(mode_of(&["notr"]), Mode::Usage);
        assert_eq!(mode_of(&["notr", "-h"]), Mode::Usage);
        assert_eq!(mode_of(&["notr", "-h", "-c", "-l"]), Mode::Usage);
        assert_eq!(mode_of(&["notr", "-c", "-l"]), Mode::Interactive);
        assert_eq!(mode_of(&["notr", "-l", "--tag", "deploy"]), Mode::Query);
        assert_eq!(mode_of(&["notr", "--search", "x"]), Mode::Usage);
    }

    #[test]
    fn test_usage_does_not_read_config() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "window_hours = \"broken\"\n").unwrap();
        std::env::set_var(notr::config::CONFIG_PATH_ENV, &config_path);

        let result = run(Args::try_parse_from(["notr", "-h"]).unwrap());
        let loaded = Config::load();
        std::env::remove_var(notr::config::CONFIG_PATH_ENV);

        assert!(result.is_ok());
        assert!(loaded.is_err());
    }
}
