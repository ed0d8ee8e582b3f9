//! Help texts

/// Commands available inside the interactive loop
pub const INLINE_HELP: &str = "\
Commands:
  /edit               Edit the last log entry
  /delete             Delete the last log entry
  /list               Show the last 10 entries
  /list N             Show the last N entries
  /q                  Quit
  /help               Show this help message
";

/// Full command-line usage
pub const USAGE: &str = "\
Usage: notr [options]

Options:
  -c                  Start continuous input mode (one log per line, press Ctrl+D to finish)
  -l                  List logs from the past 24 hours
  --since YYYY-MM-DD  Show logs since given date
  --search TEXT       Filter logs by keyword
  --tag TAG           Filter logs by tag (e.g. deploy for #deploy)
  --export FILE       Export logs to a file
  -h                  Show this help message

Commands in -c mode:
  /edit               Edit the last log entry
  /delete             Delete the last log entry
  /list               Show the last 10 entries
  /list N             Show the last N entries
  /q                  Quit
  /help               Show this help message
";

/// Banner printed when the interactive loop starts
pub const BANNER: &str = "Enter log messages. Use /q to quit. Ctrl+D also works.";
