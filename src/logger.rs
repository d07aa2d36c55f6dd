// Minimal stderr logger for the command-line tool. The library only emits
// records through the `log` facade; installing this is the binary's job.

use std::{fmt, io::Write};

use log::{Level, LevelFilter, Log, Metadata, Record};

pub const ENV_VAR: &str = "THEME_KIT_LOG";

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = render_line(record.level(), record.target(), record.args());
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// `[LEVEL] target: message`, level right-aligned to five columns.
fn render_line(level: Level, target: &str, message: impl fmt::Display) -> String {
    format!("[{:>5}] {}: {}", level, target, message)
}

static LOGGER: StderrLogger = StderrLogger;

/// Level from `-v`/`-q` counts: 0 is info, each `-v` adds one step and
/// `-q` drops to warnings only.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Warn;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

/// Install the logger. `THEME_KIT_LOG` (e.g. `debug`) wins over `fallback`.
pub fn init(fallback: LevelFilter) {
    let level = std::env::var(ENV_VAR)
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(fallback);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
