// Wed Aug 05 2026 - Alex

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Install the stderr logger. `RUST_LOG` takes over when set, otherwise the
/// colored logger runs at warn level (debug with `--verbose`).
pub fn init(verbose: bool) {
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
        return;
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    log::set_boxed_logger(Box::new(ColoredLogger { level })).ok();
    log::set_max_level(level);
}

struct ColoredLogger {
    level: LevelFilter,
}

impl ColoredLogger {
    fn format_level(level: Level) -> ColoredString {
        match level {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".green().bold(),
            Level::Debug => "DEBUG".blue().bold(),
            Level::Trace => "TRACE".magenta().bold(),
        }
    }
}

impl Log for ColoredLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{} {}",
                Self::format_level(record.level()),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}
