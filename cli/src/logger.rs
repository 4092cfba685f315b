use ansi_term::{Color, Style};
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Writes diagnostics to stderr as `[LEVEL] message` lines.
///
/// The prover only emits `error`, `warn` and `info` records, so those are
/// the only levels that get a color of their own.
pub struct Logger;

impl Logger {
    fn style(level: Level) -> Style {
        match level {
            Level::Error => Color::Red.bold(),
            Level::Warn => Color::Yellow.bold(),
            Level::Info => Color::Cyan.bold(),
            Level::Debug | Level::Trace => Style::new(),
        }
    }
}

impl Log for Logger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let level = record.level();
        let prefix = Self::style(level).paint(format!("[{}]", level));
        eprintln!("{} {}", prefix, record.args());
    }

    fn flush(&self) {}
}

pub fn init(max_level: LevelFilter) {
    log::set_boxed_logger(Box::new(Logger)).expect("couldn't set up logger");
    log::set_max_level(max_level);
}
