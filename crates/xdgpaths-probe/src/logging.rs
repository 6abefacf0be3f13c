use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};

pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn init(level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
        log::set_max_level(level);
        log::set_logger(Box::leak(Box::new(StderrLogger { level })))
            .map_err(|e| format!("Failed to set logger: {}", e))?;
        Ok(())
    }
}

pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn level_char(level: Level) -> char {
    match level {
        Level::Error => 'E',
        Level::Warn => 'W',
        Level::Info => 'I',
        Level::Debug => 'D',
        Level::Trace => 'T',
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let timestamp = Local::now().format("%H:%M:%S%.3f");
        eprintln!(
            "{} {} {} {}",
            timestamp,
            level_char(record.level()),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::Warn);
        assert_eq!(level_for_verbosity(1), LevelFilter::Debug);
        assert_eq!(level_for_verbosity(2), LevelFilter::Trace);
        assert_eq!(level_for_verbosity(9), LevelFilter::Trace);
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = StderrLogger {
            level: LevelFilter::Debug,
        };
        let debug = Metadata::builder().level(Level::Debug).build();
        let trace = Metadata::builder().level(Level::Trace).build();
        assert!(logger.enabled(&debug));
        assert!(!logger.enabled(&trace));
    }

    #[test]
    fn test_level_chars() {
        assert_eq!(level_char(Level::Error), 'E');
        assert_eq!(level_char(Level::Trace), 'T');
    }
}
