//! Console output: the event printer and the stderr logger.

use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record};
use lotsim_engine::{EventSink, SimEvent};

// ── PrintSink ──────────────────────────────────────────────────────

/// Writes one line per event.
///
/// [`EventSink::emit`] cannot fail, so the first write error is held
/// and later events are dropped. [`finish`](Self::finish) surfaces it.
pub struct PrintSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> PrintSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Flush and return the first write error, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> EventSink for PrintSink<W> {
    fn emit(&mut self, event: SimEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{event}") {
            self.error = Some(e);
        }
    }
}

// ── Logger ─────────────────────────────────────────────────────────

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Level for a `-v` count: warn, info, then debug.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Install the stderr logger and set its level.
///
/// Returns `false` if another logger was already installed; the level is
/// applied either way.
pub fn init_logger(verbosity: u8) -> bool {
    let installed = log::set_logger(&LOGGER).is_ok();
    log::set_max_level(level_for(verbosity));
    installed
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotsim_core::{Car, CarType, Cell, TickId};

    #[test]
    fn prints_one_line_per_event() {
        let mut sink = PrintSink::new(Vec::new());
        sink.emit(SimEvent::Entered {
            car: Car::new(CarType::Regular),
            cell: Cell::new(1, 2),
            tick: TickId(4),
            occupancy: 1,
        });
        sink.emit(SimEvent::Exited {
            car: Car::new(CarType::Regular),
            tick: TickId(9),
            occupancy: 0,
        });
        let out = String::from_utf8(sink.finish().unwrap()).unwrap();
        assert_eq!(
            out,
            "REGULAR ENTERED at timestep 4; occupancy is at 1\n\
             REGULAR EXITED at timestep 9; occupancy is at 0\n"
        );
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn first_write_error_is_kept() {
        let mut sink = PrintSink::new(Broken);
        let event = SimEvent::Exited {
            car: Car::new(CarType::Small),
            tick: TickId(0),
            occupancy: 0,
        };
        sink.emit(event);
        sink.emit(event);
        let err = sink.finish().err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn second_install_keeps_first_logger() {
        init_logger(0);
        assert!(!init_logger(1));
        assert_eq!(log::max_level(), LevelFilter::Info);
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(7), LevelFilter::Debug);
    }
}
