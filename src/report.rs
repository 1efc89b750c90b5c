//! Per-file report lines on stdout.
//!
//! A reader that goes away early (`assetforge | head -1`) stops the output but
//! not the conversion.

use std::io::{self, Write};

use tracing::warn;

use crate::convert::FileOutcome;

/// Writes one line per [`FileOutcome`], going quiet after a broken pipe.
pub struct LineReporter<W: Write> {
    out: W,
    open: bool,
}

impl<W: Write> LineReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, open: true }
    }

    pub fn report(&mut self, outcome: &FileOutcome) {
        if !self.open {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", outcome).and_then(|()| self.out.flush()) {
            self.open = false;
            if e.kind() != io::ErrorKind::BrokenPipe {
                warn!("Failed to write report line: {}", e);
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl LineReporter<io::StdoutLock<'static>> {
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}
