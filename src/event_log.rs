//! Optional JSONL event log.
//!
//! The terminal owns stdout, so the game reports what happened to a file,
//! one JSON object per line. A write failure turns the log off for the rest
//! of the run; play continues.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::Config;
use crate::core::SessionEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRecord {
    SessionReset {
        reason: &'static str,
        rows: usize,
    },
    PieceLocked {
        piece: &'static str,
        x: i32,
        y: i32,
    },
    LinesCleared {
        count: u32,
        lines: u32,
        score: u64,
    },
    LevelChanged {
        from: usize,
        to: usize,
    },
    GameOver {
        score: u64,
        lines: u32,
        level: usize,
    },
    Resized {
        cols: u16,
        rows: u16,
    },
    Quit {
        score: u64,
        lines: u32,
        level: usize,
    },
}

impl From<SessionEvent> for LogRecord {
    fn from(event: SessionEvent) -> Self {
        match event {
            SessionEvent::Reset { reason, rows } => LogRecord::SessionReset {
                reason: reason.as_str(),
                rows,
            },
            SessionEvent::Locked { kind, x, y } => LogRecord::PieceLocked {
                piece: kind.as_str(),
                x,
                y,
            },
            SessionEvent::LinesCleared {
                count,
                lines,
                score,
            } => LogRecord::LinesCleared {
                count,
                lines,
                score,
            },
            SessionEvent::LevelChanged { from, to } => LogRecord::LevelChanged { from, to },
            SessionEvent::GameOver {
                score,
                lines,
                level,
            } => LogRecord::GameOver {
                score,
                lines,
                level,
            },
        }
    }
}

#[derive(Serialize)]
struct Entry<'a> {
    seq: u64,
    #[serde(flatten)]
    record: &'a LogRecord,
}

pub struct EventLog {
    writer: Option<Box<dyn Write>>,
    buf: Vec<u8>,
    seq: u64,
}

impl EventLog {
    /// A log that drops everything
    pub fn disabled() -> Self {
        Self {
            writer: None,
            buf: Vec::new(),
            seq: 0,
        }
    }

    /// Append to the file at `path`, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {path}"))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    pub fn from_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            writer: Some(Box::new(writer)),
            buf: Vec::with_capacity(256),
            seq: 0,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        match config.log_path.as_deref() {
            Some(path) => Self::open(path),
            None => Ok(Self::disabled()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Records written so far
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn record(&mut self, record: &LogRecord) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };

        self.buf.clear();
        let entry = Entry {
            seq: self.seq,
            record,
        };
        if serde_json::to_writer(&mut self.buf, &entry).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if writer.write_all(&self.buf).is_err() {
            self.writer = None;
            return;
        }
        self.seq += 1;
    }

    pub fn flush(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            if writer.flush().is_err() {
                self.writer = None;
            }
        }
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        self.flush();
    }
}
