//! Session journal: one JSON object per line, appended as the session runs.
//!
//! Record types (the `type` field):
//! - `session_start`: game, seed, timestamp
//! - `lock`: every piece lock in the block stacker
//! - `game_over`: final score (plus level/lines/board hash for blocks)
//! - `session_end`: timestamp and number of finished games
//!
//! The journal is write-only. A failed write disables it for the rest of the
//! session instead of interrupting play.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{GameSnapshot, SnakeSnapshot};
use crate::types::LockEvent;

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record<'a> {
    SessionStart {
        game: &'a str,
        seed: u32,
        ts_ms: u64,
    },
    Lock(LockEvent),
    GameOver {
        game: &'a str,
        score: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        level: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        lines: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        board_hash: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        length: Option<u32>,
        ts_ms: u64,
    },
    SessionEnd {
        game: &'a str,
        games_finished: u32,
        ts_ms: u64,
    },
}

pub struct Journal<W: Write = File> {
    out: Option<W>,
    buf: Vec<u8>,
    games_finished: u32,
}

impl Journal<File> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open journal {}", path.display()))?;
        Ok(Self::from_writer(file))
    }

    /// A journal that records nothing.
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
            games_finished: 0,
        }
    }
}

impl<W: Write> Journal<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out: Some(out),
            buf: Vec::with_capacity(512),
            games_finished: 0,
        }
    }

    pub fn enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn games_finished(&self) -> u32 {
        self.games_finished
    }

    pub fn session_start(&mut self, game: &str, seed: u32) {
        self.write(&Record::SessionStart {
            game,
            seed,
            ts_ms: now_ms(),
        });
    }

    pub fn lock(&mut self, event: LockEvent) {
        self.write(&Record::Lock(event));
    }

    pub fn blocks_over(&mut self, snap: &GameSnapshot) {
        self.games_finished += 1;
        self.write(&Record::GameOver {
            game: "blocks",
            score: snap.score,
            level: Some(snap.level),
            lines: Some(snap.lines),
            board_hash: Some(snap.board_hash),
            length: None,
            ts_ms: now_ms(),
        });
    }

    pub fn snake_over(&mut self, snap: &SnakeSnapshot) {
        self.games_finished += 1;
        self.write(&Record::GameOver {
            game: "snake",
            score: snap.score,
            level: None,
            lines: None,
            board_hash: None,
            length: Some(snap.segments.len() as u32),
            ts_ms: now_ms(),
        });
    }

    pub fn session_end(&mut self, game: &str) {
        let games_finished = self.games_finished;
        self.write(&Record::SessionEnd {
            game,
            games_finished,
            ts_ms: now_ms(),
        });
        if let Some(out) = self.out.as_mut() {
            let _ = out.flush();
        }
    }

    fn write(&mut self, record: &Record<'_>) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if let Err(e) = out.write_all(&self.buf) {
            eprintln!("[arcade] journal disabled: {}", e);
            self.out = None;
        }
    }

    /// Give back the underlying writer (if still enabled).
    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn records_are_tagged_lines() {
        let mut j = Journal::from_writer(Vec::new());
        j.session_start("snake", 5);
        j.session_end("snake");

        let out = String::from_utf8(j.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "session_start");
        assert_eq!(first["seed"], 5);
        let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(last["type"], "session_end");
        assert_eq!(last["games_finished"], 0);
    }

    #[test]
    fn write_failure_disables_journal() {
        let mut j = Journal::from_writer(Broken);
        assert!(j.enabled());
        j.session_start("blocks", 1);
        assert!(!j.enabled());
        j.session_end("blocks");
    }

    #[test]
    fn disabled_journal_is_silent() {
        let mut j = Journal::disabled();
        j.session_start("blocks", 1);
        assert!(!j.enabled());
        assert_eq!(j.games_finished(), 0);
    }
}
