//! Runner configuration: environment first, then command-line arguments.
//!
//! Environment:
//! - `ARCADE_GAME`: `blocks` (default) or `snake`
//! - `ARCADE_SEED`: u32 seed for the random source (default: derived from the clock)
//! - `ARCADE_LOG_PATH`: session journal path (unset or empty: no journal)

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

pub const USAGE: &str = "\
usage: tui-arcade [blocks|snake] [--seed N] [--log PATH]

  blocks        falling block stacker (default)
  snake         snake
  --seed N      random seed (u32)
  --log PATH    append a JSON-lines session journal to PATH
  -h, --help    show this help";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Blocks,
    Snake,
}

impl GameKind {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "blocks" | "tetris" => Some(GameKind::Blocks),
            "snake" => Some(GameKind::Snake),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Blocks => "blocks",
            GameKind::Snake => "snake",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub game: GameKind,
    pub seed: u32,
    pub log_path: Option<String>,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cli {
    Run(Config),
    Help,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let game = lookup("ARCADE_GAME")
            .and_then(|s| GameKind::from_str(&s))
            .unwrap_or(GameKind::Blocks);

        let seed = lookup("ARCADE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("ARCADE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            game,
            seed,
            log_path,
        }
    }

    /// Apply command-line arguments (program name already stripped) on top of `self`.
    pub fn with_args(mut self, args: &[String]) -> Result<Cli> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => return Ok(Cli::Help),
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log"))?;
                    if v.trim().is_empty() {
                        return Err(anyhow!("empty --log path"));
                    }
                    self.log_path = Some(v.clone());
                }
                other if !other.starts_with('-') => {
                    let game = GameKind::from_str(other);
                    self.game = game.ok_or_else(|| anyhow!("unknown game: {}", other))?;
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 1;
        }
        Ok(Cli::Run(self))
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            game: GameKind::Blocks,
            seed: 1,
            log_path: None,
        }
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn lookup_reads_all_variables() {
        let cfg = Config::from_lookup(|k| match k {
            "ARCADE_GAME" => Some("Snake".to_string()),
            "ARCADE_SEED" => Some(" 42 ".to_string()),
            "ARCADE_LOG_PATH" => Some("/tmp/arcade.jsonl".to_string()),
            _ => None,
        });
        assert_eq!(cfg.game, GameKind::Snake);
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/arcade.jsonl"));
    }

    #[test]
    fn empty_log_path_disables_journal() {
        let cfg = Config::from_lookup(|k| (k == "ARCADE_LOG_PATH").then(|| "  ".to_string()));
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.game, GameKind::Blocks);
    }

    #[test]
    fn args_override_environment() {
        let cli = base()
            .with_args(&args(&["snake", "--seed", "9", "--log", "out.jsonl"]))
            .unwrap();
        assert_eq!(
            cli,
            Cli::Run(Config {
                game: GameKind::Snake,
                seed: 9,
                log_path: Some("out.jsonl".to_string()),
            })
        );
    }

    #[test]
    fn no_args_keeps_base() {
        assert_eq!(base().with_args(&[]).unwrap(), Cli::Run(base()));
    }

    #[test]
    fn help_flag() {
        assert_eq!(base().with_args(&args(&["--help"])).unwrap(), Cli::Help);
    }

    #[test]
    fn bad_arguments_are_errors() {
        assert!(base().with_args(&args(&["--seed"])).is_err());
        assert!(base().with_args(&args(&["--seed", "-3"])).is_err());
        assert!(base().with_args(&args(&["pong"])).is_err());
        assert!(base().with_args(&args(&["--fast"])).is_err());
    }
}
