use serde::{Deserialize, Serialize};
use std::fs;

use cribbage_ai::STRATEGY_NAMES;
use cribbage_engine::game::{DEFAULT_WIN, MAX_PLAYERS, MIN_PLAYERS};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: usize,
    pub win: u32,
    pub seed: Option<u64>,
    pub strategy: String,
}

impl Config {
    /// Replace values with the flags given on the command line, then check
    /// the result.
    pub fn with_overrides(
        mut self,
        players: Option<usize>,
        win: Option<u32>,
        seed: Option<u64>,
        strategy: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(v) = players {
            self.players = v;
        }
        if let Some(v) = win {
            self.win = v;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(v) = strategy {
            self.strategy = v.to_ascii_lowercase();
        }
        validate(&self)?;
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub win: ValueSource,
    pub seed: ValueSource,
    pub strategy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            win: ValueSource::Default,
            seed: ValueSource::Default,
            strategy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: 2,
            win: DEFAULT_WIN,
            seed: None,
            strategy: "greedy".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `CRIBBAGE_CONFIG`, then the
/// `CRIBBAGE_*` environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("CRIBBAGE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.win {
            cfg.win = v;
            sources.win = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.strategy {
            cfg.strategy = v;
            sources.strategy = ValueSource::File;
        }
    }

    if let Ok(players) = std::env::var("CRIBBAGE_PLAYERS")
        && !players.is_empty()
    {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid players".into()))?;
        sources.players = ValueSource::Env;
    }
    if let Ok(win) = std::env::var("CRIBBAGE_WIN")
        && !win.is_empty()
    {
        cfg.win = win
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid win".into()))?;
        sources.win = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("CRIBBAGE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(strategy) = std::env::var("CRIBBAGE_STRATEGY")
        && !strategy.is_empty()
    {
        cfg.strategy = strategy.to_ascii_lowercase();
        sources.strategy = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    win: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    strategy: Option<String>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must be between {} and {}",
            MIN_PLAYERS, MAX_PLAYERS
        )));
    }
    if cfg.win == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: win must be >0".into(),
        ));
    }
    if !STRATEGY_NAMES.contains(&cfg.strategy.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown strategy '{}' (expected one of {})",
            cfg.strategy,
            STRATEGY_NAMES.join(", ")
        )));
    }
    Ok(())
}
