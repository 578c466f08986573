use std::env::{self, VarError};
use std::str::FromStr;

use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};

const DEFAULT_PLAYERS: &str = "Alice,Bob,Charlie";
const DEFAULT_MAX_TURNS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub players: Vec<String>,
    pub seed: Option<u64>,
    pub max_turns: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            players: parse_players(DEFAULT_PLAYERS),
            seed: None,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl DemoConfig {
    /// Reads `RUNO_PLAYERS`, `RUNO_SEED` and `RUNO_MAX_TURNS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(err) => Err(err).wrap_err_with(|| format!("`{key}` is not valid unicode")),
        })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Result<Option<String>>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(players) = lookup("RUNO_PLAYERS")? {
            config.players = parse_players(&players);
        }
        if let Some(seed) = lookup("RUNO_SEED")? {
            config.seed = Some(parse_number("RUNO_SEED", &seed)?);
        }
        if let Some(max_turns) = lookup("RUNO_MAX_TURNS")? {
            config.max_turns = parse_number("RUNO_MAX_TURNS", &max_turns)?;
        }

        if config.players.len() < runo::constants::MIN_PLAYERS {
            return Err(eyre!(
                "`RUNO_PLAYERS` needs at least {} names, got {:?}",
                runo::constants::MIN_PLAYERS,
                config.players
            ));
        }

        Ok(config)
    }
}

fn parse_players(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

fn parse_number<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .wrap_err_with(|| format!("`{key}` must be a number, got `{value}`"))
}
