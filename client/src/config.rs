use std::{fs, path::Path};

use anyhow::Context;
use libgame::{codec::Glyphs, rule::Rule};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// How many generations to advance past the initial board.
    pub generations: usize,

    pub rule: Rule,
    pub glyphs: Glyphs,

    pub show_glyphs: bool,
    pub show_compact: bool,

    /// Log filter used when `RUST_LOG` isn't set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generations: 10,
            rule: Rule::default(),
            glyphs: Glyphs::default(),
            show_glyphs: true,
            show_compact: true,
            log_level: "warn".to_owned(),
        }
    }
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        Self::from_json(&config_serialized)
    }

    pub fn from_json(config_serialized: &[u8]) -> anyhow::Result<Self> {
        serde_json::from_slice(config_serialized).context("Couldn't deserialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = Config::from_json(b"{}").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.generations, 10);
        assert_eq!(config.rule, Rule::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = Config::from_json(
            br##"{
                "generations": 3,
                "glyphs": { "alive": "#", "dead": " " },
                "show_compact": false
            }"##,
        )
        .unwrap();

        assert_eq!(config.generations, 3);
        assert_eq!(config.glyphs, Glyphs { alive: '#', dead: ' ' });
        assert!(config.show_glyphs);
        assert!(!config.show_compact);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = Config::from_json(br#"{ "generations": "many" }"#).unwrap_err();

        assert!(err.to_string().contains("Couldn't deserialize config"));
    }
}
