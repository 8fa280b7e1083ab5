use std::{fs, path::Path};

use anyhow::Context;
use libca::{
    AutomatonConfig, CaError,
    engine::BoundaryPolicy,
    rule::{Radius, WolframRule},
    seed::StartCondition,
};
use serde::{Deserialize, Serialize};

use crate::display::DisplayStyle;

/// Everything a run needs. Values left out of a config file are asked for interactively
/// (radius, rule and start condition) or fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub width: usize,

    /// Cells on each edge that the rule never touches.
    pub margin: usize,

    pub boundary: BoundaryPolicy,

    /// The last generation to print, the first one being zero.
    pub generations: usize,

    pub radius: Option<Radius>,
    pub rule: Option<RuleSpec>,
    pub start: Option<StartCondition>,

    /// Seed for the random start condition, the thread RNG is used when missing.
    pub random_seed: Option<u64>,

    pub style: DisplayStyle,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 84,
            margin: 2,
            boundary: BoundaryPolicy::Reset,
            generations: 30,
            radius: None,
            rule: None,
            start: None,
            random_seed: None,
            style: DisplayStyle::default(),
            color: true,
        }
    }
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        let config =
            serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")?;
        Ok(config)
    }

    pub fn automaton_config(&self) -> AutomatonConfig {
        AutomatonConfig {
            width: self.width,
            margin: Some(self.margin),
            boundary: self.boundary,
        }
    }
}

/// A rule either in Wolfram notation (`"00011110"`) or as its number (`30`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RuleSpec {
    Number(u64),
    Bits(String),
}

impl RuleSpec {
    pub fn resolve(&self, radius: Radius) -> Result<WolframRule, CaError> {
        match self {
            RuleSpec::Number(number) => WolframRule::from_number(radius, *number),
            RuleSpec::Bits(bits) => WolframRule::parse(radius, bits),
        }
    }
}
