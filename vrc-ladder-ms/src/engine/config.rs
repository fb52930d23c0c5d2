use vrc_ladder_common::ladder::{LadderConfig, LADDER_VOLUME, ABSENCE_PENALTY};

use std::env;

const DEFAULT_CYCLE_FILE: &'static str = "cycle.json";

#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig
{
    pub cycle_file: String,
    pub ladder: LadderConfig,
}

impl RunnerConfig
{
    /// Reads `LADDER_CYCLE_FILE`, `LADDER_CAPACITY` and `LADDER_ABSENCE_PENALTY`, falling back to defaults.
    /// A path given as the first argument wins over `LADDER_CYCLE_FILE`.
    pub fn from_env<I>(mut args: I) -> RunnerConfig
        where I: Iterator<Item = String>
    {
        let cycle_file = match args.next()
        {
            Some(path) => path,
            None => env::var("LADDER_CYCLE_FILE")
                .unwrap_or(String::from(DEFAULT_CYCLE_FILE)),
        };

        let capacity = read_usize("LADDER_CAPACITY", LADDER_VOLUME);
        let absence_penalty = read_usize("LADDER_ABSENCE_PENALTY", ABSENCE_PENALTY);

        RunnerConfig {
            cycle_file,
            ladder: LadderConfig::new(capacity, absence_penalty),
        }
    }
}

fn read_usize(key: &str, default: usize) -> usize
{
    match env::var(key)
    {
        Ok(value) => match value.parse::<usize>()
        {
            Ok(value) => value,
            Err(error) =>
            {
                warn!("Ignoring {}={} because {}, using {}", key, value, error, default);
                default
            },
        },
        Err(_) => default,
    }
}
