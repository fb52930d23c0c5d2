#[macro_use]
extern crate log;
extern crate env_logger;

use env_logger::{Builder, Target};

extern crate serde_json;

extern crate vrc_ladder_ms;

use vrc_ladder_ms::engine::config::RunnerConfig;
use vrc_ladder_ms::engine::cycle;

use std::env;
use std::process;

fn main() {
    /* Log */
    let mut builder = Builder::new();
    builder.target(Target::Stderr);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse(&filters);
    }
    builder.init();

    let config = RunnerConfig::from_env(env::args().skip(1));
    info!("Running ladder cycle from: {} with {:?}", config.cycle_file, config.ladder);

    let request = match cycle::read_request(&config.cycle_file)
    {
        Err(error) =>
        {
            error!("Failed to read cycle request: {} because {}", config.cycle_file, error);
            process::exit(1);
        },
        Ok(request) => request,
    };

    let response = match cycle::run_cycle(config.ladder, request)
    {
        Err(error) =>
        {
            error!("Failed to run cycle because {}", error);
            process::exit(1);
        },
        Ok(response) => response,
    };

    for failure in response.failures.iter()
    {
        warn!("Match group: {} was not applied: {}", failure.match_group_id, failure.reason);
    }

    match serde_json::to_string_pretty(&response)
    {
        Ok(json) => println!("{}", json),
        Err(error) =>
        {
            error!("Failed to serialize cycle response because {}", error);
            process::exit(1);
        },
    }
}
