use std::{
    env,
    io::{self, Write},
    process::exit,
};

use anyhow::Context;
use cli::Prompter;
use colored::Colorize;
use config::Config;
use libca::{Automaton, seed::StartCondition};
use log::{LevelFilter, info};
use rand::{SeedableRng, rngs::StdRng};
use simple_logger::SimpleLogger;

mod cli;
mod config;
mod display;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:?}", "!".red());
        exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("Couldn't initialize logger")?;

    let config = match env::args().nth(1) {
        Some(config_path) => Config::load(&config_path)
            .with_context(|| format!("Couldn't load config from {config_path}"))?,
        None => Config::default(),
    };

    if !config.color {
        colored::control::set_override(false);
    }

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());

    let radius = match config.radius {
        Some(radius) => radius,
        None => prompter.ask_radius()?,
    };

    let rule = match &config.rule {
        Some(rule_spec) => rule_spec.resolve(radius).context("Invalid rule in config")?,
        None => prompter.ask_rule(radius)?,
    };

    let start = match config.start {
        Some(start) => start,
        None => prompter.ask_start_condition()?,
    };

    let mut automaton =
        Automaton::new(&rule, config.automaton_config()).context("Invalid row geometry")?;

    match (start, config.random_seed) {
        (StartCondition::Random, Some(seed)) => {
            info!("Seeding randomly from seed {seed}");
            automaton.seed_with(start.seeder(StdRng::seed_from_u64(seed)).as_mut());
        }
        _ => automaton.seed_with(start.seeder(rand::rng()).as_mut()),
    }

    info!(
        "Running rule {} (radius {radius}) from {start} until t={}",
        rule.number(),
        config.generations
    );

    let mut out = io::stdout().lock();
    for snapshot in automaton.run(config.generations) {
        display::write_snapshot(&mut out, &snapshot, config.style)?;
    }
    out.flush()?;

    Ok(())
}
