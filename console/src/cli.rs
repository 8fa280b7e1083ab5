use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use colored::Colorize;
use libca::{
    rule::{Radius, WolframRule},
    seed::StartCondition,
};
use log::debug;

/// Asks questions over a line based input until each one gets a valid answer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> Prompter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn ask_radius(&mut self) -> anyhow::Result<Radius> {
        self.ask(&["Please input the radius (1 or 2):"], |answer| {
            Ok(answer.parse::<Radius>()?)
        })
    }

    pub fn ask_rule(&mut self, radius: Radius) -> anyhow::Result<WolframRule> {
        let hint = format!(
            "(for radius={radius}, should contain {} digits)",
            radius.pattern_count()
        );

        self.ask(
            &[
                "Please input the rule in Wolfram notation (eg. 00011110):",
                &hint,
            ],
            |answer| Ok(WolframRule::parse(radius, answer)?),
        )
    }

    pub fn ask_start_condition(&mut self) -> anyhow::Result<StartCondition> {
        self.ask(
            &["Please input the starting condition (S for Seed or R for Random):"],
            |answer| {
                answer
                    .parse::<StartCondition>()
                    .with_context(|| format!("{answer:?} is neither S nor R"))
            },
        )
    }

    fn ask<T, F>(&mut self, question: &[&str], parse: F) -> anyhow::Result<T>
    where
        F: Fn(&str) -> anyhow::Result<T>,
    {
        loop {
            for line in question {
                writeln!(self.output, "{line}")?;
            }
            self.output.flush()?;

            let mut answer = String::new();
            let read = self
                .input
                .read_line(&mut answer)
                .context("Couldn't read answer")?;

            if read == 0 {
                bail!("Input ended before a valid answer was given");
            }

            match parse(answer.trim()) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("Rejected answer {:?}: {e:?}", answer.trim());
                    writeln!(self.output, "{}", format!("! {e}").red())?;
                }
            }
        }
    }
}
