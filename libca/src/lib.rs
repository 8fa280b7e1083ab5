use engine::BoundaryPolicy;
use log::debug;
use row::Row;
use rule::{Radius, WolframRule};
use seed::Seeder;
use serde::{Deserialize, Serialize};
use table::RuleTable;

pub use error::CaError;

pub mod engine;
pub mod error;
pub mod row;
pub mod rule;
pub mod seed;
pub mod table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomatonConfig {
    pub width: usize,

    /// Cells on each edge that are never looked up in the rule table. Defaults to the radius,
    /// and can't be smaller than it.
    pub margin: Option<usize>,

    pub boundary: BoundaryPolicy,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            width: 84,
            margin: None,
            boundary: BoundaryPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    table: RuleTable,
    margin: usize,
    boundary: BoundaryPolicy,
    row: Row,
    generation: usize,
}

impl Automaton {
    /// Creates an automaton with an all-dead row at generation zero.
    pub fn new(rule: &WolframRule, config: AutomatonConfig) -> Result<Self, CaError> {
        let radius = rule.radius().get();
        let margin = config.margin.unwrap_or(radius);

        if margin < radius {
            return Err(CaError::MarginTooSmall { margin, radius });
        }

        if config.width < 2 * margin + 1 {
            return Err(CaError::RowTooNarrow {
                width: config.width,
                margin,
            });
        }

        debug!(
            "New automaton: rule {rule}, width {}, margin {margin}, {} boundary",
            config.width, config.boundary
        );

        Ok(Self {
            table: RuleTable::from_rule(rule),
            margin,
            boundary: config.boundary,
            row: Row::new(config.width),
            generation: 0,
        })
    }

    pub fn seed_with<S>(&mut self, seeder: &mut S)
    where
        S: Seeder + ?Sized,
    {
        seeder.initialize(&mut self.row, self.margin);
    }

    pub fn tick(&mut self) {
        // SAFETY: new() already checked the margin against the table radius, and the table can't
        //         miss a neighborhood as wide as its own.
        let next_row = engine::step_with_margin(&self.row, &self.table, self.margin, self.boundary)
            .unwrap_or_else(|err| panic!("{err}"));

        self.row = next_row;
        self.generation += 1;
    }

    /// Yields the current generation and every following one up to and including `last_generation`.
    pub fn run(&mut self, last_generation: usize) -> Run<'_> {
        Run {
            automaton: self,
            last_generation,
            finished: false,
        }
    }

    pub fn row(&self) -> &Row {
        &self.row
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn radius(&self) -> Radius {
        self.table.radius()
    }

    pub fn margin(&self) -> usize {
        self.margin
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.generation,
            row: self.row.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub generation: usize,
    pub row: Row,
}

pub struct Run<'a> {
    automaton: &'a mut Automaton,
    last_generation: usize,
    finished: bool,
}

impl Iterator for Run<'_> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.automaton.generation() > self.last_generation {
            return None;
        }

        let snapshot = self.automaton.snapshot();

        if snapshot.generation == self.last_generation {
            // Don't compute a generation nobody asked for.
            self.finished = true;
        } else {
            self.automaton.tick();
        }

        Some(snapshot)
    }
}
