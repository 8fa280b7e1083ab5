use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::row::{CellState, Row};

/// Fills a freshly created row before the first generation. Cells within `margin` of either
/// edge must be left alone.
pub trait Seeder {
    fn initialize(&mut self, row: &mut Row, margin: usize);
}

/// A single alive cell in the middle of the row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterSeed;

impl Seeder for CenterSeed {
    fn initialize(&mut self, row: &mut Row, margin: usize) {
        let center = row.width() / 2;

        if !row.interior(margin).contains(&center) {
            debug!("Row of width {} has no interior center to seed", row.width());
            return;
        }

        // SAFETY: center is inside the interior range, which is inside the row.
        *row.cell_mut(center).unwrap() = CellState::Alive;
    }
}

/// Every interior cell alive with even odds.
#[derive(Debug, Clone)]
pub struct RandomFill<R> {
    rng: R,
}

impl<R> RandomFill<R>
where
    R: Rng,
{
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> Seeder for RandomFill<R>
where
    R: Rng,
{
    fn initialize(&mut self, row: &mut Row, margin: usize) {
        for index in row.interior(margin) {
            // SAFETY: Interior indices are always inside the row.
            *row.cell_mut(index).unwrap() = CellState::from_bit(self.rng.random_bool(0.5));
        }

        debug!(
            "Randomly seeded {} of {} cells",
            row.count_cells(CellState::Alive),
            row.width()
        );
    }
}

/// The starting condition picked by whoever drives the automaton.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StartCondition {
    #[default]
    #[strum(to_string = "seed", serialize = "s")]
    Seed,

    #[strum(to_string = "random", serialize = "r")]
    Random,
}

impl StartCondition {
    pub fn seeder<'a, R>(self, rng: R) -> Box<dyn Seeder + 'a>
    where
        R: Rng + 'a,
    {
        match self {
            StartCondition::Seed => Box::new(CenterSeed),
            StartCondition::Random => Box::new(RandomFill::new(rng)),
        }
    }
}
