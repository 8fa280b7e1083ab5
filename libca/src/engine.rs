use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::{
    error::CaError,
    row::{CellState, Row},
    rule::Radius,
    table::RuleTable,
};

/// What happens to the cells too close to an edge to have a full neighborhood.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BoundaryPolicy {
    /// Boundary cells are dead in every generation after the first.
    #[default]
    Reset,

    /// Boundary cells keep whatever state they started with.
    CarryForward,
}

/// Computes the next generation, leaving `radius` cells on each side dead.
///
/// # Panics
///
/// If `table` was built for another radius.
pub fn step(row: &Row, radius: Radius, table: &RuleTable) -> Row {
    if radius != table.radius() {
        panic!(
            "{}",
            CaError::ImpossibleState {
                neighborhood: format!("{} cells", radius.neighborhood_width()),
                table_radius: table.radius().get(),
            }
        );
    }

    step_with_margin(row, table, radius.get(), BoundaryPolicy::Reset)
        .unwrap_or_else(|err| panic!("{err}"))
}

/// Computes the next generation of `row`. Only cells at least `margin` cells away from both
/// edges are looked up in `table`; the rest follow `boundary`.
///
/// The result is always a new row, so every lookup sees the previous generation only.
pub fn step_with_margin(
    row: &Row,
    table: &RuleTable,
    margin: usize,
    boundary: BoundaryPolicy,
) -> Result<Row, CaError> {
    let radius = table.radius().get();
    if margin < radius {
        return Err(CaError::MarginTooSmall { margin, radius });
    }

    let mut next = match boundary {
        BoundaryPolicy::Reset => Row::new(row.width()),
        BoundaryPolicy::CarryForward => row.clone(),
    };

    for index in row.interior(margin) {
        let next_state = row
            .window(index, radius)
            .and_then(|neighborhood| table.lookup(neighborhood))
            .ok_or_else(|| CaError::ImpossibleState {
                neighborhood: describe_window(row, index, radius),
                table_radius: radius,
            })?;

        // SAFETY: Interior indices are always inside the row, and next is just as wide.
        *next.cell_mut(index).unwrap() = next_state;
    }

    Ok(next)
}

fn describe_window(row: &Row, center: usize, radius: usize) -> String {
    let start = center.saturating_sub(radius);
    let end = (center + radius + 1).min(row.width());

    row.cells()
        .get(start..end)
        .unwrap_or_default()
        .iter()
        .map(|cell| cell.as_char())
        .collect()
}

/// Whether a row is dead everywhere, in which case no rule with a dead `000…0` entry changes it.
pub fn is_dead(row: &Row) -> bool {
    row.count_cells(CellState::Alive) == 0
}
