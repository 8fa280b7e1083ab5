use std::io::{self, Write};

use colored::Colorize;
use itertools::Itertools;
use libca::{Snapshot, row::Row};
use serde::{Deserialize, Serialize};
use strum::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DisplayStyle {
    /// `0` and `1`, same as the rule notation.
    #[default]
    Digits,

    /// Full blocks for alive cells, spaces for dead ones.
    Blocks,
}

impl DisplayStyle {
    pub fn render(&self, row: &Row) -> String {
        match self {
            DisplayStyle::Digits => row.to_bits(),
            DisplayStyle::Blocks => row
                .cells()
                .iter()
                .map(|cell| if cell.is_alive() { '█' } else { ' ' })
                .join(""),
        }
    }
}

pub fn label(generation: usize) -> String {
    format!("t={generation},")
}

pub fn write_snapshot<W>(out: &mut W, snapshot: &Snapshot, style: DisplayStyle) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "{}\t{}",
        label(snapshot.generation).bright_black(),
        style.render(&snapshot.row)
    )
}
