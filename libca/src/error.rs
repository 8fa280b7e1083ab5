use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaError {
    #[error("radius must be 1 or 2, got {0}")]
    InvalidRadius(String),

    #[error("rule must be {expected} binary digits, got {len} characters{}", offending_char_suffix(.offending))]
    InvalidRuleFormat {
        expected: usize,
        len: usize,
        offending: Option<char>,
    },

    #[error("rule number {number} doesn't fit in {digits} binary digits")]
    RuleNumberOutOfRange { number: u64, digits: usize },

    #[error("row width {width} leaves no interior cell with a margin of {margin}")]
    RowTooNarrow { width: usize, margin: usize },

    #[error("margin {margin} is smaller than the neighborhood radius {radius}")]
    MarginTooSmall { margin: usize, radius: usize },

    /// A neighborhood had no entry in the rule table, which means the table was built for
    /// another radius than the one stepping the row.
    #[error("impossible state: no rule entry for neighborhood {neighborhood:?} (table radius {table_radius})")]
    ImpossibleState {
        neighborhood: String,
        table_radius: usize,
    },
}

fn offending_char_suffix(offending: &Option<char>) -> String {
    offending
        .map(|c| format!(" (found non-binary character {c:?})"))
        .unwrap_or_default()
}
