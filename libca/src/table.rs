//! Neighborhood lookup tables built from Wolfram rules.

use std::fmt;

use itertools::Itertools;
use log::{debug, trace};

use crate::{
    error::CaError,
    row::CellState,
    rule::{Radius, WolframRule},
};

/// A neighborhood read as a binary number, leftmost cell most significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern {
    value: usize,
    width: usize,
}

impl Pattern {
    pub fn new(value: usize, width: usize) -> Self {
        debug_assert!(value < 1 << width);
        Self { value, width }
    }

    pub fn from_cells(cells: &[CellState]) -> Self {
        let value = cells
            .iter()
            .fold(0, |value, cell| (value << 1) | cell.as_bit() as usize);

        Self::new(value, cells.len())
    }

    pub fn value(&self) -> usize {
        self.value
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn cells(&self) -> Vec<CellState> {
        (0..self.width)
            .rev()
            .map(|shift| CellState::from_bit((self.value >> shift) & 1 == 1))
            .collect_vec()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.value, width = self.width)
    }
}

/// Enumerates every neighborhood in Wolfram order by flipping one flag per neighborhood
/// position whenever the counter crosses that position's power of two.
///
/// The first pattern is all alive, the last all dead.
pub fn canonical_patterns(radius: Radius) -> impl Iterator<Item = Pattern> {
    let width = radius.neighborhood_width();
    let count = radius.pattern_count();
    let mut flags = vec![false; width];

    (0..count).map(move |i| {
        for (j, flag) in flags.iter_mut().enumerate() {
            let period = count >> (j + 1);
            if i % period == 0 {
                *flag = !*flag;
            }
        }

        let cells = flags.iter().map(|flag| CellState::from_bit(*flag)).collect_vec();
        Pattern::from_cells(&cells)
    })
}

/// Same order as [`canonical_patterns`], computed directly from the counter.
pub fn counted_patterns(radius: Radius) -> impl Iterator<Item = Pattern> {
    let width = radius.neighborhood_width();
    let count = radius.pattern_count();

    (0..count).map(move |i| Pattern::new(count - 1 - i, width))
}

/// A total mapping from every neighborhood to the state of its center cell in the next
/// generation, indexed by [`Pattern::value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    radius: Radius,
    next_states: Vec<CellState>,
}

impl RuleTable {
    /// Builds the table for a rule given as a string of `0`/`1` digits.
    pub fn build(radius: Radius, rule: &str) -> Result<Self, CaError> {
        let rule = WolframRule::parse(radius, rule)?;
        Ok(Self::from_rule(&rule))
    }

    pub fn from_rule(rule: &WolframRule) -> Self {
        let radius = rule.radius();
        let mut next_states = vec![CellState::Dead; radius.pattern_count()];

        for (pattern, bit) in canonical_patterns(radius).zip(rule.bits()) {
            trace!("{pattern} -> {}", u8::from(*bit));
            next_states[pattern.value()] = CellState::from_bit(*bit);
        }

        debug!(
            "Built rule table for rule {} (radius {radius}, {} patterns)",
            rule.number(),
            next_states.len()
        );

        Self {
            radius,
            next_states,
        }
    }

    pub fn radius(&self) -> Radius {
        self.radius
    }

    pub fn len(&self) -> usize {
        self.next_states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next_states.is_empty()
    }

    /// Next state for a neighborhood, or `None` if it isn't as wide as this table's neighborhoods.
    pub fn lookup(&self, neighborhood: &[CellState]) -> Option<CellState> {
        if neighborhood.len() != self.radius.neighborhood_width() {
            return None;
        }

        self.get(Pattern::from_cells(neighborhood))
    }

    pub fn get(&self, pattern: Pattern) -> Option<CellState> {
        if pattern.width() != self.radius.neighborhood_width() {
            return None;
        }

        self.next_states.get(pattern.value()).copied()
    }

    /// All entries in Wolfram order.
    pub fn entries(&self) -> impl Iterator<Item = (Pattern, CellState)> + '_ {
        counted_patterns(self.radius).map(|pattern| (pattern, self.next_states[pattern.value()]))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    fn table(radius: Radius, rule: &str) -> RuleTable {
        RuleTable::build(radius, rule).unwrap()
    }

    fn next_state(table: &RuleTable, neighborhood: &str) -> char {
        let cells = neighborhood
            .chars()
            .map(|c| CellState::from_char(c).unwrap())
            .collect_vec();
        table.lookup(&cells).unwrap().as_char()
    }

    #[test]
    fn rule_30_mapping() {
        let table = table(Radius::One, "00011110");

        let expected = [
            ("111", '0'),
            ("110", '0'),
            ("101", '0'),
            ("100", '1'),
            ("011", '1'),
            ("010", '1'),
            ("001", '1'),
            ("000", '0'),
        ];

        for (neighborhood, next) in expected {
            assert_eq!(next_state(&table, neighborhood), next, "neighborhood {neighborhood}");
        }
    }

    #[test]
    fn toggling_matches_counting_down() {
        for radius in [Radius::One, Radius::Two] {
            assert_eq!(
                canonical_patterns(radius).collect_vec(),
                counted_patterns(radius).collect_vec()
            );
        }
    }

    #[test]
    fn canonical_order_starts_all_alive() {
        let patterns = canonical_patterns(Radius::Two).map(|p| p.to_string()).collect_vec();
        assert_eq!(patterns.first().unwrap(), "11111");
        assert_eq!(patterns[1], "11110");
        assert_eq!(patterns.last().unwrap(), "00000");
    }

    #[test]
    fn entries_follow_rule_digits() {
        let rule = "01101110";
        let table = table(Radius::One, rule);

        let digits = table.entries().map(|(_, state)| state.as_char()).join("");
        assert_eq!(digits, rule);
    }

    #[test]
    fn wrong_width_neighborhood_has_no_entry() {
        let table = table(Radius::One, "00011110");
        assert_eq!(table.lookup(&[CellState::Alive; 5]), None);
        assert_eq!(table.lookup(&[]), None);
        assert_eq!(table.get(Pattern::new(3, 5)), None);
    }

    #[test]
    fn malformed_rule_is_rejected() {
        assert!(matches!(
            RuleTable::build(Radius::Two, "00011110"),
            Err(CaError::InvalidRuleFormat { expected: 32, len: 8, .. })
        ));
        assert!(RuleTable::build(Radius::One, "00011120").is_err());
        assert!(RuleTable::build(Radius::One, "").is_err());
    }

    proptest! {
        #[test]
        fn table_covers_every_pattern_once(number in any::<u32>(), wide in any::<bool>()) {
            let radius = if wide { Radius::Two } else { Radius::One };
            let number = if wide { number as u64 } else { number as u64 & 0xff };
            let table = RuleTable::from_rule(&WolframRule::from_number(radius, number).unwrap());

            prop_assert_eq!(table.len(), radius.pattern_count());

            let patterns = table.entries().map(|(pattern, _)| pattern).collect::<HashSet<_>>();
            prop_assert_eq!(patterns.len(), radius.pattern_count());
            for pattern in patterns {
                prop_assert_eq!(pattern.width(), radius.neighborhood_width());
                prop_assert!(table.get(pattern).is_some());
            }
        }

        #[test]
        fn lookup_reads_rule_bit(number in 0u64..256, value in 0usize..8) {
            let table = RuleTable::from_rule(&WolframRule::from_number(Radius::One, number).unwrap());
            let pattern = Pattern::new(value, 3);

            let expected = CellState::from_bit((number >> value) & 1 == 1);
            prop_assert_eq!(table.lookup(&pattern.cells()), Some(expected));
        }
    }
}
