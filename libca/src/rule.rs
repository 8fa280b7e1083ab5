use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CaError;

/// How many cells on each side of a cell take part in its neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum Radius {
    One,
    Two,
}

impl Radius {
    pub fn get(self) -> usize {
        match self {
            Radius::One => 1,
            Radius::Two => 2,
        }
    }

    /// Cells in one neighborhood, `2r + 1`.
    pub fn neighborhood_width(self) -> usize {
        2 * self.get() + 1
    }

    /// Number of distinct neighborhoods, which is also the length of a rule in Wolfram notation.
    pub fn pattern_count(self) -> usize {
        1 << self.neighborhood_width()
    }
}

impl TryFrom<usize> for Radius {
    type Error = CaError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Radius::One),
            2 => Ok(Radius::Two),
            _ => Err(CaError::InvalidRadius(value.to_string())),
        }
    }
}

impl From<Radius> for usize {
    fn from(value: Radius) -> Self {
        value.get()
    }
}

impl FromStr for Radius {
    type Err = CaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<usize>()
            .map_err(|_| CaError::InvalidRadius(trimmed.to_owned()))?;
        Radius::try_from(value)
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A rule in Wolfram notation: bit `i` is the next state for the `i`-th neighborhood, counting
/// down from the all-alive neighborhood.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WolframRule {
    radius: Radius,
    bits: Vec<bool>,
}

impl WolframRule {
    pub fn parse(radius: Radius, rule: &str) -> Result<Self, CaError> {
        let expected = radius.pattern_count();
        let len = rule.chars().count();
        let offending = rule.chars().find(|c| *c != '0' && *c != '1');

        if len != expected || offending.is_some() {
            return Err(CaError::InvalidRuleFormat {
                expected,
                len,
                offending,
            });
        }

        let bits = rule.chars().map(|c| c == '1').collect();
        Ok(Self { radius, bits })
    }

    /// Builds the rule with the given Wolfram number, e.g. 30 for radius one is `00011110`.
    pub fn from_number(radius: Radius, number: u64) -> Result<Self, CaError> {
        let digits = radius.pattern_count();

        if digits < u64::BITS as usize && number >> digits != 0 {
            return Err(CaError::RuleNumberOutOfRange { number, digits });
        }

        let bits = (0..digits)
            .rev()
            .map(|shift| (number >> shift) & 1 == 1)
            .collect();

        Ok(Self { radius, bits })
    }

    pub fn radius(&self) -> Radius {
        self.radius
    }

    /// Rule digits, most significant neighborhood first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn number(&self) -> u64 {
        self.bits
            .iter()
            .fold(0, |number, bit| (number << 1) | u64::from(*bit))
    }
}

impl fmt::Display for WolframRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_accepts_one_and_two_only() {
        assert_eq!("1".parse::<Radius>(), Ok(Radius::One));
        assert_eq!(" 2 ".parse::<Radius>(), Ok(Radius::Two));
        assert_eq!("3".parse::<Radius>(), Err(CaError::InvalidRadius("3".to_owned())));
        assert!("0".parse::<Radius>().is_err());
        assert!("two".parse::<Radius>().is_err());
    }

    #[test]
    fn radius_sizes() {
        assert_eq!(Radius::One.neighborhood_width(), 3);
        assert_eq!(Radius::One.pattern_count(), 8);
        assert_eq!(Radius::Two.neighborhood_width(), 5);
        assert_eq!(Radius::Two.pattern_count(), 32);
    }

    #[test]
    fn rule_number_matches_binary_notation() {
        let rule_30 = WolframRule::from_number(Radius::One, 30).unwrap();
        assert_eq!(rule_30.to_string(), "00011110");

        let rule_110 = WolframRule::parse(Radius::One, "01101110").unwrap();
        assert_eq!(rule_110.number(), 110);

        let wide = WolframRule::from_number(Radius::Two, u32::MAX as u64).unwrap();
        assert_eq!(wide.to_string(), "1".repeat(32));
    }

    #[test]
    fn rule_number_out_of_range() {
        assert_eq!(
            WolframRule::from_number(Radius::One, 256),
            Err(CaError::RuleNumberOutOfRange {
                number: 256,
                digits: 8
            })
        );
        assert!(WolframRule::from_number(Radius::Two, 1 << 32).is_err());
    }

    #[test]
    fn malformed_rules_are_rejected() {
        assert_eq!(
            WolframRule::parse(Radius::One, "0001111"),
            Err(CaError::InvalidRuleFormat {
                expected: 8,
                len: 7,
                offending: None
            })
        );
        assert_eq!(
            WolframRule::parse(Radius::One, "0001111a"),
            Err(CaError::InvalidRuleFormat {
                expected: 8,
                len: 8,
                offending: Some('a')
            })
        );
        // A radius one rule is too short for radius two.
        assert!(WolframRule::parse(Radius::Two, "00011110").is_err());
    }
}
