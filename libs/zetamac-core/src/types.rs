//! Core types for the arithmetic drill.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QuestionError, Result};

/// Largest operand accepted in a custom range.
pub const MAX_OPERAND: i64 = 1_000_000;

/// Named difficulty profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Med,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Med, Self::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Med => "med",
            Self::Hard => "hard",
        }
    }

    /// Operand ranges for this profile.
    pub fn profile(self) -> RangeConfig {
        match self {
            Self::Easy => RangeConfig {
                add_sub_min: 1,
                add_sub_max: 20,
                mult_min: 1,
                mult_max: 12,
            },
            Self::Med => RangeConfig {
                add_sub_min: 10,
                add_sub_max: 99,
                mult_min: 2,
                mult_max: 19,
            },
            Self::Hard => RangeConfig {
                add_sub_min: 100,
                add_sub_max: 999,
                mult_min: 11,
                mult_max: 29,
            },
        }
    }

    /// Only hard subtraction may produce a negative answer.
    pub fn allows_negative_subtraction(self) -> bool {
        matches!(self, Self::Hard)
    }
}

impl FromStr for Difficulty {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "easy" => Ok(Self::Easy),
            "med" => Ok(Self::Med),
            "hard" => Ok(Self::Hard),
            other => Err(QuestionError::InvalidDifficulty(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static operand ranges of a difficulty profile (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConfig {
    pub add_sub_min: i64,
    pub add_sub_max: i64,
    pub mult_min: i64,
    pub mult_max: i64,
}

impl RangeConfig {
    /// Expand into per-operand ranges, both operands sharing one range.
    pub fn operand_ranges(&self) -> CustomRanges {
        let add = NumberRange::new(self.add_sub_min, self.add_sub_max);
        let mult = NumberRange::new(self.mult_min, self.mult_max);
        CustomRanges {
            add: OperandRanges { a: add, b: add },
            mult: OperandRanges { a: mult, b: mult },
        }
    }
}

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: i64,
    pub max: i64,
}

impl NumberRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min < 1 || self.min > self.max || self.max > MAX_OPERAND {
            return Err(QuestionError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn contains(&self, value: i64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Ranges for the left (`a`) and right (`b`) operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandRanges {
    pub a: NumberRange,
    pub b: NumberRange,
}

/// Client-supplied operand ranges overriding a difficulty profile.
///
/// For division, `mult.a` bounds the divisor and `mult.b` the quotient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRanges {
    pub add: OperandRanges,
    pub mult: OperandRanges,
}

impl CustomRanges {
    pub fn validate(&self) -> Result<()> {
        for range in [self.add.a, self.add.b, self.mult.a, self.mult.b] {
            range.validate()?;
        }
        Ok(())
    }
}

/// Arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Parse one character of an ops string.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Symbol shown in a prompt.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "×",
            Self::Div => "÷",
        }
    }
}

/// Filter an ops string down to its recognized operators.
///
/// Duplicates are kept, so `"++-"` yields `+` twice as often as `-`.
pub fn parse_ops(ops: &str) -> Result<Vec<Operator>> {
    let operators: Vec<Operator> = ops.chars().filter_map(Operator::from_char).collect();
    if operators.is_empty() {
        return Err(QuestionError::NoValidOperators);
    }
    Ok(operators)
}

/// A generated question. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub answer: i64,
}
