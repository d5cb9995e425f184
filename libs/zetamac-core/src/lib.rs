//! Core arithmetic-drill library shared by the backend.
//!
//! Provides:
//! - Difficulty profiles with their operand ranges
//! - Operator parsing from compact ops strings (e.g. `"+-*/"`)
//! - Question generation with exact-integer division

pub mod error;
pub mod generator;
pub mod types;

pub use error::{QuestionError, Result};
pub use generator::{generate, generate_with_ranges, generate_with_rng};
pub use types::{
    parse_ops, CustomRanges, Difficulty, NumberRange, Operator, OperandRanges, Question,
    RangeConfig,
};
