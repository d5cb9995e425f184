//! Question generation.
//!
//! Operands are drawn uniformly from the difficulty profile's ranges (or a
//! client-supplied override). Division is built backwards from a divisor and
//! a quotient so the answer is always an exact integer.

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::error::{QuestionError, Result};
use crate::types::{parse_ops, CustomRanges, Difficulty, NumberRange, Operator, Question};

/// Generate a question using the thread-local RNG and the profile ranges.
pub fn generate(difficulty: &str, ops: &str) -> Result<Question> {
    generate_with_rng(&mut rand::thread_rng(), difficulty, ops, None)
}

/// Generate a question using the thread-local RNG, with optional custom ranges.
pub fn generate_with_ranges(
    difficulty: &str,
    ops: &str,
    ranges: Option<&CustomRanges>,
) -> Result<Question> {
    generate_with_rng(&mut rand::thread_rng(), difficulty, ops, ranges)
}

/// Generate a question from the given RNG.
///
/// Validation order is difficulty, then ops, then `ranges`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    difficulty: &str,
    ops: &str,
    ranges: Option<&CustomRanges>,
) -> Result<Question> {
    let difficulty: Difficulty = difficulty.parse()?;
    let operators = parse_ops(ops)?;
    let ranges = match ranges {
        Some(custom) => {
            custom.validate()?;
            *custom
        }
        None => difficulty.profile().operand_ranges(),
    };

    let op = *operators
        .choose(rng)
        .ok_or(QuestionError::NoValidOperators)?;

    let (a, b, answer) = match op {
        Operator::Add => {
            let a = draw(rng, ranges.add.a);
            let b = draw(rng, ranges.add.b);
            (a, b, a + b)
        }
        Operator::Sub => {
            let mut a = draw(rng, ranges.add.a);
            let mut b = draw(rng, ranges.add.b);
            if !difficulty.allows_negative_subtraction() && b > a {
                std::mem::swap(&mut a, &mut b);
            }
            (a, b, a - b)
        }
        Operator::Mul => {
            let a = draw(rng, ranges.mult.a);
            let b = draw(rng, ranges.mult.b);
            (a, b, a * b)
        }
        Operator::Div => {
            let divisor = draw(rng, ranges.mult.a);
            let quotient = draw(rng, ranges.mult.b);
            (divisor * quotient, divisor, quotient)
        }
    };

    Ok(Question {
        id: Uuid::new_v4().to_string(),
        prompt: format!("{} {} {}", a, op.symbol(), b),
        answer,
    })
}

fn draw<R: Rng + ?Sized>(rng: &mut R, range: NumberRange) -> i64 {
    rng.gen_range(range.min..=range.max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OperandRanges;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    /// Split `"a op b"` into its parts.
    fn parse_prompt(prompt: &str) -> (i64, String, i64) {
        let parts: Vec<&str> = prompt.split(' ').collect();
        assert_eq!(parts.len(), 3, "unexpected prompt {prompt:?}");
        (
            parts[0].parse().unwrap(),
            parts[1].to_string(),
            parts[2].parse().unwrap(),
        )
    }

    #[test]
    fn every_operator_at_every_difficulty_is_consistent() {
        let mut rng = rng();
        for difficulty in Difficulty::ALL {
            let profile = difficulty.profile();
            for (ops, symbol) in [("+", "+"), ("-", "-"), ("*", "×"), ("/", "÷")] {
                for _ in 0..500 {
                    let q = generate_with_rng(&mut rng, difficulty.as_str(), ops, None).unwrap();
                    let (a, shown, b) = parse_prompt(&q.prompt);
                    assert_eq!(shown, symbol);
                    match ops {
                        "+" => {
                            assert!(a >= profile.add_sub_min && a <= profile.add_sub_max);
                            assert!(b >= profile.add_sub_min && b <= profile.add_sub_max);
                            assert_eq!(q.answer, a + b);
                        }
                        "-" => assert_eq!(q.answer, a - b),
                        "*" => {
                            assert!(a >= profile.mult_min && a <= profile.mult_max);
                            assert!(b >= profile.mult_min && b <= profile.mult_max);
                            assert_eq!(q.answer, a * b);
                        }
                        _ => {
                            assert!(b >= profile.mult_min && b <= profile.mult_max);
                            assert!(q.answer >= profile.mult_min && q.answer <= profile.mult_max);
                            assert_eq!(a, b * q.answer);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn division_is_always_exact() {
        let mut rng = rng();
        for i in 0..10_000 {
            let difficulty = Difficulty::ALL[i % 3].as_str();
            let q = generate_with_rng(&mut rng, difficulty, "/", None).unwrap();
            let (dividend, _, divisor) = parse_prompt(&q.prompt);
            assert_eq!(dividend % divisor, 0);
            assert_eq!(q.answer * divisor, dividend);
        }
    }

    #[test]
    fn subtraction_non_negative_below_hard() {
        let mut rng = rng();
        for difficulty in ["easy", "med"] {
            for _ in 0..2_000 {
                let q = generate_with_rng(&mut rng, difficulty, "-", None).unwrap();
                assert!(q.answer >= 0, "{} gave {}", q.prompt, q.answer);
            }
        }
    }

    #[test]
    fn subtraction_can_go_negative_on_hard() {
        let mut rng = rng();
        let negative = (0..2_000)
            .map(|_| generate_with_rng(&mut rng, "hard", "-", None).unwrap())
            .any(|q| q.answer < 0);
        assert!(negative);
    }

    #[test]
    fn rejects_empty_or_unknown_ops() {
        assert_eq!(generate("easy", ""), Err(QuestionError::NoValidOperators));
        assert_eq!(generate("easy", "xyz"), Err(QuestionError::NoValidOperators));
    }

    #[test]
    fn rejects_unknown_difficulty() {
        assert_eq!(
            generate("impossible", "+"),
            Err(QuestionError::InvalidDifficulty("impossible".to_string()))
        );
    }

    #[test]
    fn difficulty_checked_before_ops() {
        assert!(matches!(
            generate("impossible", ""),
            Err(QuestionError::InvalidDifficulty(_))
        ));
    }

    #[test]
    fn duplicate_operators_bias_selection() {
        let mut rng = rng();
        let samples = 30_000;
        let adds = (0..samples)
            .map(|_| generate_with_rng(&mut rng, "easy", "++-", None).unwrap())
            .filter(|q| q.prompt.contains(" + "))
            .count();
        let share = adds as f64 / samples as f64;
        assert!((0.62..0.71).contains(&share), "add share {share}");
    }

    #[test]
    fn question_ids_are_unique() {
        let a = generate("med", "+-*/").unwrap();
        let b = generate("med", "+-*/").unwrap();
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn custom_ranges_override_profile() {
        let ranges = CustomRanges {
            add: OperandRanges {
                a: NumberRange::new(2, 3),
                b: NumberRange::new(50, 60),
            },
            mult: OperandRanges {
                a: NumberRange::new(7, 7),
                b: NumberRange::new(40, 41),
            },
        };
        let mut rng = rng();
        for _ in 0..200 {
            let q = generate_with_rng(&mut rng, "hard", "+", Some(&ranges)).unwrap();
            let (a, _, b) = parse_prompt(&q.prompt);
            assert!(ranges.add.a.contains(a) && ranges.add.b.contains(b));

            let q = generate_with_rng(&mut rng, "hard", "/", Some(&ranges)).unwrap();
            let (dividend, _, divisor) = parse_prompt(&q.prompt);
            assert_eq!(divisor, 7);
            assert!(ranges.mult.b.contains(q.answer));
            assert_eq!(dividend, 7 * q.answer);

            // easy still swaps so b <= a
            let q = generate_with_rng(&mut rng, "easy", "-", Some(&ranges)).unwrap();
            assert!(q.answer >= 0);
        }
    }

    #[test]
    fn custom_ranges_are_validated() {
        let bad = CustomRanges {
            add: OperandRanges {
                a: NumberRange::new(10, 1),
                b: NumberRange::new(1, 10),
            },
            mult: OperandRanges {
                a: NumberRange::new(1, 10),
                b: NumberRange::new(1, 10),
            },
        };
        assert_eq!(
            generate_with_rng(&mut rng(), "easy", "+", Some(&bad)),
            Err(QuestionError::InvalidRange { min: 10, max: 1 })
        );
    }
}
