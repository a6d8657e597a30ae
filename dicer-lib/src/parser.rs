use crate::constant::Sign;
use crate::error::Error;
use crate::error::Result;
use crate::spec::RollSpec;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest::Parser as _;
use pest_derive::Parser;

/// Pest tokenizer
#[derive(Parser)]
#[grammar = "notation.pest"]
pub struct Parser;

/// Which field the next digits belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Dice,
    DieType,
    Bonus,
    Keep,
    Success,
    Exploded,
}

/// Accumulate tokens into a spec, one character at a time
struct Machine {
    spec: RollSpec,
    state: State,
    sign: Sign,
}

impl Machine {
    fn new() -> Self {
        Machine {
            spec: RollSpec::new(),
            state: State::Dice,
            sign: Sign::Plus,
        }
    }

    /// Append a decimal digit, `None` on overflow or after the explode marker
    fn push_digit(&mut self, digit: i16) -> Option<()> {
        // the bonus grows toward its sign so `i16::MIN` stays reachable
        let sign = match self.state {
            State::Bonus => self.sign,
            _ => Sign::Plus,
        };
        let accumulator = match self.state {
            State::Dice => &mut self.spec.dice,
            State::DieType => &mut self.spec.die_type,
            State::Bonus => &mut self.spec.bonus,
            State::Keep => self.spec.keep.get_or_insert(0),
            State::Success => self.spec.success_target.get_or_insert(0),
            State::Exploded => return None,
        };
        *accumulator = sign.accumulate(*accumulator, digit)?;
        Some(())
    }

    fn push_operator(&mut self, rule: Rule, index: usize) {
        match rule {
            Rule::die_type => {
                self.spec.die_type = 0;
                self.state = State::DieType;
                if index == 0 {
                    self.spec.dice = 1;
                }
            }
            Rule::plus | Rule::minus => {
                self.spec.bonus = 0;
                self.sign = if rule == Rule::plus {
                    Sign::Plus
                } else {
                    Sign::Minus
                };
                self.state = State::Bonus;
            }
            Rule::keep => {
                self.spec.keep = Some(0);
                self.state = State::Keep;
            }
            Rule::success => {
                self.spec.success_target = Some(0);
                self.state = State::Success;
            }
            Rule::explode => {
                self.spec.explode = true;
                // a leading `x` only marks the implicit die, counting goes on
                if self.state != State::Dice || self.spec.dice != 0 {
                    self.state = State::Exploded;
                }
            }
            _ => unreachable!("{:?}", rule),
        }
    }
}

/// Character index of a byte offset into `input`
fn char_offset(input: &str, byte: usize) -> usize {
    input.get(..byte).map_or(byte, |head| head.chars().count())
}

fn lex_failure(input: &str, error: pest::error::Error<Rule>) -> Error {
    let byte = match error.location {
        InputLocation::Pos(pos) => pos,
        InputLocation::Span((start, _)) => start,
    };
    Error::parse(input, char_offset(input, byte))
}

fn digit_value(pair: &Pair<Rule>) -> i16 {
    match pair.as_str().parse::<i16>() {
        Ok(digit) => digit,
        Err(_) => unreachable!("{:?}", pair),
    }
}

/// Parse a dice notation string into a validated spec
pub(crate) fn parse(input: &str) -> Result<RollSpec> {
    let notation = match Parser::parse(Rule::notation, input) {
        Ok(mut pairs) => match pairs.next() {
            Some(notation) => notation,
            None => unreachable!(),
        },
        Err(error) => {
            let error = lex_failure(input, error);
            tracing::debug!("{error}");
            return Err(error);
        }
    };
    let mut machine = Machine::new();
    for token in notation.into_inner() {
        // every token before a failure is ascii, so bytes and chars agree
        let index = token.as_span().start();
        match token.as_rule() {
            Rule::digit => {
                if machine.push_digit(digit_value(&token)).is_none() {
                    let error = Error::parse(input, index);
                    tracing::debug!("{error}");
                    return Err(error);
                }
            }
            Rule::EOI => (),
            rule => machine.push_operator(rule, index),
        }
    }
    let spec = machine.spec;
    if !spec.is_valid() {
        let error = Error::parse(input, input.chars().count());
        tracing::debug!("{error}: {spec:?} is inconsistent");
        return Err(error);
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::spec::RollSpec;
    use proptest::prelude::*;

    fn assert_spec(
        input: &str,
        dice: i16,
        die_type: i16,
        bonus: i16,
        keep: Option<i16>,
        target: Option<i16>,
        explode: bool,
    ) {
        let spec = parse(input).unwrap();
        assert_eq!(dice, spec.dice(), "dice of {input}");
        assert_eq!(die_type, spec.die_type(), "die type of {input}");
        assert_eq!(bonus, spec.bonus(), "bonus of {input}");
        assert_eq!(keep, spec.keep(), "keep of {input}");
        assert_eq!(target, spec.success_target(), "target of {input}");
        assert_eq!(explode, spec.explodes(), "explode of {input}");
    }

    fn assert_failure(input: &str, offset: usize) {
        match parse(input) {
            Ok(spec) => panic!("{input} should not parse, got {spec}"),
            Err(error) => {
                assert_eq!(offset, error.offset(), "offset of {input}");
                assert_eq!(input, error.input());
            }
        }
    }

    #[test]
    fn good_strings_test() {
        assert_spec("1d6", 1, 6, 0, None, None, false);
        assert_spec("3d8+15", 3, 8, 15, None, None, false);
        assert_spec("4d10-2k3", 4, 10, -2, Some(3), None, false);
        assert_spec("3d6s4x", 3, 6, 0, None, Some(4), true);
    }

    #[test]
    fn implicit_single_die_test() {
        assert_spec("d8+2", 1, 8, 2, None, None, false);
        assert_spec("D20", 1, 20, 0, None, None, false);
    }

    #[test]
    fn out_of_order_test() {
        assert_spec("x1s2k1+1d8", 1, 8, 1, Some(1), Some(2), true);
        assert_spec("10d8x+6k4s2", 10, 8, 6, Some(4), Some(2), true);
    }

    #[test]
    fn case_insensitive_test() {
        assert_spec("4D6K3S5X", 4, 6, 0, Some(3), Some(5), true);
    }

    #[test]
    fn last_sign_wins_test() {
        assert_spec("2d6+3-4", 2, 6, -4, None, None, false);
        assert_spec("2d6-3+4", 2, 6, 4, None, None, false);
    }

    #[test]
    fn empty_test() {
        assert_eq!(RollSpec::new(), parse("").unwrap());
    }

    #[test]
    fn bad_strings_test() {
        assert_failure("abcdefg", 0);
        assert_failure("1d8x5", 4);
        assert_failure("3d10k5", 6);
    }

    #[test]
    fn unknown_character_test() {
        assert_failure("2d6 + 1", 3);
        assert_failure("2d6?", 3);
        assert_failure("1d6é", 3);
    }

    #[test]
    fn failed_validation_offset_counts_chars_test() {
        assert_failure("2d6k0", 5);
        assert_failure("0d6k1", 5);
    }

    #[test]
    fn operator_after_explode_test() {
        assert_spec("1d8xk1", 1, 8, 0, Some(1), None, true);
        assert_failure("1d8xk1x2", 7);
    }

    #[test]
    fn overflow_is_rejected_test() {
        assert_spec("32767d1", i16::MAX, 1, 0, None, None, false);
        assert_failure("32768d1", 4);
        assert_failure("1d100000", 7);
        assert_failure("1d6+40000", 8);
        assert_spec("1d6-32767", 1, 6, -32767, None, None, false);
    }

    #[test]
    fn bonus_limits_test() {
        assert_spec("1d6-32768", 1, 6, i16::MIN, None, None, false);
        assert_spec("1d6+32767", 1, 6, i16::MAX, None, None, false);
        assert_failure("1d6+32768", 8);
        assert_failure("1d6-32769", 8);
        // a new sign restarts the bonus from zero
        assert_spec("1d6+32767-32768", 1, 6, i16::MIN, None, None, false);
        assert_spec("1d6-32768+5", 1, 6, 5, None, None, false);
    }

    fn token_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            "[0-9]{1,4}",
            Just("d".to_owned()),
            Just("+".to_owned()),
            Just("-".to_owned()),
            Just("k".to_owned()),
            Just("s".to_owned()),
            Just("x".to_owned()),
        ]
    }

    proptest! {
        #[test]
        fn accepted_strings_are_valid_test(
            tokens in proptest::collection::vec(token_strategy(), 0..8)
        ) {
            let input = tokens.concat();
            if let Ok(spec) = parse(&input) {
                prop_assert!(spec.is_valid());
            }
        }

        #[test]
        fn failures_point_inside_input_test(input in "[0-9dDkKsSxX+\\-a-c]{0,12}") {
            if let Err(error) = parse(&input) {
                prop_assert!(error.offset() <= input.chars().count());
            }
        }
    }
}
