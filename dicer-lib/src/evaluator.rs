use crate::roll;
use crate::roll::RollResult;
use crate::spec::RollSpec;

/// Represent an evaluator
pub(crate) struct Evaluator;

impl Evaluator {
    /// Roll every die of `spec` and aggregate them
    ///
    /// An invalid spec never panics: negative counts roll nothing and a
    /// keep larger than the dice count keeps every die.
    pub(crate) fn roll<S: roll::Source>(spec: &RollSpec, source: &mut S) -> RollResult {
        let amount = usize::try_from(spec.dice).unwrap_or(0);
        let mut result = RollResult::new(amount);
        if amount == 0 || spec.die_type <= 0 || spec.keep == Some(0) {
            tracing::trace!(%spec, "nothing to roll");
            return result;
        }
        for die in result.dice_mut().iter_mut() {
            *die = Self::roll_one_die(spec, source);
        }
        let value = match spec.keep {
            Some(keep) => {
                let keep = usize::try_from(keep).unwrap_or(0);
                Self::evaluate(spec, &Self::kept_dice(result.dice(), keep))
            }
            None => Self::evaluate(spec, result.dice()),
        };
        result.set_value(value);
        tracing::debug!(%spec, %result, "rolled");
        result
    }

    /// Total of a single die, bonus included in success mode
    pub(crate) fn roll_one_die<S: roll::Source>(spec: &RollSpec, source: &mut S) -> i64 {
        let sides = u64::from(spec.die_type.unsigned_abs());
        let mut total = 0;
        // a d1 always shows its max, it would explode forever
        if spec.explode && sides > 1 {
            loop {
                let throw = source.throw(sides);
                total += throw as i64;
                if throw != sides {
                    break;
                }
                tracing::trace!(sides, total, "die exploded");
            }
        } else {
            total = source.throw(sides) as i64;
        }
        if spec.success_target.is_some() {
            total += i64::from(spec.bonus);
        }
        total
    }

    /// The `keep` highest values of `dice`, in descending order
    pub(crate) fn kept_dice(dice: &[i64], keep: usize) -> Vec<i64> {
        let mut highest = vec![i64::MIN; keep.min(dice.len())];
        for &die in dice {
            let mut current = die;
            for slot in highest.iter_mut() {
                if current > *slot {
                    std::mem::swap(&mut current, slot);
                }
            }
        }
        highest
    }

    /// Count successes, or sum the dice and add the bonus once
    pub(crate) fn evaluate(spec: &RollSpec, dice: &[i64]) -> i64 {
        match spec.success_target {
            Some(target) => dice.iter().filter(|&&die| die >= i64::from(target)).count() as i64,
            None => dice.iter().sum::<i64>() + i64::from(spec.bonus),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Evaluator;
    use crate::roller::RandomSource;
    use crate::spec::RollSpec;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TRIALS: usize = 1000;

    fn spec(input: &str) -> RollSpec {
        RollSpec::parse(input).unwrap()
    }

    fn assert_roll_one_die(spec: &RollSpec) {
        let mut generator = StdRng::seed_from_u64(7);
        let mut source = RandomSource {
            generator: &mut generator,
        };
        let sides = i64::from(spec.die_type());
        let bonus = i64::from(spec.bonus());
        for _ in 0..TRIALS {
            let die = Evaluator::roll_one_die(spec, &mut source);
            if spec.success_target().is_some() {
                assert!(bonus < die && die <= sides + bonus, "{die} for {spec}");
            } else {
                assert!(0 < die && die <= sides, "{die} for {spec}");
            }
        }
    }

    #[test]
    fn roll_one_die_test() {
        assert_roll_one_die(&spec("3d8"));
        assert_roll_one_die(&spec("4d10k3"));
        assert_roll_one_die(&spec("4d10+7k3"));
        assert_roll_one_die(&spec("3d6s4"));
        assert_roll_one_die(&spec("3d6-2s4"));
    }

    #[test]
    fn roll_one_exploding_die_test() {
        let mut generator = StdRng::seed_from_u64(42);
        let mut source = RandomSource {
            generator: &mut generator,
        };
        let exploding = spec("1d8x");
        let exploded = (0..TRIALS).any(|_| Evaluator::roll_one_die(&exploding, &mut source) > 8);
        assert!(exploded, "no exploded die in {TRIALS} trials");

        // every success needs at least one explosion
        let spec = spec(&format!("{TRIALS}d8xs10"));
        let result = Evaluator::roll(&spec, &mut source);
        assert!(result.value() > 0);
    }

    #[test]
    fn one_sided_die_never_explodes_test() {
        let mut generator = StdRng::seed_from_u64(1);
        let mut source = RandomSource {
            generator: &mut generator,
        };
        assert_eq!(1, Evaluator::roll_one_die(&spec("1d1x"), &mut source));
    }

    #[test]
    fn kept_dice_test() {
        let dice = [8, 6, 7, 9, 3, 0, 9];
        assert_eq!(vec![9, 9, 8, 7, 6, 3, 0], Evaluator::kept_dice(&dice, 7));
        assert_eq!(vec![9, 9, 8], Evaluator::kept_dice(&dice, 3));
        assert_eq!(vec![9], Evaluator::kept_dice(&dice, 1));
    }

    #[test]
    fn kept_dice_clamped_test() {
        assert_eq!(vec![4, 2], Evaluator::kept_dice(&[2, 4], 5));
        assert!(Evaluator::kept_dice(&[], 3).is_empty());
    }

    #[test]
    fn evaluate_test() {
        let rolls = [8, 6, 7, 5, 3, 0, 9];
        let mut spec = spec("7d10");
        assert_eq!(8 + 6 + 7 + 5 + 3 + 9, Evaluator::evaluate(&spec, &rolls));
        spec.set_bonus(3);
        assert_eq!(8 + 6 + 7 + 5 + 3 + 9 + 3, Evaluator::evaluate(&spec, &rolls));
        // raw values, the per die bonus is not part of this array
        spec.set_success_target(Some(5));
        assert_eq!(5, Evaluator::evaluate(&spec, &rolls));
    }
}
