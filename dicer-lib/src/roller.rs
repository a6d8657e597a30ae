use crate::evaluator::Evaluator;
use crate::roll;
use crate::roll::RollResult;
use crate::spec::RollSpec;
use rand::Rng;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides)
    }
}

impl RollSpec {
    /// Roll using the default Rng source
    pub fn roll(&self) -> RollResult {
        self.roll_with(&mut rand::thread_rng())
    }

    /// Roll using the provided Rng source
    pub fn roll_with<R: Rng>(&self, generator: &mut R) -> RollResult {
        self.roll_with_source(&mut RandomSource { generator })
    }

    /// Roll using the provided source
    pub fn roll_with_source<S: roll::Source>(&self, source: &mut S) -> RollResult {
        Evaluator::roll(self, source)
    }
}
