use itertools::Itertools;

/// Keep the outcome of one roll
///
/// Only the evaluator builds it. `dice` holds every die total in rolling
/// order, before any keep selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    dice: Vec<i64>,
    value: i64,
}

impl RollResult {
    /// Zeroed result for `amount` dice
    pub(crate) fn new(amount: usize) -> Self {
        RollResult {
            dice: vec![0; amount],
            value: 0,
        }
    }

    pub(crate) fn dice_mut(&mut self) -> &mut [i64] {
        &mut self.dice
    }

    pub(crate) fn set_value(&mut self, value: i64) {
        self.value = value;
    }

    /// Individual die totals
    pub fn dice(&self) -> &[i64] {
        &self.dice
    }

    /// Sum of the kept dice plus bonus, or the count of successes
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] = {}", self.dice.iter().format(", "), self.value)
    }
}

/// Interface for rolling dices
pub trait Source {
    /// Uniform value in `1..=sides`
    fn throw(&mut self, sides: u64) -> u64;
}
