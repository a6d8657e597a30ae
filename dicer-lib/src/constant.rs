/// Operator characters of the notation, as written by the serializer
pub(crate) const DIE_TYPE_OPERATOR: char = 'd';
pub(crate) const PLUS_OPERATOR: char = '+';
pub(crate) const MINUS_OPERATOR: char = '-';
pub(crate) const KEEP_OPERATOR: char = 'k';
pub(crate) const SUCCESS_OPERATOR: char = 's';
pub(crate) const EXPLODE_OPERATOR: char = 'x';

/// Sign remembered by the parser for the bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Shift in one more decimal digit, moving away from zero in this
    /// direction; `None` once the value leaves the `i16` range
    pub(crate) fn accumulate(self, value: i16, digit: i16) -> Option<i16> {
        let shifted = value.checked_mul(10)?;
        match self {
            Sign::Plus => shifted.checked_add(digit),
            Sign::Minus => shifted.checked_sub(digit),
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Sign::Plus => write!(f, "{PLUS_OPERATOR}"),
            Sign::Minus => write!(f, "{MINUS_OPERATOR}"),
        }
    }
}
