use crate::constant::Sign;
use crate::constant::DIE_TYPE_OPERATOR;
use crate::constant::EXPLODE_OPERATOR;
use crate::constant::KEEP_OPERATOR;
use crate::constant::SUCCESS_OPERATOR;
use crate::error::Result;
use crate::parser;
use crate::validate;
use std::str::FromStr;

/// Describe a dice roll: how many dice, how many sides, and how to combine
/// them
///
/// Setters silently ignore values that break their own rule, so a spec
/// built through them can only become invalid through the `keep <= dice`
/// cross check. Use [`RollSpec::is_valid`] when that matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RollSpec {
    pub(crate) dice: i16,
    pub(crate) die_type: i16,
    pub(crate) bonus: i16,
    pub(crate) keep: Option<i16>,
    pub(crate) success_target: Option<i16>,
    pub(crate) explode: bool,
}

impl RollSpec {
    /// The no-op spec `0d0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the notation, e.g. `4d6k3+2`
    pub fn parse(input: &str) -> Result<Self> {
        parser::parse(input)
    }

    /// Parse the notation, logging and swallowing any failure
    pub fn parse_carelessly(input: &str) -> Option<Self> {
        match parser::parse(input) {
            Ok(spec) => Some(spec),
            Err(error) => {
                tracing::warn!("{error}");
                None
            }
        }
    }

    /// Copy every field of `other` through the setters
    pub fn set_from(&mut self, other: &RollSpec) -> &mut Self {
        self.set_dice(other.dice.into())
            .set_die_type(other.die_type.into())
            .set_bonus(other.bonus)
            .set_keep(other.keep.map(i32::from))
            .set_success_target(other.success_target.map(i32::from))
            .set_explode(other.explode)
    }

    /// Replace this spec with the parsed notation; untouched on failure
    pub fn set(&mut self, input: &str) -> Result<&mut Self> {
        let parsed = parser::parse(input)?;
        Ok(self.set_from(&parsed))
    }

    pub fn is_valid(&self) -> bool {
        validate::is_valid_die_count(self.dice.into())
            && validate::is_valid_die_type(self.die_type.into())
            && validate::is_valid_keep(self.keep.map(i32::from))
            && validate::is_valid_target(self.success_target.map(i32::from))
            && self.keep.map_or(true, |keep| keep <= self.dice)
    }

    /// Whether the notation parses to a spec equal to this one
    pub fn matches(&self, input: &str) -> bool {
        parser::parse(input).map_or(false, |other| *self == other)
    }

    pub fn dice(&self) -> i16 {
        self.dice
    }

    pub fn set_dice(&mut self, dice: i32) -> &mut Self {
        if validate::is_valid_die_count(dice) {
            self.dice = dice as i16;
        }
        self
    }

    pub fn die_type(&self) -> i16 {
        self.die_type
    }

    pub fn set_die_type(&mut self, sides: i32) -> &mut Self {
        if validate::is_valid_die_type(sides) {
            self.die_type = sides as i16;
        }
        self
    }

    pub fn bonus(&self) -> i16 {
        self.bonus
    }

    pub fn set_bonus(&mut self, bonus: i16) -> &mut Self {
        self.bonus = bonus;
        self
    }

    /// Amount of highest dice kept, `None` keeps all of them
    pub fn keep(&self) -> Option<i16> {
        self.keep
    }

    /// Ignored when the value is not positive or exceeds the current dice
    pub fn set_keep(&mut self, keep: Option<i32>) -> &mut Self {
        if validate::is_valid_keep(keep) && keep.map_or(true, |n| n <= i32::from(self.dice)) {
            self.keep = keep.map(|n| n as i16);
        }
        self
    }

    /// Success threshold, `None` sums the dice instead of counting
    pub fn success_target(&self) -> Option<i16> {
        self.success_target
    }

    pub fn set_success_target(&mut self, target: Option<i32>) -> &mut Self {
        if validate::is_valid_target(target) {
            self.success_target = target.map(|n| n as i16);
        }
        self
    }

    pub fn explodes(&self) -> bool {
        self.explode
    }

    pub fn set_explode(&mut self, explode: bool) -> &mut Self {
        self.explode = explode;
        self
    }
}

impl FromStr for RollSpec {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse(s)
    }
}

impl std::fmt::Display for RollSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{DIE_TYPE_OPERATOR}{}", self.dice, self.die_type)?;
        match self.bonus {
            0 => (),
            b if b > 0 => write!(f, "{}{}", Sign::Plus, b)?,
            b => write!(f, "{}{}", Sign::Minus, b.unsigned_abs())?,
        }
        if let Some(keep) = self.keep {
            write!(f, "{KEEP_OPERATOR}{keep}")?;
        }
        if let Some(target) = self.success_target {
            write!(f, "{SUCCESS_OPERATOR}{target}")?;
        }
        if self.explode {
            write!(f, "{EXPLODE_OPERATOR}")?;
        }
        Ok(())
    }
}
