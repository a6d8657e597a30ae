//! Per-field validity rules of a roll spec.
//!
//! Every rule takes a wide integer so callers can ask about values that
//! would not fit the 16 bits a spec stores.

/// Whether the value fits the storage width of a spec field
pub fn value_can_fit(n: i32) -> bool {
    i16::try_from(n).is_ok()
}

pub fn is_valid_die_count(dice: i32) -> bool {
    value_can_fit(dice) && dice >= 0
}

pub fn is_valid_die_type(sides: i32) -> bool {
    value_can_fit(sides) && sides >= 0
}

/// `None` means "keep everything"; an explicit keep must be positive
pub fn is_valid_keep(keep: Option<i32>) -> bool {
    match keep {
        Some(n) => value_can_fit(n) && n > 0,
        None => true,
    }
}

/// `None` means sum mode; a target of zero is allowed
pub fn is_valid_target(target: Option<i32>) -> bool {
    match target {
        Some(n) => value_can_fit(n) && n >= 0,
        None => true,
    }
}
