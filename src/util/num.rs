/// Number of bits in the evaluator's integer type.
pub const INT_BITS: u64 = i64::BITS as u64;

/// Converts a boolean to the integer the language uses for it.
///
/// ## Example
/// ```
/// use intexpr::util::num::from_bool;
///
/// assert_eq!(from_bool(true), 1);
/// assert_eq!(from_bool(false), 0);
/// ```
#[must_use]
pub const fn from_bool(value: bool) -> i64 {
    if value { 1 } else { 0 }
}

/// Reports whether an integer counts as true: anything but zero.
#[must_use]
pub const fn is_truthy(value: i64) -> bool {
    value != 0
}

/// Shifts `value` left by `amount` bits.
///
/// Bits shifted past the top are lost; an amount of 64 or more yields `0`.
///
/// ## Example
/// ```
/// use intexpr::util::num::shift_left;
///
/// assert_eq!(shift_left(7, 3), 56);
/// assert_eq!(shift_left(1, 63), i64::MIN);
/// assert_eq!(shift_left(1, 64), 0);
/// ```
#[must_use]
pub const fn shift_left(value: i64, amount: u64) -> i64 {
    if amount >= INT_BITS {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation)]
    let amount = amount as u32;
    value << amount
}

/// Shifts `value` right by `amount` bits, copying the sign bit in.
///
/// An amount of 64 or more yields `-1` for negative values and `0`
/// otherwise.
///
/// ## Example
/// ```
/// use intexpr::util::num::shift_right;
///
/// assert_eq!(shift_right(144, 3), 18);
/// assert_eq!(shift_right(-9, 1), -5);
/// assert_eq!(shift_right(-9, 200), -1);
/// ```
#[must_use]
pub const fn shift_right(value: i64, amount: u64) -> i64 {
    if amount >= INT_BITS {
        return if value < 0 { -1 } else { 0 };
    }
    #[allow(clippy::cast_possible_truncation)]
    let amount = amount as u32;
    value >> amount
}
