// src/numeric/int.rs
//
// Operator family for a left operand of the exact-integer kind.
//
// Overload suffixes name the static type of the right operand. Integer
// arithmetic uses the host's 64-bit wrap-around semantics; division by
// zero keeps the host behavior for the result kind (a panic for integer
// results, an infinity or NaN for floating results).

use crate::numeric::Num;

// --- Equality and ordering ---

pub fn equals_int(lhs: i64, rhs: i64) -> bool {
    lhs == rhs
}

/// Cross-kind equality is value-based: `42 == 42.0` holds, so equality
/// agrees with `compare_to` returning zero.
pub fn equals_float(lhs: i64, rhs: f64) -> bool {
    lhs as f64 == rhs
}

pub fn equals_num(lhs: i64, rhs: Num) -> bool {
    match rhs {
        Num::Int(rhs) => equals_int(lhs, rhs),
        Num::Float(rhs) => equals_float(lhs, rhs),
    }
}

pub fn not_equal_int(lhs: i64, rhs: i64) -> bool {
    !equals_int(lhs, rhs)
}

pub fn not_equal_float(lhs: i64, rhs: f64) -> bool {
    !equals_float(lhs, rhs)
}

pub fn not_equal_num(lhs: i64, rhs: Num) -> bool {
    !equals_num(lhs, rhs)
}

pub fn get_hash_code(value: i64) -> i64 {
    value
}

pub fn compare_to_int(lhs: i64, rhs: i64) -> i64 {
    if lhs < rhs {
        -1
    } else if lhs > rhs {
        1
    } else {
        0
    }
}

pub fn compare_to_float(lhs: i64, rhs: f64) -> i64 {
    let lhs = lhs as f64;
    if lhs < rhs {
        -1
    } else if lhs > rhs {
        1
    } else {
        0
    }
}

pub fn compare_to_num(lhs: i64, rhs: Num) -> i64 {
    match rhs {
        Num::Int(rhs) => compare_to_int(lhs, rhs),
        Num::Float(rhs) => compare_to_float(lhs, rhs),
    }
}

// --- Arithmetic ---

pub fn plus_int(lhs: i64, rhs: i64) -> i64 {
    lhs.wrapping_add(rhs)
}

pub fn plus_float(lhs: i64, rhs: f64) -> f64 {
    lhs as f64 + rhs
}

pub fn plus_num(lhs: i64, rhs: Num) -> Num {
    match rhs {
        Num::Int(rhs) => Num::Int(plus_int(lhs, rhs)),
        Num::Float(rhs) => Num::Float(plus_float(lhs, rhs)),
    }
}

pub fn minus_int(lhs: i64, rhs: i64) -> i64 {
    lhs.wrapping_sub(rhs)
}

pub fn minus_float(lhs: i64, rhs: f64) -> f64 {
    lhs as f64 - rhs
}

pub fn minus_num(lhs: i64, rhs: Num) -> Num {
    match rhs {
        Num::Int(rhs) => Num::Int(minus_int(lhs, rhs)),
        Num::Float(rhs) => Num::Float(minus_float(lhs, rhs)),
    }
}

pub fn times_int(lhs: i64, rhs: i64) -> i64 {
    lhs.wrapping_mul(rhs)
}

pub fn times_float(lhs: i64, rhs: f64) -> f64 {
    lhs as f64 * rhs
}

pub fn times_num(lhs: i64, rhs: Num) -> Num {
    match rhs {
        Num::Int(rhs) => Num::Int(times_int(lhs, rhs)),
        Num::Float(rhs) => Num::Float(times_float(lhs, rhs)),
    }
}

/// True division: the result is always floating, whatever the operands.
pub fn div_int(lhs: i64, rhs: i64) -> f64 {
    lhs as f64 / rhs as f64
}

pub fn div_float(lhs: i64, rhs: f64) -> f64 {
    lhs as f64 / rhs
}

pub fn div_num(lhs: i64, rhs: Num) -> f64 {
    match rhs {
        Num::Int(rhs) => div_int(lhs, rhs),
        Num::Float(rhs) => div_float(lhs, rhs),
    }
}

/// Truncating division: integer result, rounded toward zero in every sign
/// quadrant. `(-7) ~/ 2 == -3`, not `-4`.
pub fn trunc_div_int(lhs: i64, rhs: i64) -> i64 {
    lhs.wrapping_div(rhs)
}

pub fn trunc_div_float(lhs: i64, rhs: f64) -> i64 {
    (lhs as f64 / rhs) as i64
}

pub fn trunc_div_num(lhs: i64, rhs: Num) -> i64 {
    match rhs {
        Num::Int(rhs) => trunc_div_int(lhs, rhs),
        Num::Float(rhs) => trunc_div_float(lhs, rhs),
    }
}

/// Host remainder semantics: the result takes the sign of the left
/// operand.
// TODO: modulo over floating and abstract operands needs a decision on
// non-negative result adjustment before it can ship.
pub fn modulo_int(lhs: i64, rhs: i64) -> i64 {
    lhs.wrapping_rem(rhs)
}

// --- Relational ---

pub fn less_int(lhs: i64, rhs: i64) -> bool {
    lhs < rhs
}

pub fn less_float(lhs: i64, rhs: f64) -> bool {
    (lhs as f64) < rhs
}

pub fn less_num(lhs: i64, rhs: Num) -> bool {
    match rhs {
        Num::Int(rhs) => less_int(lhs, rhs),
        Num::Float(rhs) => less_float(lhs, rhs),
    }
}

pub fn less_equal_int(lhs: i64, rhs: i64) -> bool {
    lhs <= rhs
}

pub fn less_equal_float(lhs: i64, rhs: f64) -> bool {
    lhs as f64 <= rhs
}

pub fn less_equal_num(lhs: i64, rhs: Num) -> bool {
    match rhs {
        Num::Int(rhs) => less_equal_int(lhs, rhs),
        Num::Float(rhs) => less_equal_float(lhs, rhs),
    }
}

pub fn greater_int(lhs: i64, rhs: i64) -> bool {
    lhs > rhs
}

pub fn greater_float(lhs: i64, rhs: f64) -> bool {
    lhs as f64 > rhs
}

pub fn greater_num(lhs: i64, rhs: Num) -> bool {
    match rhs {
        Num::Int(rhs) => greater_int(lhs, rhs),
        Num::Float(rhs) => greater_float(lhs, rhs),
    }
}

pub fn greater_equal_int(lhs: i64, rhs: i64) -> bool {
    lhs >= rhs
}

pub fn greater_equal_float(lhs: i64, rhs: f64) -> bool {
    lhs as f64 >= rhs
}

pub fn greater_equal_num(lhs: i64, rhs: Num) -> bool {
    match rhs {
        Num::Int(rhs) => greater_equal_int(lhs, rhs),
        Num::Float(rhs) => greater_equal_float(lhs, rhs),
    }
}

// --- Bitwise and shifts (exact-integer kind only) ---

pub fn bit_and(lhs: i64, rhs: i64) -> i64 {
    lhs & rhs
}

pub fn bit_or(lhs: i64, rhs: i64) -> i64 {
    lhs | rhs
}

pub fn bit_xor(lhs: i64, rhs: i64) -> i64 {
    lhs ^ rhs
}

pub fn bit_not(value: i64) -> i64 {
    !value
}

/// Shift counts are masked to the word width, the host's shift rule.
pub fn shift_left(lhs: i64, rhs: i64) -> i64 {
    lhs.wrapping_shl(rhs as u32)
}

pub fn shift_right(lhs: i64, rhs: i64) -> i64 {
    lhs.wrapping_shr(rhs as u32)
}

// --- Unary operators and properties ---

pub fn negate(value: i64) -> i64 {
    value.wrapping_neg()
}

pub fn abs(value: i64) -> i64 {
    value.wrapping_abs()
}

pub fn sign(value: i64) -> i64 {
    value.signum()
}

pub fn is_even(value: i64) -> bool {
    value % 2 == 0
}

pub fn is_odd(value: i64) -> bool {
    value % 2 != 0
}

pub fn is_negative(value: i64) -> bool {
    value < 0
}

pub fn is_nan(_value: i64) -> bool {
    false
}

pub fn is_infinite(_value: i64) -> bool {
    false
}

pub fn is_finite(_value: i64) -> bool {
    true
}

// Rounding is the identity on exact integers.

pub fn round(value: i64) -> i64 {
    value
}

pub fn floor(value: i64) -> i64 {
    value
}

pub fn ceil(value: i64) -> i64 {
    value
}

pub fn truncate(value: i64) -> i64 {
    value
}

// --- Conversions ---

pub fn to_int(value: i64) -> i64 {
    value
}

pub fn to_float(value: i64) -> f64 {
    value as f64
}

pub fn to_string(value: i64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trunc_div_rounds_toward_zero_in_all_quadrants() {
        assert_eq!(trunc_div_int(7, 2), 3);
        assert_eq!(trunc_div_int(-7, 2), -3);
        assert_eq!(trunc_div_int(7, -2), -3);
        assert_eq!(trunc_div_int(-7, -2), 3);

        assert_eq!(trunc_div_float(7, 2.0), 3);
        assert_eq!(trunc_div_float(-7, 2.0), -3);
        assert_eq!(trunc_div_float(7, -2.0), -3);
    }

    #[test]
    fn trunc_div_by_fractional_divisors() {
        assert_eq!(trunc_div_float(700, 1.1), 636);
        assert_eq!(trunc_div_float(700, 1.2), 583);
        assert_eq!(trunc_div_float(700, 1.3), 538);
    }

    #[test]
    fn arithmetic_promotes_on_floating_operands() {
        assert_eq!(plus_int(1, 2), 3);
        assert_eq!(plus_float(1, 2.5), 3.5);
        assert_eq!(minus_float(5, 0.5), 4.5);
        assert_eq!(times_float(3, 0.5), 1.5);
    }

    #[test]
    fn division_is_always_floating() {
        assert_eq!(div_int(7, 2), 3.5);
        assert_eq!(div_int(4, 2), 2.0);
        assert!(div_int(1, 0).is_infinite());
    }

    #[test]
    fn num_overloads_redirect_on_the_runtime_tag() {
        match plus_num(1, Num::Int(2)) {
            Num::Int(v) => assert_eq!(v, 3),
            Num::Float(_) => panic!("int + int must stay exact"),
        }
        match plus_num(1, Num::Float(2.5)) {
            Num::Float(v) => assert_eq!(v, 3.5),
            Num::Int(_) => panic!("int + float must promote"),
        }
    }

    #[test]
    fn modulo_follows_host_remainder_sign() {
        assert_eq!(modulo_int(7, 3), 1);
        assert_eq!(modulo_int(-7, 3), -1);
        assert_eq!(modulo_int(7, -3), 1);
    }

    #[test]
    fn equality_is_value_based_across_kinds() {
        assert!(equals_int(12, 12));
        assert!(equals_float(42, 42.0));
        assert!(!equals_float(42, 42.5));
        assert!(equals_num(42, Num::Float(42.0)));
        assert!(not_equal_num(42, Num::Float(42.5)));
    }

    #[test]
    fn compare_to_agrees_with_relationals() {
        let lhs = [-3i64, 0, 2, 7];
        let rhs = [-2.5f64, 0.0, 2.0, 9.25];
        for &a in &lhs {
            for &b in &rhs {
                let cmp = compare_to_float(a, b);
                assert_eq!(cmp < 0, less_float(a, b));
                assert_eq!(cmp <= 0, less_equal_float(a, b));
                assert_eq!(cmp > 0, greater_float(a, b));
                assert_eq!(cmp >= 0, greater_equal_float(a, b));
                assert_eq!(less_equal_float(a, b), !greater_float(a, b));
            }
        }
    }

    #[test]
    fn bitwise_and_shifts() {
        assert_eq!(bit_and(0b1100, 0b1010), 0b1000);
        assert_eq!(bit_or(0b1100, 0b1010), 0b1110);
        assert_eq!(bit_xor(0b1100, 0b1010), 0b0110);
        assert_eq!(bit_not(3), -4);
        assert_eq!(shift_left(1, 4), 16);
        assert_eq!(shift_right(-16, 2), -4);
    }

    #[test]
    fn parity_is_consistent_for_negatives() {
        assert!(is_even(-4));
        assert!(is_odd(-3));
        assert!(!is_even(-3));
    }

    #[test]
    fn properties_and_conversions() {
        assert_eq!(abs(-36), 36);
        assert_eq!(sign(-5), -1);
        assert_eq!(sign(34), 1);
        assert_eq!(sign(0), 0);
        assert!(is_negative(-1) && !is_negative(0));
        assert!(is_finite(1) && !is_nan(1) && !is_infinite(1));
        assert_eq!(round(9), 9);
        assert_eq!(floor(-9), -9);
        assert_eq!(to_float(3), 3.0);
        assert_eq!(to_string(42), "42");
    }
}
