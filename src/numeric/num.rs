// src/numeric/num.rs
//
// Operator family for a left operand whose static type is the abstract
// numeric supertype.
//
// Each function matches the left operand's variant tag once and redirects
// into the concrete integer or floating family; the `*_num` overloads
// additionally carry the right operand's tag through the same redirect.
// This is the whole of the runtime dispatch: one two-way test per
// dynamically typed operand, everything else resolved statically.

use crate::numeric::{Num, float, int};

// --- Equality and ordering ---

pub fn equals_int(lhs: Num, rhs: i64) -> bool {
    match lhs {
        Num::Int(lhs) => int::equals_int(lhs, rhs),
        Num::Float(lhs) => float::equals_int(lhs, rhs),
    }
}

pub fn equals_float(lhs: Num, rhs: f64) -> bool {
    match lhs {
        Num::Int(lhs) => int::equals_float(lhs, rhs),
        Num::Float(lhs) => float::equals_float(lhs, rhs),
    }
}

pub fn equals_num(lhs: Num, rhs: Num) -> bool {
    match rhs {
        Num::Int(rhs) => equals_int(lhs, rhs),
        Num::Float(rhs) => equals_float(lhs, rhs),
    }
}

pub fn not_equal_int(lhs: Num, rhs: i64) -> bool {
    !equals_int(lhs, rhs)
}

pub fn not_equal_float(lhs: Num, rhs: f64) -> bool {
    !equals_float(lhs, rhs)
}

pub fn not_equal_num(lhs: Num, rhs: Num) -> bool {
    !equals_num(lhs, rhs)
}

pub fn compare_to_int(lhs: Num, rhs: i64) -> i64 {
    match lhs {
        Num::Int(lhs) => int::compare_to_int(lhs, rhs),
        Num::Float(lhs) => float::compare_to_int(lhs, rhs),
    }
}

pub fn compare_to_float(lhs: Num, rhs: f64) -> i64 {
    match lhs {
        Num::Int(lhs) => int::compare_to_float(lhs, rhs),
        Num::Float(lhs) => float::compare_to_float(lhs, rhs),
    }
}

pub fn compare_to_num(lhs: Num, rhs: Num) -> i64 {
    match rhs {
        Num::Int(rhs) => compare_to_int(lhs, rhs),
        Num::Float(rhs) => compare_to_float(lhs, rhs),
    }
}

// --- Arithmetic ---

pub fn plus_int(lhs: Num, rhs: i64) -> Num {
    match lhs {
        Num::Int(lhs) => Num::Int(int::plus_int(lhs, rhs)),
        Num::Float(lhs) => Num::Float(float::plus_int(lhs, rhs)),
    }
}

pub fn plus_float(lhs: Num, rhs: f64) -> f64 {
    match lhs {
        Num::Int(lhs) => int::plus_float(lhs, rhs),
        Num::Float(lhs) => float::plus_float(lhs, rhs),
    }
}

pub fn plus_num(lhs: Num, rhs: Num) -> Num {
    match rhs {
        Num::Int(rhs) => plus_int(lhs, rhs),
        Num::Float(rhs) => Num::Float(plus_float(lhs, rhs)),
    }
}

pub fn minus_int(lhs: Num, rhs: i64) -> Num {
    match lhs {
        Num::Int(lhs) => Num::Int(int::minus_int(lhs, rhs)),
        Num::Float(lhs) => Num::Float(float::minus_int(lhs, rhs)),
    }
}

pub fn minus_float(lhs: Num, rhs: f64) -> f64 {
    match lhs {
        Num::Int(lhs) => int::minus_float(lhs, rhs),
        Num::Float(lhs) => float::minus_float(lhs, rhs),
    }
}

pub fn minus_num(lhs: Num, rhs: Num) -> Num {
    match rhs {
        Num::Int(rhs) => minus_int(lhs, rhs),
        Num::Float(rhs) => Num::Float(minus_float(lhs, rhs)),
    }
}

pub fn times_int(lhs: Num, rhs: i64) -> Num {
    match lhs {
        Num::Int(lhs) => Num::Int(int::times_int(lhs, rhs)),
        Num::Float(lhs) => Num::Float(float::times_int(lhs, rhs)),
    }
}

pub fn times_float(lhs: Num, rhs: f64) -> f64 {
    match lhs {
        Num::Int(lhs) => int::times_float(lhs, rhs),
        Num::Float(lhs) => float::times_float(lhs, rhs),
    }
}

pub fn times_num(lhs: Num, rhs: Num) -> Num {
    match rhs {
        Num::Int(rhs) => times_int(lhs, rhs),
        Num::Float(rhs) => Num::Float(times_float(lhs, rhs)),
    }
}

pub fn div_int(lhs: Num, rhs: i64) -> f64 {
    match lhs {
        Num::Int(lhs) => int::div_int(lhs, rhs),
        Num::Float(lhs) => float::div_int(lhs, rhs),
    }
}

pub fn div_float(lhs: Num, rhs: f64) -> f64 {
    match lhs {
        Num::Int(lhs) => int::div_float(lhs, rhs),
        Num::Float(lhs) => float::div_float(lhs, rhs),
    }
}

pub fn div_num(lhs: Num, rhs: Num) -> f64 {
    match rhs {
        Num::Int(rhs) => div_int(lhs, rhs),
        Num::Float(rhs) => div_float(lhs, rhs),
    }
}

pub fn trunc_div_int(lhs: Num, rhs: i64) -> i64 {
    match lhs {
        Num::Int(lhs) => int::trunc_div_int(lhs, rhs),
        Num::Float(lhs) => float::trunc_div_int(lhs, rhs),
    }
}

pub fn trunc_div_float(lhs: Num, rhs: f64) -> i64 {
    match lhs {
        Num::Int(lhs) => int::trunc_div_float(lhs, rhs),
        Num::Float(lhs) => float::trunc_div_float(lhs, rhs),
    }
}

pub fn trunc_div_num(lhs: Num, rhs: Num) -> i64 {
    match rhs {
        Num::Int(rhs) => trunc_div_int(lhs, rhs),
        Num::Float(rhs) => trunc_div_float(lhs, rhs),
    }
}

// --- Relational ---

pub fn less_int(lhs: Num, rhs: i64) -> bool {
    match lhs {
        Num::Int(lhs) => int::less_int(lhs, rhs),
        Num::Float(lhs) => float::less_int(lhs, rhs),
    }
}

pub fn less_float(lhs: Num, rhs: f64) -> bool {
    match lhs {
        Num::Int(lhs) => int::less_float(lhs, rhs),
        Num::Float(lhs) => float::less_float(lhs, rhs),
    }
}

pub fn less_num(lhs: Num, rhs: Num) -> bool {
    match rhs {
        Num::Int(rhs) => less_int(lhs, rhs),
        Num::Float(rhs) => less_float(lhs, rhs),
    }
}

pub fn less_equal_int(lhs: Num, rhs: i64) -> bool {
    match lhs {
        Num::Int(lhs) => int::less_equal_int(lhs, rhs),
        Num::Float(lhs) => float::less_equal_int(lhs, rhs),
    }
}

pub fn less_equal_float(lhs: Num, rhs: f64) -> bool {
    match lhs {
        Num::Int(lhs) => int::less_equal_float(lhs, rhs),
        Num::Float(lhs) => float::less_equal_float(lhs, rhs),
    }
}

pub fn less_equal_num(lhs: Num, rhs: Num) -> bool {
    match rhs {
        Num::Int(rhs) => less_equal_int(lhs, rhs),
        Num::Float(rhs) => less_equal_float(lhs, rhs),
    }
}

pub fn greater_int(lhs: Num, rhs: i64) -> bool {
    match lhs {
        Num::Int(lhs) => int::greater_int(lhs, rhs),
        Num::Float(lhs) => float::greater_int(lhs, rhs),
    }
}

pub fn greater_float(lhs: Num, rhs: f64) -> bool {
    match lhs {
        Num::Int(lhs) => int::greater_float(lhs, rhs),
        Num::Float(lhs) => float::greater_float(lhs, rhs),
    }
}

pub fn greater_num(lhs: Num, rhs: Num) -> bool {
    match rhs {
        Num::Int(rhs) => greater_int(lhs, rhs),
        Num::Float(rhs) => greater_float(lhs, rhs),
    }
}

pub fn greater_equal_int(lhs: Num, rhs: i64) -> bool {
    match lhs {
        Num::Int(lhs) => int::greater_equal_int(lhs, rhs),
        Num::Float(lhs) => float::greater_equal_int(lhs, rhs),
    }
}

pub fn greater_equal_float(lhs: Num, rhs: f64) -> bool {
    match lhs {
        Num::Int(lhs) => int::greater_equal_float(lhs, rhs),
        Num::Float(lhs) => float::greater_equal_float(lhs, rhs),
    }
}

pub fn greater_equal_num(lhs: Num, rhs: Num) -> bool {
    match rhs {
        Num::Int(rhs) => greater_equal_int(lhs, rhs),
        Num::Float(rhs) => greater_equal_float(lhs, rhs),
    }
}

// --- Unary operators and properties ---

pub fn negate(value: Num) -> Num {
    match value {
        Num::Int(value) => Num::Int(int::negate(value)),
        Num::Float(value) => Num::Float(float::negate(value)),
    }
}

pub fn abs(value: Num) -> Num {
    match value {
        Num::Int(value) => Num::Int(int::abs(value)),
        Num::Float(value) => Num::Float(float::abs(value)),
    }
}

/// Sign keeps the operand's kind: an integer sign for integers, a
/// floating sign for floating values.
pub fn sign(value: Num) -> Num {
    match value {
        Num::Int(value) => Num::Int(int::sign(value)),
        Num::Float(value) => Num::Float(float::sign(value)),
    }
}

pub fn is_negative(value: Num) -> bool {
    match value {
        Num::Int(value) => int::is_negative(value),
        Num::Float(value) => float::is_negative(value),
    }
}

pub fn is_nan(value: Num) -> bool {
    match value {
        Num::Int(value) => int::is_nan(value),
        Num::Float(value) => float::is_nan(value),
    }
}

pub fn is_infinite(value: Num) -> bool {
    match value {
        Num::Int(value) => int::is_infinite(value),
        Num::Float(value) => float::is_infinite(value),
    }
}

pub fn is_finite(value: Num) -> bool {
    match value {
        Num::Int(value) => int::is_finite(value),
        Num::Float(value) => float::is_finite(value),
    }
}

// --- Rounding (integer results) ---

pub fn round(value: Num) -> i64 {
    match value {
        Num::Int(value) => int::round(value),
        Num::Float(value) => float::round(value),
    }
}

pub fn floor(value: Num) -> i64 {
    match value {
        Num::Int(value) => int::floor(value),
        Num::Float(value) => float::floor(value),
    }
}

pub fn ceil(value: Num) -> i64 {
    match value {
        Num::Int(value) => int::ceil(value),
        Num::Float(value) => float::ceil(value),
    }
}

pub fn truncate(value: Num) -> i64 {
    match value {
        Num::Int(value) => int::truncate(value),
        Num::Float(value) => float::truncate(value),
    }
}

// --- Conversions ---

pub fn to_int(value: Num) -> i64 {
    match value {
        Num::Int(value) => int::to_int(value),
        Num::Float(value) => float::to_int(value),
    }
}

pub fn to_float(value: Num) -> f64 {
    match value {
        Num::Int(value) => int::to_float(value),
        Num::Float(value) => float::to_float(value),
    }
}

pub fn to_string(value: Num) -> String {
    match value {
        Num::Int(value) => int::to_string(value),
        Num::Float(value) => float::to_string(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_int(value: Num, expected: i64) {
        match value {
            Num::Int(v) => assert_eq!(v, expected),
            Num::Float(v) => panic!("expected exact {expected}, got floating {v}"),
        }
    }

    fn assert_float(value: Num, expected: f64) {
        match value {
            Num::Float(v) => assert!((v - expected).abs() < 1e-9),
            Num::Int(v) => panic!("expected floating {expected}, got exact {v}"),
        }
    }

    #[test]
    fn plus_covers_the_whole_promotion_grid() {
        assert_int(plus_num(Num::Int(1), Num::Int(3)), 4);
        assert_float(plus_num(Num::Float(1.1), Num::Float(3.2)), 4.3);
        assert_float(plus_num(Num::Int(3), Num::Float(1.1)), 4.1);
        assert_float(plus_num(Num::Float(1.1), Num::Int(3)), 4.1);

        assert_int(plus_int(Num::Int(1), 3), 4);
        assert_float(plus_int(Num::Float(1.1), 3), 4.1);
        assert!((plus_float(Num::Int(1), 3.1) - 4.1).abs() < 1e-9);
        assert!((plus_float(Num::Float(1.1), 3.1) - 4.2).abs() < 1e-9);
    }

    #[test]
    fn division_families() {
        assert_eq!(div_num(Num::Int(7), Num::Int(2)), 3.5);
        assert_eq!(trunc_div_num(Num::Int(7), Num::Int(2)), 3);
        assert_eq!(trunc_div_num(Num::Float(-7.0), Num::Int(2)), -3);
        assert_eq!(trunc_div_float(Num::Int(700), 1.1), 636);
    }

    #[test]
    fn relational_grid_promotes() {
        assert!(less_equal_num(Num::Int(1), Num::Int(3)));
        assert!(less_equal_num(Num::Float(1.1), Num::Int(3)));
        assert!(less_equal_num(Num::Int(1), Num::Float(3.1)));
        assert!(less_equal_num(Num::Float(1.1), Num::Float(3.1)));
        assert!(!less_equal_num(Num::Int(4), Num::Int(3)));

        assert!(less_equal_int(Num::Float(1.1), 3));
        assert!(less_equal_float(Num::Int(1), 3.1));
        assert!(greater_num(Num::Float(3.1), Num::Int(3)));
    }

    #[test]
    fn compare_to_sign_agrees_with_relationals() {
        let samples = [
            Num::Int(-3),
            Num::Int(0),
            Num::Int(7),
            Num::Float(-2.5),
            Num::Float(0.0),
            Num::Float(7.5),
        ];
        for &a in &samples {
            for &b in &samples {
                let cmp = compare_to_num(a, b);
                assert_eq!(cmp < 0, less_num(a, b));
                assert_eq!(cmp <= 0, less_equal_num(a, b));
                assert_eq!(cmp > 0, greater_num(a, b));
                assert_eq!(cmp >= 0, greater_equal_num(a, b));
                assert_eq!(less_equal_num(a, b), !greater_num(a, b));
            }
        }
    }

    #[test]
    fn equality_is_value_based_across_kinds() {
        assert!(equals_num(Num::Int(42), Num::Int(42)));
        assert!(equals_num(Num::Float(45.2), Num::Float(45.2)));
        assert!(equals_num(Num::Int(42), Num::Float(42.0)));
        assert!(equals_num(Num::Float(42.0), Num::Int(42)));
        assert!(not_equal_num(Num::Int(42), Num::Float(42.5)));
    }

    #[test]
    fn unary_operators_keep_the_operand_kind() {
        assert_int(negate(Num::Int(3)), -3);
        assert_float(negate(Num::Float(3.5)), -3.5);
        assert_int(abs(Num::Int(-36)), 36);
        assert_float(abs(Num::Float(-36.4)), 36.4);
        assert_int(sign(Num::Int(34)), 1);
        assert_int(sign(Num::Int(-5)), -1);
        assert_float(sign(Num::Float(34.4)), 1.0);
        assert_float(sign(Num::Float(-5.5)), -1.0);
    }

    #[test]
    fn rendering_follows_the_operand_kind() {
        assert_eq!(to_string(Num::Int(42)), "42");
        assert_eq!(to_string(Num::Float(42.12)), "42.12");
    }
}
