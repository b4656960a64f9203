// src/numeric/float.rs
//
// Operator family for a left operand of the floating kind.
//
// Overload suffixes name the static type of the right operand. Any
// floating involvement keeps the result floating, except the rounding
// family and truncating division, which produce exact integers as the
// source language requires.

use crate::numeric::Num;

// --- Equality and ordering ---

pub fn equals_float(lhs: f64, rhs: f64) -> bool {
    lhs == rhs
}

/// Cross-kind equality is value-based, mirroring the integer family.
pub fn equals_int(lhs: f64, rhs: i64) -> bool {
    lhs == rhs as f64
}

pub fn equals_num(lhs: f64, rhs: Num) -> bool {
    match rhs {
        Num::Int(rhs) => equals_int(lhs, rhs),
        Num::Float(rhs) => equals_float(lhs, rhs),
    }
}

pub fn not_equal_float(lhs: f64, rhs: f64) -> bool {
    !equals_float(lhs, rhs)
}

pub fn not_equal_int(lhs: f64, rhs: i64) -> bool {
    !equals_int(lhs, rhs)
}

pub fn not_equal_num(lhs: f64, rhs: Num) -> bool {
    !equals_num(lhs, rhs)
}

pub fn compare_to_float(lhs: f64, rhs: f64) -> i64 {
    if lhs < rhs {
        -1
    } else if lhs > rhs {
        1
    } else {
        0
    }
}

pub fn compare_to_int(lhs: f64, rhs: i64) -> i64 {
    compare_to_float(lhs, rhs as f64)
}

pub fn compare_to_num(lhs: f64, rhs: Num) -> i64 {
    match rhs {
        Num::Int(rhs) => compare_to_int(lhs, rhs),
        Num::Float(rhs) => compare_to_float(lhs, rhs),
    }
}

// --- Arithmetic ---

pub fn plus_float(lhs: f64, rhs: f64) -> f64 {
    lhs + rhs
}

pub fn plus_int(lhs: f64, rhs: i64) -> f64 {
    lhs + rhs as f64
}

pub fn plus_num(lhs: f64, rhs: Num) -> f64 {
    match rhs {
        Num::Int(rhs) => plus_int(lhs, rhs),
        Num::Float(rhs) => plus_float(lhs, rhs),
    }
}

pub fn minus_float(lhs: f64, rhs: f64) -> f64 {
    lhs - rhs
}

pub fn minus_int(lhs: f64, rhs: i64) -> f64 {
    lhs - rhs as f64
}

pub fn minus_num(lhs: f64, rhs: Num) -> f64 {
    match rhs {
        Num::Int(rhs) => minus_int(lhs, rhs),
        Num::Float(rhs) => minus_float(lhs, rhs),
    }
}

pub fn times_float(lhs: f64, rhs: f64) -> f64 {
    lhs * rhs
}

pub fn times_int(lhs: f64, rhs: i64) -> f64 {
    lhs * rhs as f64
}

pub fn times_num(lhs: f64, rhs: Num) -> f64 {
    match rhs {
        Num::Int(rhs) => times_int(lhs, rhs),
        Num::Float(rhs) => times_float(lhs, rhs),
    }
}

pub fn div_float(lhs: f64, rhs: f64) -> f64 {
    lhs / rhs
}

pub fn div_int(lhs: f64, rhs: i64) -> f64 {
    lhs / rhs as f64
}

pub fn div_num(lhs: f64, rhs: Num) -> f64 {
    match rhs {
        Num::Int(rhs) => div_int(lhs, rhs),
        Num::Float(rhs) => div_float(lhs, rhs),
    }
}

/// Truncating division: integer result, rounded toward zero in every sign
/// quadrant.
pub fn trunc_div_float(lhs: f64, rhs: f64) -> i64 {
    (lhs / rhs) as i64
}

pub fn trunc_div_int(lhs: f64, rhs: i64) -> i64 {
    (lhs / rhs as f64) as i64
}

pub fn trunc_div_num(lhs: f64, rhs: Num) -> i64 {
    match rhs {
        Num::Int(rhs) => trunc_div_int(lhs, rhs),
        Num::Float(rhs) => trunc_div_float(lhs, rhs),
    }
}

// TODO: floating modulo needs a decision on non-negative result
// adjustment before it can ship.

// --- Relational ---

pub fn less_float(lhs: f64, rhs: f64) -> bool {
    lhs < rhs
}

pub fn less_int(lhs: f64, rhs: i64) -> bool {
    lhs < rhs as f64
}

pub fn less_num(lhs: f64, rhs: Num) -> bool {
    match rhs {
        Num::Int(rhs) => less_int(lhs, rhs),
        Num::Float(rhs) => less_float(lhs, rhs),
    }
}

pub fn less_equal_float(lhs: f64, rhs: f64) -> bool {
    lhs <= rhs
}

pub fn less_equal_int(lhs: f64, rhs: i64) -> bool {
    lhs <= rhs as f64
}

pub fn less_equal_num(lhs: f64, rhs: Num) -> bool {
    match rhs {
        Num::Int(rhs) => less_equal_int(lhs, rhs),
        Num::Float(rhs) => less_equal_float(lhs, rhs),
    }
}

pub fn greater_float(lhs: f64, rhs: f64) -> bool {
    lhs > rhs
}

pub fn greater_int(lhs: f64, rhs: i64) -> bool {
    lhs > rhs as f64
}

pub fn greater_num(lhs: f64, rhs: Num) -> bool {
    match rhs {
        Num::Int(rhs) => greater_int(lhs, rhs),
        Num::Float(rhs) => greater_float(lhs, rhs),
    }
}

pub fn greater_equal_float(lhs: f64, rhs: f64) -> bool {
    lhs >= rhs
}

pub fn greater_equal_int(lhs: f64, rhs: i64) -> bool {
    lhs >= rhs as f64
}

pub fn greater_equal_num(lhs: f64, rhs: Num) -> bool {
    match rhs {
        Num::Int(rhs) => greater_equal_int(lhs, rhs),
        Num::Float(rhs) => greater_equal_float(lhs, rhs),
    }
}

// --- Unary operators and properties ---

pub fn negate(value: f64) -> f64 {
    -value
}

pub fn abs(value: f64) -> f64 {
    value.abs()
}

/// Sign as a floating value: -1.0, 0.0 (or -0.0), 1.0; NaN passes through.
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        value
    }
}

/// True for values below zero and for negative zero.
pub fn is_negative(value: f64) -> bool {
    value.is_sign_negative() && !value.is_nan()
}

pub fn is_nan(value: f64) -> bool {
    value.is_nan()
}

pub fn is_infinite(value: f64) -> bool {
    value.is_infinite()
}

pub fn is_finite(value: f64) -> bool {
    value.is_finite()
}

// --- Rounding (integer results) ---

/// Nearest integer, ties away from zero.
pub fn round(value: f64) -> i64 {
    value.round() as i64
}

pub fn floor(value: f64) -> i64 {
    value.floor() as i64
}

pub fn ceil(value: f64) -> i64 {
    value.ceil() as i64
}

pub fn truncate(value: f64) -> i64 {
    value.trunc() as i64
}

// --- Conversions ---

pub fn to_int(value: f64) -> i64 {
    value.trunc() as i64
}

pub fn to_float(value: f64) -> f64 {
    value
}

/// Source-language rendering: a floating value always shows a decimal
/// point ("4.0", never "4"), and the special values spell out as "NaN",
/// "Infinity" and "-Infinity".
pub fn to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.fract() == 0.0 {
        return format!("{:.1}", value);
    }
    format!("{}", value)
}
