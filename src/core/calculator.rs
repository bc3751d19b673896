//! Integer arithmetic with an explicit divide-by-zero error.
//!
//! `add`, `subtract` and `multiply` wrap on overflow, so they are total over
//! the whole `i32` range. `divide` widens both operands to `f64` and returns
//! [`CalcError::DivisionByZero`] instead of a numeric fallback when the
//! divisor is zero.

use crate::domain::ports::Arithmetic;
use crate::utils::error::CalcError;

pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

pub fn divide(a: i32, b: i32) -> Result<f64, CalcError> {
    if b == 0 {
        return Err(CalcError::DivisionByZero { dividend: a });
    }
    Ok(f64::from(a) / f64::from(b))
}

/// Stateless calculator. Needs no initialization and holds nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }
}

impl Arithmetic for Calculator {
    fn add(&self, a: i32, b: i32) -> i32 {
        add(a, b)
    }

    fn subtract(&self, a: i32, b: i32) -> i32 {
        subtract(a, b)
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        multiply(a, b)
    }

    fn divide(&self, a: i32, b: i32) -> Result<f64, CalcError> {
        divide(a, b)
    }
}
