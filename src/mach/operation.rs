use crate::error;
use crate::lang::token::{Comparator, Operator};
use crate::lang::{magnitude, Error, Num};
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

/// ## Fixed-point arithmetic on digit sequences
///
/// Operands are aligned by zero padding: fractions on the right, integers
/// on the left. Results are normalized.

pub struct Operation {}

impl Operation {
    pub fn arithmetic(op: Operator, lhs: &Num, rhs: &Num, scale: Option<usize>) -> Result<Num> {
        use Operator::*;
        match op {
            Plus => Ok(Operation::sum(lhs, rhs)),
            Minus => Ok(Operation::subtract(lhs, rhs)),
            Multiply => Ok(Operation::multiply(lhs, rhs)),
            Divide => match scale {
                Some(scale) => Operation::divide(lhs, rhs, scale),
                None => Err(error!(DivisionPrecisionUndefined)),
            },
        }
    }

    pub fn compare(cmp: Comparator, lhs: &Num, rhs: &Num) -> Num {
        use Comparator::*;
        let ord = lhs.cmp(rhs);
        Num::from(match cmp {
            Greater => ord == Ordering::Greater,
            GreaterEqual => ord != Ordering::Less,
            Less => ord == Ordering::Less,
            LessEqual => ord != Ordering::Greater,
        })
    }

    pub fn sum(lhs: &Num, rhs: &Num) -> Num {
        let scale = lhs.fractional_digits().len().max(rhs.fractional_digits().len());
        let (l, r) = (lhs.scaled(scale), rhs.scaled(scale));
        if lhs.is_negative() == rhs.is_negative() {
            return Num::from_scaled(lhs.is_negative(), magnitude::add(&l, &r), scale);
        }
        match magnitude::cmp(&l, &r) {
            Ordering::Less => Num::from_scaled(rhs.is_negative(), magnitude::sub(&r, &l), scale),
            _ => Num::from_scaled(lhs.is_negative(), magnitude::sub(&l, &r), scale),
        }
    }

    pub fn subtract(lhs: &Num, rhs: &Num) -> Num {
        Operation::sum(lhs, &rhs.clone().negate())
    }

    pub fn multiply(lhs: &Num, rhs: &Num) -> Num {
        let (ls, rs) = (lhs.fractional_digits().len(), rhs.fractional_digits().len());
        let digits = magnitude::mul(&lhs.scaled(ls), &rhs.scaled(rs));
        Num::from_scaled(lhs.is_negative() != rhs.is_negative(), digits, ls + rs)
    }

    /// Truncates toward zero after `scale` fractional digits.
    pub fn divide(lhs: &Num, rhs: &Num, scale: usize) -> Result<Num> {
        if rhs.is_zero() {
            return Err(error!(DivisionByZero));
        }
        let (ls, rs) = (lhs.fractional_digits().len(), rhs.fractional_digits().len());
        // lhs/rhs == (l * 10^rs) / (r * 10^ls)
        let mut dividend = lhs.scaled(ls);
        dividend.resize(dividend.len() + rs + scale, 0);
        let mut divisor = rhs.scaled(rs);
        divisor.resize(divisor.len() + ls, 0);
        let digits = magnitude::div(&dividend, &divisor);
        Ok(Num::from_scaled(
            lhs.is_negative() != rhs.is_negative(),
            digits,
            scale,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn num(s: &str) -> Num {
        if let Some(s) = s.strip_prefix('-') {
            s.parse::<Num>().unwrap().negate()
        } else {
            s.parse().unwrap()
        }
    }

    #[test]
    fn test_sum() {
        assert_eq!(Operation::sum(&num("2"), &num("3")), num("5"));
        assert_eq!(Operation::sum(&num("99.5"), &num("0.75")), num("100.25"));
        assert_eq!(Operation::sum(&num("-4"), &num("1.5")), num("-2.5"));
        let five = Operation::sum(&num("2"), &num("3"));
        assert_eq!(five.integer_digits(), &[5]);
        assert!(five.fractional_digits().is_empty());
    }

    #[test]
    fn test_subtract() {
        assert_eq!(Operation::subtract(&num("2"), &num("3")), num("-1"));
        assert_eq!(Operation::subtract(&num("10"), &num("0.01")), num("9.99"));
        assert_eq!(Operation::subtract(&num("-1"), &num("-1")), Num::zero());
        assert!(!Operation::subtract(&num("3"), &num("3")).is_negative());
    }

    #[test]
    fn test_multiply() {
        assert_eq!(Operation::multiply(&num("5"), &num("5")), num("25"));
        assert_eq!(Operation::multiply(&num("1.5"), &num("0.2")), num("0.3"));
        assert_eq!(Operation::multiply(&num("-3"), &num("4")), num("-12"));
        assert_eq!(Operation::multiply(&num("123"), &num("0")), Num::zero());
    }

    #[test]
    fn test_divide() {
        assert_eq!(Operation::divide(&num("1"), &num("4"), 12).unwrap(), num("0.25"));
        assert_eq!(
            Operation::divide(&num("2"), &num("3"), 4).unwrap(),
            num("0.6666")
        );
        assert_eq!(Operation::divide(&num("-7"), &num("2"), 0).unwrap(), num("-3"));
        assert_eq!(
            Operation::divide(&num("0.5"), &num("0.25"), 2).unwrap(),
            num("2")
        );
        assert_eq!(
            Operation::divide(&num("1"), &num("0.0"), 2).unwrap_err().code(),
            ErrorCode::DivisionByZero
        );
    }

    #[test]
    fn test_division_precision_undefined() {
        let e = Operation::arithmetic(Operator::Divide, &num("1"), &num("2"), None).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DivisionPrecisionUndefined);
    }

    #[test]
    fn test_compare() {
        use Comparator::*;
        assert_eq!(Operation::compare(Greater, &num("3"), &num("2")), Num::one());
        assert_eq!(Operation::compare(Greater, &num("2"), &num("2")), Num::zero());
        assert_eq!(Operation::compare(GreaterEqual, &num("2"), &num("2.0")), Num::one());
        assert_eq!(Operation::compare(Less, &num("-1"), &num("0")), Num::one());
        assert_eq!(Operation::compare(LessEqual, &num("0.11"), &num("0.1")), Num::zero());
    }
}
