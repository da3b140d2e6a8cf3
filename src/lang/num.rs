use super::Error;
use std::cmp::Ordering;

/// ## Fixed-point decimal
///
/// Digits are stored most significant first. Literals keep their digits
/// exactly as written; values computed by the machine are normalized.
/// Equality and ordering are numeric, so `007` equals `7.0`.

#[derive(Clone)]
pub struct Num {
    negative: bool,
    integer: Vec<u8>,
    fraction: Vec<u8>,
}

impl Num {
    pub fn zero() -> Num {
        Num {
            negative: false,
            integer: vec![0],
            fraction: vec![],
        }
    }

    pub fn one() -> Num {
        Num {
            negative: false,
            integer: vec![1],
            fraction: vec![],
        }
    }

    pub fn integer_digits(&self) -> &[u8] {
        &self.integer
    }

    pub fn fractional_digits(&self) -> &[u8] {
        &self.fraction
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.integer.iter().chain(self.fraction.iter()).all(|d| *d == 0)
    }

    /// Build a normalized value from a magnitude with `scale` fractional
    /// digits at its end.
    pub(crate) fn from_scaled(negative: bool, mut digits: Vec<u8>, scale: usize) -> Num {
        if digits.len() < scale {
            let mut padded = vec![0; scale - digits.len()];
            padded.append(&mut digits);
            digits = padded;
        }
        let mut fraction = digits.split_off(digits.len() - scale);
        while fraction.last() == Some(&0) {
            fraction.pop();
        }
        let lead = digits.iter().take_while(|d| **d == 0).count();
        let mut integer = digits.split_off(lead);
        if integer.is_empty() {
            integer.push(0);
        }
        let mut num = Num {
            negative,
            integer,
            fraction,
        };
        if num.is_zero() {
            num.negative = false;
        }
        num
    }

    /// Integer and fractional digits as one magnitude padded to `scale`
    /// fractional digits.
    pub(crate) fn scaled(&self, scale: usize) -> Vec<u8> {
        debug_assert!(scale >= self.fraction.len());
        let mut digits = Vec::with_capacity(self.integer.len() + scale);
        digits.extend_from_slice(&self.integer);
        digits.extend_from_slice(&self.fraction);
        digits.resize(self.integer.len() + scale, 0);
        digits
    }

    pub(crate) fn negate(mut self) -> Num {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }

    fn cmp_magnitude(&self, other: &Num) -> Ordering {
        let scale = self.fraction.len().max(other.fraction.len());
        magnitude::cmp(&self.scaled(scale), &other.scaled(scale))
    }
}

impl Default for Num {
    fn default() -> Self {
        Num::zero()
    }
}

impl From<bool> for Num {
    fn from(b: bool) -> Self {
        if b {
            Num::one()
        } else {
            Num::zero()
        }
    }
}

impl std::str::FromStr for Num {
    type Err = Error;

    /// Split on the single `.`; absent `.` means no fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut integer = vec![];
        let mut fraction = vec![];
        let mut dot = false;
        for ch in s.chars() {
            if ch == '.' {
                if dot {
                    return Err(error!(MalformedNumber; s));
                }
                dot = true;
                continue;
            }
            let digit = match ch.to_digit(10) {
                Some(d) => d as u8,
                None => return Err(error!(MalformedNumber; s)),
            };
            if dot {
                fraction.push(digit);
            } else {
                integer.push(digit);
            }
        }
        Ok(Num {
            negative: false,
            integer,
            fraction,
        })
    }
}

impl Ord for Num {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a_neg, b_neg) = (self.negative && !self.is_zero(), other.negative && !other.is_zero());
        match (a_neg, b_neg) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl PartialOrd for Num {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Num {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Num {}

impl std::fmt::Debug for Num {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Num({})", self)
    }
}

impl std::fmt::Display for Num {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.negative && !self.is_zero() {
            write!(f, "-")?;
        }
        if self.integer.is_empty() {
            write!(f, "0")?;
        }
        for d in &self.integer {
            write!(f, "{}", d)?;
        }
        if !self.fraction.is_empty() {
            write!(f, ".")?;
            for d in &self.fraction {
                write!(f, "{}", d)?;
            }
        }
        Ok(())
    }
}

/// Unsigned digit-sequence arithmetic, most significant digit first.
pub(crate) mod magnitude {
    use std::cmp::Ordering;

    fn significant(a: &[u8]) -> &[u8] {
        let lead = a.iter().take_while(|d| **d == 0).count();
        &a[lead..]
    }

    pub fn cmp(a: &[u8], b: &[u8]) -> Ordering {
        let (a, b) = (significant(a), significant(b));
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }

    pub fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
        let len = a.len().max(b.len());
        let mut out = Vec::with_capacity(len + 1);
        let mut carry = 0;
        let mut ai = a.iter().rev();
        let mut bi = b.iter().rev();
        for _ in 0..len {
            let sum = ai.next().unwrap_or(&0) + bi.next().unwrap_or(&0) + carry;
            out.push(sum % 10);
            carry = sum / 10;
        }
        if carry > 0 {
            out.push(carry);
        }
        out.reverse();
        out
    }

    /// `a - b` where `a >= b`.
    pub fn sub(a: &[u8], b: &[u8]) -> Vec<u8> {
        debug_assert!(cmp(a, b) != Ordering::Less);
        let mut out = Vec::with_capacity(a.len());
        let mut borrow = 0;
        let mut bi = b.iter().rev();
        for &d in a.iter().rev() {
            let sub = bi.next().unwrap_or(&0) + borrow;
            if d >= sub {
                out.push(d - sub);
                borrow = 0;
            } else {
                out.push(d + 10 - sub);
                borrow = 1;
            }
        }
        out.reverse();
        out
    }

    pub fn mul(a: &[u8], b: &[u8]) -> Vec<u8> {
        let mut acc = vec![0u32; a.len() + b.len()];
        for (i, &x) in a.iter().enumerate().rev() {
            for (j, &y) in b.iter().enumerate().rev() {
                acc[i + j + 1] += x as u32 * y as u32;
            }
        }
        for k in (1..acc.len()).rev() {
            let carry = acc[k] / 10;
            acc[k] %= 10;
            acc[k - 1] += carry;
        }
        acc.into_iter().map(|d| d as u8).collect()
    }

    /// Truncating long division. `b` must not be zero.
    pub fn div(a: &[u8], b: &[u8]) -> Vec<u8> {
        let b = significant(b);
        debug_assert!(!b.is_empty());
        let mut quotient = Vec::with_capacity(a.len());
        let mut rem: Vec<u8> = vec![];
        for &d in a {
            rem.push(d);
            let mut q = 0;
            while cmp(&rem, b) != Ordering::Less {
                rem = sub(&rem, b);
                q += 1;
            }
            quotient.push(q);
        }
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Num {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse() {
        let n = num("3.14");
        assert_eq!(n.integer_digits(), &[3]);
        assert_eq!(n.fractional_digits(), &[1, 4]);
        let n = num("42");
        assert_eq!(n.integer_digits(), &[4, 2]);
        assert!(n.fractional_digits().is_empty());
        let n = num(".5");
        assert!(n.integer_digits().is_empty());
        assert_eq!(n.fractional_digits(), &[5]);
        let n = num("007.10");
        assert_eq!(n.integer_digits(), &[0, 0, 7]);
        assert_eq!(n.fractional_digits(), &[1, 0]);
    }

    #[test]
    fn test_parse_rejects() {
        assert!("3..1".parse::<Num>().is_err());
        assert!("1.2.3".parse::<Num>().is_err());
        assert!("12a".parse::<Num>().is_err());
    }

    #[test]
    fn test_numeric_equality() {
        assert_eq!(num("007.10"), num("7.1"));
        assert_eq!(num("."), Num::zero());
        assert_ne!(num("0.1"), num("1"));
    }

    #[test]
    fn test_ordering() {
        assert!(num("10") > num("9.99"));
        assert!(num("0.25") < num("0.3"));
        assert!(Num::zero().negate() == Num::zero());
        assert!(num("2").negate() < num("1").negate());
        assert!(num("1").negate() < Num::zero());
    }

    #[test]
    fn test_from_scaled_normalizes() {
        let n = Num::from_scaled(false, vec![0, 0, 5, 0, 0], 2);
        assert_eq!(n.integer_digits(), &[5]);
        assert!(n.fractional_digits().is_empty());
        let n = Num::from_scaled(false, vec![5], 3);
        assert_eq!(n.integer_digits(), &[0]);
        assert_eq!(n.fractional_digits(), &[0, 0, 5]);
        let n = Num::from_scaled(true, vec![0, 0], 1);
        assert!(!n.is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(num("3.14").to_string(), "3.14");
        assert_eq!(num(".5").to_string(), "0.5");
        assert_eq!(num("2").negate().to_string(), "-2");
        assert_eq!(Num::default().to_string(), "0");
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(magnitude::add(&[9, 9], &[1]), vec![1, 0, 0]);
        assert_eq!(magnitude::sub(&[1, 0, 0], &[1]), vec![0, 9, 9]);
        assert_eq!(magnitude::mul(&[1, 2], &[1, 2]), vec![0, 1, 4, 4]);
        assert_eq!(magnitude::div(&[1, 4, 4], &[1, 2]), vec![0, 1, 2]);
        assert_eq!(magnitude::cmp(&[0, 0, 3], &[3]), Ordering::Equal);
    }
}
