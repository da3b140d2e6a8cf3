use crate::lang::Num;

/// ## Rotating register stack
///
/// Fixed number of cells addressed by offset from the top. Pushing past
/// capacity silently discards the oldest value, like the X/Y/Z/T stack
/// of a programmable calculator.

#[derive(Debug, Clone)]
pub struct Registers {
    cells: Vec<Num>,
    top: usize,
}

impl Registers {
    pub fn new(size: usize) -> Registers {
        Registers {
            cells: vec![Num::default(); size.max(1)],
            top: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, offset: usize) -> usize {
        (self.top + offset % self.len()) % self.len()
    }

    /// Cell `offset` positions below the top, wrapping.
    pub fn at(&self, offset: usize) -> &Num {
        &self.cells[self.index(offset)]
    }

    pub fn push(&mut self, val: Num) {
        let oldest = self.index(self.len() - 1);
        self.cells[oldest] = Num::default();
        self.roll_down(1);
        let top = self.top;
        self.cells[top] = val;
    }

    /// Inverse of `push`: the top cell is taken and reset, and the next
    /// cell becomes the top.
    pub fn pop(&mut self) -> Num {
        let top = self.top;
        let val = std::mem::take(&mut self.cells[top]);
        self.top = self.index(1);
        val
    }

    /// Move the top pointer `n` cells back without touching contents.
    pub fn roll_down(&mut self, n: usize) {
        let n = n % self.len();
        self.top = (self.top + self.len() - n) % self.len();
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Num::default();
        }
        self.top = 0;
    }

    /// Values from the top down.
    pub fn iter(&self) -> impl Iterator<Item = &Num> + '_ {
        (0..self.len()).map(move |offset| self.at(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Num {
        s.parse().unwrap()
    }

    #[test]
    fn test_starts_zeroed() {
        let r = Registers::new(4);
        assert!(r.iter().all(|n| n.is_zero()));
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut r = Registers::new(4);
        for s in &["1", "2", "3", "4"] {
            r.push(num(s));
        }
        assert_eq!(r.at(0), &num("4"));
        assert_eq!(r.at(3), &num("1"));
        r.push(num("5"));
        assert_eq!(r.at(0), &num("5"));
        assert_eq!(r.at(3), &num("2"));
        assert!(r.iter().all(|n| *n != num("1")));
    }

    #[test]
    fn test_at_wraps() {
        let mut r = Registers::new(4);
        r.push(num("7"));
        assert_eq!(r.at(4), &num("7"));
        assert_eq!(r.at(9), r.at(1));
    }

    #[test]
    fn test_pop() {
        let mut r = Registers::new(4);
        r.push(num("1"));
        r.push(num("2"));
        assert_eq!(r.pop(), num("2"));
        assert_eq!(r.at(0), &num("1"));
        assert!(r.at(3).is_zero());
    }

    #[test]
    fn test_roll_down_then_push() {
        let mut r = Registers::new(4);
        for s in &["1", "2", "3", "4"] {
            r.push(num(s));
        }
        r.roll_down(1);
        assert_eq!(r.at(0), &num("1"));
        assert_eq!(r.at(1), &num("4"));
        r.push(num("9"));
        assert_eq!(r.at(0), &num("9"));
        assert_eq!(r.at(1), &num("1"));
        assert_eq!(r.at(2), &num("4"));
        assert_eq!(r.at(3), &num("3"));
    }

    #[test]
    fn test_zero_size_clamped() {
        let mut r = Registers::new(0);
        assert_eq!(r.len(), 1);
        r.push(num("3"));
        r.push(num("4"));
        assert_eq!(r.at(0), &num("4"));
        assert_eq!(r.at(1), &num("4"));
    }

    #[test]
    fn test_roll_down_full_turn() {
        let mut r = Registers::new(4);
        r.push(num("8"));
        r.roll_down(4);
        assert_eq!(r.at(0), &num("8"));
    }
}
