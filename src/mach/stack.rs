use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    max_len: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(max_len: usize) -> Stack<T> {
        Stack {
            max_len,
            vec: vec![],
        }
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.vec.last_mut()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.max_len {
            return Err(error!(CallStackOverflow));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }
}
